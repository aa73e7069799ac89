//! Frame definitions
//!
//! One element of the transaction log stack.

/// A single frame on the transaction log
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Frame<V> {
    /// Marker pushed by `begin`
    Savepoint,

    /// A pending write
    Write {
        key: String,
        value: V,
        /// What `key` resolved to just before this frame was pushed
        shadowed: Option<V>,
    },

    /// A pending delete
    Remove {
        key: String,
        /// What `key` resolved to just before this frame was pushed
        shadowed: Option<V>,
    },
}

impl<V> Frame<V> {
    /// The key this frame touches, if it carries data
    pub fn key(&self) -> Option<&str> {
        match self {
            Frame::Savepoint => None,
            Frame::Write { key, .. } | Frame::Remove { key, .. } => Some(key.as_str()),
        }
    }

    /// Whether this frame's touched-key set contains `key`
    pub fn touches(&self, key: &str) -> bool {
        self.key() == Some(key)
    }

    /// The value this frame resolves its key to
    ///
    /// Only meaningful when [`touches`](Self::touches) holds; savepoints and
    /// removes both yield None.
    pub fn resolved(&self) -> Option<&V> {
        match self {
            Frame::Write { value, .. } => Some(value),
            Frame::Remove { .. } | Frame::Savepoint => None,
        }
    }

    /// The value this frame hides, for data frames
    pub fn shadowed(&self) -> Option<&V> {
        match self {
            Frame::Write { shadowed, .. } | Frame::Remove { shadowed, .. } => shadowed.as_ref(),
            Frame::Savepoint => None,
        }
    }

    pub fn is_savepoint(&self) -> bool {
        matches!(self, Frame::Savepoint)
    }
}
