//! Configuration for TallyKV
//!
//! Centralized configuration with sensible defaults.

/// Main configuration for a TallyKV database instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Lifecycle Configuration
    // -------------------------------------------------------------------------
    /// Whether `clear_all` also empties the value-count index.
    /// When false, counts observed before the reset keep being reported.
    pub reset_index_on_clear: bool,

    // -------------------------------------------------------------------------
    // Commit Configuration
    // -------------------------------------------------------------------------
    /// Whether committing a delete removes the key from the base table.
    /// When false, the key stays behind as a tombstone entry.
    pub purge_tombstones_on_commit: bool,

    // -------------------------------------------------------------------------
    // Shell Configuration
    // -------------------------------------------------------------------------
    /// Echo every input line to the output before its response
    pub echo_commands: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            reset_index_on_clear: true,
            purge_tombstones_on_commit: false,
            echo_commands: false,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set whether `clear_all` resets the value-count index
    pub fn reset_index_on_clear(mut self, reset: bool) -> Self {
        self.config.reset_index_on_clear = reset;
        self
    }

    /// Set whether committed deletes remove keys instead of leaving tombstones
    pub fn purge_tombstones_on_commit(mut self, purge: bool) -> Self {
        self.config.purge_tombstones_on_commit = purge;
        self
    }

    /// Set whether the shell echoes input lines
    pub fn echo_commands(mut self, echo: bool) -> Self {
        self.config.echo_commands = echo;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
