//! Value-Count Index Module
//!
//! Answers "how many keys currently hold value V" in constant time.
//!
//! ## Responsibilities
//! - Incremental increment/decrement as writes and deletes are applied
//! - Exact reversal of those adjustments when frames are undone
//! - Retain entries that fall to zero, so a value once observed always
//!   reports a number

mod counts;

pub use counts::ValueIndex;
