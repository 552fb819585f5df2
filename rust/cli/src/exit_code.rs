//! Process exit codes returned by [`crate::run`].

/// Command completed.
pub const SUCCESS: i32 = 0;

/// Bad arguments, unreadable input, or a state the engine refused.
pub const ERROR: i32 = 2;
