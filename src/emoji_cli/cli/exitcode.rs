//! Process exit codes

/// Success, usage or version output, or a lookup failure already reported
pub const OK: i32 = 0;

/// Unknown command or unexpected failure
pub const FAILURE: i32 = 1;

/// Wrong number of arguments for a command
pub const USAGE: i32 = 2;
