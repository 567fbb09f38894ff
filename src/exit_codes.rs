//! Exit code constants for the hostlock CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unknown subcommand input)
//! - 2: Configuration error (unreadable or invalid config file)
//! - 3: I/O failure (reading commands or writing replies)
//! - 4: Internal error (a bug in hostlock)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or invalid input.
pub const USER_ERROR: i32 = 1;

/// Configuration file could not be read, parsed, or validated.
pub const CONFIG_ERROR: i32 = 2;

/// Reading from stdin or writing to stdout failed.
pub const IO_FAILURE: i32 = 3;

/// Something hostlock should never do, such as failing to encode a reply.
pub const INTERNAL_ERROR: i32 = 4;
