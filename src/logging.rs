//! Logging setup for the hostlock binary.
//!
//! Logs go to stderr so replies on stdout stay machine-readable.

use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive, e.g. `hostlock=debug`.
pub const LOG_ENV_VAR: &str = "HOSTLOCK_LOG";

/// Default filter directive for a given `-v` count.
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "hostlock=warn",
        1 => "hostlock=info",
        _ => "hostlock=debug",
    }
}

/// Install the global subscriber. `HOSTLOCK_LOG` wins over `verbosity`.
///
/// Calling this twice is harmless; the second call is ignored.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
