//! Implementation of the `hostlock shell` command.
//!
//! Reads one command per line from stdin and writes one reply per command to
//! stdout. All lines in a session share one registry, so the session is the
//! lifetime of every lock taken in it.

use crate::cli::ShellArgs;
use hostlock::adapter::{CommandAdapter, Response};
use hostlock::config::Config;
use hostlock::error::{HostlockError, Result};
use hostlock::locks::{Clock, default_identity};
use serde::Serialize;
use std::io::{self, BufRead, Write};
use std::path::Path;
use tracing::info;

/// One reply in `--json` mode.
#[derive(Serialize)]
struct JsonReply<'a> {
    user: &'a str,
    #[serde(flatten)]
    response: &'a Response,
}

pub fn cmd_shell(args: ShellArgs, config_path: Option<&Path>) -> Result<()> {
    let config = Config::resolve(config_path)?;
    let adapter = CommandAdapter::new(&config)?;
    let default_user = args.user.unwrap_or_else(default_identity);

    info!(user = %default_user, "shell session started");

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(
        &adapter,
        &default_user,
        args.json,
        stdin.lock(),
        stdout.lock(),
    )
}

/// Feed every line of `input` through `adapter`, writing replies to `output`.
pub(crate) fn run_session<C, R, W>(
    adapter: &CommandAdapter<C>,
    default_user: &str,
    json: bool,
    input: R,
    mut output: W,
) -> Result<()>
where
    C: Clock,
    R: BufRead,
    W: Write,
{
    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let (user, command) = split_identity(line);
        let user = user.unwrap_or(default_user);
        let response = adapter.handle(user, command);

        if json {
            let record = JsonReply {
                user,
                response: &response,
            };
            let encoded = serde_json::to_string(&record).map_err(|e| {
                HostlockError::Internal(format!("failed to serialize reply: {}", e))
            })?;
            writeln!(output, "{}", encoded)?;
        } else {
            writeln!(output, "{}", adapter.render(&response))?;
        }
        output.flush()?;
    }

    Ok(())
}

/// Split an optional `user:` prefix off a command line.
///
/// The prefix is everything before the first `:` in the first word, so both
/// `alice: lock a` and `alice:lock a` name alice.
fn split_identity(line: &str) -> (Option<&str>, &str) {
    match line.split_once(':') {
        Some((user, rest)) if !user.is_empty() && !user.contains(char::is_whitespace) => {
            (Some(user), rest.trim_start())
        }
        _ => (None, line),
    }
}
