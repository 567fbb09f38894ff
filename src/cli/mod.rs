//! CLI argument parsing for hostlock.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// hostlock: exclusive, time-bounded locks on shared hosts and environments.
///
/// Locks live in memory for the life of one `shell` session. Each input line
/// is a command such as `lock host_a 30`, optionally prefixed with the
/// caller's identity (`alice: unlock host_a`).
#[derive(Parser, Debug)]
#[command(name = "hostlock")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to a YAML config file (overrides HOSTLOCK_CONFIG).
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug). HOSTLOCK_LOG overrides.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for hostlock.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Read lock commands from stdin, one per line, and print replies.
    ///
    /// Lines look like `[user:] command`; the space after the colon is
    /// optional. Blank lines and lines starting
    /// with `#` are skipped.
    Shell(ShellArgs),

    /// Configuration commands.
    ///
    /// Show or check the effective configuration.
    Config(ConfigCommand),
}

/// Arguments for the `shell` command.
#[derive(Parser, Debug)]
pub struct ShellArgs {
    /// Identity for lines without a `user:` prefix. Defaults to `$USER@host`.
    #[arg(short, long)]
    pub user: Option<String>,

    /// Print each reply as a JSON object instead of text.
    #[arg(long)]
    pub json: bool,
}

/// Config subcommands.
#[derive(Parser, Debug)]
pub struct ConfigCommand {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Available config actions.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the effective configuration as YAML.
    Show,

    /// Validate the configuration and report where it came from.
    Check,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
