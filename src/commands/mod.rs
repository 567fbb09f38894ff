//! Command implementations for hostlock.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations.

mod config_cmd;
mod shell;

use crate::cli::{Cli, Command, ConfigAction};
use hostlock::error::Result;

/// Dispatch a command to its implementation.
pub fn dispatch(cli: Cli) -> Result<()> {
    let config_path = cli.config.as_deref();

    match cli.command {
        Command::Shell(args) => shell::cmd_shell(args, config_path),
        Command::Config(config_cmd) => match config_cmd.action {
            ConfigAction::Show => config_cmd::cmd_config_show(config_path),
            ConfigAction::Check => config_cmd::cmd_config_check(config_path),
        },
    }
}
