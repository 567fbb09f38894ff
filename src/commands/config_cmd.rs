//! Implementation of the `hostlock config` commands.

use hostlock::config::Config;
use hostlock::error::Result;
use std::path::Path;

/// Print the effective configuration as YAML.
pub fn cmd_config_show(explicit: Option<&Path>) -> Result<()> {
    let config = Config::resolve(explicit)?;

    println!("# source: {}", source_label(explicit));
    print!("{}", config.to_yaml()?);
    Ok(())
}

/// Validate the configuration and report its source.
pub fn cmd_config_check(explicit: Option<&Path>) -> Result<()> {
    let config = Config::resolve(explicit)?;

    println!("Configuration OK ({})", source_label(explicit));
    println!("  default duration: {} minutes", config.default_duration_minutes);
    match config.max_duration_minutes {
        Some(max) => println!("  max duration:     {} minutes", max),
        None => println!("  max duration:     unlimited"),
    }
    println!("  resource pattern: {}", config.resource_pattern);
    Ok(())
}

fn source_label(explicit: Option<&Path>) -> String {
    match Config::config_path(explicit) {
        Some(path) => path.display().to_string(),
        None => "built-in defaults".to_string(),
    }
}
