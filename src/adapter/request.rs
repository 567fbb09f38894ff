//! Parsing text commands into registry requests.

use crate::config::Config;
use crate::error::Result;
use chrono::Duration;
use regex::Regex;
use thiserror::Error;

/// A validated command, ready to run against the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// `lock <resource> [minutes]`
    Lock { resource: String, duration: Duration },
    /// `unlock <resource> [force]`
    Unlock { resource: String, force: bool },
    /// `status`
    Status,
    /// `help`
    Help,
}

impl Request {
    /// Command keyword, for logs.
    pub fn action(&self) -> &'static str {
        match self {
            Request::Lock { .. } => "lock",
            Request::Unlock { .. } => "unlock",
            Request::Status => "status",
            Request::Help => "help",
        }
    }
}

/// Why a command line was rejected before reaching the registry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UsageError {
    #[error("Empty command. Try 'help'.")]
    Empty,

    #[error("Could not parse command: {0}")]
    Unparseable(String),

    #[error("Unknown command '{0}'. Try 'help'.")]
    UnknownCommand(String),

    #[error("Please provide a resource name as the first argument")]
    MissingResource,

    #[error("Invalid resource name '{0}'")]
    InvalidResource(String),

    #[error("Duration must be a positive whole number of minutes, got '{0}'")]
    InvalidDuration(String),

    #[error("Duration of {requested} minutes exceeds the maximum of {max} minutes")]
    DurationTooLong { requested: u32, max: u32 },

    #[error("Unexpected argument '{0}'")]
    UnexpectedArgument(String),
}

/// Turns command lines into [`Request`]s using the configured rules.
#[derive(Debug, Clone)]
pub struct RequestParser {
    resource_pattern: Regex,
    default_minutes: u32,
    default_duration: Duration,
    max_minutes: Option<u32>,
}

impl RequestParser {
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self {
            resource_pattern: config.resource_regex()?,
            default_minutes: config.default_duration_minutes,
            default_duration: config.default_duration(),
            max_minutes: config.max_duration_minutes,
        })
    }

    pub fn default_minutes(&self) -> u32 {
        self.default_minutes
    }

    /// Parse one command line.
    ///
    /// Arguments are split with shell quoting rules. The command keyword is
    /// case-insensitive and resource names are lower-cased.
    pub fn parse(&self, line: &str) -> std::result::Result<Request, UsageError> {
        let tokens =
            shell_words::split(line).map_err(|e| UsageError::Unparseable(e.to_string()))?;
        let Some((command, args)) = tokens.split_first() else {
            return Err(UsageError::Empty);
        };

        match command.to_lowercase().as_str() {
            "lock" => self.parse_lock(args),
            "unlock" => self.parse_unlock(args),
            "status" => no_arguments(args).map(|()| Request::Status),
            "help" => no_arguments(args).map(|()| Request::Help),
            _ => Err(UsageError::UnknownCommand(command.clone())),
        }
    }

    fn parse_lock(&self, args: &[String]) -> std::result::Result<Request, UsageError> {
        let resource = self.resource(args.first())?;

        let duration = match args.get(1) {
            Some(raw) => self.requested_duration(raw)?,
            None => self.default_duration,
        };
        no_arguments(args.get(2..).unwrap_or_default())?;

        Ok(Request::Lock { resource, duration })
    }

    // The default is never above the cap; `Config::validate` rejects that.
    fn requested_duration(&self, raw: &str) -> std::result::Result<Duration, UsageError> {
        let minutes = parse_minutes(raw)?;
        if let Some(max) = self.max_minutes
            && minutes > max
        {
            return Err(UsageError::DurationTooLong {
                requested: minutes,
                max,
            });
        }
        Ok(Duration::minutes(i64::from(minutes)))
    }

    fn parse_unlock(&self, args: &[String]) -> std::result::Result<Request, UsageError> {
        let resource = self.resource(args.first())?;

        let force = match args.get(1) {
            Some(flag) if flag.eq_ignore_ascii_case("force") => true,
            Some(other) => return Err(UsageError::UnexpectedArgument(other.clone())),
            None => false,
        };
        no_arguments(args.get(2..).unwrap_or_default())?;

        Ok(Request::Unlock { resource, force })
    }

    fn resource(&self, raw: Option<&String>) -> std::result::Result<String, UsageError> {
        let resource = raw.map(|r| r.trim().to_lowercase()).unwrap_or_default();

        if resource.is_empty() {
            return Err(UsageError::MissingResource);
        }
        if !self.resource_pattern.is_match(&resource) {
            return Err(UsageError::InvalidResource(resource));
        }

        Ok(resource)
    }
}

fn parse_minutes(raw: &str) -> std::result::Result<u32, UsageError> {
    match raw.parse::<u32>() {
        Ok(minutes) if minutes > 0 => Ok(minutes),
        _ => Err(UsageError::InvalidDuration(raw.to_string())),
    }
}

fn no_arguments(args: &[String]) -> std::result::Result<(), UsageError> {
    match args.first() {
        Some(extra) => Err(UsageError::UnexpectedArgument(extra.clone())),
        None => Ok(()),
    }
}
