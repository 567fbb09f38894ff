//! Structured replies and their text rendering.

use crate::config::Config;
use crate::locks::ActiveLock;
use chrono::{DateTime, Duration, FixedOffset, Local, Utc};
use serde::Serialize;

/// Result of handling one command line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Response {
    Locked {
        resource: String,
        expiry: DateTime<Utc>,
    },
    AlreadyLocked {
        resource: String,
        owner: String,
        remaining_secs: i64,
    },
    Unlocked {
        resource: String,
    },
    NotLocked {
        resource: String,
    },
    NotOwner {
        resource: String,
        owner: String,
    },
    Status {
        locks: Vec<ActiveLock>,
    },
    Help {
        default_minutes: u32,
    },
    Usage {
        message: String,
    },
}

impl Response {
    /// Short outcome name, for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Response::Locked { .. } => "locked",
            Response::AlreadyLocked { .. } => "already_locked",
            Response::Unlocked { .. } => "unlocked",
            Response::NotLocked { .. } => "not_locked",
            Response::NotOwner { .. } => "not_owner",
            Response::Status { .. } => "status",
            Response::Help { .. } => "help",
            Response::Usage { .. } => "usage",
        }
    }
}

/// Formats [`Response`]s as user-facing text.
#[derive(Debug, Clone)]
pub struct Renderer {
    time_format: String,
    offset: Option<FixedOffset>,
}

impl Renderer {
    pub fn from_config(config: &Config) -> Self {
        Self {
            time_format: config.time_format.clone(),
            offset: config.display_offset(),
        }
    }

    pub fn render(&self, response: &Response) -> String {
        match response {
            Response::Locked { resource, expiry } => {
                format!("Locked {} until {}", resource, self.format_time(*expiry))
            }
            Response::AlreadyLocked {
                resource,
                owner,
                remaining_secs,
            } => format!(
                "Resource {} is currently locked by {} for the next {}",
                resource,
                owner,
                format_remaining(Duration::seconds(*remaining_secs))
            ),
            Response::Unlocked { .. } => "Resource has been unlocked.".to_string(),
            Response::NotLocked { .. } => "Resource was not locked.".to_string(),
            Response::NotOwner { .. } => {
                "You don't own the lock on that resource. (Add 'force' and try again.)".to_string()
            }
            Response::Status { locks } => self.render_status(locks),
            Response::Help { default_minutes } => render_help(*default_minutes),
            Response::Usage { message } => message.clone(),
        }
    }

    fn render_status(&self, locks: &[ActiveLock]) -> String {
        if locks.is_empty() {
            return "No active locks.".to_string();
        }

        let mut lines = vec![format!("Active locks ({}):", locks.len())];
        for lock in locks {
            lines.push(format!(
                "  {}: locked by {} until {} ({} left)",
                lock.resource,
                lock.owner,
                self.format_time(lock.expiry),
                format_remaining(lock.remaining)
            ));
        }
        lines.join("\n")
    }

    fn format_time(&self, at: DateTime<Utc>) -> String {
        match self.offset {
            Some(offset) => at.with_timezone(&offset).format(&self.time_format).to_string(),
            None => at.with_timezone(&Local).format(&self.time_format).to_string(),
        }
    }
}

fn render_help(default_minutes: u32) -> String {
    [
        "Commands:".to_string(),
        format!(
            "  lock <resource> [minutes]  Lock a resource by name for a duration in minutes (default {})",
            default_minutes
        ),
        "                             e.g. lock HOST_A 10".to_string(),
        "  unlock <resource> [force]  Unlock a resource that you have locked".to_string(),
        "                             e.g. unlock HOST_A".to_string(),
        "  status                     Show all currently-locked resources".to_string(),
        "  help                       Show this message".to_string(),
    ]
    .join("\n")
}

/// Human-readable span: `2d 3h`, `1h 5m`, `12m`, or `45s`.
///
/// Seconds are rounded up to the next minute once the span reaches a
/// minute, so a lock never looks shorter than it is.
pub fn format_remaining(remaining: Duration) -> String {
    let total_secs = remaining.num_seconds().max(0);
    if total_secs < 60 {
        return format!("{}s", total_secs);
    }

    let total_minutes = (total_secs + 59) / 60;
    let minutes = total_minutes % 60;
    let hours = total_minutes / 60;
    let days = hours / 24;

    if days > 0 {
        format!("{}d {}h", days, hours % 24)
    } else if hours > 0 {
        format!("{}h {}m", hours, minutes)
    } else {
        format!("{}m", minutes)
    }
}
