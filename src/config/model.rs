//! Config struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};

/// Configuration for the command adapter.
///
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Lock settings
    // =========================================================================
    /// Minutes a lock lasts when the `lock` command gives no duration.
    #[serde(default = "default_duration_minutes")]
    pub default_duration_minutes: u32,

    /// Upper bound on a requested duration, in minutes. Unbounded when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_duration_minutes: Option<u32>,

    /// Regex every lower-cased resource name must match.
    #[serde(default = "default_resource_pattern")]
    pub resource_pattern: String,

    // =========================================================================
    // Display settings
    // =========================================================================
    /// chrono strftime format used to show expiry times.
    #[serde(default = "default_time_format")]
    pub time_format: String,

    /// Fixed UTC offset for displayed times. Local time when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_utc_offset_minutes: Option<i32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_duration_minutes: default_duration_minutes(),
            max_duration_minutes: None,
            resource_pattern: default_resource_pattern(),
            time_format: default_time_format(),
            display_utc_offset_minutes: None,
        }
    }
}
