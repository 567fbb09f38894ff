//! Default values for configuration fields.

/// Default lock duration when a `lock` command names none.
pub const DEFAULT_DURATION_MINUTES: u32 = 60;

/// Accepted resource names, checked after lower-casing.
pub const DEFAULT_RESOURCE_PATTERN: &str = r"^[a-z0-9][a-z0-9._-]*$";

/// Expiry display format, e.g. `Mon 15:04`.
pub const DEFAULT_TIME_FORMAT: &str = "%a %H:%M";

/// Largest accepted display offset magnitude (exclusive), in minutes.
pub const MAX_OFFSET_MINUTES: i32 = 24 * 60;

// Default value functions for serde
pub(crate) fn default_duration_minutes() -> u32 {
    DEFAULT_DURATION_MINUTES
}
pub(crate) fn default_resource_pattern() -> String {
    DEFAULT_RESOURCE_PATTERN.to_string()
}
pub(crate) fn default_time_format() -> String {
    DEFAULT_TIME_FORMAT.to_string()
}
