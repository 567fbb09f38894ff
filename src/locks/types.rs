//! Lock records and the outcomes of registry operations.

use chrono::{DateTime, Duration, Utc};
use serde::{Serialize, Serializer};

/// Ownership record for one resource.
///
/// A record only means "held" while `expiry` is in the future; see
/// [`Lock::is_held_at`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lock {
    /// Lower-cased resource name; the registry key.
    pub resource: String,

    /// Identity of the caller that acquired the lock.
    pub owner: String,

    /// Instant after which the lock no longer holds.
    pub expiry: DateTime<Utc>,
}

impl Lock {
    /// Whether the lock is still held at `now`. A lock expiring exactly at
    /// `now` is already free.
    pub fn is_held_at(&self, now: DateTime<Utc>) -> bool {
        self.expiry > now
    }

    /// Time left until expiry, measured from `now`.
    pub fn remaining_at(&self, now: DateTime<Utc>) -> Duration {
        self.expiry.signed_duration_since(now)
    }
}

/// Result of [`LockRegistry::acquire`](super::LockRegistry::acquire).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AcquireOutcome {
    /// The caller now holds the resource until `expiry`.
    Granted { expiry: DateTime<Utc> },

    /// The resource is held by `owner` (possibly the caller) for `remaining`.
    Denied { owner: String, remaining: Duration },
}

impl AcquireOutcome {
    pub fn is_granted(&self) -> bool {
        matches!(self, AcquireOutcome::Granted { .. })
    }
}

/// Result of [`LockRegistry::release`](super::LockRegistry::release).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReleaseOutcome {
    /// The record was removed.
    Released,

    /// There was no record for the resource.
    NotLocked,

    /// The record belongs to `owner` and `force` was not set.
    Forbidden { owner: String },
}

/// A lock that was held at the time of listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActiveLock {
    pub resource: String,
    pub owner: String,
    pub expiry: DateTime<Utc>,

    /// Time left, measured from the instant the listing was taken.
    #[serde(rename = "remaining_secs", serialize_with = "serialize_secs")]
    pub remaining: Duration,
}

impl ActiveLock {
    /// Snapshot `lock` as seen at `now`.
    pub fn at(lock: &Lock, now: DateTime<Utc>) -> Self {
        Self {
            resource: lock.resource.clone(),
            owner: lock.owner.clone(),
            expiry: lock.expiry,
            remaining: lock.remaining_at(now),
        }
    }
}

fn serialize_secs<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_i64(duration.num_seconds())
}
