//! The lock registry and its three operations.

use super::clock::{Clock, SystemClock};
use super::types::{AcquireOutcome, ActiveLock, Lock, ReleaseOutcome};
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use tracing::debug;

/// Registry of resource locks.
///
/// Resource names are used as given; callers are expected to normalize case
/// before reaching the registry. The registry is `Send + Sync` and meant to
/// be shared behind an `Arc`.
#[derive(Debug)]
pub struct LockRegistry<C: Clock = SystemClock> {
    locks: Mutex<HashMap<String, Lock>>,
    clock: C,
}

impl LockRegistry {
    /// Create an empty registry backed by the wall clock.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for LockRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> LockRegistry<C> {
    /// Create an empty registry reading time from `clock`.
    pub fn with_clock(clock: C) -> Self {
        Self {
            locks: Mutex::new(HashMap::new()),
            clock,
        }
    }

    // Every mutation is a single insert or remove, so a panic elsewhere
    // cannot leave the map half-written.
    fn state(&self) -> MutexGuard<'_, HashMap<String, Lock>> {
        self.locks.lock().unwrap_or_else(|poison| poison.into_inner())
    }

    /// Try to take exclusive ownership of `resource` for `duration`.
    ///
    /// A free resource (no record, or an expired one) is granted to
    /// `requester` and any stale record is overwritten. A held resource is
    /// denied, including when `requester` already holds it: locks are not
    /// renewed by acquiring again.
    pub fn acquire(&self, resource: &str, requester: &str, duration: Duration) -> AcquireOutcome {
        let mut locks = self.state();
        let now = self.clock.now();

        if let Some(existing) = locks.get(resource)
            && existing.is_held_at(now)
        {
            debug!(
                resource,
                requester,
                owner = %existing.owner,
                "acquire denied"
            );
            return AcquireOutcome::Denied {
                owner: existing.owner.clone(),
                remaining: existing.remaining_at(now),
            };
        }

        let expiry = expiry_after(now, duration);
        locks.insert(
            resource.to_string(),
            Lock {
                resource: resource.to_string(),
                owner: requester.to_string(),
                expiry,
            },
        );
        debug!(resource, requester, %expiry, "acquire granted");

        AcquireOutcome::Granted { expiry }
    }

    /// Remove the record for `resource`.
    ///
    /// Only the owner may release unless `force` is set. Expiry is not
    /// consulted, so releasing an expired record simply clears it.
    pub fn release(&self, resource: &str, requester: &str, force: bool) -> ReleaseOutcome {
        let mut locks = self.state();

        let Some(existing) = locks.get(resource) else {
            return ReleaseOutcome::NotLocked;
        };

        if existing.owner != requester && !force {
            debug!(resource, requester, owner = %existing.owner, "release forbidden");
            return ReleaseOutcome::Forbidden {
                owner: existing.owner.clone(),
            };
        }

        if let Some(removed) = locks.remove(resource) {
            debug!(resource, requester, owner = %removed.owner, force, "released");
        }
        ReleaseOutcome::Released
    }

    /// Snapshot of every lock still held right now.
    ///
    /// Order is unspecified. Expired records are skipped but left in place.
    /// Each entry's `remaining` is measured from the same clock read that
    /// decided it was held.
    pub fn list_active(&self) -> Vec<ActiveLock> {
        let locks = self.state();
        let now = self.clock.now();

        locks
            .values()
            .filter(|lock| lock.is_held_at(now))
            .map(|lock| ActiveLock::at(lock, now))
            .collect()
    }
}

fn expiry_after(now: DateTime<Utc>, duration: Duration) -> DateTime<Utc> {
    now.checked_add_signed(duration)
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}
