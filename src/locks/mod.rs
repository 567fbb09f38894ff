//! Lock registry for named shared resources.
//!
//! A resource (a host, an environment, anything with a name) is either
//! **held** by exactly one owner until an absolute expiry, or **free**.
//!
//! # Expiry
//!
//! Expiry is evaluated lazily against the clock on every operation. There is
//! no background sweep: an expired record may stay in the map until the next
//! `acquire` or `release` of that resource, but no operation ever reports it
//! as held.
//!
//! # Concurrency
//!
//! All operations run under one mutex, so concurrent callers observe a single
//! total order of acquisitions and releases. Callers only ever receive owned
//! copies of lock state.

mod clock;
mod owner;
mod registry;
mod types;

#[cfg(test)]
mod tests;

pub use clock::{Clock, ManualClock, SystemClock};
pub use owner::default_identity;
pub use registry::LockRegistry;
pub use types::{AcquireOutcome, ActiveLock, Lock, ReleaseOutcome};
