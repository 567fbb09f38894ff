//! Tests for the lock registry.

use super::*;
use chrono::{Duration, TimeZone, Utc};
use std::sync::{Arc, Barrier};
use std::thread;

fn manual_registry() -> (Arc<ManualClock>, LockRegistry<Arc<ManualClock>>) {
    let start = Utc.with_ymd_and_hms(2024, 3, 4, 9, 0, 0).unwrap();
    let clock = Arc::new(ManualClock::new(start));
    let registry = LockRegistry::with_clock(Arc::clone(&clock));
    (clock, registry)
}

#[test]
fn test_acquire_free_resource_is_granted() {
    let (clock, registry) = manual_registry();

    let outcome = registry.acquire("host_a", "alice", Duration::minutes(10));

    assert_eq!(
        outcome,
        AcquireOutcome::Granted {
            expiry: clock.now() + Duration::minutes(10)
        }
    );
}

#[test]
fn test_acquire_held_resource_is_denied_with_remaining_time() {
    let (clock, registry) = manual_registry();
    registry.acquire("host_a", "alice", Duration::minutes(10));

    clock.advance(Duration::minutes(4));
    let outcome = registry.acquire("host_a", "bob", Duration::minutes(30));

    assert_eq!(
        outcome,
        AcquireOutcome::Denied {
            owner: "alice".to_string(),
            remaining: Duration::minutes(6),
        }
    );
}

#[test]
fn test_reacquiring_own_lock_is_denied_not_renewed() {
    let registry = LockRegistry::new();

    let first = registry.acquire("host_a", "alice", Duration::minutes(60));
    let second = registry.acquire("host_a", "alice", Duration::minutes(60));

    assert!(first.is_granted());
    assert!(matches!(second, AcquireOutcome::Denied { ref owner, .. } if owner == "alice"));

    // The first expiry is untouched.
    let active = registry.list_active();
    assert_eq!(active.len(), 1);
    let AcquireOutcome::Granted { expiry } = first else {
        unreachable!()
    };
    assert_eq!(active[0].expiry, expiry);
}

#[test]
fn test_expired_lock_can_be_taken_by_someone_else() {
    let registry = LockRegistry::new();

    registry.acquire("host_a", "alice", Duration::milliseconds(1));
    thread::sleep(std::time::Duration::from_millis(5));
    let outcome = registry.acquire("host_a", "bob", Duration::minutes(60));

    assert!(outcome.is_granted());
    let active = registry.list_active();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].owner, "bob");
}

#[test]
fn test_lock_expiring_exactly_now_is_free() {
    let (clock, registry) = manual_registry();
    registry.acquire("host_a", "alice", Duration::minutes(5));

    clock.advance(Duration::minutes(5));

    assert!(registry.list_active().is_empty());
    assert!(registry.acquire("host_a", "bob", Duration::minutes(5)).is_granted());
}

#[test]
fn test_lock_one_instant_before_expiry_is_held() {
    let (clock, registry) = manual_registry();
    registry.acquire("host_a", "alice", Duration::minutes(5));

    clock.advance(Duration::minutes(5) - Duration::nanoseconds(1));

    assert_eq!(registry.list_active().len(), 1);
    assert!(!registry.acquire("host_a", "bob", Duration::minutes(5)).is_granted());
}

#[test]
fn test_release_is_gated_on_ownership() {
    let registry = LockRegistry::new();
    registry.acquire("host_a", "alice", Duration::minutes(10));

    assert_eq!(
        registry.release("host_a", "bob", false),
        ReleaseOutcome::Forbidden {
            owner: "alice".to_string()
        }
    );
    assert_eq!(registry.release("host_a", "bob", true), ReleaseOutcome::Released);
    assert_eq!(registry.release("host_a", "bob", true), ReleaseOutcome::NotLocked);
}

#[test]
fn test_owner_can_release_without_force() {
    let registry = LockRegistry::new();
    registry.acquire("host_a", "alice", Duration::minutes(10));

    assert_eq!(registry.release("host_a", "alice", false), ReleaseOutcome::Released);
    assert!(registry.list_active().is_empty());
}

#[test]
fn test_release_unlocked_resource_changes_nothing() {
    let registry = LockRegistry::new();

    assert_eq!(registry.release("unused", "anyone", false), ReleaseOutcome::NotLocked);
    assert!(registry.list_active().is_empty());
    assert!(registry.acquire("unused", "alice", Duration::minutes(1)).is_granted());
}

#[test]
fn test_release_of_expired_record_clears_it() {
    let (clock, registry) = manual_registry();
    registry.acquire("host_a", "alice", Duration::minutes(1));
    clock.advance(Duration::minutes(2));

    assert_eq!(registry.release("host_a", "alice", false), ReleaseOutcome::Released);
    assert_eq!(registry.release("host_a", "alice", false), ReleaseOutcome::NotLocked);
}

#[test]
fn test_release_of_expired_record_still_checks_owner() {
    let (clock, registry) = manual_registry();
    registry.acquire("host_a", "alice", Duration::minutes(1));
    clock.advance(Duration::minutes(2));

    assert!(matches!(
        registry.release("host_a", "bob", false),
        ReleaseOutcome::Forbidden { .. }
    ));
}

#[test]
fn test_list_active_excludes_expired() {
    let registry = LockRegistry::new();

    registry.acquire("host_a", "alice", Duration::milliseconds(1));
    registry.acquire("host_b", "bob", Duration::minutes(30));
    thread::sleep(std::time::Duration::from_millis(5));

    let active = registry.list_active();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].resource, "host_b");
    assert_eq!(active[0].owner, "bob");
}

#[test]
fn test_list_active_reports_remaining_from_registry_clock() {
    let (clock, registry) = manual_registry();
    registry.acquire("host_a", "alice", Duration::minutes(10));
    clock.advance(Duration::minutes(3));

    let active = registry.list_active();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].remaining, Duration::minutes(7));
    assert_eq!(active[0].expiry, clock.now() + Duration::minutes(7));
}

#[test]
fn test_list_active_does_not_delete_expired_records() {
    let (clock, registry) = manual_registry();
    registry.acquire("host_a", "alice", Duration::minutes(1));
    clock.advance(Duration::minutes(2));

    assert!(registry.list_active().is_empty());

    // The stale record is still there for release to find.
    assert_eq!(registry.release("host_a", "alice", false), ReleaseOutcome::Released);
}

#[test]
fn test_resources_are_independent() {
    let registry = LockRegistry::new();

    assert!(registry.acquire("host_a", "alice", Duration::minutes(5)).is_granted());
    assert!(registry.acquire("host_b", "bob", Duration::minutes(5)).is_granted());

    let mut names: Vec<String> = registry
        .list_active()
        .into_iter()
        .map(|l| l.resource)
        .collect();
    names.sort();
    assert_eq!(names, ["host_a", "host_b"]);
}

#[test]
fn test_huge_duration_saturates_instead_of_panicking() {
    let registry = LockRegistry::new();

    let outcome = registry.acquire("host_a", "alice", Duration::MAX);

    assert!(outcome.is_granted());
    assert_eq!(registry.list_active().len(), 1);
}

#[test]
fn test_concurrent_acquire_grants_exactly_once() {
    const CALLERS: usize = 32;

    let registry = Arc::new(LockRegistry::new());
    let barrier = Arc::new(Barrier::new(CALLERS));

    let handles: Vec<_> = (0..CALLERS)
        .map(|i| {
            let registry = Arc::clone(&registry);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                registry.acquire("host_a", &format!("caller-{}", i), Duration::minutes(60))
            })
        })
        .collect();

    let outcomes: Vec<AcquireOutcome> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    let granted = outcomes.iter().filter(|o| o.is_granted()).count();
    assert_eq!(granted, 1);

    // Every denial names the single winner.
    let active = registry.list_active();
    let winner = &active[0].owner;
    for outcome in &outcomes {
        if let AcquireOutcome::Denied { owner, .. } = outcome {
            assert_eq!(owner, winner);
        }
    }
}

#[test]
fn test_concurrent_force_release_releases_exactly_once() {
    const CALLERS: usize = 16;

    let registry = Arc::new(LockRegistry::new());
    registry.acquire("host_a", "alice", Duration::minutes(60));
    let barrier = Arc::new(Barrier::new(CALLERS));

    let handles: Vec<_> = (0..CALLERS)
        .map(|i| {
            let registry = Arc::clone(&registry);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                registry.release("host_a", &format!("caller-{}", i), true)
            })
        })
        .collect();

    let released = handles
        .into_iter()
        .map(|h| h.join().unwrap())
        .filter(|o| *o == ReleaseOutcome::Released)
        .count();
    assert_eq!(released, 1);
}

#[test]
fn test_manual_clock_set_and_advance() {
    let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let clock = ManualClock::new(start);

    clock.advance(Duration::seconds(90));
    assert_eq!(clock.now(), start + Duration::seconds(90));

    clock.set(start);
    assert_eq!(clock.now(), start);
}

#[test]
fn test_default_identity_has_user_and_host() {
    let identity = default_identity();
    assert!(identity.contains('@'));
    assert!(!identity.starts_with('@'));
}
