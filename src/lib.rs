//! hostlock: time-bounded exclusive locks on named shared resources.
//!
//! The [`locks::LockRegistry`] holds the state and enforces ownership and
//! expiry. The [`adapter::CommandAdapter`] sits in front of it and speaks
//! plain-text commands (`lock`, `unlock`, `status`, `help`).

pub mod adapter;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod locks;
pub mod logging;
