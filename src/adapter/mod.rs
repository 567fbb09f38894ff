//! Text command adapter over the lock registry.
//!
//! The adapter owns everything the registry does not: splitting and
//! validating command lines, lower-casing resource names, applying the
//! default duration, and turning outcomes into replies.
//!
//! ```
//! use hostlock::adapter::CommandAdapter;
//! use hostlock::config::Config;
//!
//! let adapter = CommandAdapter::new(&Config::default())?;
//! assert!(adapter.reply("alice", "lock HOST_A 10").starts_with("Locked host_a until"));
//! assert_eq!(
//!     adapter.reply("bob", "unlock host_a"),
//!     "You don't own the lock on that resource. (Add 'force' and try again.)"
//! );
//! # Ok::<(), hostlock::error::HostlockError>(())
//! ```

mod request;
mod response;


pub use request::{Request, RequestParser, UsageError};
pub use response::{Renderer, Response, format_remaining};

use crate::config::Config;
use crate::error::Result;
use crate::locks::{AcquireOutcome, Clock, LockRegistry, ReleaseOutcome, SystemClock};
use std::sync::Arc;
use tracing::{debug, info};

/// Parses commands, runs them against a shared registry, and renders replies.
#[derive(Debug)]
pub struct CommandAdapter<C: Clock = SystemClock> {
    registry: Arc<LockRegistry<C>>,
    parser: RequestParser,
    renderer: Renderer,
}

impl CommandAdapter {
    /// Create an adapter with a fresh wall-clock registry.
    pub fn new(config: &Config) -> Result<Self> {
        Self::with_registry(Arc::new(LockRegistry::new()), config)
    }
}

impl<C: Clock> CommandAdapter<C> {
    /// Create an adapter over an existing registry.
    pub fn with_registry(registry: Arc<LockRegistry<C>>, config: &Config) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            registry,
            parser: RequestParser::from_config(config)?,
            renderer: Renderer::from_config(config),
        })
    }

    pub fn registry(&self) -> &Arc<LockRegistry<C>> {
        &self.registry
    }

    /// Parse and run one command line on behalf of `requester`.
    pub fn handle(&self, requester: &str, line: &str) -> Response {
        match self.parser.parse(line) {
            Ok(request) => self.execute(requester, request),
            Err(err) => {
                debug!(requester, line, error = %err, "rejected command");
                Response::Usage {
                    message: err.to_string(),
                }
            }
        }
    }

    /// Run an already-parsed request.
    pub fn execute(&self, requester: &str, request: Request) -> Response {
        let action = request.action();

        let response = match request {
            Request::Lock { resource, duration } => {
                match self.registry.acquire(&resource, requester, duration) {
                    AcquireOutcome::Granted { expiry } => Response::Locked { resource, expiry },
                    AcquireOutcome::Denied { owner, remaining } => Response::AlreadyLocked {
                        resource,
                        owner,
                        remaining_secs: remaining.num_seconds(),
                    },
                }
            }
            Request::Unlock { resource, force } => {
                match self.registry.release(&resource, requester, force) {
                    ReleaseOutcome::Released => Response::Unlocked { resource },
                    ReleaseOutcome::NotLocked => Response::NotLocked { resource },
                    ReleaseOutcome::Forbidden { owner } => Response::NotOwner { resource, owner },
                }
            }
            Request::Status => {
                let mut locks = self.registry.list_active();
                locks.sort_by(|a, b| a.resource.cmp(&b.resource));
                Response::Status { locks }
            }
            Request::Help => Response::Help {
                default_minutes: self.parser.default_minutes(),
            },
        };

        info!(requester, action, outcome = response.kind(), "handled command");
        response
    }

    /// Render a response as text.
    pub fn render(&self, response: &Response) -> String {
        self.renderer.render(response)
    }

    /// Handle a command line and render the reply.
    pub fn reply(&self, requester: &str, line: &str) -> String {
        self.render(&self.handle(requester, line))
    }
}
