//! In-process typed publish/subscribe event hub.
//!
//! Independent components register interest in strongly-typed event payloads
//! and are notified asynchronously when such events are published, without
//! publisher and subscriber knowing about each other. Routing is purely by
//! the runtime type of the published value; delivery runs on an injectable
//! execution context, off the publisher's thread.
//!
//! This is a single-process, best-effort, fire-and-forget mechanism: no
//! persistence, no cross-type ordering, no acknowledgment, no retries.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use event_hub::{Event, EventHub, TokioExecutor};
//!
//! #[derive(Clone, Debug)]
//! struct Incremented {
//!     amount: i64,
//! }
//!
//! impl Event for Incremented {}
//!
//! #[tokio::main]
//! async fn main() {
//!     let hub = EventHub::new(Arc::new(TokioExecutor::current()));
//!
//!     let id = hub.subscribe(|event: Incremented| {
//!         println!("counter went up by {}", event.amount);
//!     });
//!
//!     hub.trigger(Incremented { amount: 5 });
//!     hub.unsubscribe(&id);
//! }
//! ```
//!
//! Handler objects carrying state implement [`Listener`] and register
//! through [`EventHub::subscribe_listener`].

pub mod error;
pub mod executor;
pub mod hub;
pub mod listener;
pub mod logging;
pub mod types;

// Internal modules
mod subscription;

// Re-export commonly used types
pub use error::{Error, Result};
pub use executor::{Executor, TokioExecutor};
pub use hub::EventHub;
pub use listener::Listener;
pub use logging::{setup_logging, LoggingConfig};
pub use types::{Event, HandlerKind, SubscriptionId};

/// Re-export of common types for easier use.
pub mod prelude {
    pub use crate::{
        Error, Event, EventHub, Executor, HandlerKind, Listener, Result, SubscriptionId,
        TokioExecutor,
    };
}
