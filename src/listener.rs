//! Handler-object abstraction for event subscribers.

use async_trait::async_trait;

use crate::types::Event;

/// A handler object for one concrete event type.
///
/// The alternative to subscribing a bare callback: implement this trait on a
/// type that carries whatever state the subscriber needs, and register it
/// with [`EventHub::subscribe_listener`](crate::EventHub::subscribe_listener).
///
/// There is no default implementation of [`handle`](Listener::handle); a
/// listener that forgets to provide one is a compile error, not a runtime
/// fault.
///
/// Side effects performed inside `handle` are entirely the implementer's
/// responsibility; the hub neither observes nor reports its outcome.
#[async_trait]
pub trait Listener<E: Event>: Send + Sync {
    /// Consume one published event.
    async fn handle(&self, event: E);
}
