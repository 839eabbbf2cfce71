//! Subscription records and the type-erasure seam between the hub's
//! heterogeneous registry and concretely typed handlers.
//!
//! The registry holds subscriptions for many different event types in one
//! collection, so each handler is stored behind [`ErasedHandler`]. Recovering
//! the concrete type happens per delivery: the erased handler attempts a
//! downcast of the runtime event and reports no-match by returning `None`,
//! which the dispatch task treats as "this subscriber does not apply".

use std::any::Any;
use std::sync::Arc;

use futures::future::BoxFuture;

use crate::listener::Listener;
use crate::types::{Event, HandlerKind, SubscriptionId};

/// Stored shape of a bare callback for one event type.
pub(crate) type Callback<E> = dyn Fn(E) + Send + Sync;

/// The two handler shapes a subscription can carry, for one concrete event
/// type `E`.
pub(crate) enum TypedHandler<E: Event> {
    Callback(Arc<Callback<E>>),
    Listener(Arc<dyn Listener<E>>),
}

impl<E: Event> TypedHandler<E> {
    pub(crate) fn kind(&self) -> HandlerKind {
        match self {
            TypedHandler::Callback(_) => HandlerKind::Callback,
            TypedHandler::Listener(_) => HandlerKind::Listener,
        }
    }
}

/// Object-safe view over a typed handler, held by the registry.
pub(crate) trait ErasedHandler: Send + Sync {
    /// Attempt to deliver `event` to this handler.
    ///
    /// Returns the delivery future when the runtime event type matches the
    /// type the handler was registered for, `None` otherwise.
    fn deliver(&self, event: Box<dyn Any + Send>) -> Option<BoxFuture<'static, ()>>;
}

impl<E: Event> ErasedHandler for TypedHandler<E> {
    fn deliver(&self, event: Box<dyn Any + Send>) -> Option<BoxFuture<'static, ()>> {
        let event = *event.downcast::<E>().ok()?;
        match self {
            TypedHandler::Listener(listener) => {
                let listener = Arc::clone(listener);
                Some(Box::pin(async move { listener.handle(event).await }))
            }
            TypedHandler::Callback(callback) => {
                let callback = Arc::clone(callback);
                Some(Box::pin(async move { (*callback)(event) }))
            }
        }
    }
}

/// One entry in the hub's registry: an identifier, the handler shape
/// discriminator, and the erased handler itself.
#[derive(Clone)]
pub(crate) struct Subscription {
    pub(crate) id: SubscriptionId,
    pub(crate) kind: HandlerKind,
    pub(crate) handler: Arc<dyn ErasedHandler>,
}
