//! The event hub: subscription registry and type-routed asynchronous
//! dispatch.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::debug;

use crate::executor::Executor;
use crate::listener::Listener;
use crate::subscription::{Subscription, TypedHandler};
use crate::types::{Event, SubscriptionId};

/// In-process typed publish/subscribe dispatcher.
///
/// Components register interest in a concrete event type with
/// [`subscribe`](EventHub::subscribe) or
/// [`subscribe_listener`](EventHub::subscribe_listener) and receive every
/// matching event later published with [`trigger`](EventHub::trigger).
/// Publisher and subscriber never know about each other; the hub routes
/// purely by the runtime type of the published value.
///
/// Delivery is asynchronous and best-effort. `trigger` schedules one
/// independent task per live subscription on the executor the hub was
/// constructed with and returns immediately. No ordering is promised across
/// subscribers or across trigger calls. A handler that panics is isolated
/// to its own task by the executor and never affects the hub or delivery to
/// other subscribers.
///
/// All methods take `&self`; the hub can be shared freely behind an `Arc`
/// and used from many threads at once.
pub struct EventHub {
    /// Execution context every delivery is scheduled on.
    executor: Arc<dyn Executor>,
    /// Live subscriptions, in registration order.
    subscriptions: Mutex<Vec<Subscription>>,
}

impl EventHub {
    /// Create a hub that schedules deliveries on `executor`.
    pub fn new(executor: Arc<dyn Executor>) -> Self {
        Self {
            executor,
            subscriptions: Mutex::new(Vec::new()),
        }
    }

    /// Subscribe a bare callback for events of type `E`.
    ///
    /// Registration is synchronous and always succeeds. The returned
    /// identifier is usable for [`unsubscribe`](EventHub::unsubscribe)
    /// immediately, before any event has been published.
    pub fn subscribe<E, F>(&self, callback: F) -> SubscriptionId
    where
        E: Event,
        F: Fn(E) + Send + Sync + 'static,
    {
        self.register(TypedHandler::Callback(Arc::new(callback)))
    }

    /// Subscribe a [`Listener`] handler object for events of type `E`.
    pub fn subscribe_listener<E, L>(&self, listener: L) -> SubscriptionId
    where
        E: Event,
        L: Listener<E> + 'static,
    {
        self.register(TypedHandler::Listener(Arc::new(listener)))
    }

    /// Remove the subscription that was issued `id`.
    ///
    /// Unknown or already-removed identifiers are a silent no-op. After this
    /// returns, no future [`trigger`](EventHub::trigger) will schedule the
    /// removed handler; a delivery already scheduled before removal may
    /// still complete.
    pub fn unsubscribe(&self, id: &SubscriptionId) {
        let mut registry = self.registry();
        let before = registry.len();
        registry.retain(|subscription| subscription.id != *id);
        if registry.len() < before {
            debug!("Removed subscription {}", id);
        }
    }

    /// Publish `event` to every currently registered subscription.
    ///
    /// Returns as soon as one delivery task per subscription has been
    /// scheduled on the executor. Each task independently attempts to match
    /// the event's runtime type against its subscription; a mismatch is
    /// silently skipped, a match invokes the handler with the subscriber's
    /// own clone of the event.
    pub fn trigger<E: Event>(&self, event: E) {
        let snapshot: Vec<Subscription> = self.registry().clone();
        debug!(
            "Dispatching {} to {} subscriptions",
            std::any::type_name::<E>(),
            snapshot.len()
        );

        for subscription in snapshot {
            let event = event.clone();
            let handler = subscription.handler;
            self.executor.execute(Box::pin(async move {
                if let Some(delivery) = handler.deliver(Box::new(event)) {
                    delivery.await;
                }
            }));
        }
    }

    /// Number of live subscriptions, across all event types.
    pub fn subscription_count(&self) -> usize {
        self.registry().len()
    }

    /// Shared registration path behind both subscribe entry points.
    fn register<E: Event>(&self, handler: TypedHandler<E>) -> SubscriptionId {
        let id = SubscriptionId::new();
        let kind = handler.kind();
        debug!(
            "Registered {} subscription {} for {}",
            kind,
            id,
            std::any::type_name::<E>()
        );

        self.registry().push(Subscription {
            id: id.clone(),
            kind,
            handler: Arc::new(handler),
        });

        id
    }

    /// Lock the registry. Handler code never runs under this lock; a
    /// poisoned mutex still holds a consistent list, so recover the guard.
    fn registry(&self) -> MutexGuard<'_, Vec<Subscription>> {
        self.subscriptions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
