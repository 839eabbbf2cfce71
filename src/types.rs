//! Core types shared across the event hub.

use std::fmt;

use uuid::Uuid;

/// Marker capability for values that can be published through the hub.
///
/// Any plain value type qualifies; no methods are required of the payload.
/// Events are immutable values: every delivery hands the subscriber its own
/// clone, so a handler can never observe mutation by another subscriber.
///
/// ```rust,no_run
/// use event_hub::Event;
///
/// #[derive(Clone, Debug)]
/// struct Incremented {
///     amount: i64,
/// }
///
/// impl Event for Incremented {}
/// ```
pub trait Event: Clone + Send + Sync + 'static {}

/// Unique handle to one subscription.
///
/// Issued by the hub at subscribe time and used only for later removal.
/// Backed by a random v4 UUID, so values are unique across the hub's
/// lifetime without coordination.
#[derive(Debug, Clone, Hash, Eq, PartialEq)]
pub struct SubscriptionId(String);

impl SubscriptionId {
    /// Generate a fresh identifier.
    pub fn new() -> Self {
        Self(format!("sub-{}", Uuid::new_v4()))
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which shape of handler a subscription carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandlerKind {
    /// A bare callback closure.
    Callback,
    /// A handler object implementing [`Listener`](crate::Listener).
    Listener,
}

impl fmt::Display for HandlerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HandlerKind::Callback => write!(f, "callback"),
            HandlerKind::Listener => write!(f, "listener"),
        }
    }
}
