//! The injectable execution context used for deliveries.

use futures::future::BoxFuture;
use tokio::runtime::Handle;

/// An asynchronous execution context capable of running a unit of work in
/// the background.
///
/// The hub is constructed with one of these and schedules every delivery on
/// it, so handler invocations never run inline on the publisher's thread.
/// Scheduling is fire-and-forget: completion is not reported back.
/// Implementations must isolate a failing task to itself; it must not
/// affect other scheduled tasks or the caller.
pub trait Executor: Send + Sync {
    /// Schedule `task` to run in the background.
    fn execute(&self, task: BoxFuture<'static, ()>);
}

/// [`Executor`] backed by a tokio runtime.
///
/// Tasks are spawned on the wrapped [`Handle`]. A panic inside a spawned
/// task is contained by the runtime in that task's join handle, so one
/// failing delivery never disturbs the hub, the runtime, or deliveries to
/// other subscribers.
#[derive(Debug, Clone)]
pub struct TokioExecutor {
    handle: Handle,
}

impl TokioExecutor {
    /// Create an executor from an explicit runtime handle.
    pub fn new(handle: Handle) -> Self {
        Self { handle }
    }

    /// Create an executor for the runtime the caller is currently inside.
    ///
    /// # Panics
    ///
    /// Panics when called outside a tokio runtime, as
    /// [`Handle::current`] does.
    pub fn current() -> Self {
        Self {
            handle: Handle::current(),
        }
    }
}

impl Executor for TokioExecutor {
    fn execute(&self, task: BoxFuture<'static, ()>) {
        self.handle.spawn(task);
    }
}
