//! End-to-end dispatch tests over the public API.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::mpsc;
use tokio::time::timeout;

use event_hub::{Event, EventHub, Listener, SubscriptionId, TokioExecutor};

const DELIVERY_WAIT: Duration = Duration::from_secs(2);
const SILENCE_WAIT: Duration = Duration::from_millis(200);

#[derive(Clone, Debug, PartialEq)]
struct Incremented {
    amount: i64,
}
impl Event for Incremented {}

#[derive(Clone, Debug, PartialEq)]
struct Deducted {
    amount: i64,
}
impl Event for Deducted {}

/// Listener that forwards every received amount to a channel.
struct ForwardingListener {
    tx: mpsc::UnboundedSender<i64>,
}

#[async_trait]
impl Listener<Incremented> for ForwardingListener {
    async fn handle(&self, event: Incremented) {
        let _ = self.tx.send(event.amount);
    }
}

fn hub() -> EventHub {
    EventHub::new(Arc::new(TokioExecutor::current()))
}

#[tokio::test]
async fn test_callback_invoked_once_with_published_value() {
    let hub = hub();
    let (tx, mut rx) = mpsc::unbounded_channel();

    hub.subscribe(move |event: Incremented| {
        let _ = tx.send(event.amount);
    });

    hub.trigger(Incremented { amount: 5 });

    let amount = timeout(DELIVERY_WAIT, rx.recv())
        .await
        .expect("delivery timed out")
        .expect("channel closed");
    assert_eq!(amount, 5);

    // Exactly once: nothing else arrives.
    assert!(timeout(SILENCE_WAIT, rx.recv()).await.is_err());
}

#[tokio::test]
async fn test_event_distributed_to_all_subscribers() {
    let hub = hub();
    let (tx, mut rx) = mpsc::unbounded_channel();

    for _ in 0..3 {
        let tx = tx.clone();
        hub.subscribe(move |event: Incremented| {
            let _ = tx.send(event.amount);
        });
    }

    hub.trigger(Incremented { amount: 20 });

    let mut total = 0;
    for _ in 0..3 {
        total += timeout(DELIVERY_WAIT, rx.recv())
            .await
            .expect("delivery timed out")
            .expect("channel closed");
    }
    assert_eq!(total, 60);
    assert!(timeout(SILENCE_WAIT, rx.recv()).await.is_err());
}

#[tokio::test]
async fn test_subscribers_only_see_their_own_event_type() {
    let hub = hub();
    let (increment_tx, mut increment_rx) = mpsc::unbounded_channel();
    let (deduct_tx, mut deduct_rx) = mpsc::unbounded_channel();
    let total = Arc::new(AtomicI64::new(0));

    let increment_total = total.clone();
    hub.subscribe(move |event: Incremented| {
        increment_total.fetch_add(event.amount, Ordering::SeqCst);
        let _ = increment_tx.send(event.amount);
    });

    let deduct_total = total.clone();
    hub.subscribe(move |event: Deducted| {
        deduct_total.fetch_add(event.amount, Ordering::SeqCst);
        let _ = deduct_tx.send(event.amount);
    });

    hub.trigger(Incremented { amount: 20 });
    hub.trigger(Deducted { amount: -10 });

    let incremented = timeout(DELIVERY_WAIT, increment_rx.recv())
        .await
        .expect("increment delivery timed out")
        .expect("channel closed");
    let deducted = timeout(DELIVERY_WAIT, deduct_rx.recv())
        .await
        .expect("deduct delivery timed out")
        .expect("channel closed");

    assert_eq!(incremented, 20);
    assert_eq!(deducted, -10);
    assert_eq!(total.load(Ordering::SeqCst), 10);

    // Each subscriber saw exactly one event.
    assert!(timeout(SILENCE_WAIT, increment_rx.recv()).await.is_err());
    assert!(timeout(SILENCE_WAIT, deduct_rx.recv()).await.is_err());
}

#[tokio::test]
async fn test_listener_object_receives_event() {
    let hub = hub();
    let (tx, mut rx) = mpsc::unbounded_channel();

    hub.subscribe_listener(ForwardingListener { tx });

    hub.trigger(Incremented { amount: 20 });

    let amount = timeout(DELIVERY_WAIT, rx.recv())
        .await
        .expect("delivery timed out")
        .expect("channel closed");
    assert_eq!(amount, 20);
    assert!(timeout(SILENCE_WAIT, rx.recv()).await.is_err());
}

#[tokio::test]
async fn test_unsubscribed_handler_never_invoked_again() {
    let hub = hub();
    let (tx, mut rx) = mpsc::unbounded_channel();

    let id = hub.subscribe(move |event: Incremented| {
        let _ = tx.send(event.amount);
    });

    hub.unsubscribe(&id);
    hub.trigger(Incremented { amount: 5 });

    assert!(
        timeout(SILENCE_WAIT, rx.recv()).await.is_err(),
        "removed subscription must not receive events"
    );
}

#[tokio::test]
async fn test_unsubscribe_unknown_id_leaves_others_intact() {
    let hub = hub();
    let (tx, mut rx) = mpsc::unbounded_channel();

    hub.subscribe(move |event: Incremented| {
        let _ = tx.send(event.amount);
    });

    // Never issued by this hub.
    hub.unsubscribe(&SubscriptionId::new());

    hub.trigger(Incremented { amount: 3 });

    let amount = timeout(DELIVERY_WAIT, rx.recv())
        .await
        .expect("surviving subscription must still receive events")
        .expect("channel closed");
    assert_eq!(amount, 3);
}

#[tokio::test]
async fn test_trigger_without_subscribers_is_harmless() {
    let hub = hub();
    hub.trigger(Incremented { amount: 1 });
    hub.trigger(Deducted { amount: -1 });
    assert_eq!(hub.subscription_count(), 0);
}

#[tokio::test]
async fn test_panicking_subscriber_does_not_block_others() {
    let hub = hub();
    let (tx, mut rx) = mpsc::unbounded_channel();

    hub.subscribe(|_event: Incremented| {
        panic!("deliberate subscriber failure");
    });
    hub.subscribe(move |event: Incremented| {
        let _ = tx.send(event.amount);
    });

    hub.trigger(Incremented { amount: 9 });

    let amount = timeout(DELIVERY_WAIT, rx.recv())
        .await
        .expect("healthy subscriber must still be notified")
        .expect("channel closed");
    assert_eq!(amount, 9);
}

#[tokio::test]
async fn test_concurrent_registration_then_trigger() {
    let hub = Arc::new(hub());
    let (tx, mut rx) = mpsc::unbounded_channel();

    let mut joins = Vec::new();
    for _ in 0..8 {
        let hub = hub.clone();
        let tx = tx.clone();
        joins.push(tokio::spawn(async move {
            hub.subscribe(move |event: Incremented| {
                let _ = tx.send(event.amount);
            });
        }));
    }
    for join in joins {
        join.await.expect("registration task failed");
    }
    assert_eq!(hub.subscription_count(), 8);

    hub.trigger(Incremented { amount: 1 });

    let mut total = 0;
    for _ in 0..8 {
        total += timeout(DELIVERY_WAIT, rx.recv())
            .await
            .expect("delivery timed out")
            .expect("channel closed");
    }
    assert_eq!(total, 8);
}

#[test]
fn test_publish_from_outside_the_runtime() {
    let runtime = tokio::runtime::Runtime::new().expect("runtime");
    let hub = EventHub::new(Arc::new(TokioExecutor::new(runtime.handle().clone())));
    let (tx, mut rx) = mpsc::unbounded_channel();

    hub.subscribe(move |event: Incremented| {
        let _ = tx.send(event.amount);
    });

    // Subscribe and trigger are plain synchronous calls; only deliveries
    // need the runtime.
    hub.trigger(Incremented { amount: 7 });

    let amount = tokio_test::block_on(async { timeout(DELIVERY_WAIT, rx.recv()).await })
        .expect("delivery timed out")
        .expect("channel closed");
    assert_eq!(amount, 7);
}
