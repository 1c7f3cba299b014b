//! [`EventBus`]: topic-keyed subscriber lists, synchronous dispatch.

use std::collections::HashMap;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;
use squadron_core::Run;

use crate::topic::Topic;

type Subscriber = Arc<dyn Fn(&Run) + Send + Sync>;

/// Opaque handle identifying one subscription, used by [`EventBus::off`] to
/// remove a handler by identity (Rust closures have no stable identity to
/// compare directly, so this token stands in for it — see DESIGN.md).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

struct Inner {
    subscribers: RwLock<HashMap<Topic, Vec<(SubscriptionId, Subscriber)>>>,
    next_id: AtomicU64,
}

/// A topic-keyed map of subscriber sequences (spec §4.3).
///
/// `emit` snapshots the subscriber list for a topic before invoking anyone,
/// so handlers added to the same topic during dispatch are not delivered
/// the in-flight event (spec §9: fixed to "no"). A panicking subscriber is
/// caught and logged; dispatch continues to the remaining subscribers in
/// subscription order (spec §9: implementation-defined, documented here and
/// in DESIGN.md).
///
/// Cheap to clone — internally reference-counted, so the same bus can be
/// shared between the engine and every caller that wants to subscribe.
#[derive(Clone)]
pub struct EventBus {
    inner: Arc<Inner>,
}

impl EventBus {
    /// Create an empty bus with no subscribers on any topic.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Inner {
                subscribers: RwLock::new(HashMap::new()),
                next_id: AtomicU64::new(0),
            }),
        }
    }

    /// Subscribe `handler` to `topic`. Returns an unsubscribe closure;
    /// calling it removes exactly this subscription (idempotent — calling
    /// it twice is harmless).
    pub fn on<F>(&self, topic: Topic, handler: F) -> Box<dyn FnOnce() + Send>
    where
        F: Fn(&Run) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.inner.next_id.fetch_add(1, Ordering::Relaxed));
        self.inner
            .subscribers
            .write()
            .entry(topic)
            .or_default()
            .push((id, Arc::new(handler)));

        let bus = self.clone();
        Box::new(move || {
            let _ = bus.off(topic, id);
        })
    }

    /// Remove the subscription identified by `id` from `topic`.
    ///
    /// Returns `true` if a subscription was removed, `false` if it was
    /// already gone (no-op, per spec §4.3).
    pub fn off(&self, topic: Topic, id: SubscriptionId) -> bool {
        let mut subscribers = self.inner.subscribers.write();
        let Some(list) = subscribers.get_mut(&topic) else {
            return false;
        };
        let before = list.len();
        list.retain(|(existing, _)| *existing != id);
        list.len() != before
    }

    /// Invoke every subscriber of `topic`, in subscription order, with
    /// `payload`.
    ///
    /// The subscriber list is cloned out from under the lock before
    /// dispatch begins, so emission never blocks on subscriber work and
    /// subscribers registered during this call are not delivered this
    /// event.
    pub fn emit(&self, topic: Topic, payload: &Run) {
        let snapshot: Vec<Subscriber> = {
            let subscribers = self.inner.subscribers.read();
            subscribers
                .get(&topic)
                .map(|list| list.iter().map(|(_, handler)| handler.clone()).collect())
                .unwrap_or_default()
        };

        for handler in snapshot {
            let result = catch_unwind(AssertUnwindSafe(|| handler(payload)));
            if result.is_err() {
                tracing::error!(%topic, run_id = %payload.id, "event subscriber panicked; continuing dispatch");
            }
        }
    }

    /// Number of live subscriptions on `topic`. Test/diagnostic helper.
    #[must_use]
    pub fn subscriber_count(&self, topic: Topic) -> usize {
        self.inner
            .subscribers
            .read()
            .get(&topic)
            .map_or(0, Vec::len)
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
