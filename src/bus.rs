//! Explicit publish/subscribe bus for cross-component notification.
//!
//! Replaces the hidden module-level listener arrays such UIs tend to
//! accumulate: the bus is a plain value owned by the application
//! composition root, injected into consumers, and dropped at shutdown.
//! There are no process-wide singletons.

use std::sync::Mutex;

use tracing::debug;

/// Identifies one subscription for later removal.
///
/// The all-ones value is reserved: [`EventBus::subscribe`] returns it
/// when no subscription could be registered (poisoned lock or an
/// exhausted id counter), and it never names a live subscription, so
/// unsubscribing it is always a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(u64);

impl SubscriberId {
    const DEAD: Self = Self(u64::MAX);
}

type Callback<T> = Box<dyn Fn(&T) + Send>;

struct BusInner<T> {
    next_id: u64,
    subscribers: Vec<(SubscriberId, Callback<T>)>,
}

/// A minimal synchronous event bus.
///
/// [`publish`](Self::publish) delivers the value to every live
/// subscriber in subscription order, on the caller's thread. Callbacks
/// run while the bus lock is held and therefore must not subscribe,
/// unsubscribe, or publish re-entrantly.
///
/// # Examples
///
/// ```
/// use std::sync::atomic::{AtomicU32, Ordering};
/// use std::sync::Arc;
/// use clmm_lens::bus::EventBus;
///
/// let bus: EventBus<String> = EventBus::new();
/// let seen = Arc::new(AtomicU32::new(0));
/// let counter = Arc::clone(&seen);
/// let id = bus.subscribe(move |_| {
///     counter.fetch_add(1, Ordering::SeqCst);
/// });
/// bus.publish(&"swap confirmed".to_owned());
/// assert_eq!(seen.load(Ordering::SeqCst), 1);
/// bus.unsubscribe(id);
/// ```
pub struct EventBus<T> {
    inner: Mutex<BusInner<T>>,
}

impl<T> EventBus<T> {
    /// Creates an empty bus.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(BusInner {
                next_id: 0,
                subscribers: Vec::new(),
            }),
        }
    }

    /// Registers a callback; returns an id for [`unsubscribe`](Self::unsubscribe).
    ///
    /// Returns the reserved dead id (see [`SubscriberId`]) if the
    /// subscription could not be registered.
    pub fn subscribe(&self, callback: impl Fn(&T) + Send + 'static) -> SubscriberId {
        let Ok(mut inner) = self.inner.lock() else {
            return SubscriberId::DEAD;
        };
        if inner.next_id == SubscriberId::DEAD.0 {
            return SubscriberId::DEAD;
        }
        let id = SubscriberId(inner.next_id);
        inner.next_id += 1;
        inner.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Removes a subscription. Returns `false` if the id was not live.
    pub fn unsubscribe(&self, id: SubscriberId) -> bool {
        let Ok(mut inner) = self.inner.lock() else {
            return false;
        };
        let before = inner.subscribers.len();
        inner.subscribers.retain(|(sid, _)| *sid != id);
        let removed = inner.subscribers.len() != before;
        if !removed {
            debug!(?id, "unsubscribe for unknown subscriber");
        }
        removed
    }

    /// Delivers `value` to every live subscriber in subscription order.
    pub fn publish(&self, value: &T) {
        let Ok(inner) = self.inner.lock() else {
            return;
        };
        for (_, callback) in &inner.subscribers {
            callback(value);
        }
    }

    /// Number of live subscriptions.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.inner.lock().map(|inner| inner.subscribers.len()).unwrap_or(0)
    }
}

impl<T> Default for EventBus<T> {
    fn default() -> Self {
        Self::new()
    }
}
