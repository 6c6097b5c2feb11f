//! Short-lived cache for swap-quote results.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use crate::domain::Address;

/// Default entry lifetime.
const DEFAULT_TTL: Duration = Duration::from_secs(60);

/// Default maximum entry count.
const DEFAULT_CAPACITY: usize = 10;

/// Cache key for one quote request.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QuoteKey {
    /// Token being sold.
    pub token_in: Address,
    /// Token being bought.
    pub token_out: Address,
    /// Input amount, as the exact string the user typed (quotes for
    /// "1.0" and "1.00" are distinct requests).
    pub amount_in: String,
}

impl QuoteKey {
    /// Creates a key from its components.
    #[must_use]
    pub fn new(token_in: Address, token_out: Address, amount_in: impl Into<String>) -> Self {
        Self {
            token_in,
            token_out,
            amount_in: amount_in.into(),
        }
    }
}

struct Entry<V> {
    key: QuoteKey,
    value: V,
    inserted_at: Instant,
}

/// A size-bounded, TTL-expiring cache of quote results.
///
/// Holds at most 10 entries for at most 60 seconds each (overridable via
/// [`with_limits`](Self::with_limits) for tests). Insertion past capacity
/// evicts the oldest entry. A hit is guaranteed to have been computed
/// within the TTL for the identical key; there is no other correctness
/// obligation.
///
/// Interior mutability goes through a [`Mutex`] so the read-check-insert
/// sequence stays safe if the host turns out to be multi-threaded; on a
/// single-threaded event loop the lock is uncontended.
pub struct QuoteCache<V> {
    entries: Mutex<VecDeque<Entry<V>>>,
    ttl: Duration,
    capacity: usize,
}

impl<V: Clone> QuoteCache<V> {
    /// Creates a cache with the standard limits (60 s TTL, 10 entries).
    #[must_use]
    pub fn new() -> Self {
        Self::with_limits(DEFAULT_TTL, DEFAULT_CAPACITY)
    }

    /// Creates a cache with explicit limits. A capacity of zero disables
    /// caching entirely.
    #[must_use]
    pub fn with_limits(ttl: Duration, capacity: usize) -> Self {
        Self {
            entries: Mutex::new(VecDeque::with_capacity(capacity)),
            ttl,
            capacity,
        }
    }

    /// Returns the cached value for `key` if it was inserted within the
    /// TTL. Expired entries are pruned on access.
    #[must_use]
    pub fn get(&self, key: &QuoteKey) -> Option<V> {
        let Ok(mut entries) = self.entries.lock() else {
            return None;
        };
        let now = Instant::now();
        entries.retain(|e| now.duration_since(e.inserted_at) < self.ttl);
        entries
            .iter()
            .find(|e| e.key == *key)
            .map(|e| e.value.clone())
    }

    /// Inserts a freshly computed value, replacing any entry with the
    /// same key and evicting the oldest entry when at capacity.
    pub fn insert(&self, key: QuoteKey, value: V) {
        if self.capacity == 0 {
            return;
        }
        let Ok(mut entries) = self.entries.lock() else {
            return;
        };
        entries.retain(|e| e.key != key);
        while entries.len() >= self.capacity {
            entries.pop_front();
        }
        entries.push_back(Entry {
            key,
            value,
            inserted_at: Instant::now(),
        });
    }

    /// Number of live (unexpired) entries.
    #[must_use]
    pub fn len(&self) -> usize {
        let Ok(mut entries) = self.entries.lock() else {
            return 0;
        };
        let now = Instant::now();
        entries.retain(|e| now.duration_since(e.inserted_at) < self.ttl);
        entries.len()
    }

    /// Returns `true` if the cache holds no live entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops every entry.
    pub fn clear(&self) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.clear();
        }
    }
}

impl<V: Clone> Default for QuoteCache<V> {
    fn default() -> Self {
        Self::new()
    }
}
