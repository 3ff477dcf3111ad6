//! Memoized ranked result lists, keyed by normalized query.
//!
//! Entries expire after a fixed TTL and the cache evicts by insertion order
//! (oldest-inserted first) past its capacity, not true LRU-by-access. The
//! TTL check in [`ResultCache::get`] is what guarantees freshness; the
//! `sweep` pass is an optimization only.

use std::collections::{HashMap, VecDeque};
use std::time::{Duration, Instant};

use crate::search::SearchResult;

/// Entry lifetime.
pub(crate) const CACHE_TTL: Duration = Duration::from_secs(5 * 60);
/// Maximum cached queries before insertion-order eviction kicks in.
pub(crate) const CACHE_CAPACITY: usize = 100;

struct CacheEntry {
    results: Vec<SearchResult>,
    created_at: Instant,
}

/// Cache of ranked result lists.
pub struct ResultCache {
    entries: HashMap<String, CacheEntry>,
    /// Keys in insertion order, oldest first.
    insertion_order: VecDeque<String>,
    ttl: Duration,
    capacity: usize,
}

impl Default for ResultCache {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultCache {
    pub fn new() -> Self {
        Self::with_limits(CACHE_TTL, CACHE_CAPACITY)
    }

    pub fn with_limits(ttl: Duration, capacity: usize) -> Self {
        Self {
            entries: HashMap::new(),
            insertion_order: VecDeque::new(),
            ttl,
            capacity,
        }
    }

    /// Cached results for a query, or `None` if absent or expired. An
    /// expired entry is evicted on detection.
    pub fn get(&mut self, query: &str) -> Option<Vec<SearchResult>> {
        let expired = self
            .entries
            .get(query)
            .is_some_and(|entry| entry.created_at.elapsed() >= self.ttl);
        if expired {
            self.remove(query);
            return None;
        }
        self.entries.get(query).map(|entry| entry.results.clone())
    }

    /// Insert or overwrite an entry, evicting the oldest-inserted one when
    /// the cache is over capacity.
    pub fn put(&mut self, query: &str, results: Vec<SearchResult>) {
        if self.entries.contains_key(query) {
            self.insertion_order.retain(|key| key != query);
        }
        self.insertion_order.push_back(query.to_string());
        self.entries.insert(
            query.to_string(),
            CacheEntry {
                results,
                created_at: Instant::now(),
            },
        );
        while self.entries.len() > self.capacity {
            let Some(oldest) = self.insertion_order.pop_front() else {
                break;
            };
            self.entries.remove(&oldest);
        }
    }

    /// Clear the cache wholesale. Called whenever the catalog changes; there
    /// is no fine-grained invalidation.
    pub fn invalidate_all(&mut self) {
        self.entries.clear();
        self.insertion_order.clear();
    }

    /// Remove expired entries eagerly.
    pub fn sweep(&mut self) {
        let ttl = self.ttl;
        self.entries.retain(|_, entry| entry.created_at.elapsed() < ttl);
        let entries = &self.entries;
        self.insertion_order.retain(|key| entries.contains_key(key));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn remove(&mut self, query: &str) {
        self.entries.remove(query);
        self.insertion_order.retain(|key| key != query);
    }
}
