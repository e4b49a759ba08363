use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, PoisonError};

use tracing::{debug, trace};

use crate::consts::DEFAULT_CACHE_CAPACITY;
use crate::view::ViewState;

use super::quantize::ViewKey;
use super::Transform;

/// Hit/miss counters for a `TransformCache`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
}

impl CacheStats {
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// Bounded, least-recently-used memo of `ViewState -> Transform`.
///
/// Lookups go through `ViewKey`, so view states that differ only below the
/// quantization granularity share one `Transform`. On a miss the transform is
/// built from the unquantized state that missed.
#[derive(Debug)]
pub struct TransformCache {
    capacity: usize,
    entries: HashMap<ViewKey, Arc<Transform>>,
    /// Least recently used at the front.
    order: VecDeque<ViewKey>,
    stats: CacheStats,
}

impl TransformCache {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CACHE_CAPACITY)
    }

    /// A capacity of zero is treated as one.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            entries: HashMap::with_capacity(capacity),
            order: VecDeque::with_capacity(capacity),
            stats: CacheStats::default(),
        }
    }

    pub fn get_or_build(&mut self, state: &ViewState) -> Arc<Transform> {
        let key = ViewKey::from_state(state);

        if let Some(transform) = self.entries.get(&key) {
            let transform = Arc::clone(transform);
            self.touch(key);
            self.stats.hits += 1;
            return transform;
        }

        self.stats.misses += 1;
        trace!(zoom = state.zoom_factor(), "transform cache miss");

        if self.entries.len() >= self.capacity {
            self.evict_oldest();
        }

        let transform = Arc::new(Transform::new(state));
        self.entries.insert(key, Arc::clone(&transform));
        self.order.push_back(key);
        transform
    }

    pub fn contains(&self, state: &ViewState) -> bool {
        self.entries.contains_key(&ViewKey::from_state(state))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    /// Drop every entry. Counters are kept.
    pub fn clear(&mut self) {
        debug!(entries = self.entries.len(), "transform cache cleared");
        self.entries.clear();
        self.order.clear();
    }

    fn touch(&mut self, key: ViewKey) {
        if let Some(pos) = self.order.iter().position(|k| *k == key) {
            self.order.remove(pos);
        }
        self.order.push_back(key);
    }

    fn evict_oldest(&mut self) {
        if let Some(oldest) = self.order.pop_front() {
            self.entries.remove(&oldest);
            self.stats.evictions += 1;
            debug!(capacity = self.capacity, "transform cache eviction");
        }
    }
}

impl Default for TransformCache {
    fn default() -> Self {
        Self::new()
    }
}

/// `TransformCache` behind a mutex, for workers that render off the UI
/// thread. Returned transforms are shared, the map is not.
#[derive(Debug, Default)]
pub struct SharedTransformCache {
    inner: Mutex<TransformCache>,
}

impl SharedTransformCache {
    pub fn new(cache: TransformCache) -> Self {
        Self {
            inner: Mutex::new(cache),
        }
    }

    pub fn get_or_build(&self, state: &ViewState) -> Arc<Transform> {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get_or_build(state)
    }

    pub fn stats(&self) -> CacheStats {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .stats()
    }

    pub fn clear(&self) {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}
