//! Tolerance-Based Memoization Cache
//!
//! A cache that avoids recomputing an expensive function when it is called
//! again with an input that is numerically close to a previously seen input,
//! rather than exactly equal.
//!
//! # Overview
//!
//! Instead of requiring exact key matches, [`ToleranceCache`] treats two keys
//! as the same input when their shapes are identical and the L2 norm of their
//! elementwise difference is strictly below a configured tolerance `eps`.
//! Entries are scanned in insertion order and the first match wins; no
//! nearest-match search is performed. When the entry count crosses `maxsize`
//! the whole cache is cleared in one bulk reset — a deliberately crude policy
//! that trades potential thrashing for bounded memory.
//!
//! # Example
//!
//! ```
//! use nearcache::{ArrayKey, MemoizedFn, ToleranceCache, ToleranceCacheConfig};
//!
//! struct Solver;
//!
//! let config = ToleranceCacheConfig::new().with_eps(0.01).with_maxsize(50);
//! let mut memo = MemoizedFn::new(ToleranceCache::new(config), |_: &Solver, x: &ArrayKey| {
//!     x.data().iter().sum::<f32>()
//! });
//!
//! let solver = Solver;
//! let x = ArrayKey::vector(vec![0.0, 0.0]).unwrap();
//! let y = memo.call(&solver, &x);
//!
//! // A probe within tolerance hits the stored entry.
//! let near = ArrayKey::vector(vec![0.0, 0.001]).unwrap();
//! assert_eq!(memo.call(&solver, &near), y);
//! assert_eq!(memo.cache().stats().hits, 1);
//! ```

use serde::{Deserialize, Serialize};
use std::marker::PhantomData;
use tracing::{debug, trace};

use crate::distance::euclidean_distance;
use crate::key::ArrayKey;

/// Configuration for the tolerance cache.
///
/// Values are not validated at construction: `eps` and `maxsize` are the
/// caller's responsibility. A `maxsize` of 0 degenerates to clearing on
/// every insertion, effectively disabling caching.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToleranceCacheConfig {
    /// Maximum L2 distance between two equal-shaped keys for them to be
    /// treated as the same entry. The comparison is strict (`< eps`).
    pub eps: f32,
    /// Entry-count threshold. Crossing it triggers a full reset.
    pub maxsize: usize,
}

impl ToleranceCacheConfig {
    /// Create a configuration with the default tolerance and threshold.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the match tolerance.
    pub fn with_eps(mut self, eps: f32) -> Self {
        self.eps = eps;
        self
    }

    /// Set the entry-count threshold.
    pub fn with_maxsize(mut self, maxsize: usize) -> Self {
        self.maxsize = maxsize;
        self
    }
}

impl Default for ToleranceCacheConfig {
    fn default() -> Self {
        Self {
            eps: 1e-3,
            maxsize: 100,
        }
    }
}

/// Aggregated cache statistics.
#[derive(Debug, Clone, Default)]
pub struct CacheStats {
    /// Total cache hits
    pub hits: u64,
    /// Total cache misses
    pub misses: u64,
    /// Current number of entries
    pub size: usize,
    /// Entry-count threshold from the configuration
    pub capacity: usize,
    /// Number of bulk resets performed
    pub resets: u64,
}

impl CacheStats {
    /// Returns the cache hit ratio (0.0 to 1.0)
    pub fn hit_ratio(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// Memoization cache keyed by approximate numeric equality.
///
/// Entries are kept in insertion order in a flat list; lookups are a linear
/// scan, O(current size) per probe. The cache is single-threaded by design:
/// all methods take `&mut self` and callers needing shared access must wrap
/// the instance in their own lock.
pub struct ToleranceCache<V> {
    config: ToleranceCacheConfig,
    /// Entries in insertion order. Scan order is semantically significant:
    /// the first key within tolerance wins, not the closest.
    entries: Vec<(ArrayKey, V)>,
    hits: u64,
    misses: u64,
    resets: u64,
}

impl<V: Clone> ToleranceCache<V> {
    /// Create a new cache with the given configuration.
    pub fn new(config: ToleranceCacheConfig) -> Self {
        Self {
            config,
            entries: Vec::new(),
            hits: 0,
            misses: 0,
            resets: 0,
        }
    }

    /// Create a cache with the default configuration.
    pub fn default_config() -> Self {
        Self::new(ToleranceCacheConfig::default())
    }

    /// Whether `probe` matches `key` under the tolerance predicate.
    ///
    /// Shapes must be identical; a shape mismatch is a non-match, not an
    /// error. The distance comparison is strict, so a probe exactly `eps`
    /// away misses.
    fn matches(&self, probe: &ArrayKey, key: &ArrayKey) -> bool {
        probe.same_shape(key) && euclidean_distance(probe.data(), key.data()) < self.config.eps
    }

    /// Look up the first entry matching `probe` in insertion order.
    ///
    /// Returns `None` on a miss. Never invokes any computation.
    pub fn lookup(&mut self, probe: &ArrayKey) -> Option<&V> {
        let found = self
            .entries
            .iter()
            .position(|(key, _)| self.matches(probe, key));

        match found {
            Some(idx) => {
                self.hits += 1;
                trace!(index = idx, "tolerance cache hit");
                Some(&self.entries[idx].1)
            }
            None => {
                self.misses += 1;
                trace!(size = self.entries.len(), "tolerance cache miss");
                None
            }
        }
    }

    /// Insert an entry, then apply the overflow policy.
    ///
    /// An exact bitwise duplicate of a stored key overwrites that key's slot
    /// in place; any other key is appended at the end of insertion order.
    /// If the entry count then exceeds `maxsize`, every entry is dropped,
    /// including the one just inserted. The reset is a normal state
    /// transition, not an error.
    pub fn insert(&mut self, key: ArrayKey, value: V) {
        match self.entries.iter().position(|(k, _)| k.bitwise_eq(&key)) {
            Some(idx) => self.entries[idx].1 = value,
            None => self.entries.push((key, value)),
        }

        if self.entries.len() > self.config.maxsize {
            debug!(
                size = self.entries.len(),
                maxsize = self.config.maxsize,
                "tolerance cache overflow, clearing all entries"
            );
            self.entries.clear();
            self.resets += 1;
        }
    }

    /// Return the cached value for `probe`, computing and storing it on a miss.
    ///
    /// A hit returns a clone of the stored value without invoking `compute`;
    /// a miss invokes `compute` exactly once. This is the full call contract:
    /// scan, first-match return, compute-insert-return, overflow reset.
    pub fn get_or_compute(&mut self, probe: &ArrayKey, compute: impl FnOnce() -> V) -> V {
        if let Some(value) = self.lookup(probe) {
            return value.clone();
        }
        let value = compute();
        self.insert(probe.clone(), value.clone());
        value
    }

    /// Current number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop all entries. Hit/miss counters are retained.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Return current cache statistics.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits,
            misses: self.misses,
            size: self.entries.len(),
            capacity: self.config.maxsize,
            resets: self.resets,
        }
    }

    /// The configuration this cache was created with.
    pub fn config(&self) -> &ToleranceCacheConfig {
        &self.config
    }
}

/// Wrapper that combines a [`ToleranceCache`] with a wrapped two-argument
/// function `f(owner, x)` to transparently memoize its results.
///
/// The owner is passed through to the wrapped function unchanged and is not
/// inspected by the cache. The wrapped function must not mutate `x` and its
/// side effects are suppressed on a cache hit.
pub struct MemoizedFn<O, V, F>
where
    F: Fn(&O, &ArrayKey) -> V,
{
    cache: ToleranceCache<V>,
    func: F,
    _owner: PhantomData<fn(&O)>,
}

impl<O, V, F> MemoizedFn<O, V, F>
where
    V: Clone,
    F: Fn(&O, &ArrayKey) -> V,
{
    /// Create a new memoized function around an existing cache.
    pub fn new(cache: ToleranceCache<V>, func: F) -> Self {
        Self {
            cache,
            func,
            _owner: PhantomData,
        }
    }

    /// Call the wrapped function with memoization.
    ///
    /// Checks the cache first; on a miss, invokes the wrapped function once,
    /// stores the result, and returns it.
    pub fn call(&mut self, owner: &O, x: &ArrayKey) -> V {
        let (cache, func) = (&mut self.cache, &self.func);
        cache.get_or_compute(x, || func(owner, x))
    }

    /// Get a reference to the underlying cache.
    pub fn cache(&self) -> &ToleranceCache<V> {
        &self.cache
    }

    /// Get a mutable reference to the underlying cache.
    pub fn cache_mut(&mut self) -> &mut ToleranceCache<V> {
        &mut self.cache
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
