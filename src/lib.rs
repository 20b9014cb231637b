//! # nearcache - Tolerance-Based Memoization
//!
//! nearcache avoids recomputing an expensive function when it is called
//! again with an input that is numerically close to a previously seen input,
//! rather than exactly equal. Two keys match when their shapes are identical
//! and the L2 norm of their elementwise difference is strictly below a
//! configured tolerance.
//!
//! ## Quick Start
//!
//! ```rust
//! use nearcache::{ArrayKey, MemoizedFn, ToleranceCache, ToleranceCacheConfig};
//!
//! struct Simulation;
//!
//! fn main() -> nearcache::Result<()> {
//!     let config = ToleranceCacheConfig::new().with_eps(0.01).with_maxsize(100);
//!
//!     // Wrap an expensive two-argument function f(owner, x)
//!     let mut residual = MemoizedFn::new(
//!         ToleranceCache::new(config),
//!         |_sim: &Simulation, x: &ArrayKey| x.data().iter().map(|v| v * v).sum::<f32>(),
//!     );
//!
//!     let sim = Simulation;
//!     let x = ArrayKey::vector(vec![0.0, 0.0])?;
//!     let y = residual.call(&sim, &x);
//!
//!     // A nearby probe returns the stored result without recomputing
//!     let near = ArrayKey::vector(vec![0.0, 0.001])?;
//!     assert_eq!(residual.call(&sim, &near), y);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Semantics
//!
//! - Entries are scanned in insertion order; the **first** key within
//!   tolerance wins, not the closest one.
//! - Crossing the `maxsize` entry threshold clears the whole cache in one
//!   bulk reset rather than evicting incrementally.
//! - A hit never invokes the wrapped function; a miss invokes it exactly once.
//! - Cache instances are single-threaded; wrap them in a lock for sharing.

#![warn(missing_docs)]

// ── Core ──────────────────────────────────────────────────────────────────────
// Keys, the tolerance match predicate, and the cache itself.
pub mod cache;
pub mod distance;
pub mod error;
pub mod key;

// ── Collaborators ────────────────────────────────────────────────────────────
// Dimensionality-based plot routing, named settings, scoped timing.
pub mod dispatch;
pub mod settings;
pub mod timer;

// ── Stable API ───────────────────────────────────────────────────────────────
pub use cache::{CacheStats, MemoizedFn, ToleranceCache, ToleranceCacheConfig};
pub use dispatch::{route, PlotRoute, ProblemDescriptor};
pub use error::{NearcacheError, Result};
pub use key::ArrayKey;
pub use settings::Settings;
pub use timer::{ScopeTimer, TimerReading};

/// Prelude module for convenient imports.
///
/// ```rust
/// use nearcache::prelude::*;
/// ```
pub mod prelude {
    pub use crate::cache::{MemoizedFn, ToleranceCache, ToleranceCacheConfig};
    pub use crate::dispatch::{route, PlotRoute, ProblemDescriptor};
    pub use crate::error::{NearcacheError, Result};
    pub use crate::key::ArrayKey;
    pub use crate::settings::Settings;
    pub use crate::timer::ScopeTimer;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_end_to_end() {
        // An "expensive" function wrapped with memoization, driven the way
        // a solver loop would drive it: repeated probes drifting slowly.
        struct Solver {
            offset: f32,
        }

        let evaluations = Cell::new(0u32);
        let config = ToleranceCacheConfig::new().with_eps(0.05).with_maxsize(10);
        let mut memo = MemoizedFn::new(
            ToleranceCache::new(config),
            |solver: &Solver, x: &ArrayKey| {
                evaluations.set(evaluations.get() + 1);
                x.data().iter().sum::<f32>() + solver.offset
            },
        );

        let solver = Solver { offset: 1.0 };

        // Probes drifting by 0.01 per step all fall within eps of the first.
        for step in 0..4 {
            let x = ArrayKey::vector(vec![0.0, step as f32 * 0.01]).unwrap();
            let y = memo.call(&solver, &x);
            assert_eq!(y, 1.0);
        }
        assert_eq!(evaluations.get(), 1);

        // A distant probe recomputes.
        let far = ArrayKey::vector(vec![10.0, 10.0]).unwrap();
        assert_eq!(memo.call(&solver, &far), 21.0);
        assert_eq!(evaluations.get(), 2);

        let stats = memo.cache().stats();
        assert_eq!(stats.hits, 3);
        assert_eq!(stats.misses, 2);
        assert_eq!(stats.size, 2);
    }

    #[test]
    fn test_prelude_compiles() {
        use crate::prelude::*;
        let desc = ProblemDescriptor::new(1, 1);
        assert_eq!(route(&desc), PlotRoute::Line1d);
    }
}
