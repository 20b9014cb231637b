//! Scoped Wall-Clock Timer
//!
//! RAII timer that records elapsed wall time when its scope closes, on
//! normal exit and on unwind alike. The measurement is published through a
//! [`TimerReading`] handle that outlives the guard.
//!
//! # Example
//!
//! ```
//! use nearcache::ScopeTimer;
//!
//! let reading = {
//!     let timer = ScopeTimer::start("assemble");
//!     let reading = timer.reading();
//!     // ... timed work ...
//!     reading
//! };
//! assert!(reading.elapsed().is_some());
//! ```

use parking_lot::Mutex;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::debug;

/// Handle to a timer's measurement, valid after the timed scope closes.
#[derive(Debug, Clone)]
pub struct TimerReading {
    slot: Arc<Mutex<Option<Duration>>>,
}

impl TimerReading {
    /// The recorded duration, or `None` while the scope is still open.
    pub fn elapsed(&self) -> Option<Duration> {
        *self.slot.lock()
    }
}

/// RAII guard measuring the wall-clock time of a scope.
///
/// Dropping the guard records the elapsed time into its [`TimerReading`]
/// and logs it. Unwinding drops the guard too, so the measurement is
/// recorded even when the scope exits via panic.
pub struct ScopeTimer {
    name: String,
    start: Instant,
    slot: Arc<Mutex<Option<Duration>>>,
}

impl ScopeTimer {
    /// Start timing a named scope.
    pub fn start(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            start: Instant::now(),
            slot: Arc::new(Mutex::new(None)),
        }
    }

    /// Obtain the reading handle before the scope closes.
    pub fn reading(&self) -> TimerReading {
        TimerReading {
            slot: Arc::clone(&self.slot),
        }
    }

    /// Time elapsed so far, without closing the scope.
    pub fn elapsed_so_far(&self) -> Duration {
        self.start.elapsed()
    }
}

impl Drop for ScopeTimer {
    fn drop(&mut self) {
        let elapsed = self.start.elapsed();
        *self.slot.lock() = Some(elapsed);
        debug!(name = %self.name, elapsed_us = elapsed.as_micros() as u64, "scope timer closed");
    }
}
