//! Per-call reduction context supplied by the host.
//!
//! The clock and the randomness source are handed in here rather than
//! read from ambient state, so reducer outputs are exactly reproducible
//! given an `(event, state, context)` tuple.

use std::cell::RefCell;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::WidgetSettings;

/// Uniformly distributed randomness in `[0, 1)`.
///
/// Implementations must be reproducible under host-controlled seeding.
pub trait RandomSource {
    /// Next uniform value in `[0, 1)`.
    fn next_unit(&self) -> f64;
}

/// Seeded generator backed by [`StdRng`].
///
/// The same seed replays the same value sequence.
pub struct SeededRandom {
    rng: RefCell<StdRng>,
}

impl SeededRandom {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: RefCell::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_unit(&self) -> f64 {
        self.rng.borrow_mut().gen::<f64>()
    }
}

/// Constant source for tests that pin the sampled value.
pub struct FixedRandom(pub f64);

impl RandomSource for FixedRandom {
    fn next_unit(&self) -> f64 {
        self.0
    }
}

/// Context handed to `hydrate`/`reduce` for the duration of one call.
pub struct WidgetContext<'a> {
    /// Monotonic milliseconds, on the same scale as event timestamps and
    /// duration settings.
    pub now: u64,
    /// Configuration record for the widget instance.
    pub settings: &'a WidgetSettings,
    random: &'a dyn RandomSource,
}

impl<'a> WidgetContext<'a> {
    pub fn new(now: u64, settings: &'a WidgetSettings, random: &'a dyn RandomSource) -> Self {
        Self {
            now,
            settings,
            random,
        }
    }

    /// Uniform value in `[0, 1)` from the host-supplied source.
    pub fn random(&self) -> f64 {
        self.random.next_unit()
    }

    /// Linear sample between `min` and `max`.
    pub fn between(&self, min: f64, max: f64) -> f64 {
        min + (max - min) * self.random()
    }
}
