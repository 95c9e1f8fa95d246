//! Weighted-trend price projection.
//!
//! The projection blends the 24h and 7d percent changes (70/30), adds a
//! uniform perturbation in `[-1%, +1%)` and applies the result to the current
//! price. There is no clamping: a zero price always projects to zero.
use rand::Rng;

use crate::quote::PredictionSubject;

/// Weight of the 24h change in the blended trend.
pub const SHORT_TERM_WEIGHT: f64 = 0.7;
/// Weight of the 7d change in the blended trend.
pub const LONG_TERM_WEIGHT: f64 = 0.3;
/// Width of the random perturbation band (±half of it).
pub const RANDOM_SPREAD: f64 = 0.02;

/// Source of uniform samples in `[0, 1)`.
pub trait RandomSource {
    /// Next sample in `[0, 1)`.
    fn next_unit(&mut self) -> f64;
}

impl<R: Rng> RandomSource for R {
    fn next_unit(&mut self) -> f64 {
        self.random::<f64>()
    }
}

/// Always yields the same sample. Useful to pin the perturbation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedRandom(pub f64);

impl RandomSource for FixedRandom {
    fn next_unit(&mut self) -> f64 {
        self.0
    }
}

/// Blended fractional trend: `0.7 * 24h/100 + 0.3 * 7d/100`.
pub fn weighted_trend(subject: &PredictionSubject) -> f64 {
    let short_term_trend = subject.percent_change_24h / 100.0;
    let long_term_trend = subject.percent_change_7d / 100.0;
    short_term_trend * SHORT_TERM_WEIGHT + long_term_trend * LONG_TERM_WEIGHT
}

/// Projects the next price of `subject`.
pub fn predict<S: RandomSource + ?Sized>(subject: &PredictionSubject, random: &mut S) -> f64 {
    let random_factor = (random.next_unit() - 0.5) * RANDOM_SPREAD;
    subject.current_price * (1.0 + weighted_trend(subject) + random_factor)
}

/// Percent difference between the projected and the current price.
///
/// Returns `0.0` for a zero current price.
pub fn predicted_change_percent(current_price: f64, predicted_price: f64) -> f64 {
    if current_price == 0.0 {
        return 0.0;
    }
    (predicted_price - current_price) / current_price * 100.0
}
