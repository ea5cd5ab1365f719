//! Exponential Moving Average (EMA).
//!
//! Recursive: EMA[t] = alpha * close[t] + (1 - alpha) * EMA[t-1]
//! Seed: EMA[period-1] = SMA of first `period` close values.
//! Lookback: period - 1.

use super::Indicator;
use crate::domain::Candle;

#[derive(Debug, Clone)]
pub struct Ema {
    period: usize,
    name: String,
}

impl Ema {
    pub fn new(period: usize) -> Self {
        assert!(period >= 1, "EMA period must be >= 1");
        Self {
            period,
            name: format!("ema_{period}"),
        }
    }
}

impl Indicator for Ema {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookback(&self) -> usize {
        self.period.saturating_sub(1)
    }

    fn compute(&self, candles: &[Candle]) -> Vec<f64> {
        let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
        ema_of_series(&closes, self.period)
    }
}

/// Compute raw EMA values from a pre-extracted f64 slice.
///
/// Used by composed indicators (TEMA) that need EMA of an arbitrary series.
/// NaN positions at the head are skipped when seeding; a NaN after the seed
/// taints every subsequent value.
pub fn ema_of_series(values: &[f64], period: usize) -> Vec<f64> {
    let n = values.len();
    let mut result = vec![f64::NAN; n];

    if period == 0 || n < period {
        return result;
    }

    let alpha = 2.0 / (period as f64 + 1.0);

    // First position where a full window of defined values is available.
    let first_valid = match values.iter().position(|v| !v.is_nan()) {
        Some(idx) => idx,
        None => return result,
    };
    let seed_end = first_valid + period; // exclusive
    if seed_end > n {
        return result;
    }

    // Seed: SMA of the first `period` defined values
    let mut sum = 0.0;
    for &v in &values[first_valid..seed_end] {
        if v.is_nan() {
            return result; // hole inside the seed window
        }
        sum += v;
    }
    let seed = sum / period as f64;
    result[seed_end - 1] = seed;

    // Recursive EMA
    let mut prev = seed;
    for i in seed_end..n {
        if values[i].is_nan() {
            // NaN propagates: subsequent values are tainted
            for val in result.iter_mut().skip(i) {
                *val = f64::NAN;
            }
            return result;
        }
        let ema = alpha * values[i] + (1.0 - alpha) * prev;
        result[i] = ema;
        prev = ema;
    }

    result
}
