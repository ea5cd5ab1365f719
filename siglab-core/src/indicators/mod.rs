//! Indicator pipeline — pure series-in, series-out transforms.
//!
//! Every indicator implements the `Indicator` trait: a full candle series in,
//! a numeric series of identical length out, with the first `lookback()`
//! positions `f64::NAN` (warm-up). Indicators are precomputed once per
//! analysis into an `IndicatorValues` container and looked up by name.
//!
//! Multi-series transforms (Heikin-Ashi) are exposed as separate named
//! instances per output field, keeping the single-series trait unchanged.

pub mod awesome;
pub mod ema;
pub mod heikin_ashi;
pub mod rsi;
pub mod sma;
pub mod tema;

pub use awesome::AwesomeOscillator;
pub use ema::Ema;
pub use heikin_ashi::{compute_heikin_ashi, HaField, HaSeries, HeikinAshi};
pub use rsi::Rsi;
pub use sma::Sma;
pub use tema::Tema;

use crate::domain::{Candle, StrategyError};
use std::collections::HashMap;

/// Trait for indicators.
///
/// Indicators take a full candle series and produce a numeric output series
/// of the same length. The first `lookback()` values should be `f64::NAN`.
///
/// # Look-ahead contamination guard
/// No indicator value at index t may depend on candle data from t+1 or later.
pub trait Indicator: Send + Sync {
    /// Series name the strategies look the output up under (e.g., "sma_20").
    fn name(&self) -> &str;

    /// Number of candles consumed before the indicator produces valid output.
    fn lookback(&self) -> usize;

    /// Compute the indicator for the entire candle series.
    fn compute(&self, candles: &[Candle]) -> Vec<f64>;
}

/// Container for precomputed indicator values.
///
/// Built once before signal evaluation, then queried by name and index.
#[derive(Debug, Clone, Default)]
pub struct IndicatorValues {
    series: HashMap<String, Vec<f64>>,
}

impl IndicatorValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a named indicator series.
    pub fn insert(&mut self, name: impl Into<String>, values: Vec<f64>) {
        self.series.insert(name.into(), values);
    }

    /// Get the indicator value at a specific index.
    pub fn get(&self, name: &str, index: usize) -> Option<f64> {
        self.series.get(name).and_then(|v| v.get(index).copied())
    }

    /// Get the full series for a named indicator.
    pub fn get_series(&self, name: &str) -> Option<&[f64]> {
        self.series.get(name).map(|v| v.as_slice())
    }

    /// Number of stored series.
    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}

/// Precompute a set of indicators over one candle series.
///
/// Every output series must match the candle count; a mismatch is a bug in
/// the indicator and fails the whole analysis.
pub fn precompute(
    candles: &[Candle],
    indicators: &[Box<dyn Indicator>],
) -> Result<IndicatorValues, StrategyError> {
    let mut values = IndicatorValues::new();
    for indicator in indicators {
        let series = indicator.compute(candles);
        if series.len() != candles.len() {
            return Err(StrategyError::LengthMismatch {
                name: indicator.name().to_string(),
                got: series.len(),
                expected: candles.len(),
            });
        }
        values.insert(indicator.name(), series);
    }
    Ok(values)
}

/// Warm-up length for a set of indicators: the maximum lookback.
pub fn warmup(indicators: &[Box<dyn Indicator>]) -> usize {
    indicators.iter().map(|i| i.lookback()).max().unwrap_or(0)
}

/// The full indicator set referenced across strategy variants: RSI, the SMA
/// ladder, EMA-14, TEMA-100, the awesome oscillator, and all four
/// Heikin-Ashi fields.
pub fn standard_indicators() -> Vec<Box<dyn Indicator>> {
    let mut set: Vec<Box<dyn Indicator>> = vec![Box::new(Rsi::new(Rsi::DEFAULT_PERIOD))];
    for period in [5, 8, 14, 20, 50, 100, 200] {
        set.push(Box::new(Sma::new(period)));
    }
    set.push(Box::new(Ema::new(14)));
    set.push(Box::new(Tema::new(100)));
    set.push(Box::new(AwesomeOscillator::default_periods()));
    for field in [HaField::Open, HaField::High, HaField::Low, HaField::Close] {
        set.push(Box::new(HeikinAshi::new(field)));
    }
    set
}

/// Create synthetic candles from close prices for testing.
///
/// Generates plausible OHLV: open = prev_close (or close for first candle),
/// high = max(open,close) + 1.0, low = min(open,close) - 1.0, volume = 1000.
#[cfg(test)]
pub fn make_candles(closes: &[f64]) -> Vec<crate::domain::Candle> {
    use crate::domain::Candle;
    let base = chrono::NaiveDate::from_ymd_opt(2024, 1, 2)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| {
            let open = if i == 0 { close } else { closes[i - 1] };
            let high = open.max(close) + 1.0;
            let low = open.min(close) - 1.0;
            Candle {
                date: base + chrono::Duration::hours(i as i64),
                open,
                high,
                low,
                close,
                volume: 1000.0,
            }
        })
        .collect()
}

/// Assert two f64 values are approximately equal (within epsilon).
#[cfg(test)]
pub fn assert_approx(actual: f64, expected: f64, epsilon: f64) {
    assert!(
        (actual - expected).abs() < epsilon,
        "assert_approx failed: actual={actual}, expected={expected}, diff={}, epsilon={epsilon}",
        (actual - expected).abs()
    );
}

/// Default epsilon for indicator tests.
#[cfg(test)]
pub const DEFAULT_EPSILON: f64 = 1e-10;
