//! Heikin-Ashi synthetic candle transform.
//!
//! Derives a smoothed candle series from raw candles via a first-order
//! recurrence, so the whole transform runs in one forward pass:
//!
//! - ha_close[i] = (open + high + low + close) / 4
//! - ha_open[0]  = (open[0] + close[0]) / 2
//! - ha_open[i]  = (ha_open[i-1] + ha_close[i-1]) / 2
//! - ha_high[i]  = max(high, ha_open, ha_close)
//! - ha_low[i]   = min(low, ha_open, ha_close)
//!
//! A void raw candle breaks the ha_open chain; every position from the void
//! candle onward is NaN (same taint convention as the recursive EMA).

use super::Indicator;
use crate::domain::Candle;

/// The four derived series of the Heikin-Ashi transform.
#[derive(Debug, Clone)]
pub struct HaSeries {
    pub open: Vec<f64>,
    pub high: Vec<f64>,
    pub low: Vec<f64>,
    pub close: Vec<f64>,
}

/// Compute all four Heikin-Ashi series in a single forward pass.
pub fn compute_heikin_ashi(candles: &[Candle]) -> HaSeries {
    let n = candles.len();
    let mut open = vec![f64::NAN; n];
    let mut high = vec![f64::NAN; n];
    let mut low = vec![f64::NAN; n];
    let mut close = vec![f64::NAN; n];

    for (i, candle) in candles.iter().enumerate() {
        if candle.is_void() {
            // Recurrence chain broken; the remainder of every series stays NaN.
            break;
        }

        close[i] = (candle.open + candle.high + candle.low + candle.close) / 4.0;
        open[i] = if i == 0 {
            (candle.open + candle.close) / 2.0
        } else {
            (open[i - 1] + close[i - 1]) / 2.0
        };
        high[i] = candle.high.max(open[i]).max(close[i]);
        low[i] = candle.low.min(open[i]).min(close[i]);
    }

    HaSeries {
        open,
        high,
        low,
        close,
    }
}

/// Output field selector for the `Indicator` adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HaField {
    Open,
    High,
    Low,
    Close,
}

impl HaField {
    fn series_name(&self) -> &'static str {
        match self {
            HaField::Open => "ha_open",
            HaField::High => "ha_high",
            HaField::Low => "ha_low",
            HaField::Close => "ha_close",
        }
    }
}

/// `Indicator` adapter exposing one Heikin-Ashi field as a named series.
///
/// Each field is a separate instance, matching how multi-band indicators
/// plug into the single-series pipeline.
#[derive(Debug, Clone)]
pub struct HeikinAshi {
    field: HaField,
}

impl HeikinAshi {
    pub fn new(field: HaField) -> Self {
        Self { field }
    }
}

impl Indicator for HeikinAshi {
    fn name(&self) -> &str {
        self.field.series_name()
    }

    fn lookback(&self) -> usize {
        0
    }

    fn compute(&self, candles: &[Candle]) -> Vec<f64> {
        let ha = compute_heikin_ashi(candles);
        match self.field {
            HaField::Open => ha.open,
            HaField::High => ha.high,
            HaField::Low => ha.low,
            HaField::Close => ha.close,
        }
    }
}
