//! Awesome oscillator (AO).
//!
//! AO = SMA_fast(midpoint) - SMA_slow(midpoint), midpoint = (high + low) / 2.
//! Conventional periods: fast 5, slow 34.
//! Lookback: slow_period - 1.

use super::sma::sma_of_series;
use super::Indicator;
use crate::domain::Candle;

#[derive(Debug, Clone)]
pub struct AwesomeOscillator {
    fast_period: usize,
    slow_period: usize,
}

impl AwesomeOscillator {
    pub fn new(fast_period: usize, slow_period: usize) -> Self {
        assert!(fast_period >= 1, "AO fast period must be >= 1");
        assert!(
            slow_period > fast_period,
            "AO slow period must be > fast period"
        );
        Self {
            fast_period,
            slow_period,
        }
    }

    /// The conventional 5/34 configuration.
    pub fn default_periods() -> Self {
        Self::new(5, 34)
    }
}

impl Indicator for AwesomeOscillator {
    fn name(&self) -> &str {
        "ao"
    }

    fn lookback(&self) -> usize {
        self.slow_period - 1
    }

    fn compute(&self, candles: &[Candle]) -> Vec<f64> {
        let midpoints: Vec<f64> = candles.iter().map(|c| (c.high + c.low) / 2.0).collect();
        let fast = sma_of_series(&midpoints, self.fast_period);
        let slow = sma_of_series(&midpoints, self.slow_period);
        fast.iter().zip(slow.iter()).map(|(&f, &s)| f - s).collect()
    }
}
