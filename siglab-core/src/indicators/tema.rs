//! Triple Exponential Moving Average (TEMA).
//!
//! TEMA = 3*EMA1 - 3*EMA2 + EMA3, where EMA2 = EMA(EMA1) and EMA3 = EMA(EMA2).
//! The triple composition cancels most of the lag a plain EMA carries.
//! Lookback: 3 * (period - 1).

use super::ema::ema_of_series;
use super::Indicator;
use crate::domain::Candle;

#[derive(Debug, Clone)]
pub struct Tema {
    period: usize,
    name: String,
}

impl Tema {
    pub fn new(period: usize) -> Self {
        assert!(period >= 1, "TEMA period must be >= 1");
        Self {
            period,
            name: format!("tema_{period}"),
        }
    }
}

impl Indicator for Tema {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookback(&self) -> usize {
        3 * self.period.saturating_sub(1)
    }

    fn compute(&self, candles: &[Candle]) -> Vec<f64> {
        let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
        let ema1 = ema_of_series(&closes, self.period);
        let ema2 = ema_of_series(&ema1, self.period);
        let ema3 = ema_of_series(&ema2, self.period);

        ema1.iter()
            .zip(ema2.iter())
            .zip(ema3.iter())
            .map(|((&e1, &e2), &e3)| 3.0 * e1 - 3.0 * e2 + e3)
            .collect()
    }
}
