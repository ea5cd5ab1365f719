//! Strategy trait and the analysis pipeline.
//!
//! A strategy declares its indicator set and two hard-coded condition trees
//! (buy and sell). `analyze` validates the input, precomputes the declared
//! indicators once, evaluates both trees, and returns fresh decision series —
//! the caller merges them into its own table. Nothing here mutates shared
//! state, so independent evaluations can run on independent threads.

pub mod heikinashi;
pub mod sma_opt;
pub mod sma_tema;

pub use heikinashi::HeikinAshiReversal;
pub use sma_opt::SmaOpt;
pub use sma_tema::SmaTema;

use crate::domain::{validate_candles, Candle, Metadata, StrategyError};
use crate::indicators::{precompute, Indicator, IndicatorValues};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Default stop-loss fraction when a strategy does not override it.
pub const DEFAULT_STOPLOSS: f64 = -0.10;

/// Decision series produced by one analysis pass.
///
/// `buy` and `sell` share the input candle index domain; an unset position is
/// `false`, never undefined.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    pub pair: String,
    pub buy: Vec<bool>,
    pub sell: Vec<bool>,
}

impl Analysis {
    pub fn len(&self) -> usize {
        self.buy.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buy.is_empty()
    }

    pub fn buy_count(&self) -> usize {
        self.buy.iter().filter(|&&b| b).count()
    }

    pub fn sell_count(&self) -> usize {
        self.sell.iter().filter(|&&b| b).count()
    }
}

/// A trading-signal strategy: self-declared indicator set plus buy/sell
/// condition trees over the precomputed series.
pub trait Strategy: Send + Sync {
    fn name(&self) -> &str;

    /// The indicators this strategy's trees read. `analyze` precomputes
    /// exactly this set; a tree reading an undeclared series is a bug.
    fn indicators(&self) -> Vec<Box<dyn Indicator>>;

    /// Buy decision series. Positions with no matching condition are `false`.
    fn buy_trend(&self, candles: &[Candle], indicators: &IndicatorValues) -> Vec<bool>;

    /// Sell decision series. Positions with no matching condition are `false`.
    fn sell_trend(&self, candles: &[Candle], indicators: &IndicatorValues) -> Vec<bool>;

    /// Minute-offset -> minimum-ROI schedule for early profit taking.
    fn minimal_roi(&self) -> BTreeMap<u32, f64> {
        // 10000% at offset 0: effectively disabled.
        BTreeMap::from([(0, 100.0)])
    }

    /// Stop-loss as a negative fraction of entry price.
    fn stoploss(&self) -> f64 {
        DEFAULT_STOPLOSS
    }

    /// Full analysis pass: validate, precompute, evaluate both trees.
    ///
    /// `metadata` is carried through untouched so multi-instrument callers
    /// can identify the result; the signal logic never reads it.
    fn analyze(&self, candles: &[Candle], metadata: &Metadata) -> Result<Analysis, StrategyError> {
        validate_candles(candles)?;
        let indicators = precompute(candles, &self.indicators())?;
        let buy = self.buy_trend(candles, &indicators);
        let sell = self.sell_trend(candles, &indicators);
        debug_assert_eq!(buy.len(), candles.len(), "buy series length mismatch");
        debug_assert_eq!(sell.len(), candles.len(), "sell series length mismatch");
        Ok(Analysis {
            pair: metadata.pair.clone(),
            buy,
            sell,
        })
    }
}

/// Fetch a precomputed series by name.
///
/// Only called with names the strategy itself declared via `indicators()`,
/// so a miss is an internal invariant violation, not user error.
pub(crate) fn series<'a>(indicators: &'a IndicatorValues, name: &str) -> &'a [f64] {
    match indicators.get_series(name) {
        Some(s) => s,
        None => panic!("indicator series '{name}' was not precomputed"),
    }
}

/// Candle body length of each Heikin-Ashi candle: |ha_close - ha_open|.
/// NaN in either operand stays NaN.
pub(crate) fn ha_body(indicators: &IndicatorValues) -> Vec<f64> {
    let ha_open = series(indicators, "ha_open");
    let ha_close = series(indicators, "ha_close");
    ha_open
        .iter()
        .zip(ha_close.iter())
        .map(|(&o, &c)| (c - o).abs())
        .collect()
}
