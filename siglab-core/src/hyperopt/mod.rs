//! Parameterized signal generation — the optimizer-facing strategy surface.
//!
//! The generators assemble their condition list at call time from a
//! `ParamMap`: optional guards join when their boolean flag is present and
//! true, and exactly one trigger joins according to the categorical trigger
//! parameter. The decision series is the AND over the active conditions; an
//! empty active list yields all-`false` (no active condition must never read
//! as "always act").

pub mod params;
pub mod roi;
pub mod space;
pub mod triggers;

pub use params::{ParamMap, ParamValue};
pub use roi::{generate_roi_table, has_roi_params};
pub use space::{
    full_space, indicator_space, roi_space, sample_space, sell_indicator_space, stoploss_space,
    Dimension, DimensionKind,
};
pub use triggers::{BuyTrigger, SellTrigger};

use crate::conditions::{self, CmpOp};
use crate::domain::{Candle, StrategyError};
use crate::indicators::{HaField, HeikinAshi, Indicator, IndicatorValues, Rsi, Sma};
use crate::strategy::{series, Strategy, DEFAULT_STOPLOSS};
use std::collections::BTreeMap;

/// A built decision-series generator, ready to run over analyzed data.
pub type TrendFn = Box<dyn Fn(&[Candle], &IndicatorValues) -> Vec<bool> + Send + Sync>;

/// Buy decision series for one candidate parameter mapping.
///
/// Guards: `rsi-enabled` + `rsi-value` -> rsi > value.
/// Trigger: `trigger` categorical, dispatched through `BuyTrigger`.
pub fn populate_buy_trend(
    params: &ParamMap,
    candles: &[Candle],
    indicators: &IndicatorValues,
) -> Vec<bool> {
    let mut active: Vec<Vec<bool>> = Vec::new();

    if params.flag("rsi-enabled") {
        if let Some(value) = params.real("rsi-value") {
            active.push(conditions::compare_scalar(
                series(indicators, "rsi_14"),
                value,
                CmpOp::Gt,
            ));
        }
    }

    if let Some(label) = params.cat("trigger") {
        if let Some(trigger) = BuyTrigger::from_label(label) {
            active.push(trigger.condition(candles, indicators));
        }
    }

    conditions::all_of(&active, candles.len())
}

/// Sell decision series for one candidate parameter mapping.
///
/// Mirrors the buy side under `sell-`-prefixed keys; sell triggers compare
/// the raw close (see `triggers` module doc).
pub fn populate_sell_trend(
    params: &ParamMap,
    candles: &[Candle],
    indicators: &IndicatorValues,
) -> Vec<bool> {
    let mut active: Vec<Vec<bool>> = Vec::new();

    if params.flag("sell-rsi-enabled") {
        if let Some(value) = params.real("sell-rsi-value") {
            active.push(conditions::compare_scalar(
                series(indicators, "rsi_14"),
                value,
                CmpOp::Gt,
            ));
        }
    }

    if let Some(label) = params.cat("sell-trigger") {
        if let Some(trigger) = SellTrigger::from_label(label) {
            active.push(trigger.condition(candles, indicators));
        }
    }

    conditions::all_of(&active, candles.len())
}

/// Build a buy generator closure owning its parameter snapshot.
pub fn buy_trend_generator(params: &ParamMap) -> TrendFn {
    let params = params.clone();
    Box::new(move |candles, indicators| populate_buy_trend(&params, candles, indicators))
}

/// Build a sell generator closure owning its parameter snapshot.
pub fn sell_trend_generator(params: &ParamMap) -> TrendFn {
    let params = params.clone();
    Box::new(move |candles, indicators| populate_sell_trend(&params, candles, indicators))
}

/// The indicator set every candidate evaluation needs: RSI, the SMA ladder
/// the triggers dispatch over, and the four Heikin-Ashi fields.
pub fn hyperopt_indicators() -> Vec<Box<dyn Indicator>> {
    let mut set: Vec<Box<dyn Indicator>> = vec![Box::new(Rsi::new(Rsi::DEFAULT_PERIOD))];
    for period in [5, 14, 20, 50, 200] {
        set.push(Box::new(Sma::new(period)));
    }
    for field in [HaField::Open, HaField::High, HaField::Low, HaField::Close] {
        set.push(Box::new(HeikinAshi::new(field)));
    }
    set
}

/// A candidate parameter mapping wrapped as a `Strategy`, so optimizer
/// candidates run through the same `analyze` pipeline as the fixed variants.
///
/// ROI parameters, when present, are resolved to a schedule at construction
/// so a malformed candidate fails before any series work happens.
pub struct HyperStrategy {
    params: ParamMap,
    roi: BTreeMap<u32, f64>,
    stoploss: f64,
}

impl HyperStrategy {
    pub fn new(params: ParamMap) -> Result<Self, StrategyError> {
        let roi = if has_roi_params(&params) {
            generate_roi_table(&params)?
        } else {
            BTreeMap::from([(0, 100.0)])
        };
        let stoploss = params.real("stoploss").unwrap_or(DEFAULT_STOPLOSS);
        Ok(Self {
            params,
            roi,
            stoploss,
        })
    }

    pub fn params(&self) -> &ParamMap {
        &self.params
    }
}

impl Strategy for HyperStrategy {
    fn name(&self) -> &str {
        "hyperopt"
    }

    fn indicators(&self) -> Vec<Box<dyn Indicator>> {
        hyperopt_indicators()
    }

    fn buy_trend(&self, candles: &[Candle], indicators: &IndicatorValues) -> Vec<bool> {
        populate_buy_trend(&self.params, candles, indicators)
    }

    fn sell_trend(&self, candles: &[Candle], indicators: &IndicatorValues) -> Vec<bool> {
        populate_sell_trend(&self.params, candles, indicators)
    }

    fn minimal_roi(&self) -> BTreeMap<u32, f64> {
        self.roi.clone()
    }

    fn stoploss(&self) -> f64 {
        self.stoploss
    }
}
