//! Heikin-Ashi reversal strategy — pure synthetic-candle shape conditions.
//!
//! Buys into an accelerating bearish move: the current synthetic candle is
//! bearish, its body is longer than the previous body, the previous candle
//! was already bearish, and the candle has no upper wick (ha_open == ha_high).
//! The sell tree is the exact bullish mirror with ha_open == ha_low.

use crate::conditions::{self, CmpOp};
use crate::domain::Candle;
use crate::indicators::{HaField, HeikinAshi, Indicator, IndicatorValues};

use super::{ha_body, series, Strategy};

#[derive(Debug, Clone, Default)]
pub struct HeikinAshiReversal;

impl HeikinAshiReversal {
    pub fn new() -> Self {
        Self
    }
}

impl Strategy for HeikinAshiReversal {
    fn name(&self) -> &str {
        "heikinashi_reversal"
    }

    fn indicators(&self) -> Vec<Box<dyn Indicator>> {
        vec![
            Box::new(HeikinAshi::new(HaField::Open)),
            Box::new(HeikinAshi::new(HaField::High)),
            Box::new(HeikinAshi::new(HaField::Low)),
            Box::new(HeikinAshi::new(HaField::Close)),
        ]
    }

    fn buy_trend(&self, candles: &[Candle], indicators: &IndicatorValues) -> Vec<bool> {
        let ha_open = series(indicators, "ha_open");
        let ha_high = series(indicators, "ha_high");
        let ha_close = series(indicators, "ha_close");
        let body = ha_body(indicators);
        let prev_body = conditions::shift(&body, 1);
        let prev_open = conditions::shift(ha_open, 1);
        let prev_close = conditions::shift(ha_close, 1);

        let trees = [
            // Latest synthetic candle is bearish.
            conditions::compare(ha_close, ha_open, CmpOp::Lt),
            // Body longer than the previous body.
            conditions::compare(&body, &prev_body, CmpOp::Gt),
            // Previous candle was bearish too.
            conditions::compare(&prev_close, &prev_open, CmpOp::Lt),
            // No upper wick.
            conditions::compare(ha_open, ha_high, CmpOp::Eq),
        ];
        conditions::all_of(&trees, candles.len())
    }

    fn sell_trend(&self, candles: &[Candle], indicators: &IndicatorValues) -> Vec<bool> {
        let ha_open = series(indicators, "ha_open");
        let ha_low = series(indicators, "ha_low");
        let ha_close = series(indicators, "ha_close");
        let body = ha_body(indicators);
        let prev_body = conditions::shift(&body, 1);
        let prev_open = conditions::shift(ha_open, 1);
        let prev_close = conditions::shift(ha_close, 1);

        let trees = [
            // Latest synthetic candle is bullish.
            conditions::compare(ha_close, ha_open, CmpOp::Gt),
            conditions::compare(&body, &prev_body, CmpOp::Gt),
            conditions::compare(&prev_close, &prev_open, CmpOp::Gt),
            // No lower wick.
            conditions::compare(ha_open, ha_low, CmpOp::Eq),
        ];
        conditions::all_of(&trees, candles.len())
    }
}
