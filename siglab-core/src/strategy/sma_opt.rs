//! Default trees for the SMA-ladder optimizer variant.
//!
//! These are the fixed buy/sell trees used when a search run does not cover
//! that side; they share the indicator set of the parameterized generators in
//! `hyperopt` (RSI, the SMA ladder, Heikin-Ashi).

use crate::conditions::{self, CmpOp};
use crate::domain::Candle;
use crate::indicators::{HaField, HeikinAshi, Indicator, IndicatorValues, Rsi, Sma};

use super::{ha_body, series, Strategy};

#[derive(Debug, Clone, Default)]
pub struct SmaOpt;

impl SmaOpt {
    pub fn new() -> Self {
        Self
    }
}

impl Strategy for SmaOpt {
    fn name(&self) -> &str {
        "sma_opt"
    }

    fn indicators(&self) -> Vec<Box<dyn Indicator>> {
        let mut set: Vec<Box<dyn Indicator>> = vec![Box::new(Rsi::new(Rsi::DEFAULT_PERIOD))];
        for period in [5, 14, 20, 50, 200] {
            set.push(Box::new(Sma::new(period)));
        }
        for field in [HaField::Open, HaField::High, HaField::Low, HaField::Close] {
            set.push(Box::new(HeikinAshi::new(field)));
        }
        set
    }

    fn buy_trend(&self, candles: &[Candle], indicators: &IndicatorValues) -> Vec<bool> {
        let ha_open = series(indicators, "ha_open");
        let ha_high = series(indicators, "ha_high");
        let ha_close = series(indicators, "ha_close");
        let sma14 = series(indicators, "sma_14");
        let rsi = series(indicators, "rsi_14");
        let body = ha_body(indicators);
        let prev_body = conditions::shift(&body, 1);
        let prev_open = conditions::shift(ha_open, 1);
        let prev_close = conditions::shift(ha_close, 1);

        // Entry trigger: synthetic close crossing above SMA-14, or making a
        // new synthetic high while already above SMA-14.
        let trigger = conditions::or(
            &conditions::crossed_above(ha_close, sma14),
            &conditions::and(
                &conditions::crossed_above(ha_close, &prev_close),
                &conditions::compare(ha_close, sma14, CmpOp::Gt),
            ),
        );

        let trees = [
            trigger,
            // Latest synthetic candle is bearish with a growing body.
            conditions::compare(ha_close, ha_open, CmpOp::Lt),
            conditions::compare(&body, &prev_body, CmpOp::Gt),
            conditions::compare(&prev_close, &prev_open, CmpOp::Lt),
            // Candle carries an upper wick.
            conditions::compare(ha_open, ha_high, CmpOp::Ne),
            conditions::compare_scalar(rsi, 60.0, CmpOp::Lt),
        ];
        conditions::all_of(&trees, candles.len())
    }

    fn sell_trend(&self, candles: &[Candle], indicators: &IndicatorValues) -> Vec<bool> {
        let ha_close = series(indicators, "ha_close");
        let ha_low = series(indicators, "ha_low");
        let sma14 = series(indicators, "sma_14");
        let prev_close = conditions::shift(ha_close, 1);

        let trees = [
            conditions::crossed_above(ha_close, &prev_close),
            conditions::compare(ha_low, sma14, CmpOp::Lt),
        ];
        conditions::all_of(&trees, candles.len())
    }
}
