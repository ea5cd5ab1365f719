//! SMA/TEMA strategy — synthetic close crossing a slow TEMA.
//!
//! Buys when the Heikin-Ashi close crosses below TEMA-100 while the synthetic
//! candle is bearish and carries an upper wick; sells when the synthetic close
//! crosses back above TEMA-100. The full indicator ladder (RSI, SMA 5/8/20,
//! EMA-14, awesome oscillator) is declared for parity with the variant's
//! chart setup even where the active trees only read a subset.

use crate::conditions::{self, CmpOp};
use crate::domain::Candle;
use crate::indicators::{
    AwesomeOscillator, Ema, HaField, HeikinAshi, Indicator, IndicatorValues, Rsi, Sma, Tema,
};
use std::collections::BTreeMap;

use super::{series, Strategy};

#[derive(Debug, Clone, Default)]
pub struct SmaTema;

impl SmaTema {
    pub fn new() -> Self {
        Self
    }
}

impl Strategy for SmaTema {
    fn name(&self) -> &str {
        "sma_tema"
    }

    fn indicators(&self) -> Vec<Box<dyn Indicator>> {
        vec![
            Box::new(Rsi::new(Rsi::DEFAULT_PERIOD)),
            Box::new(Sma::new(5)),
            Box::new(Sma::new(8)),
            Box::new(Sma::new(20)),
            Box::new(Ema::new(14)),
            Box::new(Tema::new(100)),
            Box::new(AwesomeOscillator::default_periods()),
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
        let tema = series(indicators, "tema_100");

        let trees = [
            conditions::crossed_below(ha_close, tema),
            // Latest synthetic candle is bearish.
            conditions::compare(ha_close, ha_open, CmpOp::Lt),
            // Candle carries an upper wick.
            conditions::compare(ha_open, ha_high, CmpOp::Ne),
        ];
        conditions::all_of(&trees, candles.len())
    }

    fn sell_trend(&self, candles: &[Candle], indicators: &IndicatorValues) -> Vec<bool> {
        let ha_close = series(indicators, "ha_close");
        let tema = series(indicators, "tema_100");
        conditions::crossed_above(ha_close, tema)
    }

    fn minimal_roi(&self) -> BTreeMap<u32, f64> {
        BTreeMap::from([(0, 100.0)])
    }

    fn stoploss(&self) -> f64 {
        -0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Metadata;
    use crate::indicators::make_candles;

    fn long_sinusoid(n: usize) -> Vec<Candle> {
        let closes: Vec<f64> = (0..n)
            .map(|i| 100.0 + (i as f64 * 0.1).sin() * 10.0)
            .collect();
        make_candles(&closes)
    }

    #[test]
    fn warmup_prefix_is_false_not_undefined() {
        let candles = long_sinusoid(400);
        let analysis = SmaTema::new()
            .analyze(&candles, &Metadata::new("TEST/USDT"))
            .unwrap();
        // TEMA-100 lookback covers the first 297 positions; crossings there
        // see NaN and must come out false.
        for i in 0..297 {
            assert!(!analysis.buy[i], "warmup buy at {i}");
            assert!(!analysis.sell[i], "warmup sell at {i}");
        }
    }

    #[test]
    fn buy_only_where_full_tree_holds() {
        let candles = long_sinusoid(400);
        let strategy = SmaTema::new();
        let indicators =
            crate::indicators::precompute(&candles, &strategy.indicators()).unwrap();
        let buy = strategy.buy_trend(&candles, &indicators);

        let ha_open = indicators.get_series("ha_open").unwrap();
        let ha_high = indicators.get_series("ha_high").unwrap();
        let ha_close = indicators.get_series("ha_close").unwrap();
        let tema = indicators.get_series("tema_100").unwrap();
        let crossing = conditions::crossed_below(ha_close, tema);

        for i in 0..candles.len() {
            let expected = crossing[i]
                && !ha_close[i].is_nan()
                && ha_close[i] < ha_open[i]
                && ha_open[i] != ha_high[i];
            assert_eq!(buy[i], expected, "mismatch at {i}");
        }
    }

    #[test]
    fn sell_is_pure_crossing() {
        let candles = long_sinusoid(400);
        let strategy = SmaTema::new();
        let indicators =
            crate::indicators::precompute(&candles, &strategy.indicators()).unwrap();
        let sell = strategy.sell_trend(&candles, &indicators);
        let expected = conditions::crossed_above(
            indicators.get_series("ha_close").unwrap(),
            indicators.get_series("tema_100").unwrap(),
        );
        assert_eq!(sell, expected);
    }

    #[test]
    fn roi_is_effectively_disabled() {
        let roi = SmaTema::new().minimal_roi();
        assert_eq!(roi.get(&0), Some(&100.0));
    }
}
