//! End-to-end strategy behaviors: the Heikin-Ashi recurrence on a
//! handcrafted fixture, the parameterized buy generator over a sinusoidal
//! series, and the buy/sell trigger asymmetry.

use chrono::NaiveDate;
use siglab_core::conditions::{compare, compare_scalar, CmpOp};
use siglab_core::domain::{Candle, Metadata};
use siglab_core::hyperopt::{
    hyperopt_indicators, HyperStrategy, ParamMap, ParamValue,
};
use siglab_core::indicators::{compute_heikin_ashi, precompute};
use siglab_core::strategy::Strategy;

fn candle(i: usize, open: f64, high: f64, low: f64, close: f64) -> Candle {
    let base = NaiveDate::from_ymd_opt(2024, 1, 2)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    Candle {
        date: base + chrono::Duration::hours(i as i64),
        open,
        high,
        low,
        close,
        volume: 1000.0,
    }
}

fn sinusoid_candles(n: usize) -> Vec<Candle> {
    (0..n)
        .map(|i| {
            let close = 100.0 + (i as f64 * 0.1).sin() * 10.0;
            let open = close - 0.3;
            candle(i, open, close + 1.5, close - 1.5, close)
        })
        .collect()
}

fn assert_approx(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-10,
        "actual={actual}, expected={expected}"
    );
}

// ── Heikin-Ashi recurrence fixture ───────────────────────────────────

#[test]
fn heikin_ashi_five_row_fixture() {
    let candles = vec![
        candle(0, 10.0, 12.0, 8.0, 11.0),
        candle(1, 11.0, 13.0, 10.0, 12.0),
        candle(2, 12.0, 14.0, 11.0, 13.0),
        candle(3, 13.0, 13.5, 9.0, 10.0),
        candle(4, 10.0, 11.0, 9.5, 10.5),
    ];
    let ha = compute_heikin_ashi(&candles);

    // Row 0: seeded from the raw candle.
    assert_approx(ha.close[0], 10.25); // (10+12+8+11)/4
    assert_approx(ha.open[0], 10.5); // (10+11)/2
    assert_approx(ha.high[0], 12.0);
    assert_approx(ha.low[0], 8.0);

    // Rows 1..: open is the average of the previous synthetic open/close.
    assert_approx(ha.close[1], 11.5);
    assert_approx(ha.open[1], 10.375); // (10.5+10.25)/2
    assert_approx(ha.high[1], 13.0);
    assert_approx(ha.low[1], 10.0);

    assert_approx(ha.close[2], 12.5);
    assert_approx(ha.open[2], 10.9375); // (10.375+11.5)/2
    assert_approx(ha.high[2], 14.0);
    // Synthetic open undercuts the raw low here.
    assert_approx(ha.low[2], 10.9375);

    assert_approx(ha.close[3], 11.375);
    assert_approx(ha.open[3], 11.71875); // (10.9375+12.5)/2
    assert_approx(ha.high[3], 13.5);
    assert_approx(ha.low[3], 9.0);

    assert_approx(ha.close[4], 10.25);
    assert_approx(ha.open[4], 11.546875); // (11.71875+11.375)/2
    // Synthetic open exceeds the raw high, so it caps the range.
    assert_approx(ha.high[4], 11.546875);
    assert_approx(ha.low[4], 9.5);
}

// ── Sinusoid scenario: rsi guard + sma20 trigger ─────────────────────

#[test]
fn sinusoid_scenario_buy_matches_condition_product() {
    let candles = sinusoid_candles(300);
    let params = ParamMap::from([
        ("rsi-enabled", ParamValue::Bool(true)),
        ("rsi-value", ParamValue::Int(40)),
        ("trigger", ParamValue::Cat("sma20".into())),
    ]);
    let strategy = HyperStrategy::new(params).unwrap();
    let analysis = strategy
        .analyze(&candles, &Metadata::new("SINE/USDT"))
        .unwrap();

    let indicators = precompute(&candles, &hyperopt_indicators()).unwrap();
    let ha_close = indicators.get_series("ha_close").unwrap();
    let sma20 = indicators.get_series("sma_20").unwrap();
    let rsi = indicators.get_series("rsi_14").unwrap();

    let trigger = compare(ha_close, sma20, CmpOp::Lt);
    let guard = compare_scalar(rsi, 40.0, CmpOp::Gt);

    assert_eq!(analysis.buy.len(), 300);
    for i in 0..300 {
        assert_eq!(
            analysis.buy[i],
            trigger[i] && guard[i],
            "mismatch at index {i}"
        );
    }

    // The sma20 warm-up prefix is false, not undefined.
    for i in 0..19 {
        assert!(!analysis.buy[i], "warmup signal at index {i}");
    }
    // The scenario actually exercises the trigger somewhere.
    assert!(analysis.buy_count() > 0, "scenario produced no signals");
}

// ── Trigger asymmetry: buy reads ha_close, sell reads raw close ──────

#[test]
fn sell_triggers_compare_raw_close() {
    // Deliberate asymmetry carried over from the source strategy: the sell
    // ladder compares the raw close, not the synthetic close.
    let candles = sinusoid_candles(300);
    let params = ParamMap::from([("sell-trigger", ParamValue::Cat("sell-sma20".into()))]);
    let strategy = HyperStrategy::new(params).unwrap();
    let analysis = strategy
        .analyze(&candles, &Metadata::new("SINE/USDT"))
        .unwrap();

    let indicators = precompute(&candles, &hyperopt_indicators()).unwrap();
    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
    let sma20 = indicators.get_series("sma_20").unwrap();
    let expected = compare(&closes, sma20, CmpOp::Gt);

    assert_eq!(analysis.sell, expected);
}

#[test]
fn buy_triggers_compare_synthetic_close() {
    let candles = sinusoid_candles(300);
    let params = ParamMap::from([("trigger", ParamValue::Cat("sma20".into()))]);
    let strategy = HyperStrategy::new(params).unwrap();
    let analysis = strategy
        .analyze(&candles, &Metadata::new("SINE/USDT"))
        .unwrap();

    let indicators = precompute(&candles, &hyperopt_indicators()).unwrap();
    let ha_close = indicators.get_series("ha_close").unwrap();
    let sma20 = indicators.get_series("sma_20").unwrap();
    let expected = compare(ha_close, sma20, CmpOp::Lt);

    assert_eq!(analysis.buy, expected);
}
