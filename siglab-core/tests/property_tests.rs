//! Property tests for signal-core invariants.
//!
//! Uses proptest to verify:
//! 1. Crossing symmetry — crossed(A,B,Above) equals crossed(B,A,Below)
//! 2. Empty-condition-set safety — no guards + unknown trigger never signals
//! 3. ROI monotonicity — offsets strictly increase, values strictly decrease
//! 4. Determinism — identical inputs and params give identical decisions

use proptest::prelude::*;
use siglab_core::conditions::{crossed, Direction};
use siglab_core::domain::{Candle, Metadata};
use siglab_core::fingerprint::params_hash;
use siglab_core::hyperopt::{generate_roi_table, HyperStrategy, ParamMap, ParamValue};
// Anonymous import: `analyze` comes from this trait, but the name would
// collide with proptest's `Strategy`.
use siglab_core::strategy::Strategy as _;

// ── Fixtures ─────────────────────────────────────────────────────────

fn make_candles(closes: &[f64]) -> Vec<Candle> {
    let base = chrono::NaiveDate::from_ymd_opt(2024, 1, 2)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| {
            let open = if i == 0 { close } else { closes[i - 1] };
            Candle {
                date: base + chrono::Duration::hours(i as i64),
                open,
                high: open.max(close) + 1.0,
                low: open.min(close) - 1.0,
                close,
                volume: 1000.0,
            }
        })
        .collect()
}

// ── Strategies (proptest) ────────────────────────────────────────────

fn arb_value() -> impl Strategy<Value = f64> {
    prop_oneof![
        8 => 1.0..200.0_f64,
        1 => Just(f64::NAN),
    ]
}

fn arb_series_pair() -> impl Strategy<Value = (Vec<f64>, Vec<f64>)> {
    (1usize..64).prop_flat_map(|n| {
        (
            prop::collection::vec(arb_value(), n),
            prop::collection::vec(arb_value(), n),
        )
    })
}

fn arb_closes() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(10.0..500.0_f64, 1..250)
}

// ── 1. Crossing symmetry ─────────────────────────────────────────────

proptest! {
    /// crossed(A,B,"above") at i iff crossed(B,A,"below") at i, NaN included.
    #[test]
    fn crossing_is_symmetric((a, b) in arb_series_pair()) {
        let above = crossed(&a, &b, Direction::Above);
        let mirrored = crossed(&b, &a, Direction::Below);
        prop_assert_eq!(above, mirrored);
    }

    /// Index 0 never reports a crossing: there is no prior sample.
    #[test]
    fn no_crossing_at_index_zero((a, b) in arb_series_pair()) {
        prop_assert!(!crossed(&a, &b, Direction::Above)[0]);
        prop_assert!(!crossed(&a, &b, Direction::Below)[0]);
    }
}

// ── 2. Empty-condition-set safety ────────────────────────────────────

proptest! {
    /// No enabled guards plus an unrecognized trigger label must yield an
    /// all-false decision series for any input length.
    #[test]
    fn empty_condition_set_never_signals(
        closes in arb_closes(),
        label in "[a-z_]{1,12}",
    ) {
        // Only unknown labels are interesting here.
        prop_assume!(!["sma5", "sma14", "sma20", "sma50", "sma200"].contains(&label.as_str()));

        let candles = make_candles(&closes);
        let params = ParamMap::from([
            ("rsi-enabled", ParamValue::Bool(false)),
            ("trigger", ParamValue::Cat(label)),
        ]);
        let strategy = HyperStrategy::new(params).unwrap();
        let analysis = strategy.analyze(&candles, &Metadata::new("PROP/TEST")).unwrap();

        prop_assert_eq!(analysis.buy.len(), candles.len());
        prop_assert!(analysis.buy.iter().all(|&b| !b));
        prop_assert!(analysis.sell.iter().all(|&b| !b));
    }
}

// ── 3. ROI monotonicity ──────────────────────────────────────────────

proptest! {
    /// For strictly positive t's and p's the schedule has strictly
    /// increasing offsets, strictly decreasing values, and an entry at 0.
    #[test]
    fn roi_schedule_is_monotonic(
        t1 in 1i64..=120,
        t2 in 1i64..=60,
        t3 in 1i64..=40,
        p1 in 0.01f64..=0.04,
        p2 in 0.01f64..=0.07,
        p3 in 0.01f64..=0.20,
    ) {
        let params = ParamMap::from([
            ("roi_t1", ParamValue::Int(t1)),
            ("roi_t2", ParamValue::Int(t2)),
            ("roi_t3", ParamValue::Int(t3)),
            ("roi_p1", ParamValue::Real(p1)),
            ("roi_p2", ParamValue::Real(p2)),
            ("roi_p3", ParamValue::Real(p3)),
        ]);
        let table = generate_roi_table(&params).unwrap();

        prop_assert!(table.contains_key(&0));
        prop_assert_eq!(table.len(), 4);

        let entries: Vec<(u32, f64)> = table.into_iter().collect();
        for pair in entries.windows(2) {
            prop_assert!(pair[0].0 < pair[1].0, "offsets not increasing: {:?}", entries);
            prop_assert!(pair[0].1 > pair[1].1, "values not decreasing: {:?}", entries);
        }
    }
}

// ── 4. Determinism ───────────────────────────────────────────────────

proptest! {
    /// Re-running a generator on identical inputs and identical params
    /// yields identical decision series, and the candidate fingerprint is
    /// stable.
    #[test]
    fn analysis_is_deterministic(
        closes in arb_closes(),
        rsi_value in 5i64..=60,
        rsi_enabled in any::<bool>(),
    ) {
        let candles = make_candles(&closes);
        let params = ParamMap::from([
            ("rsi-enabled", ParamValue::Bool(rsi_enabled)),
            ("rsi-value", ParamValue::Int(rsi_value)),
            ("trigger", ParamValue::Cat("sma20".into())),
        ]);
        let metadata = Metadata::new("PROP/TEST");

        let first = HyperStrategy::new(params.clone()).unwrap()
            .analyze(&candles, &metadata).unwrap();
        let second = HyperStrategy::new(params.clone()).unwrap()
            .analyze(&candles, &metadata).unwrap();

        prop_assert_eq!(&first, &second);
        prop_assert_eq!(params_hash(&params), params_hash(&params.clone()));
    }
}
