//! Condition library — boolean-series predicates over numeric series.
//!
//! All predicates are total: they return a `Vec<bool>` with the same index
//! domain as their inputs, and an undefined (NaN) operand always maps to
//! `false`. A decision series never contains "maybe".
//!
//! Inputs come out of one `precompute` pass over the same candle series, so
//! operand lengths always agree; a mismatch is a pipeline bug and only
//! checked in debug builds.

/// Crossing direction for `crossed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Above,
    Below,
}

/// Comparison operator for `compare` / `compare_scalar`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CmpOp {
    Gt,
    Lt,
    Ge,
    Le,
    Eq,
    Ne,
}

impl CmpOp {
    fn apply(&self, a: f64, b: f64) -> bool {
        match self {
            CmpOp::Gt => a > b,
            CmpOp::Lt => a < b,
            CmpOp::Ge => a >= b,
            CmpOp::Le => a <= b,
            // Exact equality is intentional: the wick checks in the static
            // strategies test ha_open == ha_high, both derived from the same
            // max() over identical inputs.
            CmpOp::Eq => a == b,
            CmpOp::Ne => a != b,
        }
    }
}

/// True at index i iff `a` transitions across `b` between i-1 and i in the
/// named direction.
///
/// `Above`: a <= b at i-1 and a > b at i. `Below` is the mirror.
/// False at index 0 (no prior sample) and wherever either series is NaN at
/// i or i-1.
pub fn crossed(a: &[f64], b: &[f64], direction: Direction) -> Vec<bool> {
    debug_assert_eq!(a.len(), b.len(), "crossed: operand length mismatch");
    let n = a.len().min(b.len());
    let mut result = vec![false; n];

    for i in 1..n {
        let (a_prev, a_cur) = (a[i - 1], a[i]);
        let (b_prev, b_cur) = (b[i - 1], b[i]);
        if a_prev.is_nan() || a_cur.is_nan() || b_prev.is_nan() || b_cur.is_nan() {
            continue;
        }
        result[i] = match direction {
            Direction::Above => a_prev <= b_prev && a_cur > b_cur,
            Direction::Below => a_prev >= b_prev && a_cur < b_cur,
        };
    }

    result
}

/// `crossed` with direction `Above`.
pub fn crossed_above(a: &[f64], b: &[f64]) -> Vec<bool> {
    crossed(a, b, Direction::Above)
}

/// `crossed` with direction `Below`.
pub fn crossed_below(a: &[f64], b: &[f64]) -> Vec<bool> {
    crossed(a, b, Direction::Below)
}

/// Elementwise comparison of two series. NaN operand -> false.
pub fn compare(a: &[f64], b: &[f64], op: CmpOp) -> Vec<bool> {
    debug_assert_eq!(a.len(), b.len(), "compare: operand length mismatch");
    a.iter()
        .zip(b.iter())
        .map(|(&x, &y)| !x.is_nan() && !y.is_nan() && op.apply(x, y))
        .collect()
}

/// Elementwise comparison of a series against a fixed threshold.
/// NaN operand -> false.
pub fn compare_scalar(a: &[f64], threshold: f64, op: CmpOp) -> Vec<bool> {
    a.iter()
        .map(|&x| !x.is_nan() && !threshold.is_nan() && op.apply(x, threshold))
        .collect()
}

/// Shift a series forward by `lag` steps: position i takes the source value
/// at i - lag. The first `lag` positions are NaN.
pub fn shift(series: &[f64], lag: usize) -> Vec<f64> {
    let n = series.len();
    let mut result = vec![f64::NAN; n];
    for i in lag..n {
        result[i] = series[i - lag];
    }
    result
}

/// Elementwise AND of two boolean series.
pub fn and(a: &[bool], b: &[bool]) -> Vec<bool> {
    debug_assert_eq!(a.len(), b.len(), "and: operand length mismatch");
    a.iter().zip(b.iter()).map(|(&x, &y)| x && y).collect()
}

/// Elementwise OR of two boolean series.
pub fn or(a: &[bool], b: &[bool]) -> Vec<bool> {
    debug_assert_eq!(a.len(), b.len(), "or: operand length mismatch");
    a.iter().zip(b.iter()).map(|(&x, &y)| x || y).collect()
}

/// AND-fold a list of condition series into one decision series.
///
/// The fold identity is all-`true`, but an empty list must never read as
/// "always act" — no active condition means no signal, so the empty case
/// yields an all-`false` series instead.
pub fn all_of(conditions: &[Vec<bool>], len: usize) -> Vec<bool> {
    if conditions.is_empty() {
        return vec![false; len];
    }
    let mut result = vec![true; len];
    for condition in conditions {
        debug_assert_eq!(condition.len(), len, "all_of: condition length mismatch");
        for (acc, &c) in result.iter_mut().zip(condition.iter()) {
            *acc = *acc && c;
        }
    }
    result
}
