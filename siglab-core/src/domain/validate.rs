//! Input validation and the core error type.
//!
//! Malformed input fails fast with a descriptive error; nothing in the
//! signal pipeline substitutes defaults silently.

use super::Candle;

/// Errors surfaced by strategy analysis and the hyperopt surface.
#[derive(Debug, thiserror::Error)]
pub enum StrategyError {
    #[error("empty candle series")]
    EmptyCandles,

    #[error("candle timestamps not strictly increasing at index {0}")]
    UnorderedTimestamps(usize),

    #[error("indicator '{name}' produced {got} values for {expected} candles")]
    LengthMismatch {
        name: String,
        got: usize,
        expected: usize,
    },

    #[error("missing required parameter '{0}'")]
    MissingParam(String),

    #[error("parameter '{name}' has wrong type (expected {expected})")]
    ParamType {
        name: String,
        expected: &'static str,
    },
}

/// Validate a raw candle series before analysis.
///
/// Checks: non-empty, timestamps strictly increasing. Void (all-NaN) candles
/// are allowed — indicator warm-up semantics propagate them as NaN, and
/// conditions turn NaN into `false`.
pub fn validate_candles(candles: &[Candle]) -> Result<(), StrategyError> {
    if candles.is_empty() {
        return Err(StrategyError::EmptyCandles);
    }
    for i in 1..candles.len() {
        if candles[i].date <= candles[i - 1].date {
            return Err(StrategyError::UnorderedTimestamps(i));
        }
    }
    Ok(())
}
