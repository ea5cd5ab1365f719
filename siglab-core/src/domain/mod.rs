//! Domain types for SigLab.

pub mod candle;
pub mod validate;

pub use candle::{Candle, Metadata};
pub use validate::{validate_candles, StrategyError};
