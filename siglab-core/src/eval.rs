//! Parallel evaluation of candidate parameter mappings.
//!
//! Every component in this crate is a pure transformation, so candidates
//! evaluate independently: the raw candles and the precomputed indicator
//! series are shared read-only, and each candidate produces fresh decision
//! series. The indicator set is identical for all candidates, so it is
//! precomputed once up front instead of per candidate.

use rayon::prelude::*;
use std::collections::BTreeMap;

use crate::domain::{validate_candles, Candle, Metadata, StrategyError};
use crate::fingerprint::{params_hash, ParamsHash};
use crate::hyperopt::{hyperopt_indicators, HyperStrategy, ParamMap};
use crate::indicators::precompute;
use crate::strategy::Strategy;

/// Everything the host optimizer needs back from one candidate.
#[derive(Debug, Clone)]
pub struct CandidateEvaluation {
    pub pair: String,
    pub params_hash: ParamsHash,
    pub buy: Vec<bool>,
    pub sell: Vec<bool>,
    pub roi: BTreeMap<u32, f64>,
    pub stoploss: f64,
}

/// Evaluates batches of candidate parameter mappings, optionally in parallel.
pub struct CandidateEvaluator {
    parallel: bool,
}

impl CandidateEvaluator {
    pub fn new() -> Self {
        Self { parallel: true }
    }

    /// Enable or disable parallel execution.
    pub fn with_parallelism(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Evaluate all candidates over one candle series.
    ///
    /// Input validation and indicator precompute happen once. A malformed
    /// candidate fails the whole batch with the first error.
    pub fn evaluate(
        &self,
        candles: &[Candle],
        metadata: &Metadata,
        candidates: &[ParamMap],
    ) -> Result<Vec<CandidateEvaluation>, StrategyError> {
        validate_candles(candles)?;
        let indicators = precompute(candles, &hyperopt_indicators())?;

        let evaluate_one = |params: &ParamMap| -> Result<CandidateEvaluation, StrategyError> {
            let strategy = HyperStrategy::new(params.clone())?;
            Ok(CandidateEvaluation {
                pair: metadata.pair.clone(),
                params_hash: params_hash(params),
                buy: strategy.buy_trend(candles, &indicators),
                sell: strategy.sell_trend(candles, &indicators),
                roi: strategy.minimal_roi(),
                stoploss: strategy.stoploss(),
            })
        };

        if self.parallel {
            candidates.par_iter().map(evaluate_one).collect()
        } else {
            candidates.iter().map(evaluate_one).collect()
        }
    }
}

impl Default for CandidateEvaluator {
    fn default() -> Self {
        Self::new()
    }
}
