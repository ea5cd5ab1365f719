//! SigLab Core — trading-signal strategies as pure functions.
//!
//! Given a time-ordered candle series, this crate:
//! - derives technical indicator series (RSI, SMA ladder, EMA, TEMA,
//!   awesome oscillator, Heikin-Ashi transform),
//! - combines them through a small boolean condition library into discrete
//!   buy/sell decision series, either via fixed strategy variants or via
//!   generators assembled from a runtime parameter mapping,
//! - describes the parameter search space an external optimizer explores,
//!   and builds the ROI schedule that depends on the same parameters.
//!
//! Everything is stateless and recomputed per evaluation; callers may run
//! independent evaluations on independent threads (see `eval`).

pub mod conditions;
pub mod domain;
pub mod eval;
pub mod fingerprint;
pub mod hyperopt;
pub mod indicators;
pub mod strategy;

#[cfg(test)]
mod tests {
    use super::*;

    /// Compile-time check: the types crossing thread boundaries are
    /// Send + Sync, so batch evaluation can fan out safely.
    #[allow(dead_code)]
    fn assert_send_sync() {
        fn require_send<T: Send>() {}
        fn require_sync<T: Sync>() {}

        require_send::<domain::Candle>();
        require_sync::<domain::Candle>();
        require_send::<domain::Metadata>();
        require_sync::<domain::Metadata>();
        require_send::<indicators::IndicatorValues>();
        require_sync::<indicators::IndicatorValues>();
        require_send::<strategy::Analysis>();
        require_sync::<strategy::Analysis>();
        require_send::<hyperopt::ParamMap>();
        require_sync::<hyperopt::ParamMap>();
        require_send::<hyperopt::Dimension>();
        require_sync::<hyperopt::Dimension>();
        require_send::<hyperopt::HyperStrategy>();
        require_sync::<hyperopt::HyperStrategy>();
        require_send::<eval::CandidateEvaluation>();
        require_sync::<eval::CandidateEvaluation>();
        require_send::<fingerprint::ParamsHash>();
        require_sync::<fingerprint::ParamsHash>();
    }

    /// Architecture contract: `Strategy::buy_trend` sees only candles and
    /// precomputed indicators — no portfolio or order state. The trait
    /// signature enforces it; this test documents the contract and breaks
    /// loudly if the signature ever changes.
    #[test]
    fn strategy_trait_has_no_portfolio_parameter() {
        fn _check_trait_object_builds(
            strategy: &dyn strategy::Strategy,
            candles: &[domain::Candle],
            indicators: &indicators::IndicatorValues,
        ) -> Vec<bool> {
            strategy.buy_trend(candles, indicators)
        }
    }
}
