//! Trigger enumerations shared by the generators and the search space.
//!
//! One enumeration per decision side backs both the categorical search
//! dimension (its labels) and the generator dispatch (its condition
//! builders). Deriving both from the same source removes the classic failure
//! where the optimizer explores a label the generator never matches.
//!
//! The sides are deliberately asymmetric, mirroring the behavior this core
//! reimplements: buy triggers compare the *synthetic* (Heikin-Ashi) close
//! against the SMA ladder, sell triggers compare the *raw* close.

use crate::conditions::{compare, CmpOp};
use crate::domain::Candle;
use crate::indicators::IndicatorValues;
use crate::strategy::series;

/// Buy-side trigger: synthetic close below one SMA of the ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuyTrigger {
    Sma5,
    Sma14,
    Sma20,
    Sma50,
    Sma200,
}

impl BuyTrigger {
    pub const ALL: [BuyTrigger; 5] = [
        BuyTrigger::Sma5,
        BuyTrigger::Sma14,
        BuyTrigger::Sma20,
        BuyTrigger::Sma50,
        BuyTrigger::Sma200,
    ];

    /// The categorical label the search space exposes.
    pub fn label(&self) -> &'static str {
        match self {
            BuyTrigger::Sma5 => "sma5",
            BuyTrigger::Sma14 => "sma14",
            BuyTrigger::Sma20 => "sma20",
            BuyTrigger::Sma50 => "sma50",
            BuyTrigger::Sma200 => "sma200",
        }
    }

    /// Permissive reverse lookup: an unknown label is `None`, which the
    /// generators treat as "no trigger active".
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.label() == label)
    }

    pub fn labels() -> Vec<String> {
        Self::ALL.iter().map(|t| t.label().to_string()).collect()
    }

    fn sma_key(&self) -> &'static str {
        match self {
            BuyTrigger::Sma5 => "sma_5",
            BuyTrigger::Sma14 => "sma_14",
            BuyTrigger::Sma20 => "sma_20",
            BuyTrigger::Sma50 => "sma_50",
            BuyTrigger::Sma200 => "sma_200",
        }
    }

    /// Condition series: ha_close < smaN.
    pub fn condition(&self, _candles: &[Candle], indicators: &IndicatorValues) -> Vec<bool> {
        let ha_close = series(indicators, "ha_close");
        let sma = series(indicators, self.sma_key());
        compare(ha_close, sma, CmpOp::Lt)
    }
}

/// Sell-side trigger: raw close above one SMA of the ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SellTrigger {
    Sma5,
    Sma14,
    Sma20,
    Sma50,
    Sma200,
}

impl SellTrigger {
    pub const ALL: [SellTrigger; 5] = [
        SellTrigger::Sma5,
        SellTrigger::Sma14,
        SellTrigger::Sma20,
        SellTrigger::Sma50,
        SellTrigger::Sma200,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SellTrigger::Sma5 => "sell-sma5",
            SellTrigger::Sma14 => "sell-sma14",
            SellTrigger::Sma20 => "sell-sma20",
            SellTrigger::Sma50 => "sell-sma50",
            SellTrigger::Sma200 => "sell-sma200",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.label() == label)
    }

    pub fn labels() -> Vec<String> {
        Self::ALL.iter().map(|t| t.label().to_string()).collect()
    }

    fn sma_key(&self) -> &'static str {
        match self {
            SellTrigger::Sma5 => "sma_5",
            SellTrigger::Sma14 => "sma_14",
            SellTrigger::Sma20 => "sma_20",
            SellTrigger::Sma50 => "sma_50",
            SellTrigger::Sma200 => "sma_200",
        }
    }

    /// Condition series: close > smaN. Note the raw close, not ha_close.
    pub fn condition(&self, candles: &[Candle], indicators: &IndicatorValues) -> Vec<bool> {
        let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
        let sma = series(indicators, self.sma_key());
        compare(&closes, sma, CmpOp::Gt)
    }
}
