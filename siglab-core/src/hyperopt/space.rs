//! Search-space descriptor — the contract with an external optimizer.
//!
//! Each tunable strategy dimension is declared with its type and bounds. The
//! optimizer's only obligation is to hand back a `ParamMap` whose values
//! satisfy the declared dimensions; `Dimension::sample` produces such values
//! directly for random search and testing.

use super::params::{ParamMap, ParamValue};
use super::triggers::{BuyTrigger, SellTrigger};
use rand::Rng;
use serde::Serialize;

/// Value domain of one search dimension.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DimensionKind {
    Boolean,
    Integer { low: i64, high: i64 },
    Real { low: f64, high: f64 },
    Categorical { choices: Vec<String> },
}

/// One tunable axis: name plus value domain.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dimension {
    pub name: &'static str,
    #[serde(flatten)]
    pub kind: DimensionKind,
}

impl Dimension {
    pub fn boolean(name: &'static str) -> Self {
        Self {
            name,
            kind: DimensionKind::Boolean,
        }
    }

    pub fn integer(name: &'static str, low: i64, high: i64) -> Self {
        assert!(low <= high, "integer dimension '{name}': low > high");
        Self {
            name,
            kind: DimensionKind::Integer { low, high },
        }
    }

    pub fn real(name: &'static str, low: f64, high: f64) -> Self {
        assert!(low <= high, "real dimension '{name}': low > high");
        Self {
            name,
            kind: DimensionKind::Real { low, high },
        }
    }

    pub fn categorical(name: &'static str, choices: Vec<String>) -> Self {
        assert!(!choices.is_empty(), "categorical dimension '{name}': empty");
        Self {
            name,
            kind: DimensionKind::Categorical { choices },
        }
    }

    /// Draw one in-bounds value (both bounds inclusive).
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> ParamValue {
        match &self.kind {
            DimensionKind::Boolean => ParamValue::Bool(rng.gen()),
            DimensionKind::Integer { low, high } => ParamValue::Int(rng.gen_range(*low..=*high)),
            DimensionKind::Real { low, high } => ParamValue::Real(rng.gen_range(*low..=*high)),
            DimensionKind::Categorical { choices } => {
                let idx = rng.gen_range(0..choices.len());
                ParamValue::Cat(choices[idx].clone())
            }
        }
    }

    /// Whether a value satisfies this dimension's type and bounds.
    pub fn contains(&self, value: &ParamValue) -> bool {
        match (&self.kind, value) {
            (DimensionKind::Boolean, ParamValue::Bool(_)) => true,
            (DimensionKind::Integer { low, high }, ParamValue::Int(v)) => {
                (*low..=*high).contains(v)
            }
            (DimensionKind::Real { low, high }, ParamValue::Real(v)) => (*low..=*high).contains(v),
            (DimensionKind::Categorical { choices }, ParamValue::Cat(v)) => choices.contains(v),
            _ => false,
        }
    }
}

/// Buy-side dimensions: RSI guard plus the trigger choice.
pub fn indicator_space() -> Vec<Dimension> {
    vec![
        Dimension::integer("rsi-value", 5, 60),
        Dimension::boolean("rsi-enabled"),
        Dimension::categorical("trigger", BuyTrigger::labels()),
    ]
}

/// Sell-side dimensions.
pub fn sell_indicator_space() -> Vec<Dimension> {
    vec![
        Dimension::integer("sell-rsi-value", 30, 100),
        Dimension::boolean("sell-rsi-enabled"),
        Dimension::categorical("sell-trigger", SellTrigger::labels()),
    ]
}

/// Stop-loss dimension.
pub fn stoploss_space() -> Vec<Dimension> {
    vec![Dimension::real("stoploss", -0.5, -0.02)]
}

/// ROI schedule dimensions. All ranges strictly positive so the generated
/// table is strictly increasing in offset and strictly decreasing in value
/// for any in-bounds mapping.
pub fn roi_space() -> Vec<Dimension> {
    vec![
        Dimension::integer("roi_t1", 10, 120),
        Dimension::integer("roi_t2", 10, 60),
        Dimension::integer("roi_t3", 10, 40),
        Dimension::real("roi_p1", 0.01, 0.04),
        Dimension::real("roi_p2", 0.01, 0.07),
        Dimension::real("roi_p3", 0.01, 0.20),
    ]
}

/// Every dimension an optimizer may tune, in declaration order.
pub fn full_space() -> Vec<Dimension> {
    let mut dims = indicator_space();
    dims.extend(sell_indicator_space());
    dims.extend(stoploss_space());
    dims.extend(roi_space());
    dims
}

/// Draw one candidate `ParamMap` covering every given dimension.
pub fn sample_space<R: Rng + ?Sized>(dimensions: &[Dimension], rng: &mut R) -> ParamMap {
    let mut params = ParamMap::new();
    for dim in dimensions {
        params.insert(dim.name, dim.sample(rng));
    }
    params
}
