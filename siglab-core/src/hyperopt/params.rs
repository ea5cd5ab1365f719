//! Parameter mappings — the optimizer's candidate representation.
//!
//! A `ParamMap` is a name -> typed-value mapping. Absent keys mean "this
//! guarded condition is inactive", not zero or false. Backed by a `BTreeMap`
//! so canonical serialization (and therefore fingerprinting) is
//! deterministic.

use crate::domain::StrategyError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One typed parameter value.
///
/// Untagged serde representation keeps optimizer-produced JSON and TOML
/// parameter files plain: `true`, `40`, `0.025`, `"sma20"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Bool(bool),
    Int(i64),
    Real(f64),
    Cat(String),
}

/// Name -> value mapping for one candidate strategy configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParamMap(BTreeMap<String, ParamValue>);

impl ParamMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: ParamValue) {
        self.0.insert(name.into(), value);
    }

    /// Builder-style insert for test and CLI construction.
    pub fn with(mut self, name: impl Into<String>, value: ParamValue) -> Self {
        self.insert(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.0.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &ParamValue)> {
        self.0.iter()
    }

    /// Boolean flag semantics: present and true. Absent, false, or a
    /// non-boolean value all read as "guard inactive".
    pub fn flag(&self, name: &str) -> bool {
        matches!(self.get(name), Some(ParamValue::Bool(true)))
    }

    /// Integer accessor. `None` when absent or not an integer.
    pub fn int(&self, name: &str) -> Option<i64> {
        match self.get(name) {
            Some(ParamValue::Int(v)) => Some(*v),
            _ => None,
        }
    }

    /// Real accessor; integer values coerce, since optimizers round freely
    /// on real-range dimensions.
    pub fn real(&self, name: &str) -> Option<f64> {
        match self.get(name) {
            Some(ParamValue::Real(v)) => Some(*v),
            Some(ParamValue::Int(v)) => Some(*v as f64),
            _ => None,
        }
    }

    /// Categorical accessor. `None` when absent or not a string.
    pub fn cat(&self, name: &str) -> Option<&str> {
        match self.get(name) {
            Some(ParamValue::Cat(v)) => Some(v.as_str()),
            _ => None,
        }
    }

    /// Required real value: absence or a wrong type is malformed input.
    pub fn require_real(&self, name: &str) -> Result<f64, StrategyError> {
        match self.get(name) {
            Some(ParamValue::Real(v)) => Ok(*v),
            Some(ParamValue::Int(v)) => Ok(*v as f64),
            Some(_) => Err(StrategyError::ParamType {
                name: name.to_string(),
                expected: "real",
            }),
            None => Err(StrategyError::MissingParam(name.to_string())),
        }
    }

    /// Required non-negative minute offset.
    pub fn require_minutes(&self, name: &str) -> Result<u32, StrategyError> {
        match self.get(name) {
            Some(ParamValue::Int(v)) => u32::try_from(*v).map_err(|_| StrategyError::ParamType {
                name: name.to_string(),
                expected: "non-negative integer",
            }),
            Some(_) => Err(StrategyError::ParamType {
                name: name.to_string(),
                expected: "non-negative integer",
            }),
            None => Err(StrategyError::MissingParam(name.to_string())),
        }
    }
}

impl<const N: usize> From<[(&str, ParamValue); N]> for ParamMap {
    fn from(entries: [(&str, ParamValue); N]) -> Self {
        let mut map = Self::new();
        for (name, value) in entries {
            map.insert(name, value);
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_requires_present_and_true() {
        let params = ParamMap::from([
            ("a", ParamValue::Bool(true)),
            ("b", ParamValue::Bool(false)),
            ("c", ParamValue::Int(1)),
        ]);
        assert!(params.flag("a"));
        assert!(!params.flag("b"));
        assert!(!params.flag("c")); // wrong type reads as inactive
        assert!(!params.flag("missing"));
    }

    #[test]
    fn real_coerces_int() {
        let params = ParamMap::from([("x", ParamValue::Int(40))]);
        assert_eq!(params.real("x"), Some(40.0));
        assert_eq!(params.int("x"), Some(40));
    }

    #[test]
    fn require_real_distinguishes_missing_from_mistyped() {
        let params = ParamMap::from([("x", ParamValue::Cat("oops".into()))]);
        assert!(matches!(
            params.require_real("x"),
            Err(StrategyError::ParamType { .. })
        ));
        assert!(matches!(
            params.require_real("y"),
            Err(StrategyError::MissingParam(_))
        ));
    }

    #[test]
    fn require_minutes_rejects_negative() {
        let params = ParamMap::from([("t", ParamValue::Int(-5))]);
        assert!(params.require_minutes("t").is_err());
    }

    #[test]
    fn untagged_json_roundtrip() {
        let params = ParamMap::from([
            ("rsi-enabled", ParamValue::Bool(true)),
            ("rsi-value", ParamValue::Int(40)),
            ("stoploss", ParamValue::Real(-0.25)),
            ("trigger", ParamValue::Cat("sma20".into())),
        ]);
        let json = serde_json::to_string(&params).unwrap();
        assert_eq!(
            json,
            r#"{"rsi-enabled":true,"rsi-value":40,"stoploss":-0.25,"trigger":"sma20"}"#
        );
        let back: ParamMap = serde_json::from_str(&json).unwrap();
        assert_eq!(back.flag("rsi-enabled"), true);
        assert_eq!(back.int("rsi-value"), Some(40));
        assert_eq!(back.real("stoploss"), Some(-0.25));
        assert_eq!(back.cat("trigger"), Some("sma20"));
    }
}
