//! Candidate fingerprinting — deterministic identification of parameter maps.
//!
//! `ParamMap` is backed by a `BTreeMap`, so its canonical JSON is
//! deterministic; hashing that JSON gives a stable identity for a candidate
//! across processes and runs. Used to deduplicate candidates and to pin the
//! determinism guarantee in tests.

use crate::hyperopt::ParamMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Content hash of one candidate parameter mapping.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParamsHash(pub String);

impl fmt::Display for ParamsHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Hash a parameter mapping over its canonical JSON form.
pub fn params_hash(params: &ParamMap) -> ParamsHash {
    // BTreeMap gives deterministic key order; serde_json is deterministic
    // given that.
    let json = serde_json::to_string(params).expect("ParamMap must serialize");
    ParamsHash(blake3::hash(json.as_bytes()).to_hex().to_string())
}
