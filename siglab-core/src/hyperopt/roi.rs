//! ROI schedule builder.
//!
//! Maps the six roi_* parameters to a minute-offset -> minimum-ROI table:
//!
//! ```text
//! 0            -> p1 + p2 + p3
//! t3           -> p1 + p2
//! t3 + t2      -> p1
//! t3 + t2 + t1 -> 0
//! ```
//!
//! With all t's and p's strictly positive (which the declared `roi_space`
//! bounds guarantee), offsets strictly increase and values strictly decrease.

use super::params::ParamMap;
use crate::domain::StrategyError;
use std::collections::BTreeMap;

/// Build the ROI table from a parameter mapping.
///
/// Missing or mistyped roi_* keys are malformed input and fail fast.
pub fn generate_roi_table(params: &ParamMap) -> Result<BTreeMap<u32, f64>, StrategyError> {
    let t1 = params.require_minutes("roi_t1")?;
    let t2 = params.require_minutes("roi_t2")?;
    let t3 = params.require_minutes("roi_t3")?;
    let p1 = params.require_real("roi_p1")?;
    let p2 = params.require_real("roi_p2")?;
    let p3 = params.require_real("roi_p3")?;

    let mut table = BTreeMap::new();
    table.insert(0, p1 + p2 + p3);
    table.insert(t3, p1 + p2);
    table.insert(t3 + t2, p1);
    table.insert(t3 + t2 + t1, 0.0);
    Ok(table)
}

/// True when the roi_* keys are present, i.e. the candidate tunes ROI.
pub fn has_roi_params(params: &ParamMap) -> bool {
    ["roi_t1", "roi_t2", "roi_t3", "roi_p1", "roi_p2", "roi_p3"]
        .iter()
        .all(|key| params.contains(key))
}
