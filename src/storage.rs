//! Solution Persistence
//!
//! The on-disk interchange format shared by the reference oracle and the
//! agent harness: a JSON object with exactly `x` and `objective_value`,
//! rounded to 6 decimal places on write. Rounding trades exact
//! reproducibility for deterministic, diff-friendly output, so comparisons
//! against written values must apply the same rounding.

use std::fs;
use std::path::Path;

use crate::errors::EvalError;
use crate::eval::aggregator::CandidatePayload;
use crate::problem::Solution;

const ROUND_DECIMALS: i32 = 6;

/// Round to the written precision of 6 decimal places.
pub fn round6(value: f64) -> f64 {
    let factor = 10f64.powi(ROUND_DECIMALS);
    (value * factor).round() / factor
}

/// Apply the write-side rounding to a whole solution.
pub fn rounded(solution: &Solution) -> Solution {
    Solution {
        x: solution.x.iter().copied().map(round6).collect(),
        objective_value: round6(solution.objective_value),
    }
}

/// Write a solution file, rounding values to the interchange precision.
pub fn write_solution(path: &Path, solution: &Solution) -> Result<(), EvalError> {
    let content = serde_json::to_string_pretty(&rounded(solution))?;
    fs::write(path, content)?;
    Ok(())
}

/// Read a trusted solution file (e.g. a persisted reference solution).
pub fn read_solution(path: &Path) -> Result<Solution, EvalError> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Load an untrusted candidate file.
///
/// Missing or malformed files become an [`CandidatePayload::Unparsable`]
/// record scoped to that candidate's style, never an error.
pub fn load_candidate(path: &Path) -> CandidatePayload {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => return CandidatePayload::Unparsable(format!("load failed: {}", e)),
    };
    match serde_json::from_str(&content) {
        Ok(value) => CandidatePayload::Parsed(value),
        Err(e) => CandidatePayload::Unparsable(format!("invalid JSON: {}", e)),
    }
}
