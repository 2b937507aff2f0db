//! Comparison Aggregation
//!
//! Combines validation and scoring across prompt styles into a single
//! report. Styles are independent: a malformed candidate in one style is
//! recorded for that style and evaluation continues, so partial results
//! always survive. Only a missing reference degrades the whole report.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::eval::scorer::optimality_gap;
use crate::eval::validator::{validate, ValidationResult};
use crate::problem::Solution;
use crate::storage;

/// Prompt style under which a candidate was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PromptStyle {
    Polite,
    Strict,
}

impl PromptStyle {
    pub const ALL: [PromptStyle; 2] = [PromptStyle::Polite, PromptStyle::Strict];

    pub fn as_str(&self) -> &'static str {
        match self {
            PromptStyle::Polite => "polite",
            PromptStyle::Strict => "strict",
        }
    }
}

impl std::fmt::Display for PromptStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PromptStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "polite" => Ok(PromptStyle::Polite),
            "strict" => Ok(PromptStyle::Strict),
            other => Err(format!("unknown prompt style: {}", other)),
        }
    }
}

/// A per-style candidate as received from the transport layer: either a
/// parsed JSON value, or the reason the raw text could not be parsed.
#[derive(Debug, Clone)]
pub enum CandidatePayload {
    Parsed(Value),
    Unparsable(String),
}

/// Outcome recorded for one style in a [`ComparisonReport`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleReport {
    Failure {
        valid: bool,
        error: String,
    },
    Scored {
        valid: bool,
        objective_value: f64,
        optimality_gap: f64,
        instruction_following: String,
    },
}

impl StyleReport {
    pub fn failure(error: impl Into<String>) -> Self {
        StyleReport::Failure {
            valid: false,
            error: error.into(),
        }
    }

    pub fn scored(objective_value: f64, optimality_gap: f64) -> Self {
        StyleReport::Scored {
            valid: true,
            objective_value,
            optimality_gap,
            instruction_following: "ok".to_string(),
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, StyleReport::Scored { .. })
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            StyleReport::Failure { error, .. } => Some(error),
            StyleReport::Scored { .. } => None,
        }
    }

    pub fn gap(&self) -> Option<f64> {
        match self {
            StyleReport::Scored { optimality_gap, .. } => Some(*optimality_gap),
            StyleReport::Failure { .. } => None,
        }
    }
}

/// Result of one comparison run. Constructed fresh per run, never mutated
/// afterwards, and always JSON-serializable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonReport {
    pub baseline_objective: f64,
    /// Set only in degraded mode, when the reference itself was unusable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// One entry per known style; `None` when no candidate was supplied.
    #[serde(flatten)]
    pub styles: BTreeMap<PromptStyle, Option<StyleReport>>,
}

impl ComparisonReport {
    /// Degraded report produced when the reference solution is unusable:
    /// no per-style scoring is possible without a baseline objective.
    pub fn degraded(error: impl Into<String>) -> Self {
        ComparisonReport {
            baseline_objective: 0.0,
            error: Some(error.into()),
            styles: BTreeMap::new(),
        }
    }

    pub fn style(&self, style: PromptStyle) -> Option<&StyleReport> {
        self.styles.get(&style).and_then(|entry| entry.as_ref())
    }
}

/// Score every supplied candidate against the reference solution.
///
/// The reference is read-only; each style's outcome is a pure function of
/// `(candidate, reference)`. Styles absent from `candidates` are recorded
/// as `None`, not as failures.
pub fn compare(
    reference: &Solution,
    candidates: &BTreeMap<PromptStyle, CandidatePayload>,
    expected_length: usize,
) -> ComparisonReport {
    let mut styles = BTreeMap::new();

    for style in PromptStyle::ALL {
        let entry = match candidates.get(&style) {
            None => None,
            Some(CandidatePayload::Unparsable(error)) => {
                warn!("{} candidate unusable: {}", style, error);
                Some(StyleReport::failure(error.clone()))
            }
            Some(CandidatePayload::Parsed(value)) => {
                Some(evaluate_candidate(value, reference, expected_length))
            }
        };
        styles.insert(style, entry);
    }

    ComparisonReport {
        baseline_objective: reference.objective_value,
        error: None,
        styles,
    }
}

fn evaluate_candidate(value: &Value, reference: &Solution, expected_length: usize) -> StyleReport {
    match validate(value, expected_length) {
        ValidationResult::Invalid(reason) => StyleReport::failure(reason),
        ValidationResult::Valid => {
            // The validator guarantees a numeric objective_value.
            let objective = value["objective_value"].as_f64().unwrap_or_default();
            let gap = optimality_gap(objective, reference.objective_value);
            StyleReport::scored(objective, gap)
        }
    }
}

/// File-level comparison entry point: load the baseline and any per-style
/// output files, then score them.
///
/// A baseline that cannot be loaded yields the degraded report; a style
/// file that cannot be loaded fails only that style.
pub fn compare_files(
    baseline_path: &Path,
    polite_path: Option<&Path>,
    strict_path: Option<&Path>,
    expected_length: usize,
) -> ComparisonReport {
    let reference = match storage::read_solution(baseline_path) {
        Ok(solution) => solution,
        Err(e) => {
            return ComparisonReport::degraded(format!(
                "Could not load baseline {}: {}",
                baseline_path.display(),
                e
            ));
        }
    };

    let mut candidates = BTreeMap::new();
    for (style, path) in [
        (PromptStyle::Polite, polite_path),
        (PromptStyle::Strict, strict_path),
    ] {
        if let Some(path) = path {
            candidates.insert(style, storage::load_candidate(path));
        }
    }

    compare(&reference, &candidates, expected_length)
}
