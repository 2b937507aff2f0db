//! Evaluation Core
//!
//! Validation, scoring, and aggregation of agent candidates against the
//! reference solution.

pub mod aggregator;
pub mod scorer;
pub mod validator;

pub use aggregator::{
    compare, compare_files, CandidatePayload, ComparisonReport, PromptStyle, StyleReport,
};
pub use scorer::{optimality_gap, optimality_gap_with_epsilon, GAP_EPSILON};
pub use validator::{validate, ValidationResult};
