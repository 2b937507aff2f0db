//! Error Taxonomy
//!
//! Failure modes of the evaluation core. Solver-related errors abort the
//! current comparison and surface at the top of the report; anything wrong
//! with a candidate stays scoped to its prompt style and never reaches here.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EvalError {
    /// The reference solver could not be set up or invoked.
    #[error("solver unavailable: {0}")]
    SolverUnavailable(String),

    /// The reference solver ran but terminated without an optimal point.
    #[error("solver failure: {0}")]
    SolverFailure(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}
