//! Reference Oracle
//!
//! Obtains the trusted optimum for a problem configuration. Values are
//! rounded to the interchange precision before anything downstream sees
//! them, and the rounded solution is persisted so later comparisons reuse
//! a single solve.

use tracing::{debug, info, warn};

use crate::errors::EvalError;
use crate::problem::{ProblemConfig, Solution};
use crate::solver::backend::{ClarabelBackend, SolverBackend};
use crate::solver::cache::SolutionCache;
use crate::storage;

pub struct ReferenceOracle {
    backend: Box<dyn SolverBackend>,
    cache: Option<SolutionCache>,
}

impl ReferenceOracle {
    pub fn new(backend: Box<dyn SolverBackend>) -> Self {
        Self {
            backend,
            cache: None,
        }
    }

    pub fn with_cache(mut self, cache: SolutionCache) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Solve (or reuse) the reference solution, rounded to 6 decimals.
    ///
    /// A cache write failure is logged and ignored: the solve already
    /// succeeded and the result is still valid for this comparison.
    pub fn solve_reference(&self, problem: &ProblemConfig) -> Result<Solution, EvalError> {
        if let Some(cache) = &self.cache {
            if let Some(solution) = cache.get(problem) {
                debug!("reference solution served from cache");
                return Ok(solution);
            }
        }

        info!(
            "solving reference problem ({} vars, {} constraints)",
            problem.n_variables, problem.n_constraints
        );
        let raw = self.backend.solve(problem)?;
        let solution = storage::rounded(&Solution {
            x: raw.x,
            objective_value: raw.objective_value,
        });

        if let Some(cache) = &self.cache {
            if let Err(e) = cache.set(problem, &solution) {
                warn!("failed to persist reference solution: {}", e);
            }
        }

        Ok(solution)
    }
}

impl Default for ReferenceOracle {
    fn default() -> Self {
        Self::new(Box::new(ClarabelBackend))
    }
}
