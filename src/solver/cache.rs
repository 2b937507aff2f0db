//! Reference Solution Cache
//!
//! Durable single-entry cache of the reference solution, keyed by the full
//! problem configuration. A configuration change produces a new key, so a
//! stale solution can never be served for a different instance.

use std::fs;
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

use crate::errors::EvalError;
use crate::problem::{ProblemConfig, Solution};
use crate::storage;

pub struct SolutionCache {
    dir: PathBuf,
}

impl SolutionCache {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn key(problem: &ProblemConfig) -> String {
        let mut hasher = Sha256::new();
        hasher.update(format!(
            "{}:{}:{}:{}",
            problem.n_variables, problem.n_constraints, problem.lower_bound, problem.upper_bound
        ));
        hex::encode(hasher.finalize())
    }

    fn path_for(&self, problem: &ProblemConfig) -> PathBuf {
        self.dir.join(format!("reference_{}.json", Self::key(problem)))
    }

    /// Look up the persisted solution for this configuration. A missing or
    /// unreadable entry is a miss, not an error.
    pub fn get(&self, problem: &ProblemConfig) -> Option<Solution> {
        let path = self.path_for(problem);
        if !path.exists() {
            return None;
        }
        storage::read_solution(&path).ok()
    }

    pub fn set(&self, problem: &ProblemConfig, solution: &Solution) -> Result<(), EvalError> {
        fs::create_dir_all(&self.dir)?;
        storage::write_solution(&self.path_for(problem), solution)
    }
}
