//! Reference oracle integration: known optimum, interchange rounding, and
//! the durable solution cache.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tempfile::tempdir;

use opt_eval::errors::EvalError;
use opt_eval::problem::{build_problem, ProblemConfig};
use opt_eval::solver::{RawSolution, ReferenceOracle, SolutionCache, SolverBackend};
use opt_eval::storage;

#[test]
fn test_canonical_reference_is_the_origin() {
    let oracle = ReferenceOracle::default();
    let solution = oracle.solve_reference(&build_problem()).unwrap();

    // Bounds bracket zero and the constraints hold at zero, so after the
    // 6-decimal rounding the optimum is exactly the origin.
    assert_eq!(solution.x.len(), 100);
    assert_eq!(solution.objective_value, 0.0);
    assert!(solution.x.iter().all(|&v| v == 0.0));
}

#[test]
fn test_reference_survives_persistence_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("baseline_solution.json");

    let oracle = ReferenceOracle::default();
    let solution = oracle.solve_reference(&build_problem()).unwrap();

    storage::write_solution(&path, &solution).unwrap();
    let loaded = storage::read_solution(&path).unwrap();

    // The oracle already reports at the written precision, so the loaded
    // copy is field-for-field identical.
    assert_eq!(loaded, solution);
}

/// Backend that counts invocations so cache hits are observable.
struct CountingBackend {
    calls: Arc<AtomicUsize>,
}

impl SolverBackend for CountingBackend {
    fn solve(&self, problem: &ProblemConfig) -> Result<RawSolution, EvalError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(RawSolution {
            x: vec![0.0; problem.n_variables],
            objective_value: 0.0,
        })
    }
}

#[test]
fn test_cache_avoids_repeat_solves() {
    let dir = tempdir().unwrap();
    let problem = build_problem();

    let calls = Arc::new(AtomicUsize::new(0));
    let backend = Box::new(CountingBackend {
        calls: calls.clone(),
    });
    let oracle = ReferenceOracle::new(backend).with_cache(SolutionCache::new(dir.path()));

    let first = oracle.solve_reference(&problem).unwrap();
    let second = oracle.solve_reference(&problem).unwrap();

    assert_eq!(first, second);
    // One real solve; the second call was served from the persisted copy.
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}
