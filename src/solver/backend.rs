//! Solver Backend
//!
//! Narrow capability boundary over the numeric solver. The evaluation core
//! depends only on the [`SolverBackend`] contract; the concrete backend is
//! clarabel, a pure-Rust interior-point solver. The problem is a convex QP
//! (minimize 0.5 x'Px with P = 2I), so the conic form is exact:
//!
//!   sum(x) >= 0  (replicated)   ->  -1'x <= 0
//!   x <= upper                  ->   I x <= upper
//!   x >= lower                  ->  -I x <= -lower
//!
//! all stacked into one nonnegative cone.

use clarabel::algebra::CscMatrix;
use clarabel::solver::implementations::default::DefaultSettingsBuilder;
use clarabel::solver::{DefaultSolver, IPSolver, SolverStatus, SupportedConeT};

use crate::errors::EvalError;
use crate::problem::ProblemConfig;

/// Unrounded solver output, before interchange rounding is applied.
#[derive(Debug, Clone)]
pub struct RawSolution {
    pub x: Vec<f64>,
    pub objective_value: f64,
}

/// Black-box numeric solver capability.
pub trait SolverBackend: Send + Sync {
    fn solve(&self, problem: &ProblemConfig) -> Result<RawSolution, EvalError>;
}

/// Clarabel-based backend for the sum-of-squares problem family.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClarabelBackend;

impl ClarabelBackend {
    /// Stack the replicated sum constraint and both bound sides into one
    /// inequality system `Ax <= b` in CSC form.
    fn constraint_system(problem: &ProblemConfig) -> (CscMatrix, Vec<f64>) {
        let n = problem.n_variables;
        let m = problem.n_constraints;
        let rows = m + 2 * n;

        let mut colptr = Vec::with_capacity(n + 1);
        let mut rowval = Vec::with_capacity(n * (m + 2));
        let mut nzval = Vec::with_capacity(n * (m + 2));
        colptr.push(0);
        for j in 0..n {
            // Every variable appears in every replicated sum constraint.
            for i in 0..m {
                rowval.push(i);
                nzval.push(-1.0);
            }
            rowval.push(m + j);
            nzval.push(1.0);
            rowval.push(m + n + j);
            nzval.push(-1.0);
            colptr.push(rowval.len());
        }
        let a = CscMatrix::new(rows, n, colptr, rowval, nzval);

        let mut b = vec![0.0; m];
        b.extend(std::iter::repeat(problem.upper_bound).take(n));
        b.extend(std::iter::repeat(-problem.lower_bound).take(n));

        (a, b)
    }
}

impl SolverBackend for ClarabelBackend {
    fn solve(&self, problem: &ProblemConfig) -> Result<RawSolution, EvalError> {
        let n = problem.n_variables;

        // P = 2I so that 0.5 x'Px equals sum(x^2).
        let p = CscMatrix::new(n, n, (0..=n).collect(), (0..n).collect(), vec![2.0; n]);
        let q = vec![0.0; n];

        let (a, b) = Self::constraint_system(problem);
        let cones = [SupportedConeT::NonnegativeConeT(b.len())];

        let mut builder = DefaultSettingsBuilder::default();
        builder.verbose(false);
        let settings = builder
            .build()
            .map_err(|e| EvalError::SolverUnavailable(format!("{:?}", e)))?;

        let mut solver = DefaultSolver::new(&p, &q, &a, &b, &cones, settings)
            .map_err(|e| EvalError::SolverUnavailable(format!("{:?}", e)))?;
        solver.solve();

        match solver.solution.status {
            SolverStatus::Solved | SolverStatus::AlmostSolved => Ok(RawSolution {
                x: solver.solution.x.clone(),
                objective_value: solver.solution.obj_val,
            }),
            status => Err(EvalError::SolverFailure(format!(
                "terminated with status {:?}",
                status
            ))),
        }
    }
}
