//! Problem Definition
//!
//! The fixed nonlinear program every agent is evaluated on:
//! minimize sum(x[i]^2) subject to 20 copies of sum(x) >= 0 and
//! -10 <= x[i] <= 10. The problem is convex, so the feasible point closest
//! to the origin is the unique global optimum; because the bounds bracket
//! zero and the constraints hold at zero, that optimum is x = 0.

use serde::{Deserialize, Serialize};

/// Immutable description of one problem instance.
///
/// The objective shape (sum of squares) and constraint shape (total sum
/// bounded below by zero, replicated) are fixed; only the dimensions and
/// bounds are parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProblemConfig {
    pub n_variables: usize,
    pub n_constraints: usize,
    pub lower_bound: f64,
    pub upper_bound: f64,
}

impl ProblemConfig {
    /// Render the problem statement that gets substituted into prompts.
    pub fn describe(&self) -> String {
        format!(
            "minimize sum(x[i]^2 for i in 1..{n})\n\
             subject to: for j in 1..{m}: sum(x[i] for i in 1..{n}) >= 0.\n\
             Bounds: {lo} <= x[i] <= {hi} for all i.",
            n = self.n_variables,
            m = self.n_constraints,
            lo = self.lower_bound,
            hi = self.upper_bound,
        )
    }
}

/// Build the canonical 100-variable, 20-constraint instance.
///
/// Pure and infallible: all parameters are compile-time constants, and the
/// bounds always bracket zero so the instance is feasible and bounded.
pub fn build_problem() -> ProblemConfig {
    ProblemConfig {
        n_variables: 100,
        n_constraints: 20,
        lower_bound: -10.0,
        upper_bound: 10.0,
    }
}

/// A solved point: the decision vector plus the reported objective.
///
/// Produced either by the reference oracle (trusted) or parsed from agent
/// output, in which case it is untrusted until validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    pub x: Vec<f64>,
    pub objective_value: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_problem_dimensions() {
        let problem = build_problem();
        assert_eq!(problem.n_variables, 100);
        assert_eq!(problem.n_constraints, 20);
        assert_eq!(problem.lower_bound, -10.0);
        assert_eq!(problem.upper_bound, 10.0);
    }

    #[test]
    fn test_bounds_bracket_zero() {
        let problem = build_problem();
        assert!(problem.lower_bound <= 0.0 && 0.0 <= problem.upper_bound);
    }

    #[test]
    fn test_describe_mentions_dimensions() {
        let spec = build_problem().describe();
        assert!(spec.contains("1..100"));
        assert!(spec.contains("1..20"));
        assert!(spec.contains("-10 <= x[i] <= 10"));
    }
}
