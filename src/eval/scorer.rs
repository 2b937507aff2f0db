//! Optimality Gap Scoring
//!
//! Normalized distance between a candidate objective and the reference
//! optimum. The reference for this problem family is usually exactly zero,
//! so the denominator is floored: near zero the gap degrades gracefully
//! into a scaled absolute-error measure instead of dividing by zero.

/// Denominator floor applied when the reference objective is near zero.
pub const GAP_EPSILON: f64 = 1e-8;

/// Relative optimality gap with the default [`GAP_EPSILON`] floor.
///
/// Always finite and non-negative for finite inputs; exactly `0.0` when the
/// candidate matches the reference. No upper bound is imposed.
pub fn optimality_gap(candidate_objective: f64, reference_objective: f64) -> f64 {
    optimality_gap_with_epsilon(candidate_objective, reference_objective, GAP_EPSILON)
}

/// Relative optimality gap with an explicit denominator floor.
pub fn optimality_gap_with_epsilon(
    candidate_objective: f64,
    reference_objective: f64,
    epsilon: f64,
) -> f64 {
    let denom = reference_objective.abs().max(epsilon);
    (candidate_objective - reference_objective).abs() / denom
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match_is_zero() {
        assert_eq!(optimality_gap(0.0, 0.0), 0.0);
        assert_eq!(optimality_gap(3.5, 3.5), 0.0);
    }

    #[test]
    fn test_floor_behavior_at_zero_reference() {
        // Denominator floored at 1e-8, so a candidate of 5.0 scores 5e8.
        assert_eq!(optimality_gap(5.0, 0.0), 5e8);
    }

    #[test]
    fn test_plain_relative_error_away_from_zero() {
        assert_eq!(optimality_gap(2.0, 1.0), 1.0);
        assert_eq!(optimality_gap(1.0, 2.0), 0.5);
    }

    #[test]
    fn test_symmetric_under_joint_negation() {
        let cases = [(2.0, 1.0), (0.5, 1.5), (7.0, 0.0)];
        for (a, b) in cases {
            assert_eq!(optimality_gap(a, b), optimality_gap(-a, -b));
        }
    }

    #[test]
    fn test_gap_is_non_negative() {
        let samples = [-1e9, -3.2, -1e-12, 0.0, 1e-12, 0.01, 42.0, 1e9];
        for &a in &samples {
            for &b in &samples {
                assert!(optimality_gap(a, b) >= 0.0, "gap({a}, {b}) went negative");
            }
        }
    }

    #[test]
    fn test_explicit_epsilon() {
        assert_eq!(optimality_gap_with_epsilon(1.0, 0.0, 1.0), 1.0);
    }
}
