//! Output Validation
//!
//! Schema checks over untrusted agent output. The input arrives as an
//! already-parsed JSON value; every malformation maps to an `Invalid`
//! result with a specific reason, never a panic. Parsing failures are an
//! upstream concern and do not reach this module.

use serde_json::Value;

/// Outcome of validating one candidate against the required output schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Valid,
    Invalid(String),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }

    /// The rejection reason, if any.
    pub fn reason(&self) -> Option<&str> {
        match self {
            ValidationResult::Valid => None,
            ValidationResult::Invalid(reason) => Some(reason),
        }
    }
}

/// Check a raw candidate value against the required output schema.
///
/// Checks run in order and short-circuit on the first failure: the
/// candidate must be a JSON object, carry both `x` and `objective_value`,
/// have an `x` of the expected length, and a numeric `objective_value`.
/// An `x` that is not an array counts as length zero.
pub fn validate(candidate: &Value, expected_length: usize) -> ValidationResult {
    let object = match candidate.as_object() {
        Some(object) => object,
        None => return ValidationResult::Invalid("not a dict".to_string()),
    };

    if !object.contains_key("x") || !object.contains_key("objective_value") {
        return ValidationResult::Invalid("missing x or objective_value".to_string());
    }

    let got = object["x"].as_array().map(|a| a.len()).unwrap_or(0);
    if got != expected_length {
        return ValidationResult::Invalid(format!("x length {} != {}", got, expected_length));
    }

    if !object["objective_value"].is_number() {
        return ValidationResult::Invalid("objective_value not numeric".to_string());
    }

    ValidationResult::Valid
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_valid_candidate() {
        let candidate = json!({ "x": [0.0, 0.0, 0.0], "objective_value": 0.0 });
        assert_eq!(validate(&candidate, 3), ValidationResult::Valid);
    }

    #[test]
    fn test_integer_objective_is_numeric() {
        let candidate = json!({ "x": [1.0, 2.0], "objective_value": 5 });
        assert!(validate(&candidate, 2).is_valid());
    }

    #[test]
    fn test_non_object_rejected() {
        for candidate in [json!([1, 2, 3]), json!("hello"), json!(3.0), Value::Null] {
            assert_eq!(
                validate(&candidate, 3),
                ValidationResult::Invalid("not a dict".to_string())
            );
        }
    }

    #[test]
    fn test_missing_keys_rejected() {
        let missing_objective = json!({ "x": [0.0] });
        assert_eq!(
            validate(&missing_objective, 1),
            ValidationResult::Invalid("missing x or objective_value".to_string())
        );

        let missing_x = json!({ "objective_value": 0.0 });
        assert_eq!(
            validate(&missing_x, 1),
            ValidationResult::Invalid("missing x or objective_value".to_string())
        );
    }

    #[test]
    fn test_wrong_length_reports_both_sizes() {
        let candidate = json!({ "x": vec![0.0; 99], "objective_value": 0.0 });
        assert_eq!(
            validate(&candidate, 100),
            ValidationResult::Invalid("x length 99 != 100".to_string())
        );
    }

    #[test]
    fn test_non_array_x_counts_as_empty() {
        let candidate = json!({ "x": "not a vector", "objective_value": 0.0 });
        assert_eq!(
            validate(&candidate, 100),
            ValidationResult::Invalid("x length 0 != 100".to_string())
        );
    }

    #[test]
    fn test_non_numeric_objective_rejected() {
        for objective in [json!("0.0"), json!(true), Value::Null] {
            let candidate = json!({ "x": [0.0, 0.0], "objective_value": objective });
            assert_eq!(
                validate(&candidate, 2),
                ValidationResult::Invalid("objective_value not numeric".to_string())
            );
        }
    }

    #[test]
    fn test_checks_short_circuit_in_order() {
        // Both the length and the objective type are wrong; the length
        // check fires first.
        let candidate = json!({ "x": [0.0], "objective_value": "bad" });
        assert_eq!(
            validate(&candidate, 2),
            ValidationResult::Invalid("x length 1 != 2".to_string())
        );
    }
}
