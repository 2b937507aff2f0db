//! Prompt Styles
//!
//! The same problem is presented to the agent under two phrasings. Only
//! the tone and the firmness of the format demands differ; the required
//! output schema is identical, which is exactly what the comparison
//! measures.

use crate::eval::PromptStyle;

const PROBLEM_SPEC_PLACEHOLDER: &str = "{{PROBLEM_SPEC}}";

const POLITE_TEMPLATE: &str = "\
Hello! Could you please help with the following optimization problem?

{{PROBLEM_SPEC}}

When you have worked out a solution, would you mind replying with a JSON \
object containing two keys: \"x\" (the list of all variable values, in \
order) and \"objective_value\" (the objective at that point)? Thank you \
very much for your help!";

const STRICT_TEMPLATE: &str = "\
Solve the following optimization problem.

{{PROBLEM_SPEC}}

OUTPUT REQUIREMENTS:
1. Respond with JSON ONLY. No prose, no markdown, no explanation.
2. The JSON object MUST contain exactly two keys: \"x\" and \"objective_value\".
3. \"x\" MUST be a list of ALL variable values in index order.
4. \"objective_value\" MUST be a number.
Any deviation from this format is a failure.";

pub fn template(style: PromptStyle) -> &'static str {
    match style {
        PromptStyle::Polite => POLITE_TEMPLATE,
        PromptStyle::Strict => STRICT_TEMPLATE,
    }
}

/// Render the full prompt for one style.
pub fn build_prompt(style: PromptStyle, problem_spec: &str) -> String {
    template(style).replace(PROBLEM_SPEC_PLACEHOLDER, problem_spec)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::build_problem;

    #[test]
    fn test_placeholder_substituted() {
        let spec = build_problem().describe();
        for style in PromptStyle::ALL {
            let prompt = build_prompt(style, &spec);
            assert!(!prompt.contains(PROBLEM_SPEC_PLACEHOLDER));
            assert!(prompt.contains("minimize sum(x[i]^2"));
        }
    }

    #[test]
    fn test_both_styles_demand_the_same_keys() {
        for style in PromptStyle::ALL {
            let prompt = build_prompt(style, "PROBLEM");
            assert!(prompt.contains("\"x\""));
            assert!(prompt.contains("\"objective_value\""));
        }
    }

    #[test]
    fn test_styles_differ_in_tone() {
        let polite = build_prompt(PromptStyle::Polite, "PROBLEM");
        let strict = build_prompt(PromptStyle::Strict, "PROBLEM");
        assert!(polite.contains("please"));
        assert!(strict.contains("JSON ONLY"));
        assert_ne!(polite, strict);
    }
}
