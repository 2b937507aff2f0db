//! Model Output Extraction
//!
//! Agents wrap JSON in markdown fences more often than not. Pull the
//! payload out before parsing; anything that yields no payload here is
//! recorded as a parse failure for that style downstream.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref FENCE_RE: Regex = Regex::new(r"(?s)```(?:json)?\s*(.*?)```").unwrap();
}

/// Extract a JSON payload from raw model output.
///
/// A fenced block wins; otherwise raw text that already starts with `{`
/// is taken as-is. Empty or non-JSON responses yield `None`.
pub fn extract_json(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if let Some(caps) = FENCE_RE.captures(raw) {
        return Some(caps[1].trim().to_string());
    }
    if raw.starts_with('{') {
        return Some(raw.to_string());
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fenced_json_block() {
        let raw = "Here you go:\n```json\n{\"x\": [1.0], \"objective_value\": 1.0}\n```\nHope that helps!";
        assert_eq!(
            extract_json(raw).as_deref(),
            Some("{\"x\": [1.0], \"objective_value\": 1.0}")
        );
    }

    #[test]
    fn test_plain_fence_without_language_tag() {
        let raw = "```\n{\"x\": []}\n```";
        assert_eq!(extract_json(raw).as_deref(), Some("{\"x\": []}"));
    }

    #[test]
    fn test_bare_json_object() {
        let raw = "  {\"objective_value\": 0.0}  ";
        assert_eq!(extract_json(raw).as_deref(), Some("{\"objective_value\": 0.0}"));
    }

    #[test]
    fn test_prose_without_payload() {
        assert_eq!(extract_json("I cannot solve this problem."), None);
    }

    #[test]
    fn test_empty_response() {
        assert_eq!(extract_json(""), None);
        assert_eq!(extract_json("   \n  "), None);
    }
}
