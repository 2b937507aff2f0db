//! Text Utilities

/// Truncate raw model output for logs and run summaries, respecting UTF-8
/// boundaries.
pub fn truncate_preview(content: &str, max_bytes: usize) -> String {
    if content.len() <= max_bytes {
        return content.to_string();
    }

    let mut end = 0;
    for (idx, c) in content.char_indices() {
        let char_end = idx + c.len_utf8();
        if char_end > max_bytes {
            break;
        }
        end = char_end;
    }

    format!(
        "{}... [{} bytes truncated]",
        &content[..end],
        content.len() - end
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_content_untouched() {
        assert_eq!(truncate_preview("hello", 200), "hello");
    }

    #[test]
    fn test_long_content_truncated_with_marker() {
        let content = "a".repeat(300);
        let preview = truncate_preview(&content, 200);
        assert!(preview.starts_with(&"a".repeat(200)));
        assert!(preview.contains("[100 bytes truncated]"));
    }

    #[test]
    fn test_respects_utf8_boundaries() {
        let content = "é".repeat(100); // 2 bytes per char
        let preview = truncate_preview(&content, 33);
        assert!(preview.starts_with(&"é".repeat(16)));
    }
}
