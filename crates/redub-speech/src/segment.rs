//! Newline-based paragraph segmentation.

/// Split text into an ordered list of non-empty paragraphs.
///
/// Text without a newline comes back as a single paragraph, unchanged. Text
/// with newlines is split per line; each piece is trimmed and pieces that
/// trim to nothing are dropped. Non-empty input always yields at least one
/// paragraph, and top-to-bottom order is preserved.
pub fn split_paragraphs(text: &str) -> Vec<String> {
    if !text.contains('\n') {
        return vec![text.to_string()];
    }

    text.split('\n')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_line_passes_through_unchanged() {
        assert_eq!(split_paragraphs("hello world"), vec!["hello world"]);
    }

    #[test]
    fn single_line_keeps_surrounding_whitespace() {
        // No newline means no trimming either.
        assert_eq!(split_paragraphs("  hello  "), vec!["  hello  "]);
    }

    #[test]
    fn splits_and_trims_multi_paragraph_text() {
        assert_eq!(
            split_paragraphs("Hello.\n\nWorld.\n"),
            vec!["Hello.", "World."]
        );
    }

    #[test]
    fn drops_whitespace_only_lines() {
        assert_eq!(
            split_paragraphs("one\n   \n\ttwo\t\n"),
            vec!["one", "two"]
        );
    }

    #[test]
    fn handles_windows_line_endings() {
        assert_eq!(split_paragraphs("a\r\nb\r\n"), vec!["a", "b"]);
    }

    #[test]
    fn preserves_paragraph_order() {
        let text = "p1\np2\np3\np4";
        assert_eq!(split_paragraphs(text), vec!["p1", "p2", "p3", "p4"]);
    }
}
