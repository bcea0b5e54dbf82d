//! Line normalization for raw OCR output.
//!
//! Both input shapes reduce to the same thing: an ordered sequence of
//! trimmed, non-empty text lines. Normalization is pure and idempotent.

use crate::ocr::{OcrInput, OcrToken};

/// Normalize either input shape into ordered lines.
pub fn normalize(input: &OcrInput) -> Vec<String> {
    match input {
        OcrInput::Text(text) => normalize_text(text),
        OcrInput::Tokens(tokens) => normalize_tokens(tokens),
    }
}

/// Split a raw text block on line breaks, trim each line, drop empties.
pub fn normalize_text(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}

/// Map tokens to their text, trim, drop empties, preserve sequence order.
///
/// Bounding boxes are informational only; tokens are never reordered.
pub fn normalize_tokens(tokens: &[OcrToken]) -> Vec<String> {
    tokens
        .iter()
        .map(|t| t.text.trim())
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ocr::{BoundingBox, OcrToken};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_normalize_text_trims_and_drops_empties() {
        let lines = normalize_text("  Invoice No: 42  \n\n   \nTotal: 10.00\n");
        assert_eq!(lines, vec!["Invoice No: 42", "Total: 10.00"]);
    }

    #[test]
    fn test_normalize_text_preserves_order() {
        let lines = normalize_text("first\nsecond\nthird");
        assert_eq!(lines, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_normalize_text_empty_input() {
        assert!(normalize_text("").is_empty());
        assert!(normalize_text("  \n \t \n").is_empty());
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let once = normalize_text("  a \n\n b ");
        let twice = normalize_text(&once.join("\n"));
        assert_eq!(once, twice);
    }

    #[test]
    fn test_normalize_tokens_ignores_bounding_boxes() {
        let tokens = vec![
            OcrToken {
                text: "  Vendor: Acme  ".to_string(),
                bounding_box: Some(BoundingBox {
                    x: 10.0,
                    y: 500.0,
                    width: 80.0,
                    height: 12.0,
                }),
            },
            OcrToken::text_only("   "),
            OcrToken::text_only("Total: 5.00"),
        ];

        let lines = normalize_tokens(&tokens);
        assert_eq!(lines, vec!["Vendor: Acme", "Total: 5.00"]);
    }
}
