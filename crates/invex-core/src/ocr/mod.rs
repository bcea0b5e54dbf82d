//! OCR collaborator contract: tokens, input payloads, and the provider trait.
//!
//! The extraction engine consumes OCR output but never produces it. OCR
//! backends (remote vision services, local binaries) implement
//! [`OcrProvider`] in the surrounding application and hand the engine a
//! fully materialized [`OcrInput`] before extraction begins.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ExtractionError, OcrError};

/// A recognized text unit with an optional spatial position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OcrToken {
    /// Recognized text content.
    pub text: String,

    /// Bounding box, when the OCR backend reports one.
    #[serde(
        default,
        alias = "boundingBox",
        skip_serializing_if = "Option::is_none"
    )]
    pub bounding_box: Option<BoundingBox>,
}

impl OcrToken {
    /// Token with text only, no spatial data.
    pub fn text_only(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bounding_box: None,
        }
    }
}

/// Axis-aligned bounding box in image coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// One of the two input shapes the engine accepts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OcrInput {
    /// A single newline-delimited text block (reduced-capability path).
    Text(String),

    /// An ordered sequence of recognized tokens.
    Tokens(Vec<OcrToken>),
}

impl OcrInput {
    /// Build an input from an untyped JSON payload.
    ///
    /// Accepts a JSON string (raw text) or an array of token objects.
    /// Anything else is structurally invalid and fails the extraction
    /// call immediately.
    pub fn from_json(value: Value) -> Result<Self, ExtractionError> {
        match value {
            Value::String(text) => Ok(OcrInput::Text(text)),
            Value::Array(entries) => {
                let tokens: Vec<OcrToken> = entries
                    .into_iter()
                    .map(serde_json::from_value)
                    .collect::<Result<_, _>>()
                    .map_err(|e| {
                        ExtractionError::InvalidInput(format!("malformed token sequence: {e}"))
                    })?;
                Ok(OcrInput::Tokens(tokens))
            }
            other => Err(ExtractionError::InvalidInput(format!(
                "expected a text block or token sequence, got {}",
                json_type_name(&other)
            ))),
        }
    }

    /// Normalized, trimmed, non-empty lines in original order.
    pub fn lines(&self) -> Vec<String> {
        crate::extract::normalize(self)
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Capability-polymorphic OCR backend.
///
/// A remote vision service typically returns positioned tokens; a local
/// engine may only produce a flat text block. Both shapes feed the same
/// extraction engine.
pub trait OcrProvider {
    /// Human-readable provider name, used in logs and fallback messages.
    fn name(&self) -> &str;

    /// Run OCR on raw image bytes.
    fn recognize(&self, image: &[u8]) -> Result<OcrInput, OcrError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json_string() {
        let input = OcrInput::from_json(json!("Invoice No: 42")).unwrap();
        assert_eq!(input, OcrInput::Text("Invoice No: 42".to_string()));
    }

    #[test]
    fn test_from_json_tokens() {
        let input = OcrInput::from_json(json!([
            {"text": "Invoice No: 42"},
            {"text": "Total: 10.00", "boundingBox": {"x": 1.0, "y": 2.0, "width": 30.0, "height": 8.0}}
        ]))
        .unwrap();

        match input {
            OcrInput::Tokens(tokens) => {
                assert_eq!(tokens.len(), 2);
                assert_eq!(tokens[0].text, "Invoice No: 42");
                assert!(tokens[0].bounding_box.is_none());
                assert_eq!(tokens[1].bounding_box.unwrap().width, 30.0);
            }
            other => panic!("expected tokens, got {other:?}"),
        }
    }

    #[test]
    fn test_from_json_rejects_other_shapes() {
        assert!(OcrInput::from_json(json!(42)).is_err());
        assert!(OcrInput::from_json(json!({"text": "x"})).is_err());
        assert!(OcrInput::from_json(json!(null)).is_err());
    }

    #[test]
    fn test_from_json_rejects_malformed_tokens() {
        let err = OcrInput::from_json(json!([{"no_text": true}])).unwrap_err();
        assert!(err.to_string().contains("malformed token sequence"));
    }
}
