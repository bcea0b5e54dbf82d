//! Remote vision OCR provider.
//!
//! Talks to a Google-Vision-style annotation endpoint: the image goes up as
//! base64 in a JSON body, the response carries `textAnnotations` with
//! bounding polygons (the first entry is the whole-image transcript and is
//! skipped) or a plain `fullTextAnnotation.text` block.

use std::time::Duration;

use base64::Engine;
use invex_core::{BoundingBox, OcrConfig, OcrError, OcrInput, OcrProvider, OcrToken};
use serde::Deserialize;
use tracing::debug;

pub struct RemoteVision {
    client: reqwest::blocking::Client,
    endpoint: String,
    api_key: String,
}

#[derive(Deserialize)]
struct AnnotateResponse {
    #[serde(default)]
    responses: Vec<AnnotateResult>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AnnotateResult {
    #[serde(default)]
    text_annotations: Vec<TextAnnotation>,
    full_text_annotation: Option<FullTextAnnotation>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TextAnnotation {
    description: String,
    bounding_poly: Option<BoundingPoly>,
}

#[derive(Deserialize)]
struct BoundingPoly {
    #[serde(default)]
    vertices: Vec<Vertex>,
}

#[derive(Deserialize, Default)]
struct Vertex {
    #[serde(default)]
    x: f32,
    #[serde(default)]
    y: f32,
}

#[derive(Deserialize)]
struct FullTextAnnotation {
    text: String,
}

impl RemoteVision {
    /// Fails when the endpoint is unset or the API key env var is missing,
    /// so the chain can fall through to the local provider.
    pub fn from_config(config: &OcrConfig) -> Result<Self, OcrError> {
        if config.endpoint.is_empty() {
            return Err(OcrError::Unavailable(
                "no remote OCR endpoint configured".to_string(),
            ));
        }

        let api_key = std::env::var(&config.api_key_env).map_err(|_| {
            OcrError::Unavailable(format!(
                "API key environment variable {} not set",
                config.api_key_env
            ))
        })?;

        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| OcrError::Provider(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            api_key,
        })
    }
}

impl OcrProvider for RemoteVision {
    fn name(&self) -> &str {
        "remote-vision"
    }

    fn recognize(&self, image: &[u8]) -> Result<OcrInput, OcrError> {
        let content = base64::engine::general_purpose::STANDARD.encode(image);
        let body = serde_json::json!({
            "requests": [{
                "image": { "content": content },
                "features": [{ "type": "TEXT_DETECTION" }],
            }]
        });

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .map_err(|e| OcrError::Provider(format!("request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(OcrError::Provider(format!(
                "OCR service returned {}",
                status
            )));
        }

        let annotate: AnnotateResponse = response
            .json()
            .map_err(|e| OcrError::Decode(format!("invalid OCR response: {}", e)))?;

        let result = annotate
            .responses
            .into_iter()
            .next()
            .ok_or_else(|| OcrError::Decode("empty OCR response".to_string()))?;

        // Word-level annotations; index 0 is the full transcript.
        if result.text_annotations.len() > 1 {
            let tokens: Vec<OcrToken> = result
                .text_annotations
                .into_iter()
                .skip(1)
                .map(|a| OcrToken {
                    text: a.description,
                    bounding_box: a.bounding_poly.and_then(to_bounding_box),
                })
                .collect();

            debug!("Remote OCR returned {} tokens", tokens.len());
            return Ok(OcrInput::Tokens(tokens));
        }

        if let Some(full) = result.full_text_annotation {
            debug!("Remote OCR returned full-text transcript");
            return Ok(OcrInput::Text(full.text));
        }

        Err(OcrError::Decode(
            "OCR response carried no text annotations".to_string(),
        ))
    }
}

fn to_bounding_box(poly: BoundingPoly) -> Option<BoundingBox> {
    let xs: Vec<f32> = poly.vertices.iter().map(|v| v.x).collect();
    let ys: Vec<f32> = poly.vertices.iter().map(|v| v.y).collect();

    let min_x = xs.iter().cloned().reduce(f32::min)?;
    let max_x = xs.iter().cloned().reduce(f32::max)?;
    let min_y = ys.iter().cloned().reduce(f32::min)?;
    let max_y = ys.iter().cloned().reduce(f32::max)?;

    Some(BoundingBox {
        x: min_x,
        y: min_y,
        width: max_x - min_x,
        height: max_y - min_y,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounding_poly_to_box() {
        let poly = BoundingPoly {
            vertices: vec![
                Vertex { x: 10.0, y: 20.0 },
                Vertex { x: 50.0, y: 20.0 },
                Vertex { x: 50.0, y: 35.0 },
                Vertex { x: 10.0, y: 35.0 },
            ],
        };

        let bbox = to_bounding_box(poly).unwrap();
        assert_eq!(bbox.x, 10.0);
        assert_eq!(bbox.y, 20.0);
        assert_eq!(bbox.width, 40.0);
        assert_eq!(bbox.height, 15.0);
    }

    #[test]
    fn test_empty_poly_has_no_box() {
        assert!(to_bounding_box(BoundingPoly { vertices: vec![] }).is_none());
    }

    #[test]
    fn test_annotations_deserialize() {
        let json = r#"{
            "responses": [{
                "textAnnotations": [
                    { "description": "Invoice No: INV-1" },
                    { "description": "Invoice", "boundingPoly": { "vertices": [{"x": 1, "y": 2}] } }
                ]
            }]
        }"#;

        let parsed: AnnotateResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.responses[0].text_annotations.len(), 2);
        assert_eq!(parsed.responses[0].text_annotations[1].description, "Invoice");
    }
}
