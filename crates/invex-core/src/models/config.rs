//! Configuration structures for the extraction pipeline.

use serde::{Deserialize, Serialize};

/// Main configuration for the invex pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InvexConfig {
    /// OCR provider configuration.
    pub ocr: OcrConfig,

    /// Extraction configuration.
    pub extraction: ExtractionConfig,
}

/// OCR provider configuration.
///
/// Consumed by the surrounding application when building provider
/// implementations; the extraction engine itself never reads it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OcrConfig {
    /// Remote vision endpoint URL (empty = remote provider disabled).
    pub endpoint: String,

    /// Environment variable holding the remote API key.
    pub api_key_env: String,

    /// Request timeout in seconds for the remote provider.
    pub timeout_secs: u64,

    /// Local OCR command used as fallback.
    pub local_command: String,

    /// Recognition language passed to the local command.
    pub language: String,
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            api_key_env: "INVEX_OCR_KEY".to_string(),
            timeout_secs: 120,
            local_command: "tesseract".to_string(),
            language: "eng".to_string(),
        }
    }
}

/// Invoice extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Currency symbols tolerated before amounts and item prices.
    pub currency_symbols: String,

    /// Maximum number of normalized lines to scan (0 = unlimited).
    pub max_lines: usize,

    /// Emit warnings for headline fields that stay empty.
    pub warn_on_missing: bool,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            currency_symbols: "$".to_string(),
            max_lines: 0,
            warn_on_missing: true,
        }
    }
}

impl InvexConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
        std::fs::write(path, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = InvexConfig::default();
        assert_eq!(config.ocr.local_command, "tesseract");
        assert_eq!(config.ocr.timeout_secs, 120);
        assert_eq!(config.extraction.max_lines, 0);
        assert_eq!(config.extraction.currency_symbols, "$");
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: InvexConfig =
            serde_json::from_str(r#"{"ocr": {"endpoint": "https://vision.example/ocr"}}"#).unwrap();
        assert_eq!(config.ocr.endpoint, "https://vision.example/ocr");
        assert_eq!(config.ocr.language, "eng");
        assert!(config.extraction.warn_on_missing);
    }
}
