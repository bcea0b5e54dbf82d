//! Local OCR via an external tesseract binary.

use std::io::ErrorKind;
use std::process::Command;

use invex_core::{OcrConfig, OcrError, OcrInput, OcrProvider};
use tracing::debug;

pub struct TesseractOcr {
    command: String,
    language: String,
}

impl TesseractOcr {
    pub fn new(command: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            language: language.into(),
        }
    }

    pub fn from_config(config: &OcrConfig) -> Self {
        Self::new(config.local_command.clone(), config.language.clone())
    }
}

impl OcrProvider for TesseractOcr {
    fn name(&self) -> &str {
        "tesseract"
    }

    fn recognize(&self, image: &[u8]) -> Result<OcrInput, OcrError> {
        let dir = tempfile::tempdir()
            .map_err(|e| OcrError::Provider(format!("temp dir creation failed: {}", e)))?;

        let image_path = dir.path().join("input.png");
        std::fs::write(&image_path, image)
            .map_err(|e| OcrError::Provider(format!("temp file write failed: {}", e)))?;

        debug!("Running {} on {}", self.command, image_path.display());

        let output = Command::new(&self.command)
            .arg(&image_path)
            .arg("stdout")
            .arg("-l")
            .arg(&self.language)
            .output()
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => {
                    OcrError::Unavailable(format!("{} binary not found", self.command))
                }
                _ => OcrError::Provider(e.to_string()),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(OcrError::Provider(format!(
                "{} exited with {}: {}",
                self.command,
                output.status,
                stderr.trim()
            )));
        }

        let text = String::from_utf8(output.stdout)
            .map_err(|e| OcrError::Decode(format!("non-UTF-8 OCR output: {}", e)))?;

        Ok(OcrInput::Text(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_binary_is_unavailable() {
        let ocr = TesseractOcr::new("definitely-not-a-real-binary-4921", "eng");
        let err = ocr.recognize(&[0u8; 4]).unwrap_err();
        assert!(matches!(err, OcrError::Unavailable(_)));
    }
}
