//! OCR provider implementations and failover.
//!
//! The extraction engine is agnostic to where OCR output comes from; these
//! providers produce [`OcrInput`] from image bytes. The default chain tries
//! the remote vision service first and falls back to a local tesseract
//! binary when the service is unreachable or unconfigured.

mod tesseract;
mod vision;

pub use tesseract::TesseractOcr;
pub use vision::RemoteVision;

use invex_core::{OcrConfig, OcrError, OcrInput, OcrProvider};
use tracing::{debug, warn};

/// Tries each provider in order, returning the first successful result.
pub struct FallbackChain {
    providers: Vec<Box<dyn OcrProvider>>,
}

impl FallbackChain {
    pub fn new(providers: Vec<Box<dyn OcrProvider>>) -> Self {
        Self { providers }
    }

    /// Build the standard chain from config: remote vision, then local
    /// tesseract. With `local_only` the remote provider is skipped.
    pub fn from_config(config: &OcrConfig, local_only: bool) -> Self {
        let mut providers: Vec<Box<dyn OcrProvider>> = Vec::new();

        if !local_only {
            match RemoteVision::from_config(config) {
                Ok(vision) => providers.push(Box::new(vision)),
                Err(e) => warn!("Remote OCR unavailable: {}", e),
            }
        }

        providers.push(Box::new(TesseractOcr::from_config(config)));

        Self::new(providers)
    }

    pub fn recognize(&self, image: &[u8]) -> Result<OcrInput, OcrError> {
        let mut last_error = OcrError::Unavailable("no OCR providers configured".to_string());

        for provider in &self.providers {
            debug!("Trying OCR provider: {}", provider.name());
            match provider.recognize(image) {
                Ok(output) => return Ok(output),
                Err(e) => {
                    warn!("OCR provider {} failed: {}", provider.name(), e);
                    last_error = e;
                }
            }
        }

        Err(last_error)
    }
}
