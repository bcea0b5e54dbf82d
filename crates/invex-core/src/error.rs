//! Error types for the invex-core library.

use thiserror::Error;

/// Main error type for the invex library.
#[derive(Error, Debug)]
pub enum InvexError {
    /// Invoice extraction error.
    #[error("extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// OCR provider error.
    #[error("OCR error: {0}")]
    Ocr(#[from] OcrError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to invoice field extraction.
///
/// Failing to match a field is never an error; every field has an empty
/// default. The only fatal case is input that is neither a text block nor
/// a token sequence.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// Input is neither a raw text block nor an OCR token sequence.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Errors raised by OCR provider implementations.
#[derive(Error, Debug)]
pub enum OcrError {
    /// The provider returned an error or an unusable response.
    #[error("provider failed: {0}")]
    Provider(String),

    /// The provider response could not be decoded.
    #[error("failed to decode provider response: {0}")]
    Decode(String),

    /// The provider is not reachable or not installed.
    #[error("provider unavailable: {0}")]
    Unavailable(String),
}

/// Result type for the invex library.
pub type Result<T> = std::result::Result<T, InvexError>;
