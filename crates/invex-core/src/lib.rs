//! Core library for invoice OCR extraction.
//!
//! This crate provides:
//! - Line normalization for raw OCR text and token sequences
//! - Rule-based invoice field matchers (number, date, amounts, parties, line items)
//! - A single-pass extraction orchestrator producing an [`InvoiceRecord`]
//! - The [`OcrProvider`] collaborator contract for OCR backends
//!
//! The extraction engine itself is pure and synchronous: it never performs
//! I/O and never fails on unrecognized input, only on structurally invalid
//! payloads.

pub mod error;
pub mod extract;
pub mod models;
pub mod ocr;

pub use error::{ExtractionError, InvexError, OcrError, Result};
pub use extract::{ExtractionResult, InvoiceExtractor, RuleExtractor};
pub use models::config::{ExtractionConfig, InvexConfig, OcrConfig};
pub use models::invoice::{InvoiceRecord, LineItem};
pub use ocr::{BoundingBox, OcrInput, OcrProvider, OcrToken};
