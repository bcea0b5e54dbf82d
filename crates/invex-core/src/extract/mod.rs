//! Invoice field extraction: line normalization, matchers, orchestrator.

mod normalize;
mod parser;
pub mod rules;

pub use normalize::{normalize, normalize_text, normalize_tokens};
pub use parser::{ExtractionResult, InvoiceExtractor, RuleExtractor};
