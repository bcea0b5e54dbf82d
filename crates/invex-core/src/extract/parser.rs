//! Single-pass extraction orchestrator.

use std::time::Instant;

use tracing::{debug, info};

use crate::models::config::ExtractionConfig;
use crate::models::invoice::InvoiceRecord;
use crate::ocr::{OcrInput, OcrToken};

use super::normalize::{normalize, normalize_text, normalize_tokens};
use super::rules;

/// Result of one extraction run, with diagnostics.
#[derive(Debug, Clone)]
pub struct ExtractionResult {
    /// Extracted invoice record.
    pub record: InvoiceRecord,
    /// Extraction warnings (headline fields that stayed empty).
    pub warnings: Vec<String>,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

/// Trait for invoice extractors.
pub trait InvoiceExtractor {
    /// Extract a record from either input shape.
    fn extract(&self, input: &OcrInput) -> InvoiceRecord;

    /// Extract from a raw newline-delimited text block.
    fn extract_from_text(&self, text: &str) -> InvoiceRecord;

    /// Extract from an ordered OCR token sequence.
    fn extract_from_tokens(&self, tokens: &[OcrToken]) -> InvoiceRecord;
}

/// Rule-based extractor: one pass over normalized lines, applying every
/// field matcher in a fixed priority order.
///
/// Scalar matchers run only while their target field is unset (first
/// match wins); the line item matcher always runs and accumulates.
/// Extraction never fails: lines matching nothing are skipped and
/// unmatched fields keep their empty defaults.
#[derive(Debug, Clone)]
pub struct RuleExtractor {
    /// Currency symbols tolerated before amounts and item prices.
    currency_symbols: String,
    /// Maximum number of lines to scan (0 = unlimited).
    max_lines: usize,
    /// Emit warnings for headline fields that stay empty.
    warn_on_missing: bool,
}

impl RuleExtractor {
    /// Create a new extractor with default settings.
    pub fn new() -> Self {
        Self {
            currency_symbols: "$".to_string(),
            max_lines: 0,
            warn_on_missing: true,
        }
    }

    /// Create an extractor from configuration.
    pub fn from_config(config: &ExtractionConfig) -> Self {
        Self {
            currency_symbols: config.currency_symbols.clone(),
            max_lines: config.max_lines,
            warn_on_missing: config.warn_on_missing,
        }
    }

    /// Override the tolerated currency symbols.
    pub fn with_currency_symbols(mut self, symbols: impl Into<String>) -> Self {
        self.currency_symbols = symbols.into();
        self
    }

    /// Cap the number of scanned lines.
    pub fn with_max_lines(mut self, max_lines: usize) -> Self {
        self.max_lines = max_lines;
        self
    }

    /// Enable or disable missing-field warnings.
    pub fn with_missing_warnings(mut self, warn: bool) -> Self {
        self.warn_on_missing = warn;
        self
    }

    /// Run extraction and report diagnostics alongside the record.
    pub fn run(&self, input: &OcrInput) -> ExtractionResult {
        let start = Instant::now();
        let record = self.extract(input);

        let mut warnings = Vec::new();
        if self.warn_on_missing {
            if record.invoice_number.is_empty() {
                warnings.push("could not extract invoice number".to_string());
            }
            if record.date.is_empty() {
                warnings.push("could not extract date".to_string());
            }
            if record.total_amount.is_empty() {
                warnings.push("could not extract total amount".to_string());
            }
        }

        ExtractionResult {
            record,
            warnings,
            processing_time_ms: start.elapsed().as_millis() as u64,
        }
    }

    /// Scan normalized lines once, in order, merging first-found values.
    fn scan(&self, lines: &[String]) -> InvoiceRecord {
        info!("scanning {} normalized lines", lines.len());

        let lines = if self.max_lines > 0 && lines.len() > self.max_lines {
            &lines[..self.max_lines]
        } else {
            lines
        };

        let mut record = InvoiceRecord::new();

        for line in lines {
            if record.invoice_number.is_empty() {
                if let Some(number) = rules::match_invoice_number(line) {
                    record.invoice_number = number;
                }
            }

            if record.date.is_empty() {
                if let Some(date) = rules::match_date(line) {
                    record.date = date;
                }
            }

            if record.total_amount.is_empty() {
                if let Some(amount) = rules::match_total(line, &self.currency_symbols) {
                    record.total_amount = amount;
                }
            }

            if record.subtotal.is_empty() {
                if let Some(amount) = rules::match_subtotal(line, &self.currency_symbols) {
                    record.subtotal = amount;
                }
            }

            if record.tax.is_empty() {
                if let Some(amount) = rules::match_tax(line, &self.currency_symbols) {
                    record.tax = amount;
                }
            }

            if record.vendor_name.is_empty() {
                if let Some(name) = rules::match_vendor_name(line) {
                    record.vendor_name = name;
                }
            }

            if record.customer_name.is_empty() {
                if let Some(name) = rules::match_customer_name(line) {
                    record.customer_name = name;
                }
            }

            // Positional address attribution: first seen goes to the
            // vendor, second to the customer, the rest are ignored.
            if record.vendor_address.is_empty() {
                if let Some(address) = rules::match_address(line) {
                    record.vendor_address = address;
                }
            } else if record.customer_address.is_empty() {
                if let Some(address) = rules::match_address(line) {
                    record.customer_address = address;
                }
            }

            if let Some(item) = rules::match_line_item(line, &self.currency_symbols) {
                record.items.push(item);
            }
        }

        debug!(
            "extraction done: {} items, missing fields: {:?}",
            record.items.len(),
            record.missing_fields()
        );

        record
    }
}

impl Default for RuleExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl InvoiceExtractor for RuleExtractor {
    fn extract(&self, input: &OcrInput) -> InvoiceRecord {
        self.scan(&normalize(input))
    }

    fn extract_from_text(&self, text: &str) -> InvoiceRecord {
        self.scan(&normalize_text(text))
    }

    fn extract_from_tokens(&self, tokens: &[OcrToken]) -> InvoiceRecord {
        self.scan(&normalize_tokens(tokens))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::invoice::LineItem;
    use crate::ocr::OcrToken;
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn extract_text(text: &str) -> InvoiceRecord {
        RuleExtractor::new().extract_from_text(text)
    }

    #[test]
    fn test_invoice_number_scenario() {
        let record = extract_text("Invoice No: INV-2024-001");
        assert_eq!(record.invoice_number, "INV-2024-001");
    }

    #[test]
    fn test_total_amount_scenario() {
        let record = extract_text("Total Amount: $1,234.56");
        assert_eq!(record.total_amount, "1234.56");
    }

    #[test]
    fn test_line_item_scenario() {
        let record = extract_text("Widget A 3 x $10.00");
        assert_eq!(
            record.items,
            vec![LineItem {
                description: "Widget A".to_string(),
                quantity: 3,
                unit_price: Decimal::from_str("10.00").unwrap(),
            }]
        );
    }

    #[test]
    fn test_address_attribution_scenario() {
        let record = extract_text("Address: 1 Main St\nAddress: 2 Oak Ave");
        assert_eq!(record.vendor_address, "1 Main St");
        assert_eq!(record.customer_address, "2 Oak Ave");
    }

    #[test]
    fn test_third_address_is_ignored() {
        let record = extract_text("Address: 1 Main St\nAddress: 2 Oak Ave\nAddress: 3 Pine Rd");
        assert_eq!(record.vendor_address, "1 Main St");
        assert_eq!(record.customer_address, "2 Oak Ave");
    }

    #[test]
    fn test_empty_input_scenario() {
        let record = extract_text("");
        assert_eq!(record, InvoiceRecord::new());
        assert!(record.items.is_empty());
    }

    #[test]
    fn test_graceful_degradation() {
        let record = extract_text("lorem ipsum\ndolor sit amet\n12345678");
        assert!(record.is_empty());
    }

    #[test]
    fn test_first_match_wins() {
        let record = extract_text("Invoice No: FIRST-1\nInvoice No: SECOND-2");
        assert_eq!(record.invoice_number, "FIRST-1");

        let record = extract_text("Total: 10.00\nTotal: 20.00");
        assert_eq!(record.total_amount, "10.00");
    }

    #[test]
    fn test_items_accumulate_in_order() {
        let record = extract_text("Widget A 3 x $10.00\nWidget B 1 @ 2.50\nWidget A 3 x $10.00");
        assert_eq!(record.items.len(), 3);
        assert_eq!(record.items[0].description, "Widget A");
        assert_eq!(record.items[1].description, "Widget B");
        // No deduplication.
        assert_eq!(record.items[0], record.items[2]);
    }

    #[test]
    fn test_multiple_fields_from_one_line() {
        // The line carries both an invoice label and a date.
        let record = extract_text("Invoice 12/05/2024");
        assert_eq!(record.date, "12/05/2024");
        assert!(!record.invoice_number.is_empty());
    }

    #[test]
    fn test_determinism() {
        let text = "Invoice No: INV-7\nDate: 01/02/2024\nVendor: Acme\nAddress: 1 Main St\n\
                    Customer: Jane\nAddress: 2 Oak Ave\nWidget A 3 x $10.00\n\
                    Sub Total: 30.00\nTax: 2.40\nTotal: 32.40";
        let first = extract_text(text);
        for _ in 0..10 {
            assert_eq!(extract_text(text), first);
        }
    }

    #[test]
    fn test_full_invoice() {
        let text = "\
            Acme Supplies Inc\n\
            Invoice No: INV-2024-001\n\
            Date: 12/05/2024\n\
            Vendor: Acme Supplies Inc\n\
            Address: 1 Main St\n\
            Customer: Northwind Traders\n\
            Address: 2 Oak Ave\n\
            Widget A 3 x $10.00\n\
            Widget B 2 @ $4.50\n\
            Sub Total: $39.00\n\
            Tax: $3.12\n\
            Total Amount: $42.12";

        let record = extract_text(text);
        assert_eq!(record.invoice_number, "INV-2024-001");
        assert_eq!(record.date, "12/05/2024");
        assert_eq!(record.vendor_name, "Acme Supplies Inc");
        assert_eq!(record.vendor_address, "1 Main St");
        assert_eq!(record.customer_name, "Northwind Traders");
        assert_eq!(record.customer_address, "2 Oak Ave");
        assert_eq!(record.items.len(), 2);
        assert_eq!(record.subtotal, "39.00");
        assert_eq!(record.tax, "3.12");
        assert_eq!(record.total_amount, "42.12");
    }

    #[test]
    fn test_token_path_matches_text_path() {
        let lines = [
            "Invoice No: INV-5",
            "Vendor: Acme",
            "Widget A 3 x $10.00",
            "Total: 30.00",
        ];
        let tokens: Vec<OcrToken> = lines.iter().map(|l| OcrToken::text_only(*l)).collect();

        let extractor = RuleExtractor::new();
        let from_tokens = extractor.extract_from_tokens(&tokens);
        let from_text = extractor.extract_from_text(&lines.join("\n"));
        assert_eq!(from_tokens, from_text);
    }

    #[test]
    fn test_raw_text_minimal_contract() {
        // Even an unstructured blob must yield invoice number and date.
        let blob = "some header noise Invoice No: INV-99 more noise 03/04/2024 trailing";
        let record = extract_text(blob);
        assert_eq!(record.invoice_number, "INV-99");
        assert_eq!(record.date, "03/04/2024");
    }

    #[test]
    fn test_configured_currency_symbols() {
        let text = "Widget A 3 x €10.00\nSub Total: €30.00\nTax: €2.40\nTotal: €32.40";

        let config = ExtractionConfig {
            currency_symbols: "€".to_string(),
            ..ExtractionConfig::default()
        };
        let record = RuleExtractor::from_config(&config).extract_from_text(text);
        assert_eq!(record.items.len(), 1);
        assert_eq!(record.subtotal, "30.00");
        assert_eq!(record.tax, "2.40");
        assert_eq!(record.total_amount, "32.40");

        // The default extractor only tolerates "$".
        let record = RuleExtractor::new().extract_from_text(text);
        assert!(record.items.is_empty());
        assert!(record.total_amount.is_empty());

        let record = RuleExtractor::new()
            .with_currency_symbols("€$")
            .extract_from_text("Total: $5.00");
        assert_eq!(record.total_amount, "5.00");
    }

    #[test]
    fn test_max_lines_cap() {
        let extractor = RuleExtractor::new().with_max_lines(1);
        let record = extractor.extract_from_text("noise\nInvoice No: INV-1");
        assert!(record.invoice_number.is_empty());
    }

    #[test]
    fn test_run_reports_warnings_and_timing() {
        let result = RuleExtractor::new().run(&OcrInput::Text("Vendor: Acme".to_string()));
        assert_eq!(result.record.vendor_name, "Acme");
        assert_eq!(result.warnings.len(), 3);

        let result = RuleExtractor::new()
            .with_missing_warnings(false)
            .run(&OcrInput::Text(String::new()));
        assert!(result.warnings.is_empty());
    }
}
