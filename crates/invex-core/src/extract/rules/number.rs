//! Invoice number matching.

use super::patterns::INVOICE_NUMBER;

/// Match an invoice/bill/receipt identifier on a line.
///
/// The label keyword may be followed by "No", "#" or "ID" and an
/// optional colon; the captured token (letters, digits, hyphens) is
/// returned unmodified.
pub fn match_invoice_number(line: &str) -> Option<String> {
    INVOICE_NUMBER
        .captures(line)
        .map(|caps| caps[1].to_string())
}
