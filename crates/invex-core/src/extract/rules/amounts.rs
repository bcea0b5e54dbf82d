//! Amount matching for totals, subtotals, and tax.

use std::borrow::Cow;
use std::str::FromStr;

use rust_decimal::Decimal;

use super::patterns::{SUBTOTAL, TAX, TOTAL_AMOUNT};

/// Match a "Total" / "Total Amount" line.
///
/// Subtotal lines contain the word "Total" too; they are left for the
/// subtotal matcher so a leading "Sub Total" line cannot shadow the
/// grand total.
pub fn match_total(line: &str, symbols: &str) -> Option<String> {
    let line = strip_currency(line, symbols);
    if SUBTOTAL.is_match(&line) {
        return None;
    }
    TOTAL_AMOUNT
        .captures(&line)
        .and_then(|caps| parse_amount(&caps[1]))
}

/// Match a "Sub Total" / "Subtotal" line.
pub fn match_subtotal(line: &str, symbols: &str) -> Option<String> {
    SUBTOTAL
        .captures(&strip_currency(line, symbols))
        .and_then(|caps| parse_amount(&caps[1]))
}

/// Match a "Tax" / "Tax Amount" line.
pub fn match_tax(line: &str, symbols: &str) -> Option<String> {
    TAX.captures(&strip_currency(line, symbols))
        .and_then(|caps| parse_amount(&caps[1]))
}

/// Remove configured currency symbols from a line so the amount
/// patterns see only the label and the numeric token.
pub fn strip_currency<'a>(line: &'a str, symbols: &str) -> Cow<'a, str> {
    if line.chars().any(|c| symbols.contains(c)) {
        Cow::Owned(line.chars().filter(|c| !symbols.contains(*c)).collect())
    } else {
        Cow::Borrowed(line)
    }
}

/// Normalize a captured numeric token: strip comma thousands separators
/// and a trailing decimal point (a common OCR artifact), then validate
/// the remainder as a decimal number.
///
/// A capture that does not survive validation (e.g. two interior
/// decimal points) fails closed: the matcher reports "no match" and the
/// field stays unset for a later line to fill.
pub fn parse_amount(capture: &str) -> Option<String> {
    let stripped = capture.replace(',', "");
    let stripped = stripped.strip_suffix('.').unwrap_or(&stripped);
    Decimal::from_str(stripped).ok()?;
    Some(stripped.to_string())
}
