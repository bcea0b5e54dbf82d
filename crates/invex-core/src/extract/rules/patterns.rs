//! Common regex patterns for invoice field matching.
//!
//! All patterns are evaluated against a single normalized line. Labels
//! are case-insensitive; numeric captures accept comma thousands
//! separators and a decimal point (validated downstream).

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Invoice/bill/receipt identifier, e.g. "Invoice No: INV-2024-001"
    pub static ref INVOICE_NUMBER: Regex = Regex::new(
        r"(?i)(?:Invoice|Bill|Receipt)\s*(?:No\.?|#|ID)?:?\s*([A-Za-z0-9][A-Za-z0-9-]*)"
    ).unwrap();

    // Date-shaped substrings: DD/MM/YYYY, D-M-YY, YYYY-MM-DD, ...
    pub static ref DATE: Regex = Regex::new(
        r"\b(\d{1,2}[-/]\d{1,2}[-/]\d{2,4}|\d{4}[-/]\d{1,2}[-/]\d{1,2})\b"
    ).unwrap();

    // Labeled amounts with optional colon. Currency symbols are
    // stripped before these run (configurable, see rules/amounts.rs).
    pub static ref TOTAL_AMOUNT: Regex = Regex::new(
        r"(?i)Total\s*(?:Amount)?\s*:?\s*([0-9,.]+)"
    ).unwrap();

    pub static ref SUBTOTAL: Regex = Regex::new(
        r"(?i)Sub\s*Total\s*:?\s*([0-9,.]+)"
    ).unwrap();

    pub static ref TAX: Regex = Regex::new(
        r"(?i)Tax\s*(?:Amount)?\s*:?\s*([0-9,.]+)"
    ).unwrap();

    // Party labels, anchored at line start
    pub static ref VENDOR_NAME: Regex = Regex::new(
        r"(?i)^(?:Vendor|Supplier|Seller):?\s*(.*)"
    ).unwrap();

    pub static ref CUSTOMER_NAME: Regex = Regex::new(
        r"(?i)^(?:Customer|Client|Buyer):?\s*(.*)"
    ).unwrap();

    // Address marker anywhere in the line
    pub static ref ADDRESS: Regex = Regex::new(
        r"(?i)Address:\s*(.+)"
    ).unwrap();

    // Line item: "<description> <qty> x <price>" anchored at both ends,
    // evaluated after currency symbol stripping
    pub static ref LINE_ITEM: Regex = Regex::new(
        r"(?i)^(.+?)\s+(\d+)\s+[x@]\s*([0-9,.]+)$"
    ).unwrap();
}
