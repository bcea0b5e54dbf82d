//! The structured invoice record returned to callers.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A populated, possibly partial invoice record.
///
/// Every scalar field defaults to the empty string, which means "not
/// found". Each scalar is written at most once per extraction: the first
/// matching line in scan order wins. `items` accumulate in the order
/// their lines appear in the source text, without deduplication.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InvoiceRecord {
    /// Invoice/bill/receipt identifier.
    pub invoice_number: String,

    /// Raw matched date substring (not parsed into a calendar type).
    pub date: String,

    /// Vendor (seller/supplier) name.
    pub vendor_name: String,

    /// Vendor address line.
    pub vendor_address: String,

    /// Customer (buyer/client) name.
    pub customer_name: String,

    /// Customer address line.
    pub customer_address: String,

    /// Line items in the order they were found.
    pub items: Vec<LineItem>,

    /// Subtotal as a decimal string, thousands separators stripped.
    pub subtotal: String,

    /// Tax amount as a decimal string, thousands separators stripped.
    pub tax: String,

    /// Total amount as a decimal string, thousands separators stripped.
    pub total_amount: String,
}

/// A single purchased product/service entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Product/service description.
    pub description: String,

    /// Quantity purchased.
    pub quantity: u32,

    /// Price per unit.
    pub unit_price: Decimal,
}

impl InvoiceRecord {
    /// Create a new empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Names of scalar fields that are still unset.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();

        if self.invoice_number.is_empty() {
            missing.push("invoice_number");
        }
        if self.date.is_empty() {
            missing.push("date");
        }
        if self.vendor_name.is_empty() {
            missing.push("vendor_name");
        }
        if self.vendor_address.is_empty() {
            missing.push("vendor_address");
        }
        if self.customer_name.is_empty() {
            missing.push("customer_name");
        }
        if self.customer_address.is_empty() {
            missing.push("customer_address");
        }
        if self.subtotal.is_empty() {
            missing.push("subtotal");
        }
        if self.tax.is_empty() {
            missing.push("tax");
        }
        if self.total_amount.is_empty() {
            missing.push("total_amount");
        }

        missing
    }

    /// True if nothing at all was extracted.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty() && self.missing_fields().len() == 9
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    #[test]
    fn test_empty_record() {
        let record = InvoiceRecord::new();
        assert!(record.is_empty());
        assert_eq!(record.missing_fields().len(), 9);
    }

    #[test]
    fn test_missing_fields_shrink_as_fields_fill() {
        let mut record = InvoiceRecord::new();
        record.invoice_number = "INV-001".to_string();
        record.total_amount = "1234.56".to_string();

        let missing = record.missing_fields();
        assert!(!missing.contains(&"invoice_number"));
        assert!(!missing.contains(&"total_amount"));
        assert!(missing.contains(&"date"));
        assert!(!record.is_empty());
    }

    #[test]
    fn test_serialization_round_trip() {
        let mut record = InvoiceRecord::new();
        record.invoice_number = "INV-2024-001".to_string();
        record.items.push(LineItem {
            description: "Widget A".to_string(),
            quantity: 3,
            unit_price: Decimal::from_str("10.00").unwrap(),
        });

        let json = serde_json::to_string(&record).unwrap();
        let parsed: InvoiceRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, record);
    }
}
