//! Shared output formatting for extracted records.

use invex_core::InvoiceRecord;

/// Output format shared by the extract/process commands.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

/// Render a record in the requested format.
pub fn format_record(record: &InvoiceRecord, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(record)?),
        OutputFormat::Csv => format_csv(record),
        OutputFormat::Text => Ok(format_text(record)),
    }
}

/// Scalar CSV columns, shared with the batch summary.
pub const CSV_COLUMNS: [&str; 10] = [
    "invoice_number",
    "date",
    "vendor_name",
    "vendor_address",
    "customer_name",
    "customer_address",
    "items",
    "subtotal",
    "tax",
    "total_amount",
];

/// One CSV row for a record; items are folded into a single cell.
pub fn csv_row(record: &InvoiceRecord) -> [String; 10] {
    [
        record.invoice_number.clone(),
        record.date.clone(),
        record.vendor_name.clone(),
        record.vendor_address.clone(),
        record.customer_name.clone(),
        record.customer_address.clone(),
        items_summary(record),
        record.subtotal.clone(),
        record.tax.clone(),
        record.total_amount.clone(),
    ]
}

/// Compact one-cell rendering of the item list.
pub fn items_summary(record: &InvoiceRecord) -> String {
    record
        .items
        .iter()
        .map(|i| format!("{} ({} x {})", i.description, i.quantity, i.unit_price))
        .collect::<Vec<_>>()
        .join("; ")
}

fn format_csv(record: &InvoiceRecord) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    wtr.write_record(CSV_COLUMNS)?;
    wtr.write_record(csv_row(record))?;

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(record: &InvoiceRecord) -> String {
    let mut output = String::new();

    output.push_str(&format!("Invoice: {}\n", record.invoice_number));
    output.push_str(&format!("Date: {}\n", record.date));
    output.push('\n');

    output.push_str("Vendor:\n");
    output.push_str(&format!("  {}\n", record.vendor_name));
    output.push_str(&format!("  {}\n", record.vendor_address));
    output.push('\n');

    output.push_str("Customer:\n");
    output.push_str(&format!("  {}\n", record.customer_name));
    output.push_str(&format!("  {}\n", record.customer_address));
    output.push('\n');

    if !record.items.is_empty() {
        output.push_str("Items:\n");
        for item in &record.items {
            output.push_str(&format!(
                "  {} ({} x {})\n",
                item.description, item.quantity, item.unit_price
            ));
        }
        output.push('\n');
    }

    output.push_str("Summary:\n");
    output.push_str(&format!("  Subtotal: {}\n", record.subtotal));
    output.push_str(&format!("  Tax:      {}\n", record.tax));
    output.push_str(&format!("  Total:    {}\n", record.total_amount));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use invex_core::{InvoiceExtractor, RuleExtractor};

    #[test]
    fn test_csv_round_trip() {
        let record = RuleExtractor::new()
            .extract_from_text("Invoice No: INV-1\nWidget A 3 x $10.00\nTotal: 30.00");

        let csv = format_record(&record, OutputFormat::Csv).unwrap();
        let mut lines = csv.lines();
        assert_eq!(lines.next().unwrap().split(',').count(), 10);
        assert!(csv.contains("INV-1"));
        assert!(csv.contains("Widget A (3 x 10.00)"));
    }

    #[test]
    fn test_text_format_matches_csv_item_shape() {
        let record = RuleExtractor::new().extract_from_text("Widget A 3 x $10.00");
        let text = format_record(&record, OutputFormat::Text).unwrap();
        assert!(text.contains("Widget A (3 x 10.00)"));
        assert_eq!(items_summary(&record), "Widget A (3 x 10.00)");
    }
}
