//! Line item matching.

use rust_decimal::Decimal;
use std::str::FromStr;

use super::amounts::{parse_amount, strip_currency};
use super::patterns::LINE_ITEM;
use crate::models::invoice::LineItem;

/// Match a line of the shape `<description> <qty> x <price>`.
///
/// Accepts `x`, `X` or `@` between quantity and price; configured
/// currency symbols are stripped before matching. Quantity and price
/// parse failures fail closed: the whole line is treated as a non-item.
pub fn match_line_item(line: &str, symbols: &str) -> Option<LineItem> {
    let line = strip_currency(line, symbols);
    let caps = LINE_ITEM.captures(&line)?;

    let description = caps[1].trim().to_string();
    let quantity: u32 = caps[2].parse().ok()?;
    let unit_price = parse_amount(&caps[3]).and_then(|p| Decimal::from_str(&p).ok())?;

    Some(LineItem {
        description,
        quantity,
        unit_price,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn item(description: &str, quantity: u32, unit_price: &str) -> LineItem {
        LineItem {
            description: description.to_string(),
            quantity,
            unit_price: Decimal::from_str(unit_price).unwrap(),
        }
    }

    #[test]
    fn test_basic_item() {
        assert_eq!(
            match_line_item("Widget A 3 x $10.00", "$"),
            Some(item("Widget A", 3, "10.00"))
        );
    }

    #[test]
    fn test_at_separator_and_no_currency() {
        assert_eq!(
            match_line_item("Mounting kit 2 @ 4.50", "$"),
            Some(item("Mounting kit", 2, "4.50"))
        );
    }

    #[test]
    fn test_uppercase_separator() {
        assert_eq!(
            match_line_item("Cable tie pack 10 X $1.99", "$"),
            Some(item("Cable tie pack", 10, "1.99"))
        );
    }

    #[test]
    fn test_configured_currency_symbol() {
        assert_eq!(
            match_line_item("Widget A 3 x €10.00", "€"),
            Some(item("Widget A", 3, "10.00"))
        );
        // A symbol outside the configured set blocks the match.
        assert_eq!(match_line_item("Widget A 3 x €10.00", "$"), None);
    }

    #[test]
    fn test_thousands_separator_in_price() {
        assert_eq!(
            match_line_item("Server chassis 1 x $1,299.00", "$"),
            Some(item("Server chassis", 1, "1299.00"))
        );
    }

    #[test]
    fn test_malformed_price_fails_closed() {
        assert_eq!(match_line_item("Widget A 3 x $10.00.00", "$"), None);
    }

    #[test]
    fn test_non_item_lines() {
        assert_eq!(match_line_item("Total Amount: $1,234.56", "$"), None);
        assert_eq!(match_line_item("Widget A", "$"), None);
        assert_eq!(match_line_item("3 x $10.00 Widget A", "$"), None);
    }
}
