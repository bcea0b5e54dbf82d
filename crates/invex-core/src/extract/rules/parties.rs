//! Vendor, customer, and address matching.

use super::patterns::{ADDRESS, CUSTOMER_NAME, VENDOR_NAME};

/// Match a vendor name line ("Vendor:", "Supplier:", "Seller:").
pub fn match_vendor_name(line: &str) -> Option<String> {
    VENDOR_NAME
        .captures(line)
        .map(|caps| caps[1].trim().to_string())
        .filter(|name| !name.is_empty())
}

/// Match a customer name line ("Customer:", "Client:", "Buyer:").
pub fn match_customer_name(line: &str) -> Option<String> {
    CUSTOMER_NAME
        .captures(line)
        .map(|caps| caps[1].trim().to_string())
        .filter(|name| !name.is_empty())
}

/// Match a line containing an "Address:" marker.
///
/// Attribution to vendor vs. customer is positional: the orchestrator
/// assigns the first address seen to the vendor and the second to the
/// customer. There is no label tying an address to a party.
pub fn match_address(line: &str) -> Option<String> {
    ADDRESS
        .captures(line)
        .map(|caps| caps[1].trim().to_string())
        .filter(|addr| !addr.is_empty())
}
