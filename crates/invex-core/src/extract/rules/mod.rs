//! Rule-based field matchers.
//!
//! Each matcher is a pure function over a single normalized line: it
//! either produces the extracted value or `None`. Matchers never look at
//! neighboring lines and never fail; malformed numeric captures are
//! treated as "no match" so a later line can still fill the field.

pub mod amounts;
pub mod dates;
pub mod items;
pub mod number;
pub mod parties;
pub mod patterns;

pub use amounts::{match_subtotal, match_tax, match_total, parse_amount};
pub use dates::match_date;
pub use items::match_line_item;
pub use number::match_invoice_number;
pub use parties::{match_address, match_customer_name, match_vendor_name};
