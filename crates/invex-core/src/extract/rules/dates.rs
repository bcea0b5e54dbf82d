//! Date matching.

use super::patterns::DATE;

/// Match a date-shaped substring on a line.
///
/// Accepts day-first (`12/05/2024`, `1-2-24`) and year-first
/// (`2024-05-12`) forms. The raw matched substring is returned; it is
/// never parsed into a calendar type.
pub fn match_date(line: &str) -> Option<String> {
    DATE.captures(line).map(|caps| caps[1].to_string())
}
