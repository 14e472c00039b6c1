use chrono::NaiveDate;

/// Identifier-format check carried over from the original product UI.
///
/// An identifier passes when it splits on `-` into at least four segments,
/// the trailing three form a parseable `YYYY-MM-DD` date, and everything
/// before them is blank. Stored identifiers such as `Paris-2025-06-23` have a
/// non-blank prefix and deliberately fail the check, which is why no lookup
/// path gates on it. Kept as library surface only.
pub fn is_well_formed(id: &str) -> bool {
    let parts: Vec<&str> = id.split('-').collect();
    if parts.len() < 4 {
        return false;
    }

    let (prefix, date_parts) = parts.split_at(parts.len() - 3);
    let date = date_parts.join("-");

    NaiveDate::parse_from_str(&date, "%Y-%m-%d").is_ok() && prefix.join("-").trim().is_empty()
}
