//! Cell-level normalization: raw spreadsheet values into signed amounts and
//! ISO dates.

use chrono::{NaiveDate, NaiveDateTime};

/// CSV renderings of a null cell.
const MISSING_MARKERS: &[&str] = &["", "nan", "none", "null", "n/a"];

/// Date formats tried in order; ISO first, then US month-first variants.
/// `%y` sits before `%Y` so a two-digit year lands in the right century
/// (chrono's `%Y` would otherwise accept "24" as the year 24).
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%m/%d/%y",
    "%m/%d/%Y",
    "%Y/%m/%d",
    "%m-%d-%Y",
    "%b %d %Y",
    "%b %d, %Y",
    "%d %b %Y",
];

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%m/%d/%Y %H:%M",
];

/// Returns true for the empty string and the usual textual null markers.
pub fn is_missing(raw: &str) -> bool {
    let trimmed = raw.trim();
    MISSING_MARKERS.iter().any(|m| trimmed.eq_ignore_ascii_case(m))
}

/// Parse a raw cell value into a signed amount.
///
/// Strips `$`, commas, and whitespace; a value fully wrapped in parentheses
/// is negative. Returns `None` for missing markers and anything that does not
/// parse as a number afterward. No rounding; the value keeps full precision.
pub fn clean_amount(raw: &str) -> Option<f64> {
    if is_missing(raw) {
        return None;
    }

    let mut cleaned: String = raw
        .chars()
        .filter(|c| *c != '$' && *c != ',' && !c.is_whitespace())
        .collect();

    // Accounting notation: (500) means -500
    if cleaned.starts_with('(') && cleaned.ends_with(')') {
        cleaned = format!("-{}", &cleaned[1..cleaned.len() - 1]);
    }

    cleaned.parse::<f64>().ok()
}

/// Normalize a raw cell value into an ISO date string.
///
/// Date parse failure is non-fatal by contract: unparseable input comes back
/// unchanged so the row survives, and a missing cell maps to `"Unknown"`.
pub fn clean_date(raw: &str) -> String {
    if is_missing(raw) {
        return "Unknown".to_string();
    }

    let trimmed = raw.trim();
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return date.format("%Y-%m-%d").to_string();
        }
    }
    for format in DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(trimmed, format) {
            return datetime.date().format("%Y-%m-%d").to_string();
        }
    }

    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_amount_currency_noise() {
        assert_eq!(clean_amount("$1,234.56"), Some(1234.56));
        assert_eq!(clean_amount("  $45 "), Some(45.0));
        assert_eq!(clean_amount("-120.50"), Some(-120.5));
    }

    #[test]
    fn test_clean_amount_parenthesized_negative() {
        assert_eq!(clean_amount("(500)"), Some(-500.0));
        assert_eq!(clean_amount("($1,250.00)"), Some(-1250.0));
    }

    #[test]
    fn test_clean_amount_rejects_non_numeric() {
        assert_eq!(clean_amount("abc"), None);
        assert_eq!(clean_amount("12.3.4"), None);
        assert_eq!(clean_amount("()"), None);
    }

    #[test]
    fn test_clean_amount_missing_markers() {
        assert_eq!(clean_amount(""), None);
        assert_eq!(clean_amount("   "), None);
        assert_eq!(clean_amount("NaN"), None);
        assert_eq!(clean_amount("null"), None);
        assert_eq!(clean_amount("N/A"), None);
    }

    #[test]
    fn test_clean_date_formats() {
        assert_eq!(clean_date("2024-01-01"), "2024-01-01");
        assert_eq!(clean_date("01/15/2024"), "2024-01-15");
        assert_eq!(clean_date("3/5/24"), "2024-03-05");
        assert_eq!(clean_date("Jan 5 2024"), "2024-01-05");
        assert_eq!(clean_date("2024-01-01 13:45:00"), "2024-01-01");
    }

    #[test]
    fn test_clean_date_never_fails() {
        // Unparseable input round-trips instead of erroring
        assert_eq!(clean_date("not a date"), "not a date");
        assert_eq!(clean_date("13/45/9999"), "13/45/9999");
        assert_eq!(clean_date(""), "Unknown");
        assert_eq!(clean_date("nan"), "Unknown");
    }
}
