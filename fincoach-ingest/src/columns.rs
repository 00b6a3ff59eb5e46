//! Header-based column detection for sheets with unknown layouts.

use fincoach_core::clean::{clean_amount, is_missing};

/// Known header aliases per semantic role. A header and an alias match when
/// either contains the other, so "Transaction Date", "posting_date", and
/// plain "dt" all resolve.
const DATE_ALIASES: &[&str] = &[
    "date",
    "transaction_date",
    "posting_date",
    "trans_date",
    "dt",
    "timestamp",
];
const AMOUNT_ALIASES: &[&str] = &[
    "amount",
    "transaction_amount",
    "debit",
    "credit",
    "value",
    "sum",
    "total",
    "amt",
];
const DESCRIPTION_ALIASES: &[&str] = &[
    "description",
    "memo",
    "details",
    "transaction_details",
    "desc",
    "note",
];
const CATEGORY_ALIASES: &[&str] = &[
    "category",
    "type",
    "transaction_type",
    "class",
    "classification",
    "cat",
];

/// How many leading non-missing amount values to sample when validating.
const AMOUNT_SAMPLE_SIZE: usize = 10;

/// Resolved column roles for one sheet. Derived once, read-only afterward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMapping {
    pub date: usize,
    pub amount: usize,
    pub description: Option<usize>,
    pub category: Option<usize>,
}

/// Score one role's aliases against every header; highest overlap wins, the
/// first column to reach the top score is kept.
fn best_match(headers: &[String], aliases: &[&str]) -> Option<usize> {
    let mut best = None;
    let mut best_score = 0;

    for (index, header) in headers.iter().enumerate() {
        for alias in aliases {
            let score = if header.contains(alias) {
                alias.len()
            } else if alias.contains(header.as_str()) {
                header.len()
            } else {
                continue;
            };
            if score > best_score {
                best_score = score;
                best = Some(index);
            }
        }
    }

    best
}

/// Locate the date/amount/description/category columns of a sheet.
///
/// `None` when either required role (date, amount) cannot be mapped, or when
/// the sampled amount values hold no numeric data at all. A sheet with
/// headers but no rows passes validation so the extraction stage can report
/// the zero-transaction outcome instead.
pub fn detect_columns(headers: &[String], rows: &[Vec<String>]) -> Option<ColumnMapping> {
    let normalized: Vec<String> = headers
        .iter()
        .map(|header| header.trim().to_lowercase())
        .collect();

    let date = best_match(&normalized, DATE_ALIASES);
    let amount = best_match(&normalized, AMOUNT_ALIASES);
    let (Some(date), Some(amount)) = (date, amount) else {
        log::debug!(
            "required columns not found (date: {:?}, amount: {:?}) in headers {:?}",
            date,
            amount,
            headers
        );
        return None;
    };

    let mapping = ColumnMapping {
        date,
        amount,
        description: best_match(&normalized, DESCRIPTION_ALIASES),
        category: best_match(&normalized, CATEGORY_ALIASES),
    };

    let samples: Vec<&str> = rows
        .iter()
        .filter_map(|row| row.get(amount).map(String::as_str))
        .filter(|value| !is_missing(value))
        .take(AMOUNT_SAMPLE_SIZE)
        .collect();
    if !samples.is_empty() && !samples.iter().any(|value| clean_amount(value).is_some()) {
        log::debug!("amount column {amount} holds no numeric data");
        return None;
    }

    log::debug!("column mapping detected: {mapping:?}");
    Some(mapping)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    fn rows(data: &[&[&str]]) -> Vec<Vec<String>> {
        data.iter()
            .map(|row| row.iter().map(|c| c.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_detects_standard_bank_export() {
        let headers = headers(&["Transaction Date", "Amount", "Memo"]);
        let rows = rows(&[
            &["2024-01-01", "100", "Paycheck"],
            &["2024-01-02", "-50", "Grocery Mart"],
        ]);

        let mapping = detect_columns(&headers, &rows).unwrap();
        assert_eq!(mapping.date, 0);
        assert_eq!(mapping.amount, 1);
        assert_eq!(mapping.description, Some(2));
        assert_eq!(mapping.category, None);
    }

    #[test]
    fn test_detection_is_idempotent() {
        let headers = headers(&["Posting Date", "Debit", "Details", "Type"]);
        let rows = rows(&[&["01/02/2024", "12.50", "Coffee", ""]]);

        let first = detect_columns(&headers, &rows).unwrap();
        let second = detect_columns(&headers, &rows).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_alias_variants_resolve() {
        let headers = headers(&["dt", "amt", "desc", "cat"]);
        let rows = rows(&[&["2024-03-01", "9.99", "Lunch", "Food"]]);

        let mapping = detect_columns(&headers, &rows).unwrap();
        assert_eq!(mapping.date, 0);
        assert_eq!(mapping.amount, 1);
        assert_eq!(mapping.description, Some(2));
        assert_eq!(mapping.category, Some(3));
    }

    #[test]
    fn test_missing_required_role_fails() {
        let no_financial = headers(&["Name", "Memo"]);
        assert!(detect_columns(&no_financial, &rows(&[&["a", "b"]])).is_none());

        // Amount present but no date column
        let no_date = headers(&["Amount", "Memo"]);
        assert!(detect_columns(&no_date, &rows(&[&["10", "b"]])).is_none());
    }

    #[test]
    fn test_non_numeric_amount_column_fails() {
        let headers = headers(&["Date", "Amount", "Description"]);
        let rows = rows(&[
            &["2024-01-01", "ten dollars", "Coffee"],
            &["2024-01-02", "lots", "Lunch"],
        ]);
        assert!(detect_columns(&headers, &rows).is_none());
    }

    #[test]
    fn test_currency_formatted_amounts_validate() {
        let headers = headers(&["Date", "Amount", "Description"]);
        let rows = rows(&[&["2024-01-01", "$1,234.56", "Deposit"]]);
        assert!(detect_columns(&headers, &rows).is_some());
    }

    #[test]
    fn test_header_only_sheet_still_maps() {
        // No rows to sample: the mapping stands and extraction reports the
        // zero-transaction outcome downstream.
        let headers = headers(&["Date", "Amount"]);
        assert!(detect_columns(&headers, &[]).is_some());
    }

    #[test]
    fn test_longer_alias_outranks_shorter() {
        // "transaction_amount" scores higher than the bare "amount" match on
        // a generic "total" column.
        let headers = headers(&["Date", "Total", "transaction_amount"]);
        let rows = rows(&[&["2024-01-01", "1", "2.50"]]);
        let mapping = detect_columns(&headers, &rows).unwrap();
        assert_eq!(mapping.amount, 2);
    }
}
