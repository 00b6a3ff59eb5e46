//! Pattern-mode readers for formats without cell structure.
//!
//! PDF and Word text, and bare text files, are scanned for currency amounts
//! and date-like substrings. The result is an approximate summary: totals
//! only, no per-transaction structure, with the limitation spelled out in
//! `processing_info.issues`.

use std::collections::BTreeMap;
use std::path::Path;

use fincoach_core::{FinancialSummary, ProcessError, ProcessingInfo};
use regex::Regex;

use crate::capabilities::TextSource;
use crate::encoding::decode_text;

/// `$` amounts with an optional leading minus: `$1,234.56`, `- $14.05`.
const AMOUNT_PATTERN: &str = r"(?P<neg>-)?\s*\$(?P<amt>\d[\d,]*\.?\d*)";

const DATE_PATTERNS: &[&str] = &[
    r"\d{1,2}/\d{1,2}/\d{4}",
    r"\d{1,2}-\d{1,2}-\d{4}",
    r"\d{4}-\d{1,2}-\d{1,2}",
];

struct TextScan {
    amounts: Vec<f64>,
    date_count: usize,
}

fn scan_text(text: &str) -> Result<TextScan, ProcessError> {
    let amount_re =
        Regex::new(AMOUNT_PATTERN).map_err(|error| ProcessError::Processing(error.to_string()))?;

    let mut amounts = Vec::new();
    for caps in amount_re.captures_iter(text) {
        let raw = caps["amt"].replace(',', "");
        if let Ok(value) = raw.parse::<f64>() {
            amounts.push(if caps.name("neg").is_some() { -value } else { value });
        }
    }

    let mut date_count = 0;
    for pattern in DATE_PATTERNS {
        let date_re =
            Regex::new(pattern).map_err(|error| ProcessError::Processing(error.to_string()))?;
        date_count += date_re.find_iter(text).count();
    }

    Ok(TextScan {
        amounts,
        date_count,
    })
}

/// Aggregate scanned amounts into an approximate summary under a single
/// roll-up category label.
fn summarize_text(
    text: &str,
    label: &str,
    notes: &[&str],
) -> Result<FinancialSummary, ProcessError> {
    let scan = scan_text(text)?;

    let total_income: f64 = scan.amounts.iter().filter(|a| **a > 0.0).sum();
    let total_expenses: f64 = scan
        .amounts
        .iter()
        .filter(|a| **a < 0.0)
        .map(|a| a.abs())
        .sum();

    let mut categories = BTreeMap::new();
    categories.insert(label.to_string(), total_expenses);

    let mut issues: Vec<String> = notes.iter().map(|note| note.to_string()).collect();
    issues.push(format!(
        "Pattern scan found {} amounts and {} date-like values; totals are approximate",
        scan.amounts.len(),
        scan.date_count
    ));

    log::info!(
        "pattern scan: {} amounts, {} dates, income {:.2}, expenses {:.2}",
        scan.amounts.len(),
        scan.date_count,
        total_income,
        total_expenses
    );

    Ok(FinancialSummary {
        transactions: Vec::new(),
        total_income,
        total_expenses,
        categories,
        processing_info: ProcessingInfo {
            rows_processed: scan.amounts.len(),
            successful_transactions: 0,
            skipped_rows: 0,
            issues,
        },
    })
}

/// Plain-text reader: decode with the encoding ladder, then pattern-scan.
pub(crate) fn read_plain_text(path: &Path) -> Result<FinancialSummary, ProcessError> {
    let bytes = std::fs::read(path)?;
    let Some((content, encoding)) = decode_text(&bytes) else {
        return Err(ProcessError::EncodingFailure);
    };
    log::info!("decoded {} as {encoding}", path.display());

    if content.trim().is_empty() {
        return Err(ProcessError::EmptyFile {
            detail: "the text file is empty".to_string(),
        });
    }

    summarize_text(
        &content,
        "Text Analysis",
        &["Text processing is pattern-based; use CSV with headers for full analysis"],
    )
}

/// Reader for formats whose text comes from an injected service (PDF, Word).
pub(crate) fn read_extracted_text(
    source: &dyn TextSource,
    path: &Path,
    label: &str,
    empty_detail: &str,
    notes: &[&str],
) -> Result<FinancialSummary, ProcessError> {
    let text = source
        .extract_text(path)
        .map_err(|error| ProcessError::Processing(error.to_string()))?;

    if text.trim().is_empty() {
        return Err(ProcessError::EmptyFile {
            detail: empty_detail.to_string(),
        });
    }

    summarize_text(&text, label, notes)
}
