//! Tabular readers: delimited files and injected spreadsheet workbooks.

use std::path::Path;

use fincoach_core::{
    categorize, clean_amount, clean_date, is_missing, FinancialSummary, ProcessError,
    SummaryBuilder, Transaction,
};

use crate::capabilities::{Sheet, TableSource};
use crate::columns::{detect_columns, ColumnMapping};
use crate::encoding::ENCODING_LADDER;

/// Read a delimited file (CSV/TSV), walking the encoding ladder until one
/// decodes and parses.
pub(crate) fn read_delimited(path: &Path, delimiter: u8) -> Result<FinancialSummary, ProcessError> {
    let bytes = std::fs::read(path)?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let mut last_parse_error = None;
    for encoding in ENCODING_LADDER {
        let Some(text) = encoding.decode(&bytes) else {
            continue;
        };
        match parse_sheet(&name, &text, delimiter) {
            Ok(sheet) => {
                log::info!(
                    "decoded {} as {} ({} data rows)",
                    path.display(),
                    encoding.label(),
                    sheet.rows.len()
                );
                return process_sheet(sheet);
            }
            Err(error) => {
                log::warn!("{} parse failed as {}: {error}", path.display(), encoding.label());
                last_parse_error = Some(error);
            }
        }
    }

    log::warn!(
        "no supported encoding produced a parseable table for {}: {last_parse_error:?}",
        path.display()
    );
    Err(ProcessError::EncodingFailure)
}

/// Read an injected spreadsheet workbook, taking the first sheet that yields
/// a column mapping.
pub(crate) fn read_workbook(
    source: &dyn TableSource,
    path: &Path,
) -> Result<FinancialSummary, ProcessError> {
    let sheets = source
        .read_sheets(path)
        .map_err(|error| ProcessError::Processing(error.to_string()))?;
    if sheets.is_empty() {
        return Err(ProcessError::EmptyFile {
            detail: "the workbook contains no sheets".to_string(),
        });
    }

    for sheet in &sheets {
        if sheet.headers.is_empty() && sheet.rows.is_empty() {
            log::debug!("sheet {:?} is empty, trying next", sheet.name);
            continue;
        }
        match detect_columns(&sheet.headers, &sheet.rows) {
            Some(mapping) => {
                log::info!("financial data found in sheet {:?}", sheet.name);
                return extract_transactions(sheet, mapping);
            }
            None => {
                log::warn!("sheet {:?}: no usable column mapping, trying next", sheet.name);
            }
        }
    }

    Err(ProcessError::NoFinancialData)
}

/// Parse decoded text into a single in-memory sheet.
fn parse_sheet(name: &str, text: &str, delimiter: u8) -> Result<Sheet, csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    Ok(Sheet {
        name: name.to_string(),
        headers,
        rows,
    })
}

/// Single-sheet pipeline: emptiness check, column detection, extraction.
fn process_sheet(sheet: Sheet) -> Result<FinancialSummary, ProcessError> {
    if sheet.rows.is_empty() && sheet.headers.iter().all(|h| h.trim().is_empty()) {
        return Err(ProcessError::EmptyFile {
            detail: "the file contains no data".to_string(),
        });
    }

    let mapping =
        detect_columns(&sheet.headers, &sheet.rows).ok_or(ProcessError::ColumnDetectionFailed)?;
    extract_transactions(&sheet, mapping)
}

/// Turn mapped rows into transactions, recovering from cell-level problems.
///
/// A non-numeric amount skips the row and records an issue; an unparseable
/// date keeps the row with the raw string; a present category cell is used
/// verbatim, otherwise the classifier decides.
pub(crate) fn extract_transactions(
    sheet: &Sheet,
    mapping: ColumnMapping,
) -> Result<FinancialSummary, ProcessError> {
    let mut builder = SummaryBuilder::new();

    for (index, row) in sheet.rows.iter().enumerate() {
        let amount_raw = cell(row, Some(mapping.amount));
        let Some(amount) = clean_amount(amount_raw) else {
            log::warn!("row {index}: amount {amount_raw:?} is not numeric, skipping");
            builder.skip(format!("Row {index}: amount {amount_raw:?} is not numeric"));
            continue;
        };

        let date = clean_date(cell(row, Some(mapping.date)));
        let description = cell(row, mapping.description).trim().to_string();
        let category_cell = cell(row, mapping.category).trim();
        let category = if is_missing(category_cell) {
            categorize(&description, amount).to_string()
        } else {
            category_cell.to_string()
        };

        builder.push(Transaction::new(date, amount, category, description));
    }

    if builder.successful() == 0 {
        return Err(ProcessError::NoValidTransactions);
    }

    log::info!(
        "extracted {} transactions ({} rows skipped)",
        builder.successful(),
        builder.skipped()
    );
    Ok(builder.finish())
}

fn cell(row: &[String], index: Option<usize>) -> &str {
    index
        .and_then(|i| row.get(i))
        .map(String::as_str)
        .unwrap_or("")
}
