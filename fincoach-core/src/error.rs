//! Processing error taxonomy with user-facing recovery suggestions.
//!
//! Everything that can go wrong inside `process_document` folds into
//! [`ProcessError`]; callers switch on the `Result` variant instead of probing
//! a response for an error key. [`ErrorReport`] is the serializable rendering
//! handed across the UI boundary.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error codes for programmatic handling by the UI layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    FileNotFound,
    UnsupportedFormat,
    EncodingFailure,
    EmptyFile,
    ColumnDetectionFailed,
    NoFinancialData,
    NoValidTransactions,
    ProcessingException,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            ErrorKind::FileNotFound => "FILE_NOT_FOUND",
            ErrorKind::UnsupportedFormat => "UNSUPPORTED_FORMAT",
            ErrorKind::EncodingFailure => "ENCODING_FAILURE",
            ErrorKind::EmptyFile => "EMPTY_FILE",
            ErrorKind::ColumnDetectionFailed => "COLUMN_DETECTION_FAILED",
            ErrorKind::NoFinancialData => "NO_FINANCIAL_DATA",
            ErrorKind::NoValidTransactions => "NO_VALID_TRANSACTIONS",
            ErrorKind::ProcessingException => "PROCESSING_EXCEPTION",
        };
        write!(f, "{code}")
    }
}

/// A document-level processing failure.
///
/// Row-level problems are never errors; readers count them into
/// `processing_info` and keep going. Only structural problems (missing file,
/// undetectable columns, zero usable rows) end the call.
#[derive(Error, Debug)]
pub enum ProcessError {
    #[error("file not found: {path}")]
    FileNotFound { path: String },

    #[error("unsupported file format: {extension}")]
    UnsupportedFormat {
        extension: String,
        supported: Vec<String>,
    },

    #[error("could not decode the file with any supported encoding")]
    EncodingFailure,

    #[error("the file contains no data: {detail}")]
    EmptyFile { detail: String },

    #[error("could not identify the required financial columns")]
    ColumnDetectionFailed,

    #[error("no financial data found in any sheet")]
    NoFinancialData,

    #[error("no valid transactions could be extracted")]
    NoValidTransactions,

    #[error("processing failed: {0}")]
    Processing(String),
}

impl From<std::io::Error> for ProcessError {
    fn from(error: std::io::Error) -> Self {
        ProcessError::Processing(error.to_string())
    }
}

impl ProcessError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ProcessError::FileNotFound { .. } => ErrorKind::FileNotFound,
            ProcessError::UnsupportedFormat { .. } => ErrorKind::UnsupportedFormat,
            ProcessError::EncodingFailure => ErrorKind::EncodingFailure,
            ProcessError::EmptyFile { .. } => ErrorKind::EmptyFile,
            ProcessError::ColumnDetectionFailed => ErrorKind::ColumnDetectionFailed,
            ProcessError::NoFinancialData => ErrorKind::NoFinancialData,
            ProcessError::NoValidTransactions => ErrorKind::NoValidTransactions,
            ProcessError::Processing(_) => ErrorKind::ProcessingException,
        }
    }

    /// Actionable recovery steps, written for direct display to the user.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            ProcessError::FileNotFound { .. } => vec![
                "Check that the file path is correct".to_string(),
                "Ensure the file has not been moved or deleted".to_string(),
            ],
            ProcessError::UnsupportedFormat { supported, .. } => vec![
                format!("Supported formats: {}", supported.join(", ")),
                "Convert your file to CSV for best results".to_string(),
            ],
            ProcessError::EncodingFailure => vec![
                "Ensure the file is a valid CSV".to_string(),
                "Try saving the file with UTF-8 encoding".to_string(),
                "Check for special characters in the file".to_string(),
            ],
            ProcessError::EmptyFile { .. } => vec![
                "Check that the file has transaction data".to_string(),
                "Ensure the file is not just headers".to_string(),
            ],
            ProcessError::ColumnDetectionFailed => vec![
                "Required columns: Date, Amount, Description/Category".to_string(),
                "Column names should be in the first row".to_string(),
                "Example format: Date,Amount,Category,Description".to_string(),
            ],
            ProcessError::NoFinancialData => vec![
                "Ensure at least one sheet has columns: Date, Amount, Description".to_string(),
                "Check that data starts in the first few rows".to_string(),
                "Try converting to CSV for better compatibility".to_string(),
            ],
            ProcessError::NoValidTransactions => vec![
                "Check that the amount column contains numeric values".to_string(),
                "Ensure the date column has valid dates".to_string(),
                "Verify the file format matches the expected structure".to_string(),
            ],
            ProcessError::Processing(_) => vec![
                "Check that the file is not corrupted".to_string(),
                "Ensure the file is not currently open in another application".to_string(),
                "Try saving the file in a different format".to_string(),
            ],
        }
    }

    /// Build the serializable report for the UI boundary, attaching the
    /// caller's live capability flags.
    pub fn to_report(&self, capability_flags: BTreeMap<String, bool>) -> ErrorReport {
        ErrorReport {
            error: self.kind(),
            message: self.to_string(),
            suggestions: self.suggestions(),
            capability_flags,
        }
    }
}

/// Serializable error payload: what failed, why, and what the user can do.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorReport {
    pub error: ErrorKind,
    pub message: String,
    pub suggestions: Vec<String>,
    pub capability_flags: BTreeMap<String, bool>,
}
