//! Document entry point: existence check, extension dispatch, error folding.

use std::path::Path;

use fincoach_core::{ErrorReport, FinancialSummary, ProcessError};

use crate::capabilities::ReaderCapabilities;
use crate::readers::{tabular, text};

/// Routes a document through the reader matching its extension.
///
/// One instance per application. Every call is synchronous, builds its own
/// state from scratch, and releases the file before returning; the only
/// thing an instance holds is the immutable capability configuration.
pub struct DocumentProcessor {
    capabilities: ReaderCapabilities,
}

impl DocumentProcessor {
    pub fn new(capabilities: ReaderCapabilities) -> Self {
        Self { capabilities }
    }

    /// Processor with every reader this build carries.
    pub fn standard() -> Self {
        Self::new(ReaderCapabilities::standard())
    }

    pub fn capabilities(&self) -> &ReaderCapabilities {
        &self.capabilities
    }

    /// Process one financial document into a summary.
    ///
    /// Never panics and never surfaces a raw io/parser error: every failure
    /// folds into a [`ProcessError`] carrying user-facing suggestions, and
    /// cell-level problems are recovered inside the readers.
    pub fn process_document(&self, path: impl AsRef<Path>) -> Result<FinancialSummary, ProcessError> {
        let path = path.as_ref();
        log::info!("processing document {}", path.display());

        if !path.exists() {
            return Err(ProcessError::FileNotFound {
                path: path.display().to_string(),
            });
        }

        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();

        match extension.as_str() {
            "csv" => tabular::read_delimited(path, b','),
            "tsv" => tabular::read_delimited(path, b'\t'),
            "xlsx" | "xls" => match &self.capabilities.spreadsheet {
                Some(source) => tabular::read_workbook(source.as_ref(), path),
                None => Err(self.unsupported(&extension)),
            },
            "pdf" => match &self.capabilities.pdf {
                Some(source) => text::read_extracted_text(
                    source.as_ref(),
                    path,
                    "PDF Transactions",
                    "no extractable text; the PDF may be a scanned, image-only document",
                    &[
                        "PDF processing is pattern-based; export transactions to CSV for full analysis",
                        "Manual review recommended for accuracy",
                    ],
                ),
                None => Err(self.unsupported(&extension)),
            },
            "docx" => match &self.capabilities.document {
                Some(source) => text::read_extracted_text(
                    source.as_ref(),
                    path,
                    "Document Analysis",
                    "the document contains no readable text",
                    &[
                        "Word document processing is pattern-based; use structured CSV for full analysis",
                        "Manual review recommended",
                    ],
                ),
                None => Err(self.unsupported(&extension)),
            },
            "txt" => text::read_plain_text(path),
            _ => Err(self.unsupported(&extension)),
        }
    }

    /// Serializable rendering of a failure for the UI boundary, carrying this
    /// instance's capability flags.
    pub fn error_report(&self, error: &ProcessError) -> ErrorReport {
        error.to_report(self.capabilities.flags())
    }

    fn unsupported(&self, extension: &str) -> ProcessError {
        let extension = if extension.is_empty() {
            "(no extension)".to_string()
        } else {
            format!(".{extension}")
        };
        ProcessError::UnsupportedFormat {
            extension,
            supported: self
                .capabilities
                .supported_extensions()
                .iter()
                .map(|e| e.to_string())
                .collect(),
        }
    }
}
