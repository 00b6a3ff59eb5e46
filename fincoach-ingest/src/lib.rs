//! fincoach-ingest: document ingestion for the coaching app core.
//!
//! Takes a filesystem path from the upload layer and produces either a
//! [`FinancialSummary`] or a structured [`ProcessError`], routing by
//! extension: delimited files and injected spreadsheet workbooks go through
//! column detection and row extraction; PDF/Word/plain text go through
//! pattern scanning. Optional format parsers are injected as
//! [`ReaderCapabilities`] services at startup.
//!
//! [`FinancialSummary`]: fincoach_core::FinancialSummary
//! [`ProcessError`]: fincoach_core::ProcessError

pub mod capabilities;
pub mod columns;
pub mod encoding;
pub mod processor;
pub(crate) mod readers;

#[cfg(feature = "pdf")]
pub use capabilities::PdfTextSource;
pub use capabilities::{ReaderCapabilities, Sheet, TableSource, TextSource};
pub use columns::{detect_columns, ColumnMapping};
pub use processor::DocumentProcessor;

/// One-shot convenience over [`DocumentProcessor::standard`] for callers that
/// do not inject their own capability services.
pub fn process_document(
    path: impl AsRef<std::path::Path>,
) -> Result<fincoach_core::FinancialSummary, fincoach_core::ProcessError> {
    DocumentProcessor::standard().process_document(path)
}
