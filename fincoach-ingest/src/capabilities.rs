//! Injected format-reader services and the capability configuration handed
//! to the document processor at startup.
//!
//! The processor never probes the environment at run time: whatever services
//! this value carries when it is built is what the instance can read, and an
//! absent service only shrinks the supported-extension list.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Result;

/// One table of a workbook: a header row plus string-valued data rows.
#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    pub name: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Spreadsheet access: every sheet of a workbook, in workbook order.
pub trait TableSource: Send + Sync {
    fn read_sheets(&self, path: &Path) -> Result<Vec<Sheet>>;
}

/// Raw-text access for formats without cell structure (PDF, Word).
pub trait TextSource: Send + Sync {
    fn extract_text(&self, path: &Path) -> Result<String>;
}

/// Which optional readers this processor instance carries.
///
/// CSV/TSV and plain-text reading are always built in.
#[derive(Default)]
pub struct ReaderCapabilities {
    pub(crate) spreadsheet: Option<Box<dyn TableSource>>,
    pub(crate) pdf: Option<Box<dyn TextSource>>,
    pub(crate) document: Option<Box<dyn TextSource>>,
}

impl ReaderCapabilities {
    /// Built-in readers only (CSV/TSV and plain text).
    pub fn minimal() -> Self {
        Self::default()
    }

    /// Built-in readers plus every service this build carries.
    pub fn standard() -> Self {
        let caps = Self::minimal();
        #[cfg(feature = "pdf")]
        let caps = caps.with_pdf(PdfTextSource);
        caps
    }

    pub fn with_spreadsheet(mut self, source: impl TableSource + 'static) -> Self {
        self.spreadsheet = Some(Box::new(source));
        self
    }

    pub fn with_pdf(mut self, source: impl TextSource + 'static) -> Self {
        self.pdf = Some(Box::new(source));
        self
    }

    pub fn with_document(mut self, source: impl TextSource + 'static) -> Self {
        self.document = Some(Box::new(source));
        self
    }

    /// Extensions the processor will accept, given the live services.
    pub fn supported_extensions(&self) -> Vec<&'static str> {
        let mut extensions = vec![".csv", ".tsv", ".txt"];
        if self.spreadsheet.is_some() {
            extensions.extend([".xlsx", ".xls"]);
        }
        if self.pdf.is_some() {
            extensions.push(".pdf");
        }
        if self.document.is_some() {
            extensions.push(".docx");
        }
        extensions
    }

    /// Per-format availability, attached to every error report.
    pub fn flags(&self) -> BTreeMap<String, bool> {
        BTreeMap::from([
            ("tabular".to_string(), true),
            ("spreadsheet".to_string(), self.spreadsheet.is_some()),
            ("pdf".to_string(), self.pdf.is_some()),
            ("document".to_string(), self.document.is_some()),
            ("text".to_string(), true),
        ])
    }
}

/// PDF text service backed by `pdf-extract`.
#[cfg(feature = "pdf")]
pub struct PdfTextSource;

#[cfg(feature = "pdf")]
impl TextSource for PdfTextSource {
    fn extract_text(&self, path: &Path) -> Result<String> {
        Ok(pdf_extract::extract_text(path)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_extensions() {
        let caps = ReaderCapabilities::minimal();
        let extensions = caps.supported_extensions();
        assert!(extensions.contains(&".csv"));
        assert!(extensions.contains(&".txt"));
        assert!(!extensions.contains(&".xlsx"));
        assert!(!extensions.contains(&".docx"));
    }

    #[test]
    fn test_flags_track_services() {
        let caps = ReaderCapabilities::minimal();
        let flags = caps.flags();
        assert_eq!(flags["tabular"], true);
        assert_eq!(flags["text"], true);
        assert_eq!(flags["spreadsheet"], false);
        assert_eq!(flags["document"], false);
    }

    #[cfg(feature = "pdf")]
    #[test]
    fn test_standard_carries_pdf() {
        let caps = ReaderCapabilities::standard();
        assert!(caps.supported_extensions().contains(&".pdf"));
        assert_eq!(caps.flags()["pdf"], true);
    }
}
