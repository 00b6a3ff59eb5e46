//! fincoach-core: exchange types and pure analysis leaves for the
//! document-to-financial-summary pipeline.
//!
//! Everything here is synchronous and allocation-light: cell normalization,
//! the keyword classifier, the summary aggregator, the error taxonomy, and
//! the demonstration data set. Document ingestion lives in `fincoach-ingest`;
//! the web UI and report agents consume the serializable shapes exported
//! from this crate.

pub mod categorize;
pub mod clean;
pub mod error;
pub mod sample;
pub mod summary;
pub mod transaction;

pub use categorize::{categorize, is_known_category, CATEGORY_RULES};
pub use clean::{clean_amount, clean_date, is_missing};
pub use error::{ErrorKind, ErrorReport, ProcessError};
pub use sample::create_sample_data;
pub use summary::{FinancialSummary, ProcessingInfo, SummaryBuilder};
pub use transaction::Transaction;
