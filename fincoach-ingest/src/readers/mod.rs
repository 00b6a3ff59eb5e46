//! Per-format readers. Each one either produces a [`FinancialSummary`] or a
//! structured [`ProcessError`]; nothing here panics on malformed input.
//!
//! [`FinancialSummary`]: fincoach_core::FinancialSummary
//! [`ProcessError`]: fincoach_core::ProcessError

pub(crate) mod tabular;
pub(crate) mod text;
