//! Aggregated view of a transaction set plus processing-quality counters.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::transaction::Transaction;

/// How the extraction run went: row counts and recoverable data issues.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProcessingInfo {
    pub rows_processed: usize,
    pub successful_transactions: usize,
    pub skipped_rows: usize,
    pub issues: Vec<String>,
}

/// Aggregated, categorized view of one document's transactions.
///
/// Invariants, maintained by [`SummaryBuilder`]:
/// `total_income` is the sum of positive amounts, `total_expenses` the sum of
/// absolute negative amounts, and each category value the sum of absolute
/// amounts carrying that label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialSummary {
    pub transactions: Vec<Transaction>,
    pub total_income: f64,
    pub total_expenses: f64,
    pub categories: BTreeMap<String, f64>,
    pub processing_info: ProcessingInfo,
}

impl FinancialSummary {
    /// Income minus expenses.
    pub fn net_cash_flow(&self) -> f64 {
        self.total_income - self.total_expenses
    }

    /// Percent of income retained; 0 when there is no income.
    pub fn savings_rate(&self) -> f64 {
        if self.total_income > 0.0 {
            self.net_cash_flow() / self.total_income * 100.0
        } else {
            0.0
        }
    }

    /// Category sums restricted to expense transactions.
    pub fn expense_categories(&self) -> BTreeMap<String, f64> {
        self.categories_by(|txn| txn.is_expense())
    }

    /// Category sums restricted to income transactions.
    pub fn income_categories(&self) -> BTreeMap<String, f64> {
        self.categories_by(|txn| txn.is_income())
    }

    fn categories_by(&self, keep: impl Fn(&Transaction) -> bool) -> BTreeMap<String, f64> {
        let mut out: BTreeMap<String, f64> = BTreeMap::new();
        for txn in self.transactions.iter().filter(|txn| keep(txn)) {
            *out.entry(txn.category.clone()).or_insert(0.0) += txn.abs_amount();
        }
        out
    }
}

/// Folds transactions one row at a time, keeping totals, category sums, and
/// the quality counters in step.
#[derive(Debug, Default)]
pub struct SummaryBuilder {
    transactions: Vec<Transaction>,
    total_income: f64,
    total_expenses: f64,
    categories: BTreeMap<String, f64>,
    skipped_rows: usize,
    issues: Vec<String>,
}

impl SummaryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept one transaction and fold it into the running totals.
    pub fn push(&mut self, txn: Transaction) {
        if txn.amount > 0.0 {
            self.total_income += txn.amount;
        } else {
            self.total_expenses += txn.amount.abs();
        }
        *self.categories.entry(txn.category.clone()).or_insert(0.0) += txn.abs_amount();
        self.transactions.push(txn);
    }

    /// Record a row that could not be used; extraction continues.
    pub fn skip(&mut self, issue: impl Into<String>) {
        self.skipped_rows += 1;
        self.issues.push(issue.into());
    }

    /// Attach a note without affecting any counter.
    pub fn note(&mut self, issue: impl Into<String>) {
        self.issues.push(issue.into());
    }

    /// Transactions accepted so far.
    pub fn successful(&self) -> usize {
        self.transactions.len()
    }

    pub fn skipped(&self) -> usize {
        self.skipped_rows
    }

    pub fn finish(self) -> FinancialSummary {
        let successful_transactions = self.transactions.len();
        FinancialSummary {
            transactions: self.transactions,
            total_income: self.total_income,
            total_expenses: self.total_expenses,
            categories: self.categories,
            processing_info: ProcessingInfo {
                rows_processed: successful_transactions + self.skipped_rows,
                successful_transactions,
                skipped_rows: self.skipped_rows,
                issues: self.issues,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build_sample() -> FinancialSummary {
        let mut builder = SummaryBuilder::new();
        builder.push(Transaction::new("2026-01-01", 4200.0, "Income", "Salary"));
        builder.push(Transaction::new("2026-01-02", -1250.0, "Housing", "Rent"));
        builder.push(Transaction::new("2026-01-03", -120.0, "Food", "Groceries"));
        builder.push(Transaction::new("2026-01-09", -80.0, "Food", "Dinner"));
        builder.skip("Row 4: amount \"abc\" is not numeric");
        builder.finish()
    }

    #[test]
    fn test_totals_split_by_sign() {
        let summary = build_sample();
        assert_eq!(summary.total_income, 4200.0);
        assert_eq!(summary.total_expenses, 1450.0);
        assert_eq!(summary.net_cash_flow(), 2750.0);
    }

    #[test]
    fn test_category_sums_are_absolute() {
        let summary = build_sample();
        assert_eq!(summary.categories["Food"], 200.0);
        assert_eq!(summary.categories["Housing"], 1250.0);
        assert_eq!(summary.categories["Income"], 4200.0);
    }

    #[test]
    fn test_invariants_match_transactions() {
        let summary = build_sample();
        let income: f64 = summary
            .transactions
            .iter()
            .filter(|t| t.amount > 0.0)
            .map(|t| t.amount)
            .sum();
        let expenses: f64 = summary
            .transactions
            .iter()
            .filter(|t| t.amount < 0.0)
            .map(|t| t.amount.abs())
            .sum();
        assert_eq!(summary.total_income, income);
        assert_eq!(summary.total_expenses, expenses);
    }

    #[test]
    fn test_processing_counters() {
        let summary = build_sample();
        assert_eq!(summary.processing_info.rows_processed, 5);
        assert_eq!(summary.processing_info.successful_transactions, 4);
        assert_eq!(summary.processing_info.skipped_rows, 1);
        assert_eq!(summary.processing_info.issues.len(), 1);
    }

    #[test]
    fn test_category_split_by_sign() {
        let summary = build_sample();
        let expenses = summary.expense_categories();
        assert!(expenses.contains_key("Housing"));
        assert!(!expenses.contains_key("Income"));
        let income = summary.income_categories();
        assert_eq!(income.len(), 1);
        assert_eq!(income["Income"], 4200.0);
    }

    #[test]
    fn test_savings_rate_zero_income() {
        let mut builder = SummaryBuilder::new();
        builder.push(Transaction::new("2026-01-01", -10.0, "Food", "Coffee"));
        let summary = builder.finish();
        assert_eq!(summary.savings_rate(), 0.0);
    }

    #[test]
    fn test_serialized_field_names() {
        let value = serde_json::to_value(build_sample()).unwrap();
        for key in [
            "transactions",
            "total_income",
            "total_expenses",
            "categories",
            "processing_info",
        ] {
            assert!(value.get(key).is_some(), "missing field {key}");
        }
        let info = value.get("processing_info").unwrap();
        for key in [
            "rows_processed",
            "successful_transactions",
            "skipped_rows",
            "issues",
        ] {
            assert!(info.get(key).is_some(), "missing field {key}");
        }
    }
}
