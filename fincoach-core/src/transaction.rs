//! Transaction record shared by every reader and the downstream report surface.

use serde::{Deserialize, Serialize};

/// One signed monetary movement extracted from a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// ISO-8601 (`YYYY-MM-DD`) when the source value parsed; otherwise the
    /// original cell text, or `"Unknown"` for a missing cell.
    pub date: String,
    /// Positive = inflow, negative = outflow. Full precision, no rounding.
    pub amount: f64,
    /// Either the document's own category cell, verbatim, or a classifier
    /// assignment.
    pub category: String,
    pub description: String,
}

impl Transaction {
    pub fn new(
        date: impl Into<String>,
        amount: f64,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            amount,
            category: category.into(),
            description: description.into(),
        }
    }

    /// Returns true if this is income (positive amount)
    pub fn is_income(&self) -> bool {
        self.amount > 0.0
    }

    /// Returns true if this is an expense (negative amount)
    pub fn is_expense(&self) -> bool {
        self.amount < 0.0
    }

    /// Get the absolute amount
    pub fn abs_amount(&self) -> f64 {
        self.amount.abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transaction_predicates() {
        let rent = Transaction::new("2026-02-01", -1250.0, "Housing", "Monthly Rent Payment");
        assert!(rent.is_expense());
        assert!(!rent.is_income());
        assert_eq!(rent.abs_amount(), 1250.0);

        let salary = Transaction::new("2026-02-01", 4200.0, "Income", "Monthly Salary");
        assert!(salary.is_income());
    }

    #[test]
    fn test_serialized_field_names() {
        let txn = Transaction::new("2026-02-01", -50.0, "Food", "Grocery Mart");
        let value = serde_json::to_value(&txn).unwrap();
        for key in ["date", "amount", "category", "description"] {
            assert!(value.get(key).is_some(), "missing field {key}");
        }
    }
}
