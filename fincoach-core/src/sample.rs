//! Deterministic sample data for demonstrations when no document is supplied.

use chrono::{Duration, Utc};

use crate::summary::{FinancialSummary, SummaryBuilder};
use crate::transaction::Transaction;

/// Fixed scenario: a young professional with positive cash flow. Offsets are
/// days past the base date (today minus 30), so the window always ends near
/// the invocation date. Every label is one the classifier can produce, and
/// all nine keyword categories appear.
const SAMPLE_TRANSACTIONS: &[(i64, f64, &str, &str)] = &[
    // Income
    (1, 4200.00, "Income", "Monthly Salary - Company XYZ"),
    (15, 800.00, "Income", "Freelance Project Payment"),
    (20, 200.00, "Income", "Tax Refund"),
    // Housing & utilities
    (1, -1250.00, "Housing", "Monthly Rent Payment"),
    (5, -120.00, "Housing", "Electric Bill"),
    (7, -80.00, "Housing", "Internet & Cable"),
    (10, -45.00, "Housing", "Water Bill"),
    // Transportation
    (3, -350.00, "Transportation", "Car Payment"),
    (8, -55.00, "Transportation", "Gas Station Fill-up"),
    (15, -60.00, "Transportation", "Gas Station Fill-up"),
    (22, -45.00, "Transportation", "Gas Station Fill-up"),
    (12, -25.00, "Transportation", "Parking Fee"),
    (1, -95.00, "Transportation", "Auto Insurance"),
    // Food & dining
    (2, -120.00, "Food", "Weekly Grocery Shopping"),
    (9, -115.00, "Food", "Weekly Grocery Shopping"),
    (16, -130.00, "Food", "Weekly Grocery Shopping"),
    (23, -125.00, "Food", "Weekly Grocery Shopping"),
    (6, -45.00, "Food", "Restaurant Dinner"),
    (13, -35.00, "Food", "Lunch with Colleagues"),
    (19, -25.00, "Food", "Coffee Shop"),
    // Healthcare
    (14, -150.00, "Healthcare", "Doctor Visit Copay"),
    (18, -35.00, "Healthcare", "Prescription Medication"),
    (15, -200.00, "Healthcare", "Health Insurance Premium"),
    // Entertainment
    (4, -15.99, "Entertainment", "Netflix Subscription"),
    (11, -12.99, "Entertainment", "Spotify Premium"),
    (17, -45.00, "Entertainment", "Movie Theater Tickets"),
    (24, -85.00, "Entertainment", "Concert Tickets"),
    // Shopping
    (5, -65.00, "Shopping", "Clothing Store"),
    (21, -120.00, "Shopping", "Amazon Purchase"),
    // Debt payments
    (3, -185.00, "Debt Payment", "Credit Card Payment"),
    (25, -75.00, "Debt Payment", "Student Loan Payment"),
    // Savings & investments
    (2, -300.00, "Savings", "Emergency Fund Transfer"),
    (16, -400.00, "Savings", "401k Contribution"),
    // Miscellaneous
    (26, -40.00, "Other Expenses", "Haircut"),
    (28, -50.00, "Other Expenses", "ATM Withdrawal"),
    (29, -25.00, "Other Expenses", "Bank Service Fee"),
];

/// Build the demonstration summary. Infallible, deterministic in structure,
/// dated relative to the invocation time.
pub fn create_sample_data() -> FinancialSummary {
    let base_date = Utc::now().date_naive() - Duration::days(30);

    let mut builder = SummaryBuilder::new();
    for (offset, amount, category, description) in SAMPLE_TRANSACTIONS {
        let date = (base_date + Duration::days(*offset))
            .format("%Y-%m-%d")
            .to_string();
        builder.push(Transaction::new(date, *amount, *category, *description));
    }
    builder.note("Sample data: fixed demonstration scenario, not an uploaded document".to_string());
    builder.finish()
}
