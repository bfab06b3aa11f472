//! Spending totals per category.

mod aggregation;
mod endpoint;

pub use aggregation::{CategorySummary, summarize};
pub use endpoint::get_expense_summary_endpoint;
