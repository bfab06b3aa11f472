//! Expenses: single dated amounts of money spent in one category.
//!
//! This module contains everything related to expenses:
//! - The [Expense] model and the validated [Amount] type
//! - The rules for adding expenses
//! - The JSON endpoints for adding, listing and deleting expenses

mod create;
mod delete;
mod domain;
mod list;
mod rules;

pub use create::create_expense_endpoint;
pub use delete::delete_expense_endpoint;
pub use domain::{Amount, Expense, ExpenseData, NewExpense};
pub use list::{get_expense_endpoint, list_category_expenses_endpoint, list_expenses_endpoint};
pub use rules::add_expense;
