//! Defines the expense store trait.

use crate::{
    Error,
    database_id::{CategoryId, ExpenseId},
    expense::{Expense, NewExpense},
};

/// Creates, retrieves and deletes expenses.
///
/// Expenses returned by the store carry the name of their category, resolved
/// at read time.
pub trait ExpenseStore {
    /// Add a validated expense to the store.
    fn create(&self, expense: NewExpense) -> Result<Expense, Error>;

    /// Get an expense by its ID.
    ///
    /// # Errors
    /// Returns [Error::NotFound] if there is no expense with `expense_id`.
    fn get(&self, expense_id: ExpenseId) -> Result<Expense, Error>;

    /// Get all expenses, newest first. Expenses on the same date are ordered by ID.
    fn get_all(&self) -> Result<Vec<Expense>, Error>;

    /// Get the expenses of a single category, newest first.
    ///
    /// An unknown `category_id` yields an empty list.
    fn get_by_category(&self, category_id: CategoryId) -> Result<Vec<Expense>, Error>;

    /// Remove the expense with `expense_id`.
    ///
    /// # Errors
    /// Returns [Error::NotFound] if there is no expense with `expense_id`.
    fn delete(&self, expense_id: ExpenseId) -> Result<(), Error>;

    /// Whether a category with `category_id` exists.
    fn category_exists(&self, category_id: CategoryId) -> Result<bool, Error>;
}
