//! Business rules for adding expenses.

use time::Date;

use crate::{
    Error,
    expense::{Amount, Expense, ExpenseData, NewExpense},
    stores::ExpenseStore,
};

/// Validate `data` and store it as a new expense.
///
/// `today` is the current UTC date. The checks run in a fixed order so that a
/// request with several bad fields always gets the same error:
/// 1. the amount must be greater than zero,
/// 2. the date must not be after `today`,
/// 3. the category must exist.
///
/// # Errors
/// Returns an [Error::Validation] naming the first field that failed, or any
/// error from the store.
pub fn add_expense<E>(data: ExpenseData, today: Date, store: &E) -> Result<Expense, Error>
where
    E: ExpenseStore,
{
    let amount = Amount::new(data.amount)?;

    if data.expense_date > today {
        return Err(Error::validation(
            "Expense date cannot be in the future.",
            "expenseDate",
        ));
    }

    if !store.category_exists(data.category_id)? {
        return Err(Error::validation("Category does not exist.", "categoryId"));
    }

    let expense = store.create(NewExpense {
        category_id: data.category_id,
        amount,
        expense_date: data.expense_date,
    })?;

    tracing::debug!(
        "added expense {} of {} to category {}",
        expense.id,
        expense.amount,
        expense.category_id
    );

    Ok(expense)
}
