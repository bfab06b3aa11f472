//! Expense deletion endpoint.

use axum::{extract::State, http::StatusCode};

use crate::{
    Error, app_state::ExpenseState, database_id::ExpenseId, extract::ApiPath,
    stores::ExpenseStore,
};

/// Handle expense deletion.
///
/// Deleting an expense never affects its category. Responds with
/// `204 No Content`, or `404 Not Found` if there is no such expense.
pub async fn delete_expense_endpoint(
    State(state): State<ExpenseState>,
    ApiPath(expense_id): ApiPath<ExpenseId>,
) -> Result<StatusCode, Error> {
    state.expense_store.delete(expense_id)?;
    tracing::debug!("deleted expense {expense_id}");

    Ok(StatusCode::NO_CONTENT)
}
