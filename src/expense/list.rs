//! Endpoints for reading expenses.

use axum::{Json, extract::State};

use crate::{
    Error,
    app_state::ExpenseState,
    database_id::{CategoryId, ExpenseId},
    expense::Expense,
    extract::ApiPath,
    stores::ExpenseStore,
};

/// Get all expenses, newest first.
pub async fn list_expenses_endpoint(
    State(state): State<ExpenseState>,
) -> Result<Json<Vec<Expense>>, Error> {
    state.expense_store.get_all().map(Json)
}

/// Get a single expense, or `404 Not Found`.
pub async fn get_expense_endpoint(
    State(state): State<ExpenseState>,
    ApiPath(expense_id): ApiPath<ExpenseId>,
) -> Result<Json<Expense>, Error> {
    state.expense_store.get(expense_id).map(Json)
}

/// Get the expenses of one category, newest first.
///
/// An unknown category gives an empty list rather than an error.
pub async fn list_category_expenses_endpoint(
    State(state): State<ExpenseState>,
    ApiPath(category_id): ApiPath<CategoryId>,
) -> Result<Json<Vec<Expense>>, Error> {
    state.expense_store.get_by_category(category_id).map(Json)
}
