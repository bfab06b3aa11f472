//! Endpoint for adding an expense.

use axum::{
    Json,
    extract::State,
    http::{StatusCode, header::LOCATION},
    response::{IntoResponse, Response},
};
use time::OffsetDateTime;

use crate::{
    Error,
    app_state::ExpenseState,
    endpoints::{self, format_endpoint},
    expense::{ExpenseData, add_expense},
    extract::ApiJson,
};

/// Handle a request to add an expense.
///
/// Responds with `201 Created`, the new expense and its location, or with
/// `400 Bad Request` if the expense breaks one of the rules in [add_expense].
pub async fn create_expense_endpoint(
    State(state): State<ExpenseState>,
    ApiJson(data): ApiJson<ExpenseData>,
) -> Result<Response, Error> {
    let today = OffsetDateTime::now_utc().date();
    let expense = add_expense(data, today, &state.expense_store)?;
    let location = format_endpoint(endpoints::EXPENSE, expense.id);

    Ok((StatusCode::CREATED, [(LOCATION, location)], Json(expense)).into_response())
}
