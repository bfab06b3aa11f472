//! Category deletion endpoint.

use axum::{extract::State, http::StatusCode};

use crate::{
    Error, app_state::CategoryState, category::delete_category, database_id::CategoryId,
    extract::ApiPath,
};

/// Handle category deletion.
///
/// Responds with `204 No Content`, `404 Not Found` if there is no such
/// category, or `400 Bad Request` if the category still has expenses.
pub async fn delete_category_endpoint(
    State(state): State<CategoryState>,
    ApiPath(category_id): ApiPath<CategoryId>,
) -> Result<StatusCode, Error> {
    delete_category(category_id, &state.category_store)?;

    Ok(StatusCode::NO_CONTENT)
}
