//! Category creation endpoint.

use axum::{
    Json,
    extract::State,
    http::{StatusCode, header::LOCATION},
    response::{IntoResponse, Response},
};

use crate::{
    Error,
    app_state::CategoryState,
    category::{CategoryData, create_category},
    endpoints::{self, format_endpoint},
    extract::ApiJson,
};

/// Handle a request to create a category.
///
/// Responds with `201 Created`, the new category and its location, or with
/// `400 Bad Request` if the name is empty.
pub async fn create_category_endpoint(
    State(state): State<CategoryState>,
    ApiJson(new_category): ApiJson<CategoryData>,
) -> Result<Response, Error> {
    let category = create_category(&new_category.name, &state.category_store)?;
    let location = format_endpoint(endpoints::CATEGORY, category.id);

    Ok((StatusCode::CREATED, [(LOCATION, location)], Json(category)).into_response())
}
