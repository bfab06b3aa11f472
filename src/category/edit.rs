//! Category renaming endpoint.

use axum::{Json, extract::State};

use crate::{
    Error,
    app_state::CategoryState,
    category::{Category, CategoryData, update_category},
    database_id::CategoryId,
    extract::{ApiJson, ApiPath},
};

/// Handle a request to rename a category.
pub async fn update_category_endpoint(
    State(state): State<CategoryState>,
    ApiPath(category_id): ApiPath<CategoryId>,
    ApiJson(form): ApiJson<CategoryData>,
) -> Result<Json<Category>, Error> {
    update_category(category_id, &form.name, &state.category_store).map(Json)
}
