//! Endpoints for reading categories.

use axum::{Json, extract::State};

use crate::{
    Error, app_state::CategoryState, category::Category, database_id::CategoryId,
    extract::ApiPath, stores::CategoryStore,
};

/// Get all categories ordered alphabetically by name.
pub async fn list_categories_endpoint(
    State(state): State<CategoryState>,
) -> Result<Json<Vec<Category>>, Error> {
    state.category_store.get_all().map(Json)
}

/// Get a single category, or `404 Not Found`.
pub async fn get_category_endpoint(
    State(state): State<CategoryState>,
    ApiPath(category_id): ApiPath<CategoryId>,
) -> Result<Json<Category>, Error> {
    state.category_store.get(category_id).map(Json)
}
