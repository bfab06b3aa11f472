//! Endpoint for the spending summary.

use axum::{Json, extract::State};
use serde::{Deserialize, Deserializer};

use crate::{
    Error,
    app_state::ExpenseState,
    database_id::CategoryId,
    extract::ApiQuery,
    summary::{CategorySummary, summarize},
};

/// The query string for [get_expense_summary_endpoint].
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryQuery {
    /// Only total the expenses of this category.
    ///
    /// An empty value, as in `?categoryId=`, is the same as leaving it out.
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub category_id: Option<CategoryId>,
}

fn deserialize_optional_id<'de, D>(deserializer: D) -> Result<Option<CategoryId>, D::Error>
where
    D: Deserializer<'de>,
{
    let text = Option::<String>::deserialize(deserializer)?;

    match text.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(text) => text.parse().map(Some).map_err(|error| {
            serde::de::Error::custom(format!("invalid category ID \"{text}\": {error}"))
        }),
    }
}

/// Get the total spending per category, largest total first.
pub async fn get_expense_summary_endpoint(
    State(state): State<ExpenseState>,
    ApiQuery(query): ApiQuery<SummaryQuery>,
) -> Result<Json<Vec<CategorySummary>>, Error> {
    summarize(query.category_id, &state.expense_store).map(Json)
}
