//! The API endpoints URIs.
//!
//! For endpoints that take a parameter, e.g., '/api/categories/{category_id}', use [format_endpoint].

/// The route to list and create categories.
pub const CATEGORIES: &str = "/api/categories";
/// The route to get, rename or delete a single category.
pub const CATEGORY: &str = "/api/categories/{category_id}";
/// The route to list and add expenses.
pub const EXPENSES: &str = "/api/expenses";
/// The route to get or delete a single expense.
pub const EXPENSE: &str = "/api/expenses/{expense_id}";
/// The route to list the expenses of a single category.
pub const EXPENSES_BY_CATEGORY: &str = "/api/expenses/category/{category_id}";
/// The route to get the total spending per category.
pub const EXPENSE_SUMMARY: &str = "/api/expenses/summary";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace.
/// For example, in the endpoint path '/api/expenses/{expense_id}', '{expense_id}' is the parameter.
///
/// This function assumes that an endpoint path only contains ASCII characters
/// and a single parameter.
///
/// If no parameter is found in `endpoint_path`, the function returns the
/// the original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, id: i64) -> String {
    let Some(param_start) = endpoint_path.find('{') else {
        return endpoint_path.to_string();
    };

    let param_end = endpoint_path[param_start..]
        .find('}')
        .map(|end| param_start + end + 1)
        .unwrap_or(endpoint_path.len());

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_end..]
    )
}
