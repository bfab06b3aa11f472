//! Totals expenses per category.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::{
    Error,
    database_id::CategoryId,
    expense::{Amount, Expense},
    stores::ExpenseStore,
};

/// The name shown for expenses whose category could not be found.
pub const UNKNOWN_CATEGORY_NAME: &str = "Unknown";

/// The total amount spent in one category.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySummary {
    /// The ID of the category.
    pub category_id: CategoryId,
    /// The name of the category at the time the summary was made.
    pub category_name: String,
    /// The sum of the amounts of all expenses in the category.
    pub total_amount: Amount,
}

/// Total the expenses in the store, either all of them or only those in
/// `category_id`.
///
/// An unknown `category_id` gives an empty summary.
pub fn summarize<E: ExpenseStore>(
    category_id: Option<CategoryId>,
    store: &E,
) -> Result<Vec<CategorySummary>, Error> {
    let expenses = match category_id {
        Some(category_id) => store.get_by_category(category_id)?,
        None => store.get_all()?,
    };

    summarize_by_category(&expenses)
}

/// Group `expenses` by category and sum the amounts of each group.
///
/// The rows are sorted by total, largest first. Equal totals are ordered by
/// category ID.
///
/// # Errors
/// Returns [Error::AmountOverflow] if a total does not fit in a [Decimal].
pub fn summarize_by_category(expenses: &[Expense]) -> Result<Vec<CategorySummary>, Error> {
    let mut totals: BTreeMap<(CategoryId, String), Decimal> = BTreeMap::new();

    for expense in expenses {
        let name = expense
            .category_name
            .as_ref()
            .map_or(UNKNOWN_CATEGORY_NAME, |name| name.as_ref())
            .to_owned();

        let total = totals.entry((expense.category_id, name)).or_default();
        *total = total
            .checked_add(expense.amount.value())
            .ok_or(Error::AmountOverflow)?;
    }

    let mut summaries: Vec<CategorySummary> = totals
        .into_iter()
        .map(|((category_id, category_name), total)| CategorySummary {
            category_id,
            category_name,
            total_amount: Amount::new_unchecked(total),
        })
        .collect();

    // Stable, so ties keep the category ID order of the map.
    summaries.sort_by(|a, b| b.total_amount.cmp(&a.total_amount));

    Ok(summaries)
}
