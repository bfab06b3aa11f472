#![allow(missing_docs)]

pub(crate) mod http;
pub(crate) mod store;

pub(crate) use http::{get_header, parse_json_body};
pub(crate) use store::InMemoryStore;

use std::str::FromStr;

use rusqlite::Connection;
use rust_decimal::Decimal;
use time::OffsetDateTime;

use crate::{
    AppState,
    category::{Category, create_category},
    database_id::CategoryId,
    expense::{Amount, Expense, NewExpense},
    stores::ExpenseStore,
};

/// An app state backed by a fresh in-memory database.
pub(crate) fn get_test_app_state() -> AppState {
    let connection =
        Connection::open_in_memory().expect("Could not open database in memory.");

    AppState::new(connection).expect("Could not initialize database.")
}

#[track_caller]
pub(crate) fn create_test_category(name: &str, state: &AppState) -> Category {
    create_category(name, &state.category_store).expect("Could not create test category")
}

/// Store an expense dated today (UTC).
#[track_caller]
pub(crate) fn create_test_expense(category_id: CategoryId, amount: &str, state: &AppState) -> Expense {
    let amount = Decimal::from_str(amount).expect("Invalid test amount");

    state
        .expense_store
        .create(NewExpense {
            category_id,
            amount: Amount::new(amount).expect("Test amount must be positive"),
            expense_date: OffsetDateTime::now_utc().date(),
        })
        .expect("Could not create test expense")
}
