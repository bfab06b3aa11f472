//! Implements a struct that holds the state of the REST server.

use std::sync::{Arc, Mutex};

use axum::extract::FromRef;
use rusqlite::Connection;

use crate::{
    Error,
    stores::sqlite::{SQLiteCategoryStore, SQLiteExpenseStore, initialize},
};

/// The state of the REST server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The store for managing [categories](crate::category::Category).
    pub category_store: SQLiteCategoryStore,
    /// The store for managing [expenses](crate::expense::Expense).
    pub expense_store: SQLiteExpenseStore,
}

impl AppState {
    /// Create a new [AppState] with a SQLite database connection.
    ///
    /// This function will initialize the database by adding the tables for
    /// categories and expenses. Both stores share the one connection.
    ///
    /// # Errors
    /// Returns an error if the database cannot be initialized.
    pub fn new(db_connection: Connection) -> Result<Self, Error> {
        initialize(&db_connection)?;

        let connection = Arc::new(Mutex::new(db_connection));

        Ok(Self {
            category_store: SQLiteCategoryStore::new(connection.clone()),
            expense_store: SQLiteExpenseStore::new(connection),
        })
    }
}

/// The state needed by the category endpoints.
#[derive(Debug, Clone)]
pub struct CategoryState {
    /// The store for managing [categories](crate::category::Category).
    pub category_store: SQLiteCategoryStore,
}

impl FromRef<AppState> for CategoryState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            category_store: state.category_store.clone(),
        }
    }
}

/// The state needed by the expense and summary endpoints.
#[derive(Debug, Clone)]
pub struct ExpenseState {
    /// The store for managing [expenses](crate::expense::Expense).
    pub expense_store: SQLiteExpenseStore,
}

impl FromRef<AppState> for ExpenseState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            expense_store: state.expense_store.clone(),
        }
    }
}
