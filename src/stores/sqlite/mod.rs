//! Store implementations backed by a SQLite database.

mod category;
mod expense;

use std::sync::{Mutex, MutexGuard};

use rusqlite::Connection;

pub use category::SQLiteCategoryStore;
pub use expense::SQLiteExpenseStore;

use crate::Error;

/// A trait for adding an object schema to a database.
pub trait CreateTable {
    /// Create the table(s) for the model if they do not exist yet.
    ///
    /// # Errors
    /// Returns an error if there is an SQL error.
    fn create_table(connection: &Connection) -> Result<(), rusqlite::Error>;
}

/// Create the application tables and turn on foreign key enforcement.
///
/// Foreign keys are a per-connection setting in SQLite, so this must be
/// called on every new connection.
///
/// # Errors
/// Returns an error if there is an SQL error.
pub fn initialize(connection: &Connection) -> Result<(), Error> {
    connection.pragma_update(None, "foreign_keys", true)?;

    SQLiteCategoryStore::create_table(connection)?;
    SQLiteExpenseStore::create_table(connection)?;

    Ok(())
}

/// Acquire the shared database connection.
///
/// # Errors
/// Returns [Error::DatabaseLockError] if the lock is poisoned.
fn lock(connection: &Mutex<Connection>) -> Result<MutexGuard<'_, Connection>, Error> {
    connection.lock().map_err(|error| {
        tracing::error!("could not acquire database lock: {error}");
        Error::DatabaseLockError
    })
}
