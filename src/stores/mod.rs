//! Contains traits and implementations for objects that store categories and expenses.
//!
//! The rule engines in [crate::category] and [crate::expense] only depend on
//! the [CategoryStore] and [ExpenseStore] traits, so tests can swap the
//! SQLite stores for in-memory ones.

mod category;
mod expense;

pub mod sqlite;

pub use category::CategoryStore;
pub use expense::ExpenseStore;
