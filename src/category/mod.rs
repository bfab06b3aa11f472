//! Category management for grouping expenses.

mod create;
mod delete;
mod domain;
mod edit;
mod list;
mod rules;

pub use create::create_category_endpoint;
pub use delete::delete_category_endpoint;
pub use domain::{Category, CategoryData, CategoryName};
pub use edit::update_category_endpoint;
pub use list::{get_category_endpoint, list_categories_endpoint};
pub use rules::{create_category, delete_category, update_category};
