//! Defines the category store trait.

use crate::{
    Error,
    category::{Category, CategoryName},
    database_id::CategoryId,
};

/// Creates, retrieves, renames and deletes expense categories.
pub trait CategoryStore {
    /// Create a new category and add it the store.
    fn create(&self, name: CategoryName) -> Result<Category, Error>;

    /// Get a category by its ID.
    ///
    /// # Errors
    /// Returns [Error::NotFound] if there is no category with `category_id`.
    fn get(&self, category_id: CategoryId) -> Result<Category, Error>;

    /// Get all categories ordered alphabetically by name.
    fn get_all(&self) -> Result<Vec<Category>, Error>;

    /// Replace the name of the category with `category_id`.
    ///
    /// # Errors
    /// Returns [Error::NotFound] if there is no category with `category_id`.
    fn update(&self, category_id: CategoryId, name: CategoryName) -> Result<Category, Error>;

    /// Remove the category with `category_id`.
    ///
    /// # Errors
    /// Returns [Error::NotFound] if there is no category with `category_id`.
    fn delete(&self, category_id: CategoryId) -> Result<(), Error>;

    /// Whether any expense refers to the category with `category_id`.
    fn has_expenses(&self, category_id: CategoryId) -> Result<bool, Error>;
}
