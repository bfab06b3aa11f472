//! Business rules for creating, renaming and deleting categories.

use crate::{
    Error,
    category::{Category, CategoryName},
    database_id::CategoryId,
    stores::CategoryStore,
};

/// Create a category named `name` with surrounding whitespace removed.
///
/// # Errors
/// Returns an [Error::Validation] if the trimmed name is empty or too long.
pub fn create_category<C>(name: &str, store: &C) -> Result<Category, Error>
where
    C: CategoryStore,
{
    let name = CategoryName::new(name)?;

    store.create(name)
}

/// Rename the category with `category_id` to the trimmed `name`.
///
/// Existing expenses keep pointing at the category, so they pick up the new
/// name the next time they are read.
///
/// # Errors
/// Returns an [Error::Validation] if the trimmed name is empty or too long,
/// checked before the category is looked up, or [Error::NotFound] if there is
/// no category with `category_id`.
pub fn update_category<C>(category_id: CategoryId, name: &str, store: &C) -> Result<Category, Error>
where
    C: CategoryStore,
{
    let name = CategoryName::new(name)?;

    store.update(category_id, name)
}

/// Delete the category with `category_id` if no expenses refer to it.
///
/// # Errors
/// Returns [Error::NotFound] if there is no category with `category_id`, or
/// [Error::Conflict] if the category still has expenses. Nothing is changed
/// in either case.
pub fn delete_category<C>(category_id: CategoryId, store: &C) -> Result<(), Error>
where
    C: CategoryStore,
{
    store.get(category_id)?;

    if store.has_expenses(category_id)? {
        tracing::info!("refused to delete category {category_id} because it has expenses");

        return Err(Error::Conflict(
            "Category cannot be deleted because it has linked expenses. \
            Remove its expenses first."
                .to_owned(),
        ));
    }

    store.delete(category_id)
}
