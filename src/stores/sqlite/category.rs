//! Implements a SQLite backed category store.

use std::sync::{Arc, Mutex};

use rusqlite::{Connection, Row};

use crate::{
    Error,
    category::{Category, CategoryName},
    database_id::CategoryId,
    stores::{
        CategoryStore,
        sqlite::{CreateTable, lock},
    },
};

/// Creates, retrieves and deletes expense categories to/from a SQLite database.
#[derive(Debug, Clone)]
pub struct SQLiteCategoryStore {
    connection: Arc<Mutex<Connection>>,
}

impl SQLiteCategoryStore {
    /// Create a new category store with a SQLite database.
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }

    fn map_row(row: &Row) -> Result<Category, rusqlite::Error> {
        let id = row.get(0)?;
        let raw_name: String = row.get(1)?;
        let name = CategoryName::new_unchecked(&raw_name);

        Ok(Category { id, name })
    }
}

impl CategoryStore for SQLiteCategoryStore {
    fn create(&self, name: CategoryName) -> Result<Category, Error> {
        let connection = lock(&self.connection)?;
        connection.execute("INSERT INTO category (name) VALUES (?1);", (name.as_ref(),))?;

        let id = connection.last_insert_rowid();

        Ok(Category { id, name })
    }

    fn get(&self, category_id: CategoryId) -> Result<Category, Error> {
        lock(&self.connection)?
            .prepare("SELECT id, name FROM category WHERE id = :id;")?
            .query_row(&[(":id", &category_id)], Self::map_row)
            .map_err(|error| error.into())
    }

    fn get_all(&self) -> Result<Vec<Category>, Error> {
        lock(&self.connection)?
            .prepare("SELECT id, name FROM category ORDER BY name ASC, id ASC;")?
            .query_map([], Self::map_row)?
            .map(|maybe_category| maybe_category.map_err(|error| error.into()))
            .collect()
    }

    fn update(&self, category_id: CategoryId, name: CategoryName) -> Result<Category, Error> {
        let rows_affected = lock(&self.connection)?.execute(
            "UPDATE category SET name = ?1 WHERE id = ?2",
            (name.as_ref(), category_id),
        )?;

        if rows_affected == 0 {
            return Err(Error::NotFound);
        }

        Ok(Category {
            id: category_id,
            name,
        })
    }

    fn delete(&self, category_id: CategoryId) -> Result<(), Error> {
        let rows_affected =
            lock(&self.connection)?.execute("DELETE FROM category WHERE id = ?1", [category_id])?;

        if rows_affected == 0 {
            return Err(Error::NotFound);
        }

        Ok(())
    }

    fn has_expenses(&self, category_id: CategoryId) -> Result<bool, Error> {
        lock(&self.connection)?
            .prepare("SELECT EXISTS (SELECT 1 FROM expense WHERE category_id = ?1);")?
            .query_row([category_id], |row| row.get(0))
            .map_err(|error| error.into())
    }
}

impl CreateTable for SQLiteCategoryStore {
    fn create_table(connection: &Connection) -> Result<(), rusqlite::Error> {
        connection.execute_batch(
            "CREATE TABLE IF NOT EXISTS category (
                id INTEGER PRIMARY KEY,
                name TEXT NOT NULL CHECK (length(name) <= 200)
            );

            CREATE INDEX IF NOT EXISTS idx_category_name ON category(name);",
        )?;

        Ok(())
    }
}
