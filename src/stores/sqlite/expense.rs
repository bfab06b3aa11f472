//! Implements a SQLite backed expense store.

use std::sync::{Arc, Mutex};

use rusqlite::{Connection, Row};

use crate::{
    Error,
    category::CategoryName,
    database_id::{CategoryId, ExpenseId},
    expense::{Expense, NewExpense},
    stores::{
        ExpenseStore,
        sqlite::{CreateTable, lock},
    },
};

/// Selects the expense columns with the name of the linked category.
///
/// The join is a left join so that an expense whose category is missing is
/// still returned, with a `NULL` category name.
const SELECT_EXPENSE: &str = "SELECT expense.id, expense.category_id, category.name, \
     expense.amount, expense.expense_date \
     FROM expense LEFT JOIN category ON category.id = expense.category_id";

/// Creates, retrieves and deletes expenses to/from a SQLite database.
#[derive(Debug, Clone)]
pub struct SQLiteExpenseStore {
    connection: Arc<Mutex<Connection>>,
}

impl SQLiteExpenseStore {
    /// Create a new expense store with a SQLite database.
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }

    fn map_row(row: &Row) -> Result<Expense, rusqlite::Error> {
        let category_name: Option<String> = row.get(2)?;

        Ok(Expense {
            id: row.get(0)?,
            category_id: row.get(1)?,
            category_name: category_name.map(|name| CategoryName::new_unchecked(&name)),
            amount: row.get(3)?,
            expense_date: row.get(4)?,
        })
    }

    fn get_with_connection(
        expense_id: ExpenseId,
        connection: &Connection,
    ) -> Result<Expense, Error> {
        connection
            .prepare(&format!("{SELECT_EXPENSE} WHERE expense.id = :id;"))?
            .query_row(&[(":id", &expense_id)], Self::map_row)
            .map_err(|error| error.into())
    }
}

impl ExpenseStore for SQLiteExpenseStore {
    fn create(&self, expense: NewExpense) -> Result<Expense, Error> {
        let connection = lock(&self.connection)?;
        connection.execute(
            "INSERT INTO expense (category_id, amount, expense_date) VALUES (?1, ?2, ?3);",
            (expense.category_id, expense.amount, expense.expense_date),
        )?;

        let id = connection.last_insert_rowid();

        Self::get_with_connection(id, &connection)
    }

    fn get(&self, expense_id: ExpenseId) -> Result<Expense, Error> {
        let connection = lock(&self.connection)?;

        Self::get_with_connection(expense_id, &connection)
    }

    fn get_all(&self) -> Result<Vec<Expense>, Error> {
        lock(&self.connection)?
            .prepare(&format!(
                "{SELECT_EXPENSE} ORDER BY expense.expense_date DESC, expense.id ASC;"
            ))?
            .query_map([], Self::map_row)?
            .map(|maybe_expense| maybe_expense.map_err(|error| error.into()))
            .collect()
    }

    fn get_by_category(&self, category_id: CategoryId) -> Result<Vec<Expense>, Error> {
        lock(&self.connection)?
            .prepare(&format!(
                "{SELECT_EXPENSE} WHERE expense.category_id = :category_id \
                 ORDER BY expense.expense_date DESC, expense.id ASC;"
            ))?
            .query_map(&[(":category_id", &category_id)], Self::map_row)?
            .map(|maybe_expense| maybe_expense.map_err(|error| error.into()))
            .collect()
    }

    fn delete(&self, expense_id: ExpenseId) -> Result<(), Error> {
        let rows_affected =
            lock(&self.connection)?.execute("DELETE FROM expense WHERE id = ?1", [expense_id])?;

        if rows_affected == 0 {
            return Err(Error::NotFound);
        }

        Ok(())
    }

    fn category_exists(&self, category_id: CategoryId) -> Result<bool, Error> {
        lock(&self.connection)?
            .prepare("SELECT EXISTS (SELECT 1 FROM category WHERE id = ?1);")?
            .query_row([category_id], |row| row.get(0))
            .map_err(|error| error.into())
    }
}

impl CreateTable for SQLiteExpenseStore {
    fn create_table(connection: &Connection) -> Result<(), rusqlite::Error> {
        connection.execute_batch(
            "CREATE TABLE IF NOT EXISTS expense (
                id INTEGER PRIMARY KEY,
                category_id INTEGER NOT NULL,
                amount TEXT NOT NULL,
                expense_date TEXT NOT NULL,
                FOREIGN KEY(category_id) REFERENCES category(id) ON DELETE RESTRICT
            );

            CREATE INDEX IF NOT EXISTS idx_expense_category_id ON expense(category_id);
            CREATE INDEX IF NOT EXISTS idx_expense_date ON expense(expense_date);",
        )?;

        Ok(())
    }
}

#[cfg(test)]
mod expense_store_tests {
    use std::sync::{Arc, Mutex};

    use rusqlite::Connection;
    use rust_decimal_macros::dec;
    use time::macros::date;

    use crate::{
        Error,
        category::{Category, CategoryName},
        expense::{Amount, NewExpense},
        stores::{
            CategoryStore,
            sqlite::{SQLiteCategoryStore, initialize},
        },
    };

    use super::{ExpenseStore, SQLiteExpenseStore};

    fn get_test_stores() -> (SQLiteCategoryStore, SQLiteExpenseStore) {
        let connection = Connection::open_in_memory().unwrap();
        initialize(&connection).unwrap();
        let connection = Arc::new(Mutex::new(connection));

        (
            SQLiteCategoryStore::new(connection.clone()),
            SQLiteExpenseStore::new(connection),
        )
    }

    fn create_category(name: &str, store: &SQLiteCategoryStore) -> Category {
        store
            .create(CategoryName::new_unchecked(name))
            .expect("Could not create test category")
    }

    fn new_expense(category_id: i64, amount: &str, expense_date: time::Date) -> NewExpense {
        NewExpense {
            category_id,
            amount: Amount::new_unchecked(amount.parse().unwrap()),
            expense_date,
        }
    }

    #[test]
    fn create_expense_resolves_category_name() {
        let (category_store, store) = get_test_stores();
        let food = create_category("Food", &category_store);

        let expense = store
            .create(new_expense(food.id, "12.50", date!(2025 - 03 - 14)))
            .unwrap();

        assert!(expense.id > 0);
        assert_eq!(expense.category_id, food.id);
        assert_eq!(expense.category_name, Some(food.name));
        assert_eq!(expense.amount.value(), dec!(12.50));
        assert_eq!(expense.expense_date, date!(2025 - 03 - 14));
    }

    #[test]
    fn create_expense_with_unknown_category_is_refused_by_database() {
        let (_, store) = get_test_stores();

        let result = store.create(new_expense(42, "1.00", date!(2025 - 03 - 14)));

        assert!(matches!(result, Err(Error::SqlError(_))));
    }

    #[test]
    fn amounts_are_stored_exactly() {
        let (category_store, store) = get_test_stores();
        let food = create_category("Food", &category_store);
        let inserted = store
            .create(new_expense(food.id, "1234567890123456.78", date!(2025 - 03 - 14)))
            .unwrap();

        let selected = store.get(inserted.id).unwrap();

        assert_eq!(selected.amount.value(), dec!(1234567890123456.78));
    }

    #[test]
    fn get_expense_with_invalid_id_returns_not_found() {
        let (_, store) = get_test_stores();

        assert_eq!(store.get(1337), Err(Error::NotFound));
    }

    #[test]
    fn get_all_orders_by_date_descending_then_id() {
        let (category_store, store) = get_test_stores();
        let food = create_category("Food", &category_store);
        let travel = create_category("Travel", &category_store);
        let oldest = store
            .create(new_expense(food.id, "1.00", date!(2025 - 01 - 01)))
            .unwrap();
        let newest_first = store
            .create(new_expense(travel.id, "2.00", date!(2025 - 02 - 01)))
            .unwrap();
        let newest_second = store
            .create(new_expense(food.id, "3.00", date!(2025 - 02 - 01)))
            .unwrap();

        let expenses = store.get_all().unwrap();

        assert_eq!(expenses, vec![newest_first, newest_second, oldest]);
    }

    #[test]
    fn get_by_category_only_returns_that_category() {
        let (category_store, store) = get_test_stores();
        let food = create_category("Food", &category_store);
        let travel = create_category("Travel", &category_store);
        let lunch = store
            .create(new_expense(food.id, "12.50", date!(2025 - 01 - 01)))
            .unwrap();
        store
            .create(new_expense(travel.id, "99.00", date!(2025 - 01 - 02)))
            .unwrap();
        let dinner = store
            .create(new_expense(food.id, "7.25", date!(2025 - 01 - 03)))
            .unwrap();

        let expenses = store.get_by_category(food.id).unwrap();

        assert_eq!(expenses, vec![dinner, lunch]);
    }

    #[test]
    fn get_by_unknown_category_is_empty() {
        let (_, store) = get_test_stores();

        assert_eq!(store.get_by_category(404), Ok(vec![]));
    }

    #[test]
    fn delete_expense_succeeds() {
        let (category_store, store) = get_test_stores();
        let food = create_category("Food", &category_store);
        let expense = store
            .create(new_expense(food.id, "1.00", date!(2025 - 01 - 01)))
            .unwrap();

        assert_eq!(store.delete(expense.id), Ok(()));
        assert_eq!(store.get(expense.id), Err(Error::NotFound));
        assert_eq!(category_store.get(food.id), Ok(food));
    }

    #[test]
    fn delete_expense_with_invalid_id_returns_not_found() {
        let (_, store) = get_test_stores();

        assert_eq!(store.delete(999999), Err(Error::NotFound));
    }

    #[test]
    fn category_exists_checks_category_table() {
        let (category_store, store) = get_test_stores();
        let food = create_category("Food", &category_store);

        assert_eq!(store.category_exists(food.id), Ok(true));
        assert_eq!(store.category_exists(food.id + 1), Ok(false));
    }

    #[test]
    fn category_id_of_linked_category_cannot_change() {
        let (category_store, store) = get_test_stores();
        let food = create_category("Food", &category_store);
        let expense = store
            .create(new_expense(food.id, "1.00", date!(2025 - 01 - 01)))
            .unwrap();

        let result = store.connection.lock().unwrap().execute(
            "UPDATE category SET id = ?1 WHERE id = ?2",
            (food.id + 100, food.id),
        );

        assert!(result.is_err());
        assert_eq!(store.get(expense.id).unwrap().category_id, food.id);
        assert_eq!(category_store.get(food.id), Ok(food));
    }
}
