//! A store that keeps categories and expenses in memory, for testing the
//! rules without a database.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::{
    Error,
    category::{Category, CategoryName},
    database_id::{CategoryId, ExpenseId},
    expense::{Expense, NewExpense},
    stores::{CategoryStore, ExpenseStore},
};

#[derive(Debug, Default)]
struct Tables {
    categories: Vec<Category>,
    expenses: Vec<(ExpenseId, NewExpense)>,
    last_category_id: CategoryId,
    last_expense_id: ExpenseId,
}

impl Tables {
    fn hydrate(&self, id: ExpenseId, expense: &NewExpense) -> Expense {
        let category_name = self
            .categories
            .iter()
            .find(|category| category.id == expense.category_id)
            .map(|category| category.name.clone());

        Expense {
            id,
            category_id: expense.category_id,
            category_name,
            amount: expense.amount,
            expense_date: expense.expense_date,
        }
    }

    fn sorted_expenses<'a>(
        &self,
        expenses: impl Iterator<Item = &'a (ExpenseId, NewExpense)>,
    ) -> Vec<Expense> {
        let mut expenses: Vec<Expense> = expenses
            .map(|(id, expense)| self.hydrate(*id, expense))
            .collect();

        expenses.sort_by(|a, b| {
            b.expense_date
                .cmp(&a.expense_date)
                .then_with(|| a.id.cmp(&b.id))
        });

        expenses
    }
}

/// Implements both [CategoryStore] and [ExpenseStore] over shared vectors.
///
/// Clones share the same data, like the SQLite stores sharing a connection.
#[derive(Debug, Clone, Default)]
pub(crate) struct InMemoryStore {
    tables: Arc<Mutex<Tables>>,
}

impl InMemoryStore {
    fn tables(&self) -> MutexGuard<'_, Tables> {
        self.tables.lock().expect("Could not lock in-memory store")
    }

    pub(crate) fn expense_count(&self) -> usize {
        self.tables().expenses.len()
    }
}

impl CategoryStore for InMemoryStore {
    fn create(&self, name: CategoryName) -> Result<Category, Error> {
        let mut tables = self.tables();
        tables.last_category_id += 1;
        let category = Category {
            id: tables.last_category_id,
            name,
        };
        tables.categories.push(category.clone());

        Ok(category)
    }

    fn get(&self, category_id: CategoryId) -> Result<Category, Error> {
        self.tables()
            .categories
            .iter()
            .find(|category| category.id == category_id)
            .cloned()
            .ok_or(Error::NotFound)
    }

    fn get_all(&self) -> Result<Vec<Category>, Error> {
        let mut categories = self.tables().categories.clone();
        categories.sort_by(|a, b| {
            a.name
                .as_ref()
                .cmp(b.name.as_ref())
                .then_with(|| a.id.cmp(&b.id))
        });

        Ok(categories)
    }

    fn update(&self, category_id: CategoryId, name: CategoryName) -> Result<Category, Error> {
        let mut tables = self.tables();
        let category = tables
            .categories
            .iter_mut()
            .find(|category| category.id == category_id)
            .ok_or(Error::NotFound)?;
        category.name = name;

        Ok(category.clone())
    }

    fn delete(&self, category_id: CategoryId) -> Result<(), Error> {
        let mut tables = self.tables();
        let count_before = tables.categories.len();
        tables
            .categories
            .retain(|category| category.id != category_id);

        if tables.categories.len() == count_before {
            Err(Error::NotFound)
        } else {
            Ok(())
        }
    }

    fn has_expenses(&self, category_id: CategoryId) -> Result<bool, Error> {
        Ok(self
            .tables()
            .expenses
            .iter()
            .any(|(_, expense)| expense.category_id == category_id))
    }
}

impl ExpenseStore for InMemoryStore {
    fn create(&self, expense: NewExpense) -> Result<Expense, Error> {
        let mut tables = self.tables();
        tables.last_expense_id += 1;
        let id = tables.last_expense_id;
        let stored = tables.hydrate(id, &expense);
        tables.expenses.push((id, expense));

        Ok(stored)
    }

    fn get(&self, expense_id: ExpenseId) -> Result<Expense, Error> {
        let tables = self.tables();

        tables
            .expenses
            .iter()
            .find(|(id, _)| *id == expense_id)
            .map(|(id, expense)| tables.hydrate(*id, expense))
            .ok_or(Error::NotFound)
    }

    fn get_all(&self) -> Result<Vec<Expense>, Error> {
        let tables = self.tables();

        Ok(tables.sorted_expenses(tables.expenses.iter()))
    }

    fn get_by_category(&self, category_id: CategoryId) -> Result<Vec<Expense>, Error> {
        let tables = self.tables();
        let expenses = tables
            .expenses
            .iter()
            .filter(|(_, expense)| expense.category_id == category_id);

        Ok(tables.sorted_expenses(expenses))
    }

    fn delete(&self, expense_id: ExpenseId) -> Result<(), Error> {
        let mut tables = self.tables();
        let count_before = tables.expenses.len();
        tables.expenses.retain(|(id, _)| *id != expense_id);

        if tables.expenses.len() == count_before {
            Err(Error::NotFound)
        } else {
            Ok(())
        }
    }

    fn category_exists(&self, category_id: CategoryId) -> Result<bool, Error> {
        Ok(self
            .tables()
            .categories
            .iter()
            .any(|category| category.id == category_id))
    }
}
