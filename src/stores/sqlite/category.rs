//! Implements a SQLite backed category store.

use std::sync::{Arc, Mutex};

use rusqlite::{Connection, Row};

use crate::{
    Error,
    db::{CreateTable, MapRow},
    models::{Category, DatabaseID, NewCategory},
    stores::{CategoryStore, sqlite::lock_connection},
};

/// Creates and retrieves transaction categories to/from a SQLite database.
#[derive(Debug, Clone)]
pub struct SQLiteCategoryStore {
    connection: Arc<Mutex<Connection>>,
}

impl SQLiteCategoryStore {
    /// Create a new category store with a SQLite database.
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }
}

impl CategoryStore for SQLiteCategoryStore {
    /// Create a category in the database.
    ///
    /// # Errors
    /// This function will return an error if there is an SQL error.
    fn create(&self, category: NewCategory) -> Result<Category, Error> {
        let connection = lock_connection(&self.connection)?;
        connection.execute(
            "INSERT INTO category (name, type) VALUES (?1, ?2);",
            (&category.name, &category.kind),
        )?;

        let id = connection.last_insert_rowid();
        tracing::debug!("Created category {id} \"{}\"", category.name);

        Ok(category.finalise(id))
    }

    /// Retrieve the category in the database with `category_id`.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::NotFound] if `category_id` does not refer to a valid category,
    /// - or [Error::SqlError] if there is some other SQL error.
    fn get(&self, category_id: DatabaseID) -> Result<Category, Error> {
        let connection = lock_connection(&self.connection)?;
        let category = connection
            .prepare("SELECT id, name, type FROM category WHERE id = :id;")?
            .query_row(&[(":id", &category_id)], Self::map_row)?;

        Ok(category)
    }

    /// Retrieve all categories in the database.
    ///
    /// # Errors
    /// This function will return an error if there is an SQL error.
    fn get_all(&self) -> Result<Vec<Category>, Error> {
        let connection = lock_connection(&self.connection)?;
        let mut statement = connection.prepare("SELECT id, name, type FROM category ORDER BY id;")?;

        statement
            .query_map([], Self::map_row)?
            .map(|maybe_category| maybe_category.map_err(Error::from))
            .collect()
    }
}

impl CreateTable for SQLiteCategoryStore {
    fn create_table(connection: &Connection) -> Result<(), rusqlite::Error> {
        connection.execute(
            "CREATE TABLE IF NOT EXISTS category (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                type TEXT NOT NULL
            );",
            (),
        )?;

        Ok(())
    }
}

impl MapRow for SQLiteCategoryStore {
    type ReturnType = Category;

    fn map_row_with_offset(row: &Row, offset: usize) -> Result<Self::ReturnType, rusqlite::Error> {
        Ok(Category {
            id: row.get(offset)?,
            name: row.get(offset + 1)?,
            kind: row.get(offset + 2)?,
        })
    }
}

#[cfg(test)]
mod category_tests {
    use std::sync::{Arc, Mutex};

    use rusqlite::Connection;

    use crate::{Error, db::initialize, models::NewCategory};

    use super::{CategoryStore, SQLiteCategoryStore};

    fn get_test_store() -> SQLiteCategoryStore {
        let connection = Connection::open_in_memory().unwrap();
        initialize(&connection).unwrap();
        let connection = Arc::new(Mutex::new(connection));

        SQLiteCategoryStore::new(connection)
    }

    fn new_category(name: &str, kind: &str) -> NewCategory {
        NewCategory {
            name: name.to_owned(),
            kind: kind.to_owned(),
        }
    }

    #[test]
    fn create_category_succeeds() {
        let store = get_test_store();

        let category = store.create(new_category("Salary", "income")).unwrap();

        assert_eq!(category.id, 1);
        assert_eq!(category.name, "Salary");
        assert_eq!(category.kind, "income");
    }

    #[test]
    fn create_allows_duplicate_names() {
        let store = get_test_store();

        let first = store.create(new_category("Food", "expense")).unwrap();
        let second = store.create(new_category("Food", "expense")).unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(store.get_all().unwrap(), vec![first, second]);
    }

    #[test]
    fn get_category_succeeds() {
        let store = get_test_store();
        let inserted_category = store.create(new_category("Foo", "expense")).unwrap();

        let selected_category = store.get(inserted_category.id);

        assert_eq!(Ok(inserted_category), selected_category);
    }

    #[test]
    fn get_category_with_invalid_id_returns_not_found() {
        let store = get_test_store();
        let inserted_category = store.create(new_category("Foo", "expense")).unwrap();

        let selected_category = store.get(inserted_category.id + 123);

        assert_eq!(selected_category, Err(Error::NotFound));
    }

    #[test]
    fn get_all_returns_categories_in_insertion_order() {
        let store = get_test_store();

        let inserted_categories = vec![
            store.create(new_category("Foo", "income")).unwrap(),
            store.create(new_category("Bar", "expense")).unwrap(),
            store.create(new_category("Baz", "not a real type")).unwrap(),
        ];

        let selected_categories = store.get_all().unwrap();

        assert_eq!(inserted_categories, selected_categories);
    }

    #[test]
    fn get_all_on_empty_store_returns_empty_list() {
        let store = get_test_store();

        assert_eq!(store.get_all(), Ok(vec![]));
    }
}
