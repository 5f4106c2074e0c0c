//! Implements a SQLite backed transaction store.

use std::sync::{Arc, Mutex};

use rusqlite::{Connection, Row};

use crate::{
    Error,
    db::{CreateTable, MapRow},
    models::{DatabaseID, NewTransaction, Transaction},
    stores::{
        TransactionStore,
        sqlite::{SQLiteCategoryStore, lock_connection},
    },
};

/// Selects transactions joined with their category so that the category can
/// be embedded in each [Transaction].
const SELECT_TRANSACTIONS: &str = "SELECT t.id, t.title, t.amount, t.date, t.type, c.id, c.name, c.type
    FROM \"transaction\" t
    INNER JOIN category c ON c.id = t.category_id";

/// Stores transactions in a SQLite database.
///
/// Note that because a transaction depends on the [Category](crate::models::Category)
/// model, the category table must be set up in the database.
#[derive(Debug, Clone)]
pub struct SQLiteTransactionStore {
    connection: Arc<Mutex<Connection>>,
}

impl SQLiteTransactionStore {
    /// Create a new store for the SQLite `connection`.
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }
}

impl TransactionStore for SQLiteTransactionStore {
    /// Create a new transaction in the database.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::CategoryNotFound] if the transaction's category is not in the database,
    /// - or [Error::SqlError] if there is some other SQL error.
    fn create(&self, transaction: NewTransaction) -> Result<Transaction, Error> {
        let connection = lock_connection(&self.connection)?;
        let category_id = transaction.category.id;

        connection
            .execute(
                "INSERT INTO \"transaction\" (title, amount, date, type, category_id)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                (
                    &transaction.title,
                    transaction.amount,
                    transaction.date,
                    &transaction.kind,
                    category_id,
                ),
            )
            .map_err(|error| match error {
                // Code 787 occurs when a FOREIGN KEY constraint failed.
                // The category was removed after it was looked up.
                rusqlite::Error::SqliteFailure(error, Some(_)) if error.extended_code == 787 => {
                    Error::CategoryNotFound(category_id)
                }
                error => error.into(),
            })?;

        let id = connection.last_insert_rowid();
        tracing::debug!(
            "Created transaction {id} \"{}\" for {} in category {category_id}",
            transaction.title,
            transaction.amount
        );

        Ok(transaction.finalise(id))
    }

    /// Retrieve a transaction in the database by its `id`.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::NotFound] if `id` does not refer to a valid transaction,
    /// - or [Error::SqlError] there is some other SQL error.
    fn get(&self, id: DatabaseID) -> Result<Transaction, Error> {
        let connection = lock_connection(&self.connection)?;
        let transaction = connection
            .prepare(&format!("{SELECT_TRANSACTIONS} WHERE t.id = :id;"))?
            .query_row(&[(":id", &id)], Self::map_row)?;

        Ok(transaction)
    }

    /// Retrieve all transactions in the database.
    ///
    /// # Errors
    /// This function will return a [Error::SqlError] there is a SQL error.
    fn get_all(&self) -> Result<Vec<Transaction>, Error> {
        let connection = lock_connection(&self.connection)?;
        let mut statement = connection.prepare(&format!("{SELECT_TRANSACTIONS} ORDER BY t.id;"))?;

        statement
            .query_map([], Self::map_row)?
            .map(|maybe_transaction| maybe_transaction.map_err(Error::from))
            .collect()
    }

    /// Delete the transaction with `id` if it exists.
    ///
    /// # Errors
    /// This function will return a [Error::SqlError] there is a SQL error.
    fn delete(&self, id: DatabaseID) -> Result<(), Error> {
        let connection = lock_connection(&self.connection)?;
        let rows_affected =
            connection.execute("DELETE FROM \"transaction\" WHERE id = ?1", (id,))?;

        if rows_affected == 0 {
            tracing::debug!("Tried to delete transaction {id}, but it does not exist");
        }

        Ok(())
    }
}

impl CreateTable for SQLiteTransactionStore {
    fn create_table(connection: &Connection) -> Result<(), rusqlite::Error> {
        connection.execute(
            "CREATE TABLE IF NOT EXISTS \"transaction\" (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL,
                amount INTEGER NOT NULL,
                date TEXT NOT NULL,
                type TEXT NOT NULL,
                category_id INTEGER NOT NULL,
                FOREIGN KEY(category_id) REFERENCES category(id) ON UPDATE CASCADE ON DELETE RESTRICT
            );",
            (),
        )?;

        Ok(())
    }
}

impl MapRow for SQLiteTransactionStore {
    type ReturnType = Transaction;

    fn map_row_with_offset(row: &Row, offset: usize) -> Result<Self::ReturnType, rusqlite::Error> {
        Ok(Transaction {
            id: row.get(offset)?,
            title: row.get(offset + 1)?,
            amount: row.get(offset + 2)?,
            date: row.get(offset + 3)?,
            kind: row.get(offset + 4)?,
            category: SQLiteCategoryStore::map_row_with_offset(row, offset + 5)?,
        })
    }
}
