//! Defines the transaction store trait.

use crate::{
    Error,
    models::{DatabaseID, NewTransaction, Transaction},
};

/// Handles the creation, retrieval and deletion of transactions.
pub trait TransactionStore {
    /// Create a new transaction in the store.
    ///
    /// Implementers should return [Error::CategoryNotFound] if the category
    /// of `transaction` is not in the store.
    fn create(&self, transaction: NewTransaction) -> Result<Transaction, Error>;

    /// Retrieve a transaction from the store.
    ///
    /// Implementers should return [Error::NotFound] if there is no transaction with `id`.
    fn get(&self, id: DatabaseID) -> Result<Transaction, Error>;

    /// Retrieve all transactions in the order they were created.
    fn get_all(&self) -> Result<Vec<Transaction>, Error>;

    /// Remove the transaction with `id` from the store.
    ///
    /// Deleting a transaction that does not exist is not an error.
    fn delete(&self, id: DatabaseID) -> Result<(), Error>;
}
