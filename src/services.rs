//! The transaction service resolves the category of a new transaction before
//! handing it to the transaction store.

use crate::{
    Error,
    models::{DatabaseID, Transaction, TransactionRequest},
    stores::{CategoryStore, TransactionStore},
};

/// Creates, retrieves and deletes transactions.
///
/// Creating a transaction requires the referenced category to exist, all other
/// operations go straight to the transaction store.
#[derive(Debug, Clone)]
pub struct TransactionService<C, T> {
    category_store: C,
    transaction_store: T,
}

impl<C, T> TransactionService<C, T>
where
    C: CategoryStore,
    T: TransactionStore,
{
    /// Create a service that looks up categories in `category_store` and
    /// keeps transactions in `transaction_store`.
    pub fn new(category_store: C, transaction_store: T) -> Self {
        Self {
            category_store,
            transaction_store,
        }
    }

    /// The store the service keeps transactions in.
    pub fn transaction_store(&self) -> &T {
        &self.transaction_store
    }

    /// Create a transaction in the category referred to by `request`.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::CategoryNotFound] if `request.category_id` does not refer to
    ///   a category, in which case nothing is stored,
    /// - or any error from the underlying stores.
    pub fn create(&self, request: TransactionRequest) -> Result<Transaction, Error> {
        let category_id = request.category_id;

        let category = match self.category_store.get(category_id) {
            Ok(category) => category,
            Err(Error::NotFound) => {
                tracing::debug!("Rejected transaction for missing category {category_id}");
                return Err(Error::CategoryNotFound(category_id));
            }
            Err(error) => return Err(error),
        };

        self.transaction_store.create(request.with_category(category))
    }

    /// Get all transactions.
    pub fn get_all(&self) -> Result<Vec<Transaction>, Error> {
        self.transaction_store.get_all()
    }

    /// Get a transaction by its ID.
    pub fn get(&self, id: DatabaseID) -> Result<Transaction, Error> {
        self.transaction_store.get(id)
    }

    /// Delete a transaction by its ID. Missing transactions are ignored.
    pub fn delete(&self, id: DatabaseID) -> Result<(), Error> {
        self.transaction_store.delete(id)
    }
}
