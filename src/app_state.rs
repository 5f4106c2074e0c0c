//! Implements a struct that holds the state of the REST server.

use crate::{
    services::TransactionService,
    stores::{CategoryStore, TransactionStore},
};

/// The state of the REST server.
///
/// The stores are constructed by the caller and passed in explicitly, see
/// [create_app_state](crate::stores::sqlite::create_app_state) for the SQLite
/// backed version.
#[derive(Debug, Clone)]
pub struct AppState<C, T> {
    /// The store for managing [categories](crate::models::Category).
    pub category_store: C,
    /// The service for managing [transactions](crate::models::Transaction).
    pub transaction_service: TransactionService<C, T>,
}

impl<C, T> AppState<C, T>
where
    C: CategoryStore + Clone,
    T: TransactionStore,
{
    /// Create a new [AppState].
    pub fn new(category_store: C, transaction_store: T) -> Self {
        Self {
            transaction_service: TransactionService::new(
                category_store.clone(),
                transaction_store,
            ),
            category_store,
        }
    }
}
