//! Defines the category store trait.

use crate::{
    Error,
    models::{Category, DatabaseID, NewCategory},
};

/// Creates and retrieves transaction categories.
pub trait CategoryStore {
    /// Create a new category and add it to the store.
    fn create(&self, category: NewCategory) -> Result<Category, Error>;

    /// Get a category by its ID.
    ///
    /// Implementers should return [Error::NotFound] if there is no category with `category_id`.
    fn get(&self, category_id: DatabaseID) -> Result<Category, Error>;

    /// Get all categories in the order they were created.
    fn get_all(&self) -> Result<Vec<Category>, Error>;
}
