//! This file defines the `Category` type and the data needed to create a category.
//! A category groups transactions and marks them as income or an expense.

use serde::{Deserialize, Serialize};

use crate::models::DatabaseID;

/// A grouping for transactions, e.g., 'Salary', 'Groceries'.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Category {
    /// The ID of the category.
    pub id: DatabaseID,
    /// The display name of the category. Names do not need to be unique.
    pub name: String,
    /// Either "income" or "expense" by convention.
    ///
    /// This is free text and is stored exactly as given.
    #[serde(rename = "type")]
    pub kind: String,
}

/// The data needed to create a new [Category].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCategory {
    /// The display name of the category.
    pub name: String,
    /// Either "income" or "expense" by convention.
    #[serde(rename = "type")]
    pub kind: String,
}

impl NewCategory {
    /// Create a [Category] from the new category and the ID it was stored with.
    pub fn finalise(self, id: DatabaseID) -> Category {
        Category {
            id,
            name: self.name,
            kind: self.kind,
        }
    }
}
