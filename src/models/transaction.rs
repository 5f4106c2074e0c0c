//! This file defines the type `Transaction`, a single income or expense event,
//! and the types used to create one.

use serde::{Deserialize, Serialize};
use time::Date;

use crate::models::{Amount, Category, DatabaseID};

// Dates are exchanged as ISO 8601 calendar dates, e.g. "2024-01-01".
time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

/// An expense or income, i.e. an event where money was either spent or earned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: DatabaseID,
    /// A short description of the transaction.
    pub title: String,
    /// The amount of money spent or earned.
    pub amount: Amount,
    /// When the transaction happened.
    #[serde(with = "iso_date")]
    pub date: Date,
    /// Either "income" or "expense" by convention.
    ///
    /// This is not checked against the type of the category.
    #[serde(rename = "type")]
    pub kind: String,
    /// The category the transaction belongs to.
    pub category: Category,
}

/// The data a client sends to create a transaction.
///
/// The category is given by its ID and must be resolved to a [Category]
/// before the transaction can be stored, see [TransactionRequest::with_category].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRequest {
    /// A short description of the transaction.
    pub title: String,
    /// The amount of money spent or earned.
    pub amount: Amount,
    /// When the transaction happened.
    #[serde(with = "iso_date")]
    pub date: Date,
    /// Either "income" or "expense" by convention.
    #[serde(rename = "type")]
    pub kind: String,
    /// The ID of the category the transaction belongs to.
    pub category_id: DatabaseID,
}

impl TransactionRequest {
    /// Attach the resolved `category` to the request.
    ///
    /// The caller is responsible for making sure `category` is the category
    /// referred to by [TransactionRequest::category_id].
    pub fn with_category(self, category: Category) -> NewTransaction {
        NewTransaction {
            title: self.title,
            amount: self.amount,
            date: self.date,
            kind: self.kind,
            category,
        }
    }
}

/// A transaction that is ready to be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTransaction {
    /// A short description of the transaction.
    pub title: String,
    /// The amount of money spent or earned.
    pub amount: Amount,
    /// When the transaction happened.
    pub date: Date,
    /// Either "income" or "expense" by convention.
    pub kind: String,
    /// The category the transaction belongs to.
    pub category: Category,
}

impl NewTransaction {
    /// Create a [Transaction] from the new transaction and the ID it was stored with.
    pub fn finalise(self, id: DatabaseID) -> Transaction {
        Transaction {
            id,
            title: self.title,
            amount: self.amount,
            date: self.date,
            kind: self.kind,
            category: self.category,
        }
    }
}
