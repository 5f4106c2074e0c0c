//! This module defines the domain data types.

pub use amount::Amount;
pub use category::{Category, NewCategory};
pub use transaction::{NewTransaction, Transaction, TransactionRequest};

mod amount;
mod category;
mod transaction;

/// Alias for the integer type used for mapping to database IDs.
pub type DatabaseID = i64;
