//! Buyer records.

use super::{BuyerId, Email};

/// A buyer as stored in the `buyers` table.
///
/// `email` is unique across all buyers; the store enforces it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buyer {
    /// Store-assigned identifier.
    pub id: BuyerId,
    pub name: String,
    pub email: Email,
    pub phone: String,
    pub address: Option<String>,
}

/// A validated buyer that has not been stored yet.
///
/// Only produced by [`BuyerForm::validate`](crate::BuyerForm::validate).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBuyer {
    pub name: String,
    pub email: Email,
    pub phone: String,
    pub address: Option<String>,
}
