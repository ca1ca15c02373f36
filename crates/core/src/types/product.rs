//! Product records.

use super::{Price, ProductId, Quantity};

/// A product as stored in the `products` table.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    /// Store-assigned identifier.
    pub id: ProductId,
    pub name: String,
    pub category: String,
    /// Unit price, always positive.
    pub price: Price,
    /// Units in stock, never negative.
    pub quantity: Quantity,
    pub description: Option<String>,
}

/// A validated product that has not been stored yet.
///
/// Only produced by [`ProductForm::validate`](crate::ProductForm::validate).
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub category: String,
    pub price: Price,
    pub quantity: Quantity,
    pub description: Option<String>,
}
