//! Core types for Stockroom.
//!
//! This module provides type-safe wrappers for the inventory domain.

pub mod buyer;
pub mod email;
pub mod id;
pub mod price;
pub mod product;
pub mod quantity;

pub use buyer::{Buyer, NewBuyer};
pub use email::{Email, EmailError};
pub use id::*;
pub use price::{Price, PriceError};
pub use product::{NewProduct, Product};
pub use quantity::{Quantity, QuantityError};
