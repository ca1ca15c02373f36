//! Stockroom Core - Domain types and validation.
//!
//! This crate provides the types shared by the Stockroom web application and
//! its tests:
//! - Newtype IDs for products and buyers
//! - Validated value types (`Email`, `Price`, `Quantity`)
//! - Product and buyer records, plus the raw form shapes they are built from
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no database
//! access, no HTTP. Everything that reaches the store has already passed
//! through one of the validators in [`forms`].
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for IDs, prices, quantities, emails and records
//! - [`forms`] - Raw request shapes and their validators

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod forms;
pub mod types;

pub use forms::{BuyerForm, ProductForm, ValidationError};
pub use types::*;
