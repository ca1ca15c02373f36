//! Raw form submissions and their validators.
//!
//! Each submission endpoint deserializes its body into one of these shapes,
//! then calls `validate()` before touching the store. A validator either
//! returns a record ready for insertion or exactly one [`ValidationError`];
//! its `Display` text is what the operator sees above the form.
//!
//! Checks run in a fixed order and the first failure wins:
//!
//! 1. required fields present and non-blank
//! 2. numeric / format checks, in field order
//!
//! Fields decode from url-encoded text or from JSON, where numbers may be
//! sent bare (`"price": 9.99`).

use serde::{Deserialize, Deserializer};

use crate::types::{Email, NewBuyer, NewProduct, Price, Quantity};

/// Reasons a submission is rejected before reaching the store.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("All required fields must be filled")]
    MissingRequiredFields,
    #[error("Price must be a positive number")]
    InvalidPrice,
    #[error("Quantity must be a non-negative number")]
    InvalidQuantity,
    #[error("Please enter a valid email address")]
    InvalidEmail,
}

/// Body of `POST /products/add`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductForm {
    #[serde(default, deserialize_with = "text_or_number")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "text_or_number")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "text_or_number")]
    pub price: Option<String>,
    #[serde(default, deserialize_with = "text_or_number")]
    pub quantity: Option<String>,
    #[serde(default, deserialize_with = "text_or_number")]
    pub description: Option<String>,
}

impl ProductForm {
    /// Validate and normalize the submission.
    ///
    /// # Errors
    ///
    /// - `MissingRequiredFields` if name, category, price or quantity is blank
    /// - `InvalidPrice` if price is not a number greater than zero
    /// - `InvalidQuantity` if quantity is not a number at least zero
    pub fn validate(&self) -> Result<NewProduct, ValidationError> {
        let (Some(name), Some(category), Some(price), Some(quantity)) = (
            required(self.name.as_deref()),
            required(self.category.as_deref()),
            required(self.price.as_deref()),
            required(self.quantity.as_deref()),
        ) else {
            return Err(ValidationError::MissingRequiredFields);
        };

        let price = Price::parse(price).map_err(|_| ValidationError::InvalidPrice)?;
        let quantity = Quantity::parse(quantity).map_err(|_| ValidationError::InvalidQuantity)?;

        Ok(NewProduct {
            name: name.to_owned(),
            category: category.to_owned(),
            price,
            quantity,
            description: optional(self.description.as_deref()),
        })
    }
}

/// Body of `POST /buyers/add`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BuyerForm {
    #[serde(default, deserialize_with = "text_or_number")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "text_or_number")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "text_or_number")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "text_or_number")]
    pub address: Option<String>,
}

impl BuyerForm {
    /// Validate and normalize the submission.
    ///
    /// # Errors
    ///
    /// - `MissingRequiredFields` if name, email or phone is blank
    /// - `InvalidEmail` if email is not `local-part@domain.tld`
    pub fn validate(&self) -> Result<NewBuyer, ValidationError> {
        let (Some(name), Some(email), Some(phone)) = (
            required(self.name.as_deref()),
            required(self.email.as_deref()),
            required(self.phone.as_deref()),
        ) else {
            return Err(ValidationError::MissingRequiredFields);
        };

        let email = Email::parse(email).map_err(|_| ValidationError::InvalidEmail)?;

        Ok(NewBuyer {
            name: name.to_owned(),
            email,
            phone: phone.to_owned(),
            address: optional(self.address.as_deref()),
        })
    }
}

/// Accept a string or a bare JSON number; `null` and absent become `None`.
fn text_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Field {
        Text(String),
        Integer(i64),
        Float(f64),
    }

    Ok(Option::<Field>::deserialize(deserializer)?.map(|field| match field {
        Field::Text(text) => text,
        Field::Integer(n) => n.to_string(),
        Field::Float(n) => n.to_string(),
    }))
}

/// Trimmed value of a required field, or `None` if absent or blank.
fn required(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Trimmed owned value of an optional field; blank becomes `None`.
fn optional(value: Option<&str>) -> Option<String> {
    required(value).map(str::to_owned)
}
