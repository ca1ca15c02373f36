//! Unit price of a product.
//!
//! Prices are stored as SQLite `REAL`, so they are held as `f64` rather than a
//! decimal type. The only invariant is that a price is a finite number greater
//! than zero.

use core::fmt;

/// Errors that can occur when parsing a [`Price`].
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceError {
    /// The input is not a finite number.
    #[error("price must be a number")]
    NotANumber,
    /// The input is zero or negative.
    #[error("price must be greater than zero")]
    NotPositive,
}

/// A positive unit price.
///
/// ```
/// use stockroom_core::Price;
///
/// assert_eq!(Price::parse("9.99").unwrap().as_f64(), 9.99);
/// assert!(Price::parse("0").is_err());
/// assert!(Price::parse("abc").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Price(f64);

impl Price {
    /// Create a price from an already-numeric value.
    ///
    /// # Errors
    ///
    /// Returns `PriceError::NotANumber` for `NaN` or infinities and
    /// `PriceError::NotPositive` for values `<= 0`.
    pub fn new(amount: f64) -> Result<Self, PriceError> {
        if !amount.is_finite() {
            return Err(PriceError::NotANumber);
        }
        if amount <= 0.0 {
            return Err(PriceError::NotPositive);
        }
        Ok(Self(amount))
    }

    /// Parse a price from form text. Surrounding whitespace is ignored.
    ///
    /// # Errors
    ///
    /// Returns `PriceError::NotANumber` if the text is not a finite number
    /// and `PriceError::NotPositive` if it is `<= 0`.
    pub fn parse(s: &str) -> Result<Self, PriceError> {
        let amount = s
            .trim()
            .parse::<f64>()
            .map_err(|_| PriceError::NotANumber)?;
        Self::new(amount)
    }

    /// Returns the price as a floating-point number.
    #[must_use]
    pub const fn as_f64(&self) -> f64 {
        self.0
    }
}

/// Shortest text that reads back as the same value, so nothing is rounded
/// away: `9.99`, `10`, `0.001`.
impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::str::FromStr for Price {
    type Err = PriceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_positive() {
        assert!((Price::parse("9.99").unwrap().as_f64() - 9.99).abs() < f64::EPSILON);
        assert!((Price::parse(" 12 ").unwrap().as_f64() - 12.0).abs() < f64::EPSILON);
        assert!((Price::parse("1e2").unwrap().as_f64() - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_not_positive() {
        assert_eq!(Price::parse("0"), Err(PriceError::NotPositive));
        assert_eq!(Price::parse("-1"), Err(PriceError::NotPositive));
        assert_eq!(Price::parse("-0.01"), Err(PriceError::NotPositive));
    }

    #[test]
    fn test_parse_not_a_number() {
        assert_eq!(Price::parse("abc"), Err(PriceError::NotANumber));
        assert_eq!(Price::parse("9.99usd"), Err(PriceError::NotANumber));
        assert_eq!(Price::parse("NaN"), Err(PriceError::NotANumber));
        assert_eq!(Price::parse("inf"), Err(PriceError::NotANumber));
        assert_eq!(Price::parse(""), Err(PriceError::NotANumber));
    }

    #[test]
    fn test_display_keeps_full_precision() {
        assert_eq!(Price::new(9.99).unwrap().to_string(), "9.99");
        assert_eq!(Price::new(10.0).unwrap().to_string(), "10");
        assert_eq!(Price::new(1.234).unwrap().to_string(), "1.234");
        assert_eq!(Price::parse("0.001").unwrap().to_string(), "0.001");
    }
}
