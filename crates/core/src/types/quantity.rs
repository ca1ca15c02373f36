//! Stock quantity of a product.

use core::fmt;

/// Errors that can occur when parsing a [`Quantity`].
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityError {
    /// The input is not a finite number.
    #[error("quantity must be a number")]
    NotANumber,
    /// The input is below zero.
    #[error("quantity cannot be negative")]
    Negative,
}

/// A non-negative count of units in stock.
///
/// Form input may carry a fractional part or an exponent; only the leading
/// digits are kept, so `"5.9"` becomes `5`.
///
/// ```
/// use stockroom_core::Quantity;
///
/// assert_eq!(Quantity::parse("5").unwrap().as_i64(), 5);
/// assert_eq!(Quantity::parse("5.9").unwrap().as_i64(), 5);
/// assert!(Quantity::parse("-1").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Quantity(i64);

impl Quantity {
    /// Create a quantity from an integer.
    ///
    /// # Errors
    ///
    /// Returns `QuantityError::Negative` for values below zero.
    pub const fn new(count: i64) -> Result<Self, QuantityError> {
        if count < 0 {
            return Err(QuantityError::Negative);
        }
        Ok(Self(count))
    }

    /// Parse a quantity from form text. Surrounding whitespace is ignored.
    ///
    /// The whole text must be a finite number at least zero. The stored count
    /// is its leading run of digits, so any fraction or exponent is dropped:
    /// `"5.9"` is 5 and `"1e3"` is 1.
    ///
    /// # Errors
    ///
    /// Returns `QuantityError::NotANumber` if the text is not a finite number
    /// and `QuantityError::Negative` if it is below zero.
    pub fn parse(s: &str) -> Result<Self, QuantityError> {
        let s = s.trim();
        let value = s.parse::<f64>().map_err(|_| QuantityError::NotANumber)?;
        if !value.is_finite() {
            return Err(QuantityError::NotANumber);
        }
        if value < 0.0 {
            return Err(QuantityError::Negative);
        }

        Ok(Self(leading_integer(s)))
    }

    /// Returns the quantity as an integer.
    #[must_use]
    pub const fn as_i64(&self) -> i64 {
        self.0
    }
}

/// Value of the leading decimal digits of `s` after an optional sign.
/// No digits yields 0; overflow saturates at `i64::MAX`.
fn leading_integer(s: &str) -> i64 {
    s.trim_start_matches(['+', '-'])
        .bytes()
        .take_while(u8::is_ascii_digit)
        .try_fold(0_i64, |acc, digit| {
            acc.checked_mul(10)?.checked_add(i64::from(digit - b'0'))
        })
        .unwrap_or(i64::MAX)
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
