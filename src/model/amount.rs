//! Amount type for handling expense values with either decimal separator.
//!
//! This module provides the `Amount` type which wraps `Decimal` and handles
//! parsing values that may use a comma or a period as the decimal separator.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::error::Error;
use std::fmt;
use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

/// Represents which decimal separator an amount was (or should be) written with.
///
/// # Examples
///  - `AmountFormat{ comma: true }` -> `-60,5`
///  - `AmountFormat{ comma: false }` -> `-60.5`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AmountFormat {
    /// Whether a comma is used as the decimal separator in the formatting.
    comma: bool,
}

impl Default for AmountFormat {
    fn default() -> Self {
        DEFAULT_FORMAT
    }
}

/// The default format uses a comma as the decimal separator, which is how
/// computed totals are displayed: e.g. `-60,5`.
const DEFAULT_FORMAT: AmountFormat = AmountFormat { comma: true };

/// Represents a single expense value.
///
/// This type wraps `Decimal` and provides custom serialization/deserialization
/// to handle amounts that may be written with a comma or a period as the
/// decimal separator.
///
/// Formatting is considered significant for the purposes of equality, so for numeric comparisons,
/// you should access the `Decimal` value and use that.
///
/// # Examples
///
/// Parsing with a comma separator:
/// ```
/// # use trip_ledger::Amount;
/// # use std::str::FromStr;
/// let amount = Amount::from_str("12,5").unwrap();
/// assert_eq!(amount.to_string(), "12,5");
/// ```
///
/// Parsing with a period separator:
/// ```
/// # use trip_ledger::Amount;
/// # use std::str::FromStr;
/// let amount = Amount::from_str("12.5").unwrap();
/// assert_ne!(amount.to_string(), "12,5");
/// assert_eq!(amount.to_string(), "12.5");
/// ```
///
/// Value equivalency, but not absolute equivalency
/// ```
/// # use trip_ledger::Amount;
/// # use std::str::FromStr;
/// let a = Amount::from_str("12,5").unwrap();
/// let b = Amount::from_str("12.5").unwrap();
/// assert_ne!(a, b);
/// assert_ne!(a.to_string(), b.to_string());
/// assert_eq!(a.value(), b.value());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Amount {
    /// The parsed numerical value.
    value: Decimal,
    /// The way the numerical value was parsed from, or should be written to, a `String`.
    format: AmountFormat,
}

impl Amount {
    /// Creates a new Amount from a Decimal value with default `String` formatting.
    pub const fn new(value: Decimal) -> Self {
        Self {
            value,
            format: DEFAULT_FORMAT,
        }
    }

    /// Creates a new Amount from a Decimal value with the specified formatting.
    pub const fn new_with_format(value: Decimal, format: AmountFormat) -> Self {
        Self { value, format }
    }

    /// Returns the underlying Decimal value.
    pub fn value(&self) -> Decimal {
        self.value
    }

    /// Returns true if the amount is zero.
    pub fn is_zero(&self) -> bool {
        self.value().is_zero()
    }

    /// Returns true if the amount is positive.
    pub fn is_positive(&self) -> bool {
        !self.is_zero() && self.value().is_sign_positive()
    }

    /// Returns true if the amount is negative.
    pub fn is_negative(&self) -> bool {
        self.value().is_sign_negative()
    }
}

/// An error that can occur when parsing strings into `Decimal` values.
pub struct AmountError(rust_decimal::Error);

impl Debug for AmountError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(&self.0, f)
    }
}

impl Display for AmountError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl std::error::Error for AmountError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.0)
    }
}

impl FromStr for Amount {
    type Err = AmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Remove whitespace
        let trimmed = s.trim();

        // Handle empty string
        if trimmed.is_empty() {
            return Ok(Amount::default());
        }

        // Normalize a decimal comma to a period before parsing
        let comma = trimmed.contains(',');
        let normalized = trimmed.replace(',', ".");

        // Parse the decimal value
        let value = Decimal::from_str(&normalized).map_err(AmountError)?;
        Ok(Amount {
            value,
            format: AmountFormat { comma },
        })
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let num = self.value().to_string();
        if self.format.comma {
            write!(f, "{}", num.replace('.', ","))
        } else {
            write!(f, "{num}")
        }
    }
}

impl Serialize for Amount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // Serialize as a string so the separator format survives
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Amount::from_str(&s).map_err(serde::de::Error::custom)
    }
}

impl From<Decimal> for Amount {
    fn from(value: Decimal) -> Self {
        Amount::new(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_comma() {
        let amount = Amount::from_str("12,5").unwrap();
        assert_eq!(amount.value(), Decimal::from_str("12.5").unwrap());
    }

    #[test]
    fn test_parse_with_period() {
        let amount = Amount::from_str("12.5").unwrap();
        assert_eq!(amount.value(), Decimal::from_str("12.5").unwrap());
    }

    #[test]
    fn test_parse_negative_with_comma() {
        let amount = Amount::from_str("-3,0").unwrap();
        assert_eq!(amount.value(), Decimal::from_str("-3.0").unwrap());
    }

    #[test]
    fn test_parse_negative_with_period() {
        let amount = Amount::from_str("-3.0").unwrap();
        assert_eq!(amount.value(), Decimal::from_str("-3.0").unwrap());
    }

    #[test]
    fn test_parse_integer() {
        let amount = Amount::from_str("100").unwrap();
        assert_eq!(amount.value(), Decimal::from_str("100").unwrap());
    }

    #[test]
    fn test_parse_empty_string() {
        let amount = Amount::from_str("").unwrap();
        assert_eq!(amount.value(), Decimal::ZERO);
    }

    #[test]
    fn test_parse_whitespace() {
        let amount = Amount::from_str("  12,5  ").unwrap();
        assert_eq!(amount.value(), Decimal::from_str("12.5").unwrap());
    }

    #[test]
    fn test_parse_garbage() {
        assert!(Amount::from_str("abc").is_err());
        assert!(Amount::from_str("1.2.3").is_err());
        assert!(Amount::from_str("1,2,3").is_err());
    }

    #[test]
    fn test_display_default_uses_comma() {
        let amount = Amount::new(Decimal::from_str("150.5").unwrap());
        assert_eq!(amount.to_string(), "150,5");
    }

    #[test]
    fn test_display_negative() {
        let amount = Amount::new(Decimal::from_str("-50.25").unwrap());
        assert_eq!(amount.to_string(), "-50,25");
    }

    #[test]
    fn test_display_retains_period() {
        let s = "-3.0";
        let amount = Amount::from_str(s).unwrap();
        assert_eq!(amount.to_string(), s);
    }

    #[test]
    fn test_display_retains_comma() {
        let s = "12,5";
        let amount = Amount::from_str(s).unwrap();
        assert_eq!(amount.to_string(), s);
    }

    #[test]
    fn test_serialize() {
        let amount = Amount::new(Decimal::from_str("150.5").unwrap());
        let json = serde_json::to_string(&amount).unwrap();
        assert_eq!(json, "\"150,5\"");
    }

    #[test]
    fn test_deserialize_with_comma() {
        let json = "\"150,5\"";
        let amount: Amount = serde_json::from_str(json).unwrap();
        assert_eq!(amount.value(), Decimal::from_str("150.5").unwrap());
    }

    #[test]
    fn test_deserialize_with_period() {
        let json = "\"150.5\"";
        let amount: Amount = serde_json::from_str(json).unwrap();
        assert_eq!(amount.value(), Decimal::from_str("150.5").unwrap());
    }

    #[test]
    fn test_equality() {
        let a1 = Amount::from_str("12,5").unwrap();
        let a2 = Amount::from_str("12.5").unwrap();
        assert_ne!(a1, a2);
        assert_eq!(a1.value(), a2.value());
    }

    #[test]
    fn test_ordering() {
        let a1 = Amount::from_str("30,0").unwrap();
        let a2 = Amount::from_str("50,0").unwrap();
        assert!(a1 < a2);
    }

    #[test]
    fn test_is_zero() {
        let zero = Amount::from_str("0").unwrap();
        assert!(zero.is_zero());

        let non_zero = Amount::from_str("50").unwrap();
        assert!(!non_zero.is_zero());
    }

    #[test]
    fn test_zero_is_not_positive_or_negative() {
        let zero = Amount::from_str("0,0").unwrap();
        assert!(!zero.is_positive());
        assert!(!zero.is_negative());
        assert!(zero.is_zero());
    }

    #[test]
    fn test_is_negative() {
        let negative = Amount::from_str("-5").unwrap();
        assert!(negative.is_negative());

        let positive = Amount::from_str("5").unwrap();
        assert!(!positive.is_negative());
    }
}
