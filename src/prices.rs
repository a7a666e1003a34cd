//! Prices

use std::{fmt, ops::Deref};

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Currency used when a product does not name one.
pub const DEFAULT_CURRENCY: &str = "GHS";

/// Errors raised while constructing a [`Price`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PriceError {
    /// The amount was below zero.
    #[error("price cannot be negative")]
    Negative,
}

/// A non-negative amount in major currency units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price {
    value: Decimal,
}

impl Price {
    /// Creates a new price.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Negative`] when `value` is below zero.
    pub fn new(value: Decimal) -> Result<Self, PriceError> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(PriceError::Negative);
        }

        Ok(Self {
            value: value.normalize(),
        })
    }
}

impl Deref for Price {
    type Target = Decimal;

    fn deref(&self) -> &Self::Target {
        &self.value
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}

impl TryFrom<Decimal> for Price {
    type Error = PriceError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        rust_decimal::serde::float::serialize(&self.value, serializer)
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = rust_decimal::serde::float::deserialize(deserializer)?;

        Self::new(value).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::dec;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn new_price() -> TestResult {
        let price = Price::new(dec!(1200))?;

        assert_eq!(*price, dec!(1200));

        Ok(())
    }

    #[test]
    fn negative_price_is_rejected() {
        assert_eq!(Price::new(dec!(-1)), Err(PriceError::Negative));
    }

    #[test]
    fn zero_price_is_allowed() {
        assert!(Price::new(Decimal::ZERO).is_ok());
    }

    #[test]
    fn price_displays_without_trailing_zeros() -> TestResult {
        let price = Price::new(dec!(1200.50))?;

        assert_eq!(price.to_string(), "1200.5");

        Ok(())
    }

    #[test]
    fn price_round_trips_as_json_number() -> TestResult {
        let price: Price = serde_json::from_str("350.5")?;

        assert_eq!(serde_json::to_string(&price)?, "350.5");

        Ok(())
    }

    #[test]
    fn negative_json_price_is_rejected() {
        assert!(serde_json::from_str::<Price>("-3").is_err());
    }
}
