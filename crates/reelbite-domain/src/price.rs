//! Food price parsing.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Non-negative, finite price of a food item in the store currency.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Price(f64);

/// Error returned when a value is not a valid [`Price`].
#[derive(Debug, Error, PartialEq)]
pub enum InvalidPrice {
    #[error("price is not a number: {0:?}")]
    NotANumber(String),
    #[error("price must be finite")]
    NotFinite,
    #[error("price must not be negative")]
    Negative,
}

impl Price {
    pub const ZERO: Self = Self(0.0);

    pub fn new(value: f64) -> Result<Self, InvalidPrice> {
        if !value.is_finite() {
            return Err(InvalidPrice::NotFinite);
        }
        if value < 0.0 {
            return Err(InvalidPrice::Negative);
        }
        Ok(Self(value))
    }

    /// Parse a form field. A missing or blank field means a free item.
    pub fn from_form_field(raw: Option<&str>) -> Result<Self, InvalidPrice> {
        match raw.map(str::trim) {
            None | Some("") => Ok(Self::ZERO),
            Some(s) => s.parse(),
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl FromStr for Price {
    type Err = InvalidPrice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: f64 = s
            .trim()
            .parse()
            .map_err(|_| InvalidPrice::NotANumber(s.to_owned()))?;
        Self::new(value)
    }
}

impl TryFrom<f64> for Price {
    type Error = InvalidPrice;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Price> for f64 {
    fn from(price: Price) -> Self {
        price.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}
