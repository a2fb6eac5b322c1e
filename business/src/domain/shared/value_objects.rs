use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Opaque identifier assigned by the catalog when an item is created.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemId(String);

impl ItemId {
    /// Creates a new ItemId from any type that can be converted into a String.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the inner string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ItemId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PriceError {
    #[error("price.negative")]
    Negative,
    #[error("price.not_finite")]
    NotFinite,
    #[error("price.malformed")]
    Malformed,
}

static PRICE_INPUT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d*\.?\d{0,2}$").expect("price pattern is valid"));

/// Non-negative amount stored as integer cents.
///
/// Currency-agnostic. Serialized as a JSON number with at most two decimals
/// (`89.99`, or `10` for whole amounts) so payloads stay stable across encodes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price(i64);

impl Price {
    pub const ZERO: Price = Price(0);

    pub fn from_cents(cents: i64) -> Result<Self, PriceError> {
        if cents < 0 {
            return Err(PriceError::Negative);
        }
        Ok(Self(cents))
    }

    /// Rounds a decimal amount to the nearest cent.
    pub fn from_decimal(value: f64) -> Result<Self, PriceError> {
        if !value.is_finite() || value.abs() > (i64::MAX / 100) as f64 {
            return Err(PriceError::NotFinite);
        }
        if value < 0.0 {
            return Err(PriceError::Negative);
        }
        Ok(Self((value * 100.0).round() as i64))
    }

    /// Parses user input such as `"15"`, `"15.9"` or `".99"`.
    pub fn parse(input: &str) -> Result<Self, PriceError> {
        let input = input.trim();
        if input.starts_with('-') {
            return Err(PriceError::Negative);
        }
        if input.is_empty() || input == "." || !PRICE_INPUT.is_match(input) {
            return Err(PriceError::Malformed);
        }

        let (whole, fraction) = input.split_once('.').unwrap_or((input, ""));
        let whole: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| PriceError::NotFinite)?
        };
        let fraction: i64 = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<i64>().map_err(|_| PriceError::Malformed)? * 10,
            _ => fraction.parse().map_err(|_| PriceError::Malformed)?,
        };

        whole
            .checked_mul(100)
            .and_then(|cents| cents.checked_add(fraction))
            .map(Self)
            .ok_or(PriceError::NotFinite)
    }

    pub fn cents(&self) -> i64 {
        self.0
    }

    pub fn as_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    pub fn times(&self, quantity: u32) -> Price {
        Price(self.0.saturating_mul(i64::from(quantity)))
    }
}

impl std::ops::Add for Price {
    type Output = Price;

    fn add(self, rhs: Price) -> Price {
        Price(self.0.saturating_add(rhs.0))
    }
}

impl std::iter::Sum for Price {
    fn sum<I: Iterator<Item = Price>>(iter: I) -> Price {
        iter.fold(Price::ZERO, |acc, price| acc + price)
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0 % 100 == 0 {
            serializer.serialize_i64(self.0 / 100)
        } else {
            serializer.serialize_f64(self.as_f64())
        }
    }
}

struct PriceVisitor;

impl serde::de::Visitor<'_> for PriceVisitor {
    type Value = Price;

    fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("a non-negative number or numeric string")
    }

    fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<Price, E> {
        v.checked_mul(100)
            .ok_or_else(|| E::custom(PriceError::NotFinite))
            .and_then(|cents| Price::from_cents(cents).map_err(E::custom))
    }

    fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<Price, E> {
        i64::try_from(v)
            .map_err(|_| E::custom(PriceError::NotFinite))
            .and_then(|v| self.visit_i64(v))
    }

    fn visit_f64<E: serde::de::Error>(self, v: f64) -> Result<Price, E> {
        Price::from_decimal(v).map_err(E::custom)
    }

    fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<Price, E> {
        Price::parse(v).map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(PriceVisitor)
    }
}
