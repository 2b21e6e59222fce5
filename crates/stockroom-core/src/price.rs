//! # Price Module
//!
//! Provides the `Price` type: the canonical decimal representation for
//! product prices.
//!
//! ## Why Integer Cents?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                         │
//! │                                                                     │
//! │  In floating point:                                                 │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                       │
//! │                                                                     │
//! │  Price equality must be EXACT: a product stored at 30 has to be    │
//! │  found again by the query value "30 ", "30.00", or 30.             │
//! │                                                                     │
//! │  OUR SOLUTION: Integer Cents                                        │
//! │    Every input form normalizes to the same i64 cents value:        │
//! │                                                                     │
//! │      30        (integer, whole units)  ──►  3000                   │
//! │      "30 "     (string, padded)        ──►  3000                   │
//! │      "30.00"   (decimal string)        ──►  3000                   │
//! │                                                                     │
//! │    Equality and queries compare cents, so they always agree.       │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use stockroom_core::price::Price;
//!
//! // Create from cents (preferred)
//! let price = Price::from_cents(1250); // 12.50
//!
//! // Or from whole currency units
//! let flat = Price::from_units(30); // 30.00
//!
//! // Or normalize a string at the boundary
//! let parsed: Price = " 30 ".parse().unwrap();
//! assert_eq!(parsed, flat);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::de;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ValidationError;

// =============================================================================
// Price Type
// =============================================================================

/// A product price in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: lets validation report a negative price instead of
///   silently wrapping; stored values are constrained to >= 0
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **String serde form**: serializes as a decimal string ("12.50") so JSON
///   payloads never round-trip through floats
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(transparent))]
pub struct Price(i64);

impl Price {
    /// Creates a Price from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use stockroom_core::price::Price;
    ///
    /// let price = Price::from_cents(1250); // 12.50
    /// assert_eq!(price.cents(), 1250);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Price(cents)
    }

    /// Creates a Price from whole currency units.
    ///
    /// This is the normalization target for integer-supplied prices:
    /// `30` means thirty units, not thirty cents.
    ///
    /// ## Example
    /// ```rust
    /// use stockroom_core::price::Price;
    ///
    /// let price = Price::from_units(30);
    /// assert_eq!(price.cents(), 3000);
    /// ```
    #[inline]
    pub const fn from_units(units: i64) -> Self {
        Price(units * 100)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the whole-unit portion (e.g. 12 for 12.50).
    #[inline]
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the fractional cents portion, always 0-99.
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Zero price.
    #[inline]
    pub const fn zero() -> Self {
        Price(0)
    }

    /// Checks whether the product costs nothing.
    #[inline]
    pub const fn is_free(&self) -> bool {
        self.0 == 0
    }

    /// Normalizes a float to cents, rejecting anything that is not exact at
    /// cent precision (12.505, NaN, infinities).
    fn try_from_f64(value: f64) -> Result<Self, ValidationError> {
        let cents = value * 100.0;
        if !cents.is_finite() {
            return Err(ValidationError::invalid_format(
                "price",
                "not a finite number",
            ));
        }

        let rounded = cents.round();
        if (cents - rounded).abs() > 1e-6 {
            return Err(ValidationError::invalid_format(
                "price",
                "more than two fractional digits",
            ));
        }
        if rounded < i64::MIN as f64 || rounded > i64::MAX as f64 {
            return Err(ValidationError::invalid_format("price", "amount too large"));
        }

        Ok(Price(rounded as i64))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Canonical decimal rendering: always two fractional digits ("30.00").
impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.units().abs(), self.cents_part())
    }
}

/// Default price is zero.
impl Default for Price {
    fn default() -> Self {
        Price::zero()
    }
}

/// Boundary normalization for string-supplied prices.
///
/// Accepts optional surrounding whitespace, an optional sign, and up to two
/// fractional digits: `"30"`, `" 30 "`, `"12.50"`, `"0.5"`, `"12."`, `".5"`.
/// Everything else is a validation error, including sub-cent precision
/// (`"12.505"`), which cannot be represented in cents.
impl FromStr for Price {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        if raw.is_empty() {
            return Err(ValidationError::required("price"));
        }

        let (negative, unsigned) = match raw.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, raw.strip_prefix('+').unwrap_or(raw)),
        };

        let (whole, frac) = match unsigned.split_once('.') {
            Some((w, f)) => (w, f),
            None => (unsigned, ""),
        };

        if whole.is_empty() && frac.is_empty() {
            return Err(ValidationError::invalid_format(
                "price",
                "not a decimal number",
            ));
        }
        if !whole.chars().all(|c| c.is_ascii_digit())
            || !frac.chars().all(|c| c.is_ascii_digit())
        {
            return Err(ValidationError::invalid_format(
                "price",
                "not a decimal number",
            ));
        }
        if frac.len() > 2 {
            return Err(ValidationError::invalid_format(
                "price",
                "more than two fractional digits",
            ));
        }

        let whole_cents = if whole.is_empty() {
            0
        } else {
            whole
                .parse::<i64>()
                .ok()
                .and_then(|units| units.checked_mul(100))
                .ok_or_else(|| ValidationError::invalid_format("price", "amount too large"))?
        };

        // "5" means 50 cents, "05" means 5 cents
        let frac_cents = match frac.len() {
            0 => 0,
            1 => frac.parse::<i64>().unwrap_or(0) * 10,
            _ => frac.parse::<i64>().unwrap_or(0),
        };

        let cents = whole_cents
            .checked_add(frac_cents)
            .ok_or_else(|| ValidationError::invalid_format("price", "amount too large"))?;

        Ok(Price(if negative { -cents } else { cents }))
    }
}

/// Prices serialize as decimal strings so JSON payloads stay exact.
impl Serialize for Price {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

/// Prices deserialize from any of the accepted input forms:
/// integer (whole units), float (exact at cent precision), or string.
impl<'de> Deserialize<'de> for Price {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct PriceVisitor;

        impl<'de> de::Visitor<'de> for PriceVisitor {
            type Value = Price;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a price as a decimal string or number")
            }

            fn visit_i64<E>(self, value: i64) -> Result<Price, E>
            where
                E: de::Error,
            {
                value
                    .checked_mul(100)
                    .map(Price::from_cents)
                    .ok_or_else(|| E::custom("price amount too large"))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Price, E>
            where
                E: de::Error,
            {
                i64::try_from(value)
                    .ok()
                    .and_then(|units| units.checked_mul(100))
                    .map(Price::from_cents)
                    .ok_or_else(|| E::custom("price amount too large"))
            }

            fn visit_f64<E>(self, value: f64) -> Result<Price, E>
            where
                E: de::Error,
            {
                Price::try_from_f64(value).map_err(E::custom)
            }

            fn visit_str<E>(self, value: &str) -> Result<Price, E>
            where
                E: de::Error,
            {
                value.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_any(PriceVisitor)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
