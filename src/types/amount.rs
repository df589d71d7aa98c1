// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Exact smallest-unit amount type

use alloy_primitives::{I256, U256};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An exact currency amount in smallest units.
///
/// This is the integer representation of an amount scaled by 10^decimals for
/// its currency: cents for USD, micro-units for USDC. The backing integer is
/// a signed 256-bit value, wide enough for 77 decimal digits, so no
/// representable currency amount loses precision and nothing ever routes
/// through floating point.
///
/// The currency itself is not part of the type; callers pair a
/// `SmallestUnits` with a registered currency code when converting or
/// formatting (see [`from_smallest_units`](crate::from_smallest_units)).
///
/// # Examples
///
/// ```
/// use centavo::{from_smallest_units, SmallestUnits};
///
/// // $10.50 in cents
/// let amount = SmallestUnits::from(1050i64);
/// assert_eq!(from_smallest_units(amount, "USD").unwrap(), "10.50");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SmallestUnits(I256);

impl SmallestUnits {
    /// Zero amount
    pub const ZERO: Self = Self(I256::ZERO);

    /// Create a new amount from a signed 256-bit integer
    pub const fn new(amount: I256) -> Self {
        Self(amount)
    }

    /// Get the inner I256 value
    pub const fn as_i256(&self) -> I256 {
        self.0
    }

    /// Whether the amount is negative
    pub fn is_negative(&self) -> bool {
        self.0.is_negative()
    }

    /// Absolute value as an unsigned magnitude
    pub fn unsigned_abs(&self) -> U256 {
        self.0.unsigned_abs()
    }
}

impl From<I256> for SmallestUnits {
    fn from(value: I256) -> Self {
        Self(value)
    }
}

impl From<i64> for SmallestUnits {
    fn from(value: i64) -> Self {
        // A 64-bit value always fits in 256 bits
        Self(I256::try_from(value).expect("i64 fits in I256"))
    }
}

impl std::fmt::Display for SmallestUnits {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Serialized as an exact decimal string rather than a JSON number: JSON has
// no arbitrary-precision integer, and the upstream wire format carries
// smallest-unit amounts as strings.
impl Serialize for SmallestUnits {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for SmallestUnits {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        I256::from_dec_str(&raw)
            .map(Self)
            .map_err(serde::de::Error::custom)
    }
}
