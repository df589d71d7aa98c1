// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for amount conversion and parsing.

use super::UnknownCurrencyError;

/// Errors that can occur when converting amounts to or from smallest units.
///
/// Conversion is all-or-nothing: an operation either returns an exact value
/// or fails with one of these variants. Nothing is silently truncated or
/// rounded on the conversion path.
///
/// # Examples
///
/// ```
/// use centavo::{to_smallest_units, AmountError};
///
/// match to_smallest_units("10.999", "USD") {
///     Err(AmountError::PrecisionLoss { decimals, .. }) => {
///         eprintln!("USD only carries {decimals} decimals");
///     }
///     other => panic!("expected precision loss, got {other:?}"),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AmountError {
    /// The currency code is not in the registry.
    #[error(transparent)]
    UnknownCurrency(#[from] UnknownCurrencyError),

    /// The input does not match the amount grammar `[-]?digits(.digits)?`,
    /// or a numeric input was NaN or infinite.
    #[error("Invalid amount: {input:?}")]
    InvalidAmount {
        /// The offending input
        input: String,
    },

    /// The fractional part carries more non-zero digits than the currency's
    /// decimals allow.
    ///
    /// Excess digits that are all zero are accepted, since they carry no
    /// magnitude; any non-zero excess digit is rejected rather than
    /// truncated.
    #[error("Amount {input:?} exceeds {decimals} decimal places")]
    PrecisionLoss {
        /// The offending input
        input: String,
        /// The currency's registered decimals
        decimals: u8,
    },

    /// The amount does not fit in a signed 256-bit integer.
    #[error("Amount {input:?} is out of range")]
    AmountOutOfRange {
        /// The offending input
        input: String,
    },
}

impl AmountError {
    /// Create an `InvalidAmount` error.
    pub fn invalid_amount(input: impl Into<String>) -> Self {
        AmountError::InvalidAmount {
            input: input.into(),
        }
    }

    /// Create a `PrecisionLoss` error.
    pub fn precision_loss(input: impl Into<String>, decimals: u8) -> Self {
        AmountError::PrecisionLoss {
            input: input.into(),
            decimals,
        }
    }

    /// Create an `AmountOutOfRange` error.
    pub fn out_of_range(input: impl Into<String>) -> Self {
        AmountError::AmountOutOfRange {
            input: input.into(),
        }
    }
}
