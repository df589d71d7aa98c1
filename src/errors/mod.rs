// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for the centavo library.
//!
//! Each concern has its own error type for fine-grained handling:
//!
//! - [`UnknownCurrencyError`] - registry lookups for unregistered codes
//! - [`AmountError`] - amount conversion and parsing failures
//! - [`UnknownNetworkError`] - network key parsing failures
//!
//! [`CentavoError`] unifies the three for callers that don't need to
//! distinguish error sources; all module errors convert into it via `From`,
//! so `?` propagates naturally.
//!
//! Every error is returned synchronously at the point of the offending
//! call. Nothing is retried and no partial result is ever produced.

mod amount;
mod network;
mod registry;

pub use amount::AmountError;
pub use network::UnknownNetworkError;
pub use registry::UnknownCurrencyError;

/// Unified error type for all centavo operations.
///
/// # Examples
///
/// ```
/// use centavo::{decimals_for, to_smallest_units, CentavoError};
///
/// fn cents(input: &str) -> Result<(), CentavoError> {
///     let decimals = decimals_for("USD")?;
///     let amount = to_smallest_units(input, "USD")?;
///     println!("{amount} ({decimals})");
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CentavoError {
    /// Error from a currency registry lookup.
    #[error("Currency registry error: {0}")]
    Registry(#[from] UnknownCurrencyError),

    /// Error from amount conversion or parsing.
    #[error("Amount error: {0}")]
    Amount(#[from] AmountError),

    /// Error from network key parsing.
    #[error("Network error: {0}")]
    Network(#[from] UnknownNetworkError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_conversions() {
        let registry_err = UnknownCurrencyError::new("ZZZZ");
        let unified: CentavoError = registry_err.into();
        assert!(matches!(unified, CentavoError::Registry(_)));

        let amount_err = AmountError::invalid_amount("abc");
        let unified: CentavoError = amount_err.into();
        assert!(matches!(unified, CentavoError::Amount(_)));

        let network_err = UnknownNetworkError::new("BITCOIN");
        let unified: CentavoError = network_err.into();
        assert!(matches!(unified, CentavoError::Network(_)));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            UnknownCurrencyError::new("ZZZZ").to_string(),
            "Unknown currency code: ZZZZ"
        );
        assert_eq!(
            AmountError::precision_loss("10.999", 2).to_string(),
            "Amount \"10.999\" exceeds 2 decimal places"
        );
        assert_eq!(
            UnknownNetworkError::new("BITCOIN").to_string(),
            "Unknown network: BITCOIN"
        );
    }
}
