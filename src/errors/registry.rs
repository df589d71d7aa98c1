//! Error type for currency registry lookups.

/// A currency code is not present in the static registry.
///
/// Lookups are exact and case-sensitive: `"usdc"` is unknown even though
/// `"USDC"` is registered.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown currency code: {code}")]
pub struct UnknownCurrencyError {
    /// The code that failed the lookup
    pub code: String,
}

impl UnknownCurrencyError {
    /// Create an error for the given code.
    pub fn new(code: impl Into<String>) -> Self {
        UnknownCurrencyError { code: code.into() }
    }
}
