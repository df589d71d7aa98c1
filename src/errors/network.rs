//! Error type for network key parsing.

/// A raw string does not name a known network.
///
/// Parsing trims and uppercases its input before the membership check, so
/// this error means the normalized form is not one of the supported keys.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown network: {network}")]
pub struct UnknownNetworkError {
    /// The input that failed to parse
    pub network: String,
}

impl UnknownNetworkError {
    /// Create an error for the given input.
    pub fn new(network: impl Into<String>) -> Self {
        UnknownNetworkError {
            network: network.into(),
        }
    }
}
