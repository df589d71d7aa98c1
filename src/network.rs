// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Network identifiers and provider name mapping

use serde::{Deserialize, Serialize};

use crate::errors::UnknownNetworkError;

/// Identifier for a blockchain network a stablecoin is issued on.
///
/// The canonical string form is SCREAMING_SNAKE_CASE (`POLYGON`,
/// `POLYGON_AMOY`, ...), which is also the serde representation.
///
/// # Examples
///
/// ```
/// use centavo::NetworkKey;
///
/// let key = NetworkKey::parse(" polygon ").unwrap();
/// assert_eq!(key, NetworkKey::Polygon);
/// assert_eq!(key.as_str(), "POLYGON");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NetworkKey {
    /// Polygon mainnet
    Polygon,
    /// Polygon Amoy testnet
    PolygonAmoy,
    /// Ethereum mainnet
    Ethereum,
    /// Solana mainnet
    Solana,
    /// Stellar mainnet
    Stellar,
}

impl NetworkKey {
    /// All supported network keys
    pub const ALL: [NetworkKey; 5] = [
        NetworkKey::Polygon,
        NetworkKey::PolygonAmoy,
        NetworkKey::Ethereum,
        NetworkKey::Solana,
        NetworkKey::Stellar,
    ];

    /// Canonical string form of the key
    pub const fn as_str(&self) -> &'static str {
        match self {
            NetworkKey::Polygon => "POLYGON",
            NetworkKey::PolygonAmoy => "POLYGON_AMOY",
            NetworkKey::Ethereum => "ETHEREUM",
            NetworkKey::Solana => "SOLANA",
            NetworkKey::Stellar => "STELLAR",
        }
    }

    /// The payout provider's name for this network.
    ///
    /// The provider predates the MATIC to Polygon rebrand, so the Polygon
    /// keys map to the legacy MATIC names; the other networks are spelled
    /// identically on both sides.
    pub const fn provider_name(&self) -> &'static str {
        match self {
            NetworkKey::Polygon => "MATIC",
            NetworkKey::PolygonAmoy => "MATIC_AMOY",
            NetworkKey::Ethereum => "ETHEREUM",
            NetworkKey::Solana => "SOLANA",
            NetworkKey::Stellar => "STELLAR",
        }
    }

    /// Parse a raw string into a network key.
    ///
    /// Input is trimmed and ASCII-uppercased before the membership check, so
    /// `" polygon "` parses to [`NetworkKey::Polygon`].
    pub fn parse(raw: &str) -> Result<Self, UnknownNetworkError> {
        let normalized = raw.trim().to_ascii_uppercase();
        match normalized.as_str() {
            "POLYGON" => Ok(NetworkKey::Polygon),
            "POLYGON_AMOY" => Ok(NetworkKey::PolygonAmoy),
            "ETHEREUM" => Ok(NetworkKey::Ethereum),
            "SOLANA" => Ok(NetworkKey::Solana),
            "STELLAR" => Ok(NetworkKey::Stellar),
            _ => Err(UnknownNetworkError::new(raw)),
        }
    }
}

impl std::str::FromStr for NetworkKey {
    type Err = UnknownNetworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NetworkKey::parse(s)
    }
}

impl std::fmt::Display for NetworkKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map a network name to the payout provider's naming convention.
///
/// Known keys go through the static alias table; unknown input is returned
/// unchanged so callers forwarding provider-side names keep working.
///
/// # Examples
///
/// ```
/// use centavo::map_network_to_provider;
///
/// assert_eq!(map_network_to_provider("POLYGON"), "MATIC");
/// assert_eq!(map_network_to_provider("SOLANA"), "SOLANA");
/// assert_eq!(map_network_to_provider("FOO_NET"), "FOO_NET");
/// ```
pub fn map_network_to_provider(network: &str) -> String {
    match NetworkKey::parse(network) {
        Ok(key) => key.provider_name().to_string(),
        Err(_) => {
            tracing::debug!(
                network = %network,
                "No provider mapping for network, passing through unchanged"
            );
            network.to_string()
        }
    }
}
