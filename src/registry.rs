//! Static currency registry
//!
//! Supported stablecoins and fiat currencies live in two `const` tables,
//! frozen for the process lifetime. There is no runtime registration API:
//! adding a currency is a data edit here.
//!
//! The same stablecoin code may appear on several networks. To issue an
//! existing currency on another network, add a separate entry with the same
//! code (entries for one code must agree on decimals):
//!
//! ```text
//! StablecoinCurrency::new("USDT", "Tether USD", NetworkKey::Ethereum, CurrencyDecimals::STABLECOIN)
//! ```

use serde::Serialize;

use crate::errors::UnknownCurrencyError;
use crate::network::NetworkKey;
use crate::types::CurrencyDecimals;

/// A stablecoin entry in the registry.
///
/// Stablecoins are network-bound tokens; they carry a label but no flag
/// glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StablecoinCurrency {
    /// Currency code, e.g. `USDC`
    pub code: &'static str,
    /// Human-readable label, e.g. `Circle USD`
    pub label: &'static str,
    /// Network this entry is issued on
    pub network: NetworkKey,
    /// Fractional digits of the smallest unit
    pub decimals: CurrencyDecimals,
}

impl StablecoinCurrency {
    const fn new(
        code: &'static str,
        label: &'static str,
        network: NetworkKey,
        decimals: CurrencyDecimals,
    ) -> Self {
        Self {
            code,
            label,
            network,
            decimals,
        }
    }
}

/// A fiat currency entry in the registry.
///
/// Fiat currencies carry a flag glyph for display and are not bound to a
/// network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FiatCurrency {
    /// Currency code, e.g. `USD`
    pub code: &'static str,
    /// Human-readable label
    pub label: &'static str,
    /// Flag glyph shown when formatting with a symbol
    pub flag: &'static str,
    /// Fractional digits of the smallest unit
    pub decimals: CurrencyDecimals,
}

impl FiatCurrency {
    const fn new(
        code: &'static str,
        label: &'static str,
        flag: &'static str,
        decimals: CurrencyDecimals,
    ) -> Self {
        Self {
            code,
            label,
            flag,
            decimals,
        }
    }
}

/// Supported stablecoins, one entry per (code, network) pair.
pub const STABLECOINS: &[StablecoinCurrency] = &[
    StablecoinCurrency::new(
        "USDC",
        "Circle USD",
        NetworkKey::Polygon,
        CurrencyDecimals::STABLECOIN,
    ),
    StablecoinCurrency::new(
        "USDT",
        "Tether USD",
        NetworkKey::Polygon,
        CurrencyDecimals::STABLECOIN,
    ),
    StablecoinCurrency::new(
        "USDC",
        "Circle USD",
        NetworkKey::Stellar,
        CurrencyDecimals::STABLECOIN,
    ),
];

/// Supported fiat currencies.
pub const FIAT_CURRENCIES: &[FiatCurrency] = &[
    FiatCurrency::new("USD", "USD", "\u{1F1FA}\u{1F1F8}", CurrencyDecimals::FIAT),
    FiatCurrency::new("MXN", "MXN", "\u{1F1F2}\u{1F1FD}", CurrencyDecimals::FIAT),
    FiatCurrency::new("BRL", "BRL", "\u{1F1E7}\u{1F1F7}", CurrencyDecimals::FIAT),
    FiatCurrency::new("ARS", "ARS", "\u{1F1E6}\u{1F1F7}", CurrencyDecimals::FIAT),
    FiatCurrency::new("COP", "COP", "\u{1F1E8}\u{1F1F4}", CurrencyDecimals::FIAT),
];

/// Whether a code exactly matches a registered currency.
///
/// The check is case-sensitive: `"usdc"` is not valid.
///
/// # Examples
///
/// ```
/// use centavo::is_valid_currency;
///
/// assert!(is_valid_currency("USDC"));
/// assert!(is_valid_currency("USD"));
/// assert!(!is_valid_currency("ZZZZ"));
/// ```
pub fn is_valid_currency(code: &str) -> bool {
    find_stablecoin(code).is_some() || find_fiat(code).is_some()
}

/// Look up the decimals for a registered currency code.
///
/// # Examples
///
/// ```
/// use centavo::decimals_for;
///
/// assert_eq!(decimals_for("USD").unwrap().as_u8(), 2);
/// assert_eq!(decimals_for("USDC").unwrap().as_u8(), 6);
/// assert!(decimals_for("ZZZZ").is_err());
/// ```
pub fn decimals_for(code: &str) -> Result<CurrencyDecimals, UnknownCurrencyError> {
    if let Some(entry) = find_stablecoin(code) {
        return Ok(entry.decimals);
    }
    if let Some(entry) = find_fiat(code) {
        return Ok(entry.decimals);
    }
    Err(UnknownCurrencyError::new(code))
}

/// First stablecoin entry for a code, if any.
///
/// A code issued on several networks has several entries; this returns the
/// first. Use [`networks_for`] to see all of them.
pub fn find_stablecoin(code: &str) -> Option<&'static StablecoinCurrency> {
    STABLECOINS.iter().find(|entry| entry.code == code)
}

/// Fiat entry for a code, if any.
pub fn find_fiat(code: &str) -> Option<&'static FiatCurrency> {
    FIAT_CURRENCIES.iter().find(|entry| entry.code == code)
}

/// Flag glyph for a code. Only fiat currencies have one.
pub fn flag_for(code: &str) -> Option<&'static str> {
    find_fiat(code).map(|entry| entry.flag)
}

/// Human-readable label for a code.
pub fn label_for(code: &str) -> Option<&'static str> {
    find_stablecoin(code)
        .map(|entry| entry.label)
        .or_else(|| find_fiat(code).map(|entry| entry.label))
}

/// Networks a stablecoin code is issued on.
///
/// Empty for fiat and unknown codes.
///
/// # Examples
///
/// ```
/// use centavo::{networks_for, NetworkKey};
///
/// let networks: Vec<_> = networks_for("USDC").collect();
/// assert_eq!(networks, vec![NetworkKey::Polygon, NetworkKey::Stellar]);
/// ```
pub fn networks_for(code: &str) -> impl Iterator<Item = NetworkKey> + '_ {
    STABLECOINS
        .iter()
        .filter(move |entry| entry.code == code)
        .map(|entry| entry.network)
}

/// All registered currency codes, stablecoins first, without duplicates.
pub fn supported_codes() -> impl Iterator<Item = &'static str> {
    let mut seen: Vec<&'static str> = Vec::new();
    STABLECOINS
        .iter()
        .map(|entry| entry.code)
        .chain(FIAT_CURRENCIES.iter().map(|entry| entry.code))
        .filter(move |code| {
            if seen.contains(code) {
                false
            } else {
                seen.push(*code);
                true
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validity_is_case_sensitive() {
        assert!(is_valid_currency("USDC"));
        assert!(!is_valid_currency("usdc"));
        assert!(!is_valid_currency("ZZZZ"));
        assert!(!is_valid_currency(""));
    }

    #[test]
    fn test_decimals_lookup() {
        assert_eq!(decimals_for("USDT").unwrap(), CurrencyDecimals::STABLECOIN);
        assert_eq!(decimals_for("COP").unwrap(), CurrencyDecimals::FIAT);

        let err = decimals_for("ZZZZ").unwrap_err();
        assert_eq!(err.code, "ZZZZ");
    }

    #[test]
    fn test_decimals_lookup_is_stable() {
        for _ in 0..3 {
            assert_eq!(decimals_for("USD").unwrap().as_u8(), 2);
        }
    }

    #[test]
    fn test_duplicate_codes_agree_on_decimals() {
        for entry in STABLECOINS {
            assert_eq!(
                decimals_for(entry.code).unwrap(),
                entry.decimals,
                "all entries of {} must share one decimals value",
                entry.code
            );
        }
    }

    #[test]
    fn test_multi_network_stablecoin() {
        let networks: Vec<_> = networks_for("USDC").collect();
        assert_eq!(networks, vec![NetworkKey::Polygon, NetworkKey::Stellar]);

        assert_eq!(networks_for("USD").count(), 0);
        assert_eq!(networks_for("ZZZZ").count(), 0);
    }

    #[test]
    fn test_flags_only_on_fiat() {
        assert_eq!(flag_for("USD"), Some("\u{1F1FA}\u{1F1F8}"));
        assert_eq!(flag_for("USDC"), None);
    }

    #[test]
    fn test_labels() {
        assert_eq!(label_for("USDC"), Some("Circle USD"));
        assert_eq!(label_for("USDT"), Some("Tether USD"));
        assert_eq!(label_for("MXN"), Some("MXN"));
        assert_eq!(label_for("ZZZZ"), None);
    }

    #[test]
    fn test_supported_codes_deduplicated() {
        let codes: Vec<_> = supported_codes().collect();
        assert_eq!(
            codes,
            vec!["USDC", "USDT", "USD", "MXN", "BRL", "ARS", "COP"]
        );
    }
}
