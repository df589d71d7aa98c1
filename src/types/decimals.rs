//! Currency decimal precision type

use alloy_primitives::U256;
use serde::{Deserialize, Deserializer, Serialize};

/// Number of fractional digits carried by a currency.
///
/// Fiat currencies use 2 decimals (cents), the supported stablecoins use 6.
/// The range is capped at 18, following the widest token convention in use.
///
/// # Examples
///
/// ```
/// use centavo::CurrencyDecimals;
///
/// let cents = CurrencyDecimals::FIAT;
/// assert_eq!(cents.as_u8(), 2);
///
/// let micro = CurrencyDecimals::STABLECOIN;
/// assert_eq!(micro.as_u8(), 6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct CurrencyDecimals(u8);

impl CurrencyDecimals {
    /// Maximum supported decimals
    pub const MAX: u8 = 18;

    /// Fiat currency decimals (2, i.e. cents)
    pub const FIAT: Self = Self(2);

    /// Stablecoin decimals (6, i.e. micro-units)
    pub const STABLECOIN: Self = Self(6);

    /// Create a new decimal precision value
    ///
    /// Panics at compile time (for `const` uses) or at runtime if `decimals`
    /// exceeds [`Self::MAX`].
    ///
    /// # Examples
    ///
    /// ```
    /// use centavo::CurrencyDecimals;
    ///
    /// let decimals = CurrencyDecimals::new(6);
    /// assert_eq!(decimals.as_u8(), 6);
    /// ```
    pub const fn new(decimals: u8) -> Self {
        assert!(decimals <= Self::MAX, "currency decimals exceed 18");
        Self(decimals)
    }

    /// Get the inner u8 value
    pub const fn as_u8(&self) -> u8 {
        self.0
    }

    /// Exact scale factor for smallest-unit conversion: 10^decimals
    ///
    /// Returned as a [`U256`] so conversions never route through
    /// floating point.
    ///
    /// # Examples
    ///
    /// ```
    /// use alloy_primitives::U256;
    /// use centavo::CurrencyDecimals;
    ///
    /// assert_eq!(CurrencyDecimals::FIAT.scale_factor(), U256::from(100u64));
    /// assert_eq!(
    ///     CurrencyDecimals::STABLECOIN.scale_factor(),
    ///     U256::from(1_000_000u64)
    /// );
    /// ```
    pub fn scale_factor(&self) -> U256 {
        U256::from(10u64).pow(U256::from(self.0))
    }
}

impl<'de> Deserialize<'de> for CurrencyDecimals {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = u8::deserialize(deserializer)?;
        if raw > Self::MAX {
            return Err(serde::de::Error::custom(format!(
                "currency decimals {raw} exceed the maximum of {}",
                Self::MAX
            )));
        }
        Ok(Self(raw))
    }
}

impl std::fmt::Display for CurrencyDecimals {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} decimals", self.0)
    }
}
