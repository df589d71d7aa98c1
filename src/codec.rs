// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Fixed-point conversion between display amounts and smallest units
//!
//! All conversions are exact digit-string arithmetic on 256-bit integers.
//! Nothing in this module routes through floating point: a display amount is
//! split on the decimal point, the fraction is zero-padded to the currency's
//! decimals, and the concatenated digits are parsed as an integer. Rendering
//! is integer division and remainder by 10^decimals.
//!
//! Conversion never truncates: input carrying more non-zero fractional
//! digits than the currency allows fails with
//! [`AmountError::PrecisionLoss`] instead of silently losing magnitude.
//! Rounding exists only in [`format_amount`], where a `precision` override
//! changes how a value is displayed without touching the value itself.

use alloy_primitives::{Sign, I256, U256};

use crate::errors::{AmountError, UnknownCurrencyError};
use crate::registry::{decimals_for, flag_for};
use crate::types::SmallestUnits;

/// Display options for [`format_amount`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FormatOptions {
    /// Append the currency code, and for fiat currencies prepend the flag
    /// glyph.
    pub show_symbol: bool,
    /// Override the registry decimals for display only. More digits than the
    /// registry's are zero-padded; fewer are rounded half away from zero.
    /// The underlying amount is never changed.
    pub precision: Option<u8>,
}

/// Convert a decimal-string amount to exact smallest units.
///
/// The grammar is `[-]?digits(.digits)?` with ASCII digits only. The
/// fractional part is zero-padded to the currency's decimals; excess
/// fractional digits are accepted only when they are all zero, and rejected
/// with [`AmountError::PrecisionLoss`] otherwise.
///
/// # Examples
///
/// ```
/// use centavo::{to_smallest_units, SmallestUnits};
///
/// assert_eq!(
///     to_smallest_units("10.50", "USD").unwrap(),
///     SmallestUnits::from(1050i64)
/// );
/// assert_eq!(
///     to_smallest_units("10.5", "USD").unwrap(),
///     SmallestUnits::from(1050i64)
/// );
/// assert!(to_smallest_units("10.999", "USD").is_err());
/// ```
pub fn to_smallest_units(amount: &str, code: &str) -> Result<SmallestUnits, AmountError> {
    let decimals = decimals_for(code)?;

    let (negative, body) = match amount.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, amount),
    };

    let (int_part, frac_part, has_point) = match body.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part, true),
        None => (body, "", false),
    };

    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(int_part) || (has_point && !all_digits(frac_part)) {
        return Err(AmountError::invalid_amount(amount));
    }

    let width = decimals.as_u8() as usize;
    let (kept, excess) = if frac_part.len() > width {
        frac_part.split_at(width)
    } else {
        (frac_part, "")
    };
    if excess.bytes().any(|b| b != b'0') {
        return Err(AmountError::precision_loss(amount, decimals.as_u8()));
    }

    let mut digits = String::with_capacity(int_part.len() + width);
    digits.push_str(int_part);
    digits.push_str(kept);
    for _ in kept.len()..width {
        digits.push('0');
    }

    let magnitude =
        U256::from_str_radix(&digits, 10).map_err(|_| AmountError::out_of_range(amount))?;
    let sign = if negative {
        Sign::Negative
    } else {
        Sign::Positive
    };
    let value = I256::checked_from_sign_and_abs(sign, magnitude)
        .ok_or_else(|| AmountError::out_of_range(amount))?;

    Ok(SmallestUnits::new(value))
}

/// Convert a numeric amount to exact smallest units.
///
/// Non-finite input (NaN, infinities) fails with
/// [`AmountError::InvalidAmount`]. The float's shortest round-trip decimal
/// rendering goes through [`to_smallest_units`], so representation noise
/// beyond the currency's precision surfaces as
/// [`AmountError::PrecisionLoss`] rather than being silently dropped.
///
/// # Examples
///
/// ```
/// use centavo::{to_smallest_units_f64, SmallestUnits};
///
/// assert_eq!(
///     to_smallest_units_f64(10.5, "USD").unwrap(),
///     SmallestUnits::from(1050i64)
/// );
/// assert!(to_smallest_units_f64(f64::NAN, "USD").is_err());
/// // 0.1 + 0.2 carries float noise past two decimals
/// assert!(to_smallest_units_f64(0.1 + 0.2, "USD").is_err());
/// ```
pub fn to_smallest_units_f64(amount: f64, code: &str) -> Result<SmallestUnits, AmountError> {
    if !amount.is_finite() {
        return Err(AmountError::invalid_amount(amount.to_string()));
    }
    // f64 Display is always positional in Rust, never scientific
    to_smallest_units(&amount.to_string(), code)
}

/// Render smallest units as a plain decimal string.
///
/// The fraction is zero-padded to exactly the currency's decimals; no
/// decimal point is emitted for zero-decimal currencies. Negative amounts
/// carry a single leading `-`, including when the integer part is zero.
///
/// # Examples
///
/// ```
/// use centavo::{from_smallest_units, SmallestUnits};
///
/// assert_eq!(
///     from_smallest_units(SmallestUnits::from(1050i64), "USD").unwrap(),
///     "10.50"
/// );
/// assert_eq!(
///     from_smallest_units(SmallestUnits::from(-5i64), "USD").unwrap(),
///     "-0.05"
/// );
/// ```
pub fn from_smallest_units(
    amount: SmallestUnits,
    code: &str,
) -> Result<String, UnknownCurrencyError> {
    let decimals = decimals_for(code)?;
    Ok(render(
        amount.is_negative(),
        amount.unsigned_abs(),
        decimals.as_u8(),
    ))
}

/// Format smallest units for display.
///
/// See [`FormatOptions`] for the precision override and symbol behavior.
/// Exactly the requested number of fractional digits is always rendered;
/// trailing zeros are never trimmed. Rounding for a reduced precision is
/// half away from zero and affects only the rendered string.
///
/// # Examples
///
/// ```
/// use centavo::{format_amount, FormatOptions, SmallestUnits};
///
/// let amount = SmallestUnits::from(1_000_000i64);
/// let options = FormatOptions {
///     show_symbol: true,
///     ..Default::default()
/// };
/// assert_eq!(format_amount(amount, "USDC", &options).unwrap(), "1.000000 USDC");
///
/// let cents = SmallestUnits::from(1050i64);
/// assert_eq!(
///     format_amount(cents, "USD", &options).unwrap(),
///     "\u{1F1FA}\u{1F1F8} 10.50 USD"
/// );
/// ```
pub fn format_amount(
    amount: SmallestUnits,
    code: &str,
    options: &FormatOptions,
) -> Result<String, UnknownCurrencyError> {
    let registry_decimals = decimals_for(code)?.as_u8();
    let precision = options.precision.unwrap_or(registry_decimals);

    let negative = amount.is_negative();
    let magnitude = amount.unsigned_abs();

    let body = if precision >= registry_decimals {
        let base = render(negative, magnitude, registry_decimals);
        let extra = (precision - registry_decimals) as usize;
        if extra == 0 {
            base
        } else if registry_decimals == 0 {
            format!("{base}.{}", "0".repeat(extra))
        } else {
            format!("{base}{}", "0".repeat(extra))
        }
    } else {
        // Display-only rounding, half away from zero; the sign survives even
        // when the rounded magnitude is zero
        let divisor = U256::from(10u64).pow(U256::from(registry_decimals - precision));
        let (mut quotient, remainder) = magnitude.div_rem(divisor);
        if remainder + remainder >= divisor {
            quotient += U256::ONE;
        }
        render(negative, quotient, precision)
    };

    if !options.show_symbol {
        return Ok(body);
    }
    match flag_for(code) {
        Some(flag) => Ok(format!("{flag} {body} {code}")),
        None => Ok(format!("{body} {code}")),
    }
}

/// Parse user-facing input into exact smallest units.
///
/// Strips, for the named currency, its flag glyph and code token, a leading
/// `$`, comma thousands separators, and whitespace, then delegates to
/// [`to_smallest_units`]. Stripping never invents digits: anything left over
/// that the amount grammar doesn't accept fails with
/// [`AmountError::InvalidAmount`].
///
/// # Examples
///
/// ```
/// use centavo::{parse_amount, SmallestUnits};
///
/// assert_eq!(
///     parse_amount("$1,234.56", "USD").unwrap(),
///     SmallestUnits::from(123_456i64)
/// );
/// assert_eq!(
///     parse_amount("\u{1F1FA}\u{1F1F8} 10.50 USD", "USD").unwrap(),
///     SmallestUnits::from(1050i64)
/// );
/// ```
pub fn parse_amount(input: &str, code: &str) -> Result<SmallestUnits, AmountError> {
    let mut cleaned = input.to_string();
    if let Some(flag) = flag_for(code) {
        cleaned = cleaned.replace(flag, "");
    }
    cleaned = cleaned.replace(code, "");
    cleaned = cleaned.replace(['$', ','], "");
    cleaned.retain(|c| !c.is_whitespace());
    to_smallest_units(&cleaned, code)
}

/// Render a signed magnitude with a fixed number of fractional digits.
fn render(negative: bool, magnitude: U256, decimals: u8) -> String {
    let sign = if negative { "-" } else { "" };
    if decimals == 0 {
        return format!("{sign}{magnitude}");
    }
    let scale = U256::from(10u64).pow(U256::from(decimals));
    let (int_part, frac_part) = magnitude.div_rem(scale);
    let frac_digits = frac_part.to_string();
    format!(
        "{sign}{int_part}.{frac_digits:0>width$}",
        width = decimals as usize
    )
}
