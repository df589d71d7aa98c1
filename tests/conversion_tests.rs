// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Integration tests for smallest-unit conversion and parsing

use centavo::{
    decimals_for, from_smallest_units, is_valid_currency, parse_amount, to_smallest_units,
    to_smallest_units_f64, AmountError, SmallestUnits,
};

#[test]
fn test_registry_validity() {
    assert!(is_valid_currency("USDC"), "USDC must be registered");
    assert!(is_valid_currency("USDT"));
    for fiat in ["USD", "MXN", "BRL", "ARS", "COP"] {
        assert!(is_valid_currency(fiat), "{fiat} must be registered");
    }
    assert!(!is_valid_currency("ZZZZ"));
    assert!(!is_valid_currency("usdc"), "validity is case-sensitive");
}

#[test]
fn test_decimals_for_registered_currencies() {
    assert_eq!(decimals_for("USD").unwrap().as_u8(), 2);
    assert_eq!(decimals_for("USDC").unwrap().as_u8(), 6);
    assert!(decimals_for("ZZZZ").is_err());
}

#[test]
fn test_conversion_examples() {
    assert_eq!(
        to_smallest_units("10.50", "USD").unwrap(),
        SmallestUnits::from(1050i64)
    );
    assert_eq!(
        to_smallest_units("10.5", "USD").unwrap(),
        SmallestUnits::from(1050i64),
        "short fractions are zero-padded"
    );
    assert_eq!(
        to_smallest_units("1", "USDC").unwrap(),
        SmallestUnits::from(1_000_000i64)
    );
}

#[test]
fn test_precision_loss_is_rejected_not_truncated() {
    let err = to_smallest_units("10.999", "USD").unwrap_err();
    match err {
        AmountError::PrecisionLoss { input, decimals } => {
            assert_eq!(input, "10.999");
            assert_eq!(decimals, 2);
        }
        other => panic!("expected PrecisionLoss, got {other:?}"),
    }

    // Trailing zeros past the registered decimals carry no magnitude
    assert_eq!(
        to_smallest_units("10.500000", "USD").unwrap(),
        SmallestUnits::from(1050i64)
    );
}

#[test]
fn test_malformed_amounts() {
    for bad in ["", "-", "10.", ".5", "12x", "1_000", "0x10", " 10", "10 "] {
        assert!(
            matches!(
                to_smallest_units(bad, "USD"),
                Err(AmountError::InvalidAmount { .. })
            ),
            "{bad:?} must be rejected by the grammar"
        );
    }
}

#[test]
fn test_numeric_input() {
    assert_eq!(
        to_smallest_units_f64(10.5, "USD").unwrap(),
        SmallestUnits::from(1050i64)
    );
    assert!(matches!(
        to_smallest_units_f64(f64::NAN, "USD"),
        Err(AmountError::InvalidAmount { .. })
    ));
    assert!(matches!(
        to_smallest_units_f64(f64::INFINITY, "USD"),
        Err(AmountError::InvalidAmount { .. })
    ));
    // Float noise past the currency's decimals surfaces as precision loss
    assert!(matches!(
        to_smallest_units_f64(0.1 + 0.2, "USD"),
        Err(AmountError::PrecisionLoss { .. })
    ));
}

#[test]
fn test_rendering_examples() {
    assert_eq!(
        from_smallest_units(SmallestUnits::from(1050i64), "USD").unwrap(),
        "10.50"
    );
    assert_eq!(
        from_smallest_units(SmallestUnits::from(1_000_000i64), "USDC").unwrap(),
        "1.000000"
    );
    assert_eq!(
        from_smallest_units(SmallestUnits::from(-5i64), "USD").unwrap(),
        "-0.05",
        "zero integer part still renders the sign"
    );
    assert!(from_smallest_units(SmallestUnits::ZERO, "ZZZZ").is_err());
}

#[test]
fn test_round_trip_examples() {
    for (units, code) in [
        (SmallestUnits::from(0i64), "USD"),
        (SmallestUnits::from(1050i64), "USD"),
        (SmallestUnits::from(-1i64), "USDC"),
        (SmallestUnits::from(123_456_789i64), "USDT"),
    ] {
        let rendered = from_smallest_units(units, code).unwrap();
        assert_eq!(
            to_smallest_units(&rendered, code).unwrap(),
            units,
            "round trip must preserve {rendered} {code}"
        );
    }
}

#[test]
fn test_parse_amount_user_input() {
    assert_eq!(
        parse_amount("$1,234.56", "USD").unwrap(),
        SmallestUnits::from(123_456i64)
    );
    assert_eq!(
        parse_amount("\u{1F1FA}\u{1F1F8} 10.50 USD", "USD").unwrap(),
        SmallestUnits::from(1050i64),
        "formatted output must parse back"
    );
    assert_eq!(
        parse_amount("1.000000 USDC", "USDC").unwrap(),
        SmallestUnits::from(1_000_000i64)
    );
    assert!(matches!(
        parse_amount("ten dollars", "USD"),
        Err(AmountError::InvalidAmount { .. })
    ));
    assert!(matches!(
        parse_amount("1.00", "ZZZZ"),
        Err(AmountError::UnknownCurrency(_))
    ));
}

#[test]
fn test_serde_round_trip_through_wire_format() {
    let units = to_smallest_units("-12.34", "USD").unwrap();
    let json = serde_json::to_string(&units).unwrap();
    assert_eq!(json, "\"-1234\"", "amounts serialize as decimal strings");

    let back: SmallestUnits = serde_json::from_str(&json).unwrap();
    assert_eq!(from_smallest_units(back, "USD").unwrap(), "-12.34");
}
