//! Properties of the bounded numeric value types.

#![cfg(test)]

use primitive_types::U256;
use serde::{Deserialize, Serialize};
use signet_unit::{Int, NumericError, Uint};

fn int(s: &str) -> Int {
    s.parse().unwrap()
}

fn uint(s: &str) -> Uint {
    s.parse().unwrap()
}

const MAX_DEC: &str =
    "115792089237316195423570985008687907853269984665640564039457584007913129639935";

#[test]
fn decimal_strings_round_trip() {
    for s in [
        "0",
        "1",
        "-1",
        "99999999999999999999999999999999",
        "-340282366920938463463374607431768211455",
        MAX_DEC,
    ] {
        assert_eq!(int(s).to_string(), s);
    }
    for s in ["0", "7", MAX_DEC] {
        assert_eq!(uint(s).to_string(), s);
    }
}

#[test]
fn additive_inverse_law_holds_within_bounds() {
    let pairs = [
        ("0", "0"),
        ("1", "-1"),
        ("123456789123456789", "987654321987654321"),
        ("-5", "3"),
    ];
    for (a, b) in pairs {
        let a = int(a);
        let b = int(b);
        assert_eq!(a.add(&b).unwrap().sub(&b).unwrap(), a);
    }
}

#[test]
fn intermediate_overflow_is_range_error_not_wrap() {
    let max = Int::new(U256::MAX);
    assert!(matches!(
        max.add(&Int::one()).unwrap_err(),
        NumericError::Range { .. }
    ));
    // A wrapped result would have produced a small value; the law must fail
    // loudly instead.
    assert!(matches!(
        max.mul(&int("2")).unwrap_err(),
        NumericError::Range { .. }
    ));
}

#[test]
fn uint_rejects_negative_numerals_with_sign_error() {
    for s in ["-1", "-42", "-99999999999999999999999999999999999999999999"] {
        assert!(matches!(
            s.parse::<Uint>().unwrap_err(),
            NumericError::Sign { .. }
        ));
    }
}

#[test]
fn zero_and_negation_predicates() {
    assert!(int("0").is_zero());
    assert!(int("-5").is_negative());
    assert_eq!(int("-5").abs(), int("5"));
    assert_eq!(int("-5").neg(), int("5"));
    assert_eq!(int("5").neg(), int("-5"));
}

#[test]
fn division_truncates_toward_zero() {
    assert_eq!(int("7").div(&int("2")).unwrap(), int("3"));
    assert_eq!(int("-7").div(&int("2")).unwrap(), int("-3"));
    assert_eq!(int("-7").rem(&int("2")).unwrap(), int("-1"));
    // (a/b)*b + a%b == a under truncation
    let a = int("-7");
    let b = int("2");
    let rebuilt = a.div(&b).unwrap().mul(&b).unwrap().add(&a.rem(&b).unwrap()).unwrap();
    assert_eq!(rebuilt, a);
}

#[test]
fn division_by_zero_is_typed() {
    assert_eq!(
        int("7").div(&Int::zero()).unwrap_err(),
        NumericError::DivideByZero
    );
    assert_eq!(
        uint("7").rem(&Uint::zero()).unwrap_err(),
        NumericError::DivideByZero
    );
}

#[test]
fn pow_overflow_is_range_error() {
    assert!(matches!(
        int("2").pow(&uint("256")).unwrap_err(),
        NumericError::Range { .. }
    ));
    // 2^255 still fits
    assert!(int("2").pow(&uint("255")).is_ok());
}

#[test]
fn unsigned_bridges() {
    assert_eq!(int("-42").abs_uint(), uint("42"));
    assert_eq!(uint("42").to_int(), int("42"));
}

#[test]
fn decimal_bridge_scales_by_eighteen_places() {
    let dec = int("7").to_dec().unwrap();
    assert_eq!(dec.to_string(), "7.000000000000000000");
    assert_eq!(uint("7").to_dec().unwrap(), dec);
    // Scaling the maximum overflows the numerator bound
    assert!(matches!(
        Int::new(U256::MAX).to_dec().unwrap_err(),
        NumericError::Range { .. }
    ));
}

#[test]
fn amounts_survive_structural_transport() {
    // The shape token amounts actually travel in: a serde struct inside a
    // message payload.
    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Payload {
        amount: Uint,
        delta: Int,
    }

    let payload = Payload {
        amount: uint(MAX_DEC),
        delta: int("-12345"),
    };
    let wire = serde_json::to_value(&payload).unwrap();
    assert_eq!(wire["amount"], MAX_DEC);
    assert_eq!(wire["delta"], "-12345");

    let back: Payload = serde_json::from_value(wire).unwrap();
    assert_eq!(back, payload);
}

#[test]
fn base_and_alphabet_parsing() {
    assert_eq!(
        Int::from_str_radix("ff", 16, signet_unit::DEFAULT_ALPHABET, false).unwrap(),
        int("255")
    );
    assert_eq!(
        Uint::from_str_radix("1010", 2, signet_unit::DEFAULT_ALPHABET, false).unwrap(),
        uint("10")
    );
    // Case-insensitive by default
    assert_eq!(
        Int::from_str_radix("AbCd", 16, signet_unit::DEFAULT_ALPHABET, false).unwrap(),
        int("43981")
    );
    // Integral targets only
    assert!(matches!(
        Int::from_str_radix("1.0", 10, signet_unit::DEFAULT_ALPHABET, false).unwrap_err(),
        NumericError::Format { .. }
    ));
}
