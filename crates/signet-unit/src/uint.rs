//! # Unsigned Bounded Integer
//!
//! An unsigned integer that fits in 256 bits. Negative input is rejected
//! with [`NumericError::Sign`] before the bound is even considered, and an
//! operation whose mathematical result would be negative fails the same way.

use std::fmt;
use std::str::FromStr;

use primitive_types::U256;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::dec::Dec;
use crate::error::NumericError;
use crate::int::Int;
use crate::parse::parse_numeral;
use crate::{DEFAULT_ALPHABET, DEFAULT_BASE};

/// An unsigned integer with invariants `value >= 0` and `bit_len <= 256`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Uint(U256);

impl Uint {
    /// The zero value.
    #[must_use]
    pub fn zero() -> Self {
        Self(U256::zero())
    }

    /// The value one.
    #[must_use]
    pub fn one() -> Self {
        Self(U256::one())
    }

    /// Creates a value from a raw 256-bit word.
    #[must_use]
    pub fn new(value: U256) -> Self {
        Self(value)
    }

    /// Creates a value from a native unsigned integer.
    #[must_use]
    pub fn from_u128(value: u128) -> Self {
        Self(U256::from(value))
    }

    /// Parses a numeral with an explicit base and digit alphabet.
    ///
    /// Defaults used by [`FromStr`] are base 10, the alphabet
    /// [`DEFAULT_ALPHABET`], case-insensitive.
    ///
    /// # Errors
    ///
    /// - [`NumericError::Format`] for non-integral or malformed text.
    /// - [`NumericError::Sign`] for a negative numeral. Checked before the
    ///   bound, so `-2^300` reports the sign violation, not the range one.
    /// - [`NumericError::Range`] when the value exceeds `2^256 - 1`.
    pub fn from_str_radix(
        input: &str,
        base: u32,
        alphabet: &str,
        case_sensitive: bool,
    ) -> Result<Self, NumericError> {
        // Sign-before-bound: a negative numeral reports the sign violation
        // even when its magnitude would also be out of range. "-0" is zero.
        if let Some(rest) = input.strip_prefix('-') {
            return match parse_numeral(rest, base, alphabet, case_sensitive) {
                Ok(parsed) if parsed.magnitude.is_zero() => Ok(Self::zero()),
                Ok(_) | Err(NumericError::Range { .. }) => Err(NumericError::Sign {
                    value: input.to_string(),
                }),
                Err(other) => Err(other),
            };
        }
        let parsed = parse_numeral(input, base, alphabet, case_sensitive)?;
        Ok(Self(parsed.magnitude))
    }

    /// The raw 256-bit word.
    #[must_use]
    pub fn to_u256(&self) -> U256 {
        self.0
    }

    /// Returns true if the value is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Addition.
    ///
    /// # Errors
    ///
    /// [`NumericError::Range`] if the result exceeds `2^256 - 1`.
    pub fn add(&self, other: &Self) -> Result<Self, NumericError> {
        self.0
            .checked_add(other.0)
            .map(Self)
            .ok_or_else(|| NumericError::Range {
                value: format!("{} + {}", self, other),
            })
    }

    /// Subtraction.
    ///
    /// # Errors
    ///
    /// [`NumericError::Sign`] if the mathematical result is negative.
    pub fn sub(&self, other: &Self) -> Result<Self, NumericError> {
        self.0
            .checked_sub(other.0)
            .map(Self)
            .ok_or_else(|| NumericError::Sign {
                value: format!("{} - {}", self, other),
            })
    }

    /// Multiplication.
    ///
    /// # Errors
    ///
    /// [`NumericError::Range`] if the result exceeds `2^256 - 1`.
    pub fn mul(&self, other: &Self) -> Result<Self, NumericError> {
        self.0
            .checked_mul(other.0)
            .map(Self)
            .ok_or_else(|| NumericError::Range {
                value: format!("{} * {}", self, other),
            })
    }

    /// Division, truncating.
    ///
    /// # Errors
    ///
    /// [`NumericError::DivideByZero`] if `other` is zero.
    pub fn div(&self, other: &Self) -> Result<Self, NumericError> {
        if other.is_zero() {
            return Err(NumericError::DivideByZero);
        }
        Ok(Self(self.0 / other.0))
    }

    /// Remainder.
    ///
    /// # Errors
    ///
    /// [`NumericError::DivideByZero`] if `other` is zero.
    pub fn rem(&self, other: &Self) -> Result<Self, NumericError> {
        if other.is_zero() {
            return Err(NumericError::DivideByZero);
        }
        Ok(Self(self.0 % other.0))
    }

    /// Exponentiation.
    ///
    /// # Errors
    ///
    /// [`NumericError::Range`] if the result exceeds `2^256 - 1`.
    pub fn pow(&self, exponent: &Self) -> Result<Self, NumericError> {
        self.0
            .checked_pow(exponent.0)
            .map(Self)
            .ok_or_else(|| NumericError::Range {
                value: format!("{} ^ {}", self, exponent),
            })
    }

    /// Bridges to the signed type. Infallible: the magnitude already fits.
    #[must_use]
    pub fn to_int(&self) -> Int {
        Int::new(self.0)
    }

    /// Bridges to the fixed-point decimal type.
    ///
    /// # Errors
    ///
    /// [`NumericError::Range`] if the scaled numerator exceeds the bound.
    pub fn to_dec(&self) -> Result<Dec, NumericError> {
        Dec::new(&self.to_int())
    }
}

impl fmt::Display for Uint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Uint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Uint({})", self)
    }
}

impl FromStr for Uint {
    type Err = NumericError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_radix(s, DEFAULT_BASE, DEFAULT_ALPHABET, false)
    }
}

impl Serialize for Uint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Uint {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

// =============================================================================
// TESTS
// =============================================================================
