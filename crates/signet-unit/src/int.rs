//! # Signed Bounded Integer
//!
//! A signed integer whose magnitude never exceeds `2^256 - 1`, stored as
//! sign + `U256` magnitude. Values are immutable; every operation returns a
//! new instance and re-validates the bound on the result.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use primitive_types::U256;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::dec::Dec;
use crate::error::NumericError;
use crate::parse::parse_numeral;
use crate::uint::Uint;
use crate::{DEFAULT_ALPHABET, DEFAULT_BASE};

/// A signed integer with magnitude invariant `|value| <= 2^256 - 1`.
///
/// The magnitude is a `U256`, so the invariant holds by construction; what
/// the arithmetic must guard against is intermediate overflow, which is
/// reported as [`NumericError::Range`] instead of wrapping.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Int {
    /// Sign flag. Zero is canonically non-negative.
    negative: bool,
    /// Absolute value.
    mag: U256,
}

impl Int {
    /// The zero value.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            negative: false,
            mag: U256::zero(),
        }
    }

    /// The value one.
    #[must_use]
    pub fn one() -> Self {
        Self {
            negative: false,
            mag: U256::one(),
        }
    }

    /// Creates a non-negative value from a raw 256-bit magnitude.
    #[must_use]
    pub fn new(magnitude: U256) -> Self {
        Self {
            negative: false,
            mag: magnitude,
        }
    }

    /// Creates a value from a native signed integer.
    #[must_use]
    pub fn from_i128(value: i128) -> Self {
        Self::from_sign_magnitude(value < 0, U256::from(value.unsigned_abs()))
    }

    /// Creates a value from a native unsigned integer.
    #[must_use]
    pub fn from_u128(value: u128) -> Self {
        Self::new(U256::from(value))
    }

    /// Parses a numeral with an explicit base and digit alphabet.
    ///
    /// Defaults used by [`FromStr`] are base 10, the alphabet
    /// [`DEFAULT_ALPHABET`], case-insensitive. A leading `-` negates.
    ///
    /// # Errors
    ///
    /// [`NumericError::Format`] for non-integral or malformed text,
    /// [`NumericError::Range`] when the magnitude exceeds `2^256 - 1`.
    pub fn from_str_radix(
        input: &str,
        base: u32,
        alphabet: &str,
        case_sensitive: bool,
    ) -> Result<Self, NumericError> {
        let parsed = parse_numeral(input, base, alphabet, case_sensitive)?;
        Ok(Self::from_sign_magnitude(parsed.negative, parsed.magnitude))
    }

    /// Normalizing constructor: negative zero collapses to zero.
    fn from_sign_magnitude(negative: bool, mag: U256) -> Self {
        Self {
            negative: negative && !mag.is_zero(),
            mag,
        }
    }

    /// Absolute value as a raw `U256`.
    #[must_use]
    pub fn magnitude(&self) -> U256 {
        self.mag
    }

    /// Returns true if the value is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.mag.is_zero()
    }

    /// Returns true if the value is strictly negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Returns true if the value is strictly positive.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        !self.negative && !self.mag.is_zero()
    }

    /// Absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self::new(self.mag)
    }

    /// Absolute value, bridged to the unsigned type.
    #[must_use]
    pub fn abs_uint(&self) -> Uint {
        Uint::new(self.mag)
    }

    /// Negation. Zero stays zero.
    #[must_use]
    pub fn neg(&self) -> Self {
        Self::from_sign_magnitude(!self.negative, self.mag)
    }

    /// Addition.
    ///
    /// # Errors
    ///
    /// [`NumericError::Range`] if the result magnitude exceeds `2^256 - 1`.
    pub fn add(&self, other: &Self) -> Result<Self, NumericError> {
        if self.negative == other.negative {
            let mag = self
                .mag
                .checked_add(other.mag)
                .ok_or_else(|| NumericError::Range {
                    value: format!("{} + {}", self, other),
                })?;
            Ok(Self::from_sign_magnitude(self.negative, mag))
        } else if self.mag >= other.mag {
            Ok(Self::from_sign_magnitude(
                self.negative,
                self.mag - other.mag,
            ))
        } else {
            Ok(Self::from_sign_magnitude(
                other.negative,
                other.mag - self.mag,
            ))
        }
    }

    /// Subtraction.
    ///
    /// # Errors
    ///
    /// [`NumericError::Range`] if the result magnitude exceeds `2^256 - 1`.
    pub fn sub(&self, other: &Self) -> Result<Self, NumericError> {
        self.add(&other.neg())
    }

    /// Multiplication.
    ///
    /// # Errors
    ///
    /// [`NumericError::Range`] if the result magnitude exceeds `2^256 - 1`.
    pub fn mul(&self, other: &Self) -> Result<Self, NumericError> {
        let mag = self
            .mag
            .checked_mul(other.mag)
            .ok_or_else(|| NumericError::Range {
                value: format!("{} * {}", self, other),
            })?;
        Ok(Self::from_sign_magnitude(
            self.negative != other.negative,
            mag,
        ))
    }

    /// Division, truncating toward zero.
    ///
    /// # Errors
    ///
    /// [`NumericError::DivideByZero`] if `other` is zero.
    pub fn div(&self, other: &Self) -> Result<Self, NumericError> {
        if other.is_zero() {
            return Err(NumericError::DivideByZero);
        }
        Ok(Self::from_sign_magnitude(
            self.negative != other.negative,
            self.mag / other.mag,
        ))
    }

    /// Remainder, taking the dividend's sign (truncating division).
    ///
    /// # Errors
    ///
    /// [`NumericError::DivideByZero`] if `other` is zero.
    pub fn rem(&self, other: &Self) -> Result<Self, NumericError> {
        if other.is_zero() {
            return Err(NumericError::DivideByZero);
        }
        Ok(Self::from_sign_magnitude(
            self.negative,
            self.mag % other.mag,
        ))
    }

    /// Exponentiation by an unsigned exponent.
    ///
    /// The result is negative only for a negative base and an odd exponent.
    ///
    /// # Errors
    ///
    /// [`NumericError::Range`] if the result magnitude exceeds `2^256 - 1`.
    pub fn pow(&self, exponent: &Uint) -> Result<Self, NumericError> {
        let exp = exponent.to_u256();
        let mag = self
            .mag
            .checked_pow(exp)
            .ok_or_else(|| NumericError::Range {
                value: format!("{} ^ {}", self, exponent),
            })?;
        Ok(Self::from_sign_magnitude(self.negative && exp.bit(0), mag))
    }

    /// Bridges to the fixed-point decimal type.
    ///
    /// # Errors
    ///
    /// [`NumericError::Range`] if the scaled numerator exceeds the bound.
    pub fn to_dec(&self) -> Result<Dec, NumericError> {
        Dec::new(self)
    }
}

impl Ord for Int {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => self.mag.cmp(&other.mag),
            (true, true) => other.mag.cmp(&self.mag),
        }
    }
}

impl PartialOrd for Int {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Int {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            write!(f, "-")?;
        }
        write!(f, "{}", self.mag)
    }
}

impl fmt::Debug for Int {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Int({})", self)
    }
}

impl FromStr for Int {
    type Err = NumericError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_radix(s, DEFAULT_BASE, DEFAULT_ALPHABET, false)
    }
}

impl Serialize for Int {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Int {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

// =============================================================================
// TESTS
// =============================================================================
