//! # Fixed-Point Decimal
//!
//! A base-10 decimal wrapper over an [`Int`] numerator with a fixed 18
//! fractional digits, the convention used for token amounts. Only
//! construction from the integer types is part of this crate's contract;
//! decimal arithmetic lives with the callers that need it.

use std::fmt;

use primitive_types::U256;

use crate::error::NumericError;
use crate::int::Int;

/// A fixed-precision decimal value.
///
/// Internally `numerator = value * 10^18`, so the numerator inherits the
/// 256-bit bound of [`Int`].
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Dec {
    num: Int,
}

impl Dec {
    /// Number of fractional base-10 digits.
    pub const DECIMAL_PLACES: u32 = 18;

    /// `10^DECIMAL_PLACES`, the numerator scale factor.
    fn scale() -> U256 {
        U256::exp10(Self::DECIMAL_PLACES as usize)
    }

    /// The zero value.
    #[must_use]
    pub fn zero() -> Self {
        Self { num: Int::zero() }
    }

    /// Constructs the decimal representing a whole integer value.
    ///
    /// # Errors
    ///
    /// [`NumericError::Range`] if `value * 10^18` exceeds the 256-bit bound.
    pub fn new(value: &Int) -> Result<Self, NumericError> {
        let num = value.mul(&Int::new(Self::scale()))?;
        Ok(Self { num })
    }

    /// The scaled numerator.
    #[must_use]
    pub fn numerator(&self) -> Int {
        self.num
    }

    /// Returns true if the value is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.num.is_zero()
    }

    /// Returns true if the value is strictly negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.num.is_negative()
    }
}

impl fmt::Display for Dec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mag = self.num.magnitude();
        let scale = Self::scale();
        let whole = mag / scale;
        let frac = mag % scale;
        if self.num.is_negative() {
            write!(f, "-")?;
        }
        write!(
            f,
            "{whole}.{frac:0>width$}",
            frac = frac.to_string(),
            width = Self::DECIMAL_PLACES as usize
        )
    }
}

impl fmt::Debug for Dec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Dec({})", self)
    }
}

// =============================================================================
// TESTS
// =============================================================================
