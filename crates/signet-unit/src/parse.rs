//! Numeral parsing with configurable base and alphabet.
//!
//! Parse targets are integral only: any input containing `.` is rejected
//! before digits are examined.

use primitive_types::U256;

use crate::error::NumericError;

/// Sign and magnitude of a parsed numeral.
#[derive(Debug)]
pub(crate) struct ParsedNumeral {
    pub negative: bool,
    pub magnitude: U256,
}

/// Parse `input` as an integer numeral in the given base.
///
/// Digits are resolved by position in `alphabet` (only the first `base`
/// characters are significant). With `case_sensitive = false`, input and
/// alphabet are compared in ASCII lowercase.
///
/// # Errors
///
/// - [`NumericError::Format`] for a fractional point, an unsupported base,
///   an unknown digit, or an empty digit sequence.
/// - [`NumericError::Range`] when the accumulated magnitude exceeds
///   `2^256 - 1`.
pub(crate) fn parse_numeral(
    input: &str,
    base: u32,
    alphabet: &str,
    case_sensitive: bool,
) -> Result<ParsedNumeral, NumericError> {
    if input.contains('.') {
        return Err(NumericError::Format {
            input: input.to_string(),
        });
    }

    let (negative, digits) = match input.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, input.strip_prefix('+').unwrap_or(input)),
    };

    let digit_table: Vec<char> = if case_sensitive {
        alphabet.chars().collect()
    } else {
        alphabet.chars().map(|c| c.to_ascii_lowercase()).collect()
    };

    if digits.is_empty() || !(2..=digit_table.len() as u32).contains(&base) {
        return Err(NumericError::Format {
            input: input.to_string(),
        });
    }

    let radix = U256::from(base);
    let mut magnitude = U256::zero();
    for ch in digits.chars() {
        let ch = if case_sensitive {
            ch
        } else {
            ch.to_ascii_lowercase()
        };
        let digit = digit_table[..base as usize]
            .iter()
            .position(|&d| d == ch)
            .ok_or_else(|| NumericError::Format {
                input: input.to_string(),
            })?;

        magnitude = magnitude
            .checked_mul(radix)
            .and_then(|m| m.checked_add(U256::from(digit)))
            .ok_or_else(|| NumericError::Range {
                value: input.to_string(),
            })?;
    }

    Ok(ParsedNumeral {
        negative,
        magnitude,
    })
}
