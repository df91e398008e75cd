//! Integer literal conversion.

use thiserror::Error;

/// Why a constant token could not be converted.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConstantError {
    #[error("no digits after the base prefix")]
    NoDigits,

    #[error("value does not fit in a signed 64-bit integer")]
    Overflow,

    #[error("`{digit}` is not a base-{radix} digit")]
    InvalidDigit { digit: char, radix: u32 },
}

/// Convert constant text to its value.
///
/// `$` selects hex, `%` binary, otherwise decimal. `_` separators are
/// ignored anywhere after the prefix.
pub fn parse_constant(text: &str) -> Result<i64, ConstantError> {
    let (radix, digits) = if let Some(rest) = text.strip_prefix('$') {
        (16, rest)
    } else if let Some(rest) = text.strip_prefix('%') {
        (2, rest)
    } else {
        (10, text)
    };

    let cleaned: String = digits.chars().filter(|&c| c != '_').collect();
    if cleaned.is_empty() {
        return Err(ConstantError::NoDigits);
    }
    if let Some(digit) = cleaned.chars().find(|c| !c.is_digit(radix)) {
        return Err(ConstantError::InvalidDigit { digit, radix });
    }
    i64::from_str_radix(&cleaned, radix).map_err(|_| ConstantError::Overflow)
}
