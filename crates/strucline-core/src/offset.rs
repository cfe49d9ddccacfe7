//! The offset field grammar.
//!
//! Offsets are always hexadecimal; `0x18` and bare `18` resolve to the same
//! value (24). There is no decimal form: a bare `20` means 0x20. Disassembler
//! spellings with trailing `h`, `u`, or `LL` suffixes are accepted and
//! stripped before parsing.

use thiserror::Error;

/// Why an offset field failed to parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OffsetError {
    #[error("empty offset field")]
    Empty,
    #[error("malformed offset `{0}`")]
    Malformed(String),
}

/// Parse an offset field into a byte offset.
///
/// # Examples
/// ```
/// use strucline_core::parse_offset;
/// assert_eq!(parse_offset("0x18").unwrap(), 0x18);
/// assert_eq!(parse_offset("18").unwrap(), 0x18);
/// assert_eq!(parse_offset("18h").unwrap(), 0x18);
/// ```
pub fn parse_offset(field: &str) -> Result<u64, OffsetError> {
    if field.is_empty() {
        return Err(OffsetError::Empty);
    }

    let mut digits = field;
    for suffix in ["h", "LL", "u"] {
        digits = digits.strip_suffix(suffix).unwrap_or(digits);
    }
    digits = digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
        .unwrap_or(digits);

    u64::from_str_radix(digits, 16).map_err(|_| OffsetError::Malformed(field.to_string()))
}
