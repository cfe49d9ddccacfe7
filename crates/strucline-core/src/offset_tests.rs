use crate::offset::{OffsetError, parse_offset};

#[test]
fn prefixed_and_bare_hex_agree() {
    assert_eq!(parse_offset("0x18").unwrap(), 24);
    assert_eq!(parse_offset("18").unwrap(), 24);
    assert_eq!(parse_offset("0X18").unwrap(), 24);
}

#[test]
fn bare_digits_are_hex_not_decimal() {
    assert_eq!(parse_offset("20").unwrap(), 0x20);
    assert_eq!(parse_offset("10").unwrap(), 16);
}

#[test]
fn zero_offset() {
    assert_eq!(parse_offset("0").unwrap(), 0);
    assert_eq!(parse_offset("0x0").unwrap(), 0);
}

#[test]
fn disassembler_suffixes_are_stripped() {
    assert_eq!(parse_offset("18h").unwrap(), 0x18);
    assert_eq!(parse_offset("18u").unwrap(), 0x18);
    assert_eq!(parse_offset("18LL").unwrap(), 0x18);
}

#[test]
fn hex_letters() {
    assert_eq!(parse_offset("aC").unwrap(), 0xac);
    assert_eq!(parse_offset("0xFF").unwrap(), 255);
}

#[test]
fn empty_field() {
    assert_eq!(parse_offset(""), Err(OffsetError::Empty));
}

#[test]
fn garbage_is_malformed() {
    assert!(matches!(
        parse_offset("xyz"),
        Err(OffsetError::Malformed(_))
    ));
    assert!(matches!(parse_offset("0x"), Err(OffsetError::Malformed(_))));
    assert!(matches!(
        parse_offset("-8"),
        Err(OffsetError::Malformed(_))
    ));
    assert!(matches!(
        parse_offset("1.5"),
        Err(OffsetError::Malformed(_))
    ));
}
