use crate::ByteRange;

#[test]
fn at_spans_size_bytes() {
    let r = ByteRange::at(16, 4);
    assert_eq!(r.start, 16);
    assert_eq!(r.end, 20);
    assert_eq!(r.len(), 4);
    assert!(!r.is_empty());
}

#[test]
fn zero_size_range_is_empty() {
    let r = ByteRange::at(8, 0);
    assert!(r.is_empty());
    assert!(!r.overlaps(&ByteRange::at(0, 100)));
}

#[test]
fn partial_overlap() {
    let existing = ByteRange::at(16, 4); // [16, 20)
    let draft = ByteRange::at(18, 4); // [18, 22)
    assert!(existing.overlaps(&draft));
    assert!(draft.overlaps(&existing));
}

#[test]
fn touching_endpoints_do_not_overlap() {
    let a = ByteRange::at(0, 16); // [0, 16)
    let b = ByteRange::at(16, 8); // [16, 24)
    assert!(!a.overlaps(&b));
    assert!(!b.overlaps(&a));
}

#[test]
fn containment_overlaps() {
    let outer = ByteRange::at(0, 32);
    let inner = ByteRange::at(8, 2);
    assert!(outer.overlaps(&inner));
    assert!(inner.overlaps(&outer));
}

#[test]
fn contains_is_half_open() {
    let r = ByteRange::at(16, 4);
    assert!(!r.contains(15));
    assert!(r.contains(16));
    assert!(r.contains(19));
    assert!(!r.contains(20));
}

#[test]
fn display_is_hex() {
    assert_eq!(ByteRange::at(16, 32).to_string(), "[0x10, 0x30)");
}
