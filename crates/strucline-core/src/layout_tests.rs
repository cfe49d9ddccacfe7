use crate::{ByteRange, Member, StructLayout, TypeSpec};

fn member(name: &str, offset: u64, size: u64) -> Member {
    Member {
        name: name.to_string(),
        spec: TypeSpec::scalar("_BYTE"),
        offset,
        size,
    }
}

#[test]
fn insert_orders_by_offset() {
    let mut layout = StructLayout::new("S");
    layout.insert(member("b", 16, 4));
    layout.insert(member("a", 0, 8));
    layout.insert(member("c", 8, 8));

    let names: Vec<_> = layout.members.keys().cloned().collect();
    assert_eq!(names, vec!["a", "c", "b"]);
}

#[test]
fn missing_layout_is_empty() {
    let layout = StructLayout::missing("Nope");
    assert!(!layout.exists);
    assert_eq!(layout.size, 0);
    assert!(layout.members.is_empty());
}

#[test]
fn remove_frees_name() {
    let mut layout = StructLayout::new("S");
    layout.insert(member("x", 0, 4));
    assert!(layout.has_member("x"));
    assert!(layout.remove("x"));
    assert!(!layout.has_member("x"));
    assert!(!layout.remove("x"));
}

#[test]
fn members_overlapping_respects_half_open_ranges() {
    let mut layout = StructLayout::new("S");
    layout.insert(member("head", 0, 16));
    layout.insert(member("mid", 16, 4));
    layout.insert(member("tail", 32, 8));

    let hits: Vec<_> = layout
        .members_overlapping(ByteRange::at(18, 4))
        .map(|m| m.name.as_str())
        .collect();
    assert_eq!(hits, vec!["mid"]);

    // Touching [16, 20) at its end does not overlap it.
    let hits: Vec<_> = layout
        .members_overlapping(ByteRange::at(20, 12))
        .map(|m| m.name.as_str())
        .collect();
    assert!(hits.is_empty());
}

#[test]
fn member_range_is_half_open() {
    let m = member("x", 16, 4);
    assert_eq!(m.range(), ByteRange::at(16, 4));
    assert_eq!(m.range().end, 20);
}
