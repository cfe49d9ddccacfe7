use crate::naming::{disambiguate, is_valid_member_name};

#[test]
fn valid_member_names() {
    assert!(is_valid_member_name("count"));
    assert!(is_valid_member_name("_vtable"));
    assert!(is_valid_member_name("field_10"));
    assert!(is_valid_member_name("X9"));
}

#[test]
fn invalid_member_names() {
    assert!(!is_valid_member_name(""));
    assert!(!is_valid_member_name("9field"));
    assert!(!is_valid_member_name("foo-bar"));
    assert!(!is_valid_member_name("foo bar"));
    assert!(!is_valid_member_name("foo.bar"));
}

#[test]
fn free_name_passes_through() {
    let taken: &[&str] = &[];
    assert_eq!(disambiguate("count", |n| taken.contains(&n)), "count");
}

#[test]
fn taken_name_gets_suffix_one() {
    let taken = ["count"];
    assert_eq!(disambiguate("count", |n| taken.contains(&n)), "count_1");
}

#[test]
fn suffixes_count_up_from_the_base_name() {
    let taken = ["count", "count_1"];
    assert_eq!(disambiguate("count", |n| taken.contains(&n)), "count_2");

    // Holes are filled with the smallest unused n.
    let taken = ["count", "count_2"];
    assert_eq!(disambiguate("count", |n| taken.contains(&n)), "count_1");
}
