use crate::TypeSpec;

#[test]
fn scalar_size_is_base_size() {
    let spec = TypeSpec::scalar("_DWORD");
    assert_eq!(spec.size(4, 8), 4);
    assert!(!spec.is_pointer());
    assert!(!spec.is_array());
}

#[test]
fn array_size_multiplies() {
    let spec = TypeSpec::array("_QWORD", 4);
    assert_eq!(spec.size(8, 8), 32);
    assert_eq!(spec.element_count(), 4);
}

#[test]
fn pointer_ignores_base_size() {
    let spec = TypeSpec::pointer("_BYTE", 1);
    assert_eq!(spec.size(1, 8), 8);

    // Depth beyond one is still one pointer wide.
    let deep = TypeSpec::pointer("_QWORD", 3);
    assert_eq!(deep.size(8, 4), 4);
}

#[test]
fn array_of_pointers_scales_pointer_width() {
    let spec = TypeSpec {
        base: "_BYTE".into(),
        ptr_depth: 1,
        array_len: 4,
    };
    assert_eq!(spec.size(1, 8), 32);
}

#[test]
fn zero_array_len_means_one_element() {
    let spec = TypeSpec::scalar("_WORD");
    assert_eq!(spec.element_count(), 1);
    assert_eq!(spec.size(2, 8), 2);
}

#[test]
fn oversized_multiply_saturates() {
    let spec = TypeSpec::array("huge_t", 2);
    assert_eq!(spec.size(u64::MAX, 8), u64::MAX);
}

#[test]
fn display_round_trips_grammar_shapes() {
    assert_eq!(TypeSpec::scalar("_BYTE").to_string(), "_BYTE");
    assert_eq!(TypeSpec::pointer("Foo", 2).to_string(), "Foo**");
    assert_eq!(TypeSpec::array("_QWORD", 4).to_string(), "_QWORD[4]");
    let ptr_array = TypeSpec {
        base: "Foo".into(),
        ptr_depth: 1,
        array_len: 3,
    };
    assert_eq!(ptr_array.to_string(), "Foo*[3]");
}
