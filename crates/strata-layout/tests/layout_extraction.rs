//! End-to-end layout extraction against a mock managed runtime.

use strata_core::LayoutError;
use strata_layout::extract_layout;
use strata_test_utils::MockRuntime;

const HEADER: u64 = 12;

fn runtime() -> MockRuntime {
    let mut rt = MockRuntime::new(HEADER);
    rt.set_class(
        "demo.Point",
        32,
        &[
            ("x", "int", 12),
            ("y", "int", 16),
            ("label", "java.lang.String", 24),
        ],
    );
    // No declared fields beyond the runtime header.
    rt.set_class("demo.Foo", HEADER, &[]);
    rt.set_class(
        "demo.Buffer",
        24,
        &[("data", "[B", 12), ("len", "long", 16)],
    );
    rt
}

#[test]
fn extracts_fields_in_declaration_order() {
    let repr = extract_layout(&runtime(), "demo.Point").unwrap();
    let names: Vec<_> = repr.fields().iter().map(|f| f.name()).collect();
    assert_eq!(names, ["x", "y", "label"]);
    assert_eq!(repr.instance_size(), 32);
    assert_eq!(repr.header_size(), HEADER);
}

#[test]
fn field_types_are_sanitized() {
    let repr = extract_layout(&runtime(), "demo.Point").unwrap();
    assert_eq!(repr.fields()[0].ty(), "I");
    assert_eq!(repr.fields()[2].ty(), "Ljava/lang/String;");

    let repr = extract_layout(&runtime(), "demo.Buffer").unwrap();
    assert_eq!(repr.fields()[0].ty(), "[B");
    assert_eq!(repr.fields()[1].ty(), "J");
}

#[test]
fn layout_invariants_hold() {
    let repr = extract_layout(&runtime(), "demo.Point").unwrap();
    assert!(repr.header_size() <= repr.instance_size());
    for field in repr.fields() {
        assert!(field.offset() < repr.instance_size());
        assert!(field.offset() >= repr.header_size());
    }
}

#[test]
fn extraction_is_idempotent() {
    let rt = runtime();
    let first = extract_layout(&rt, "demo.Point").unwrap();
    let second = extract_layout(&rt, "demo.Point").unwrap();
    assert_eq!(first, second);
}

#[test]
fn fieldless_class_is_all_header() {
    let repr = extract_layout(&runtime(), "demo.Foo").unwrap();
    assert!(repr.fields().is_empty());
    assert_eq!(repr.instance_size(), HEADER);
    assert_eq!(repr.instance_size(), repr.header_size());
}

#[test]
fn slash_separated_names_resolve() {
    let dotted = extract_layout(&runtime(), "demo.Point").unwrap();
    let slashed = extract_layout(&runtime(), "demo/Point").unwrap();
    assert_eq!(dotted, slashed);
}

#[test]
fn unknown_class_fails_resolution() {
    let err = extract_layout(&runtime(), "does.not.Exist").unwrap_err();
    assert_eq!(
        err,
        LayoutError::ClassResolution {
            name: "does.not.Exist".into()
        }
    );
}

#[test]
fn missing_offset_fails_field_resolution() {
    let mut rt = runtime();
    rt.forget_offset("demo.Point", "y");
    let err = extract_layout(&rt, "demo.Point").unwrap_err();
    assert_eq!(
        err,
        LayoutError::FieldResolution {
            class: "demo.Point".into(),
            field: "y".into()
        }
    );
}

#[test]
fn rendering_lists_every_field_and_both_sizes() {
    let repr = extract_layout(&runtime(), "demo.Point").unwrap();
    let rendered = repr.to_string();
    assert!(rendered.contains("instance_size: 32"));
    assert!(rendered.contains("header_size: 12"));
    assert!(rendered.contains("x: I @ 12"));
    assert!(rendered.contains("y: I @ 16"));
    assert!(rendered.contains("label: Ljava/lang/String; @ 24"));
    assert_eq!(rendered, repr.to_string());
}
