//! Type descriptor sanitization and class-name normalization.
//!
//! The sanitized signature grammar is the exact shape exchanged with
//! diagnostic output and any native-side signature parser:
//!
//! - one of the 8 single-letter primitive codes (`I D Z F C J S B`), or
//! - a string beginning with `[` (array descriptor, passed through), or
//! - `L<slash-separated-name>;` for reference types.

/// Canonicalize a human-readable type name into a compact signature.
///
/// The 8 primitive keywords map to their fixed single-letter codes.
/// Array descriptors (already starting with `[`) pass through verbatim —
/// the caller is responsible for having produced a well-formed descriptor
/// upstream. Anything else is treated as a fully-qualified reference type:
/// dots become `/` and the result is wrapped as `L<name>;`.
///
/// Total over its domain: unrecognized non-primitive names always fall
/// into the reference-type branch.
///
/// ```
/// use strata_core::sanitize_type_name;
///
/// assert_eq!(sanitize_type_name("int"), "I");
/// assert_eq!(sanitize_type_name("[I"), "[I");
/// assert_eq!(sanitize_type_name("java.lang.String"), "Ljava/lang/String;");
/// ```
pub fn sanitize_type_name(name: &str) -> String {
    match name {
        "int" => "I".to_owned(),
        "double" => "D".to_owned(),
        "boolean" => "Z".to_owned(),
        "float" => "F".to_owned(),
        "char" => "C".to_owned(),
        "long" => "J".to_owned(),
        "short" => "S".to_owned(),
        "byte" => "B".to_owned(),
        _ if name.starts_with('[') => name.to_owned(),
        _ => format!("L{};", name.replace('.', "/")),
    }
}

/// Normalize a fully-qualified class name to dotted form.
///
/// Class-resolution calls accept both dotted and slash-separated names;
/// slashes are normalized to dots before resolution.
pub fn normalize_class_name(name: &str) -> String {
    name.replace('/', ".")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn primitive_code_table() {
        let table = [
            ("int", "I"),
            ("double", "D"),
            ("boolean", "Z"),
            ("float", "F"),
            ("char", "C"),
            ("long", "J"),
            ("short", "S"),
            ("byte", "B"),
        ];
        for (keyword, code) in table {
            assert_eq!(sanitize_type_name(keyword), code);
        }
    }

    #[test]
    fn reference_type_wrapping() {
        assert_eq!(
            sanitize_type_name("java.lang.String"),
            "Ljava/lang/String;"
        );
        // Undotted names still get wrapped.
        assert_eq!(sanitize_type_name("Foo"), "LFoo;");
    }

    #[test]
    fn array_descriptors_pass_through() {
        assert_eq!(sanitize_type_name("[I"), "[I");
        assert_eq!(sanitize_type_name("[[D"), "[[D");
        assert_eq!(
            sanitize_type_name("[Ljava/lang/Object;"),
            "[Ljava/lang/Object;"
        );
    }

    #[test]
    fn normalize_accepts_both_separators() {
        assert_eq!(normalize_class_name("java/lang/String"), "java.lang.String");
        assert_eq!(normalize_class_name("java.lang.String"), "java.lang.String");
    }

    /// Dotted fully-qualified names: segments of ASCII identifiers.
    fn arb_reference_name() -> impl Strategy<Value = String> {
        prop::collection::vec("[a-zA-Z][a-zA-Z0-9]{0,8}", 1..5)
            .prop_map(|segments| segments.join("."))
    }

    proptest! {
        #[test]
        fn reference_names_wrap_with_slashes(name in arb_reference_name()) {
            // Filter out the primitive keywords, which map to codes instead.
            prop_assume!(!matches!(
                name.as_str(),
                "int" | "double" | "boolean" | "float" | "char" | "long" | "short" | "byte"
            ));
            let expected = format!("L{};", name.replace('.', "/"));
            prop_assert_eq!(sanitize_type_name(&name), expected);
        }

        #[test]
        fn array_inputs_are_identity(name in arb_reference_name()) {
            let descriptor = format!("[L{};", name.replace('.', "/"));
            prop_assert_eq!(sanitize_type_name(&descriptor), descriptor.clone());
        }

        #[test]
        fn sanitize_is_deterministic(name in arb_reference_name()) {
            prop_assert_eq!(sanitize_type_name(&name), sanitize_type_name(&name));
        }

        #[test]
        fn normalize_is_idempotent(name in arb_reference_name()) {
            let slashed = name.replace('.', "/");
            let once = normalize_class_name(&slashed);
            prop_assert_eq!(normalize_class_name(&once), once.clone());
            prop_assert_eq!(once, name);
        }
    }
}
