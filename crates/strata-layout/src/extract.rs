//! Building a [`ClassRepr`] from a runtime's layout report.

use strata_core::{normalize_class_name, sanitize_type_name, ClassRepr, FieldRepr, LayoutError};

use crate::runtime::RuntimeIntrospect;

/// Extract the full layout of a named class.
///
/// Accepts dotted or slash-separated class names (slashes are normalized
/// to dots before resolution). For every field the runtime reports, in
/// layout order, the declared type name is sanitized and the byte offset
/// resolved; aggregate instance and header sizes are read directly from
/// the runtime, never recomputed.
///
/// Errors are non-recoverable for this call: a failed class or field
/// resolution returns no partial representation.
pub fn extract_layout<R: RuntimeIntrospect>(
    runtime: &R,
    class_name: &str,
) -> Result<ClassRepr, LayoutError> {
    let name = normalize_class_name(class_name);
    let class = runtime.resolve_class(&name)?;

    let mut fields = Vec::new();
    for decl in runtime.list_fields(&class) {
        let offset = runtime.field_offset(&class, &decl.name)?;
        fields.push(FieldRepr::new(
            sanitize_type_name(&decl.type_name),
            decl.name,
            offset,
        ));
    }

    Ok(ClassRepr::new(
        fields,
        runtime.instance_size(&class),
        runtime.header_size(&class),
    ))
}
