//! The managed-runtime layout introspection capability.
//!
//! [`RuntimeIntrospect`] decouples the layout extractor from any single
//! runtime's reflection mechanism. A concrete host runtime implements the
//! five capabilities; the extractor only ever talks through this trait.

use strata_core::LayoutError;

/// A field as declared by the host runtime, before sanitization.
///
/// `type_name` is the raw declared type name (dotted for reference types,
/// keyword for primitives, `[`-prefixed for arrays); the extractor passes
/// it through the signature sanitizer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldDecl {
    /// Field identifier, unique within the declaring class.
    pub name: String,
    /// Raw declared type name as the runtime reports it.
    pub type_name: String,
}

/// Layout introspection supplied by the managed runtime.
///
/// Implementations may trigger class metadata loading inside the host
/// runtime during any of these calls; that is an allowed side effect, not
/// an error. Offsets reported by [`field_offset`](Self::field_offset) must
/// agree with any whole-class layout report the runtime produces — the two
/// sources are interchangeable by contract.
pub trait RuntimeIntrospect {
    /// Opaque resolved-class token threaded through the other capabilities.
    type Class;

    /// Resolve a dotted fully-qualified class name.
    ///
    /// Fails with [`LayoutError::ClassResolution`] when the name is not
    /// known to the runtime.
    fn resolve_class(&self, name: &str) -> Result<Self::Class, LayoutError>;

    /// The fields owned by the class, in the runtime's layout order.
    fn list_fields(&self, class: &Self::Class) -> Vec<FieldDecl>;

    /// Byte offset of a named field from the start of the instance.
    ///
    /// Fails with [`LayoutError::FieldResolution`] when the field cannot
    /// be located on the class.
    fn field_offset(&self, class: &Self::Class, field: &str) -> Result<u64, LayoutError>;

    /// Total instance size in bytes, header and padding included.
    fn instance_size(&self, class: &Self::Class) -> u64;

    /// Header size in bytes. A property of the runtime's memory model,
    /// uniform across all classes it hosts.
    fn header_size(&self, class: &Self::Class) -> u64;
}
