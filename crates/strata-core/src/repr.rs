//! Class layout value types: [`FieldRepr`] and [`ClassRepr`].
//!
//! A `ClassRepr` is the canonical, dependency-free description of a class's
//! memory shape, built once by the layout extractor and immutable
//! thereafter. It is the structure the managed side compares against what
//! the native allocator derives independently.

use std::fmt;

use smallvec::SmallVec;

/// One field of a class's layout.
///
/// `offset` is the byte offset from the start of the instance, header
/// included. Fields of the same class never overlap, and
/// `offset + size(ty) <= instance_size` holds for every field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldRepr {
    ty: String,
    name: String,
    offset: u64,
}

impl FieldRepr {
    /// Construct a field representation from a sanitized type signature,
    /// a field name, and a byte offset.
    pub fn new(ty: impl Into<String>, name: impl Into<String>, offset: u64) -> Self {
        Self {
            ty: ty.into(),
            name: name.into(),
            offset,
        }
    }

    /// The sanitized type signature (see [`crate::sanitize_type_name`]).
    pub fn ty(&self) -> &str {
        &self.ty
    }

    /// The field identifier, unique within its declaring class's layout.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Byte offset from the start of the instance.
    pub fn offset(&self) -> u64 {
        self.offset
    }
}

impl fmt::Display for FieldRepr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} @ {}", self.name, self.ty, self.offset)
    }
}

/// Full layout of one class.
///
/// `fields` is in declaration/layout order as reported by the host
/// runtime, not necessarily sorted by offset. `header_size` is a property
/// of the runtime's memory model, uniform across all classes produced by
/// one process, and `header_size <= instance_size` always holds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassRepr {
    fields: SmallVec<[FieldRepr; 8]>,
    instance_size: u64,
    header_size: u64,
}

impl ClassRepr {
    /// Construct a class representation from its fields and sizes.
    pub fn new(
        fields: impl IntoIterator<Item = FieldRepr>,
        instance_size: u64,
        header_size: u64,
    ) -> Self {
        Self {
            fields: fields.into_iter().collect(),
            instance_size,
            header_size,
        }
    }

    /// The fields in declaration/layout order.
    pub fn fields(&self) -> &[FieldRepr] {
        &self.fields
    }

    /// Total bytes needed to store one instance, header and padding
    /// included.
    pub fn instance_size(&self) -> u64 {
        self.instance_size
    }

    /// Bytes reserved at the start of every instance for runtime metadata,
    /// never addressable as a user field.
    pub fn header_size(&self) -> u64 {
        self.header_size
    }
}

impl fmt::Display for ClassRepr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ClassRepr {{ instance_size: {}, header_size: {}, fields: [",
            self.instance_size, self.header_size
        )?;
        for (i, field) in self.fields.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{field}")?;
        }
        write!(f, "] }}")
    }
}
