//! Layout extraction error types.

use std::error::Error;
use std::fmt;

/// Errors from class layout extraction.
///
/// Both variants are non-recoverable for the failing call — no partial
/// `ClassRepr` is ever returned. Neither is usefully transient, so
/// callers should not retry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LayoutError {
    /// The class name does not resolve to a class known to the managed
    /// runtime.
    ClassResolution {
        /// The unresolvable class name (dotted form).
        name: String,
    },
    /// A field named in the class's layout report could not be located
    /// for offset lookup.
    FieldResolution {
        /// The class whose layout was being extracted.
        class: String,
        /// The missing field.
        field: String,
    },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ClassResolution { name } => {
                write!(f, "class '{name}' not known to the managed runtime")
            }
            Self::FieldResolution { class, field } => {
                write!(f, "field '{field}' of class '{class}' missing during offset lookup")
            }
        }
    }
}

impl Error for LayoutError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_class() {
        let err = LayoutError::ClassResolution {
            name: "does.not.Exist".into(),
        };
        assert_eq!(
            err.to_string(),
            "class 'does.not.Exist' not known to the managed runtime"
        );
    }

    #[test]
    fn display_names_class_and_field() {
        let err = LayoutError::FieldResolution {
            class: "demo.Point".into(),
            field: "z".into(),
        };
        assert_eq!(
            err.to_string(),
            "field 'z' of class 'demo.Point' missing during offset lookup"
        );
    }
}
