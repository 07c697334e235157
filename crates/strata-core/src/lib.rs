//! Core types for the Strata layout/allocation bridge.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the sanitized type-signature grammar, the class layout value types
//! ([`FieldRepr`], [`ClassRepr`]), and the layout error taxonomy.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod repr;
pub mod signature;

pub use error::LayoutError;
pub use repr::{ClassRepr, FieldRepr};
pub use signature::{normalize_class_name, sanitize_type_name};
