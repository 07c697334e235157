//! Strata: a layout-introspection and native-allocation bridge between a
//! managed, garbage-collected runtime and an external arena allocator.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Strata sub-crates. For most users, adding `strata` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use strata::prelude::*;
//!
//! // A minimal host runtime exposing one class, `demo.Pair`, with a
//! // 12-byte object header and two int fields.
//! struct TinyRuntime;
//! struct TinyClass;
//!
//! impl RuntimeIntrospect for TinyRuntime {
//!     type Class = TinyClass;
//!
//!     fn resolve_class(&self, name: &str) -> Result<TinyClass, LayoutError> {
//!         if name == "demo.Pair" {
//!             Ok(TinyClass)
//!         } else {
//!             Err(LayoutError::ClassResolution { name: name.into() })
//!         }
//!     }
//!
//!     fn list_fields(&self, _: &TinyClass) -> Vec<FieldDecl> {
//!         vec![
//!             FieldDecl { name: "first".into(), type_name: "int".into() },
//!             FieldDecl { name: "second".into(), type_name: "int".into() },
//!         ]
//!     }
//!
//!     fn field_offset(&self, _: &TinyClass, field: &str) -> Result<u64, LayoutError> {
//!         match field {
//!             "first" => Ok(12),
//!             "second" => Ok(16),
//!             _ => Err(LayoutError::FieldResolution {
//!                 class: "demo.Pair".into(),
//!                 field: field.into(),
//!             }),
//!         }
//!     }
//!
//!     fn instance_size(&self, _: &TinyClass) -> u64 { 24 }
//!     fn header_size(&self, _: &TinyClass) -> u64 { 12 }
//! }
//!
//! let repr = extract_layout(&TinyRuntime, "demo.Pair").unwrap();
//! assert_eq!(repr.fields().len(), 2);
//! assert_eq!(repr.fields()[0].ty(), "I");
//! assert_eq!(repr.instance_size(), 24);
//! assert_eq!(repr.header_size(), 12);
//!
//! // Native allocations go through the process-wide bridge:
//! // strata::bridge::bridge().allocate("demo.Pair")
//! // (requires the allocator module at its fixed deployment path).
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `strata-core` | Signatures, `ClassRepr`/`FieldRepr`, layout errors |
//! | [`layout`] | `strata-layout` | `RuntimeIntrospect` capability, `extract_layout` |
//! | [`bridge`] | `strata-bridge` | Native module loading, allocation, handles |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core value types and the signature grammar (`strata-core`).
pub mod types {
    pub use strata_core::*;
}

/// Layout extraction against a host runtime (`strata-layout`).
pub mod layout {
    pub use strata_layout::*;
}

/// The native allocation bridge (`strata-bridge`).
pub mod bridge {
    pub use strata_bridge::*;
}

/// The types most callers need.
pub mod prelude {
    pub use strata_bridge::{
        bridge, AllocatorBridge, ArenaAllocator, BridgeError, NativeHandle,
    };
    pub use strata_core::{
        normalize_class_name, sanitize_type_name, ClassRepr, FieldRepr, LayoutError,
    };
    pub use strata_layout::{extract_layout, FieldDecl, RuntimeIntrospect};
}
