//! Field layout extraction for the Strata bridge.
//!
//! Derives a [`ClassRepr`](strata_core::ClassRepr) for a named class by
//! querying a host runtime through the [`RuntimeIntrospect`] capability
//! trait. The extractor is pure given an unmodified class definition:
//! repeated calls yield structurally equal representations.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod extract;
pub mod runtime;

pub use extract::extract_layout;
pub use runtime::{FieldDecl, RuntimeIntrospect};
