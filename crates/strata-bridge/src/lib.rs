//! Native arena allocation bridge.
//!
//! Loads an independently compiled allocator module once per process and
//! exposes a single cross-boundary operation: allocate native memory
//! shaped like a named class. This is the only Strata crate that may
//! contain `unsafe` code (the extern call surface in [`module`]).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod allocator;
pub mod bridge;
pub mod error;
pub mod handle;
pub mod module;
pub mod status;

pub use allocator::ArenaAllocator;
pub use bridge::{bridge, AllocatorBridge, MODULE_PATH};
pub use error::BridgeError;
pub use handle::NativeHandle;
pub use module::NativeModule;
pub use status::NativeStatus;
