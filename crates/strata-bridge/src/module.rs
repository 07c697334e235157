//! The dynamically loaded native allocator module.
//!
//! The wire contract between the managed and native sides is exactly one
//! exported entry point:
//!
//! ```c
//! int32_t strata_arena_allocate(const char *class_name, uint64_t *handle_out);
//! ```
//!
//! No handshake, versioning, or capability negotiation exists beyond this
//! signature and the [`NativeStatus`] code table. The native side
//! independently re-derives the class's layout from its name.

use std::ffi::{c_char, CString};
use std::path::Path;

use libloading::{Library, Symbol};
use strata_core::normalize_class_name;

use crate::allocator::ArenaAllocator;
use crate::error::BridgeError;
use crate::handle::NativeHandle;
use crate::status::NativeStatus;

/// The statically declared extern allocation signature.
type AllocateRawFn = unsafe extern "C" fn(*const c_char, *mut u64) -> i32;

/// Exported symbol name of the allocation entry point.
pub const ALLOCATE_SYMBOL: &str = "strata_arena_allocate";

/// A loaded native allocator module.
///
/// The library stays loaded for as long as the module value lives; the
/// process-scoped [`AllocatorBridge`](crate::AllocatorBridge) never drops
/// it. The entry point is resolved once at load time.
#[derive(Debug)]
pub struct NativeModule {
    // Keeps the library mapped while the extracted fn pointer is alive.
    _lib: Library,
    allocate: AllocateRawFn,
}

impl NativeModule {
    /// Load the allocator module from `path` and resolve its entry point.
    ///
    /// Fails with [`BridgeError::AllocatorUnavailable`] when the library
    /// cannot be loaded or does not export [`ALLOCATE_SYMBOL`].
    #[allow(unsafe_code)]
    pub fn load(path: &Path) -> Result<Self, BridgeError> {
        // SAFETY: loading a library runs its initializers. The allocator
        // module is a deployment artifact under the same trust boundary
        // as the process itself.
        let lib = unsafe { Library::new(path) }.map_err(|e| BridgeError::AllocatorUnavailable {
            reason: format!("{}: {e}", path.display()),
        })?;
        // SAFETY: the symbol is declared with the one statically known
        // extern signature; the native module's deployment contract
        // guarantees it matches.
        let allocate = unsafe {
            let sym: Symbol<'_, AllocateRawFn> = lib.get(ALLOCATE_SYMBOL.as_bytes()).map_err(
                |e| BridgeError::AllocatorUnavailable {
                    reason: format!("missing entry point {ALLOCATE_SYMBOL}: {e}"),
                },
            )?;
            *sym
        };
        Ok(Self {
            _lib: lib,
            allocate,
        })
    }
}

impl ArenaAllocator for NativeModule {
    #[allow(unsafe_code)]
    fn allocate(&self, class_name: &str) -> Result<NativeHandle, BridgeError> {
        let name = normalize_class_name(class_name);
        // A name with an interior NUL can never resolve on the native side.
        let c_name = CString::new(name.as_str()).map_err(|_| BridgeError::UnknownClass {
            name: name.clone(),
        })?;
        let mut raw: u64 = 0;
        // SAFETY: c_name outlives the call and raw is a valid out-pointer;
        // the entry point is thread-safe per the module's deployment
        // contract.
        let status = unsafe { (self.allocate)(c_name.as_ptr(), &mut raw) };
        match NativeStatus::from_raw(status) {
            Some(NativeStatus::Ok) => Ok(NativeHandle::from_raw(raw)),
            Some(err) => Err(err.into_error(&name)),
            None => Err(BridgeError::NativeAllocation { name }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_failure_is_allocator_unavailable() {
        let err = NativeModule::load(Path::new("does/not/exist.so")).unwrap_err();
        assert!(matches!(err, BridgeError::AllocatorUnavailable { .. }));
        assert!(err.to_string().contains("does/not/exist.so"));
    }
}
