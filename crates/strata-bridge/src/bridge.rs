//! Process-scoped init-once gate around the loaded allocator module.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use crate::allocator::ArenaAllocator;
use crate::error::BridgeError;
use crate::handle::NativeHandle;
use crate::module::NativeModule;

/// Fixed deployment path of the native allocator module, relative to the
/// process working directory.
pub const MODULE_PATH: &str = "native/libstrata_arena.so";

/// Init-once, no-teardown gate around one [`NativeModule`].
///
/// The first caller to [`initialize`](Self::initialize) or
/// [`allocate`](Self::allocate) loads the module; every later caller
/// observes the same loaded module (or the same recorded load failure —
/// no re-load is ever attempted). The module stays loaded for the process
/// lifetime.
///
/// Only the class *name* crosses the boundary: the native side re-derives
/// the class's layout independently from the same class definition. If
/// the two sides are ever compiled against diverging class definitions,
/// their layouts can disagree silently — keep the managed runtime and the
/// allocator module deployed in lockstep.
pub struct AllocatorBridge {
    path: PathBuf,
    module: OnceLock<Result<NativeModule, BridgeError>>,
}

impl AllocatorBridge {
    /// Create an uninitialized bridge that will load its module from
    /// `path` on first use.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            module: OnceLock::new(),
        }
    }

    /// Load the native module now, if it has not been loaded yet.
    ///
    /// Exactly-once even under racing threads. A load failure is recorded
    /// and returned from this and every subsequent call.
    pub fn initialize(&self) -> Result<(), BridgeError> {
        self.module().map(|_| ())
    }

    fn module(&self) -> Result<&NativeModule, BridgeError> {
        self.module
            .get_or_init(|| NativeModule::load(&self.path))
            .as_ref()
            .map_err(Clone::clone)
    }
}

impl ArenaAllocator for AllocatorBridge {
    fn allocate(&self, class_name: &str) -> Result<NativeHandle, BridgeError> {
        self.module()?.allocate(class_name)
    }
}

/// The process-wide bridge, loading from [`MODULE_PATH`].
///
/// This is the accessor most callers use; per-path bridges via
/// [`AllocatorBridge::with_path`] exist for tests and alternative
/// deployments.
pub fn bridge() -> &'static AllocatorBridge {
    static BRIDGE: OnceLock<AllocatorBridge> = OnceLock::new();
    BRIDGE.get_or_init(|| AllocatorBridge::with_path(Path::new(MODULE_PATH)))
}
