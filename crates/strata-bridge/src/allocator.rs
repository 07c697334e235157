//! The allocation seam.

use crate::error::BridgeError;
use crate::handle::NativeHandle;

/// Allocate native memory shaped like a named class.
///
/// Implemented by [`NativeModule`](crate::NativeModule) (the real extern
/// boundary) and [`AllocatorBridge`](crate::AllocatorBridge) (the
/// process-scoped gate), and by mock allocators in tests. Implementations
/// must be safe to call from any number of threads concurrently.
pub trait ArenaAllocator {
    /// Allocate a zero-initialized block of native memory of at least the
    /// class's instance size, header region reserved as the managed
    /// runtime's memory model expects.
    ///
    /// Accepts dotted or slash-separated class names. Each successful call
    /// returns a distinct handle to independently allocated memory.
    fn allocate(&self, class_name: &str) -> Result<NativeHandle, BridgeError>;
}
