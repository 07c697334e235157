//! Bridge error types.

use std::error::Error;
use std::fmt;

/// Errors from the native allocation bridge.
///
/// None of these are usefully transient: a failed module load is never
/// retried within the process, an unknown class is a programmer error,
/// and native-memory exhaustion does not clear on its own. The bridge
/// performs no retries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BridgeError {
    /// The native allocator module failed to load or is missing its
    /// entry point. Fatal to every future `allocate` call in the same
    /// process — no re-load attempt is made.
    AllocatorUnavailable {
        /// Human-readable load failure description.
        reason: String,
    },
    /// The native side could not independently resolve the class.
    UnknownClass {
        /// The class name passed across the boundary (dotted form).
        name: String,
    },
    /// The native side could not satisfy the allocation (e.g. out of
    /// native memory).
    NativeAllocation {
        /// The class whose allocation failed.
        name: String,
    },
}

impl fmt::Display for BridgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllocatorUnavailable { reason } => {
                write!(f, "native allocator module unavailable: {reason}")
            }
            Self::UnknownClass { name } => {
                write!(f, "native allocator cannot resolve class '{name}'")
            }
            Self::NativeAllocation { name } => {
                write!(f, "native allocation failed for class '{name}'")
            }
        }
    }
}

impl Error for BridgeError {}
