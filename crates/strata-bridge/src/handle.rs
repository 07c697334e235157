//! Opaque handles to native memory blocks.

use std::fmt;

/// An opaque reference to a block of native memory sized and shaped for
/// one class instance.
///
/// The bridge performs no tracking or reclamation: the handle is
/// exclusively owned by the caller that received it, and lifetime
/// management (including eventual deallocation) is the caller's
/// responsibility. Two successful allocations always yield distinct
/// handles referring to non-overlapping memory.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NativeHandle(u64);

impl NativeHandle {
    /// Wrap a raw handle value received from the native module.
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw handle value, for passing back across a native boundary.
    pub fn as_raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for NativeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#018x}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_round_trip() {
        let h = NativeHandle::from_raw(0xdead_beef);
        assert_eq!(h.as_raw(), 0xdead_beef);
    }

    #[test]
    fn display_is_fixed_width_hex() {
        assert_eq!(NativeHandle::from_raw(0x10).to_string(), "0x0000000000000010");
    }
}
