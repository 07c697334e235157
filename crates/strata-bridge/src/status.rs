//! ABI-stable status codes returned by the native allocator module.

use crate::error::BridgeError;

/// Status code returned by the native allocation entry point.
///
/// `Ok` = 0, all errors are negative. Values are ABI-stable: the native
/// module and this crate are compiled independently and agree on nothing
/// but this table and the entry-point signature.
#[repr(i32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NativeStatus {
    /// Allocation succeeded; the out-parameter holds a valid handle.
    Ok = 0,
    /// The native side cannot resolve the class name.
    UnknownClass = -1,
    /// The native side cannot satisfy the allocation.
    AllocationFailed = -2,
    /// The class name pointer or handle out-parameter was invalid.
    InvalidArgument = -3,
}

impl NativeStatus {
    /// Decode a raw status value. Returns `None` for codes outside the
    /// agreed table (an out-of-contract native module).
    pub fn from_raw(raw: i32) -> Option<Self> {
        match raw {
            0 => Some(Self::Ok),
            -1 => Some(Self::UnknownClass),
            -2 => Some(Self::AllocationFailed),
            -3 => Some(Self::InvalidArgument),
            _ => None,
        }
    }

    /// Map a non-`Ok` status to the bridge error for `class_name`.
    ///
    /// Any status outside the `UnknownClass` case (including codes not in
    /// the table) is reported as a failed allocation — the boundary
    /// defines no finer-grained recovery.
    pub(crate) fn into_error(self, class_name: &str) -> BridgeError {
        match self {
            Self::UnknownClass => BridgeError::UnknownClass {
                name: class_name.to_owned(),
            },
            _ => BridgeError::NativeAllocation {
                name: class_name.to_owned(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_codes_round_trip() {
        for status in [
            NativeStatus::Ok,
            NativeStatus::UnknownClass,
            NativeStatus::AllocationFailed,
            NativeStatus::InvalidArgument,
        ] {
            assert_eq!(NativeStatus::from_raw(status as i32), Some(status));
        }
    }

    #[test]
    fn out_of_contract_codes_decode_to_none() {
        assert_eq!(NativeStatus::from_raw(1), None);
        assert_eq!(NativeStatus::from_raw(-99), None);
    }

    #[test]
    fn unknown_class_maps_to_unknown_class_error() {
        assert_eq!(
            NativeStatus::UnknownClass.into_error("demo.Foo"),
            BridgeError::UnknownClass {
                name: "demo.Foo".into()
            }
        );
    }

    #[test]
    fn other_failures_map_to_allocation_error() {
        for status in [NativeStatus::AllocationFailed, NativeStatus::InvalidArgument] {
            assert_eq!(
                status.into_error("demo.Foo"),
                BridgeError::NativeAllocation {
                    name: "demo.Foo".into()
                }
            );
        }
    }
}
