//! Test utilities and mock types for Strata development.
//!
//! Provides a [`MockRuntime`] implementing
//! [`RuntimeIntrospect`](strata_layout::RuntimeIntrospect) with canned
//! class layouts, and a [`MockAllocator`] implementing
//! [`ArenaAllocator`](strata_bridge::ArenaAllocator) with deterministic
//! handle assignment and configurable failure behavior.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

use strata_bridge::{ArenaAllocator, BridgeError, NativeHandle};
use strata_core::{normalize_class_name, LayoutError};
use strata_layout::{FieldDecl, RuntimeIntrospect};

/// A canned class layout, handed out by [`MockRuntime::resolve_class`].
#[derive(Clone, Debug)]
pub struct MockClass {
    name: String,
    declared: Vec<FieldDecl>,
    offsets: HashMap<String, u64>,
    instance_size: u64,
    header_size: u64,
}

/// Mock managed runtime backed by a map of canned class layouts.
///
/// Pre-populate classes with [`set_class`](MockRuntime::set_class) before
/// passing to code under test. [`forget_offset`](MockRuntime::forget_offset)
/// simulates a layout report naming a field whose offset lookup then
/// fails.
pub struct MockRuntime {
    header_size: u64,
    classes: HashMap<String, MockClass>,
}

impl MockRuntime {
    /// A runtime whose memory model reserves `header_size` bytes of
    /// metadata at the start of every instance.
    pub fn new(header_size: u64) -> Self {
        Self {
            header_size,
            classes: HashMap::new(),
        }
    }

    /// Register a class. `fields` is `(name, declared type name, offset)`
    /// in declaration order.
    pub fn set_class(
        &mut self,
        name: impl Into<String>,
        instance_size: u64,
        fields: &[(&str, &str, u64)],
    ) {
        let name = name.into();
        let declared = fields
            .iter()
            .map(|(field, ty, _)| FieldDecl {
                name: (*field).to_owned(),
                type_name: (*ty).to_owned(),
            })
            .collect();
        let offsets = fields
            .iter()
            .map(|(field, _, offset)| ((*field).to_owned(), *offset))
            .collect();
        self.classes.insert(
            name.clone(),
            MockClass {
                name,
                declared,
                offsets,
                instance_size,
                header_size: self.header_size,
            },
        );
    }

    /// Remove a field's offset entry while leaving it in the declared
    /// field list, so offset lookup fails after listing succeeds.
    pub fn forget_offset(&mut self, class: &str, field: &str) {
        if let Some(c) = self.classes.get_mut(class) {
            c.offsets.remove(field);
        }
    }
}

impl RuntimeIntrospect for MockRuntime {
    type Class = MockClass;

    fn resolve_class(&self, name: &str) -> Result<MockClass, LayoutError> {
        self.classes
            .get(name)
            .cloned()
            .ok_or_else(|| LayoutError::ClassResolution {
                name: name.to_owned(),
            })
    }

    fn list_fields(&self, class: &MockClass) -> Vec<FieldDecl> {
        class.declared.clone()
    }

    fn field_offset(&self, class: &MockClass, field: &str) -> Result<u64, LayoutError> {
        class
            .offsets
            .get(field)
            .copied()
            .ok_or_else(|| LayoutError::FieldResolution {
                class: class.name.clone(),
                field: field.to_owned(),
            })
    }

    fn instance_size(&self, class: &MockClass) -> u64 {
        class.instance_size
    }

    fn header_size(&self, class: &MockClass) -> u64 {
        class.header_size
    }
}

/// Mock arena allocator with a bump-counter handle source.
///
/// Knows a fixed set of class names; allocations for anything else fail
/// with `UnknownClass`. An optional capacity makes allocation fail
/// deterministically after N successes, for exhaustion-path testing.
pub struct MockAllocator {
    known: Vec<String>,
    next_handle: AtomicU64,
    remaining: Option<AtomicUsize>,
}

impl MockAllocator {
    /// An allocator that can resolve exactly the given class names.
    pub fn new(known: &[&str]) -> Self {
        Self {
            known: known.iter().map(|n| (*n).to_owned()).collect(),
            next_handle: AtomicU64::new(0x1000),
            remaining: None,
        }
    }

    /// Fail with `NativeAllocation` after `capacity` successful
    /// allocations.
    pub fn with_capacity(known: &[&str], capacity: usize) -> Self {
        Self {
            remaining: Some(AtomicUsize::new(capacity)),
            ..Self::new(known)
        }
    }
}

impl ArenaAllocator for MockAllocator {
    fn allocate(&self, class_name: &str) -> Result<NativeHandle, BridgeError> {
        let name = normalize_class_name(class_name);
        if !self.known.iter().any(|k| k == &name) {
            return Err(BridgeError::UnknownClass { name });
        }
        if let Some(remaining) = &self.remaining {
            // fetch_update returns Err when the counter is already zero.
            if remaining
                .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
                .is_err()
            {
                return Err(BridgeError::NativeAllocation { name });
            }
        }
        let raw = self.next_handle.fetch_add(0x40, Ordering::SeqCst);
        Ok(NativeHandle::from_raw(raw))
    }
}
