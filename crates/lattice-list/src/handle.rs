//! Structural handles to rendered elements.
//!
//! An [`ElementHandle`] is created by the caller before a render pass and
//! handed to the list (for the list root) or to an item (for that item's
//! root). When the pass completes the handle points at the element it was
//! attached to. Handles are cheap to clone; clones share the same slot.

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::markup::ElementId;

/// Shared, rebindable reference to a rendered element.
#[derive(Clone, Default)]
pub struct ElementHandle {
    slot: Arc<RwLock<Option<ElementId>>>,
}

impl ElementHandle {
    /// Create an unbound handle.
    pub fn new() -> Self {
        Self::default()
    }

    /// The element bound by the most recent render pass.
    pub fn current(&self) -> Option<ElementId> {
        *self.slot.read()
    }

    /// Returns `true` once a render pass has bound the handle.
    pub fn is_bound(&self) -> bool {
        self.slot.read().is_some()
    }

    /// Bind the handle to `id`.
    pub(crate) fn bind(&self, id: ElementId) {
        *self.slot.write() = Some(id);
    }

    /// Clear the binding.
    pub fn clear(&self) {
        *self.slot.write() = None;
    }

    /// Returns `true` if both handles share the same slot.
    pub fn ptr_eq(&self, other: &ElementHandle) -> bool {
        Arc::ptr_eq(&self.slot, &other.slot)
    }
}

impl fmt::Debug for ElementHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ElementHandle").field(&self.current()).finish()
    }
}

impl PartialEq for ElementHandle {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for ElementHandle {}
