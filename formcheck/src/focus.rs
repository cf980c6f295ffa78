//! Focus capability for directing the UI to an invalid field.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use log::debug;

/// Something that can receive focus, usually a UI element.
pub trait Focusable: Send + Sync {
    /// Request focus for this element.
    fn focus(&self);
}

/// Opaque, shared slot holding a field's focus target.
///
/// The UI layer binds its element into the handle; the validator only ever
/// calls [`FocusHandle::focus`]. An unbound handle ignores focus requests.
/// Clones share the same slot.
#[derive(Clone, Default)]
pub struct FocusHandle {
    target: Arc<RwLock<Option<Arc<dyn Focusable>>>>,
}

impl FocusHandle {
    /// Create an unbound handle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a focus target, replacing any previous one.
    pub fn bind(&self, target: Arc<dyn Focusable>) {
        if let Ok(mut guard) = self.target.write() {
            *guard = Some(target);
        }
    }

    /// Remove the focus target.
    pub fn unbind(&self) {
        if let Ok(mut guard) = self.target.write() {
            *guard = None;
        }
    }

    /// Check if a target is bound.
    pub fn is_bound(&self) -> bool {
        self.target
            .read()
            .map(|guard| guard.is_some())
            .unwrap_or(false)
    }

    /// Forward a focus request to the bound target.
    ///
    /// Returns whether a target received the request.
    pub fn focus(&self) -> bool {
        let target = self.target.read().ok().and_then(|guard| guard.clone());
        match target {
            Some(target) => {
                target.focus();
                true
            }
            None => {
                debug!("Focus requested on unbound handle");
                false
            }
        }
    }

    /// Check if both handles share the same slot.
    pub fn same_handle(&self, other: &FocusHandle) -> bool {
        Arc::ptr_eq(&self.target, &other.target)
    }
}

impl fmt::Debug for FocusHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FocusHandle")
            .field("bound", &self.is_bound())
            .finish()
    }
}

/// A focus target that records requests for the runtime to pick up.
#[derive(Debug, Clone, Default)]
pub struct FocusRequest {
    requested: Arc<AtomicBool>,
}

impl FocusRequest {
    /// Create a target with no pending request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether focus has been requested without clearing it.
    pub fn is_requested(&self) -> bool {
        self.requested.load(Ordering::SeqCst)
    }

    /// Check and clear the focus request
    pub fn take_focus_request(&self) -> bool {
        self.requested.swap(false, Ordering::SeqCst)
    }
}

impl Focusable for FocusRequest {
    fn focus(&self) {
        self.requested.store(true, Ordering::SeqCst);
    }
}
