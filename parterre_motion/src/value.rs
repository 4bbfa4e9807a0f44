// Copyright 2025 the Parterre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;
use alloc::rc::Rc;
use core::cell::{Cell, RefCell};
use core::fmt;

use smallvec::SmallVec;

type Listener = Box<dyn FnMut(f64)>;

struct Shared {
    value: Cell<f64>,
    next_id: Cell<u64>,
    listeners: RefCell<SmallVec<[(u64, Listener); 2]>>,
}

/// An observable `f64` cell.
///
/// `MotionValue` is a cheaply cloneable handle to a shared numeric state
/// cell. Every [`MotionValue::set`] notifies all registered listeners
/// synchronously with the new value, so derived state (such as a cell's
/// distance ratio) can follow the value without polling.
///
/// Handles are single-threaded by design; the whole motion model advances on
/// one frame timeline and no locking is involved.
///
/// # Reentrancy
///
/// Listeners may read any `MotionValue` (including the one notifying them),
/// but must not subscribe to or drop a [`Subscription`] of the value they
/// are currently being notified by.
#[derive(Clone)]
pub struct MotionValue {
    shared: Rc<Shared>,
}

impl MotionValue {
    /// Creates a new cell holding `value`, with no listeners.
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self {
            shared: Rc::new(Shared {
                value: Cell::new(value),
                next_id: Cell::new(0),
                listeners: RefCell::new(SmallVec::new()),
            }),
        }
    }

    /// Returns the current value.
    #[must_use]
    pub fn get(&self) -> f64 {
        self.shared.value.get()
    }

    /// Stores `value` and synchronously notifies every listener.
    ///
    /// Listeners run in subscription order. Notification happens on every
    /// mutation, including sets to the identical value.
    pub fn set(&self, value: f64) {
        self.shared.value.set(value);
        let mut listeners = self.shared.listeners.borrow_mut();
        for (_, listener) in listeners.iter_mut() {
            listener(value);
        }
    }

    /// Registers a listener, returning a guard that deregisters it on drop.
    ///
    /// The listener is called with the new value on every subsequent
    /// [`MotionValue::set`]. It is not called with the current value at
    /// subscription time; callers that need it should read
    /// [`MotionValue::get`] first.
    #[must_use]
    pub fn subscribe(&self, listener: impl FnMut(f64) + 'static) -> Subscription {
        let id = self.shared.next_id.get();
        self.shared.next_id.set(id + 1);
        self.shared
            .listeners
            .borrow_mut()
            .push((id, Box::new(listener)));
        Subscription {
            shared: self.shared.clone(),
            id,
        }
    }

    /// Returns the number of currently registered listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.shared.listeners.borrow().len()
    }
}

impl fmt::Debug for MotionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MotionValue")
            .field("value", &self.get())
            .field("listeners", &self.listener_count())
            .finish()
    }
}

/// Guard for a registered [`MotionValue`] listener.
///
/// Dropping the guard deregisters the listener, scoping observation to the
/// owning object's lifetime (subscribe on mount, drop on unmount).
pub struct Subscription {
    shared: Rc<Shared>,
    id: u64,
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.shared
            .listeners
            .borrow_mut()
            .retain(|(id, _)| *id != self.id);
    }
}
