// Allow dead code: cell inspection helpers are exercised by tests and kept
// for hosts that poll rather than drain.
#![allow(dead_code)]

//! One-shot UI event cells.
//!
//! `EventCell` carries a single pending notification from a controller to
//! whatever presentation layer is currently attached. Delivery consumes the
//! value, so a view that re-attaches later (rotation, reconnection) never
//! replays a snackbar or a navigation that already happened.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};

/// A single-slot, single-delivery event holder.
///
/// `set` marks the cell dirty and stores the value; a later `set` before
/// delivery overwrites it (last-write-wins, no queue). `take` atomically
/// checks-and-clears the dirty flag, so exactly one consumer sees each
/// pending value.
#[derive(Debug, Default)]
pub struct EventCell<T> {
    slot: Mutex<Option<T>>,
    dirty: AtomicBool,
}

impl<T> EventCell<T> {
    pub fn new() -> Self {
        Self {
            slot: Mutex::new(None),
            dirty: AtomicBool::new(false),
        }
    }

    /// Store a value and mark the cell pending, replacing any undelivered
    /// prior value.
    pub fn set(&self, value: T) {
        *self.lock_slot() = Some(value);
        self.dirty.store(true, Ordering::Release);
    }

    /// Consume the pending value, if any.
    ///
    /// The compare-and-set on the dirty flag is what guarantees single
    /// delivery: of any number of concurrent takers, at most one wins.
    pub fn take(&self) -> Option<T> {
        if self
            .dirty
            .compare_exchange(true, false, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
        {
            self.lock_slot().take()
        } else {
            None
        }
    }

    /// Whether a value is waiting for delivery.
    pub fn is_pending(&self) -> bool {
        self.dirty.load(Ordering::Acquire)
    }

    fn lock_slot(&self) -> std::sync::MutexGuard<'_, Option<T>> {
        // A poisoned slot only means a panicking thread held the lock; the
        // Option inside is still valid either way.
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl EventCell<()> {
    /// Fire a payload-free signal ("show spinner", "dismiss error").
    pub fn call(&self) {
        self.set(());
    }
}
