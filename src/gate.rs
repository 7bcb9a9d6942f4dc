//! Admission gate bounding simultaneously live workers
//!
//! A counting gate in the classic mutex-and-condvar shape: [`Gate::acquire`]
//! blocks while no slot is free, then hands back a [`Permit`] that returns
//! its slot on drop. Permits release on every exit path, panics included.

use parking_lot::{Condvar, Mutex};

/// Counting admission gate for one parallel call.
pub(crate) struct Gate {
    available: Mutex<usize>,
    freed: Condvar,
}

impl Gate {
    /// Create a gate with `slots` admission slots.
    pub(crate) fn new(slots: usize) -> Self {
        Self {
            available: Mutex::new(slots),
            freed: Condvar::new(),
        }
    }

    /// Block until a slot is free, then take it.
    pub(crate) fn acquire(&self) -> Permit<'_> {
        let mut available = self.available.lock();
        while *available == 0 {
            self.freed.wait(&mut available);
        }
        *available -= 1;
        Permit { gate: self }
    }

    fn release(&self) {
        let mut available = self.available.lock();
        *available += 1;
        self.freed.notify_one();
    }
}

/// A held admission slot. Releasing is dropping.
pub(crate) struct Permit<'a> {
    gate: &'a Gate,
}

impl Drop for Permit<'_> {
    fn drop(&mut self) {
        self.gate.release();
    }
}
