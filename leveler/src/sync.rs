// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! State shared between interrupt handlers.
//!
//! [`Shared`] is a `static`-friendly cell that starts empty, is filled once during bring-up and is
//! then only reached through a critical section. Every access runs with interrupts masked, so two
//! handlers touching the same value are serialized and neither can observe the other half-done.

use core::cell::RefCell;

use critical_section::Mutex;

pub struct Shared<T> {
    inner: Mutex<RefCell<Option<T>>>,
}

impl<T> Shared<T> {
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(None)),
        }
    }

    /// Move `value` in, replacing anything installed before.
    pub fn install(&self, value: T) {
        critical_section::with(|cs| {
            self.inner.borrow(cs).replace(Some(value));
        });
    }

    /// Run `f` on the value inside a critical section.
    ///
    /// Returns `None` if nothing has been installed yet, e.g. an interrupt that fires before
    /// bring-up finished.
    pub fn with<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        critical_section::with(|cs| self.inner.borrow(cs).borrow_mut().as_mut().map(f))
    }

    /// Move the value back out.
    pub fn take(&self) -> Option<T> {
        critical_section::with(|cs| self.inner.borrow(cs).take())
    }
}

impl<T> Default for Shared<T> {
    fn default() -> Self {
        Self::new()
    }
}
