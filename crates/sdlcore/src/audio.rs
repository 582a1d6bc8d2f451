//! Scoped locking around the native audio callback thread
//!
//! The native library runs the audio callback on its own thread; the device
//! exposes a lock/unlock pair that excludes that thread while application
//! code touches shared buffer state. The core does not implement the lock —
//! it only guarantees, via RAII, that every `lock` is matched by an `unlock`
//! on all exit paths, including panics. Calling back into the same device's
//! buffer operations while a guard is held remains the caller's contract.

use std::ops::{Deref, DerefMut};

/// A device whose callback thread can be excluded for a scope
///
/// Implemented by the wrapper layer on top of its audio device handle,
/// forwarding to the native lock/unlock calls.
pub trait BufferLock {
    /// Exclude the callback thread. Blocks until the callback returns.
    fn lock(&mut self);

    /// Re-admit the callback thread.
    fn unlock(&mut self);
}

/// RAII scope holding a device's callback lock
///
/// Locks on construction, unlocks when dropped. Dereferences to the device
/// so buffer state can be manipulated inside the scope.
#[derive(Debug)]
pub struct LockGuard<'a, L: BufferLock> {
    device: &'a mut L,
}

impl<'a, L: BufferLock> LockGuard<'a, L> {
    /// Lock `device` for the lifetime of the guard
    pub fn new(device: &'a mut L) -> Self {
        device.lock();
        log::trace!("audio callback lock acquired");
        Self { device }
    }
}

impl<L: BufferLock> Deref for LockGuard<'_, L> {
    type Target = L;

    fn deref(&self) -> &L {
        self.device
    }
}

impl<L: BufferLock> DerefMut for LockGuard<'_, L> {
    fn deref_mut(&mut self) -> &mut L {
        self.device
    }
}

impl<L: BufferLock> Drop for LockGuard<'_, L> {
    fn drop(&mut self) {
        self.device.unlock();
        log::trace!("audio callback lock released");
    }
}
