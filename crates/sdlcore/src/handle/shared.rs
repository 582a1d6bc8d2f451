//! Manually reference-counted shared ownership of native handles
//!
//! The owned object is an opaque native handle with a custom destructor, so
//! the standard shared pointer cannot carry it directly; the count lives in
//! its own heap cell exactly as the native wrapper tradition does it. Every
//! copy reads the count through the same cell, so all holders observe the
//! same live value, and the deleter fires precisely when the count reaches
//! zero.
//!
//! No internal synchronization: sharing across threads is the caller's
//! responsibility and is out of scope for this layer (the type is neither
//! `Send` nor `Sync`).

use super::{Deleter, Resource, ResourceKind};
use std::cell::Cell;
use std::marker::PhantomData;
use std::{fmt, mem, ptr};

/// Reference-counted owner of one native handle
///
/// Constructed by consuming a [`Resource`]; copies share the object and the
/// count. An empty shared handle (count pointer null) results from moving
/// out of it or from consuming an empty resource.
pub struct Shared<K: ResourceKind, D: Deleter<K>> {
    raw: *mut K::Raw,
    count: *mut Cell<usize>,
    _deleter: PhantomData<D>,
}

impl<K: ResourceKind, D: Deleter<K>> Shared<K, D> {
    /// Take over an owning handle, starting the count at one
    ///
    /// Consuming an empty resource yields an empty shared handle with no
    /// count allocation.
    #[must_use]
    pub fn new(mut source: Resource<K, D>) -> Self {
        let raw = source.release();
        let count = if raw.is_null() {
            ptr::null_mut()
        } else {
            Box::into_raw(Box::new(Cell::new(1)))
        };
        Self { raw, count, _deleter: PhantomData }
    }

    /// Number of live holders of the underlying object
    ///
    /// Zero for an empty handle.
    #[must_use]
    pub fn use_count(&self) -> usize {
        if self.count.is_null() {
            0
        } else {
            unsafe { (*self.count).get() }
        }
    }

    /// True while this handle participates in ownership of a live object
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.raw.is_null()
    }

    /// The raw pointer, for forwarding into native calls
    #[must_use]
    pub fn as_ptr(&self) -> *mut K::Raw {
        self.raw
    }

    /// Give up shared ownership and return the raw pointer undestroyed
    ///
    /// This is a full ownership transfer: the caller now owns destruction.
    /// It is only sound while this is the sole holder; debug builds assert
    /// that, and release builds log a warning and proceed on the caller's
    /// word. The other holders, if any wrongly exist, will still run the
    /// deleter when their count drains, so a violation here is a double
    /// destroy in the making.
    #[must_use = "the returned pointer is now the caller's to destroy"]
    pub fn release(&mut self) -> *mut K::Raw {
        let holders = self.use_count();
        debug_assert!(
            holders <= 1,
            "releasing a shared {} handle with {holders} holders",
            K::NAME
        );
        if holders > 1 {
            log::warn!(
                "releasing a shared {} handle while {holders} holders remain",
                K::NAME
            );
        }
        self.drop_count_participation();
        mem::replace(&mut self.raw, ptr::null_mut())
    }

    /// Drop this holder's share now, leaving the handle empty
    ///
    /// Destroys the object if this was the last holder. Idempotent.
    pub fn reset(&mut self) {
        if !self.count.is_null() && self.decrement() == 0 {
            log::trace!("destroying shared {} handle", K::NAME);
            unsafe { D::delete(self.raw) };
        }
        self.count = ptr::null_mut();
        self.raw = ptr::null_mut();
    }

    /// Decrement the count, freeing the cell when it hits zero.
    fn decrement(&mut self) -> usize {
        let cell = unsafe { &*self.count };
        let remaining = cell.get() - 1;
        cell.set(remaining);
        if remaining == 0 {
            unsafe { drop(Box::from_raw(self.count)) };
        }
        remaining
    }

    /// Leave the count without touching the object.
    fn drop_count_participation(&mut self) {
        if !self.count.is_null() {
            let _ = self.decrement();
            self.count = ptr::null_mut();
        }
    }
}

impl<K: ResourceKind, D: Deleter<K>> From<Resource<K, D>> for Shared<K, D> {
    fn from(source: Resource<K, D>) -> Self {
        Self::new(source)
    }
}

impl<K: ResourceKind, D: Deleter<K>> Clone for Shared<K, D> {
    fn clone(&self) -> Self {
        if !self.count.is_null() {
            let cell = unsafe { &*self.count };
            cell.set(cell.get() + 1);
        }
        Self { raw: self.raw, count: self.count, _deleter: PhantomData }
    }
}

impl<K: ResourceKind, D: Deleter<K>> Drop for Shared<K, D> {
    fn drop(&mut self) {
        self.reset();
    }
}

impl<K: ResourceKind, D: Deleter<K>> fmt::Debug for Shared<K, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Shared")
            .field("kind", &K::NAME)
            .field("raw", &self.raw)
            .field("use_count", &self.use_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{new_raw, Probe};
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    macro_rules! counting_deleter {
        ($name:ident, $counter:ident) => {
            static $counter: AtomicUsize = AtomicUsize::new(0);
            struct $name;
            impl Deleter<Probe> for $name {
                unsafe fn delete(raw: *mut u64) {
                    $counter.fetch_add(1, Ordering::SeqCst);
                    drop(Box::from_raw(raw));
                }
            }
        };
    }

    fn new_shared<D: Deleter<Probe>>(value: u64) -> Shared<Probe, D> {
        Shared::new(unsafe { Resource::<Probe, D>::from_raw(new_raw(value)) })
    }

    #[test]
    fn test_count_tracks_copies_and_resets() {
        counting_deleter!(Del, DELETES);

        let a = new_shared::<Del>(1);
        assert_eq!(a.use_count(), 1);

        let mut b = a.clone();
        assert_eq!(a.use_count(), 2);
        assert_eq!(b.use_count(), 2);

        b.reset();
        assert_eq!(a.use_count(), 1);
        assert_eq!(b.use_count(), 0);
        assert!(!b.is_valid());
        assert_eq!(DELETES.load(Ordering::SeqCst), 0);

        drop(a);
        assert_eq!(DELETES.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_deleter_fires_once_regardless_of_drop_order() {
        counting_deleter!(Del, DELETES);

        let a = new_shared::<Del>(2);
        let b = a.clone();
        let c = b.clone();
        assert_eq!(a.use_count(), 3);

        drop(a);
        assert_eq!(DELETES.load(Ordering::SeqCst), 0);
        drop(c);
        assert_eq!(DELETES.load(Ordering::SeqCst), 0);
        drop(b);
        assert_eq!(DELETES.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_empty_resource_yields_empty_shared() {
        counting_deleter!(Del, DELETES);

        let mut resource = unsafe { Resource::<Probe, Del>::from_raw(new_raw(3)) };
        let raw = resource.release();
        unsafe { drop(Box::from_raw(raw)) };

        let shared = Shared::new(resource);
        assert_eq!(shared.use_count(), 0);
        assert!(!shared.is_valid());
        drop(shared);
        assert_eq!(DELETES.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_release_transfers_full_ownership() {
        counting_deleter!(Del, DELETES);

        let mut sole = new_shared::<Del>(4);
        let raw = sole.release();
        assert!(!sole.is_valid());
        assert_eq!(sole.use_count(), 0);
        drop(sole);

        // The deleter never ran; destruction is now on us.
        assert_eq!(DELETES.load(Ordering::SeqCst), 0);
        unsafe {
            assert_eq!(*raw, 4);
            drop(Box::from_raw(raw));
        }
    }

    #[test]
    #[should_panic(expected = "holders")]
    fn test_release_while_aliased_asserts_in_debug() {
        struct NoopDelete;
        impl Deleter<Probe> for NoopDelete {
            unsafe fn delete(raw: *mut u64) {
                drop(Box::from_raw(raw));
            }
        }

        let mut a = new_shared::<NoopDelete>(5);
        let _b = a.clone();
        let _ = a.release();
    }

    #[test]
    fn test_reset_is_idempotent() {
        counting_deleter!(Del, DELETES);

        let mut shared = new_shared::<Del>(6);
        shared.reset();
        shared.reset();
        assert_eq!(DELETES.load(Ordering::SeqCst), 1);
    }
}
