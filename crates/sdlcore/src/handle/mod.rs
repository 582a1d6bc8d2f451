//! Capability-gated ownership over raw native handles
//!
//! The native library hands out raw, non-owning pointers that must be
//! destroyed exactly once, by the matching destructor, and never touched
//! after destruction. [`Resource`] is the single owner of such a pointer:
//! move-only, destroyed on drop, with explicit [`Resource::release`] and
//! [`Resource::reset`] escape hatches. Non-owning views ([`Ref`],
//! [`RefMut`]) and shared ownership ([`Shared`]) are layered on top.
//!
//! Error channels follow the crate-wide split: expected failures (a native
//! constructor returning null) surface as [`HandleError`]; programmer errors
//! (wrapping null through the unchecked path) are debug assertions that
//! compile out in release builds.

pub mod kind;
pub mod reference;
pub mod shared;

pub use kind::{AudioDevice, RelatedTo, Renderer, ResourceKind, Surface, Texture, Window};
pub use reference::{Ref, RefMut};
pub use shared::Shared;

use std::marker::PhantomData;
use std::{fmt, mem, ptr};
use thiserror::Error;

/// Handle construction errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HandleError {
    /// The native constructor reported success but returned null.
    #[error("native {kind} constructor returned a null handle")]
    NullHandle {
        /// Diagnostic name of the resource kind.
        kind: &'static str,
    },
}

/// Result alias for handle operations
pub type HandleResult<T> = Result<T, HandleError>;

/// Destructor bound to a resource kind at the type level
///
/// Tying the trait to the kind rather than to the raw pointee type means a
/// deleter declared for surfaces can never be instantiated against a texture
/// handle; the mismatch is a type error.
pub trait Deleter<K: ResourceKind> {
    /// Destroy the native object behind `raw`.
    ///
    /// # Safety
    ///
    /// `raw` must be non-null, live, and must not be used afterwards.
    unsafe fn delete(raw: *mut K::Raw);
}

/// Exclusive owner of one native handle
///
/// Either empty (null, the moved-from/reset state) or holding a live native
/// object it will destroy exactly once. Copying is disabled; shared
/// ownership is the job of [`Shared`].
pub struct Resource<K: ResourceKind, D: Deleter<K>> {
    raw: *mut K::Raw,
    _deleter: PhantomData<D>,
}

impl<K: ResourceKind, D: Deleter<K>> Resource<K, D> {
    /// Take ownership of a raw native handle
    ///
    /// Debug builds treat a null pointer as a fatal programmer error; in
    /// release builds the check compiles out and the resulting handle is
    /// simply empty. Callers with a fallible native constructor should go
    /// through [`Resource::try_from_raw`] instead.
    ///
    /// # Safety
    ///
    /// `raw` must point to a live native object of this kind, and no other
    /// owner may be responsible for destroying it.
    #[must_use]
    pub unsafe fn from_raw(raw: *mut K::Raw) -> Self {
        debug_assert!(
            !raw.is_null(),
            "null {} pointer given to Resource::from_raw",
            K::NAME
        );
        Self { raw, _deleter: PhantomData }
    }

    /// Take ownership of a raw handle, reporting null as a recoverable error
    ///
    /// This is the channel for "the native call failed and returned null",
    /// which is an expected outcome rather than a bug.
    ///
    /// # Safety
    ///
    /// Same as [`Resource::from_raw`], except that `raw` may be null.
    pub unsafe fn try_from_raw(raw: *mut K::Raw) -> HandleResult<Self> {
        if raw.is_null() {
            return Err(HandleError::NullHandle { kind: K::NAME });
        }
        Ok(Self { raw, _deleter: PhantomData })
    }

    /// True while the handle owns a live native object
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.raw.is_null()
    }

    /// The raw pointer, for forwarding into native calls
    ///
    /// Ownership is unaffected; the pointer must not outlive this handle.
    #[must_use]
    pub fn as_ptr(&self) -> *mut K::Raw {
        self.raw
    }

    /// Give up ownership without destroying the native object
    ///
    /// The handle becomes empty and its destructor will not run the deleter.
    /// The caller now owns destruction.
    #[must_use = "the returned pointer is now the caller's to destroy"]
    pub fn release(&mut self) -> *mut K::Raw {
        mem::replace(&mut self.raw, ptr::null_mut())
    }

    /// Destroy the owned object now, leaving the handle empty
    ///
    /// Idempotent: a second call on an already-empty handle does nothing.
    pub fn reset(&mut self) {
        if !self.raw.is_null() {
            log::trace!("destroying {} handle", K::NAME);
            unsafe { D::delete(self.raw) };
            self.raw = ptr::null_mut();
        }
    }
}

impl<K: ResourceKind, D: Deleter<K>> Drop for Resource<K, D> {
    fn drop(&mut self) {
        self.reset();
    }
}

impl<K: ResourceKind, D: Deleter<K>> fmt::Debug for Resource<K, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resource")
            .field("kind", &K::NAME)
            .field("raw", &self.raw)
            .finish()
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    //! Probe kind and deleters shared by the ownership tests.

    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// A fake resource kind whose "native object" is a heap `u64`.
    #[derive(Debug)]
    pub struct Probe;

    impl ResourceKind for Probe {
        type Raw = u64;
        const NAME: &'static str = "probe";
    }

    /// Allocate a fake native object.
    pub fn new_raw(value: u64) -> *mut u64 {
        Box::into_raw(Box::new(value))
    }

    /// Deleter that frees the box and bumps an external counter.
    ///
    /// Each test declares its own counter so parallel tests cannot interfere.
    pub struct CountingDelete<const ID: usize>;

    pub static COUNTERS: [AtomicUsize; 4] = [
        AtomicUsize::new(0),
        AtomicUsize::new(0),
        AtomicUsize::new(0),
        AtomicUsize::new(0),
    ];

    impl<const ID: usize> Deleter<Probe> for CountingDelete<ID> {
        unsafe fn delete(raw: *mut u64) {
            COUNTERS[ID].fetch_add(1, Ordering::SeqCst);
            drop(Box::from_raw(raw));
        }
    }

    pub fn count<const ID: usize>() -> usize {
        COUNTERS[ID].load(Ordering::SeqCst)
    }
}
