//! Non-owning views of owned handles
//!
//! A [`Ref`] is a pointer-sized view borrowed from a [`Resource`]; it never
//! destroys anything. The borrow it carries makes the two lifetime rules of
//! this layer compile-time facts rather than documentation:
//!
//! - a view cannot outlive the handle it was taken from;
//! - a shared view cannot bind to a temporary handle that is about to be
//!   destroyed.
//!
//! ```compile_fail
//! use sdlcore::handle::{kind::Window, Deleter, Ref, Resource};
//! use sdlcore::sys::RawWindow;
//!
//! struct NoopDelete;
//! impl Deleter<Window> for NoopDelete {
//!     unsafe fn delete(_: *mut RawWindow) {}
//! }
//!
//! fn dangling(raw: *mut RawWindow) -> *mut RawWindow {
//!     // The resource is a temporary; the view cannot escape it.
//!     let view = Ref::new(&unsafe { Resource::<Window, NoopDelete>::from_raw(raw) });
//!     view.as_ptr()
//! }
//! ```
//!
//! Cross-kind views (the window behind a renderer, the surface of a window)
//! exist only for the pairs declared by [`RelatedTo`], and constructing one
//! additionally requires a capability token, so only the wrapper code that
//! owns the native query call can mint them.

use super::{Deleter, RelatedTo, Resource, ResourceKind};
use crate::capability::{Token, TokenOwner};
use std::fmt;
use std::marker::PhantomData;

/// Shared, non-owning view of a [`Resource`]
pub struct Ref<'a, K: ResourceKind> {
    raw: *mut K::Raw,
    _source: PhantomData<&'a K::Raw>,
}

impl<'a, K: ResourceKind> Ref<'a, K> {
    /// Borrow a view from an owning handle
    ///
    /// Debug builds assert the handle is valid; viewing an empty handle is a
    /// programmer error.
    #[must_use]
    pub fn new<D: Deleter<K>>(source: &'a Resource<K, D>) -> Self {
        debug_assert!(
            source.is_valid(),
            "taking a {} view of an empty handle",
            K::NAME
        );
        Self { raw: source.as_ptr(), _source: PhantomData }
    }

    /// The raw pointer, for forwarding into native calls
    #[must_use]
    pub fn as_ptr(&self) -> *mut K::Raw {
        self.raw
    }

    /// Re-view a native pointer obtained through this handle as a related kind
    ///
    /// `raw` is the result of a native ownership query (for example "which
    /// window does this renderer draw into"); the returned view shares this
    /// view's lifetime because the native library ties the two objects'
    /// lifetimes together. Only declared [`RelatedTo`] pairs compile, and the
    /// token parameter keeps the entry point private to the wrapper code
    /// authorized to perform the query.
    ///
    /// Returns `None` when the native query produced null.
    #[must_use]
    pub fn related<U>(&self, raw: *mut U::Raw, _authority: Token<K>) -> Option<Ref<'a, U>>
    where
        K: RelatedTo<U> + TokenOwner,
        U: ResourceKind,
    {
        if raw.is_null() {
            return None;
        }
        Some(Ref { raw, _source: PhantomData })
    }
}

impl<K: ResourceKind> Clone for Ref<'_, K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K: ResourceKind> Copy for Ref<'_, K> {}

impl<K: ResourceKind> fmt::Debug for Ref<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ref")
            .field("kind", &K::NAME)
            .field("raw", &self.raw)
            .finish()
    }
}

/// Exclusive, non-owning view of a [`Resource`]
///
/// Borrowed mutably, so no other view of the same handle can exist while it
/// lives. Used by operations that mutate the native object through the
/// wrapper layer.
pub struct RefMut<'a, K: ResourceKind> {
    raw: *mut K::Raw,
    _source: PhantomData<&'a mut K::Raw>,
}

impl<'a, K: ResourceKind> RefMut<'a, K> {
    /// Borrow an exclusive view from an owning handle
    #[must_use]
    pub fn new<D: Deleter<K>>(source: &'a mut Resource<K, D>) -> Self {
        debug_assert!(
            source.is_valid(),
            "taking a {} view of an empty handle",
            K::NAME
        );
        Self { raw: source.as_ptr(), _source: PhantomData }
    }

    /// The raw pointer, for forwarding into native calls
    #[must_use]
    pub fn as_ptr(&self) -> *mut K::Raw {
        self.raw
    }
}

impl<K: ResourceKind> fmt::Debug for RefMut<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RefMut")
            .field("kind", &K::NAME)
            .field("raw", &self.raw)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{new_raw, Probe};
    use super::super::{kind, Deleter, Resource};
    use super::*;

    struct FreeDelete;
    impl Deleter<Probe> for FreeDelete {
        unsafe fn delete(raw: *mut u64) {
            drop(Box::from_raw(raw));
        }
    }

    struct WindowDelete;
    impl Deleter<kind::Window> for WindowDelete {
        unsafe fn delete(_: *mut crate::sys::RawWindow) {}
    }

    type ProbeResource = Resource<Probe, FreeDelete>;

    #[test]
    fn test_view_tracks_source_pointer() {
        let mut resource = unsafe { ProbeResource::from_raw(new_raw(11)) };
        let view = Ref::new(&resource);
        assert_eq!(view.as_ptr(), resource.as_ptr());

        let copied = view;
        assert_eq!(copied.as_ptr(), view.as_ptr());

        let exclusive = RefMut::new(&mut resource);
        let raw = exclusive.as_ptr();
        assert_eq!(unsafe { *raw }, 11);
    }

    #[test]
    fn test_related_rejects_null_query_result() {
        let raw = Box::into_raw(Box::new(0u64)).cast::<crate::sys::RawWindow>();
        let resource = unsafe { Resource::<kind::Window, WindowDelete>::from_raw(raw) };
        let window = Ref::new(&resource);

        let missing: Option<Ref<'_, kind::Renderer>> =
            window.related(std::ptr::null_mut(), Token::new());
        assert!(missing.is_none());

        drop(resource);
        unsafe { drop(Box::from_raw(raw.cast::<u64>())) };
    }

    #[test]
    fn test_related_yields_view_of_declared_kind() {
        let raw = Box::into_raw(Box::new(0u64)).cast::<crate::sys::RawWindow>();
        let fake_renderer = Box::into_raw(Box::new(0u64)).cast::<crate::sys::RawRenderer>();

        let resource = unsafe { Resource::<kind::Window, WindowDelete>::from_raw(raw) };
        let window = Ref::new(&resource);
        let renderer: Ref<'_, kind::Renderer> =
            window.related(fake_renderer, Token::new()).unwrap();
        assert_eq!(renderer.as_ptr(), fake_renderer);

        drop(resource);
        unsafe {
            drop(Box::from_raw(raw.cast::<u64>()));
            drop(Box::from_raw(fake_renderer.cast::<u64>()));
        }
    }

    #[test]
    #[should_panic(expected = "view of an empty handle")]
    fn test_view_of_empty_handle_asserts() {
        let mut resource = unsafe { ProbeResource::from_raw(new_raw(12)) };
        let raw = resource.release();
        // Reclaim the fake object so the panic path does not leak it.
        unsafe { drop(Box::from_raw(raw)) };
        let _view = Ref::new(&resource);
    }
}
