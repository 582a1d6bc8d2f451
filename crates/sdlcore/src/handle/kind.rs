//! Type-level resource kinds and their declared relationships
//!
//! A kind is a zero-size marker tying a handle to the native pointee type it
//! wraps. The concrete wrapper types that call the native creation functions
//! live above this crate; down here the kinds exist so that deleters,
//! references and capability tokens can be checked against each other at
//! compile time.

use crate::capability::{sealed, TokenOwner};
use crate::sys;

/// A kind of native resource a handle can own
pub trait ResourceKind {
    /// The opaque native pointee type.
    type Raw;

    /// Diagnostic name used in assertions and log lines.
    const NAME: &'static str;
}

/// Declares that a reference to `Self` may be re-viewed as a reference to `U`
///
/// Only the pairs below exist: a window and the renderer or surface attached
/// to it (and back). Conversions for any other pair do not compile:
///
/// ```compile_fail
/// use sdlcore::handle::kind::{RelatedTo, Surface, Texture};
///
/// fn requires_relationship<K: RelatedTo<Texture>>() {}
/// requires_relationship::<Surface>();
/// ```
///
/// The declared pairs compile:
///
/// ```
/// use sdlcore::handle::kind::{RelatedTo, Renderer, Window};
///
/// fn requires_relationship<K: RelatedTo<Renderer>>() {}
/// requires_relationship::<Window>();
/// ```
pub trait RelatedTo<U: ResourceKind>: ResourceKind {}

macro_rules! resource_kind {
    ($(#[$doc:meta] $kind:ident => $raw:ty, $name:literal),+ $(,)?) => {
        $(
            #[$doc]
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
            pub struct $kind;

            impl ResourceKind for $kind {
                type Raw = $raw;
                const NAME: &'static str = $name;
            }
        )+
    };
}

resource_kind! {
    /// Top-level window kind.
    Window => sys::RawWindow, "window",
    /// Hardware renderer kind, always attached to a window.
    Renderer => sys::RawRenderer, "renderer",
    /// Software surface kind.
    Surface => sys::RawSurface, "surface",
    /// GPU texture kind, created from a renderer.
    Texture => sys::RawTexture, "texture",
    /// Audio device kind.
    AudioDevice => sys::RawAudioDevice, "audio device",
}

impl RelatedTo<Renderer> for Window {}
impl RelatedTo<Window> for Renderer {}
impl RelatedTo<Surface> for Window {}
impl RelatedTo<Window> for Surface {}

// Kinds that own cross-kind accessors can vouch for them with a token.
impl sealed::Sealed for Window {}
impl sealed::Sealed for Renderer {}
impl sealed::Sealed for Surface {}
impl TokenOwner for Window {}
impl TokenOwner for Renderer {}
impl TokenOwner for Surface {}
