//! Hand-declared native layout layer
//!
//! This module reproduces, in `#[repr(C)]`, the handful of native records the
//! safe core must overlay in place: the event record family and the opaque
//! pointee types behind every resource handle. Nothing here calls into the
//! native library; the creation/destruction forwarders live in the wrapper
//! layer above this crate. What matters at this level is that every byte
//! offset matches the native headers, which the compile-time assertions in
//! [`event`] pin down.

pub mod event;

pub use event::{
    CommonRecord, DisplayRecord, Event, KeyboardRecord, Keysym, MouseButtonRecord,
    MouseMotionRecord, MouseWheelRecord, QuitRecord, TextInputRecord, WindowRecord,
};

macro_rules! opaque_native {
    ($(#[$doc:meta] $name:ident),+ $(,)?) => {
        $(
            #[$doc]
            #[repr(C)]
            pub struct $name {
                _opaque: [u8; 0],
                // Not Send/Sync and not constructible outside the native library.
                _marker: std::marker::PhantomData<(*mut u8, std::marker::PhantomPinned)>,
            }
        )+
    };
}

opaque_native! {
    /// Opaque pointee behind a native window handle.
    RawWindow,
    /// Opaque pointee behind a native renderer handle.
    RawRenderer,
    /// Opaque pointee behind a native surface handle.
    RawSurface,
    /// Opaque pointee behind a native texture handle.
    RawTexture,
    /// Opaque pointee behind a native audio device handle.
    RawAudioDevice,
}
