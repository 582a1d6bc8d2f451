//! # sdlcore
//!
//! Capability-gated resource ownership and a safe tagged-union event overlay
//! for an SDL2-based multimedia wrapper.
//!
//! The native library hands out raw handles that must be destroyed exactly
//! once by the matching destructor, and reports every event through one
//! fixed-size union. This crate is the safety core that the mechanical
//! per-function wrappers build on:
//!
//! - **Ownership**: [`handle::Resource`] (exclusive, move-only),
//!   [`handle::Ref`]/[`handle::RefMut`] (borrowed views),
//!   [`handle::Shared`] (manual refcount) — with the deleter bound to the
//!   resource kind at the type level so destructor mismatches cannot compile.
//! - **Events**: [`event::EventRecord`] overlays the native union in place
//!   and hands out per-shape views gated on the discriminant, bit-identical
//!   to the native record so it can be passed straight back to the native
//!   API.
//! - **Capability tokens**: [`capability::Token`] restricts privileged
//!   constructors to the authorized caller at zero runtime cost.
//! - **Drawing**: [`draw::RenderOp`] assembles one copy operation and is
//!   consumed by its terminal call.
//!
//! ## Quick Start
//!
//! ```rust
//! use sdlcore::prelude::*;
//!
//! // The polling proxy writes into the record through its raw seam;
//! // application code branches on the kind and picks the matching view.
//! let mut record = EventRecord::default();
//! assert_eq!(record.kind(), EventKind::Invalid); // never polled
//!
//! record.set_kind(EventKind::MouseWheel);
//! record.mouse_wheel().set_scroll(3, -2);
//! assert_eq!(record.mouse_wheel().scroll(), (3, -2));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::must_use_candidate)]

pub mod audio;
pub mod capability;
pub mod config;
pub mod draw;
pub mod event;
pub mod foundation;
pub mod handle;
pub mod sys;

/// Common imports for crate users
pub mod prelude {
    pub use crate::audio::{BufferLock, LockGuard};
    pub use crate::capability::Token;
    pub use crate::config::{Config, CoreConfig};
    pub use crate::draw::{Anchor, DrawResult, DrawTarget, RenderOp};
    pub use crate::event::{EventKind, EventRecord};
    pub use crate::foundation::geometry::{Area, Point, Rect};
    pub use crate::handle::{
        kind::{AudioDevice, Renderer, Surface, Texture, Window},
        Deleter, HandleResult, Ref, RefMut, Resource, ResourceKind, Shared,
    };
}
