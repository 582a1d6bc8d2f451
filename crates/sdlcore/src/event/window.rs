//! Window shape view
//!
//! Window events carry a second discriminant (the sub-kind byte) and two
//! data words whose meaning depends on it. The setters here keep the two in
//! step: writing a position stamps the `Moved` sub-kind, writing a size
//! stamps `Resized`, writing a display index stamps `DisplayChanged`. The
//! matching getters assert the sub-kind they require, which is stricter
//! than the outer-kind gate alone — exactly the fields that are only valid
//! for a subset of window events.

use crate::foundation::geometry::{Area, Point};
use crate::sys;

/// Sub-kind of a window event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum WindowEventId {
    /// No or unknown sub-kind.
    None = 0,
    /// Window was shown.
    Shown = 1,
    /// Window was hidden.
    Hidden = 2,
    /// Window was exposed and should be redrawn.
    Exposed = 3,
    /// Window was moved; data words carry the new position.
    Moved = 4,
    /// Window was resized by the user; data words carry the new size.
    Resized = 5,
    /// Window size changed by any means; data words carry the new size.
    SizeChanged = 6,
    /// Window was minimized.
    Minimized = 7,
    /// Window was maximized.
    Maximized = 8,
    /// Window was restored.
    Restored = 9,
    /// Pointer entered the window.
    Enter = 10,
    /// Pointer left the window.
    Leave = 11,
    /// Window gained keyboard focus.
    FocusGained = 12,
    /// Window lost keyboard focus.
    FocusLost = 13,
    /// The window manager requested the window close.
    Close = 14,
    /// Window is being offered focus.
    TakeFocus = 15,
    /// A hit test fired.
    HitTest = 16,
    /// The ICC profile of the window's display changed.
    IccProfileChanged = 17,
    /// Window moved to a different display; the first data word carries it.
    DisplayChanged = 18,
}

impl WindowEventId {
    /// Map the native sub-kind byte; unknown values read as `None`
    #[must_use]
    pub const fn from_raw(raw: u8) -> Self {
        match raw {
            1 => Self::Shown,
            2 => Self::Hidden,
            3 => Self::Exposed,
            4 => Self::Moved,
            5 => Self::Resized,
            6 => Self::SizeChanged,
            7 => Self::Minimized,
            8 => Self::Maximized,
            9 => Self::Restored,
            10 => Self::Enter,
            11 => Self::Leave,
            12 => Self::FocusGained,
            13 => Self::FocusLost,
            14 => Self::Close,
            15 => Self::TakeFocus,
            16 => Self::HitTest,
            17 => Self::IccProfileChanged,
            18 => Self::DisplayChanged,
            _ => Self::None,
        }
    }

    /// The native sub-kind byte
    #[must_use]
    pub const fn raw(self) -> u8 {
        self as u8
    }
}

/// Typed view of a window event payload
#[derive(Debug)]
pub struct WindowView<'a> {
    raw: &'a mut sys::WindowRecord,
}

impl<'a> WindowView<'a> {
    pub(super) fn new(raw: &'a mut sys::WindowRecord) -> Self {
        Self { raw }
    }

    /// Identifier of the window this event belongs to
    #[must_use]
    pub fn window_id(&self) -> u32 {
        self.raw.window_id
    }

    /// Set the window identifier
    pub fn set_window_id(&mut self, window_id: u32) {
        self.raw.window_id = window_id;
    }

    /// Current sub-kind
    #[must_use]
    pub fn sub_kind(&self) -> WindowEventId {
        WindowEventId::from_raw(self.raw.event)
    }

    /// Set the sub-kind without touching the data words
    pub fn set_sub_kind(&mut self, sub_kind: WindowEventId) {
        self.raw.event = sub_kind.raw();
    }

    /// New window position; valid only for the `Moved` sub-kind
    #[must_use]
    pub fn position(&self) -> Point {
        self.expect_sub_kind(
            matches!(self.sub_kind(), WindowEventId::Moved),
            "position",
        );
        Point::new(self.raw.data1, self.raw.data2)
    }

    /// Record a move: writes the position and stamps the `Moved` sub-kind
    pub fn set_position(&mut self, position: Point) {
        self.raw.event = WindowEventId::Moved.raw();
        self.raw.data1 = position.x;
        self.raw.data2 = position.y;
    }

    /// New window size; valid for `Resized` and `SizeChanged`
    #[must_use]
    pub fn size(&self) -> Area {
        self.expect_sub_kind(
            matches!(
                self.sub_kind(),
                WindowEventId::Resized | WindowEventId::SizeChanged
            ),
            "size",
        );
        Area::new(self.raw.data1, self.raw.data2)
    }

    /// Record a resize: writes the size and stamps the `Resized` sub-kind
    pub fn set_size(&mut self, size: Area) {
        self.raw.event = WindowEventId::Resized.raw();
        self.raw.data1 = size.width;
        self.raw.data2 = size.height;
    }

    /// Index of the display the window moved to; `DisplayChanged` only
    #[must_use]
    pub fn display_index(&self) -> i32 {
        self.expect_sub_kind(
            matches!(self.sub_kind(), WindowEventId::DisplayChanged),
            "display index",
        );
        self.raw.data1
    }

    /// Record a display change: writes the index and stamps `DisplayChanged`
    pub fn set_display_index(&mut self, display_index: i32) {
        self.raw.event = WindowEventId::DisplayChanged.raw();
        self.raw.data1 = display_index;
    }

    fn expect_sub_kind(&self, matches: bool, field: &str) {
        debug_assert!(
            matches,
            "window {field} read while the sub-kind is {:?}",
            self.sub_kind()
        );
    }
}
