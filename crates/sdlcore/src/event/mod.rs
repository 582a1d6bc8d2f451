//! Safe tagged overlay over the native event union
//!
//! The native library reports every event through one fixed-size union
//! ([`crate::sys::Event`]). [`EventRecord`] wraps that union in place — no
//! copying, no allocation, no intermediate representation — and hands out
//! strongly-typed shape views gated on the current discriminant. A view
//! request that disagrees with the tag is a programmer error: it trips a
//! debug assertion and compiles to nothing in release builds, the same
//! speed/safety trade the ownership layer makes.
//!
//! A default-constructed record carries a sentinel discriminant no real
//! event uses, so inspecting a never-polled record fails loudly instead of
//! reading stale bytes. The polling proxy overwrites the record through
//! [`EventRecord::as_raw_mut`]; code preparing a synthetic event to push
//! starts from [`EventRecord::set_kind`] and fills the shape in through the
//! matching view.

pub mod display;
pub mod keyboard;
pub mod mouse;
pub mod text;
pub mod types;
pub mod window;

pub use display::{DisplayEventId, DisplayView};
pub use keyboard::KeyboardView;
pub use mouse::{MotionView, MouseButtonView, WheelView};
pub use text::{TextInputView, TextTooLong};
pub use types::{KeyCode, KeyMod, MouseButton, MouseButtonState, ScanCode, WheelDirection};
pub use window::{WindowEventId, WindowView};

use crate::sys;
use std::fmt;

/// Discriminant of an event record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// Request to quit the application.
    Quit,
    /// The OS is terminating the application.
    AppTerminating,
    /// Display state changed; details in the display view.
    Display,
    /// Window state changed; details in the window view.
    Window,
    /// Key pressed.
    KeyDown,
    /// Key released.
    KeyUp,
    /// Text committed by the OS input method.
    TextInput,
    /// Mouse moved.
    MouseMotion,
    /// Mouse button pressed.
    MouseButtonDown,
    /// Mouse button released.
    MouseButtonUp,
    /// Mouse wheel scrolled.
    MouseWheel,
    /// System clipboard contents changed.
    ClipboardUpdate,
    /// Sentinel: never polled, or a kind this overlay does not expose.
    Invalid,
}

impl EventKind {
    /// Map a native discriminant value; unexposed kinds read as `Invalid`
    #[must_use]
    pub const fn from_raw(raw: u32) -> Self {
        match raw {
            sys::event::QUIT => Self::Quit,
            sys::event::APP_TERMINATING => Self::AppTerminating,
            sys::event::DISPLAY_EVENT => Self::Display,
            sys::event::WINDOW_EVENT => Self::Window,
            sys::event::KEY_DOWN => Self::KeyDown,
            sys::event::KEY_UP => Self::KeyUp,
            sys::event::TEXT_INPUT => Self::TextInput,
            sys::event::MOUSE_MOTION => Self::MouseMotion,
            sys::event::MOUSE_BUTTON_DOWN => Self::MouseButtonDown,
            sys::event::MOUSE_BUTTON_UP => Self::MouseButtonUp,
            sys::event::MOUSE_WHEEL => Self::MouseWheel,
            sys::event::CLIPBOARD_UPDATE => Self::ClipboardUpdate,
            _ => Self::Invalid,
        }
    }

    /// The native discriminant value
    #[must_use]
    pub const fn to_raw(self) -> u32 {
        match self {
            Self::Quit => sys::event::QUIT,
            Self::AppTerminating => sys::event::APP_TERMINATING,
            Self::Display => sys::event::DISPLAY_EVENT,
            Self::Window => sys::event::WINDOW_EVENT,
            Self::KeyDown => sys::event::KEY_DOWN,
            Self::KeyUp => sys::event::KEY_UP,
            Self::TextInput => sys::event::TEXT_INPUT,
            Self::MouseMotion => sys::event::MOUSE_MOTION,
            Self::MouseButtonDown => sys::event::MOUSE_BUTTON_DOWN,
            Self::MouseButtonUp => sys::event::MOUSE_BUTTON_UP,
            Self::MouseWheel => sys::event::MOUSE_WHEEL,
            Self::ClipboardUpdate => sys::event::CLIPBOARD_UPDATE,
            Self::Invalid => sys::event::LAST_EVENT,
        }
    }
}

/// In-place typed overlay over one native event record
///
/// Exactly the size and alignment of the native union, so a pointer to the
/// wrapped union can be passed straight back into the native poll/push
/// calls.
pub struct EventRecord {
    raw: sys::Event,
}

// The overlay adds nothing to the native record.
const _: () = {
    use std::mem::{align_of, size_of};
    assert!(size_of::<EventRecord>() == size_of::<sys::Event>());
    assert!(align_of::<EventRecord>() == align_of::<sys::Event>());
};

impl Default for EventRecord {
    /// An explicitly invalid record: zeroed payload, sentinel discriminant
    fn default() -> Self {
        let mut raw = sys::Event::zeroed();
        raw.kind = sys::event::LAST_EVENT;
        Self { raw }
    }
}

impl EventRecord {
    /// Wrap a record received from the native library
    ///
    /// The union must be fully written, which is always the case for records
    /// produced by the native poll call.
    #[must_use]
    pub const fn from_raw(raw: sys::Event) -> Self {
        Self { raw }
    }

    /// Current discriminant
    #[must_use]
    pub fn kind(&self) -> EventKind {
        EventKind::from_raw(self.raw_kind())
    }

    /// Current discriminant as the native value
    #[must_use]
    pub fn raw_kind(&self) -> u32 {
        unsafe { self.raw.kind }
    }

    /// True when the current discriminant equals `kind`
    #[must_use]
    pub fn is(&self, kind: EventKind) -> bool {
        self.kind() == kind
    }

    /// Set the discriminant, typically before filling in a synthetic event
    pub fn set_kind(&mut self, kind: EventKind) {
        self.raw.kind = kind.to_raw();
    }

    /// Timestamp in milliseconds since native library initialization
    #[must_use]
    pub fn timestamp(&self) -> u32 {
        unsafe { self.raw.common.timestamp }
    }

    /// Set the timestamp field
    pub fn set_timestamp(&mut self, timestamp: u32) {
        // Nested union-field writes need unsafe even though nothing is read.
        unsafe { self.raw.common.timestamp = timestamp };
    }

    /// Borrow the wrapped native union
    #[must_use]
    pub const fn as_raw(&self) -> &sys::Event {
        &self.raw
    }

    /// Mutably borrow the wrapped native union
    ///
    /// This is the polling seam: the native poll call writes a fresh record
    /// through this pointer, replacing the discriminant and payload
    /// wholesale.
    pub fn as_raw_mut(&mut self) -> &mut sys::Event {
        &mut self.raw
    }

    /// Raw pointer to the wrapped union, for the native poll/push calls
    pub fn as_mut_ptr(&mut self) -> *mut sys::Event {
        std::ptr::addr_of_mut!(self.raw)
    }

    /// Keyboard shape view; valid for `KeyDown` and `KeyUp`
    #[must_use]
    pub fn keyboard(&mut self) -> KeyboardView<'_> {
        self.expect_shape(
            matches!(self.kind(), EventKind::KeyDown | EventKind::KeyUp),
            "keyboard",
        );
        KeyboardView::new(unsafe { &mut self.raw.key })
    }

    /// Mouse motion shape view; valid for `MouseMotion`
    #[must_use]
    pub fn mouse_motion(&mut self) -> MotionView<'_> {
        self.expect_shape(self.is(EventKind::MouseMotion), "mouse motion");
        MotionView::new(unsafe { &mut self.raw.motion })
    }

    /// Mouse button shape view; valid for `MouseButtonDown` and `MouseButtonUp`
    #[must_use]
    pub fn mouse_button(&mut self) -> MouseButtonView<'_> {
        self.expect_shape(
            matches!(
                self.kind(),
                EventKind::MouseButtonDown | EventKind::MouseButtonUp
            ),
            "mouse button",
        );
        MouseButtonView::new(unsafe { &mut self.raw.button })
    }

    /// Mouse wheel shape view; valid for `MouseWheel`
    #[must_use]
    pub fn mouse_wheel(&mut self) -> WheelView<'_> {
        self.expect_shape(self.is(EventKind::MouseWheel), "mouse wheel");
        WheelView::new(unsafe { &mut self.raw.wheel })
    }

    /// Window shape view; valid for `Window`
    #[must_use]
    pub fn window(&mut self) -> WindowView<'_> {
        self.expect_shape(self.is(EventKind::Window), "window");
        WindowView::new(unsafe { &mut self.raw.window })
    }

    /// Display shape view; valid for `Display`
    #[must_use]
    pub fn display(&mut self) -> DisplayView<'_> {
        self.expect_shape(self.is(EventKind::Display), "display");
        DisplayView::new(unsafe { &mut self.raw.display })
    }

    /// Text input shape view; valid for `TextInput`
    #[must_use]
    pub fn text_input(&mut self) -> TextInputView<'_> {
        self.expect_shape(self.is(EventKind::TextInput), "text input");
        TextInputView::new(unsafe { &mut self.raw.text })
    }

    fn expect_shape(&self, matches: bool, shape: &str) {
        debug_assert!(
            matches,
            "{shape} view requested while the event kind is {:?} (raw {:#x})",
            self.kind(),
            self.raw_kind()
        );
    }
}

impl fmt::Debug for EventRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventRecord")
            .field("kind", &self.kind())
            .field("timestamp", &self.timestamp())
            .finish()
    }
}
