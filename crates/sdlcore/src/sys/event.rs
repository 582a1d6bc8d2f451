//! Native event record family and the 56-byte tagged union
//!
//! Every record starts with the same two fields (`kind`, `timestamp`), which
//! is what makes reading [`Event::common`] valid regardless of the current
//! tag. Implicit padding in the native headers is declared explicitly here so
//! the plain records stay `Pod` and byte-exact.
//!
//! The union's size and alignment, and the fit of every variant, are checked
//! at compile time at the bottom of this file. The native union reserves 56
//! bytes and aligns to 8 on 64-bit targets; the `padding` arm forces both.

use bytemuck::{Pod, Zeroable};
use std::fmt;

// Event kind constants, mirrored from the native header. Only the kinds the
// overlay exposes are declared; the wrapper layer owns the full table.

/// Request to quit the application.
pub const QUIT: u32 = 0x100;
/// The OS is terminating the application.
pub const APP_TERMINATING: u32 = 0x101;
/// Display state changed (orientation, connection).
pub const DISPLAY_EVENT: u32 = 0x150;
/// Window state changed; sub-kind in [`WindowRecord::event`].
pub const WINDOW_EVENT: u32 = 0x200;
/// Key pressed.
pub const KEY_DOWN: u32 = 0x300;
/// Key released.
pub const KEY_UP: u32 = 0x301;
/// Text input committed by the OS input method.
pub const TEXT_INPUT: u32 = 0x303;
/// Mouse moved.
pub const MOUSE_MOTION: u32 = 0x400;
/// Mouse button pressed.
pub const MOUSE_BUTTON_DOWN: u32 = 0x401;
/// Mouse button released.
pub const MOUSE_BUTTON_UP: u32 = 0x402;
/// Mouse wheel scrolled.
pub const MOUSE_WHEEL: u32 = 0x403;
/// System clipboard contents changed.
pub const CLIPBOARD_UPDATE: u32 = 0x900;
/// One past the last valid kind; used as the never-polled sentinel.
pub const LAST_EVENT: u32 = 0xFFFF;

/// Size in bytes of the native event union.
pub const EVENT_SIZE: usize = 56;
/// Capacity of the text-input record's inline buffer, including the NUL.
pub const TEXT_CAPACITY: usize = 32;

/// Fields shared by every event record
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Pod, Zeroable)]
pub struct CommonRecord {
    /// Event kind discriminant.
    pub kind: u32,
    /// Milliseconds since native library initialization.
    pub timestamp: u32,
}

/// Display connection/orientation change
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Pod, Zeroable)]
pub struct DisplayRecord {
    /// Event kind discriminant.
    pub kind: u32,
    /// Milliseconds since native library initialization.
    pub timestamp: u32,
    /// Index of the display that changed.
    pub display: u32,
    /// Display sub-kind identifier.
    pub event: u8,
    /// Explicit header padding.
    pub padding1: u8,
    /// Explicit header padding.
    pub padding2: u8,
    /// Explicit header padding.
    pub padding3: u8,
    /// Sub-kind dependent datum (orientation value).
    pub data1: i32,
}

/// Window state change; meaning of `data1`/`data2` depends on `event`
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Pod, Zeroable)]
pub struct WindowRecord {
    /// Event kind discriminant.
    pub kind: u32,
    /// Milliseconds since native library initialization.
    pub timestamp: u32,
    /// Identifier of the window this event belongs to.
    pub window_id: u32,
    /// Window sub-kind identifier.
    pub event: u8,
    /// Explicit header padding.
    pub padding1: u8,
    /// Explicit header padding.
    pub padding2: u8,
    /// Explicit header padding.
    pub padding3: u8,
    /// Sub-kind dependent datum (x position, width, or display index).
    pub data1: i32,
    /// Sub-kind dependent datum (y position or height).
    pub data2: i32,
}

/// Key identity at the moment of a key event
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Pod, Zeroable)]
pub struct Keysym {
    /// Physical key location (layout-independent).
    pub scancode: i32,
    /// Logical key value (layout-dependent).
    pub sym: i32,
    /// Active modifier mask.
    pub modifiers: u16,
    /// Explicit header padding.
    pub padding: u16,
    /// Reserved by the native header.
    pub unused: u32,
}

/// Key press or release
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Pod, Zeroable)]
pub struct KeyboardRecord {
    /// Event kind discriminant.
    pub kind: u32,
    /// Milliseconds since native library initialization.
    pub timestamp: u32,
    /// Identifier of the window with keyboard focus.
    pub window_id: u32,
    /// 1 when pressed, 0 when released.
    pub state: u8,
    /// Non-zero for an auto-repeated press.
    pub repeat: u8,
    /// Explicit header padding.
    pub padding2: u8,
    /// Explicit header padding.
    pub padding3: u8,
    /// Identity of the key involved.
    pub keysym: Keysym,
}

/// Committed text from the OS input method
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Pod, Zeroable)]
pub struct TextInputRecord {
    /// Event kind discriminant.
    pub kind: u32,
    /// Milliseconds since native library initialization.
    pub timestamp: u32,
    /// Identifier of the window with keyboard focus.
    pub window_id: u32,
    /// NUL-terminated UTF-8 text.
    pub text: [u8; TEXT_CAPACITY],
}

/// Mouse movement
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Pod, Zeroable)]
pub struct MouseMotionRecord {
    /// Event kind discriminant.
    pub kind: u32,
    /// Milliseconds since native library initialization.
    pub timestamp: u32,
    /// Identifier of the window with mouse focus.
    pub window_id: u32,
    /// Mouse instance identifier.
    pub which: u32,
    /// Currently held button mask.
    pub state: u32,
    /// Pointer x, relative to the window.
    pub x: i32,
    /// Pointer y, relative to the window.
    pub y: i32,
    /// Motion delta x since the last motion event.
    pub xrel: i32,
    /// Motion delta y since the last motion event.
    pub yrel: i32,
}

/// Mouse button press or release
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Pod, Zeroable)]
pub struct MouseButtonRecord {
    /// Event kind discriminant.
    pub kind: u32,
    /// Milliseconds since native library initialization.
    pub timestamp: u32,
    /// Identifier of the window with mouse focus.
    pub window_id: u32,
    /// Mouse instance identifier.
    pub which: u32,
    /// Button index (1-based).
    pub button: u8,
    /// 1 when pressed, 0 when released.
    pub state: u8,
    /// Click count (1 single, 2 double, ...).
    pub clicks: u8,
    /// Explicit header padding.
    pub padding1: u8,
    /// Pointer x, relative to the window.
    pub x: i32,
    /// Pointer y, relative to the window.
    pub y: i32,
}

/// Mouse wheel scroll
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct MouseWheelRecord {
    /// Event kind discriminant.
    pub kind: u32,
    /// Milliseconds since native library initialization.
    pub timestamp: u32,
    /// Identifier of the window with mouse focus.
    pub window_id: u32,
    /// Mouse instance identifier.
    pub which: u32,
    /// Horizontal scroll amount, positive to the right.
    pub x: i32,
    /// Vertical scroll amount, positive away from the user.
    pub y: i32,
    /// 0 normal, 1 when the platform flips scroll direction.
    pub direction: u32,
    /// Sub-detent horizontal scroll amount.
    pub precise_x: f32,
    /// Sub-detent vertical scroll amount.
    pub precise_y: f32,
}

/// Quit request
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Pod, Zeroable)]
pub struct QuitRecord {
    /// Event kind discriminant.
    pub kind: u32,
    /// Milliseconds since native library initialization.
    pub timestamp: u32,
}

/// The native tagged event union
///
/// Reading any arm is `unsafe`; the safe overlay in [`crate::event`] gates
/// every access on the current `kind` value. The `padding` arm is `[u64; 7]`
/// rather than `[u8; 56]` so the union picks up the native 8-byte alignment
/// (the native union contains pointer-carrying arms this crate does not
/// expose).
#[repr(C)]
#[derive(Clone, Copy)]
pub union Event {
    /// Event kind discriminant; valid for every arm.
    pub kind: u32,
    /// Header fields shared by every arm.
    pub common: CommonRecord,
    /// Display event payload.
    pub display: DisplayRecord,
    /// Window event payload.
    pub window: WindowRecord,
    /// Keyboard event payload.
    pub key: KeyboardRecord,
    /// Text input payload.
    pub text: TextInputRecord,
    /// Mouse motion payload.
    pub motion: MouseMotionRecord,
    /// Mouse button payload.
    pub button: MouseButtonRecord,
    /// Mouse wheel payload.
    pub wheel: MouseWheelRecord,
    /// Quit payload.
    pub quit: QuitRecord,
    /// Size/alignment reservation matching the native union.
    pub padding: [u64; EVENT_SIZE / 8],
}

impl Event {
    /// An event with every byte zeroed
    ///
    /// Zero is a fully-initialized state for every arm, so this is the only
    /// construction path the safe overlay needs.
    #[must_use]
    pub const fn zeroed() -> Self {
        Self { padding: [0; EVENT_SIZE / 8] }
    }
}

impl Default for Event {
    fn default() -> Self {
        Self::zeroed()
    }
}

impl fmt::Debug for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Only the discriminant is unconditionally meaningful.
        f.debug_struct("Event")
            .field("kind", unsafe { &self.kind })
            .finish_non_exhaustive()
    }
}

// Layout contract with the native header. A mismatch here is a build
// failure, not a runtime surprise.
const _: () = {
    use std::mem::{align_of, size_of};

    assert!(size_of::<Event>() == EVENT_SIZE);
    assert!(align_of::<Event>() == 8);

    assert!(size_of::<CommonRecord>() == 8);
    assert!(size_of::<QuitRecord>() == 8);
    assert!(size_of::<DisplayRecord>() == 20);
    assert!(size_of::<WindowRecord>() == 24);
    assert!(size_of::<Keysym>() == 16);
    assert!(size_of::<KeyboardRecord>() == 32);
    assert!(size_of::<TextInputRecord>() == 44);
    assert!(size_of::<MouseMotionRecord>() == 36);
    assert!(size_of::<MouseButtonRecord>() == 28);
    assert!(size_of::<MouseWheelRecord>() == 36);

    // Every variant must fit inside the union's reservation.
    assert!(size_of::<TextInputRecord>() <= EVENT_SIZE);
    assert!(size_of::<MouseMotionRecord>() <= EVENT_SIZE);
    assert!(size_of::<MouseWheelRecord>() <= EVENT_SIZE);
    assert!(size_of::<KeyboardRecord>() <= EVENT_SIZE);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zeroed_event_reads_zero_from_every_arm() {
        let event = Event::zeroed();
        unsafe {
            assert_eq!(event.kind, 0);
            assert_eq!(event.common.timestamp, 0);
            assert_eq!(event.window.data2, 0);
            assert_eq!(event.wheel.precise_y, 0.0);
            assert_eq!(event.text.text, [0u8; TEXT_CAPACITY]);
        }
    }

    #[test]
    fn test_kind_aliases_every_arm_header() {
        let mut event = Event::zeroed();
        event.motion = MouseMotionRecord {
            kind: MOUSE_MOTION,
            timestamp: 1234,
            window_id: 1,
            which: 0,
            state: 0,
            x: 10,
            y: 20,
            xrel: 1,
            yrel: -1,
        };
        unsafe {
            assert_eq!(event.kind, MOUSE_MOTION);
            assert_eq!(event.common.kind, MOUSE_MOTION);
            assert_eq!(event.common.timestamp, 1234);
        }
    }

    #[test]
    fn test_record_bytes_start_with_kind() {
        let record = WindowRecord {
            kind: WINDOW_EVENT,
            timestamp: 0,
            window_id: 7,
            event: 5,
            padding1: 0,
            padding2: 0,
            padding3: 0,
            data1: 640,
            data2: 480,
        };
        let bytes = bytemuck::bytes_of(&record);
        assert_eq!(&bytes[0..4], &WINDOW_EVENT.to_ne_bytes());
    }
}
