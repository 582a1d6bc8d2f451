//! Typed field values shared by the event shape views
//!
//! Full keycode/scancode mirrors belong to the wrapper layer; the overlay
//! only needs transparent carriers for those fields plus the small masks and
//! enums its accessors hand out.

use bitflags::bitflags;

/// Physical key location, layout-independent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ScanCode(pub i32);

impl ScanCode {
    /// The raw native value
    #[must_use]
    pub const fn raw(self) -> i32 {
        self.0
    }
}

/// Logical key value, layout-dependent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct KeyCode(pub i32);

impl KeyCode {
    /// The raw native value
    #[must_use]
    pub const fn raw(self) -> i32 {
        self.0
    }
}

bitflags! {
    /// Keyboard modifier state at the time of a key event
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct KeyMod: u16 {
        /// Left shift held.
        const LSHIFT = 0x0001;
        /// Right shift held.
        const RSHIFT = 0x0002;
        /// Left control held.
        const LCTRL = 0x0040;
        /// Right control held.
        const RCTRL = 0x0080;
        /// Left alt held.
        const LALT = 0x0100;
        /// Right alt held.
        const RALT = 0x0200;
        /// Left GUI (super) held.
        const LGUI = 0x0400;
        /// Right GUI (super) held.
        const RGUI = 0x0800;
        /// Num lock latched.
        const NUM = 0x1000;
        /// Caps lock latched.
        const CAPS = 0x2000;
        /// AltGr mode active.
        const MODE = 0x4000;
    }
}

bitflags! {
    /// Mask of mouse buttons held during a motion event
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct MouseButtonState: u32 {
        /// Left button held.
        const LEFT = 1 << 0;
        /// Middle button held.
        const MIDDLE = 1 << 1;
        /// Right button held.
        const RIGHT = 1 << 2;
        /// First extra button held.
        const X1 = 1 << 3;
        /// Second extra button held.
        const X2 = 1 << 4;
    }
}

/// Identity of a single mouse button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum MouseButton {
    /// Left button.
    Left = 1,
    /// Middle (wheel) button.
    Middle = 2,
    /// Right button.
    Right = 3,
    /// First extra button.
    X1 = 4,
    /// Second extra button.
    X2 = 5,
}

impl MouseButton {
    /// Map the native 1-based button index; unknown indices yield `None`
    #[must_use]
    pub const fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            1 => Some(Self::Left),
            2 => Some(Self::Middle),
            3 => Some(Self::Right),
            4 => Some(Self::X1),
            5 => Some(Self::X2),
            _ => None,
        }
    }

    /// The native 1-based button index
    #[must_use]
    pub const fn raw(self) -> u8 {
        self as u8
    }
}

/// Scroll direction convention reported with wheel events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u32)]
pub enum WheelDirection {
    /// Scroll values follow the physical wheel.
    #[default]
    Normal = 0,
    /// The platform inverted the scroll values.
    Flipped = 1,
}

impl WheelDirection {
    /// Map the native value; anything unknown reads as [`Self::Normal`]
    #[must_use]
    pub const fn from_raw(raw: u32) -> Self {
        match raw {
            1 => Self::Flipped,
            _ => Self::Normal,
        }
    }

    /// The native value
    #[must_use]
    pub const fn raw(self) -> u32 {
        self as u32
    }
}
