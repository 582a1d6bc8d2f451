//! Display shape view

use crate::sys;

/// Sub-kind of a display event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum DisplayEventId {
    /// No or unknown sub-kind.
    None = 0,
    /// Display orientation changed; the data word carries the new value.
    Orientation = 1,
    /// A display was connected.
    Connected = 2,
    /// A display was disconnected.
    Disconnected = 3,
}

impl DisplayEventId {
    /// Map the native sub-kind byte; unknown values read as `None`
    #[must_use]
    pub const fn from_raw(raw: u8) -> Self {
        match raw {
            1 => Self::Orientation,
            2 => Self::Connected,
            3 => Self::Disconnected,
            _ => Self::None,
        }
    }

    /// The native sub-kind byte
    #[must_use]
    pub const fn raw(self) -> u8 {
        self as u8
    }
}

/// Typed view of a display event payload
#[derive(Debug)]
pub struct DisplayView<'a> {
    raw: &'a mut sys::DisplayRecord,
}

impl<'a> DisplayView<'a> {
    pub(super) fn new(raw: &'a mut sys::DisplayRecord) -> Self {
        Self { raw }
    }

    /// Index of the display that changed
    #[must_use]
    pub fn display_index(&self) -> u32 {
        self.raw.display
    }

    /// Set the display index
    pub fn set_display_index(&mut self, display_index: u32) {
        self.raw.display = display_index;
    }

    /// Current sub-kind
    #[must_use]
    pub fn sub_kind(&self) -> DisplayEventId {
        DisplayEventId::from_raw(self.raw.event)
    }

    /// Set the sub-kind without touching the data word
    pub fn set_sub_kind(&mut self, sub_kind: DisplayEventId) {
        self.raw.event = sub_kind.raw();
    }

    /// New orientation value; valid only for the `Orientation` sub-kind
    #[must_use]
    pub fn orientation(&self) -> i32 {
        debug_assert!(
            matches!(self.sub_kind(), DisplayEventId::Orientation),
            "display orientation read while the sub-kind is {:?}",
            self.sub_kind()
        );
        self.raw.data1
    }

    /// Record an orientation change: writes the value and stamps the sub-kind
    pub fn set_orientation(&mut self, orientation: i32) {
        self.raw.event = DisplayEventId::Orientation.raw();
        self.raw.data1 = orientation;
    }
}
