//! Keyboard shape view

use super::types::{KeyCode, KeyMod, ScanCode};
use crate::sys;

/// Typed view of a key press/release payload
///
/// Reads and writes go straight into the overlaid native record; obtaining
/// the view is gated on the record's kind by [`crate::event::EventRecord`].
#[derive(Debug)]
pub struct KeyboardView<'a> {
    raw: &'a mut sys::KeyboardRecord,
}

impl<'a> KeyboardView<'a> {
    pub(super) fn new(raw: &'a mut sys::KeyboardRecord) -> Self {
        Self { raw }
    }

    /// Identifier of the window with keyboard focus
    #[must_use]
    pub fn window_id(&self) -> u32 {
        self.raw.window_id
    }

    /// Set the focused-window identifier
    pub fn set_window_id(&mut self, window_id: u32) {
        self.raw.window_id = window_id;
    }

    /// True for a press, false for a release
    #[must_use]
    pub fn is_pressed(&self) -> bool {
        self.raw.state == 1
    }

    /// Set the pressed/released state byte
    pub fn set_pressed(&mut self, pressed: bool) {
        self.raw.state = u8::from(pressed);
    }

    /// True when this press is an OS auto-repeat
    #[must_use]
    pub fn is_repeat(&self) -> bool {
        self.raw.repeat != 0
    }

    /// Mark the press as an auto-repeat
    pub fn set_repeat(&mut self, repeat: bool) {
        self.raw.repeat = u8::from(repeat);
    }

    /// Physical key location
    #[must_use]
    pub fn scan_code(&self) -> ScanCode {
        ScanCode(self.raw.keysym.scancode)
    }

    /// Set the physical key location
    pub fn set_scan_code(&mut self, scan_code: ScanCode) {
        self.raw.keysym.scancode = scan_code.raw();
    }

    /// Logical key value
    #[must_use]
    pub fn key_code(&self) -> KeyCode {
        KeyCode(self.raw.keysym.sym)
    }

    /// Set the logical key value
    pub fn set_key_code(&mut self, key_code: KeyCode) {
        self.raw.keysym.sym = key_code.raw();
    }

    /// Modifier state at the time of the event
    ///
    /// Unknown native bits are preserved, not dropped.
    #[must_use]
    pub fn modifiers(&self) -> KeyMod {
        KeyMod::from_bits_retain(self.raw.keysym.modifiers)
    }

    /// Set the modifier state
    pub fn set_modifiers(&mut self, modifiers: KeyMod) {
        self.raw.keysym.modifiers = modifiers.bits();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{EventKind, EventRecord};

    #[test]
    fn test_keyboard_round_trip() {
        let mut record = EventRecord::default();
        record.set_kind(EventKind::KeyDown);

        {
            let mut view = record.keyboard();
            view.set_window_id(3);
            view.set_pressed(true);
            view.set_repeat(false);
            view.set_scan_code(ScanCode(41));
            view.set_key_code(KeyCode(27));
            view.set_modifiers(KeyMod::LCTRL | KeyMod::LSHIFT);
        }

        let mut view = record.keyboard();
        assert_eq!(view.window_id(), 3);
        assert!(view.is_pressed());
        assert!(!view.is_repeat());
        assert_eq!(view.scan_code(), ScanCode(41));
        assert_eq!(view.key_code(), KeyCode(27));
        assert_eq!(view.modifiers(), KeyMod::LCTRL | KeyMod::LSHIFT);

        // A release reuses the same shape under the other kind.
        view.set_pressed(false);
        drop(view);
        record.set_kind(EventKind::KeyUp);
        assert!(!record.keyboard().is_pressed());
    }

    #[test]
    fn test_unknown_modifier_bits_survive() {
        let mut record = EventRecord::default();
        record.set_kind(EventKind::KeyUp);
        unsafe { record.as_raw_mut().key.keysym.modifiers = 0x8001 };
        let mods = record.keyboard().modifiers();
        assert_eq!(mods.bits(), 0x8001);
    }
}
