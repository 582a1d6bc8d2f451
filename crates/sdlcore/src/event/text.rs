//! Text input shape view

use crate::sys;
use thiserror::Error;

/// The committed text does not fit the record's inline buffer
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("text of {len} bytes does not fit the {capacity}-byte event buffer")]
pub struct TextTooLong {
    /// Byte length of the rejected text.
    pub len: usize,
    /// Usable capacity (one byte is reserved for the NUL terminator).
    pub capacity: usize,
}

/// Typed view of a text input payload
#[derive(Debug)]
pub struct TextInputView<'a> {
    raw: &'a mut sys::TextInputRecord,
}

impl<'a> TextInputView<'a> {
    pub(super) fn new(raw: &'a mut sys::TextInputRecord) -> Self {
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

    /// The committed text, up to the NUL terminator
    ///
    /// The native library promises UTF-8; a record that breaks that promise
    /// reads as empty rather than panicking, per the crate's rule of not
    /// validating native data beyond presence checks.
    #[must_use]
    pub fn text(&self) -> &str {
        let len = self
            .raw
            .text
            .iter()
            .position(|&byte| byte == 0)
            .unwrap_or(self.raw.text.len());
        std::str::from_utf8(&self.raw.text[..len]).unwrap_or("")
    }

    /// Write the committed text, NUL-terminated
    ///
    /// Fails when `text` needs more than the record's fixed capacity; the
    /// record is left untouched in that case.
    pub fn set_text(&mut self, text: &str) -> Result<(), TextTooLong> {
        let capacity = self.raw.text.len() - 1;
        if text.len() > capacity {
            return Err(TextTooLong { len: text.len(), capacity });
        }
        self.raw.text = [0; sys::event::TEXT_CAPACITY];
        self.raw.text[..text.len()].copy_from_slice(text.as_bytes());
        Ok(())
    }
}
