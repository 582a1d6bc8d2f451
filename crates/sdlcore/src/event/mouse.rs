//! Mouse motion, button, and wheel shape views

use super::types::{MouseButton, MouseButtonState, WheelDirection};
use crate::foundation::geometry::Point;
use crate::sys;

/// Typed view of a mouse motion payload
#[derive(Debug)]
pub struct MotionView<'a> {
    raw: &'a mut sys::MouseMotionRecord,
}

impl<'a> MotionView<'a> {
    pub(super) fn new(raw: &'a mut sys::MouseMotionRecord) -> Self {
        Self { raw }
    }

    /// Identifier of the window with mouse focus
    #[must_use]
    pub fn window_id(&self) -> u32 {
        self.raw.window_id
    }

    /// Set the focused-window identifier
    pub fn set_window_id(&mut self, window_id: u32) {
        self.raw.window_id = window_id;
    }

    /// Mouse instance identifier
    #[must_use]
    pub fn which(&self) -> u32 {
        self.raw.which
    }

    /// Buttons held during the motion
    ///
    /// Unknown native bits are preserved, not dropped.
    #[must_use]
    pub fn state(&self) -> MouseButtonState {
        MouseButtonState::from_bits_retain(self.raw.state)
    }

    /// Set the held-button mask
    pub fn set_state(&mut self, state: MouseButtonState) {
        self.raw.state = state.bits();
    }

    /// Pointer position relative to the window
    #[must_use]
    pub fn position(&self) -> Point {
        Point::new(self.raw.x, self.raw.y)
    }

    /// Set the pointer position
    pub fn set_position(&mut self, position: Point) {
        self.raw.x = position.x;
        self.raw.y = position.y;
    }

    /// Motion delta since the previous motion event
    #[must_use]
    pub fn delta(&self) -> Point {
        Point::new(self.raw.xrel, self.raw.yrel)
    }

    /// Set the motion delta
    pub fn set_delta(&mut self, delta: Point) {
        self.raw.xrel = delta.x;
        self.raw.yrel = delta.y;
    }
}

/// Typed view of a mouse button payload
#[derive(Debug)]
pub struct MouseButtonView<'a> {
    raw: &'a mut sys::MouseButtonRecord,
}

impl<'a> MouseButtonView<'a> {
    pub(super) fn new(raw: &'a mut sys::MouseButtonRecord) -> Self {
        Self { raw }
    }

    /// Identifier of the window with mouse focus
    #[must_use]
    pub fn window_id(&self) -> u32 {
        self.raw.window_id
    }

    /// Which button changed state; `None` for indices this crate does not name
    #[must_use]
    pub fn button(&self) -> Option<MouseButton> {
        MouseButton::from_raw(self.raw.button)
    }

    /// Set the button index
    pub fn set_button(&mut self, button: MouseButton) {
        self.raw.button = button.raw();
    }

    /// The native button index, for buttons beyond the named five
    #[must_use]
    pub fn raw_button(&self) -> u8 {
        self.raw.button
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

    /// Click count: 1 single, 2 double, and so on
    #[must_use]
    pub fn clicks(&self) -> u8 {
        self.raw.clicks
    }

    /// Set the click count
    pub fn set_clicks(&mut self, clicks: u8) {
        self.raw.clicks = clicks;
    }

    /// Pointer position relative to the window
    #[must_use]
    pub fn position(&self) -> Point {
        Point::new(self.raw.x, self.raw.y)
    }

    /// Set the pointer position
    pub fn set_position(&mut self, position: Point) {
        self.raw.x = position.x;
        self.raw.y = position.y;
    }
}

/// Typed view of a mouse wheel payload
#[derive(Debug)]
pub struct WheelView<'a> {
    raw: &'a mut sys::MouseWheelRecord,
}

impl<'a> WheelView<'a> {
    pub(super) fn new(raw: &'a mut sys::MouseWheelRecord) -> Self {
        Self { raw }
    }

    /// Identifier of the window with mouse focus
    #[must_use]
    pub fn window_id(&self) -> u32 {
        self.raw.window_id
    }

    /// Detent scroll amounts: positive x right, positive y away from the user
    #[must_use]
    pub fn scroll(&self) -> (i32, i32) {
        (self.raw.x, self.raw.y)
    }

    /// Set the detent scroll amounts
    pub fn set_scroll(&mut self, x: i32, y: i32) {
        self.raw.x = x;
        self.raw.y = y;
    }

    /// Sub-detent scroll amounts from high-resolution wheels
    #[must_use]
    pub fn precise_scroll(&self) -> (f32, f32) {
        (self.raw.precise_x, self.raw.precise_y)
    }

    /// Set the sub-detent scroll amounts
    pub fn set_precise_scroll(&mut self, x: f32, y: f32) {
        self.raw.precise_x = x;
        self.raw.precise_y = y;
    }

    /// Direction convention the platform reported the values in
    #[must_use]
    pub fn direction(&self) -> WheelDirection {
        WheelDirection::from_raw(self.raw.direction)
    }

    /// Set the direction convention
    pub fn set_direction(&mut self, direction: WheelDirection) {
        self.raw.direction = direction.raw();
    }
}
