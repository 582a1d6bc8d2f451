//! Integer geometry primitives shared by the raw layout and the draw builder
//!
//! These types are `#[repr(C)]` and field-for-field compatible with the
//! native library's point and rectangle records, so they can be written
//! straight into event payloads and passed across the FFI boundary without
//! conversion.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// A point in integer pixel coordinates
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Pod, Zeroable, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate
    pub x: i32,
    /// Vertical coordinate
    pub y: i32,
}

impl Point {
    /// Create a point from its coordinates
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A width/height pair in integer pixels
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Pod, Zeroable, Serialize, Deserialize)]
pub struct Area {
    /// Width in pixels
    pub width: i32,
    /// Height in pixels
    pub height: i32,
}

impl Area {
    /// Create an area from its dimensions
    #[must_use]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// True when either dimension is zero or negative
    #[must_use]
    pub const fn is_degenerate(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }
}

/// An axis-aligned rectangle, layout-compatible with the native rect record
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Pod, Zeroable, Serialize, Deserialize)]
pub struct Rect {
    /// Origin x coordinate
    pub x: i32,
    /// Origin y coordinate
    pub y: i32,
    /// Width in pixels
    pub width: i32,
    /// Height in pixels
    pub height: i32,
}

impl Rect {
    /// Create a rectangle from an origin and size
    #[must_use]
    pub const fn new(position: Point, size: Area) -> Self {
        Self {
            x: position.x,
            y: position.y,
            width: size.width,
            height: size.height,
        }
    }

    /// Create a rectangle from raw components
    #[must_use]
    pub const fn from_raw(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// Origin of the rectangle
    #[must_use]
    pub const fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Size of the rectangle
    #[must_use]
    pub const fn size(&self) -> Area {
        Area::new(self.width, self.height)
    }

    /// Move the origin, keeping the size
    pub fn set_position(&mut self, position: Point) {
        self.x = position.x;
        self.y = position.y;
    }

    /// Change the size, keeping the origin
    pub fn set_size(&mut self, size: Area) {
        self.width = size.width;
        self.height = size.height;
    }

    /// True when the point lies inside the rectangle
    #[must_use]
    pub const fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.y >= self.y
            && point.x < self.x + self.width
            && point.y < self.y + self.height
    }

    /// True when the rectangle has no interior
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.size().is_degenerate()
    }
}
