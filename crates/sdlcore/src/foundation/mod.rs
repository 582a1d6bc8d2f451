//! Foundation utilities shared by every layer of the crate

pub mod geometry;
pub mod logging;

pub use geometry::{Area, Point, Rect};
