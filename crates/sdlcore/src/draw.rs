//! Single-use drawing-operation builder
//!
//! A [`RenderOp`] accumulates a source region, a destination, a scale and an
//! anchor, then issues exactly one copy through its [`DrawTarget`]. Every
//! chaining call moves the builder and the terminal [`RenderOp::run`] takes
//! it by value, so issuing the same operation twice does not compile — the
//! builder is consumed, not merely documented as single-use.
//!
//! Field resolution order matters: [`RenderOp::src`] called before any
//! destination seeds the destination size from the source, [`RenderOp::scale`]
//! transforms the current destination size, and [`RenderOp::anchor`]
//! repositions the origin relative to the size, so it belongs last. A
//! destination left unset, or set to [`RenderOp::fill`], is forwarded as
//! `None`, which the native call reads as "cover the whole target".

use crate::foundation::geometry::{Area, Point, Rect};
use thiserror::Error;

/// Drawing errors surfaced by a [`DrawTarget`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DrawError {
    /// The native copy call failed; carries the native error string.
    #[error("native copy failed: {0}")]
    Backend(String),
}

/// Result alias for drawing operations
pub type DrawResult<T> = Result<T, DrawError>;

/// The surface a [`RenderOp`] ultimately draws into
///
/// Implemented by the wrapper layer on top of its renderer/texture handles;
/// `None` rectangles mean "use the native default" (whole source, whole
/// target).
pub trait DrawTarget {
    /// Issue one native copy with the resolved rectangles.
    fn copy(&mut self, src: Option<Rect>, dst: Option<Rect>) -> DrawResult<()>;
}

/// Where the destination anchor point sits on the destination rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Anchor {
    /// Position is the top-left corner (the native convention).
    #[default]
    TopLeft,
    /// Position is the top-right corner.
    TopRight,
    /// Position is the bottom-left corner.
    BottomLeft,
    /// Position is the bottom-right corner.
    BottomRight,
    /// Position is the center of the rectangle.
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Dest {
    Unset,
    Fill,
    At(Rect),
}

/// A chained, single-use drawing operation
#[derive(Debug)]
pub struct RenderOp<'t, T: DrawTarget> {
    target: &'t mut T,
    src: Option<Rect>,
    dst: Dest,
}

impl<'t, T: DrawTarget> RenderOp<'t, T> {
    /// Start a drawing operation against `target`
    #[must_use]
    pub fn new(target: &'t mut T) -> Self {
        Self { target, src: None, dst: Dest::Unset }
    }

    /// Select the source sub-region to copy from
    ///
    /// When no destination has been chosen yet, the destination size is
    /// seeded from the source size (a plain 1:1 blit at the origin).
    #[must_use]
    pub fn src(mut self, region: Rect) -> Self {
        if self.dst == Dest::Unset {
            self.dst = Dest::At(Rect::new(Point::default(), region.size()));
        }
        self.src = Some(region);
        self
    }

    /// Place the destination at `position`, keeping any established size
    #[must_use]
    pub fn at(mut self, position: Point) -> Self {
        self.dst = match self.dst {
            Dest::At(mut rect) => {
                rect.set_position(position);
                Dest::At(rect)
            }
            Dest::Unset | Dest::Fill => Dest::At(Rect::new(position, Area::default())),
        };
        self
    }

    /// Set the destination rectangle outright, discarding prior derivation
    #[must_use]
    pub fn to(mut self, destination: Rect) -> Self {
        self.dst = Dest::At(destination);
        self
    }

    /// Cover the whole target, resolved as the native default at draw time
    #[must_use]
    pub fn fill(mut self) -> Self {
        self.dst = Dest::Fill;
        self
    }

    /// Transform the established destination size
    ///
    /// No-op while the destination is unset or `fill`.
    #[must_use]
    pub fn scale(mut self, transform: impl FnOnce(Area) -> Area) -> Self {
        if let Dest::At(ref mut rect) = self.dst {
            rect.set_size(transform(rect.size()));
        }
        self
    }

    /// Re-interpret the destination position as the given anchor point
    ///
    /// Depends on the final size, so call it after `src`/`to`/`scale`.
    #[must_use]
    pub fn anchor(mut self, anchor: Anchor) -> Self {
        if let Dest::At(ref mut rect) = self.dst {
            let Area { width, height } = rect.size();
            match anchor {
                Anchor::TopLeft => {}
                Anchor::TopRight => rect.x -= width,
                Anchor::BottomLeft => rect.y -= height,
                Anchor::BottomRight => {
                    rect.x -= width;
                    rect.y -= height;
                }
                Anchor::Center => {
                    rect.x -= width / 2;
                    rect.y -= height / 2;
                }
            }
        }
        self
    }

    /// Issue the draw, consuming the operation
    ///
    /// Exactly one native copy is performed. Unset and `fill` destinations
    /// (and an unset source) are forwarded as `None`.
    pub fn run(self) -> DrawResult<()> {
        let dst = match self.dst {
            Dest::Unset | Dest::Fill => None,
            Dest::At(rect) => Some(rect),
        };
        self.target.copy(self.src, dst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingTarget {
        calls: Vec<(Option<Rect>, Option<Rect>)>,
        fail: bool,
    }

    impl DrawTarget for RecordingTarget {
        fn copy(&mut self, src: Option<Rect>, dst: Option<Rect>) -> DrawResult<()> {
            self.calls.push((src, dst));
            if self.fail {
                return Err(DrawError::Backend("out of memory".into()));
            }
            Ok(())
        }
    }

    #[test]
    fn test_defaults_forward_none() {
        let mut target = RecordingTarget::default();
        RenderOp::new(&mut target).run().unwrap();
        assert_eq!(target.calls, vec![(None, None)]);
    }

    #[test]
    fn test_src_seeds_destination_size() {
        let mut target = RecordingTarget::default();
        RenderOp::new(&mut target)
            .src(Rect::from_raw(16, 16, 32, 48))
            .at(Point::new(100, 50))
            .run()
            .unwrap();

        assert_eq!(
            target.calls,
            vec![(
                Some(Rect::from_raw(16, 16, 32, 48)),
                Some(Rect::from_raw(100, 50, 32, 48)),
            )]
        );
    }

    #[test]
    fn test_src_after_to_keeps_destination() {
        let mut target = RecordingTarget::default();
        RenderOp::new(&mut target)
            .to(Rect::from_raw(0, 0, 10, 10))
            .src(Rect::from_raw(4, 4, 2, 2))
            .run()
            .unwrap();

        assert_eq!(
            target.calls,
            vec![(
                Some(Rect::from_raw(4, 4, 2, 2)),
                Some(Rect::from_raw(0, 0, 10, 10)),
            )]
        );
    }

    #[test]
    fn test_scale_transforms_size() {
        let mut target = RecordingTarget::default();
        RenderOp::new(&mut target)
            .src(Rect::from_raw(0, 0, 10, 20))
            .at(Point::new(5, 5))
            .scale(|size| Area::new(size.width * 3, size.height * 3))
            .run()
            .unwrap();

        assert_eq!(target.calls[0].1, Some(Rect::from_raw(5, 5, 30, 60)));
    }

    #[test]
    fn test_anchor_repositions_after_size_is_final() {
        let mut target = RecordingTarget::default();
        RenderOp::new(&mut target)
            .src(Rect::from_raw(0, 0, 40, 20))
            .at(Point::new(100, 100))
            .anchor(Anchor::Center)
            .run()
            .unwrap();

        assert_eq!(target.calls[0].1, Some(Rect::from_raw(80, 90, 40, 20)));
    }

    #[test]
    fn test_corner_anchors() {
        let corner_cases = [
            (Anchor::TopLeft, Rect::from_raw(100, 100, 8, 6)),
            (Anchor::TopRight, Rect::from_raw(92, 100, 8, 6)),
            (Anchor::BottomLeft, Rect::from_raw(100, 94, 8, 6)),
            (Anchor::BottomRight, Rect::from_raw(92, 94, 8, 6)),
        ];
        for (anchor, expected) in corner_cases {
            let mut target = RecordingTarget::default();
            RenderOp::new(&mut target)
                .src(Rect::from_raw(0, 0, 8, 6))
                .at(Point::new(100, 100))
                .anchor(anchor)
                .run()
                .unwrap();
            assert_eq!(target.calls[0].1, Some(expected), "{anchor:?}");
        }
    }

    #[test]
    fn test_fill_discards_derived_destination() {
        let mut target = RecordingTarget::default();
        RenderOp::new(&mut target)
            .src(Rect::from_raw(0, 0, 10, 10))
            .fill()
            .run()
            .unwrap();

        assert_eq!(
            target.calls,
            vec![(Some(Rect::from_raw(0, 0, 10, 10)), None)]
        );
    }

    #[test]
    fn test_backend_failure_is_reported() {
        let mut target = RecordingTarget { fail: true, ..Default::default() };
        let error = RenderOp::new(&mut target).fill().run().unwrap_err();
        assert_eq!(error, DrawError::Backend("out of memory".into()));
    }

    #[test]
    fn test_exactly_one_copy_per_operation() {
        let mut target = RecordingTarget::default();
        RenderOp::new(&mut target)
            .src(Rect::from_raw(0, 0, 1, 1))
            .at(Point::new(2, 2))
            .scale(|size| size)
            .anchor(Anchor::TopLeft)
            .run()
            .unwrap();
        assert_eq!(target.calls.len(), 1);
    }
}
