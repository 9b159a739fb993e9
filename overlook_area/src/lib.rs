// Copyright 2025 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overlook Area: draw and resize lifecycles for ground-plane zones.
//!
//! Zones (rectangles and circles on the ground plane) are created by dragging
//! a shape out with an active tool and adjusted by dragging one of their
//! handles. Both lifecycles are modeled as plain session values:
//!
//! - [`DrawSession`]: anchor on pointer-down, [`DrawSession::preview`] on
//!   every move, [`DrawSession::finish`] on release. Sub-minimum geometry is
//!   discarded silently rather than creating a degenerate zone.
//! - [`ResizeSession`]: captures the original geometry, the grabbed
//!   [`AreaHandle`], and the grab point; [`ResizeSession::apply`] derives the
//!   adjusted geometry from the current pointer position alone, so
//!   intermediate moves never accumulate error.
//!
//! Sessions carry no interior state machine; the owning controller holds at
//! most one of them at a time, which is what makes draw, resize, selection
//! and pan mutually exclusive.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Rect};
//! use overlook_area::{AreaGeometry, AreaTool, DrawSession};
//!
//! let session = DrawSession::start(AreaTool::Rect, Point::new(2.0, 3.0));
//! let done = session.finish(Point::new(6.0, 1.0)).unwrap();
//! assert_eq!(done, AreaGeometry::Rect(Rect::new(2.0, 1.0, 6.0, 3.0)));
//!
//! // A shaky click with the tool active creates nothing.
//! assert_eq!(session.finish(Point::new(2.01, 3.0)), None);
//! ```
//!
//! This crate is `no_std`; it does not allocate.

#![no_std]

use kurbo::{Point, Rect, Vec2};

/// Smallest zone dimension worth keeping, in world units.
///
/// A finished rectangle needs both width and height at or above this; a
/// circle needs this much radius. Anything smaller is a twitch, not a zone.
pub const MIN_AREA_WORLD: f64 = 0.1;

/// Zone geometry on the ground plane, in world units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AreaGeometry {
    /// An axis-aligned rectangle. Always normalized (`x0 <= x1`, `y0 <= y1`).
    Rect(Rect),
    /// A circle.
    Circle {
        /// Center on the ground plane.
        center: Point,
        /// Radius in world units; never negative.
        radius: f64,
    },
}

impl AreaGeometry {
    /// Moves the geometry by `delta` without changing its size.
    #[must_use]
    pub fn translated(self, delta: Vec2) -> Self {
        match self {
            Self::Rect(rect) => Self::Rect(rect + delta),
            Self::Circle { center, radius } => Self::Circle {
                center: center + delta,
                radius,
            },
        }
    }

    /// Whether both dimensions (or the radius) meet [`MIN_AREA_WORLD`].
    #[must_use]
    pub fn meets_minimum(&self) -> bool {
        match self {
            Self::Rect(rect) => rect.width() >= MIN_AREA_WORLD && rect.height() >= MIN_AREA_WORLD,
            Self::Circle { radius, .. } => *radius >= MIN_AREA_WORLD,
        }
    }
}

/// Which shape the active tool draws.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AreaTool {
    /// Drag opposite corners of a rectangle.
    Rect,
    /// Drag from the center outward; distance is the radius.
    Circle,
}

/// A rectangle corner, named by compass direction (north is negative `y`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Corner {
    /// `(x0, y0)`.
    NorthWest,
    /// `(x1, y0)`.
    NorthEast,
    /// `(x0, y1)`.
    SouthWest,
    /// `(x1, y1)`.
    SouthEast,
}

/// A rectangle edge, named by compass direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    /// The `y0` edge.
    North,
    /// The `y1` edge.
    South,
    /// The `x1` edge.
    East,
    /// The `x0` edge.
    West,
}

/// Identity of the grabbed resize control.
///
/// Corner and edge handles belong to rectangles, the radius handle to
/// circles; the center handle translates either shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AreaHandle {
    /// Drags one corner; both adjacent edges follow.
    Corner(Corner),
    /// Drags one edge; a single dimension changes.
    Edge(Side),
    /// Drags the circle's rim; re-derives the radius.
    Radius,
    /// Drags the whole zone; translation, not resize.
    Center,
}

/// An in-progress zone drawing, from pointer-down with an active tool.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawSession {
    tool: AreaTool,
    anchor: Point,
}

impl DrawSession {
    /// Begins drawing at the world-space anchor point.
    #[must_use]
    pub const fn start(tool: AreaTool, anchor: Point) -> Self {
        Self { tool, anchor }
    }

    /// The tool this session draws with.
    #[must_use]
    pub const fn tool(&self) -> AreaTool {
        self.tool
    }

    /// The world-space anchor recorded at pointer-down.
    #[must_use]
    pub const fn anchor(&self) -> Point {
        self.anchor
    }

    /// The geometry the session would produce at `current`.
    ///
    /// `current == anchor` yields a zero-size preview; that is a valid frame
    /// to render, not an error.
    #[must_use]
    pub fn preview(&self, current: Point) -> AreaGeometry {
        match self.tool {
            AreaTool::Rect => AreaGeometry::Rect(Rect::from_points(self.anchor, current)),
            AreaTool::Circle => AreaGeometry::Circle {
                center: self.anchor,
                radius: (current - self.anchor).hypot(),
            },
        }
    }

    /// Completes the drawing at `current`.
    ///
    /// Returns `None` when the result is below [`MIN_AREA_WORLD`]; such drags
    /// are discarded without any command being issued.
    #[must_use]
    pub fn finish(&self, current: Point) -> Option<AreaGeometry> {
        let geometry = self.preview(current);
        geometry.meets_minimum().then_some(geometry)
    }
}

/// An in-progress adjustment of an existing zone via one handle.
///
/// The original geometry and the grab point are captured once at start;
/// every [`ResizeSession::apply`] call derives the output from those plus the
/// current pointer, never from a previous output.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResizeSession {
    original: AreaGeometry,
    handle: AreaHandle,
    grab: Point,
}

impl ResizeSession {
    /// Begins a resize of `original` via `handle`, grabbed at `grab` in world
    /// space.
    #[must_use]
    pub const fn start(original: AreaGeometry, handle: AreaHandle, grab: Point) -> Self {
        Self {
            original,
            handle,
            grab,
        }
    }

    /// The geometry captured at the start of the session.
    #[must_use]
    pub const fn original(&self) -> AreaGeometry {
        self.original
    }

    /// The handle being dragged.
    #[must_use]
    pub const fn handle(&self) -> AreaHandle {
        self.handle
    }

    /// The adjusted geometry with the grabbed handle at `current`.
    ///
    /// Rectangle output is normalized, so dragging a corner or edge across
    /// the opposite one flips rather than producing a negative size. A handle
    /// that does not belong to the geometry's shape (a radius handle on a
    /// rectangle, say) leaves the geometry unchanged.
    #[must_use]
    pub fn apply(&self, current: Point) -> AreaGeometry {
        if self.handle == AreaHandle::Center {
            return self.original.translated(current - self.grab);
        }
        match (self.original, self.handle) {
            (AreaGeometry::Rect(rect), AreaHandle::Corner(corner)) => {
                AreaGeometry::Rect(Rect::from_points(opposite_corner(rect, corner), current))
            }
            (AreaGeometry::Rect(rect), AreaHandle::Edge(side)) => {
                let (a, b) = match side {
                    Side::North => (Point::new(rect.x0, current.y), Point::new(rect.x1, rect.y1)),
                    Side::South => (Point::new(rect.x0, rect.y0), Point::new(rect.x1, current.y)),
                    Side::East => (Point::new(rect.x0, rect.y0), Point::new(current.x, rect.y1)),
                    Side::West => (Point::new(current.x, rect.y0), Point::new(rect.x1, rect.y1)),
                };
                AreaGeometry::Rect(Rect::from_points(a, b))
            }
            (AreaGeometry::Circle { center, .. }, AreaHandle::Radius) => AreaGeometry::Circle {
                center,
                radius: (current - center).hypot(),
            },
            // Shape/handle mismatch: fail safe, change nothing.
            (original, _) => original,
        }
    }
}

/// The corner of `rect` diagonally opposite `corner`; it stays fixed while
/// the grabbed corner moves.
fn opposite_corner(rect: Rect, corner: Corner) -> Point {
    match corner {
        Corner::NorthWest => Point::new(rect.x1, rect.y1),
        Corner::NorthEast => Point::new(rect.x0, rect.y1),
        Corner::SouthWest => Point::new(rect.x1, rect.y0),
        Corner::SouthEast => Point::new(rect.x0, rect.y0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_draw_normalizes_any_drag_direction() {
        let session = DrawSession::start(AreaTool::Rect, Point::new(10.0, 10.0));
        let geometry = session.preview(Point::new(4.0, 16.0));
        assert_eq!(geometry, AreaGeometry::Rect(Rect::new(4.0, 10.0, 10.0, 16.0)));
    }

    #[test]
    fn zero_size_preview_is_tolerated() {
        let anchor = Point::new(5.0, 5.0);
        let rect = DrawSession::start(AreaTool::Rect, anchor);
        assert_eq!(
            rect.preview(anchor),
            AreaGeometry::Rect(Rect::from_points(anchor, anchor))
        );

        let circle = DrawSession::start(AreaTool::Circle, anchor);
        assert_eq!(
            circle.preview(anchor),
            AreaGeometry::Circle {
                center: anchor,
                radius: 0.0
            }
        );
    }

    #[test]
    fn finish_discards_sub_minimum_geometry() {
        let anchor = Point::new(0.0, 0.0);
        let rect = DrawSession::start(AreaTool::Rect, anchor);
        // Wide but too flat: one sub-minimum dimension is enough to discard.
        assert_eq!(rect.finish(Point::new(50.0, 0.05)), None);
        assert!(rect.finish(Point::new(50.0, 0.1)).is_some());

        let circle = DrawSession::start(AreaTool::Circle, anchor);
        assert_eq!(circle.finish(Point::new(0.05, 0.0)), None);
        assert!(circle.finish(Point::new(0.0, -0.5)).is_some());
    }

    #[test]
    fn circle_radius_is_grab_distance() {
        let session = DrawSession::start(AreaTool::Circle, Point::new(1.0, 1.0));
        let AreaGeometry::Circle { center, radius } = session.preview(Point::new(4.0, 5.0)) else {
            panic!("circle tool must preview a circle");
        };
        assert_eq!(center, Point::new(1.0, 1.0));
        assert!((radius - 5.0).abs() < 1e-12);
    }

    #[test]
    fn corner_resize_moves_both_adjacent_edges() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        let session = ResizeSession::start(
            AreaGeometry::Rect(rect),
            AreaHandle::Corner(Corner::SouthEast),
            Point::new(10.0, 10.0),
        );
        assert_eq!(
            session.apply(Point::new(14.0, 6.0)),
            AreaGeometry::Rect(Rect::new(0.0, 0.0, 14.0, 6.0))
        );
    }

    #[test]
    fn corner_dragged_across_the_opposite_corner_flips() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        let session = ResizeSession::start(
            AreaGeometry::Rect(rect),
            AreaHandle::Corner(Corner::NorthWest),
            Point::new(0.0, 0.0),
        );
        let AreaGeometry::Rect(out) = session.apply(Point::new(13.0, 12.0)) else {
            panic!("rect resize must stay a rect");
        };
        assert_eq!(out, Rect::new(10.0, 10.0, 13.0, 12.0));
        assert!(out.width() >= 0.0 && out.height() >= 0.0);
    }

    #[test]
    fn edge_resize_changes_one_dimension() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        let session = ResizeSession::start(
            AreaGeometry::Rect(rect),
            AreaHandle::Edge(Side::East),
            Point::new(10.0, 5.0),
        );
        assert_eq!(
            // Vertical wobble while dragging the east edge must not leak
            // into the y extents.
            session.apply(Point::new(16.0, 9.0)),
            AreaGeometry::Rect(Rect::new(0.0, 0.0, 16.0, 10.0))
        );
    }

    #[test]
    fn radius_handle_rederives_from_center_distance() {
        let session = ResizeSession::start(
            AreaGeometry::Circle {
                center: Point::new(2.0, 2.0),
                radius: 1.0,
            },
            AreaHandle::Radius,
            Point::new(3.0, 2.0),
        );
        let AreaGeometry::Circle { radius, .. } = session.apply(Point::new(2.0, 8.0)) else {
            panic!("circle resize must stay a circle");
        };
        assert!((radius - 6.0).abs() < 1e-12);
    }

    #[test]
    fn center_handle_translates_without_resizing() {
        let rect = Rect::new(0.0, 0.0, 4.0, 2.0);
        let session = ResizeSession::start(
            AreaGeometry::Rect(rect),
            AreaHandle::Center,
            Point::new(1.0, 1.0),
        );
        assert_eq!(
            session.apply(Point::new(6.0, 4.0)),
            AreaGeometry::Rect(Rect::new(5.0, 3.0, 9.0, 5.0))
        );

        let circle = ResizeSession::start(
            AreaGeometry::Circle {
                center: Point::new(0.0, 0.0),
                radius: 3.0,
            },
            AreaHandle::Center,
            Point::new(0.0, 3.0),
        );
        assert_eq!(
            circle.apply(Point::new(2.0, 3.0)),
            AreaGeometry::Circle {
                center: Point::new(2.0, 0.0),
                radius: 3.0
            }
        );
    }

    #[test]
    fn mismatched_handle_is_a_no_op() {
        let original = AreaGeometry::Rect(Rect::new(0.0, 0.0, 4.0, 4.0));
        let session = ResizeSession::start(original, AreaHandle::Radius, Point::new(4.0, 2.0));
        assert_eq!(session.apply(Point::new(40.0, 2.0)), original);
    }

    #[test]
    fn apply_is_derived_from_start_state_only() {
        let session = ResizeSession::start(
            AreaGeometry::Rect(Rect::new(0.0, 0.0, 10.0, 10.0)),
            AreaHandle::Corner(Corner::SouthEast),
            Point::new(10.0, 10.0),
        );
        // Out-of-order or repeated moves converge on the same answer.
        let _ = session.apply(Point::new(90.0, 90.0));
        let _ = session.apply(Point::new(1.0, 1.0));
        assert_eq!(
            session.apply(Point::new(12.0, 12.0)),
            AreaGeometry::Rect(Rect::new(0.0, 0.0, 12.0, 12.0))
        );
    }
}
