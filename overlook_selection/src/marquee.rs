// Copyright 2025 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rubber-band (marquee) box resolution.
//!
//! The box lives in screen space: the drag anchor and the current pointer
//! position span an axis-aligned rectangle in any orientation, and an entity
//! is inside when its *projected* screen position falls within the box. In
//! the orbit view that projection is a perspective one, which is exactly why
//! resolution takes a projection callback instead of comparing world
//! coordinates.

use alloc::vec::Vec;

use kurbo::Point;

/// Minimum box extent, in pixels, for a drag to count as a marquee.
///
/// Below this in both dimensions the drag is treated as noise and resolves to
/// nothing rather than an empty selection.
pub const MIN_BOX_PX: f64 = 5.0;

/// Resolves a marquee drag to the entities whose projections fall inside it.
///
/// `a` and `b` are opposite corners in screen space, in any order.
/// `project` maps a world position to its screen position; returning `None`
/// (off-screen or behind the camera in a perspective view) excludes the
/// candidate. Edges are inclusive: an entity projected exactly onto the box
/// boundary is selected.
///
/// Returns `None` when the box is degenerate (smaller than [`MIN_BOX_PX`] in
/// both dimensions); callers should leave the current selection untouched in
/// that case. A valid box with no hits returns an empty `Vec`, which *does*
/// mean "replace the selection with nothing".
pub fn resolve_box<Id, I, P>(a: Point, b: Point, candidates: I, mut project: P) -> Option<Vec<Id>>
where
    I: IntoIterator<Item = (Id, Point)>,
    P: FnMut(Point) -> Option<Point>,
{
    let (x0, x1) = if a.x <= b.x { (a.x, b.x) } else { (b.x, a.x) };
    let (y0, y1) = if a.y <= b.y { (a.y, b.y) } else { (b.y, a.y) };

    if x1 - x0 < MIN_BOX_PX && y1 - y0 < MIN_BOX_PX {
        return None;
    }

    let mut hits = Vec::new();
    for (id, world) in candidates {
        if let Some(screen) = project(world)
            && screen.x >= x0
            && screen.x <= x1
            && screen.y >= y0
            && screen.y <= y1
        {
            hits.push(id);
        }
    }
    Some(hits)
}
