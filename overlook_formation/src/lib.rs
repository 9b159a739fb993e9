// Copyright 2025 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overlook Formation: deterministic destination layout for group moves.
//!
//! Ordering a group of agents to one point needs individual destinations —
//! stacking everyone on the same spot is useless. [`plan`] maps a target
//! point and a count to per-agent destinations: the point itself for one
//! agent, a ring for small groups, a centered grid for larger ones.
//!
//! There is no natural "correct" layout, only a consistent one: `plan` is
//! pure and deterministic, and its output is index-aligned with the caller's
//! agent ordering, so re-issuing the same move produces the same assignment.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use overlook_formation::plan;
//!
//! let center = Point::new(10.0, 20.0);
//!
//! // A single agent goes exactly to the target.
//! assert_eq!(plan(center, 1, 2.0), vec![center]);
//!
//! // Six agents form a ring around it.
//! let ring = plan(center, 6, 2.0);
//! assert_eq!(ring.len(), 6);
//! for p in &ring {
//!     assert!(((*p - center).hypot() - 4.0).abs() < 1e-9);
//! }
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;

use kurbo::{Point, Vec2};

/// Largest group laid out as a ring; bigger groups use a grid.
pub const RING_MAX: usize = 6;

/// Default distance between neighboring formation slots, world units.
pub const DEFAULT_SPACING: f64 = 2.0;

/// Computes destination points for `count` agents converging on `center`.
///
/// - `count == 0`: empty.
/// - `count == 1`: exactly `[center]`, no offset.
/// - `2..=6`: points evenly spaced on a ring of radius
///   `spacing * max(1, count/3)`, the first directly north of `center`
///   (negative `z`), proceeding clockwise.
/// - `> 6`: a row-major grid with `ceil(sqrt(count))` columns at `spacing`
///   pitch, re-centered so the centroid of the emitted points is `center`.
///
/// The result is index-aligned with the caller's agent list: agent `i` is
/// assigned point `i`. Identical inputs always produce identical output.
#[must_use]
pub fn plan(center: Point, count: usize, spacing: f64) -> Vec<Point> {
    match count {
        0 => Vec::new(),
        1 => alloc::vec![center],
        2..=RING_MAX => ring(center, count, spacing),
        _ => grid(center, count, spacing),
    }
}

#[expect(clippy::cast_precision_loss, reason = "agent counts are tiny")]
fn ring(center: Point, count: usize, spacing: f64) -> Vec<Point> {
    let radius = spacing * (count as f64 / 3.0).max(1.0);
    let step = core::f64::consts::TAU / count as f64;
    (0..count)
        .map(|i| {
            // Angle -90° puts slot 0 due north; screen-clockwise from there.
            let angle = -core::f64::consts::FRAC_PI_2 + i as f64 * step;
            center + Vec2::from_angle(angle) * radius
        })
        .collect()
}

#[expect(clippy::cast_precision_loss, reason = "agent counts are tiny")]
fn grid(center: Point, count: usize, spacing: f64) -> Vec<Point> {
    // Integer square-root ceiling; avoids float sqrt for no_std friendliness.
    let cols = (1_usize..).find(|&c| c * c >= count).unwrap_or(1);

    let mut points: Vec<Point> = (0..count)
        .map(|i| {
            let col = i % cols;
            let row = i / cols;
            Point::new(col as f64 * spacing, row as f64 * spacing)
        })
        .collect();

    // Re-center on the centroid of the actual points, not the grid extent:
    // a partial last row would otherwise bias the formation off-target.
    let n = count as f64;
    let centroid = points
        .iter()
        .fold(Vec2::ZERO, |acc, p| acc + p.to_vec2())
        / n;
    let shift = center.to_vec2() - centroid;
    for p in &mut points {
        *p += shift;
    }
    points
}
