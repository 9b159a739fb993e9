// Copyright 2025 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overlook Camera: screen↔world coordinate transforms for both views.
//!
//! The battlefield is shown either as a 2D plan (orthographic canvas) or a 3D
//! orbit view (perspective camera over a ground plane). Gesture logic must not
//! care which: both cameras implement the [`ViewTransform`] contract, and the
//! rest of the engine speaks only in terms of it.
//!
//! World coordinates are ground-plane coordinates `(x, z)` carried as a
//! [`kurbo::Point`] whose `y` field holds world `z`. Screen coordinates are
//! CSS pixels with the origin at the top-left of the viewport.
//!
//! - [`plan::PlanCamera`]: an affine pan + uniform zoom transform, with
//!   zoom-toward-cursor and clamped zoom.
//! - [`orbit::OrbitCamera`]: a yaw/pitch/distance orbit around a ground
//!   target; screen→world is a ray cast against the `y = 0` plane, world→screen
//!   is a perspective projection.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use overlook_camera::ViewTransform;
//! use overlook_camera::plan::PlanCamera;
//!
//! let mut camera = PlanCamera::new(800.0, 600.0);
//! camera.zoom_at_point(Point::new(400.0, 300.0), 2.0);
//!
//! // Round-trip: any on-screen point survives screen→world→screen.
//! let screen = Point::new(123.0, 456.0);
//! let world = camera.screen_to_world(screen).unwrap();
//! let back = camera.world_to_screen(world).unwrap();
//! assert!((back - screen).hypot() < 1.0);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

pub mod orbit;
pub mod plan;

use kurbo::{Point, Rect, Vec2};

/// The per-view screen↔world conversion contract.
///
/// The `Option` returns capture the 3D misses: a screen ray that never reaches
/// the ground plane, or a world point behind the camera. The 2D implementation
/// always returns `Some`.
///
/// Both implementations satisfy the round-trip property: for any screen point
/// whose ray hits visible ground, `world_to_screen(screen_to_world(p))` equals
/// `p` within a pixel.
pub trait ViewTransform {
    /// Converts a screen-space point to ground-plane world coordinates.
    fn screen_to_world(&self, screen: Point) -> Option<Point>;

    /// Converts a ground-plane world point to screen coordinates.
    fn world_to_screen(&self, world: Point) -> Option<Point>;

    /// Pans the view by a screen-space delta (right/down positive).
    fn pan_by(&mut self, delta: Vec2);

    /// Zooms by `factor` (`> 1` zooms in), anchored at a screen point where
    /// the view supports it. Zoom is silently clamped to configured bounds.
    fn zoom_at_point(&mut self, anchor_screen: Point, factor: f64);

    /// Centers the view on a world point at the given zoom level.
    fn focus_on(&mut self, world: Point, zoom: f64);

    /// The ground-plane region currently visible through the viewport.
    fn visible_bounds(&self) -> Rect;

    /// The current zoom level (`1.0` is the baseline).
    fn zoom(&self) -> f64;
}
