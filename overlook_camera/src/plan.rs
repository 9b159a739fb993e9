// Copyright 2025 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! 2D plan camera: affine pan + uniform zoom over the battlefield map.

use kurbo::{Point, Rect, Vec2};

use crate::ViewTransform;

/// Default zoom clamp range for the plan view.
pub const DEFAULT_MIN_ZOOM: f64 = 0.2;
/// See [`DEFAULT_MIN_ZOOM`].
pub const DEFAULT_MAX_ZOOM: f64 = 8.0;

/// Pan/zoom camera for the 2D plan view.
///
/// The transform is `screen = world * zoom + pan`, with `pan` in CSS pixels
/// and `zoom` a uniform scale factor clamped to a configured range.
#[derive(Clone, Copy, Debug)]
pub struct PlanCamera {
    width: f64,
    height: f64,
    pan: Vec2,
    zoom: f64,
    min_zoom: f64,
    max_zoom: f64,
}

impl PlanCamera {
    /// Creates a camera for a viewport of the given size, with world origin at
    /// the top-left and zoom `1.0`.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            pan: Vec2::ZERO,
            zoom: 1.0,
            min_zoom: DEFAULT_MIN_ZOOM,
            max_zoom: DEFAULT_MAX_ZOOM,
        }
    }

    /// Updates the viewport size without disturbing pan or zoom.
    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    /// Sets the zoom clamp range, normalizing so `min <= max`, and re-clamps
    /// the current zoom.
    pub fn set_zoom_limits(&mut self, min_zoom: f64, max_zoom: f64) {
        let (min_zoom, max_zoom) = if min_zoom <= max_zoom {
            (min_zoom, max_zoom)
        } else {
            (max_zoom, min_zoom)
        };
        self.min_zoom = min_zoom;
        self.max_zoom = max_zoom;
        self.zoom = self.zoom.clamp(min_zoom, max_zoom);
    }

    /// Frames a world-space rectangle, choosing the largest clamped zoom that
    /// fits it and centering it in the viewport.
    pub fn fit_rect(&mut self, rect: Rect) {
        if rect.width() <= 0.0 || rect.height() <= 0.0 || self.width <= 0.0 || self.height <= 0.0 {
            return;
        }
        let sx = self.width / rect.width();
        let sy = self.height / rect.height();
        let zoom = sx.min(sy).clamp(self.min_zoom, self.max_zoom);
        self.zoom = zoom;
        let center = Vec2::new(self.width / 2.0, self.height / 2.0);
        self.pan = center - rect.center().to_vec2() * zoom;
    }

    /// Current pan offset in screen pixels.
    #[must_use]
    pub fn pan(&self) -> Vec2 {
        self.pan
    }

    /// Viewport size in CSS pixels.
    #[must_use]
    pub fn viewport(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    /// Converts a screen-space distance to world units at the current zoom.
    #[must_use]
    pub fn screen_dist_to_world(&self, screen_dist: f64) -> f64 {
        screen_dist / self.zoom
    }

    /// Snapshot of the current camera state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> PlanCameraDebugInfo {
        PlanCameraDebugInfo {
            viewport: (self.width, self.height),
            pan: self.pan,
            zoom: self.zoom,
            min_zoom: self.min_zoom,
            max_zoom: self.max_zoom,
            visible_bounds: self.visible_bounds(),
        }
    }
}

/// Debug snapshot of a [`PlanCamera`] state.
#[derive(Clone, Copy, Debug)]
pub struct PlanCameraDebugInfo {
    /// Viewport size in CSS pixels.
    pub viewport: (f64, f64),
    /// Current pan offset in screen pixels.
    pub pan: Vec2,
    /// Current uniform zoom factor.
    pub zoom: f64,
    /// Minimum zoom factor.
    pub min_zoom: f64,
    /// Maximum zoom factor.
    pub max_zoom: f64,
    /// World-space rectangle currently visible through the viewport.
    pub visible_bounds: Rect,
}

impl ViewTransform for PlanCamera {
    fn screen_to_world(&self, screen: Point) -> Option<Point> {
        Some(((screen.to_vec2() - self.pan) / self.zoom).to_point())
    }

    fn world_to_screen(&self, world: Point) -> Option<Point> {
        Some((world.to_vec2() * self.zoom + self.pan).to_point())
    }

    fn pan_by(&mut self, delta: Vec2) {
        self.pan += delta;
    }

    fn zoom_at_point(&mut self, anchor_screen: Point, factor: f64) {
        if factor <= 0.0 {
            return;
        }
        let new_zoom = (self.zoom * factor).clamp(self.min_zoom, self.max_zoom);
        if (new_zoom - self.zoom).abs() < f64::EPSILON {
            return;
        }
        // The world point under the anchor must stay under the anchor: find it
        // with the old transform, then re-derive pan with the new zoom.
        let anchor_world = (anchor_screen.to_vec2() - self.pan) / self.zoom;
        self.zoom = new_zoom;
        self.pan = anchor_screen.to_vec2() - anchor_world * new_zoom;
    }

    fn focus_on(&mut self, world: Point, zoom: f64) {
        if zoom > 0.0 {
            self.zoom = zoom.clamp(self.min_zoom, self.max_zoom);
        }
        let center = Vec2::new(self.width / 2.0, self.height / 2.0);
        self.pan = center - world.to_vec2() * self.zoom;
    }

    fn visible_bounds(&self) -> Rect {
        let top_left = ((Vec2::ZERO - self.pan) / self.zoom).to_point();
        let bottom_right =
            ((Vec2::new(self.width, self.height) - self.pan) / self.zoom).to_point();
        Rect::from_points(top_left, bottom_right)
    }

    fn zoom(&self) -> f64 {
        self.zoom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> PlanCamera {
        PlanCamera::new(800.0, 600.0)
    }

    #[test]
    fn identity_transform_at_start() {
        let c = camera();
        let p = Point::new(12.0, 34.0);
        assert_eq!(c.screen_to_world(p), Some(p));
        assert_eq!(c.world_to_screen(p), Some(p));
    }

    #[test]
    fn round_trip_within_a_pixel() {
        let mut c = camera();
        c.pan_by(Vec2::new(-120.0, 45.0));
        c.zoom_at_point(Point::new(200.0, 150.0), 2.5);

        for screen in [
            Point::new(0.0, 0.0),
            Point::new(799.0, 599.0),
            Point::new(400.0, 300.0),
            Point::new(13.7, 521.2),
        ] {
            let world = c.screen_to_world(screen).unwrap();
            let back = c.world_to_screen(world).unwrap();
            assert!((back - screen).hypot() < 1.0, "round trip drifted at {screen:?}");
        }
    }

    #[test]
    fn zoom_keeps_anchor_point_fixed() {
        let mut c = camera();
        c.pan_by(Vec2::new(50.0, -20.0));
        let anchor = Point::new(300.0, 200.0);
        let before = c.screen_to_world(anchor).unwrap();

        c.zoom_at_point(anchor, 1.75);
        let after = c.screen_to_world(anchor).unwrap();

        assert!((after - before).hypot() < 1e-9, "anchor world point moved");
    }

    #[test]
    fn zoom_is_clamped_silently() {
        let mut c = camera();
        c.zoom_at_point(Point::new(400.0, 300.0), 1e9);
        assert_eq!(c.zoom(), DEFAULT_MAX_ZOOM);
        c.zoom_at_point(Point::new(400.0, 300.0), 1e-9);
        assert_eq!(c.zoom(), DEFAULT_MIN_ZOOM);
    }

    #[test]
    fn non_positive_zoom_factor_is_ignored() {
        let mut c = camera();
        c.zoom_at_point(Point::new(0.0, 0.0), 0.0);
        c.zoom_at_point(Point::new(0.0, 0.0), -2.0);
        assert_eq!(c.zoom(), 1.0);
    }

    #[test]
    fn pan_moves_world_under_pointer() {
        let mut c = camera();
        let world_before = c.screen_to_world(Point::new(100.0, 100.0)).unwrap();
        c.pan_by(Vec2::new(30.0, 0.0));
        // The same world point is now 30px further right on screen.
        let screen_after = c.world_to_screen(world_before).unwrap();
        assert_eq!(screen_after, Point::new(130.0, 100.0));
    }

    #[test]
    fn focus_on_centers_world_point() {
        let mut c = camera();
        c.focus_on(Point::new(500.0, 500.0), 2.0);
        let center_world = c.screen_to_world(Point::new(400.0, 300.0)).unwrap();
        assert!((center_world - Point::new(500.0, 500.0)).hypot() < 1e-9);
        assert_eq!(c.zoom(), 2.0);
    }

    #[test]
    fn visible_bounds_match_viewport_corners() {
        let mut c = camera();
        c.focus_on(Point::new(0.0, 0.0), 2.0);
        let bounds = c.visible_bounds();
        assert!((bounds.width() - 400.0).abs() < 1e-9);
        assert!((bounds.height() - 300.0).abs() < 1e-9);
        assert!((bounds.center() - Point::new(0.0, 0.0)).hypot() < 1e-9);
    }

    #[test]
    fn fit_rect_frames_and_centers() {
        let mut c = camera();
        let rect = Rect::new(0.0, 0.0, 400.0, 100.0);
        c.fit_rect(rect);
        let bounds = c.visible_bounds();
        assert!(bounds.x0 <= rect.x0 + 1e-9 && bounds.x1 >= rect.x1 - 1e-9);
        assert!(bounds.y0 <= rect.y0 + 1e-9 && bounds.y1 >= rect.y1 - 1e-9);
        assert!((bounds.center() - rect.center()).hypot() < 1e-9);
    }

    #[test]
    fn set_zoom_limits_normalizes_and_reclamps() {
        let mut c = camera();
        c.set_zoom_limits(4.0, 2.0);
        assert_eq!(c.zoom(), 2.0);
    }

    #[test]
    fn screen_dist_scales_with_zoom() {
        let mut c = camera();
        c.zoom_at_point(Point::new(0.0, 0.0), 4.0);
        assert_eq!(c.screen_dist_to_world(8.0), 2.0);
    }
}
