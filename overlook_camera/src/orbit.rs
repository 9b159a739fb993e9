// Copyright 2025 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! 3D orbit camera: yaw/pitch/distance around a ground target, with
//! screen→world ray casting against the `y = 0` plane.
//!
//! Unlike the plan camera there is no stored transform to mutate; panning,
//! zooming, and orbiting move the camera itself (its ground target, its
//! spherical angles, its distance), and both conversions are re-derived from
//! the camera pose each time.

use glam::{DMat4, DVec3, DVec4};
#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs;
use kurbo::{Point, Rect, Vec2};

use crate::ViewTransform;

/// Pitch clamp keeping the camera above the ground and off the zenith, radians.
pub const PITCH_MIN: f64 = 0.15;
/// See [`PITCH_MIN`].
pub const PITCH_MAX: f64 = 1.45;
/// Distance at which [`ViewTransform::zoom`] reports `1.0`.
pub const BASE_DISTANCE: f64 = 60.0;
/// Default dolly clamp range, world units.
pub const DEFAULT_MIN_DISTANCE: f64 = 8.0;
/// See [`DEFAULT_MIN_DISTANCE`].
pub const DEFAULT_MAX_DISTANCE: f64 = 400.0;

const DEFAULT_FOV_Y: f64 = 50.0 * core::f64::consts::PI / 180.0;
const NEAR: f64 = 0.1;
const FAR: f64 = 4_000.0;
// Ground cap for rays that graze or miss the horizon when computing bounds.
const HORIZON_CAP: f64 = 40.0;

/// Perspective orbit camera over the battlefield ground plane.
#[derive(Clone, Copy, Debug)]
pub struct OrbitCamera {
    target: DVec3,
    yaw: f64,
    pitch: f64,
    distance: f64,
    fov_y: f64,
    width: f64,
    height: f64,
    min_distance: f64,
    max_distance: f64,
}

impl OrbitCamera {
    /// Creates a camera orbiting the world origin, positioned south of it and
    /// pitched down at 45°.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            target: DVec3::ZERO,
            yaw: core::f64::consts::FRAC_PI_2,
            pitch: core::f64::consts::FRAC_PI_4,
            distance: BASE_DISTANCE,
            fov_y: DEFAULT_FOV_Y,
            width,
            height,
            min_distance: DEFAULT_MIN_DISTANCE,
            max_distance: DEFAULT_MAX_DISTANCE,
        }
    }

    /// Updates the viewport size without disturbing the camera pose.
    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    /// Sets the dolly clamp range, normalizing so `min <= max`, and re-clamps
    /// the current distance.
    pub fn set_distance_limits(&mut self, min_distance: f64, max_distance: f64) {
        let (min_distance, max_distance) = if min_distance <= max_distance {
            (min_distance, max_distance)
        } else {
            (max_distance, min_distance)
        };
        self.min_distance = min_distance;
        self.max_distance = max_distance;
        self.distance = self.distance.clamp(min_distance, max_distance);
    }

    /// Rotates the camera around its target. Pitch is clamped to keep the
    /// camera above the ground plane.
    pub fn orbit_by(&mut self, d_yaw: f64, d_pitch: f64) {
        self.yaw += d_yaw;
        self.pitch = (self.pitch + d_pitch).clamp(PITCH_MIN, PITCH_MAX);
    }

    /// The ground point the camera orbits.
    #[must_use]
    pub fn target(&self) -> Point {
        Point::new(self.target.x, self.target.z)
    }

    /// Current distance from eye to target, world units.
    #[must_use]
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Current yaw and pitch, radians.
    #[must_use]
    pub fn angles(&self) -> (f64, f64) {
        (self.yaw, self.pitch)
    }

    /// Eye position derived from target, angles, and distance.
    #[must_use]
    pub fn eye(&self) -> DVec3 {
        let dir = DVec3::new(
            self.yaw.cos() * self.pitch.cos(),
            self.pitch.sin(),
            self.yaw.sin() * self.pitch.cos(),
        );
        self.target + dir * self.distance
    }

    fn view_proj(&self) -> DMat4 {
        let aspect = if self.height > 0.0 { self.width / self.height } else { 1.0 };
        let proj = DMat4::perspective_rh(self.fov_y, aspect, NEAR, FAR);
        let view = DMat4::look_at_rh(self.eye(), self.target, DVec3::Y);
        proj * view
    }

    /// Casts the ray through a screen point and returns its direction from
    /// the eye, without intersecting anything.
    fn ray_dir(&self, screen: Point) -> Option<DVec3> {
        if self.width <= 0.0 || self.height <= 0.0 {
            return None;
        }
        let ndc_x = 2.0 * screen.x / self.width - 1.0;
        let ndc_y = 1.0 - 2.0 * screen.y / self.height;
        let inv = self.view_proj().inverse();
        let far = inv * DVec4::new(ndc_x, ndc_y, 1.0, 1.0);
        if far.w.abs() < f64::EPSILON {
            return None;
        }
        Some((far.truncate() / far.w - self.eye()).normalize())
    }

    // Ground-plane unit axes of the camera: forward (eye toward target,
    // flattened) and right.
    fn ground_axes(&self) -> (DVec3, DVec3) {
        let forward = DVec3::new(-self.yaw.cos(), 0.0, -self.yaw.sin());
        let right = DVec3::new(self.yaw.sin(), 0.0, -self.yaw.cos());
        (forward, right)
    }

    /// World units per pixel at the target's depth.
    #[must_use]
    pub fn world_units_per_pixel(&self) -> f64 {
        if self.height <= 0.0 {
            return 1.0;
        }
        2.0 * self.distance * (self.fov_y / 2.0).tan() / self.height
    }

    /// Snapshot of the current camera pose for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> OrbitCameraDebugInfo {
        OrbitCameraDebugInfo {
            viewport: (self.width, self.height),
            target: self.target(),
            yaw: self.yaw,
            pitch: self.pitch,
            distance: self.distance,
            min_distance: self.min_distance,
            max_distance: self.max_distance,
            eye: self.eye(),
        }
    }
}

/// Debug snapshot of an [`OrbitCamera`] pose.
#[derive(Clone, Copy, Debug)]
pub struct OrbitCameraDebugInfo {
    /// Viewport size in CSS pixels.
    pub viewport: (f64, f64),
    /// Ground point the camera orbits.
    pub target: Point,
    /// Yaw angle, radians.
    pub yaw: f64,
    /// Pitch angle, radians.
    pub pitch: f64,
    /// Eye-to-target distance, world units.
    pub distance: f64,
    /// Minimum dolly distance.
    pub min_distance: f64,
    /// Maximum dolly distance.
    pub max_distance: f64,
    /// Derived eye position.
    pub eye: DVec3,
}

impl ViewTransform for OrbitCamera {
    fn screen_to_world(&self, screen: Point) -> Option<Point> {
        let eye = self.eye();
        let dir = self.ray_dir(screen)?;
        // The eye is always above the plane, so only downward rays can land.
        if dir.y >= -f64::EPSILON {
            return None;
        }
        let t = -eye.y / dir.y;
        let hit = eye + dir * t;
        Some(Point::new(hit.x, hit.z))
    }

    fn world_to_screen(&self, world: Point) -> Option<Point> {
        let clip = self.view_proj() * DVec4::new(world.x, 0.0, world.y, 1.0);
        if clip.w <= f64::EPSILON {
            // Behind the camera.
            return None;
        }
        let ndc = clip.truncate() / clip.w;
        Some(Point::new(
            (ndc.x + 1.0) * 0.5 * self.width,
            (1.0 - ndc.y) * 0.5 * self.height,
        ))
    }

    fn pan_by(&mut self, delta: Vec2) {
        let (forward, right) = self.ground_axes();
        let wpp = self.world_units_per_pixel();
        // Content follows the pointer: dragging right shifts the camera left.
        self.target += (forward * delta.y - right * delta.x) * wpp;
        self.target.y = 0.0;
    }

    fn zoom_at_point(&mut self, _anchor_screen: Point, factor: f64) {
        // The orbit pivot must stay the target, so the dolly ignores the
        // cursor anchor and moves along the view axis.
        if factor <= 0.0 {
            return;
        }
        self.distance = (self.distance / factor).clamp(self.min_distance, self.max_distance);
    }

    fn focus_on(&mut self, world: Point, zoom: f64) {
        self.target = DVec3::new(world.x, 0.0, world.y);
        if zoom > 0.0 {
            self.distance = (BASE_DISTANCE / zoom).clamp(self.min_distance, self.max_distance);
        }
    }

    fn visible_bounds(&self) -> Rect {
        let eye = self.eye();
        let mut min = self.target();
        let mut max = self.target();
        let mut extend = |p: Point| {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        };
        for corner in [
            Point::ZERO,
            Point::new(self.width, 0.0),
            Point::new(0.0, self.height),
            Point::new(self.width, self.height),
        ] {
            if let Some(hit) = self.screen_to_world(corner) {
                extend(hit);
            } else if let Some(dir) = self.ray_dir(corner) {
                // Above the horizon: cap the ray at a fixed ground distance.
                let cap = eye + dir * (self.distance * HORIZON_CAP);
                extend(Point::new(cap.x, cap.z));
            }
        }
        Rect::new(min.x, min.y, max.x, max.y)
    }

    fn zoom(&self) -> f64 {
        BASE_DISTANCE / self.distance
    }
}
