// Copyright 2025 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overlook Wheel: heuristic classification of wheel and trackpad gestures.
//!
//! Browsers expose mouse wheels and trackpads through the same `wheel` event,
//! so the two can only be told apart heuristically: pinches arrive as
//! ctrl+wheel, trackpads produce horizontal and small continuous vertical
//! deltas, and mouse notches produce large discrete vertical steps.
//!
//! [`classify`] is a pure function applying those rules in priority order.
//! The returned gesture carries the raw deltas so the caller can apply a
//! user-configured sensitivity before panning, zooming, or orbiting.
//!
//! ## Minimal example
//!
//! ```
//! use overlook_gesture::Modifiers;
//! use overlook_wheel::{classify, ScrollGesture, WheelDelta};
//!
//! // A discrete mouse notch.
//! let gesture = classify(WheelDelta { dx: 0.0, dy: 120.0 }, Modifiers::empty(), false);
//! assert_eq!(gesture, Some(ScrollGesture::WheelZoom { dy: 120.0 }));
//!
//! // A two-finger trackpad drag.
//! let gesture = classify(WheelDelta { dx: 3.0, dy: 5.0 }, Modifiers::empty(), false);
//! assert_eq!(gesture, Some(ScrollGesture::Pan { dx: 3.0, dy: 5.0 }));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

use overlook_gesture::Modifiers;

/// Horizontal delta above which an event is assumed to come from a trackpad;
/// mice rarely report horizontal movement.
pub const HORIZONTAL_EPSILON: f64 = 1.0;

/// Vertical delta above which an event is assumed to be a discrete mouse
/// wheel notch rather than a continuous trackpad scroll.
pub const NOTCH_THRESHOLD: f64 = 80.0;

/// Raw wheel/trackpad scroll delta, CSS pixels, positive right/down.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WheelDelta {
    /// Horizontal scroll amount.
    pub dx: f64,
    /// Vertical scroll amount.
    pub dy: f64,
}

/// A classified wheel gesture, carrying the raw deltas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScrollGesture {
    /// Trackpad pinch (browsers synthesize ctrl+wheel for it).
    PinchZoom {
        /// Vertical delta; negative pinches out (zoom in).
        dy: f64,
    },
    /// Discrete mouse wheel notch.
    WheelZoom {
        /// Vertical delta; one notch is typically ±120.
        dy: f64,
    },
    /// Trackpad two-finger drag panning the view.
    Pan {
        /// Horizontal delta.
        dx: f64,
        /// Vertical delta.
        dy: f64,
    },
    /// Trackpad two-finger drag orbiting the camera (shift held, 3D view).
    Orbit {
        /// Horizontal delta.
        dx: f64,
        /// Vertical delta.
        dy: f64,
    },
}

impl ScrollGesture {
    /// Whether this gesture originated from a trackpad.
    #[must_use]
    pub fn is_trackpad(&self) -> bool {
        !matches!(self, Self::WheelZoom { .. })
    }
}

/// Classifies a wheel event, in priority order:
///
/// 1. ctrl held → pinch zoom (always trackpad-origin);
/// 2. meaningful horizontal delta → trackpad two-finger drag;
/// 3. large vertical delta with no horizontal component → mouse wheel notch;
/// 4. small-to-moderate vertical delta → trackpad two-finger drag;
/// 5. all-zero deltas → `None` (ignored, never dispatched downstream).
///
/// A two-finger drag becomes [`ScrollGesture::Orbit`] instead of
/// [`ScrollGesture::Pan`] when shift is held and the caller enables orbiting.
#[must_use]
pub fn classify(
    delta: WheelDelta,
    modifiers: Modifiers,
    orbit_enabled: bool,
) -> Option<ScrollGesture> {
    let WheelDelta { dx, dy } = delta;

    if modifiers.contains(Modifiers::CTRL) {
        return Some(ScrollGesture::PinchZoom { dy });
    }

    let two_finger = |dx: f64, dy: f64| {
        if orbit_enabled && modifiers.contains(Modifiers::SHIFT) {
            ScrollGesture::Orbit { dx, dy }
        } else {
            ScrollGesture::Pan { dx, dy }
        }
    };

    if dx.abs() > HORIZONTAL_EPSILON {
        return Some(two_finger(dx, dy));
    }
    if dy.abs() > NOTCH_THRESHOLD {
        return Some(ScrollGesture::WheelZoom { dy });
    }
    if dy.abs() > 0.0 {
        return Some(two_finger(dx, dy));
    }
    None
}
