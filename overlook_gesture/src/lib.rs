// Copyright 2025 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overlook Gesture: pointer gesture primitives for viewport interaction.
//!
//! A single `pointerdown` can be the start of a click, a double-click, a
//! box-selection drag, or a camera pan; which one it was only becomes clear
//! after observing subsequent movement and timing. This crate provides the
//! small state machines that perform that disambiguation:
//!
//! - [`session::PointerSession`]: tracks one pointer from down to up, recording
//!   the maximum displacement so the drag-vs-click decision is irrevocable once
//!   the threshold is crossed.
//! - [`session::classify_drag`]: maps (button, modifiers, hit context) to the
//!   drag mode a threshold crossing should enter.
//! - [`click::DoubleClickTracker`]: timestamp-driven single/double click
//!   resolution with a deferred, cancellable single-click.
//! - [`timer::TimerQueue`]: host-agnostic cancellable deadlines backing the
//!   deferred click resolution.
//!
//! All time is explicit: event methods take a `now` in milliseconds supplied by
//! the host. Nothing in this crate touches a wall clock, which keeps every
//! gesture decision reproducible under test.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use overlook_gesture::{Modifiers, PointerButton};
//! use overlook_gesture::session::PointerSession;
//!
//! let mut session = PointerSession::begin(
//!     PointerButton::Primary,
//!     Modifiers::empty(),
//!     Point::new(100.0, 100.0),
//!     1_000,
//! );
//!
//! // A 3px wobble stays below the 5px drag threshold.
//! session.track(Point::new(103.0, 100.0));
//! assert!(session.is_click(5.0));
//!
//! // Crossing the threshold is permanent, even if the pointer returns.
//! session.track(Point::new(110.0, 100.0));
//! session.track(Point::new(100.0, 100.0));
//! assert!(!session.is_click(5.0));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod click;
pub mod session;
pub mod timer;

bitflags::bitflags! {
    /// Keyboard modifier keys held at the time of a pointer or wheel event.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// Shift key.
        const SHIFT = 0b0000_0001;
        /// Control key.
        const CTRL  = 0b0000_0010;
        /// Alt / Option key.
        const ALT   = 0b0000_0100;
        /// Meta / Command key.
        const META  = 0b0000_1000;
    }
}

/// Mouse button (or its touch/pen equivalent) for a pointer event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Left mouse button, single-finger touch, or pen tip.
    Primary,
    /// Middle mouse button / wheel click.
    Middle,
    /// Right mouse button or two-finger tap.
    Secondary,
}

/// Tunable gesture timing and distance constants.
///
/// The exact windows differ between input devices (mouse vs. touch) and
/// historically between views, so they are configuration rather than
/// behavioral contract. The defaults suit a desktop mouse.
#[derive(Clone, Copy, Debug)]
pub struct GestureConfig {
    /// Displacement (CSS pixels) beyond which a session irrevocably becomes a drag.
    pub drag_threshold_px: f64,
    /// Window within which a second click on the same target pairs into a
    /// double-click, in milliseconds.
    ///
    /// There is deliberately no duration bound on a single click: a slow,
    /// still press is a valid click, and hosts that want a duration policy
    /// can read [`session::PointerSession::duration`] themselves.
    pub double_click_ms: u64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            drag_threshold_px: 5.0,
            double_click_ms: 350,
        }
    }
}

impl GestureConfig {
    /// Defaults tuned for touch input: a wider double-click window.
    #[must_use]
    pub fn touch() -> Self {
        Self {
            drag_threshold_px: 5.0,
            double_click_ms: 400,
        }
    }
}
