// Copyright 2025 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-pointer session tracking and drag-kind classification.
//!
//! A [`PointerSession`] is created on pointer-down and destroyed when the
//! gesture resolves (click fired, drag released, or cancelled). It records the
//! down position, timestamp, button, and modifiers, and tracks the *maximum*
//! displacement seen so far — not the current one — so that crossing the drag
//! threshold is irrevocable: once the pointer has strayed far enough, the
//! session can never resolve as a click, even if it returns to the down point.

use kurbo::Point;

use crate::{Modifiers, PointerButton};

/// State for one pointer from down to up.
///
/// At most one session is active per pointing device; controllers ignore a
/// second down while a session exists.
#[derive(Clone, Copy, Debug)]
pub struct PointerSession {
    button: PointerButton,
    modifiers: Modifiers,
    down_screen: Point,
    down_at: u64,
    last_screen: Point,
    moved: f64,
}

impl PointerSession {
    /// Opens a session at pointer-down.
    ///
    /// `modifiers` are captured here; the modifier state at down time governs
    /// the whole gesture regardless of keys pressed or released mid-drag.
    #[must_use]
    pub fn begin(button: PointerButton, modifiers: Modifiers, screen: Point, now: u64) -> Self {
        Self {
            button,
            modifiers,
            down_screen: screen,
            down_at: now,
            last_screen: screen,
            moved: 0.0,
        }
    }

    /// Records a pointer move, returning the updated maximum displacement.
    pub fn track(&mut self, screen: Point) -> f64 {
        self.last_screen = screen;
        let dist = (screen - self.down_screen).hypot();
        if dist > self.moved {
            self.moved = dist;
        }
        self.moved
    }

    /// The button held for this session.
    #[must_use]
    pub fn button(&self) -> PointerButton {
        self.button
    }

    /// Modifier keys held at down time.
    #[must_use]
    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    /// Screen position of the initiating pointer-down.
    #[must_use]
    pub fn down_screen(&self) -> Point {
        self.down_screen
    }

    /// Timestamp of the initiating pointer-down, in milliseconds.
    #[must_use]
    pub fn down_at(&self) -> u64 {
        self.down_at
    }

    /// Most recent screen position seen.
    #[must_use]
    pub fn last_screen(&self) -> Point {
        self.last_screen
    }

    /// Maximum displacement from the down position seen so far.
    #[must_use]
    pub fn moved(&self) -> f64 {
        self.moved
    }

    /// Whether this session has crossed the drag threshold.
    #[must_use]
    pub fn dragged(&self, threshold_px: f64) -> bool {
        self.moved >= threshold_px
    }

    /// Whether this session is still eligible to resolve as a click.
    ///
    /// Eligibility is distance-only: duration never forces drag
    /// classification, only movement does.
    #[must_use]
    pub fn is_click(&self, threshold_px: f64) -> bool {
        !self.dragged(threshold_px)
    }

    /// Elapsed time since pointer-down, in milliseconds.
    #[must_use]
    pub fn duration(&self, now: u64) -> u64 {
        now.saturating_sub(self.down_at)
    }
}

/// Which view a controller drives; drag classification differs between them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewKind {
    /// 2D plan view (orthographic canvas).
    Plan,
    /// 3D orbit view (perspective camera).
    Orbit,
}

/// Drag modes this engine owns once a session crosses the drag threshold.
///
/// Middle-button drags and plain right-drags are deliberately absent: both
/// views leave those to the renderer's own camera controls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragKind {
    /// Rubber-band box selection over empty ground.
    BoxSelect,
    /// Camera pan.
    Pan,
}

/// Classifies the drag mode a threshold crossing should enter.
///
/// Returns `None` when the drag belongs to someone else (the renderer's
/// controls, or an entity-drag feature outside this engine):
///
/// - primary button over empty ground starts a box selection;
/// - alt+right drag pans the camera, in the orbit view only (the plan view
///   reserves the right button for move orders).
#[must_use]
pub fn classify_drag(
    button: PointerButton,
    modifiers: Modifiers,
    over_entity: bool,
    view: ViewKind,
) -> Option<DragKind> {
    match button {
        PointerButton::Primary if !over_entity => Some(DragKind::BoxSelect),
        PointerButton::Secondary
            if view == ViewKind::Orbit && modifiers.contains(Modifiers::ALT) =>
        {
            Some(DragKind::Pan)
        }
        _ => None,
    }
}
