// Copyright 2025 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The per-viewport gesture mode, with validated transitions.
//!
//! Exactly one mode is active at a time; holding the draw/resize session
//! values inside the variants is what makes panning, box selection, drawing,
//! and resizing mutually exclusive without any extra bookkeeping.
//!
//! Entering a mode is only legal from [`GestureMode::Idle`]. The `begin_*`
//! helpers check that before writing, so a re-entrant callback (a command
//! handler that synthesizes another event mid-dispatch) cannot silently
//! overwrite an in-flight gesture; the illegal transition is a no-op and the
//! helper reports it.

use kurbo::Point;
use overlook_area::{DrawSession, ResizeSession};

/// What the viewport is currently doing with the pointer.
#[derive(Clone, Debug, PartialEq)]
pub enum GestureMode<Id> {
    /// No gesture in flight.
    Idle,
    /// Camera pan drag; `last_screen` is the previous pointer position.
    Panning {
        /// Pointer position at the last processed move.
        last_screen: Point,
    },
    /// Rubber-band selection; both corners in screen space.
    BoxSelecting {
        /// The drag anchor.
        start: Point,
        /// The current pointer position.
        current: Point,
    },
    /// Drawing a new area with the active tool.
    Drawing(DrawSession),
    /// Resizing an existing area via one of its handles.
    Resizing {
        /// The area being resized.
        id: Id,
        /// The captured resize state.
        session: ResizeSession,
    },
}

impl<Id> GestureMode<Id> {
    /// Whether no gesture is in flight.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Enters [`GestureMode::Panning`]; returns `false` if not idle.
    pub fn begin_panning(&mut self, last_screen: Point) -> bool {
        self.enter(Self::Panning { last_screen })
    }

    /// Enters [`GestureMode::BoxSelecting`]; returns `false` if not idle.
    pub fn begin_box_select(&mut self, start: Point, current: Point) -> bool {
        self.enter(Self::BoxSelecting { start, current })
    }

    /// Enters [`GestureMode::Drawing`]; returns `false` if not idle.
    pub fn begin_drawing(&mut self, session: DrawSession) -> bool {
        self.enter(Self::Drawing(session))
    }

    /// Enters [`GestureMode::Resizing`]; returns `false` if not idle.
    pub fn begin_resizing(&mut self, id: Id, session: ResizeSession) -> bool {
        self.enter(Self::Resizing { id, session })
    }

    /// Returns to [`GestureMode::Idle`], yielding the mode that was active.
    pub fn finish(&mut self) -> Self {
        core::mem::replace(self, Self::Idle)
    }

    fn enter(&mut self, next: Self) -> bool {
        if self.is_idle() {
            *self = next;
            true
        } else {
            false
        }
    }
}

impl<Id> Default for GestureMode<Id> {
    fn default() -> Self {
        Self::Idle
    }
}
