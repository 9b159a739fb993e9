// Copyright 2025 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Timestamp-driven single/double click resolution.
//!
//! A click on a target cannot be reported immediately: it might be the first
//! half of a double-click. [`DoubleClickTracker`] defers it instead, handing
//! the caller a deadline to arm (see [`crate::timer::TimerQueue`]); if a second
//! click on the *same* target arrives inside the window, the pending single
//! click is consumed into a double-click. A click on a different target, or on
//! empty ground, flushes the pending click as a single click right away — two
//! clicks on two targets are always two independent single clicks, never a
//! cross-target pair.
//!
//! Agents and buildings each get their own tracker instance, so an agent click
//! followed by a building click can never pair either.
//!
//! ## Minimal example
//!
//! ```
//! use overlook_gesture::click::{ClickOutcome, DoubleClickTracker};
//!
//! let mut clicks = DoubleClickTracker::new(350);
//!
//! // First click on "a1" is deferred.
//! let outcome = clicks.on_click("a1", 1_000);
//! assert_eq!(outcome, ClickOutcome::Deferred { deadline: 1_350 });
//!
//! // Second click inside the window pairs into a double-click.
//! assert_eq!(clicks.on_click("a1", 1_250), ClickOutcome::DoubleClick("a1"));
//!
//! // Nothing left to fire once the deadline passes.
//! assert_eq!(clicks.poll(2_000), None);
//! ```

/// How a resolved click was absorbed by the tracker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClickOutcome<T> {
    /// The click was deferred; fire it as a single click via
    /// [`DoubleClickTracker::poll`] once `deadline` passes.
    Deferred {
        /// Instant (milliseconds) at which the deferred click matures.
        deadline: u64,
    },
    /// Second click on the same target within the window; the pending single
    /// click is consumed and never fires.
    DoubleClick(T),
    /// A different target was clicked while another click was pending: the
    /// previous target resolves as a single click *now*, and the new click is
    /// deferred.
    SingleThenDeferred {
        /// The previously pending target, to be reported as a single click.
        resolved: T,
        /// Deadline for the newly deferred click.
        deadline: u64,
    },
}

#[derive(Clone, Copy, Debug)]
struct Pending<T> {
    target: T,
    deadline: u64,
}

/// Tracks pending single clicks and pairs same-target repeats into
/// double-clicks.
#[derive(Clone, Debug)]
pub struct DoubleClickTracker<T> {
    window_ms: u64,
    pending: Option<Pending<T>>,
}

impl<T> DoubleClickTracker<T> {
    /// Creates a tracker with the given pairing window in milliseconds.
    #[must_use]
    pub const fn new(window_ms: u64) -> Self {
        Self {
            window_ms,
            pending: None,
        }
    }

    /// Whether a single click is currently deferred.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// The deadline of the currently deferred click, if any.
    #[must_use]
    pub fn deadline(&self) -> Option<u64> {
        self.pending.as_ref().map(|p| p.deadline)
    }

    /// Drops any pending click without firing it.
    ///
    /// This is the dispose path; a torn-down view must not receive late
    /// callbacks.
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

impl<T> DoubleClickTracker<T>
where
    T: Clone + PartialEq,
{
    /// Records a resolved click on a hit target.
    pub fn on_click(&mut self, target: T, now: u64) -> ClickOutcome<T> {
        let deadline = now + self.window_ms;
        match self.pending.take() {
            Some(pending) if pending.target == target && now < pending.deadline => {
                // Tracker resets fully: a third click starts a fresh pair
                // rather than chaining double-clicks.
                ClickOutcome::DoubleClick(target)
            }
            Some(pending) => {
                // Different target, or the window elapsed before the host
                // polled: the old click is an ordinary single click.
                self.pending = Some(Pending { target, deadline });
                ClickOutcome::SingleThenDeferred {
                    resolved: pending.target,
                    deadline,
                }
            }
            None => {
                self.pending = Some(Pending { target, deadline });
                ClickOutcome::Deferred { deadline }
            }
        }
    }

    /// Records a resolved click on empty ground.
    ///
    /// Ground clicks never participate in pairing; any pending click is
    /// returned so the caller can fire it as a single click before handling
    /// the ground click.
    pub fn on_ground_click(&mut self) -> Option<T> {
        self.pending.take().map(|p| p.target)
    }

    /// Fires the pending single click once its deadline has passed.
    ///
    /// Call with the current time whenever the host timer fires (or on any
    /// convenient tick). Returns the matured target at most once.
    pub fn poll(&mut self, now: u64) -> Option<T> {
        match &self.pending {
            Some(pending) if now >= pending.deadline => self.pending.take().map(|p| p.target),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn double_click_within_window_fires_once_and_suppresses_single() {
        let mut t = DoubleClickTracker::new(350);
        assert_eq!(t.on_click("a1", 1_000), ClickOutcome::Deferred { deadline: 1_350 });
        assert_eq!(t.on_click("a1", 1_250), ClickOutcome::DoubleClick("a1"));
        assert!(!t.has_pending());
        assert_eq!(t.poll(5_000), None);
    }

    #[test]
    fn slow_repeat_is_two_single_clicks() {
        let mut t = DoubleClickTracker::new(350);
        t.on_click("a1", 1_000);
        assert_eq!(t.poll(1_350), Some("a1"));

        assert_eq!(t.on_click("a1", 1_500), ClickOutcome::Deferred { deadline: 1_850 });
        assert_eq!(t.poll(1_850), Some("a1"));
    }

    #[test]
    fn different_target_flushes_previous_as_single() {
        let mut t = DoubleClickTracker::new(350);
        t.on_click("a1", 1_000);
        let outcome = t.on_click("b2", 1_100);
        assert_eq!(
            outcome,
            ClickOutcome::SingleThenDeferred {
                resolved: "a1",
                deadline: 1_450
            }
        );
        assert_eq!(t.poll(1_450), Some("b2"));
    }

    #[test]
    fn same_target_after_unpolled_expiry_does_not_pair() {
        let mut t = DoubleClickTracker::new(350);
        t.on_click("a1", 1_000);
        // The host never polled; a click far outside the window must still be
        // two singles.
        let outcome = t.on_click("a1", 2_000);
        assert_eq!(
            outcome,
            ClickOutcome::SingleThenDeferred {
                resolved: "a1",
                deadline: 2_350
            }
        );
    }

    #[test]
    fn exact_window_boundary_does_not_pair() {
        let mut t = DoubleClickTracker::new(300);
        t.on_click("a1", 1_000);
        // t - last == window is outside the "< delay" rule.
        assert!(matches!(
            t.on_click("a1", 1_300),
            ClickOutcome::SingleThenDeferred { .. }
        ));
    }

    #[test]
    fn ground_click_flushes_and_clears() {
        let mut t = DoubleClickTracker::new(350);
        t.on_click("a1", 1_000);
        assert_eq!(t.on_ground_click(), Some("a1"));
        assert!(!t.has_pending());

        // Clicking the target again after the ground click starts fresh.
        assert_eq!(t.on_click("a1", 1_100), ClickOutcome::Deferred { deadline: 1_450 });
    }

    #[test]
    fn ground_click_with_nothing_pending_is_a_noop() {
        let mut t = DoubleClickTracker::<&str>::new(350);
        assert_eq!(t.on_ground_click(), None);
    }

    #[test]
    fn poll_before_deadline_fires_nothing() {
        let mut t = DoubleClickTracker::new(350);
        t.on_click("a1", 1_000);
        assert_eq!(t.poll(1_349), None);
        assert!(t.has_pending());
    }

    #[test]
    fn poll_fires_at_most_once() {
        let mut t = DoubleClickTracker::new(350);
        t.on_click("a1", 1_000);
        assert_eq!(t.poll(1_400), Some("a1"));
        assert_eq!(t.poll(1_400), None);
    }

    #[test]
    fn cancel_drops_pending_unfired() {
        let mut t = DoubleClickTracker::new(350);
        t.on_click("a1", 1_000);
        t.cancel();
        assert_eq!(t.poll(10_000), None);
    }

    #[test]
    fn tracker_resets_after_double_click() {
        let mut t = DoubleClickTracker::new(350);
        t.on_click("a1", 1_000);
        t.on_click("a1", 1_100);
        // Third click begins a fresh pair, not a chained triple.
        assert_eq!(t.on_click("a1", 1_200), ClickOutcome::Deferred { deadline: 1_550 });
    }
}
