// Copyright 2025 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-agnostic cancellable deadlines.
//!
//! The engine never owns a wall clock. Anything that must happen "later"
//! (deferred single-click resolution, today) is armed here as a deadline; the
//! host arms one real timeout for [`TimerQueue::next_deadline`] and calls
//! [`TimerQueue::expire`] when it fires. Tests drive the queue with synthetic
//! timestamps.
//!
//! Handles are generational: a slot freed by cancel or expiry may be reused,
//! but the old [`TimerHandle`] can never cancel or observe the new occupant.

use alloc::vec::Vec;

/// Identifier for a scheduled deadline.
///
/// Stays valid until the timer is cancelled or expires; after that it is
/// stale and all operations on it are no-ops.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerHandle(u32, u32);

impl TimerHandle {
    const fn idx(self) -> usize {
        self.0 as usize
    }
}

#[derive(Clone, Copy, Debug)]
struct Slot {
    generation: u32,
    deadline: Option<u64>,
}

/// A small queue of cancellable deadlines, in milliseconds.
#[derive(Clone, Debug, Default)]
pub struct TimerQueue {
    slots: Vec<Slot>,
}

impl TimerQueue {
    /// Creates an empty queue.
    #[must_use]
    pub const fn new() -> Self {
        Self { slots: Vec::new() }
    }

    /// Schedules a deadline, returning a handle that can cancel it.
    #[expect(clippy::cast_possible_truncation, reason = "slot count fits u32")]
    pub fn schedule(&mut self, deadline: u64) -> TimerHandle {
        for (idx, slot) in self.slots.iter_mut().enumerate() {
            if slot.deadline.is_none() {
                slot.generation = slot.generation.wrapping_add(1);
                slot.deadline = Some(deadline);
                return TimerHandle(idx as u32, slot.generation);
            }
        }
        self.slots.push(Slot {
            generation: 1,
            deadline: Some(deadline),
        });
        TimerHandle(self.slots.len() as u32 - 1, 1)
    }

    /// Cancels a scheduled deadline.
    ///
    /// Returns `true` if the handle was live. Stale handles are a no-op.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        if let Some(slot) = self.slots.get_mut(handle.idx())
            && slot.generation == handle.1
            && slot.deadline.is_some()
        {
            slot.deadline = None;
            return true;
        }
        false
    }

    /// Whether the handle refers to a still-armed deadline.
    #[must_use]
    pub fn is_armed(&self, handle: TimerHandle) -> bool {
        self.slots
            .get(handle.idx())
            .is_some_and(|slot| slot.generation == handle.1 && slot.deadline.is_some())
    }

    /// The earliest armed deadline, if any.
    ///
    /// Hosts arm one real timeout for this instant.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.slots.iter().filter_map(|slot| slot.deadline).min()
    }

    /// Disarms and returns every deadline at or before `now`.
    #[expect(clippy::cast_possible_truncation, reason = "slot count fits u32")]
    pub fn expire(&mut self, now: u64) -> Vec<TimerHandle> {
        let mut fired = Vec::new();
        for (idx, slot) in self.slots.iter_mut().enumerate() {
            if let Some(deadline) = slot.deadline
                && deadline <= now
            {
                slot.deadline = None;
                fired.push(TimerHandle(idx as u32, slot.generation));
            }
        }
        fired
    }

    /// Disarms every deadline without firing. Used on dispose.
    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            slot.deadline = None;
        }
    }

    /// Number of armed deadlines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.deadline.is_some()).count()
    }

    /// Whether no deadlines are armed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
