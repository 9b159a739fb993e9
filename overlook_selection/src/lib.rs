// Copyright 2025 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overlook Selection: selection semantics for the battlefield views.
//!
//! Three pieces live here:
//!
//! - [`Selection`]: the bookkeeping container for the selected-agent set —
//!   a small `Vec`-backed set with replace/toggle/clear operations and a
//!   revision counter. Hosts use it to implement the store side of the
//!   command capability.
//! - [`classify_click`]: the fixed mapping from a resolved single click
//!   (target + shift state) to a selection change.
//! - [`marquee::resolve_box`]: rubber-band box resolution — which entities'
//!   screen projections fall inside a drag rectangle.
//!
//! The container imposes no hashing or ordering constraints on the key type;
//! uniqueness is enforced by equality, which keeps it easy to integrate with
//! whatever ID type the host's store uses.
//!
//! ## Minimal example
//!
//! ```
//! use overlook_selection::{classify_click, ClickSelection, Selection};
//!
//! let mut selection = Selection::<u32>::new();
//!
//! // Plain click on agent 10: replace the selection.
//! match classify_click(Some(10), false) {
//!     ClickSelection::Replace(id) => selection.select_only(id),
//!     _ => unreachable!(),
//! }
//! assert_eq!(selection.items(), &[10]);
//!
//! // Shift-click toggles; shift-clicking the same agent deselects it.
//! assert_eq!(classify_click(Some(10), true), ClickSelection::Toggle(10));
//! selection.toggle(10);
//! assert!(selection.is_empty());
//!
//! // Ground click without shift clears; with shift it is a no-op.
//! assert_eq!(classify_click::<u32>(None, false), ClickSelection::Clear);
//! assert_eq!(classify_click::<u32>(None, true), ClickSelection::NoOp);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod marquee;

use alloc::vec::Vec;

/// The selection change a resolved single click maps to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickSelection<Id> {
    /// Replace the current selection with this one entity.
    Replace(Id),
    /// Toggle this entity's membership in the current selection.
    Toggle(Id),
    /// Clear the selection.
    Clear,
    /// Leave the selection untouched.
    NoOp,
}

/// Maps a resolved single click to its selection change.
///
/// No modifier replaces, shift toggles; a ground click clears without shift
/// and does nothing with it (so a missed shift-click cannot wipe a carefully
/// built selection).
#[must_use]
pub fn classify_click<Id>(target: Option<Id>, shift: bool) -> ClickSelection<Id> {
    match (target, shift) {
        (Some(id), false) => ClickSelection::Replace(id),
        (Some(id), true) => ClickSelection::Toggle(id),
        (None, false) => ClickSelection::Clear,
        (None, true) => ClickSelection::NoOp,
    }
}

/// A small selection container: a set of keys plus a revision counter.
///
/// Keys live in a `Vec<T>` with uniqueness enforced by equality, so `T` needs
/// neither `Ord` nor `Hash`. The revision bumps only when the semantic
/// contents change, giving observers a cheap "did anything actually change?"
/// marker.
#[derive(Clone, Debug, Default)]
pub struct Selection<T> {
    items: Vec<T>,
    revision: u64,
}

impl<T> Selection<T> {
    /// Creates an empty selection.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            items: Vec::new(),
            revision: 0,
        }
    }

    /// Returns `true` if nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of selected keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// All selected keys, in insertion order.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Iterates over the selected keys.
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// The current revision counter; bumps only on semantic change.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Deselects everything.
    pub fn clear(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.items.clear();
        self.bump_revision();
    }

    fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

impl<T> Selection<T>
where
    T: PartialEq,
{
    /// Returns `true` if `key` is currently selected.
    #[must_use]
    pub fn contains(&self, key: &T) -> bool {
        self.items.iter().any(|k| k == key)
    }

    /// Replaces the selection with a single key (plain click).
    pub fn select_only(&mut self, key: T) {
        if self.items.len() == 1 && self.items.first() == Some(&key) {
            return;
        }
        self.items.clear();
        self.items.push(key);
        self.bump_revision();
    }

    /// Toggles `key`'s membership (shift-click).
    pub fn toggle(&mut self, key: T) {
        if let Some(idx) = self.items.iter().position(|k| k == &key) {
            self.items.remove(idx);
        } else {
            self.items.push(key);
        }
        self.bump_revision();
    }

    /// Replaces the selection with a batch of keys (marquee result).
    ///
    /// Duplicates in the input are ignored. De-duplication scans the
    /// accumulated output, so this is quadratic in the input size; for large
    /// hashed key batches see [`Selection::replace_with_hashed`].
    pub fn replace_with<I>(&mut self, keys: I)
    where
        I: IntoIterator<Item = T>,
    {
        let mut new_items: Vec<T> = Vec::new();
        for key in keys {
            if !new_items.iter().any(|existing| existing == &key) {
                new_items.push(key);
            }
        }
        if new_items == self.items {
            return;
        }
        self.items = new_items;
        self.bump_revision();
    }
}

#[cfg(feature = "hashbrown")]
impl<T> Selection<T>
where
    T: core::hash::Hash + Eq,
{
    /// Replaces the selection with a batch of keys, de-duplicating by hash.
    ///
    /// Linear-time alternative to [`Selection::replace_with`] for large
    /// batches; preserves first-occurrence order.
    pub fn replace_with_hashed<I>(&mut self, keys: I)
    where
        I: IntoIterator<Item = T>,
    {
        use core::hash::BuildHasher;

        // One builder for the whole batch. The default hasher is randomly
        // seeded per builder, so a fresh builder per key would never agree
        // with itself on a repeated key.
        let build_hasher = hashbrown::DefaultHashBuilder::default();
        let mut seen = hashbrown::HashSet::new();
        let mut new_items: Vec<T> = Vec::new();
        for key in keys {
            // Hash-first filter; equality confirms on the rare collision.
            if !seen.insert(build_hasher.hash_one(&key)) && new_items.contains(&key) {
                continue;
            }
            new_items.push(key);
        }
        if new_items == self.items {
            return;
        }
        self.items = new_items;
        self.bump_revision();
    }
}
