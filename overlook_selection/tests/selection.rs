// Copyright 2025 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `overlook_selection` crate.
//!
//! These exercise the `Selection<T>` container together with the click
//! classification and marquee resolution entry points, with a focus on how
//! contents and the revision counter interact.

use kurbo::Point;
use overlook_selection::marquee::{MIN_BOX_PX, resolve_box};
use overlook_selection::{ClickSelection, Selection, classify_click};

#[test]
fn empty_selection_basics() {
    let sel = Selection::<u32>::new();
    assert!(sel.is_empty());
    assert_eq!(sel.len(), 0);
    assert!(sel.items().is_empty());
    assert_eq!(sel.revision(), 0);
}

#[test]
fn select_only_replaces_and_bumps_revision() {
    let mut sel = Selection::new();
    sel.select_only(1);
    assert_eq!(sel.items(), &[1]);
    assert_eq!(sel.revision(), 1);

    // Re-selecting the same singleton is a no-op.
    sel.select_only(1);
    assert_eq!(sel.revision(), 1);

    sel.select_only(2);
    assert_eq!(sel.items(), &[2]);
    assert_eq!(sel.revision(), 2);
}

#[test]
fn toggle_adds_then_removes() {
    let mut sel = Selection::new();
    sel.toggle(1);
    sel.toggle(2);
    assert_eq!(sel.items(), &[1, 2]);
    assert!(sel.contains(&1));

    sel.toggle(1);
    assert_eq!(sel.items(), &[2]);
    assert!(!sel.contains(&1));
    assert_eq!(sel.revision(), 3);
}

#[test]
fn clear_bumps_revision_only_on_change() {
    let mut sel = Selection::<u32>::new();
    sel.clear();
    assert_eq!(sel.revision(), 0);

    sel.select_only(7);
    sel.clear();
    assert!(sel.is_empty());
    assert_eq!(sel.revision(), 2);
}

#[test]
fn replace_with_dedups_and_detects_no_op() {
    let mut sel = Selection::new();
    sel.replace_with([1, 2, 2, 3]);
    assert_eq!(sel.items(), &[1, 2, 3]);
    assert_eq!(sel.revision(), 1);

    // Same contents in the same order: no semantic change.
    sel.replace_with([1, 2, 3]);
    assert_eq!(sel.revision(), 1);

    sel.replace_with([3, 1]);
    assert_eq!(sel.items(), &[3, 1]);
    assert_eq!(sel.revision(), 2);
}

#[cfg(feature = "hashbrown")]
#[test]
fn replace_with_hashed_matches_unhashed_semantics() {
    let mut a = Selection::new();
    let mut b = Selection::new();
    a.replace_with([5_u32, 1, 5, 2, 1, 9]);
    b.replace_with_hashed([5_u32, 1, 5, 2, 1, 9]);
    assert_eq!(a.items(), b.items());
}

#[cfg(feature = "hashbrown")]
#[test]
fn replace_with_hashed_collapses_repeated_keys() {
    let mut sel = Selection::new();
    sel.replace_with_hashed([7_u32, 7, 7, 7]);
    assert_eq!(sel.items(), &[7]);
    assert_eq!(sel.revision(), 1);

    sel.replace_with_hashed([1_u32, 2, 1, 2, 1, 2]);
    assert_eq!(sel.items(), &[1, 2]);
    assert_eq!(sel.revision(), 2);
}

#[test]
fn click_classification_table() {
    assert_eq!(classify_click(Some(4_u32), false), ClickSelection::Replace(4));
    assert_eq!(classify_click(Some(4_u32), true), ClickSelection::Toggle(4));
    assert_eq!(classify_click::<u32>(None, false), ClickSelection::Clear);
    assert_eq!(classify_click::<u32>(None, true), ClickSelection::NoOp);
}

#[test]
fn marquee_replaces_selection_with_projected_hits() {
    let mut sel = Selection::new();
    sel.select_only(99_u32);

    let world = [
        (1_u32, Point::new(20.0, 30.0)),
        (2, Point::new(80.0, 80.0)),
        (3, Point::new(200.0, 200.0)),
    ];
    let hits = resolve_box(
        Point::new(10.0, 10.0),
        Point::new(100.0, 100.0),
        world,
        Some,
    )
    .expect("box is well above the minimum size");
    sel.replace_with(hits);
    assert_eq!(sel.items(), &[1, 2]);
}

#[test]
fn degenerate_marquee_leaves_selection_alone() {
    let mut sel = Selection::new();
    sel.select_only(99_u32);
    let before = sel.revision();

    let world = [(1_u32, Point::new(1.0, 1.0))];
    let near = MIN_BOX_PX - 1.0;
    let resolved = resolve_box(Point::ZERO, Point::new(near, near), world, Some);
    assert_eq!(resolved, None);
    if let Some(hits) = resolved {
        sel.replace_with(hits);
    }
    assert_eq!(sel.items(), &[99]);
    assert_eq!(sel.revision(), before);
}
