// Copyright 2025 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Capability traits: everything a controller consumes from its host.
//!
//! The controller never touches the renderer or the application store
//! directly. [`Scene`] answers hit-testing and state queries; [`Commands`]
//! receives the high-level actions a gesture resolves to. A host wires both
//! to whatever rendering and state machinery it actually has.
//!
//! Ids are opaque to the engine and may be stale by the time a command
//! arrives (a deferred single click can outlive the entity it targets).
//! Every [`Commands`] method must tolerate an id that no longer exists;
//! that is the host's contract, and it is why the methods take ids rather
//! than references into the scene.

use alloc::vec::Vec;

use kurbo::Point;
use overlook_area::{AreaGeometry, AreaHandle, AreaTool};

/// A reference to a hit-testable entity, preserving its kind.
///
/// Agents and buildings never pair in double-click detection, so the kind
/// travels with the id everywhere clicks are resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntityRef<Id> {
    /// A movable agent.
    Agent(Id),
    /// A static building.
    Building(Id),
}

/// Hit-testing and state queries the controller makes against the host.
///
/// Screen positions are CSS pixels relative to the viewport. The query
/// methods are called from inside event handlers, so they should be cheap;
/// `agent_positions` is only called when a box selection actually finishes.
pub trait Scene<Id> {
    /// The agent under a screen position, if any.
    fn agent_at(&self, screen: Point) -> Option<Id>;

    /// The building under a screen position, if any.
    fn building_at(&self, screen: Point) -> Option<Id>;

    /// The area resize handle under a screen position, if any.
    ///
    /// Handles are rendered on top of entities, so a hit here takes priority
    /// over [`Scene::agent_at`] and [`Scene::building_at`].
    fn handle_at(&self, screen: Point) -> Option<(Id, AreaHandle)>;

    /// Current geometry of an area, for starting a resize.
    fn area_geometry(&self, id: &Id) -> Option<AreaGeometry>;

    /// Every agent's ground-plane world position, for box-selection
    /// resolution.
    fn agent_positions(&self) -> Vec<(Id, Point)>;

    /// The currently selected agents, in the host's stable order; move
    /// orders are index-aligned with this list.
    fn selected_agents(&self) -> Vec<Id>;

    /// The active area-drawing tool, if the user has one armed.
    ///
    /// `Some` switches pointer-down behavior from selection to drawing.
    fn active_tool(&self) -> Option<AreaTool>;
}

/// High-level actions a resolved gesture emits.
///
/// All methods must tolerate stale ids (see the module docs).
pub trait Commands<Id> {
    /// Replaces the selection with one agent, or clears it with `None`.
    fn select_agent(&mut self, id: Option<Id>);

    /// Toggles an agent's membership in the selection (shift-click).
    fn toggle_agent(&mut self, id: Id);

    /// Replaces the selection with a box-selection result. An empty list
    /// clears the selection.
    fn select_agents(&mut self, ids: Vec<Id>);

    /// Orders each agent to its own destination point.
    ///
    /// The controller has already run formation planning; the pairs are
    /// final per-agent destinations.
    fn issue_move_orders(&mut self, orders: Vec<(Id, Point)>);

    /// Creates a new area from a finished drawing.
    fn create_area(&mut self, geometry: AreaGeometry);

    /// Replaces an existing area's geometry after a resize.
    fn update_area(&mut self, id: Id, geometry: AreaGeometry);

    /// Opens the detail view for a double-clicked entity.
    fn open_detail(&mut self, entity: EntityRef<Id>);
}
