// Copyright 2025 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overlook Controller: viewport input controllers for the battlefield views.
//!
//! This is the composition crate: it wires raw pointer and wheel events
//! through the gesture, camera, wheel, selection, area, and formation crates
//! and emits high-level scene commands. One [`ViewportController`] instance
//! drives one viewport; [`PlanController`] and [`OrbitController`] are the 2D
//! and 3D configurations.
//!
//! The host supplies two capabilities: a [`Scene`] for hit-testing and state
//! queries, and a [`Commands`] sink for the resolved actions. The controller
//! never touches the DOM, the renderer, or a wall clock; events arrive as
//! plain values with explicit millisecond timestamps, which keeps the whole
//! gesture pipeline deterministic under test.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use overlook_area::{AreaGeometry, AreaHandle, AreaTool};
//! use overlook_camera::plan::PlanCamera;
//! use overlook_controller::{Commands, EntityRef, PlanController, Scene};
//! use overlook_gesture::{Modifiers, PointerButton};
//!
//! // One agent standing at screen (100, 100).
//! struct World;
//! impl Scene<u32> for World {
//!     fn agent_at(&self, screen: Point) -> Option<u32> {
//!         ((screen - Point::new(100.0, 100.0)).hypot() < 10.0).then_some(1)
//!     }
//!     fn building_at(&self, _screen: Point) -> Option<u32> { None }
//!     fn handle_at(&self, _screen: Point) -> Option<(u32, AreaHandle)> { None }
//!     fn area_geometry(&self, _id: &u32) -> Option<AreaGeometry> { None }
//!     fn agent_positions(&self) -> Vec<(u32, Point)> {
//!         vec![(1, Point::new(100.0, 100.0))]
//!     }
//!     fn selected_agents(&self) -> Vec<u32> { Vec::new() }
//!     fn active_tool(&self) -> Option<AreaTool> { None }
//! }
//!
//! #[derive(Default)]
//! struct Log { selected: Vec<Option<u32>> }
//! impl Commands<u32> for Log {
//!     fn select_agent(&mut self, id: Option<u32>) { self.selected.push(id); }
//!     fn toggle_agent(&mut self, _id: u32) {}
//!     fn select_agents(&mut self, _ids: Vec<u32>) {}
//!     fn issue_move_orders(&mut self, _orders: Vec<(u32, Point)>) {}
//!     fn create_area(&mut self, _geometry: AreaGeometry) {}
//!     fn update_area(&mut self, _id: u32, _geometry: AreaGeometry) {}
//!     fn open_detail(&mut self, _entity: EntityRef<u32>) {}
//! }
//!
//! let mut controller = PlanController::new(PlanCamera::new(800.0, 600.0));
//! let scene = World;
//! let mut log = Log::default();
//!
//! // A click on the agent defers (it could become a double-click), then
//! // matures into a selection once the window elapses.
//! let at = Point::new(100.0, 100.0);
//! controller.on_pointer_down(at, PointerButton::Primary, Modifiers::empty(), 1_000, &scene);
//! controller.on_pointer_up(at, PointerButton::Primary, 1_050, &scene, &mut log);
//! assert!(log.selected.is_empty());
//!
//! controller.poll_timers(1_400, &mut log);
//! assert_eq!(log.selected, vec![Some(1)]);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod controller;
pub mod mode;
pub mod scene;

pub use controller::{
    ControllerDebugInfo, OrbitController, PlanController, ViewCamera, ViewportController,
    WheelSensitivity,
};
pub use mode::GestureMode;
pub use scene::{Commands, EntityRef, Scene};
