// Copyright 2025 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The viewport input controller: raw events in, scene commands out.
//!
//! One controller instance drives one viewport. It owns the camera, the
//! gesture mode, the per-pointer session, and the two double-click trackers,
//! and it is the only piece that talks to the host's [`Scene`] and
//! [`Commands`] capabilities.
//!
//! The 2D and 3D controllers are the same machine over different cameras;
//! [`ViewCamera`] carries the few view-specific hooks (drag classification
//! kind, orbiting). The behavioral asymmetries live in data, not in parallel
//! implementations: the plan view never classifies a right-drag as pan, and
//! only the orbit view accepts orbit gestures.

use kurbo::{Point, Rect, Vec2};
use overlook_area::{AreaGeometry, DrawSession, ResizeSession};
use overlook_camera::ViewTransform;
use overlook_camera::orbit::OrbitCamera;
use overlook_camera::plan::PlanCamera;
use overlook_gesture::click::{ClickOutcome, DoubleClickTracker};
use overlook_gesture::session::{DragKind, PointerSession, ViewKind, classify_drag};
use overlook_gesture::timer::{TimerHandle, TimerQueue};
use overlook_gesture::{GestureConfig, Modifiers, PointerButton};
use overlook_selection::marquee::resolve_box;
use overlook_selection::{ClickSelection, classify_click};
use overlook_wheel::{ScrollGesture, WheelDelta};

use crate::mode::GestureMode;
use crate::scene::{Commands, EntityRef, Scene};

/// Camera-side hooks the controller needs beyond [`ViewTransform`].
///
/// Implemented for the two Overlook cameras; hosts bringing their own camera
/// can implement it too.
pub trait ViewCamera: ViewTransform {
    /// Which view this camera renders; drag classification differs between
    /// the plan and orbit views.
    fn view_kind(&self) -> ViewKind;

    /// Updates the viewport size in CSS pixels.
    fn set_viewport(&mut self, width: f64, height: f64);

    /// Rotates around the view's orbit pivot. The plan view has none, so the
    /// default does nothing.
    fn orbit_by(&mut self, _d_yaw: f64, _d_pitch: f64) {}
}

impl ViewCamera for PlanCamera {
    fn view_kind(&self) -> ViewKind {
        ViewKind::Plan
    }

    fn set_viewport(&mut self, width: f64, height: f64) {
        Self::set_viewport(self, width, height);
    }
}

impl ViewCamera for OrbitCamera {
    fn view_kind(&self) -> ViewKind {
        ViewKind::Orbit
    }

    fn set_viewport(&mut self, width: f64, height: f64) {
        Self::set_viewport(self, width, height);
    }

    fn orbit_by(&mut self, d_yaw: f64, d_pitch: f64) {
        Self::orbit_by(self, d_yaw, d_pitch);
    }
}

/// User-configurable multipliers applied to raw wheel deltas.
#[derive(Clone, Copy, Debug)]
pub struct WheelSensitivity {
    /// Zoom change per unit of vertical delta.
    pub zoom: f64,
    /// Screen pixels of pan per unit of delta.
    pub pan: f64,
    /// Radians of orbit per unit of delta.
    pub orbit: f64,
}

impl Default for WheelSensitivity {
    fn default() -> Self {
        Self {
            zoom: 0.0025,
            pan: 1.0,
            orbit: 0.005,
        }
    }
}

/// Maps a vertical wheel delta to a multiplicative zoom factor.
///
/// Scrolling up (negative delta) zooms in. The mapping is reciprocal so that
/// equal and opposite deltas cancel exactly.
fn zoom_factor(dy: f64, sensitivity: f64) -> f64 {
    if dy < 0.0 {
        1.0 + (-dy) * sensitivity
    } else {
        1.0 / (1.0 + dy * sensitivity)
    }
}

/// A click waiting out the double-click window.
///
/// Equality (and thus double-click pairing) is by target id only; the shift
/// state rides along so the eventually fired single click applies the
/// modifier held when it happened.
#[derive(Clone, Debug)]
struct PendingClick<Id> {
    id: Id,
    shift: bool,
}

impl<Id: PartialEq> PartialEq for PendingClick<Id> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

/// One entity kind's double-click tracker plus its armed timer.
#[derive(Clone, Debug)]
struct DeferredClicks<Id> {
    tracker: DoubleClickTracker<PendingClick<Id>>,
    timer: Option<TimerHandle>,
}

impl<Id: Clone + PartialEq> DeferredClicks<Id> {
    fn new(window_ms: u64) -> Self {
        Self {
            tracker: DoubleClickTracker::new(window_ms),
            timer: None,
        }
    }

    fn rearm(&mut self, timers: &mut TimerQueue, deadline: u64) {
        if let Some(handle) = self.timer.take() {
            timers.cancel(handle);
        }
        self.timer = Some(timers.schedule(deadline));
    }

    fn disarm(&mut self, timers: &mut TimerQueue) {
        if let Some(handle) = self.timer.take() {
            timers.cancel(handle);
        }
    }

    fn cancel(&mut self, timers: &mut TimerQueue) {
        self.tracker.cancel();
        self.disarm(timers);
    }
}

/// Input controller for one viewport.
///
/// Use the [`PlanController`] and [`OrbitController`] aliases; the generic
/// form exists so the two views share one implementation.
#[derive(Clone, Debug)]
pub struct ViewportController<C, Id> {
    camera: C,
    config: GestureConfig,
    sensitivity: WheelSensitivity,
    mode: GestureMode<Id>,
    session: Option<PointerSession>,
    session_over_entity: bool,
    agent_clicks: DeferredClicks<Id>,
    building_clicks: DeferredClicks<Id>,
    timers: TimerQueue,
    disposed: bool,
}

/// Input controller for the 2D plan view.
pub type PlanController<Id> = ViewportController<PlanCamera, Id>;

/// Input controller for the 3D orbit view.
pub type OrbitController<Id> = ViewportController<OrbitCamera, Id>;

impl<C, Id> ViewportController<C, Id>
where
    C: ViewCamera,
    Id: Clone + PartialEq,
{
    /// Creates a controller around a camera with default gesture config.
    #[must_use]
    pub fn new(camera: C) -> Self {
        Self::with_config(camera, GestureConfig::default())
    }

    /// Creates a controller with explicit gesture timing configuration.
    #[must_use]
    pub fn with_config(camera: C, config: GestureConfig) -> Self {
        Self {
            camera,
            config,
            sensitivity: WheelSensitivity::default(),
            mode: GestureMode::Idle,
            session: None,
            session_over_entity: false,
            agent_clicks: DeferredClicks::new(config.double_click_ms),
            building_clicks: DeferredClicks::new(config.double_click_ms),
            timers: TimerQueue::new(),
            disposed: false,
        }
    }

    /// The camera this controller drives.
    #[must_use]
    pub fn camera(&self) -> &C {
        &self.camera
    }

    /// Mutable access to the camera, for host-driven focus or fit calls.
    pub fn camera_mut(&mut self) -> &mut C {
        &mut self.camera
    }

    /// The gesture currently in flight.
    #[must_use]
    pub fn mode(&self) -> &GestureMode<Id> {
        &self.mode
    }

    /// The gesture timing configuration.
    #[must_use]
    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// The wheel sensitivity multipliers.
    #[must_use]
    pub fn sensitivity(&self) -> WheelSensitivity {
        self.sensitivity
    }

    /// Replaces the wheel sensitivity multipliers.
    pub fn set_sensitivity(&mut self, sensitivity: WheelSensitivity) {
        self.sensitivity = sensitivity;
    }

    /// Forwards a viewport size change to the camera.
    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.camera.set_viewport(width, height);
    }

    /// Handles a pointer-down event.
    ///
    /// Hit priority is fixed: resize handle, then entity, then ground.
    /// Handles and an armed draw tool enter their modes immediately; every
    /// other press stays undecided until movement or release disambiguates
    /// it. A second down while a session is active is ignored.
    pub fn on_pointer_down<S>(
        &mut self,
        screen: Point,
        button: PointerButton,
        modifiers: Modifiers,
        now: u64,
        scene: &S,
    ) where
        S: Scene<Id>,
    {
        if self.disposed || self.session.is_some() {
            return;
        }
        self.session = Some(PointerSession::begin(button, modifiers, screen, now));
        self.session_over_entity =
            scene.agent_at(screen).is_some() || scene.building_at(screen).is_some();

        if button != PointerButton::Primary {
            return;
        }
        if let Some((id, handle)) = scene.handle_at(screen)
            && let Some(geometry) = scene.area_geometry(&id)
            && let Some(grab) = self.camera.screen_to_world(screen)
        {
            self.mode
                .begin_resizing(id, ResizeSession::start(geometry, handle, grab));
            return;
        }
        if let Some(tool) = scene.active_tool()
            && let Some(anchor) = self.camera.screen_to_world(screen)
        {
            self.mode.begin_drawing(DrawSession::start(tool, anchor));
        }
    }

    /// Handles a pointer-move event.
    ///
    /// Moves without an active session (hover) are ignored. Modifier state is
    /// not consulted here: the modifiers captured at down time govern the
    /// whole gesture.
    pub fn on_pointer_move(&mut self, screen: Point) {
        if self.disposed {
            return;
        }
        let Some(live) = self.session.as_mut() else {
            return;
        };
        live.track(screen);
        let session = *live;

        match &mut self.mode {
            GestureMode::Panning { last_screen } => {
                let delta = screen - *last_screen;
                *last_screen = screen;
                self.camera.pan_by(delta);
            }
            GestureMode::BoxSelecting { current, .. } => *current = screen,
            // Draw/resize previews are derived on demand; nothing to store.
            GestureMode::Drawing(_) | GestureMode::Resizing { .. } | GestureMode::Idle => {}
        }

        if self.mode.is_idle() && session.dragged(self.config.drag_threshold_px) {
            match classify_drag(
                session.button(),
                session.modifiers(),
                self.session_over_entity,
                self.camera.view_kind(),
            ) {
                Some(DragKind::BoxSelect) => {
                    self.mode.begin_box_select(session.down_screen(), screen);
                }
                Some(DragKind::Pan) => {
                    self.mode.begin_panning(screen);
                }
                None => {}
            }
        }
    }

    /// Handles a pointer-up event, emitting the gesture's single terminal
    /// action.
    ///
    /// An up for a button other than the session's is ignored.
    pub fn on_pointer_up<S, Cm>(
        &mut self,
        screen: Point,
        button: PointerButton,
        now: u64,
        scene: &S,
        commands: &mut Cm,
    ) where
        S: Scene<Id>,
        Cm: Commands<Id>,
    {
        if self.disposed {
            return;
        }
        let Some(live) = self.session.as_mut() else {
            return;
        };
        if live.button() != button {
            return;
        }
        live.track(screen);
        let session = *live;
        self.session = None;

        match self.mode.finish() {
            GestureMode::BoxSelecting { start, .. } => {
                let resolved = resolve_box(start, screen, scene.agent_positions(), |world| {
                    self.camera.world_to_screen(world)
                });
                if let Some(ids) = resolved {
                    commands.select_agents(ids);
                }
            }
            GestureMode::Drawing(draw) => {
                if let Some(world) = self.camera.screen_to_world(screen)
                    && let Some(geometry) = draw.finish(world)
                {
                    commands.create_area(geometry);
                }
            }
            GestureMode::Resizing { id, session: resize } => {
                // A press-and-release that never crossed the drag threshold
                // would re-emit the original geometry; skip it.
                if session.dragged(self.config.drag_threshold_px)
                    && let Some(world) = self.camera.screen_to_world(screen)
                {
                    commands.update_area(id, resize.apply(world));
                }
            }
            GestureMode::Panning { .. } => {}
            GestureMode::Idle => self.resolve_press(&session, screen, now, scene, commands),
        }
    }

    /// Handles a wheel or trackpad scroll event.
    pub fn on_wheel(&mut self, screen: Point, delta: WheelDelta, modifiers: Modifiers) {
        if self.disposed {
            return;
        }
        let orbit_enabled = self.camera.view_kind() == ViewKind::Orbit;
        match overlook_wheel::classify(delta, modifiers, orbit_enabled) {
            Some(ScrollGesture::PinchZoom { dy } | ScrollGesture::WheelZoom { dy }) => {
                self.camera
                    .zoom_at_point(screen, zoom_factor(dy, self.sensitivity.zoom));
            }
            Some(ScrollGesture::Pan { dx, dy }) => {
                self.camera
                    .pan_by(Vec2::new(-dx, -dy) * self.sensitivity.pan);
            }
            Some(ScrollGesture::Orbit { dx, dy }) => {
                self.camera
                    .orbit_by(dx * self.sensitivity.orbit, -dy * self.sensitivity.orbit);
            }
            None => {}
        }
    }

    /// Fires any deferred single clicks whose double-click window has
    /// elapsed.
    ///
    /// Hosts arm one real timeout for [`ViewportController::next_deadline`]
    /// and call this when it fires; calling more often is harmless.
    pub fn poll_timers<Cm>(&mut self, now: u64, commands: &mut Cm)
    where
        Cm: Commands<Id>,
    {
        if self.disposed {
            return;
        }
        for handle in self.timers.expire(now) {
            if self.agent_clicks.timer == Some(handle) {
                self.agent_clicks.timer = None;
                if let Some(click) = self.agent_clicks.tracker.poll(now) {
                    fire_agent_single(click, commands);
                }
            } else if self.building_clicks.timer == Some(handle) {
                self.building_clicks.timer = None;
                // Building single clicks carry no command; maturing the
                // tracker just re-opens it for a fresh pair.
                let _ = self.building_clicks.tracker.poll(now);
            }
        }
    }

    /// The earliest instant at which [`ViewportController::poll_timers`] has
    /// work to do.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.timers.next_deadline()
    }

    /// Tears the controller down.
    ///
    /// Idempotent. Pending clicks and in-flight gestures are dropped without
    /// emitting commands; a torn-down view must not receive late callbacks.
    pub fn dispose(&mut self) {
        self.disposed = true;
        self.session = None;
        self.mode = GestureMode::Idle;
        self.agent_clicks.cancel(&mut self.timers);
        self.building_clicks.cancel(&mut self.timers);
        self.timers.clear();
    }

    /// Whether [`ViewportController::dispose`] has been called.
    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// The current rubber-band rectangle in screen space, if one is being
    /// dragged. For the renderer.
    #[must_use]
    pub fn selection_box(&self) -> Option<Rect> {
        match &self.mode {
            GestureMode::BoxSelecting { start, current } => {
                Some(Rect::from_points(*start, *current))
            }
            _ => None,
        }
    }

    /// The in-progress drawing geometry at the current pointer position, if
    /// any. For the renderer.
    #[must_use]
    pub fn draw_preview(&self) -> Option<AreaGeometry> {
        let GestureMode::Drawing(draw) = &self.mode else {
            return None;
        };
        let world = self.camera.screen_to_world(self.session?.last_screen())?;
        Some(draw.preview(world))
    }

    /// The in-progress resize geometry at the current pointer position, if
    /// any. For the renderer.
    #[must_use]
    pub fn resize_preview(&self) -> Option<(&Id, AreaGeometry)> {
        let GestureMode::Resizing { id, session: resize } = &self.mode else {
            return None;
        };
        let world = self.camera.screen_to_world(self.session?.last_screen())?;
        Some((id, resize.apply(world)))
    }

    /// Snapshot of the controller state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ControllerDebugInfo {
        ControllerDebugInfo {
            mode: match &self.mode {
                GestureMode::Idle => "idle",
                GestureMode::Panning { .. } => "panning",
                GestureMode::BoxSelecting { .. } => "box-selecting",
                GestureMode::Drawing(_) => "drawing",
                GestureMode::Resizing { .. } => "resizing",
            },
            has_session: self.session.is_some(),
            pending_agent_click: self.agent_clicks.tracker.has_pending(),
            pending_building_click: self.building_clicks.tracker.has_pending(),
            armed_timers: self.timers.len(),
            next_deadline: self.timers.next_deadline(),
            disposed: self.disposed,
        }
    }

    /// Resolves a press that never entered a drag mode.
    fn resolve_press<S, Cm>(
        &mut self,
        session: &PointerSession,
        screen: Point,
        now: u64,
        scene: &S,
        commands: &mut Cm,
    ) where
        S: Scene<Id>,
        Cm: Commands<Id>,
    {
        // Dragged but unclaimed (over an entity, or a plain right-drag left
        // to the renderer's controls): neither click nor move order.
        if !session.is_click(self.config.drag_threshold_px) {
            return;
        }
        let shift = session.modifiers().contains(Modifiers::SHIFT);
        match session.button() {
            PointerButton::Primary => {
                if let Some(id) = scene.agent_at(screen) {
                    self.absorb_agent_click(PendingClick { id, shift }, now, commands);
                } else if let Some(id) = scene.building_at(screen) {
                    self.absorb_building_click(PendingClick { id, shift }, now, commands);
                } else {
                    self.ground_click(shift, commands);
                }
            }
            PointerButton::Secondary => self.issue_move_order(screen, scene, commands),
            PointerButton::Middle => {}
        }
    }

    fn absorb_agent_click<Cm>(&mut self, click: PendingClick<Id>, now: u64, commands: &mut Cm)
    where
        Cm: Commands<Id>,
    {
        match self.agent_clicks.tracker.on_click(click, now) {
            ClickOutcome::Deferred { deadline } => {
                self.agent_clicks.rearm(&mut self.timers, deadline);
            }
            ClickOutcome::DoubleClick(click) => {
                self.agent_clicks.disarm(&mut self.timers);
                commands.open_detail(EntityRef::Agent(click.id));
            }
            ClickOutcome::SingleThenDeferred { resolved, deadline } => {
                self.agent_clicks.rearm(&mut self.timers, deadline);
                fire_agent_single(resolved, commands);
            }
        }
    }

    fn absorb_building_click<Cm>(&mut self, click: PendingClick<Id>, now: u64, commands: &mut Cm)
    where
        Cm: Commands<Id>,
    {
        // A building's single click has no command today; the tracker still
        // runs so that a double-click suppresses it and opens the detail.
        match self.building_clicks.tracker.on_click(click, now) {
            ClickOutcome::Deferred { deadline }
            | ClickOutcome::SingleThenDeferred { deadline, .. } => {
                self.building_clicks.rearm(&mut self.timers, deadline);
            }
            ClickOutcome::DoubleClick(click) => {
                self.building_clicks.disarm(&mut self.timers);
                commands.open_detail(EntityRef::Building(click.id));
            }
        }
    }

    fn ground_click<Cm>(&mut self, shift: bool, commands: &mut Cm)
    where
        Cm: Commands<Id>,
    {
        // Ground clicks never pair: flush both trackers first so a pending
        // entity click resolves as the single click it was.
        if let Some(click) = self.agent_clicks.tracker.on_ground_click() {
            fire_agent_single(click, commands);
        }
        self.agent_clicks.disarm(&mut self.timers);
        let _ = self.building_clicks.tracker.on_ground_click();
        self.building_clicks.disarm(&mut self.timers);

        if let ClickSelection::Clear = classify_click::<Id>(None, shift) {
            commands.select_agent(None);
        }
    }

    fn issue_move_order<S, Cm>(&mut self, screen: Point, scene: &S, commands: &mut Cm)
    where
        S: Scene<Id>,
        Cm: Commands<Id>,
    {
        let Some(target) = self.camera.screen_to_world(screen) else {
            return;
        };
        let agents = scene.selected_agents();
        if agents.is_empty() {
            return;
        }
        let points =
            overlook_formation::plan(target, agents.len(), overlook_formation::DEFAULT_SPACING);
        commands.issue_move_orders(agents.into_iter().zip(points).collect());
    }
}

impl<Id> ViewportController<OrbitCamera, Id>
where
    Id: Clone + PartialEq,
{
    /// Replaces the camera after the rendering surface was rebuilt (hot
    /// reload), preserving all gesture state.
    pub fn reattach(&mut self, camera: OrbitCamera) {
        self.camera = camera;
    }
}

/// Applies a matured or flushed agent single click to the selection.
fn fire_agent_single<Id, Cm>(click: PendingClick<Id>, commands: &mut Cm)
where
    Id: Clone + PartialEq,
    Cm: Commands<Id>,
{
    match classify_click(Some(click.id), click.shift) {
        ClickSelection::Replace(id) => commands.select_agent(Some(id)),
        ClickSelection::Toggle(id) => commands.toggle_agent(id),
        ClickSelection::Clear | ClickSelection::NoOp => {}
    }
}

/// Debug snapshot of a [`ViewportController`] state.
#[derive(Clone, Copy, Debug)]
pub struct ControllerDebugInfo {
    /// Name of the active gesture mode.
    pub mode: &'static str,
    /// Whether a pointer session is active.
    pub has_session: bool,
    /// Whether an agent single click is deferred.
    pub pending_agent_click: bool,
    /// Whether a building single click is deferred.
    pub pending_building_click: bool,
    /// Number of armed deadlines.
    pub armed_timers: usize,
    /// The earliest armed deadline, milliseconds.
    pub next_deadline: Option<u64>,
    /// Whether the controller has been disposed.
    pub disposed: bool,
}
