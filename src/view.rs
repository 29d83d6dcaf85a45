//! View state machine: overview ↔ focused-on-body.
//!
//! Transitions are requested through events (from pointer picks, keys,
//! or UI buttons), applied here, and announced back through
//! [`ViewChanged`] so UI collaborators can update panels and toasts.
//! This module owns no UI text.

use bevy::prelude::*;

use crate::camera::{CameraPose, SceneCamera, DEFAULT_ANIM_SECS};
use crate::catalog::Catalog;
use crate::rng::{hash32, Mulberry32};
use crate::types::{PinAnchor, PinPlacement, SimClock};

/// Zoom of the first focus stage (pan toward the body's heliocentric
/// position).
pub const FOCUS_STAGE1_ZOOM: f32 = 2.7;

/// Duration of the first focus stage, seconds.
pub const FOCUS_STAGE1_SECS: f64 = 0.7;

/// Delay before the second stage recenters on the focused frame.
pub const FOCUS_SETTLE_SECS: f64 = 0.72;

/// Zoom of the settled focused frame.
pub const FOCUS_ZOOM: f32 = 3.6;

/// Base pin distance from its anchor, screen pixels.
const PIN_BASE_DIST: f32 = 18.0;

/// Jitter range added to moon-anchored pin distances.
const PIN_MOON_JITTER: f32 = 16.0;

/// Jitter range added to body-anchored pin distances.
const PIN_BODY_JITTER: f32 = 20.0;

/// Which of the two views is active.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    Overview,
    Focused,
}

/// A mission relevant to the current focus, with its derived pin.
#[derive(Clone, Debug)]
pub struct FocusMission {
    /// Index into the catalog mission table.
    pub mission: usize,
    pub pin: PinPlacement,
}

/// Resource holding the current view mode and focus.
///
/// `focus` is `Some` iff `mode` is `Focused`; `missions` is empty in the
/// overview. Pin placements are computed once per focus transition and
/// stay fixed while that focus lasts.
#[derive(Resource, Clone, Debug, Default)]
pub struct ViewState {
    pub mode: ViewMode,
    /// Catalog index of the focused body.
    pub focus: Option<usize>,
    pub missions: Vec<FocusMission>,
}

impl ViewState {
    pub fn is_focused(&self) -> bool {
        self.mode == ViewMode::Focused
    }
}

/// Modal mission detail card state. The interaction controller suppresses
/// scene clicks while a card is open.
#[derive(Resource, Clone, Debug, Default)]
pub struct CardState {
    /// Catalog index of the mission being shown.
    pub open: Option<usize>,
}

/// Request to focus a body (catalog index). Unknown indices no-op.
#[derive(Message, Clone, Copy, Debug)]
pub struct FocusRequest {
    pub body: usize,
}

/// Request to return from the focused view to the overview.
#[derive(Message, Clone, Copy, Debug)]
pub struct BackRequest;

/// Request to force the overview with the default camera pose,
/// regardless of current state.
#[derive(Message, Clone, Copy, Debug)]
pub struct ResetRequest;

/// What caused a view transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitionCause {
    Focus,
    Back,
    Reset,
}

/// Snapshot emitted to UI collaborators on every transition.
#[derive(Message, Clone, Debug)]
pub struct ViewChanged {
    pub cause: TransitionCause,
    pub mode: ViewMode,
    /// Catalog index of the focused body, if any.
    pub focus: Option<usize>,
    /// Catalog indices of the missions now in view.
    pub missions: Vec<usize>,
    pub t_days: f64,
    pub paused: bool,
    pub time_scale: f64,
}

/// The delayed second-stage camera retarget, carrying the focus it was
/// scheduled for. If the view has moved on by the time it fires, it is
/// dropped without touching the camera.
#[derive(Resource, Clone, Copy, Debug, Default)]
pub struct PendingRetarget(pub Option<RetargetTask>);

#[derive(Clone, Copy, Debug)]
pub struct RetargetTask {
    /// Real-time instant (seconds) at which to fire.
    pub fire_at: f64,
    /// Body index the view is expected to still be focused on.
    pub expect_focus: usize,
}

/// Derive pin placements for every mission of the given body.
///
/// Each pin is seeded from `(mission id, body id)`, so placement is
/// stable across repeated focussings of the same body and independent
/// across missions. A mission targeting one of the body's moons anchors
/// to that moon; anything else anchors to the body.
pub fn compute_pins(catalog: &Catalog, body_index: usize) -> Vec<FocusMission> {
    let Some(body) = catalog.bodies.get(body_index) else {
        return Vec::new();
    };
    catalog
        .missions_for(body.id)
        .into_iter()
        .map(|mission| {
            let m = &catalog.missions[mission];
            let mut rng = Mulberry32::new(hash32(&format!("{}|{}", m.id, body.id)));
            let target_moon = m.target.and_then(|t| body.moon(t));
            let pin = match target_moon {
                Some(moon) => PinPlacement {
                    anchor: PinAnchor::Moon(moon.name),
                    angle: rng.next_f32() * std::f32::consts::TAU,
                    dist: PIN_BASE_DIST + rng.next_f32() * PIN_MOON_JITTER,
                },
                None => PinPlacement {
                    anchor: PinAnchor::Body,
                    angle: rng.next_f32() * std::f32::consts::TAU,
                    dist: PIN_BASE_DIST + rng.next_f32() * PIN_BODY_JITTER,
                },
            };
            FocusMission { mission, pin }
        })
        .collect()
}

fn emit(
    events: &mut MessageWriter<ViewChanged>,
    cause: TransitionCause,
    view: &ViewState,
    clock: &SimClock,
) {
    events.write(ViewChanged {
        cause,
        mode: view.mode,
        focus: view.focus,
        missions: view.missions.iter().map(|f| f.mission).collect(),
        t_days: clock.t_days,
        paused: clock.paused,
        time_scale: clock.time_scale,
    });
}

/// Apply focus requests: only valid from the overview, and only for a
/// known body. Starts the two-stage camera move.
pub fn handle_focus_requests(
    mut requests: MessageReader<FocusRequest>,
    mut view: ResMut<ViewState>,
    mut camera: ResMut<SceneCamera>,
    mut pending: ResMut<PendingRetarget>,
    mut changed: MessageWriter<ViewChanged>,
    catalog: Res<Catalog>,
    clock: Res<SimClock>,
    time: Res<Time<Real>>,
) {
    for request in requests.read() {
        if view.mode != ViewMode::Overview {
            continue;
        }
        let Some(body) = catalog.bodies.get(request.body) else {
            warn!("focus request for unknown body index {}", request.body);
            continue;
        };

        view.mode = ViewMode::Focused;
        view.focus = Some(request.body);
        view.missions = compute_pins(&catalog, request.body);

        let now = time.elapsed_secs_f64();
        let (pos, _) = crate::orbit::body_position(body, clock.t_days);
        camera.set_target(pos, FOCUS_STAGE1_ZOOM, FOCUS_STAGE1_SECS, now);
        pending.0 = Some(RetargetTask {
            fire_at: now + FOCUS_SETTLE_SECS,
            expect_focus: request.body,
        });

        info!("Focused {} ({} missions)", body.id, view.missions.len());
        emit(&mut changed, TransitionCause::Focus, &view, &clock);
    }
}

/// Fire the delayed second focus stage once its settle time passes,
/// unless the view has moved on since it was scheduled.
pub fn fire_pending_retarget(
    mut pending: ResMut<PendingRetarget>,
    view: Res<ViewState>,
    mut camera: ResMut<SceneCamera>,
    time: Res<Time<Real>>,
) {
    let Some(task) = pending.0 else {
        return;
    };
    let now = time.elapsed_secs_f64();
    if now < task.fire_at {
        return;
    }
    pending.0 = None;
    if view.mode != ViewMode::Focused || view.focus != Some(task.expect_focus) {
        return;
    }
    camera.set_target(Vec2::ZERO, FOCUS_ZOOM, DEFAULT_ANIM_SECS, now);
}

/// Return to the overview from the focused view.
pub fn handle_back_requests(
    mut requests: MessageReader<BackRequest>,
    mut view: ResMut<ViewState>,
    mut camera: ResMut<SceneCamera>,
    mut card: ResMut<CardState>,
    mut changed: MessageWriter<ViewChanged>,
    clock: Res<SimClock>,
    time: Res<Time<Real>>,
) {
    let mut back = false;
    for _ in requests.read() {
        back = true;
    }
    if !back || view.mode != ViewMode::Focused {
        return;
    }

    view.mode = ViewMode::Overview;
    view.focus = None;
    view.missions.clear();
    card.open = None;
    camera.set_target(
        CameraPose::DEFAULT.center,
        CameraPose::DEFAULT.zoom,
        DEFAULT_ANIM_SECS,
        time.elapsed_secs_f64(),
    );
    emit(&mut changed, TransitionCause::Back, &view, &clock);
}

/// Force the overview with the default camera pose from any state.
/// Idempotent; the clock is left untouched.
pub fn handle_reset_requests(
    mut requests: MessageReader<ResetRequest>,
    mut view: ResMut<ViewState>,
    mut camera: ResMut<SceneCamera>,
    mut card: ResMut<CardState>,
    mut changed: MessageWriter<ViewChanged>,
    clock: Res<SimClock>,
    time: Res<Time<Real>>,
) {
    let mut reset = false;
    for _ in requests.read() {
        reset = true;
    }
    if !reset {
        return;
    }

    view.mode = ViewMode::Overview;
    view.focus = None;
    view.missions.clear();
    card.open = None;
    camera.set_target(
        CameraPose::DEFAULT.center,
        CameraPose::DEFAULT.zoom,
        DEFAULT_ANIM_SECS,
        time.elapsed_secs_f64(),
    );
    emit(&mut changed, TransitionCause::Reset, &view, &clock);
}

/// Plugin wiring the view state machine.
pub struct ViewPlugin;

impl Plugin for ViewPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ViewState>()
            .init_resource::<CardState>()
            .init_resource::<PendingRetarget>()
            .add_message::<FocusRequest>()
            .add_message::<BackRequest>()
            .add_message::<ResetRequest>()
            .add_message::<ViewChanged>()
            .add_systems(
                Update,
                (
                    handle_focus_requests,
                    handle_back_requests,
                    handle_reset_requests,
                    fire_pending_retarget,
                )
                    .chain(),
            );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_pins_match_mission_subset() {
        let catalog = Catalog::default();
        let earth = catalog.body_index("Earth").unwrap();
        let pins = compute_pins(&catalog, earth);
        assert_eq!(pins.len(), catalog.missions_for("Earth").len());
    }

    #[test]
    fn test_pin_anchor_selection() {
        let catalog = Catalog::default();
        let earth = catalog.body_index("Earth").unwrap();
        for fm in compute_pins(&catalog, earth) {
            // Both demo Earth missions target the Moon.
            assert_eq!(fm.pin.anchor, PinAnchor::Moon("Moon"));
        }

        let deep = catalog.body_index("Interstellar Space").unwrap();
        for fm in compute_pins(&catalog, deep) {
            assert_eq!(fm.pin.anchor, PinAnchor::Body);
        }
    }

    #[test]
    fn test_pins_stable_across_recomputation() {
        let catalog = Catalog::default();
        let earth = catalog.body_index("Earth").unwrap();
        let a = compute_pins(&catalog, earth);
        let b = compute_pins(&catalog, earth);
        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.pin.angle, y.pin.angle);
            assert_eq!(x.pin.dist, y.pin.dist);
        }
    }

    #[test]
    fn test_pins_differ_across_missions() {
        let catalog = Catalog::default();
        let earth = catalog.body_index("Earth").unwrap();
        let pins = compute_pins(&catalog, earth);
        assert!(pins.len() >= 2);
        assert_ne!(pins[0].pin.angle, pins[1].pin.angle);
    }

    #[test]
    fn test_pin_distance_ranges() {
        let catalog = Catalog::default();
        for body_index in 0..catalog.bodies.len() {
            for fm in compute_pins(&catalog, body_index) {
                let max = match fm.pin.anchor {
                    PinAnchor::Moon(_) => PIN_BASE_DIST + PIN_MOON_JITTER,
                    PinAnchor::Body => PIN_BASE_DIST + PIN_BODY_JITTER,
                };
                assert!(fm.pin.dist >= PIN_BASE_DIST && fm.pin.dist < max);
            }
        }
    }

    #[test]
    fn test_unknown_body_yields_no_pins() {
        let catalog = Catalog::default();
        assert!(compute_pins(&catalog, usize::MAX).is_empty());
    }
}
