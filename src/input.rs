//! Input handling: keyboard shortcuts, pointer drag/click, wheel zoom.
//!
//! Raw pointer and key events are translated here into camera moves and
//! view-state requests; every effect goes through the same camera and
//! view operations the UI buttons use, so each has one source of truth.
//! A press that moves past the drag threshold pans the camera and
//! suppresses the click that would otherwise fire on release.

use bevy::input::mouse::{AccumulatedMouseScroll, MouseScrollUnit};
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use bevy_egui::EguiContexts;

use crate::camera::{
    SceneCamera, KEY_ZOOM_STEP, WHEEL_ZOOM_RATE_LINE, WHEEL_ZOOM_RATE_PIXEL,
};
use crate::picking::{HitKind, HitRegistry};
use crate::types::{SimClock, TIME_SCALE_PRESETS};
use crate::ui::toast::Toasts;
use crate::view::{BackRequest, CardState, FocusRequest, ResetRequest, ViewState};

/// Squared screen-space distance a press must travel to become a drag.
const DRAG_THRESHOLD_SQ: f32 = 16.0;

/// Duration of the keyboard recenter transition, seconds.
const RECENTER_SECS: f64 = 0.25;

/// Resource tracking the current pointer gesture.
#[derive(Resource, Default)]
pub struct PointerState {
    /// Left button is down.
    pub down: bool,
    /// The gesture crossed the drag threshold; kept set through the
    /// release so the trailing click is suppressed.
    pub dragging: bool,
    /// Screen position of the press.
    pub press: Vec2,
    /// Camera center when the press started.
    pub cam_start: Vec2,
}

/// Plugin translating raw input into camera and view operations.
pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PointerState>()
            .add_systems(
                Update,
                (keyboard_shortcuts, pointer_pan, wheel_zoom)
                    .before(crate::picking::begin_frame),
            )
            // Click resolution reads the registry the draw systems just
            // rebuilt, so it runs after the hover pick.
            .add_systems(Update, resolve_clicks.after(crate::picking::detect_hover));
    }
}

/// Handle keyboard shortcuts for view and clock control.
fn keyboard_shortcuts(
    keys: Res<ButtonInput<KeyCode>>,
    mut clock: ResMut<SimClock>,
    mut camera: ResMut<SceneCamera>,
    mut card: ResMut<CardState>,
    view: Res<ViewState>,
    mut back_events: MessageWriter<BackRequest>,
    mut reset_events: MessageWriter<ResetRequest>,
    mut toasts: ResMut<Toasts>,
    time: Res<Time<Real>>,
) {
    // Space: toggle pause
    if keys.just_pressed(KeyCode::Space) {
        clock.paused = !clock.paused;
        toasts.show(if clock.paused { "Paused" } else { "Resumed" });
        info!("Simulation {}", if clock.paused { "paused" } else { "running" });
    }

    // R: reset view
    if keys.just_pressed(KeyCode::KeyR) {
        reset_events.write(ResetRequest);
    }

    // Escape prefers closing the mission card; otherwise acts as back.
    if keys.just_pressed(KeyCode::Escape) {
        if card.open.is_some() {
            card.open = None;
        } else if view.is_focused() {
            back_events.write(BackRequest);
        }
    }

    // B: back to the overview
    if keys.just_pressed(KeyCode::KeyB) && view.is_focused() {
        back_events.write(BackRequest);
    }

    // 0: quick recenter
    if keys.just_pressed(KeyCode::Digit0) {
        camera.set_target(Vec2::ZERO, 1.0, RECENTER_SECS, time.elapsed_secs_f64());
    }

    // Plus/Minus: discrete zoom steps about the viewport center
    if keys.just_pressed(KeyCode::Equal) || keys.just_pressed(KeyCode::NumpadAdd) {
        camera.cancel_animation();
        camera.zoom_step(KEY_ZOOM_STEP);
    }
    if keys.just_pressed(KeyCode::Minus) || keys.just_pressed(KeyCode::NumpadSubtract) {
        camera.cancel_animation();
        camera.zoom_step(1.0 / KEY_ZOOM_STEP);
    }

    // Number keys: time scale presets (matches the dock's speed row)
    let digits = [
        KeyCode::Digit1,
        KeyCode::Digit2,
        KeyCode::Digit3,
        KeyCode::Digit4,
    ];
    for (key, &scale) in digits.iter().zip(TIME_SCALE_PRESETS.iter()) {
        if keys.just_pressed(*key) {
            clock.time_scale = scale;
            info!("Time scale: {}x", scale);
        }
    }
}

/// Handle left-button press/drag panning.
///
/// The press position and starting camera pose are captured on
/// pointer-down; once the pointer moves past the threshold the gesture
/// becomes a drag, any camera animation is cancelled, and the center
/// follows the screen delta divided by zoom.
fn pointer_pan(
    mouse: Res<ButtonInput<MouseButton>>,
    window_query: Query<&Window, With<PrimaryWindow>>,
    mut camera: ResMut<SceneCamera>,
    mut pointer: ResMut<PointerState>,
    mut contexts: EguiContexts,
) {
    let Ok(window) = window_query.single() else {
        return;
    };

    if mouse.just_pressed(MouseButton::Left) && !pointer.down {
        // Only consult egui when starting a gesture; an in-flight drag
        // keeps panning even if the cursor crosses a panel.
        if let Ok(ctx) = contexts.ctx_mut()
            && ctx.wants_pointer_input()
        {
            return;
        }
        let Some(cursor) = window.cursor_position() else {
            return;
        };
        pointer.down = true;
        pointer.dragging = false;
        pointer.press = cursor;
        pointer.cam_start = camera.center;
    }

    if mouse.pressed(MouseButton::Left) && pointer.down {
        let Some(cursor) = window.cursor_position() else {
            return;
        };
        let delta = cursor - pointer.press;
        if !pointer.dragging && delta.length_squared() >= DRAG_THRESHOLD_SQ {
            pointer.dragging = true;
            camera.cancel_animation();
        }
        if pointer.dragging {
            camera.center = pointer.cam_start - delta / camera.zoom;
        }
    }

    if mouse.just_released(MouseButton::Left) {
        // Keep `dragging` set; click resolution consumes it.
        pointer.down = false;
    }
}

/// Wheel zoom toward the cursor.
fn wheel_zoom(
    scroll: Res<AccumulatedMouseScroll>,
    window_query: Query<&Window, With<PrimaryWindow>>,
    mut camera: ResMut<SceneCamera>,
    mut contexts: EguiContexts,
) {
    if scroll.delta.y == 0.0 {
        return;
    }
    if let Ok(ctx) = contexts.ctx_mut()
        && ctx.wants_pointer_input()
    {
        return;
    }
    let Ok(window) = window_query.single() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        return;
    };

    camera.cancel_animation();
    let rate = match scroll.unit {
        MouseScrollUnit::Line => WHEEL_ZOOM_RATE_LINE,
        MouseScrollUnit::Pixel => WHEEL_ZOOM_RATE_PIXEL,
    };
    let factor = (scroll.delta.y * rate).exp();
    camera.zoom_at(factor, cursor);
}

/// Resolve a completed click against the hit registry.
///
/// Suppressed after a drag and while the mission card is open. A planet
/// hit focuses from the overview; a mission pin hit opens its detail
/// card; anything else is ignored.
fn resolve_clicks(
    mouse: Res<ButtonInput<MouseButton>>,
    window_query: Query<&Window, With<PrimaryWindow>>,
    registry: Res<HitRegistry>,
    view: Res<ViewState>,
    mut card: ResMut<CardState>,
    mut focus_events: MessageWriter<FocusRequest>,
    mut pointer: ResMut<PointerState>,
    mut contexts: EguiContexts,
) {
    if !mouse.just_released(MouseButton::Left) {
        return;
    }
    if pointer.dragging {
        pointer.dragging = false;
        return;
    }
    if card.open.is_some() {
        return;
    }
    if let Ok(ctx) = contexts.ctx_mut()
        && ctx.wants_pointer_input()
    {
        return;
    }
    let Ok(window) = window_query.single() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        return;
    };

    let Some(target) = registry.pick(cursor) else {
        return;
    };
    match target.kind {
        HitKind::Planet(index) if !view.is_focused() => {
            focus_events.write(FocusRequest { body: index });
        }
        HitKind::Mission(index) if view.is_focused() => {
            card.open = Some(index);
        }
        _ => {}
    }
}
