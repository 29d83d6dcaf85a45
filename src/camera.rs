//! Scene camera: world→screen mapping and animated pose transitions.
//!
//! The Bevy `Camera2d` stays fixed at the pixel frame; every world
//! position is mapped to screen pixels through [`SceneCamera`], so the
//! whole transform is an explicit, testable function of the camera pose
//! rather than render-graph state. Screen coordinates are top-left
//! origin, y-down, matching the window cursor position.

use bevy::{prelude::*, window::PrimaryWindow};

/// Closest allowed zoom-out.
pub const MIN_ZOOM: f32 = 0.35;

/// Furthest allowed zoom-in.
pub const MAX_ZOOM: f32 = 9.0;

/// Duration of most camera transitions, seconds.
pub const DEFAULT_ANIM_SECS: f64 = 0.65;

/// Multiplicative step for keyboard zoom.
pub const KEY_ZOOM_STEP: f32 = 1.1;

/// Wheel-to-zoom rate for pixel-unit scroll deltas.
pub const WHEEL_ZOOM_RATE_PIXEL: f32 = 0.0015;

/// Wheel-to-zoom rate for line-unit scroll deltas (one notch ≈ 100 px).
pub const WHEEL_ZOOM_RATE_LINE: f32 = 0.15;

/// A camera pose: world-space center plus uniform zoom.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPose {
    pub center: Vec2,
    pub zoom: f32,
}

impl CameraPose {
    pub const DEFAULT: CameraPose = CameraPose {
        center: Vec2::ZERO,
        zoom: 1.0,
    };
}

/// An in-flight interpolation between two poses.
#[derive(Clone, Copy, Debug)]
struct CameraAnim {
    start: CameraPose,
    target: CameraPose,
    start_at: f64,
    duration: f64,
}

/// Symmetric ease-in-out cubic: 0 at 0, 1 at 1, 0.5 at 0.5, smooth at
/// both ends.
pub fn ease_in_out(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Resource holding the current camera pose, viewport size, and any
/// in-flight animation.
#[derive(Resource, Clone, Debug)]
pub struct SceneCamera {
    pub center: Vec2,
    pub zoom: f32,
    /// Viewport size in logical pixels, synced from the window.
    pub viewport: Vec2,
    anim: Option<CameraAnim>,
}

impl Default for SceneCamera {
    fn default() -> Self {
        Self {
            center: CameraPose::DEFAULT.center,
            zoom: CameraPose::DEFAULT.zoom,
            viewport: Vec2::new(1280.0, 720.0),
            anim: None,
        }
    }
}

impl SceneCamera {
    pub fn pose(&self) -> CameraPose {
        CameraPose {
            center: self.center,
            zoom: self.zoom,
        }
    }

    /// Begin an eased transition from the current pose. A zero-or-less
    /// duration snaps immediately.
    pub fn set_target(&mut self, center: Vec2, zoom: f32, duration: f64, now: f64) {
        if duration <= 0.0 {
            self.center = center;
            self.zoom = zoom;
            self.anim = None;
            return;
        }
        self.anim = Some(CameraAnim {
            start: self.pose(),
            target: CameraPose { center, zoom },
            start_at: now,
            duration,
        });
    }

    /// End any in-flight interpolation, keeping the current pose. Called
    /// when the user takes manual control.
    pub fn cancel_animation(&mut self) {
        self.anim = None;
    }

    pub fn is_animating(&self) -> bool {
        self.anim.is_some()
    }

    /// Advance the animation to `now`. On completion the pose equals the
    /// requested target exactly.
    pub fn tick(&mut self, now: f64) {
        let Some(anim) = self.anim else {
            return;
        };
        let t = ((now - anim.start_at) / anim.duration).clamp(0.0, 1.0) as f32;
        let e = ease_in_out(t);
        self.center = anim.start.center.lerp(anim.target.center, e);
        self.zoom = anim.start.zoom + (anim.target.zoom - anim.start.zoom) * e;
        if t >= 1.0 {
            self.center = anim.target.center;
            self.zoom = anim.target.zoom;
            self.anim = None;
        }
    }

    pub fn world_to_screen(&self, w: Vec2) -> Vec2 {
        (w - self.center) * self.zoom + self.viewport / 2.0
    }

    pub fn screen_to_world(&self, s: Vec2) -> Vec2 {
        (s - self.viewport / 2.0) / self.zoom + self.center
    }

    /// Multiply zoom by `factor`, clamped, keeping the world point under
    /// `cursor` (screen pixels) fixed.
    pub fn zoom_at(&mut self, factor: f32, cursor: Vec2) {
        let before = self.screen_to_world(cursor);
        self.zoom = (self.zoom * factor).clamp(MIN_ZOOM, MAX_ZOOM);
        let after = self.screen_to_world(cursor);
        self.center += before - after;
    }

    /// Multiply zoom by `factor`, clamped, about the viewport center.
    pub fn zoom_step(&mut self, factor: f32) {
        self.zoom = (self.zoom * factor).clamp(MIN_ZOOM, MAX_ZOOM);
    }

    /// Convert a screen position to Bevy's centered render coordinates
    /// (origin mid-viewport, y-up) for entity transforms.
    pub fn screen_to_render(&self, s: Vec2) -> Vec2 {
        Vec2::new(s.x - self.viewport.x / 2.0, self.viewport.y / 2.0 - s.y)
    }
}

/// Plugin owning the scene camera and the fixed pixel-frame `Camera2d`.
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SceneCamera>()
            .insert_resource(ClearColor(Color::srgb_u8(0x05, 0x05, 0x0a)))
            .add_systems(Startup, setup_camera)
            .add_systems(Update, sync_viewport);
    }
}

fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// Keep the logical viewport size in sync with the primary window.
fn sync_viewport(
    window_query: Query<&Window, With<PrimaryWindow>>,
    mut camera: ResMut<SceneCamera>,
) {
    let Ok(window) = window_query.single() else {
        return;
    };
    camera.viewport = Vec2::new(window.width(), window.height());
}

/// Advance any in-flight camera animation.
pub fn tick_camera(time: Res<Time<Real>>, mut camera: ResMut<SceneCamera>) {
    camera.tick(time.elapsed_secs_f64());
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_ease_endpoints() {
        assert_eq!(ease_in_out(0.0), 0.0);
        assert_eq!(ease_in_out(1.0), 1.0);
        assert_relative_eq!(ease_in_out(0.5), 0.5, epsilon = 1e-6);
    }

    #[test]
    fn test_world_screen_roundtrip() {
        let mut cam = SceneCamera::default();
        cam.center = Vec2::new(40.0, -17.5);
        cam.zoom = 2.3;
        let s = Vec2::new(311.0, 97.0);
        let back = cam.world_to_screen(cam.screen_to_world(s));
        assert_relative_eq!(back.x, s.x, epsilon = 1e-3);
        assert_relative_eq!(back.y, s.y, epsilon = 1e-3);
    }

    #[test]
    fn test_origin_maps_to_viewport_center() {
        let cam = SceneCamera::default();
        let s = cam.world_to_screen(Vec2::ZERO);
        assert_eq!(s, cam.viewport / 2.0);
    }

    #[test]
    fn test_zoom_at_keeps_cursor_point_fixed() {
        let mut cam = SceneCamera::default();
        cam.center = Vec2::new(120.0, 60.0);
        cam.zoom = 1.7;
        let cursor = Vec2::new(900.0, 150.0);
        let before = cam.screen_to_world(cursor);
        cam.zoom_at(1.37, cursor);
        let after = cam.screen_to_world(cursor);
        assert_relative_eq!(before.x, after.x, epsilon = 1e-3);
        assert_relative_eq!(before.y, after.y, epsilon = 1e-3);
    }

    #[test]
    fn test_zoom_clamped() {
        let mut cam = SceneCamera::default();
        cam.zoom_step(1000.0);
        assert_eq!(cam.zoom, MAX_ZOOM);
        cam.zoom_step(1e-6);
        assert_eq!(cam.zoom, MIN_ZOOM);
    }

    #[test]
    fn test_animation_reaches_target_exactly() {
        let mut cam = SceneCamera::default();
        cam.set_target(Vec2::new(205.0, -32.0), 3.6, 0.65, 10.0);
        cam.tick(10.3);
        assert!(cam.is_animating());
        cam.tick(10.65);
        assert!(!cam.is_animating());
        assert_eq!(cam.center, Vec2::new(205.0, -32.0));
        assert_eq!(cam.zoom, 3.6);
    }

    #[test]
    fn test_animation_midpoint_is_halfway() {
        let mut cam = SceneCamera::default();
        cam.set_target(Vec2::new(100.0, 0.0), 3.0, 1.0, 0.0);
        cam.tick(0.5);
        assert_relative_eq!(cam.center.x, 50.0, epsilon = 1e-3);
        assert_relative_eq!(cam.zoom, 2.0, epsilon = 1e-4);
    }

    #[test]
    fn test_cancel_keeps_current_pose() {
        let mut cam = SceneCamera::default();
        cam.set_target(Vec2::new(100.0, 100.0), 5.0, 1.0, 0.0);
        cam.tick(0.25);
        let pose = cam.pose();
        cam.cancel_animation();
        cam.tick(2.0);
        assert_eq!(cam.pose(), pose);
    }

    #[test]
    fn test_zero_duration_snaps() {
        let mut cam = SceneCamera::default();
        cam.set_target(Vec2::new(7.0, 8.0), 2.0, 0.0, 5.0);
        assert!(!cam.is_animating());
        assert_eq!(cam.center, Vec2::new(7.0, 8.0));
    }
}
