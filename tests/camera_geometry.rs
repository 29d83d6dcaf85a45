//! Camera transform and hit-test geometry tests.
//!
//! Covers the world/screen mapping invariants, wheel-zoom recentring,
//! animation completion, and pick ordering against screen-mapped
//! positions.

use approx::assert_relative_eq;
use bevy::math::Vec2;

use orrery::camera::{ease_in_out, CameraPose, SceneCamera, MAX_ZOOM, MIN_ZOOM};
use orrery::picking::{HitKind, HitRegistry};

fn camera_at(center: Vec2, zoom: f32) -> SceneCamera {
    let mut cam = SceneCamera::default();
    cam.center = center;
    cam.zoom = zoom;
    cam
}

#[test]
fn test_round_trip_across_poses() {
    let poses = [
        (Vec2::ZERO, 1.0),
        (Vec2::new(300.0, -140.0), 0.35),
        (Vec2::new(-42.5, 17.25), 3.6),
        (Vec2::new(850.0, 850.0), 9.0),
    ];
    let screens = [
        Vec2::new(0.0, 0.0),
        Vec2::new(640.0, 360.0),
        Vec2::new(1279.0, 719.0),
        Vec2::new(17.0, 702.5),
    ];
    for (center, zoom) in poses {
        let cam = camera_at(center, zoom);
        for s in screens {
            let back = cam.world_to_screen(cam.screen_to_world(s));
            assert_relative_eq!(back.x, s.x, epsilon = 1e-2);
            assert_relative_eq!(back.y, s.y, epsilon = 1e-2);
        }
    }
}

#[test]
fn test_wheel_zoom_keeps_cursor_world_point() {
    let mut cam = camera_at(Vec2::new(125.0, 40.0), 1.0);
    let cursor = Vec2::new(200.0, 500.0);
    let anchor = cam.screen_to_world(cursor);

    // A run of wheel steps in both directions stays anchored.
    for factor in [1.2, 1.2, 0.8, 1.5, 0.6, 0.9] {
        cam.zoom_at(factor, cursor);
        let now = cam.screen_to_world(cursor);
        assert_relative_eq!(now.x, anchor.x, epsilon = 1e-2);
        assert_relative_eq!(now.y, anchor.y, epsilon = 1e-2);
    }
}

#[test]
fn test_wheel_zoom_clamped_at_range_edges() {
    let mut cam = camera_at(Vec2::ZERO, 1.0);
    let cursor = Vec2::new(900.0, 100.0);
    cam.zoom_at(1e6, cursor);
    assert_eq!(cam.zoom, MAX_ZOOM);
    cam.zoom_at(1e-6, cursor);
    assert_eq!(cam.zoom, MIN_ZOOM);
}

#[test]
fn test_ease_is_symmetric_and_monotonic() {
    assert_eq!(ease_in_out(0.0), 0.0);
    assert_eq!(ease_in_out(1.0), 1.0);
    assert_relative_eq!(ease_in_out(0.5), 0.5, epsilon = 1e-6);

    let mut prev = 0.0;
    for i in 1..=100 {
        let t = i as f32 / 100.0;
        let e = ease_in_out(t);
        assert!(e >= prev, "ease not monotonic at t={}", t);
        // Symmetry about the midpoint.
        assert_relative_eq!(e + ease_in_out(1.0 - t), 1.0, epsilon = 1e-5);
        prev = e;
    }
}

#[test]
fn test_completed_animation_lands_on_target() {
    let mut cam = SceneCamera::default();
    cam.set_target(Vec2::new(125.0, -60.0), 2.7, 0.7, 100.0);
    // Tick through, past, and beyond the end.
    cam.tick(100.35);
    cam.tick(100.7);
    cam.tick(101.0);
    assert_eq!(cam.center, Vec2::new(125.0, -60.0));
    assert_eq!(cam.zoom, 2.7);
    assert!(!cam.is_animating());
}

#[test]
fn test_retarget_mid_animation_starts_from_current_pose() {
    let mut cam = SceneCamera::default();
    cam.set_target(Vec2::new(100.0, 0.0), 3.0, 1.0, 0.0);
    cam.tick(0.5);
    let mid = cam.pose();

    cam.set_target(CameraPose::DEFAULT.center, CameraPose::DEFAULT.zoom, 1.0, 0.5);
    cam.tick(0.5);
    // The new animation begins exactly where the old one was cut.
    assert_eq!(cam.pose(), mid);
    cam.tick(1.5);
    assert_eq!(cam.pose(), CameraPose::DEFAULT);
}

#[test]
fn test_drag_pan_math_matches_screen_delta() {
    // Panning moves the center by the screen delta divided by zoom, so
    // the world point under the pointer tracks the pointer.
    let mut cam = camera_at(Vec2::new(50.0, 50.0), 2.0);
    let press = Vec2::new(400.0, 300.0);
    let grabbed = cam.screen_to_world(press);

    let cursor = Vec2::new(460.0, 250.0);
    cam.center = Vec2::new(50.0, 50.0) - (cursor - press) / cam.zoom;

    let now_under_cursor = cam.screen_to_world(cursor);
    assert_relative_eq!(now_under_cursor.x, grabbed.x, epsilon = 1e-3);
    assert_relative_eq!(now_under_cursor.y, grabbed.y, epsilon = 1e-3);
}

#[test]
fn test_pick_prefers_topmost_of_stacked_targets() {
    let mut registry = HitRegistry::default();
    registry.register(HitKind::Planet(0), "A", Vec2::new(10.0, 10.0), 5.0);
    registry.register(HitKind::Planet(1), "B", Vec2::new(10.0, 10.0), 5.0);

    let hit = registry.pick(Vec2::new(10.0, 10.0)).expect("stacked hit");
    assert_eq!(hit.id, "B");
    assert!(registry.pick(Vec2::new(100.0, 100.0)).is_none());
}

#[test]
fn test_pick_through_screen_mapping() {
    // Register targets where the camera would place two bodies, then
    // pick at the screen position of the second.
    let cam = camera_at(Vec2::ZERO, 2.0);
    let a_world = Vec2::new(70.0, 0.0);
    let b_world = Vec2::new(71.0, 0.0);

    let mut registry = HitRegistry::default();
    registry.register(HitKind::Planet(0), "A", cam.world_to_screen(a_world), 12.0);
    registry.register(HitKind::Planet(1), "B", cam.world_to_screen(b_world), 12.0);

    let hit = registry
        .pick(cam.world_to_screen(b_world))
        .expect("should hit");
    assert_eq!(hit.kind, HitKind::Planet(1));
}

#[test]
fn test_registry_is_frame_scoped() {
    let mut registry = HitRegistry::default();
    registry.register(HitKind::Star, "Sun", Vec2::new(640.0, 360.0), 14.0);
    assert_eq!(registry.len(), 1);
    registry.clear();
    assert!(registry.is_empty());
    assert!(registry.pick(Vec2::new(640.0, 360.0)).is_none());
}
