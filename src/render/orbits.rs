//! Orbit ring rendering using Bevy gizmos.

use bevy::prelude::*;

use crate::camera::SceneCamera;
use crate::catalog::Catalog;
use crate::view::ViewState;

/// Alpha of the overview orbit rings.
const ORBIT_RING_ALPHA: f32 = 0.08;

/// Segments per ring; enough to look round at every zoom in range.
const RING_SEGMENTS: usize = 96;

/// Draw a circle as a gizmo polyline.
///
/// `center` is in render coordinates, `radius` in screen pixels.
pub fn ring(gizmos: &mut Gizmos, center: Vec2, radius: f32, color: Color) {
    let mut prev = center + Vec2::new(radius, 0.0);
    for i in 1..=RING_SEGMENTS {
        let angle = (i as f32 / RING_SEGMENTS as f32) * std::f32::consts::TAU;
        let point = center + Vec2::new(angle.cos(), angle.sin()) * radius;
        gizmos.line_2d(prev, point, color);
        prev = point;
    }
}

/// Draw each body's heliocentric orbit ring in the overview.
pub fn draw_overview_orbits(
    mut gizmos: Gizmos,
    camera: Res<SceneCamera>,
    catalog: Res<Catalog>,
    view: Res<ViewState>,
) {
    if view.is_focused() {
        return;
    }

    let center = camera.screen_to_render(camera.world_to_screen(Vec2::ZERO));
    let color = Color::srgba(1.0, 1.0, 1.0, ORBIT_RING_ALPHA);
    for body in &catalog.bodies {
        if body.orbit > 0.0 {
            ring(&mut gizmos, center, body.orbit * camera.zoom, color);
        }
    }
}
