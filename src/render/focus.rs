//! Focused-view rendering: one body enlarged with its moons and
//! mission pins.
//!
//! Entities are spawned when a focus transition lands and despawned on
//! the way out; every frame their transforms follow the focus-frame
//! layout and each pin registers a `Mission` hit target.

use bevy::prelude::*;

use crate::camera::SceneCamera;
use crate::catalog::Catalog;
use crate::orbit::{focus_moon_orbit, focus_moon_position};
use crate::picking::{HitKind, HitRegistry};
use crate::render::orbits::ring;
use crate::render::z_layers;
use crate::types::{PinAnchor, SimClock};
use crate::view::{ViewChanged, ViewMode, ViewState};

/// Screen radius of the focused body disc, pixels.
const FOCUS_BODY_RADIUS: f32 = 10.0;

/// Pin glow halo radius, screen pixels.
const PIN_GLOW_RADIUS: f32 = 22.0;

/// Pin dot radius, screen pixels.
const PIN_DOT_RADIUS: f32 = 6.2;

/// Pick radius of a mission pin, screen pixels.
const PIN_PICK_RADIUS: f32 = 14.0;

/// Screen radius of a moon disc in the focused frame.
pub fn focus_moon_disc_radius(size: f32) -> f32 {
    (size * 2.0).clamp(6.0, 11.0)
}

/// Marker for every entity belonging to the current focused view.
#[derive(Component)]
pub struct FocusScene;

/// The focused body disc or one of its glow layers.
#[derive(Component)]
pub struct FocusBody {
    pub glow: f32,
}

/// A moon disc in the focused frame, by moon slot on the focused body.
#[derive(Component)]
pub struct FocusMoon {
    pub index: usize,
}

/// A mission pin layer, by slot into the focused mission list.
#[derive(Component)]
pub struct FocusPin {
    pub slot: usize,
}

/// Rebuild the focused-view entities on every view transition.
pub fn sync_focus_entities(
    mut events: MessageReader<ViewChanged>,
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    catalog: Res<Catalog>,
    view: Res<ViewState>,
    existing: Query<Entity, With<FocusScene>>,
) {
    let mut transitioned = false;
    for _ in events.read() {
        transitioned = true;
    }
    if !transitioned {
        return;
    }

    for entity in existing.iter() {
        commands.entity(entity).despawn();
    }
    if view.mode != ViewMode::Focused {
        return;
    }
    let Some(body) = view.focus.and_then(|i| catalog.bodies.get(i)) else {
        return;
    };

    let disc_mesh = meshes.add(Circle::new(1.0));

    // Halo layers then the body disc.
    for (glow, color) in [
        (4.2, Color::srgba(0.09, 0.63, 1.0, 0.18)),
        (2.4, Color::srgba(0.54, 0.17, 0.89, 0.12)),
    ] {
        commands.spawn((
            Mesh2d(disc_mesh.clone()),
            MeshMaterial2d(materials.add(ColorMaterial::from(color))),
            Transform::from_xyz(0.0, 0.0, z_layers::GLOW)
                .with_scale(Vec3::splat(FOCUS_BODY_RADIUS * glow)),
            FocusScene,
            FocusBody { glow },
        ));
    }
    commands.spawn((
        Mesh2d(disc_mesh.clone()),
        MeshMaterial2d(materials.add(ColorMaterial::from(body.color))),
        Transform::from_xyz(0.0, 0.0, z_layers::BODY)
            .with_scale(Vec3::splat(FOCUS_BODY_RADIUS)),
        FocusScene,
        FocusBody { glow: 1.0 },
    ));

    for (index, moon) in body.moons.iter().enumerate() {
        commands.spawn((
            Mesh2d(disc_mesh.clone()),
            MeshMaterial2d(materials.add(ColorMaterial::from(moon.color))),
            Transform::from_xyz(0.0, 0.0, z_layers::BODY)
                .with_scale(Vec3::splat(focus_moon_disc_radius(moon.size))),
            FocusScene,
            FocusMoon { index },
        ));
    }

    for (slot, _) in view.missions.iter().enumerate() {
        commands.spawn((
            Mesh2d(disc_mesh.clone()),
            MeshMaterial2d(materials.add(ColorMaterial::from(Color::srgba(
                1.0, 0.04, 0.42, 0.20,
            )))),
            Transform::from_xyz(0.0, 0.0, z_layers::PIN_GLOW)
                .with_scale(Vec3::splat(PIN_GLOW_RADIUS)),
            FocusScene,
            FocusPin { slot },
        ));
        commands.spawn((
            Mesh2d(disc_mesh.clone()),
            MeshMaterial2d(materials.add(ColorMaterial::from(Color::srgb_u8(
                0xff, 0x0a, 0x6b,
            )))),
            Transform::from_xyz(0.0, 0.0, z_layers::PIN)
                .with_scale(Vec3::splat(PIN_DOT_RADIUS)),
            FocusScene,
            FocusPin { slot },
        ));
    }
}

/// Screen position of a pin's anchor in the focused frame.
///
/// A moon anchor that no longer resolves falls back to the body, so a
/// dangling target renders near the planet instead of breaking the
/// frame.
pub fn pin_anchor_screen(
    camera: &SceneCamera,
    body: &crate::types::Body,
    anchor: &PinAnchor,
    t_days: f64,
) -> Vec2 {
    match anchor {
        PinAnchor::Moon(name) => match body.moon(name) {
            Some(moon) => camera.world_to_screen(focus_moon_position(body.id, moon, t_days)),
            None => camera.world_to_screen(Vec2::ZERO),
        },
        PinAnchor::Body => camera.world_to_screen(Vec2::ZERO),
    }
}

/// Drive the focused-view entities and register pin hit targets.
#[allow(clippy::too_many_arguments)]
pub fn update_focus_scene(
    view: Res<ViewState>,
    clock: Res<SimClock>,
    camera: Res<SceneCamera>,
    catalog: Res<Catalog>,
    mut registry: ResMut<HitRegistry>,
    mut gizmos: Gizmos,
    mut body_discs: Query<
        (&mut Transform, &FocusBody),
        (Without<FocusMoon>, Without<FocusPin>),
    >,
    mut moon_discs: Query<
        (&mut Transform, &FocusMoon),
        (Without<FocusBody>, Without<FocusPin>),
    >,
    mut pins: Query<(&mut Transform, &FocusPin), (Without<FocusBody>, Without<FocusMoon>)>,
) {
    if view.mode != ViewMode::Focused {
        return;
    }
    let Some(body) = view.focus.and_then(|i| catalog.bodies.get(i)) else {
        return;
    };

    let t = clock.t_days;
    let center_screen = camera.world_to_screen(Vec2::ZERO);
    let center_render = camera.screen_to_render(center_screen);

    for (mut transform, _) in body_discs.iter_mut() {
        transform.translation.x = center_render.x;
        transform.translation.y = center_render.y;
    }

    // Moon orbit rings sized for the focused frame.
    let ring_color = Color::srgba(1.0, 1.0, 1.0, 0.10);
    for moon in &body.moons {
        ring(
            &mut gizmos,
            center_render,
            focus_moon_orbit(moon) * camera.zoom,
            ring_color,
        );
    }

    for (mut transform, visual) in moon_discs.iter_mut() {
        let Some(moon) = body.moons.get(visual.index) else {
            continue;
        };
        let render =
            camera.screen_to_render(camera.world_to_screen(focus_moon_position(body.id, moon, t)));
        transform.translation.x = render.x;
        transform.translation.y = render.y;
    }

    // Pins ride their anchor's screen position plus the stable offset.
    for (mut transform, pin) in pins.iter_mut() {
        let Some(fm) = view.missions.get(pin.slot) else {
            continue;
        };
        let anchor = pin_anchor_screen(&camera, body, &fm.pin.anchor, t);
        let offset = Vec2::new(fm.pin.angle.cos(), fm.pin.angle.sin()) * fm.pin.dist;
        let render = camera.screen_to_render(anchor + offset);
        transform.translation.x = render.x;
        transform.translation.y = render.y;
    }

    for fm in &view.missions {
        let Some(mission) = catalog.missions.get(fm.mission) else {
            continue;
        };
        let anchor = pin_anchor_screen(&camera, body, &fm.pin.anchor, t);
        let offset = Vec2::new(fm.pin.angle.cos(), fm.pin.angle.sin()) * fm.pin.dist;
        registry.register(
            HitKind::Mission(fm.mission),
            mission.id,
            anchor + offset,
            PIN_PICK_RADIUS,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_moon_disc_radius_clamped() {
        assert_eq!(focus_moon_disc_radius(3.4), 6.8);
        assert_eq!(focus_moon_disc_radius(1.0), 6.0);
        assert_eq!(focus_moon_disc_radius(8.0), 11.0);
    }
}
