//! Overview rendering of the sun, planets, and their moons.
//!
//! Disc entities are spawned once at startup; every frame their
//! transforms are driven from the orbital position model through the
//! scene camera, and hit targets are registered in paint order (sun
//! first, then each body) so the topmost disc wins the pick.

use bevy::prelude::*;

use crate::camera::SceneCamera;
use crate::catalog::Catalog;
use crate::orbit::{body_position, moon_position, MoonLayoutSettings};
use crate::picking::{HitKind, HitRegistry, HoveredTarget};
use crate::render::orbits::ring;
use crate::render::z_layers;
use crate::types::SimClock;
use crate::view::ViewState;

/// Sun disc radius at zoom 1, screen pixels.
const SUN_RADIUS: f32 = 14.0;

/// Zoom at which disc sizes start blending toward constant screen size.
const SIZE_RAMP_START: f32 = 1.25;

/// Zoom span over which the blend completes.
const SIZE_RAMP_SPAN: f32 = 1.2;

/// Zoom at which overview moons start fading in.
pub const MOON_FADE_START: f32 = 0.9;

/// Zoom span over which the moon fade completes.
pub const MOON_FADE_SPAN: f32 = 0.9;

/// Zoom multiplier for disc sizes.
///
/// Scales with zoom until the ramp, then blends toward constant screen
/// size so zoomed-in discs stop growing.
pub fn size_ramp(zoom: f32) -> f32 {
    let t = ((zoom - SIZE_RAMP_START) / SIZE_RAMP_SPAN).clamp(0.0, 1.0);
    zoom + (1.0 - zoom) * t
}

/// Screen radius of a body disc at the given zoom.
pub fn body_disc_radius(size: f32, zoom: f32) -> f32 {
    (size * 1.2).max(4.0) * size_ramp(zoom)
}

/// Screen radius of an overview moon disc at the given zoom.
pub fn moon_disc_radius(size: f32, zoom: f32) -> f32 {
    (size * 0.55).max(1.6) * size_ramp(zoom)
}

/// Overview moon opacity factor for the given zoom, 0 below the fade
/// threshold and 1 once fully zoomed in.
pub fn moon_fade(zoom: f32) -> f32 {
    ((zoom - MOON_FADE_START) / MOON_FADE_SPAN).clamp(0.0, 1.0)
}

/// The sun disc or one of its glow layers. `glow == 1` is the core
/// disc; larger values are the halo layers.
#[derive(Component)]
pub struct SunVisual {
    pub glow: f32,
}

/// A body disc or glow layer, by catalog index.
#[derive(Component)]
pub struct BodyVisual {
    pub index: usize,
    pub glow: f32,
}

/// An overview moon disc, by catalog body and moon slot.
#[derive(Component)]
pub struct MoonVisual {
    pub body: usize,
    pub index: usize,
}

/// Spawn the overview scene entities from the catalog.
pub fn spawn_overview(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    catalog: Res<Catalog>,
) {
    let disc_mesh = meshes.add(Circle::new(1.0));

    // Sun halo layers behind the core disc.
    for (glow, alpha) in [(7.0, 0.10), (3.0, 0.22)] {
        commands.spawn((
            Mesh2d(disc_mesh.clone()),
            MeshMaterial2d(materials.add(ColorMaterial::from(Color::srgba(
                1.0, 0.55, 0.35, alpha,
            )))),
            Transform::from_xyz(0.0, 0.0, z_layers::GLOW),
            SunVisual { glow },
        ));
    }
    commands.spawn((
        Mesh2d(disc_mesh.clone()),
        MeshMaterial2d(materials.add(ColorMaterial::from(Color::srgb_u8(
            0xff, 0xd7, 0x9e,
        )))),
        Transform::from_xyz(0.0, 0.0, z_layers::BODY),
        SunVisual { glow: 1.0 },
    ));

    for (index, body) in catalog.bodies.iter().enumerate() {
        // Earth's glow is its signature blue; everyone else gets a
        // faint white halo.
        let glow_color = if body.id == "Earth" {
            Color::srgba(0.09, 0.63, 1.0, 0.35)
        } else {
            Color::srgba(1.0, 1.0, 1.0, 0.14)
        };
        commands.spawn((
            Mesh2d(disc_mesh.clone()),
            MeshMaterial2d(materials.add(ColorMaterial::from(glow_color))),
            Transform::from_xyz(0.0, 0.0, z_layers::GLOW),
            BodyVisual { index, glow: 4.0 },
        ));
        commands.spawn((
            Mesh2d(disc_mesh.clone()),
            MeshMaterial2d(materials.add(ColorMaterial::from(body.color))),
            Transform::from_xyz(0.0, 0.0, z_layers::BODY),
            BodyVisual { index, glow: 1.0 },
        ));

        for (moon_index, moon) in body.moons.iter().enumerate() {
            commands.spawn((
                Mesh2d(disc_mesh.clone()),
                MeshMaterial2d(materials.add(ColorMaterial::from(moon.color))),
                Transform::from_xyz(0.0, 0.0, z_layers::BODY),
                MoonVisual {
                    body: index,
                    index: moon_index,
                },
            ));
        }
    }

    info!("Spawned overview scene for {} bodies", catalog.bodies.len());
}

/// Drive the overview entities and register hit targets for the frame.
#[allow(clippy::too_many_arguments)]
pub fn update_overview(
    view: Res<ViewState>,
    clock: Res<SimClock>,
    camera: Res<SceneCamera>,
    layout: Res<MoonLayoutSettings>,
    catalog: Res<Catalog>,
    hovered: Res<HoveredTarget>,
    mut registry: ResMut<HitRegistry>,
    mut gizmos: Gizmos,
    mut materials: ResMut<Assets<ColorMaterial>>,
    mut suns: Query<
        (&mut Transform, &mut Visibility, &SunVisual),
        (Without<BodyVisual>, Without<MoonVisual>),
    >,
    mut body_discs: Query<
        (&mut Transform, &mut Visibility, &BodyVisual),
        (Without<SunVisual>, Without<MoonVisual>),
    >,
    mut moon_discs: Query<
        (
            &mut Transform,
            &mut Visibility,
            &MoonVisual,
            &MeshMaterial2d<ColorMaterial>,
        ),
        (Without<SunVisual>, Without<BodyVisual>),
    >,
) {
    if view.is_focused() {
        for (_, mut visibility, _) in suns.iter_mut() {
            *visibility = Visibility::Hidden;
        }
        for (_, mut visibility, _) in body_discs.iter_mut() {
            *visibility = Visibility::Hidden;
        }
        for (_, mut visibility, _, _) in moon_discs.iter_mut() {
            *visibility = Visibility::Hidden;
        }
        return;
    }

    let zoom = camera.zoom;
    let t = clock.t_days;
    let fade = moon_fade(zoom);

    let sun_screen = camera.world_to_screen(Vec2::ZERO);
    let sun_render = camera.screen_to_render(sun_screen);
    let sun_radius = SUN_RADIUS * zoom;
    for (mut transform, mut visibility, sun) in suns.iter_mut() {
        *visibility = Visibility::Visible;
        transform.translation.x = sun_render.x;
        transform.translation.y = sun_render.y;
        transform.scale = Vec3::splat(sun_radius * sun.glow);
    }

    for (mut transform, mut visibility, visual) in body_discs.iter_mut() {
        let Some(body) = catalog.bodies.get(visual.index) else {
            continue;
        };
        *visibility = Visibility::Visible;
        let (pos, _) = body_position(body, t);
        let render = camera.screen_to_render(camera.world_to_screen(pos));
        let radius = body_disc_radius(body.size, zoom);
        transform.translation.x = render.x;
        transform.translation.y = render.y;
        transform.scale = Vec3::splat(radius * visual.glow);
    }

    for (mut transform, mut visibility, visual, material) in moon_discs.iter_mut() {
        let Some(body) = catalog.bodies.get(visual.body) else {
            continue;
        };
        let Some(moon) = body.moons.get(visual.index) else {
            continue;
        };
        if fade <= 0.02 {
            *visibility = Visibility::Hidden;
            continue;
        }
        *visibility = Visibility::Visible;
        let (host_pos, _) = body_position(body, t);
        let (rel, _) = moon_position(body.id, moon, t, &layout);
        let render = camera.screen_to_render(camera.world_to_screen(host_pos + rel));
        transform.translation.x = render.x;
        transform.translation.y = render.y;
        transform.scale = Vec3::splat(moon_disc_radius(moon.size, zoom));

        if let Some(mat) = materials.get_mut(&material.0) {
            mat.color = moon.color.with_alpha(moon.color.alpha() * 0.75 * fade);
        }
    }

    // Moon orbit rings around each host, faded with the moons.
    if fade > 0.02 {
        let ring_color = Color::srgba(1.0, 1.0, 1.0, 0.08 * fade);
        for body in &catalog.bodies {
            if body.moons.is_empty() {
                continue;
            }
            let (host_pos, _) = body_position(body, t);
            let center = camera.screen_to_render(camera.world_to_screen(host_pos));
            for moon in &body.moons {
                let (rel, _) = moon_position(body.id, moon, t, &layout);
                ring(&mut gizmos, center, rel.length() * zoom, ring_color);
            }
        }
    }

    // Hit registration in paint order: sun below, bodies on top.
    registry.register(HitKind::Star, "Sun", sun_screen, sun_radius.max(10.0));
    for (index, body) in catalog.bodies.iter().enumerate() {
        let (pos, _) = body_position(body, t);
        let screen = camera.world_to_screen(pos);
        let radius = body_disc_radius(body.size, zoom);
        registry.register(
            HitKind::Planet(index),
            body.id,
            screen,
            (radius + 6.0).max(12.0),
        );

        // Hover ring, fed by the previous frame's pick.
        if let Some(target) = &hovered.0
            && target.kind == HitKind::Planet(index)
        {
            let center = camera.screen_to_render(screen);
            ring(
                &mut gizmos,
                center,
                radius + 6.0,
                Color::srgba(1.0, 0.04, 0.42, 0.55),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_size_ramp_scales_with_zoom_when_zoomed_out() {
        assert_relative_eq!(size_ramp(0.5), 0.5);
        assert_relative_eq!(size_ramp(1.0), 1.0);
        assert_relative_eq!(size_ramp(1.25), 1.25);
    }

    #[test]
    fn test_size_ramp_converges_to_constant_screen_size() {
        assert_relative_eq!(size_ramp(2.45), 1.0);
        assert_relative_eq!(size_ramp(9.0), 1.0);
    }

    #[test]
    fn test_body_disc_radius_has_floor() {
        // Tiny bodies still render at a clickable size.
        assert_relative_eq!(body_disc_radius(1.0, 1.0), 4.0);
        assert_relative_eq!(body_disc_radius(6.4, 1.0), 7.68);
    }

    #[test]
    fn test_moon_fade_window() {
        assert_eq!(moon_fade(0.5), 0.0);
        assert_eq!(moon_fade(MOON_FADE_START), 0.0);
        assert_eq!(moon_fade(MOON_FADE_START + MOON_FADE_SPAN), 1.0);
        assert_eq!(moon_fade(9.0), 1.0);
        let mid = moon_fade(MOON_FADE_START + MOON_FADE_SPAN / 2.0);
        assert!(mid > 0.0 && mid < 1.0);
    }
}
