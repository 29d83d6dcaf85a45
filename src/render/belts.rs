//! Belt regions: seeded scatter points plus a dust band per belt.
//!
//! Purely decorative overview dressing. Individual points are never hit
//! targets; the belt's clickable presence on the map is its host body
//! disc, drawn in `bodies`.

use bevy::prelude::*;

use crate::camera::SceneCamera;
use crate::catalog::Catalog;
use crate::render::z_layers;
use crate::rng::Mulberry32;
use crate::view::ViewState;

/// One belt's scatter parameters.
#[derive(Clone, Copy, Debug)]
pub struct BeltSpec {
    /// Body id whose orbit radius anchors the belt.
    pub body_id: &'static str,
    pub seed: u32,
    pub count: usize,
    /// Radial jitter around the belt orbit, world units.
    pub jitter: f32,
}

/// Settings for belt rendering.
#[derive(Resource, Clone, Debug)]
pub struct BeltSettings {
    pub belts: Vec<BeltSpec>,
    /// Half-thickness of each dust band, world units.
    pub band_width: f32,
    /// Dust band fill alpha.
    pub band_alpha: f32,
}

impl Default for BeltSettings {
    fn default() -> Self {
        Self {
            belts: vec![
                BeltSpec {
                    body_id: "Kuiper Belt",
                    seed: 1337,
                    count: 110,
                    jitter: 12.0,
                },
                BeltSpec {
                    body_id: "Dwarf Planets",
                    seed: 7331,
                    count: 140,
                    jitter: 10.0,
                },
            ],
            band_width: 22.0,
            band_alpha: 0.03,
        }
    }
}

/// A scatter point: fixed world position, fixed screen-pixel radius.
#[derive(Component)]
pub struct BeltPoint {
    world: Vec2,
}

/// A dust band annulus sized in world units about the origin.
#[derive(Component)]
pub struct DustBand;

/// Spawn scatter points and dust bands for each configured belt.
pub fn spawn_belts(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    settings: Res<BeltSettings>,
    catalog: Res<Catalog>,
) {
    let point_mesh = meshes.add(Circle::new(1.0));

    for spec in &settings.belts {
        let Some(body) = catalog.body(spec.body_id) else {
            warn!("belt references unknown body {}", spec.body_id);
            continue;
        };
        let orbit = body.orbit;

        let mut rng = Mulberry32::new(spec.seed);
        for _ in 0..spec.count {
            let angle = rng.next_f32() * std::f32::consts::TAU;
            let jitter = (rng.next_f32() - 0.5) * spec.jitter;
            let world = Vec2::new(
                angle.cos() * (orbit + jitter),
                angle.sin() * (orbit + jitter),
            );
            let alpha = 0.20 + rng.next_f32() * 0.35;
            let radius = rng.next_f32() * 1.4 + 0.4;

            commands.spawn((
                Mesh2d(point_mesh.clone()),
                MeshMaterial2d(materials.add(ColorMaterial::from(Color::srgba(
                    1.0, 1.0, 1.0, alpha,
                )))),
                Transform::from_xyz(0.0, 0.0, z_layers::BELT).with_scale(Vec3::splat(radius)),
                BeltPoint { world },
            ));
        }

        // Dust band: a translucent annulus straddling the belt orbit,
        // scaled with zoom each frame.
        let band_mesh = meshes.add(Annulus::new(
            (orbit - settings.band_width).max(0.0),
            orbit + settings.band_width,
        ));
        commands.spawn((
            Mesh2d(band_mesh),
            MeshMaterial2d(materials.add(ColorMaterial::from(Color::srgba(
                1.0,
                1.0,
                1.0,
                settings.band_alpha,
            )))),
            Transform::from_xyz(0.0, 0.0, z_layers::BELT),
            DustBand,
        ));
    }
}

/// Position belt dressing each frame; hidden outside the overview.
pub fn update_belts(
    camera: Res<SceneCamera>,
    view: Res<ViewState>,
    mut points: Query<(&mut Transform, &mut Visibility, &BeltPoint), Without<DustBand>>,
    mut bands: Query<(&mut Transform, &mut Visibility), With<DustBand>>,
) {
    let visible = if view.is_focused() {
        Visibility::Hidden
    } else {
        Visibility::Visible
    };

    for (mut transform, mut visibility, point) in points.iter_mut() {
        *visibility = visible;
        let render = camera.screen_to_render(camera.world_to_screen(point.world));
        transform.translation.x = render.x;
        transform.translation.y = render.y;
    }

    let origin = camera.screen_to_render(camera.world_to_screen(Vec2::ZERO));
    for (mut transform, mut visibility) in bands.iter_mut() {
        *visibility = visible;
        transform.translation.x = origin.x;
        transform.translation.y = origin.y;
        transform.scale = Vec3::new(camera.zoom, camera.zoom, 1.0);
    }
}
