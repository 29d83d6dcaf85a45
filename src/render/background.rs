//! Starfield background.
//!
//! A fixed set of seeded procedural points, parallaxed slightly against
//! the camera and wrapped into the viewport. Decorative only; stars are
//! never hit targets.

use bevy::prelude::*;

use crate::camera::SceneCamera;
use crate::render::z_layers;
use crate::rng::Mulberry32;

/// Settings for the starfield background.
#[derive(Resource, Clone, Copy, Debug)]
pub struct StarfieldSettings {
    /// Number of stars.
    pub count: usize,
    /// Seed for the star placement stream.
    pub seed: u32,
    /// Fraction of the camera offset applied as parallax.
    pub parallax: f32,
}

impl Default for StarfieldSettings {
    fn default() -> Self {
        Self {
            count: 420,
            seed: 42,
            parallax: 0.002,
        }
    }
}

/// Stars live on a wrapping 1.2x viewport-normalized tile so panning
/// never runs out of sky.
const STAR_WRAP: f32 = 1.2;

/// A single background star: tile-normalized position plus fixed
/// screen-pixel radius.
#[derive(Component)]
pub struct Star {
    tile: Vec2,
}

/// Spawn the seeded starfield.
pub fn spawn_starfield(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    settings: Res<StarfieldSettings>,
) {
    let star_mesh = meshes.add(Circle::new(1.0));
    let mut rng = Mulberry32::new(settings.seed);

    for _ in 0..settings.count {
        let tile = Vec2::new(
            rng.next_f32() * STAR_WRAP - 0.1,
            rng.next_f32() * STAR_WRAP - 0.1,
        );
        let radius = rng.next_f32() * 1.8 + 0.2;
        let alpha = rng.next_f32() * 0.55 + 0.18;

        commands.spawn((
            Mesh2d(star_mesh.clone()),
            MeshMaterial2d(materials.add(ColorMaterial::from(Color::srgba(
                1.0, 1.0, 1.0, alpha,
            )))),
            Transform::from_xyz(0.0, 0.0, z_layers::BACKGROUND)
                .with_scale(Vec3::splat(radius)),
            Star { tile },
        ));
    }

    info!("Spawned {} background stars", settings.count);
}

/// Parallax and wrap the stars against the camera each frame.
pub fn update_starfield(
    camera: Res<SceneCamera>,
    settings: Res<StarfieldSettings>,
    mut stars: Query<(&mut Transform, &Star)>,
) {
    let parallax = camera.center * settings.parallax;
    let viewport = camera.viewport;

    for (mut transform, star) in stars.iter_mut() {
        let screen = Vec2::new(
            (star.tile.x + parallax.x).rem_euclid(STAR_WRAP) * viewport.x,
            (star.tile.y + parallax.y).rem_euclid(STAR_WRAP) * viewport.y,
        );
        let render = camera.screen_to_render(screen);
        transform.translation.x = render.x;
        transform.translation.y = render.y;
    }
}
