//! Rendering systems for the mission tracker scene.
//!
//! This module provides visual representation of the starfield, orbit
//! rings, belts, bodies, moons, and mission pins for both view modes.

mod background;
mod belts;
pub mod bodies;
mod focus;
mod labels;
pub mod orbits;

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

use crate::camera::tick_camera;
use crate::orbit::MoonLayoutSettings;
use crate::picking::{begin_frame, detect_hover, HitRegistry, HoveredTarget};
use crate::time::advance_clock;

use self::background::{spawn_starfield, update_starfield, StarfieldSettings};
use self::belts::{spawn_belts, update_belts, BeltSettings};
use self::bodies::{spawn_overview, update_overview};
use self::focus::{sync_focus_entities, update_focus_scene};
use self::labels::{draw_scene_labels, LabelSettings};
use self::orbits::draw_overview_orbits;

/// Plugin aggregating all rendering functionality.
pub struct RenderPlugin;

impl Plugin for RenderPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<HitRegistry>()
            .init_resource::<HoveredTarget>()
            .init_resource::<MoonLayoutSettings>()
            .init_resource::<StarfieldSettings>()
            .init_resource::<BeltSettings>()
            .init_resource::<LabelSettings>()
            .add_systems(Startup, (spawn_starfield, spawn_belts, spawn_overview))
            // The per-frame contract, with explicit ordering:
            // 1. begin_frame - clear the hit registry
            // 2. advance_clock & tick_camera - settle simulation state
            // 3. draw systems - update transforms and register hit targets
            // 4. detect_hover - read the cursor against the fresh registry
            .add_systems(
                Update,
                (
                    begin_frame,
                    advance_clock,
                    tick_camera,
                    update_starfield,
                    update_belts,
                    draw_overview_orbits,
                    update_overview,
                    sync_focus_entities,
                    update_focus_scene,
                    detect_hover,
                )
                    .chain(),
            )
            // Text goes through the egui painter and must run in its pass.
            .add_systems(EguiPrimaryContextPass, draw_scene_labels);
    }
}

/// Z-layer constants for rendering order.
pub mod z_layers {
    /// Background elements (starfield).
    pub const BACKGROUND: f32 = 0.0;
    /// Belt scatter points and dust bands.
    pub const BELT: f32 = 1.0;
    /// Soft glows behind discs.
    pub const GLOW: f32 = 2.0;
    /// Body and moon discs.
    pub const BODY: f32 = 3.0;
    /// Mission pin glows.
    pub const PIN_GLOW: f32 = 4.0;
    /// Mission pin dots.
    pub const PIN: f32 = 5.0;
}
