//! Orrery - Live Mission Tracker
//!
//! A desktop application rendering an animated map of the solar system
//! with pan/zoom navigation, per-body focus views, and mission pins.

use bevy::prelude::*;

mod camera;
mod catalog;
mod input;
mod orbit;
mod picking;
mod render;
mod rng;
mod time;
mod types;
mod ui;
mod view;

use camera::CameraPlugin;
use catalog::{Catalog, MoonCatalogMode};
use input::InputPlugin;
use render::RenderPlugin;
use time::TimePlugin;
use ui::UiPlugin;
use view::ViewPlugin;

fn main() {
    let moon_mode = MoonCatalogMode::default();

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Orrery — Live Mission Tracker".into(),
                ..default()
            }),
            ..default()
        }))
        // Insert resources before plugins that depend on them
        .insert_resource(moon_mode)
        .insert_resource(Catalog::build(moon_mode))
        .add_systems(Startup, catalog::report_catalog_issues)
        // Add scene plugins
        .add_plugins((
            CameraPlugin,
            TimePlugin,
            ViewPlugin,
            RenderPlugin,
            InputPlugin,
            UiPlugin,
        ))
        .run();
}
