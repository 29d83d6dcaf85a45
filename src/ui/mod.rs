//! UI module providing the egui-based chrome around the scene.
//!
//! The scene core holds no UI text; everything here reads the view
//! state, clock, and transition events and renders panels, the dock,
//! the mission detail card, and toast notifications.

mod dock;
mod hud;
mod mission_card;
mod mission_list;

pub mod icons;
pub mod toast;

use bevy::prelude::*;
use bevy_egui::{EguiPlugin, EguiPrimaryContextPass};

pub use toast::Toasts;

/// Plugin that adds all UI systems.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin::default())
            .init_resource::<icons::FontsInitialized>()
            .init_resource::<Toasts>()
            .add_systems(Startup, toast::startup_tip)
            .add_systems(Update, (toast::tick_toasts, toast::view_change_toasts))
            // Font initialization MUST run before any UI systems that use icons
            .add_systems(EguiPrimaryContextPass, icons::setup_fonts)
            .add_systems(
                EguiPrimaryContextPass,
                (
                    hud::hud_overlay,
                    mission_list::mission_list_panel,
                    dock::dock_system,
                    mission_card::mission_card_system,
                    toast::toast_overlay,
                )
                    .after(icons::setup_fonts)
                    .run_if(|init: Res<icons::FontsInitialized>| init.0),
            );
    }
}

/// Shared chrome colors.
pub(crate) mod colors {
    use bevy_egui::egui::Color32;

    pub const PANEL_BG: Color32 = Color32::from_rgba_premultiplied(26, 26, 36, 240);
    pub const PANEL_BORDER: Color32 = Color32::from_rgb(60, 60, 80);
    pub const TEXT: Color32 = Color32::from_rgb(220, 220, 230);
    pub const TEXT_DIM: Color32 = Color32::from_rgb(150, 150, 165);
    pub const ACCENT: Color32 = Color32::from_rgb(255, 10, 107);
    pub const PLAY_ICON: Color32 = Color32::from_rgb(85, 221, 136);
    pub const PAUSE_ICON: Color32 = Color32::from_rgb(221, 170, 85);
    pub const SPEED_ACTIVE: Color32 = Color32::from_rgb(85, 221, 136);
    pub const SPEED_INACTIVE: Color32 = Color32::from_rgb(120, 120, 130);
}
