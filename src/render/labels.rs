//! Scene text labels using egui for rendering.
//!
//! Names for bodies, moons, and mission pins, positioned off their
//! disc's current screen position with a drop shadow for readability.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::camera::SceneCamera;
use crate::catalog::Catalog;
use crate::orbit::{body_position, focus_moon_position, moon_position, MoonLayoutSettings};
use crate::render::bodies::{body_disc_radius, moon_disc_radius, moon_fade};
use crate::render::focus::{focus_moon_disc_radius, pin_anchor_screen};
use crate::types::SimClock;
use crate::view::{ViewMode, ViewState};

/// Settings for label rendering.
#[derive(Resource)]
pub struct LabelSettings {
    /// Whether labels are visible.
    pub visible: bool,
    /// Minimum zoom before overview moon labels appear.
    pub moon_label_zoom: f32,
}

impl Default for LabelSettings {
    fn default() -> Self {
        Self {
            visible: true,
            moon_label_zoom: 1.25,
        }
    }
}

fn shadowed_text(
    painter: &egui::Painter,
    pos: egui::Pos2,
    text: &str,
    size: f32,
    color: egui::Color32,
) {
    let font = egui::FontId::proportional(size);
    painter.text(
        pos + egui::vec2(1.0, 1.0),
        egui::Align2::LEFT_CENTER,
        text,
        font.clone(),
        egui::Color32::from_rgba_unmultiplied(0, 0, 0, 180),
    );
    painter.text(pos, egui::Align2::LEFT_CENTER, text, font, color);
}

fn white(alpha: f32) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(255, 255, 255, (alpha * 255.0) as u8)
}

/// Draw all scene labels for the current view mode.
#[allow(clippy::too_many_arguments)]
pub fn draw_scene_labels(
    mut contexts: EguiContexts,
    settings: Res<LabelSettings>,
    camera: Res<SceneCamera>,
    catalog: Res<Catalog>,
    view: Res<ViewState>,
    clock: Res<SimClock>,
    layout: Res<MoonLayoutSettings>,
) {
    if !settings.visible {
        return;
    }
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let zoom = camera.zoom;
    let t = clock.t_days;

    egui::Area::new(egui::Id::new("scene_labels"))
        .fixed_pos(egui::pos2(0.0, 0.0))
        .order(egui::Order::Background)
        .show(ctx, |ui| {
            let painter = ui.painter();

            if view.mode == ViewMode::Overview {
                let fade = moon_fade(zoom);
                for body in &catalog.bodies {
                    let (pos, _) = body_position(body, t);
                    let screen = camera.world_to_screen(pos);
                    let radius = body_disc_radius(body.size, zoom);
                    shadowed_text(
                        painter,
                        egui::pos2(screen.x + radius + 8.0, screen.y),
                        body.id,
                        12.0,
                        white(0.75),
                    );

                    if zoom < settings.moon_label_zoom || fade <= 0.02 {
                        continue;
                    }
                    for moon in &body.moons {
                        let (rel, _) = moon_position(body.id, moon, t, &layout);
                        let ms = camera.world_to_screen(pos + rel);
                        let mr = moon_disc_radius(moon.size, zoom);
                        shadowed_text(
                            painter,
                            egui::pos2(ms.x + mr + 6.0, ms.y),
                            moon.name,
                            11.0,
                            white(0.65 * fade),
                        );
                    }
                }
                return;
            }

            let Some(body) = view.focus.and_then(|i| catalog.bodies.get(i)) else {
                return;
            };
            let center = camera.world_to_screen(Vec2::ZERO);
            shadowed_text(
                painter,
                egui::pos2(center.x + 22.0, center.y),
                body.id,
                16.0,
                white(0.82),
            );

            if body.moons.is_empty() {
                shadowed_text(
                    painter,
                    egui::pos2(center.x - 85.0, center.y + 48.0),
                    "This planet has no moons.",
                    13.0,
                    white(0.62),
                );
            }
            for moon in &body.moons {
                let ms = camera.world_to_screen(focus_moon_position(body.id, moon, t));
                let mr = focus_moon_disc_radius(moon.size);
                shadowed_text(
                    painter,
                    egui::pos2(ms.x + mr + 8.0, ms.y),
                    moon.name,
                    12.0,
                    white(0.70),
                );
            }

            for fm in &view.missions {
                let Some(mission) = catalog.missions.get(fm.mission) else {
                    continue;
                };
                let anchor = pin_anchor_screen(&camera, body, &fm.pin.anchor, t);
                let offset = Vec2::new(fm.pin.angle.cos(), fm.pin.angle.sin()) * fm.pin.dist;
                let pin = anchor + offset;
                shadowed_text(
                    painter,
                    egui::pos2(pin.x + 10.0, pin.y - 8.0),
                    mission.id,
                    12.0,
                    white(0.78),
                );
            }
        });
}
