//! Mission list panel on the right edge.
//!
//! Shows the focused system's missions; clicking an entry opens its
//! detail card. In the overview the panel only carries a hint.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::catalog::Catalog;
use crate::ui::{colors, icons};
use crate::view::{CardState, ViewState};

/// Render the mission list panel.
pub fn mission_list_panel(
    mut contexts: EguiContexts,
    view: Res<ViewState>,
    catalog: Res<Catalog>,
    mut card: ResMut<CardState>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::SidePanel::right("mission_list")
        .exact_width(260.0)
        .resizable(false)
        .frame(
            egui::Frame::NONE
                .fill(colors::PANEL_BG)
                .inner_margin(egui::Margin::symmetric(14, 12)),
        )
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(icons::MISSION).size(16.0).color(colors::ACCENT));
                ui.label(
                    egui::RichText::new("Missions")
                        .strong()
                        .size(15.0)
                        .color(colors::TEXT),
                );
            });
            ui.separator();

            if view.missions.is_empty() {
                let hint = if view.is_focused() {
                    "No active missions in this system."
                } else {
                    "Select a planet to see missions."
                };
                ui.label(egui::RichText::new(hint).size(13.0).color(colors::TEXT_DIM));
                return;
            }

            for fm in &view.missions {
                let Some(mission) = catalog.missions.get(fm.mission) else {
                    continue;
                };

                let response = ui
                    .scope(|ui| {
                        ui.horizontal(|ui| {
                            ui.label(
                                egui::RichText::new(mission.name)
                                    .strong()
                                    .size(13.0)
                                    .color(colors::TEXT),
                            );
                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Center),
                                |ui| {
                                    ui.label(
                                        egui::RichText::new(mission.id)
                                            .monospace()
                                            .size(11.0)
                                            .color(colors::TEXT_DIM),
                                    );
                                },
                            );
                        });
                        ui.label(
                            egui::RichText::new(format!(
                                "{} \u{2022} Target: {}",
                                mission.status,
                                mission.target.unwrap_or(mission.system)
                            ))
                            .size(12.0)
                            .color(colors::TEXT_DIM),
                        );
                    })
                    .response;

                if response.interact(egui::Sense::click()).clicked() {
                    card.open = Some(fm.mission);
                }
                ui.separator();
            }
        });
}
