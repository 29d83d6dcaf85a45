//! Modal mission detail card.
//!
//! Opened by clicking a pin or a list entry; dismissed by the close
//! button, a click outside the card, or Escape (handled in input).
//! Scene clicks are suppressed while the card is open.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::catalog::Catalog;
use crate::types::Mission;
use crate::ui::{colors, icons};
use crate::view::CardState;

/// Render the mission detail card when one is open.
pub fn mission_card_system(
    mut contexts: EguiContexts,
    catalog: Res<Catalog>,
    mut card: ResMut<CardState>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };
    let Some(index) = card.open else {
        return;
    };
    let Some(mission) = catalog.missions.get(index) else {
        // Dangling index: close rather than crash the frame.
        card.open = None;
        return;
    };

    // Dimmed backdrop behind the card.
    egui::Area::new(egui::Id::new("card_backdrop"))
        .fixed_pos(egui::pos2(0.0, 0.0))
        .order(egui::Order::Middle)
        .show(ctx, |ui| {
            ui.painter().rect_filled(
                ctx.screen_rect(),
                0.0,
                egui::Color32::from_rgba_unmultiplied(0, 0, 0, 140),
            );
        });

    let mut close = false;
    egui::Window::new("mission_card")
        .title_bar(false)
        .resizable(false)
        .collapsible(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, -20.0))
        .order(egui::Order::Foreground)
        .frame(
            egui::Frame::NONE
                .fill(colors::PANEL_BG)
                .inner_margin(16)
                .stroke(egui::Stroke::new(1.0, colors::PANEL_BORDER))
                .corner_radius(6),
        )
        .show(ctx, |ui| {
            ui.set_max_width(340.0);
            render_card_contents(ui, mission, &mut close);
        });

    // A click that lands on neither the card nor another panel closes it.
    let clicked_outside =
        ctx.input(|i| i.pointer.any_click()) && !ctx.is_pointer_over_area();
    if close || clicked_outside {
        card.open = None;
    }
}

fn render_card_contents(ui: &mut egui::Ui, mission: &Mission, close: &mut bool) {
    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new(mission.name)
                .strong()
                .size(18.0)
                .color(colors::TEXT),
        );
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.small_button(icons::CLOSE).clicked() {
                *close = true;
            }
        });
    });
    ui.label(
        egui::RichText::new(mission.kind)
            .size(13.0)
            .color(colors::TEXT_DIM),
    );

    ui.separator();

    let location = match mission.target {
        Some(target) => format!("{} \u{2022} {}", target, mission.system),
        None => mission.system.to_string(),
    };
    detail_row(ui, icons::MISSION, "Status", mission.status);
    detail_row(ui, icons::TARGET, "Location", &location);
    detail_row(ui, icons::CLOCK, "Launched", mission.launched);
    detail_row(ui, icons::MISSION, "Operator", mission.operator);

    ui.separator();
    ui.label(
        egui::RichText::new(mission.description)
            .size(13.0)
            .color(colors::TEXT),
    );
}

fn detail_row(ui: &mut egui::Ui, icon: &str, label: &str, value: &str) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(icon).size(13.0).color(colors::ACCENT));
        ui.label(
            egui::RichText::new(format!("{label}:"))
                .size(13.0)
                .color(colors::TEXT_DIM),
        );
        ui.label(egui::RichText::new(value).size(13.0).color(colors::TEXT));
    });
}
