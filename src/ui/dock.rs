//! Unified dock (bottom bar) for the primary controls.
//!
//! Play/pause, the simulated-day readout, the speed row (including the
//! 0x freeze), and back/reset buttons. Everything routes through the
//! same clock fields and view requests the keyboard shortcuts use.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::types::{SimClock, TIME_SCALE_PRESETS};
use crate::ui::{colors, icons, Toasts};
use crate::view::{BackRequest, ResetRequest, ViewState};

const DOCK_HEIGHT: f32 = 56.0;

/// System that renders the unified dock at the bottom.
pub fn dock_system(
    mut contexts: EguiContexts,
    mut clock: ResMut<SimClock>,
    view: Res<ViewState>,
    mut back_events: MessageWriter<BackRequest>,
    mut reset_events: MessageWriter<ResetRequest>,
    mut toasts: ResMut<Toasts>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::TopBottomPanel::bottom("dock")
        .exact_height(DOCK_HEIGHT)
        .frame(
            egui::Frame::NONE
                .fill(colors::PANEL_BG)
                .inner_margin(egui::Margin::symmetric(20, 10)),
        )
        .show(ctx, |ui| {
            ui.horizontal_centered(|ui| {
                ui.spacing_mut().item_spacing.x = 16.0;

                render_play_pause(ui, &mut clock, &mut toasts);

                ui.separator();

                ui.label(
                    egui::RichText::new(format!("Day {}", clock.t_days.floor() as i64))
                        .monospace()
                        .size(14.0)
                        .color(colors::TEXT),
                );

                ui.separator();

                render_speed_row(ui, &mut clock);

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.spacing_mut().item_spacing.x = 10.0;

                    render_reset_button(ui, &mut reset_events);
                    render_back_button(ui, &view, &mut back_events);
                });
            });
        });
}

/// Render the play/pause toggle button.
fn render_play_pause(ui: &mut egui::Ui, clock: &mut SimClock, toasts: &mut Toasts) {
    let (icon, color, tooltip) = if clock.paused {
        (icons::PLAY, colors::PLAY_ICON, "Resume (Space)")
    } else {
        (icons::PAUSE, colors::PAUSE_ICON, "Pause (Space)")
    };

    let button = egui::Button::new(egui::RichText::new(icon).size(22.0).color(color))
        .min_size(egui::vec2(40.0, 36.0));

    if ui.add(button).on_hover_text(tooltip).clicked() {
        clock.paused = !clock.paused;
        toasts.show(if clock.paused { "Paused" } else { "Resumed" });
    }
}

/// Render the speed preset row. 0x freezes time without pausing.
fn render_speed_row(ui: &mut egui::Ui, clock: &mut SimClock) {
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 4.0;
        for (i, &speed) in TIME_SCALE_PRESETS.iter().enumerate() {
            let is_active = (clock.time_scale - speed).abs() < 0.01;
            let color = if is_active {
                colors::SPEED_ACTIVE
            } else {
                colors::SPEED_INACTIVE
            };

            let label = format!("{}\u{d7}", speed as i64);
            let text = if is_active {
                egui::RichText::new(label).size(14.0).color(color).strong()
            } else {
                egui::RichText::new(label).size(14.0).color(color)
            };

            let tooltip = if speed == 0.0 {
                "0\u{d7} freezes time. Space pauses/resumes.".to_string()
            } else {
                format!("{}\u{d7} speed (press {})", speed as i64, i + 1)
            };

            if ui
                .add(
                    egui::Button::new(text)
                        .frame(is_active)
                        .min_size(egui::vec2(40.0, 28.0)),
                )
                .on_hover_text(tooltip)
                .clicked()
            {
                clock.time_scale = speed;
            }
        }
    });
}

/// Render the back-to-overview button; disabled in the overview.
fn render_back_button(
    ui: &mut egui::Ui,
    view: &ViewState,
    back_events: &mut MessageWriter<BackRequest>,
) {
    let button = egui::Button::new(egui::RichText::new(icons::BACK).size(18.0))
        .min_size(egui::vec2(36.0, 32.0));

    if ui
        .add_enabled(view.is_focused(), button)
        .on_hover_text("Back to Solar System (B)")
        .clicked()
    {
        back_events.write(BackRequest);
    }
}

/// Render the reset button.
fn render_reset_button(ui: &mut egui::Ui, reset_events: &mut MessageWriter<ResetRequest>) {
    let button = egui::Button::new(egui::RichText::new(icons::RESET).size(18.0))
        .min_size(egui::vec2(36.0, 32.0));

    if ui.add(button).on_hover_text("Reset view (R)").clicked() {
        reset_events.write(ResetRequest);
    }
}
