//! Toast notifications with a timed fade.
//!
//! Short confirmations for view transitions and clock toggles, shown
//! bottom-center above the dock. A new toast replaces the current one.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::catalog::Catalog;
use crate::ui::colors;
use crate::view::{TransitionCause, ViewChanged};

/// How long a toast stays up, seconds.
const TOAST_SECS: f32 = 1.8;

/// Fade-out window at the end of the toast's life, seconds.
const TOAST_FADE_SECS: f32 = 0.3;

/// Resource holding the active toast, if any.
#[derive(Resource, Default)]
pub struct Toasts {
    text: String,
    remaining: f32,
}

impl Toasts {
    /// Show a message, replacing any current toast.
    pub fn show(&mut self, message: impl Into<String>) {
        self.text = message.into();
        self.remaining = TOAST_SECS;
    }

    /// Current opacity: 1 while showing, easing to 0 over the fade
    /// window, 0 when expired.
    pub fn opacity(&self) -> f32 {
        (self.remaining / TOAST_FADE_SECS).clamp(0.0, 1.0)
    }

    pub fn is_visible(&self) -> bool {
        self.remaining > 0.0
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Count the active toast down.
pub fn tick_toasts(time: Res<Time>, mut toasts: ResMut<Toasts>) {
    if toasts.remaining > 0.0 {
        toasts.remaining = (toasts.remaining - time.delta_secs()).max(0.0);
    }
}

/// One-time hint after startup.
pub fn startup_tip(mut toasts: ResMut<Toasts>) {
    toasts.show("Tip: Click Earth to see the Moon mission demo.");
}

/// Announce view transitions.
pub fn view_change_toasts(
    mut events: MessageReader<ViewChanged>,
    catalog: Res<Catalog>,
    mut toasts: ResMut<Toasts>,
) {
    for event in events.read() {
        match event.cause {
            TransitionCause::Focus => {
                if let Some(body) = event.focus.and_then(|i| catalog.bodies.get(i)) {
                    toasts.show(format!("Zoomed to {}", body.id));
                }
            }
            TransitionCause::Back => toasts.show("Back to Solar System"),
            TransitionCause::Reset => toasts.show("View reset"),
        }
    }
}

/// Render the active toast.
pub fn toast_overlay(mut contexts: EguiContexts, toasts: Res<Toasts>) {
    if !toasts.is_visible() {
        return;
    }
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let alpha = toasts.opacity();
    let screen = ctx.screen_rect();
    egui::Area::new(egui::Id::new("toast"))
        .fixed_pos(egui::pos2(screen.center().x - 120.0, screen.bottom() - 110.0))
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            egui::Frame::NONE
                .fill(colors::PANEL_BG.gamma_multiply(alpha))
                .inner_margin(egui::Margin::symmetric(14, 8))
                .stroke(egui::Stroke::new(
                    1.0,
                    colors::PANEL_BORDER.gamma_multiply(alpha),
                ))
                .corner_radius(4)
                .show(ui, |ui| {
                    ui.set_min_width(212.0);
                    ui.label(
                        egui::RichText::new(toasts.text())
                            .size(13.0)
                            .color(colors::TEXT.gamma_multiply(alpha)),
                    );
                });
        });
}
