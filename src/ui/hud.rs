//! Mode and hint overlay in the top-left corner.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::catalog::Catalog;
use crate::ui::colors;
use crate::view::{ViewMode, ViewState};

/// How many moon names to spell out in the focused hint line.
const MOON_HINT_LIMIT: usize = 5;

/// Title and subtitle for the current view.
pub fn hud_lines(view: &ViewState, catalog: &Catalog) -> (String, String) {
    match view.mode {
        ViewMode::Overview => (
            "Solar System".to_string(),
            "Click a planet to zoom. Click a mission pin to view details.".to_string(),
        ),
        ViewMode::Focused => {
            let Some(body) = view.focus.and_then(|i| catalog.bodies.get(i)) else {
                return ("Unknown System".to_string(), String::new());
            };
            let sub = if body.moons.is_empty() {
                "No moons in this system. Missions (if any) appear near the planet.".to_string()
            } else {
                let names: Vec<&str> = body.moons.iter().map(|m| m.name).collect();
                let shown = &names[..names.len().min(MOON_HINT_LIMIT)];
                let more = if names.len() > shown.len() {
                    format!(" +{} more", names.len() - shown.len())
                } else {
                    String::new()
                };
                format!(
                    "Moons: {}{}. Click a mission pin to view details.",
                    shown.join(", "),
                    more
                )
            };
            (body.id.to_string(), sub)
        }
    }
}

/// Render the HUD overlay.
pub fn hud_overlay(mut contexts: EguiContexts, view: Res<ViewState>, catalog: Res<Catalog>) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };
    let (title, sub) = hud_lines(&view, &catalog);

    egui::Area::new(egui::Id::new("hud"))
        .fixed_pos(egui::pos2(16.0, 14.0))
        .order(egui::Order::Middle)
        .show(ctx, |ui| {
            ui.label(
                egui::RichText::new(title)
                    .size(20.0)
                    .strong()
                    .color(colors::TEXT),
            );
            ui.label(egui::RichText::new(sub).size(13.0).color(colors::TEXT_DIM));
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overview_lines() {
        let catalog = Catalog::default();
        let view = ViewState::default();
        let (title, sub) = hud_lines(&view, &catalog);
        assert_eq!(title, "Solar System");
        assert!(sub.starts_with("Click a planet"));
    }

    #[test]
    fn test_focused_lines_list_moons() {
        let catalog = Catalog::default();
        let view = ViewState {
            mode: ViewMode::Focused,
            focus: catalog.body_index("Saturn"),
            missions: Vec::new(),
        };
        let (title, sub) = hud_lines(&view, &catalog);
        assert_eq!(title, "Saturn");
        // Saturn has eight moons in the catalog; five are spelled out.
        assert!(sub.contains("Mimas"));
        assert!(sub.contains("+3 more"));
    }

    #[test]
    fn test_focused_lines_without_moons() {
        let catalog = Catalog::default();
        let view = ViewState {
            mode: ViewMode::Focused,
            focus: catalog.body_index("Venus"),
            missions: Vec::new(),
        };
        let (_, sub) = hud_lines(&view, &catalog);
        assert!(sub.starts_with("No moons"));
    }
}
