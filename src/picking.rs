//! Per-frame hit-test registry for pointer picking.
//!
//! Draw systems register circular screen-space targets in paint order;
//! picking walks the list backwards so the topmost (last drawn) target
//! wins on overlap. The registry is cleared at the start of every frame
//! and entries must never be retained across frames.

use bevy::{prelude::*, window::PrimaryWindow};

/// What a hit target resolves to. Carries the catalog index where one
/// applies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HitKind {
    /// The system root. Registered for hover feedback; clicks on it are
    /// not routed anywhere.
    Star,
    /// A primary body, by catalog index.
    Planet(usize),
    /// A mission pin, by catalog index.
    Mission(usize),
}

/// A registered screen-space pick circle, valid for one frame.
#[derive(Clone, Debug)]
pub struct HitTarget {
    pub kind: HitKind,
    pub id: &'static str,
    pub pos: Vec2,
    pub radius: f32,
}

/// Frame-scoped list of interactive targets. O(n) queries; n is tens.
#[derive(Resource, Default, Debug)]
pub struct HitRegistry {
    targets: Vec<HitTarget>,
}

impl HitRegistry {
    pub fn clear(&mut self) {
        self.targets.clear();
    }

    pub fn register(&mut self, kind: HitKind, id: &'static str, pos: Vec2, radius: f32) {
        self.targets.push(HitTarget {
            kind,
            id,
            pos,
            radius,
        });
    }

    /// Topmost target containing the point, if any.
    pub fn pick(&self, point: Vec2) -> Option<&HitTarget> {
        self.targets
            .iter()
            .rev()
            .find(|t| point.distance_squared(t.pos) <= t.radius * t.radius)
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

/// Resource tracking the target currently under the cursor.
#[derive(Resource, Default, Debug)]
pub struct HoveredTarget(pub Option<HitTarget>);

/// Clear the registry before any draw system runs.
pub fn begin_frame(mut registry: ResMut<HitRegistry>) {
    registry.clear();
}

/// Resolve the cursor against the targets registered this frame.
/// Runs after all draw systems.
pub fn detect_hover(
    window_query: Query<&Window, With<PrimaryWindow>>,
    registry: Res<HitRegistry>,
    mut hovered: ResMut<HoveredTarget>,
) {
    let Ok(window) = window_query.single() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        hovered.0 = None;
        return;
    };
    hovered.0 = registry.pick(cursor).cloned();
}
