//! Core data types and constants for the mission tracker scene.

use bevy::prelude::*;

/// Default simulated days advanced per real-time second.
pub const DEFAULT_TIME_SCALE: f64 = 10.0;

/// Time scale presets offered by the dock and the number keys.
/// 0 freezes the clock without pausing the render loop.
pub const TIME_SCALE_PRESETS: [f64; 4] = [0.0, 1.0, 10.0, 100.0];

/// Classification of a primary body in the catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BodyKind {
    /// Clickable primary orbiting body (includes belt regions).
    Planet,
    /// Dwarf-classed body; rendered and clickable like a planet.
    Dwarf,
}

/// A secondary body orbiting its host. Immutable after catalog load.
#[derive(Clone, Debug)]
pub struct Moon {
    pub name: &'static str,
    /// Orbit radius relative to the host, world units.
    pub orbit: f32,
    /// Orbital period in simulated days.
    pub period: f64,
    /// Visual size hint (world units at zoom 1).
    pub size: f32,
    pub color: Color,
}

/// A primary body orbiting the system root. Immutable after catalog load.
///
/// Orbit radii are stylised layout units, not to scale; the root entity
/// uses `orbit == 0` and sits at the world origin.
#[derive(Clone, Debug)]
pub struct Body {
    pub id: &'static str,
    pub kind: BodyKind,
    /// Orbit radius about the origin, world units. Zero for the root.
    pub orbit: f32,
    /// Visual size hint (world units at zoom 1).
    pub size: f32,
    /// Orbital period in simulated days.
    pub period: f64,
    pub color: Color,
    pub moons: Vec<Moon>,
}

impl Body {
    /// Find a moon by name.
    pub fn moon(&self, name: &str) -> Option<&Moon> {
        self.moons.iter().find(|m| m.name == name)
    }
}

/// An annotation pinned to a body (and optionally one of its moons).
/// Immutable input; the scene derives a transient [`PinPlacement`] when
/// the body is focused.
#[derive(Clone, Debug)]
pub struct Mission {
    pub id: &'static str,
    pub name: &'static str,
    /// Body id this mission belongs to.
    pub system: &'static str,
    /// Moon name (or body id) the mission targets, if any.
    pub target: Option<&'static str>,
    pub status: &'static str,
    pub kind: &'static str,
    pub launched: &'static str,
    pub operator: &'static str,
    pub description: &'static str,
}

/// What a mission pin is anchored to in the focused frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PinAnchor {
    /// Offset from the focused body's screen position.
    Body,
    /// Offset from the named moon's screen position.
    Moon(&'static str),
}

/// Derived pin offset, computed once per focus transition from a seed of
/// `(mission id, body id)`. Stable across repeated focussings of the same
/// body, independent across missions.
#[derive(Clone, Debug)]
pub struct PinPlacement {
    pub anchor: PinAnchor,
    /// Angular offset in radians.
    pub angle: f32,
    /// Radial distance from the anchor, screen pixels.
    pub dist: f32,
}

/// Simulated clock resource. Monotonically increasing unless paused or
/// frozen by a zero time scale.
#[derive(Resource, Clone, Debug)]
pub struct SimClock {
    /// Elapsed simulated time in days.
    pub t_days: f64,
    /// Simulated days per real-time second. Zero freezes the clock
    /// independently of `paused`.
    pub time_scale: f64,
    pub paused: bool,
}

impl Default for SimClock {
    fn default() -> Self {
        Self {
            t_days: 0.0,
            time_scale: DEFAULT_TIME_SCALE,
            paused: false,
        }
    }
}
