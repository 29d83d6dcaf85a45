//! Deterministic orbital position model.
//!
//! Positions are a pure function of the catalog record and the simulated
//! clock: a fixed per-identifier phase (from the string hash) plus a
//! linear sweep of `clock / period` revolutions. No per-body mutable
//! state exists, so any position at any time is reproducible. This is a
//! stylised circular model, not an integrator.

use bevy::prelude::*;
use std::f64::consts::TAU;

use crate::rng::hash32;
use crate::types::{Body, Moon};

/// Cap for the overview moon-orbit compression, world units.
pub const MOON_ORBIT_CAP: f32 = 22.0;

/// Overview moon orbits are laid out at a third of the catalog radius
/// before compression.
pub const MOON_ORBIT_SHRINK: f32 = 3.0;

/// Base ring radius for the innermost moon in the focused frame.
pub const FOCUS_ORBIT_BASE: f32 = 5.0;

/// Catalog moon radii are doubled in the focused frame.
pub const FOCUS_ORBIT_SCALE: f32 = 2.0;

/// Moon sweep in the focused frame is slowed by this divisor so tight
/// orbits stay readable.
pub const FOCUS_RATE_DIVISOR: f64 = 70.0;

/// How moon orbits are laid out in the overview.
#[derive(Resource, Clone, Copy, Debug)]
pub struct MoonLayoutSettings {
    /// Apply the bounded compression so outlier orbits stay near the
    /// host. Disabling renders true (shrunk) radii.
    pub compress: bool,
    /// Upper bound the compression approaches, world units.
    pub cap: f32,
}

impl Default for MoonLayoutSettings {
    fn default() -> Self {
        Self {
            compress: true,
            cap: MOON_ORBIT_CAP,
        }
    }
}

/// Stable phase offset in radians for an identifier.
fn phase(key: &str) -> f64 {
    (hash32(key) % 360) as f64 * TAU / 360.0
}

/// Current angle of an orbiter with the given identity and period.
fn sweep(key: &str, period: f64, t_days: f64) -> f64 {
    phase(key) + (t_days / period) * TAU
}

/// Position and angle of a body about the system root at the given
/// simulated time. A body with zero orbit radius is the root and pins
/// to the origin.
pub fn body_position(body: &Body, t_days: f64) -> (Vec2, f32) {
    if body.orbit == 0.0 {
        return (Vec2::ZERO, 0.0);
    }
    let ang = sweep(body.id, body.period, t_days);
    (
        Vec2::new(
            (ang.cos() as f32) * body.orbit,
            (ang.sin() as f32) * body.orbit,
        ),
        ang as f32,
    )
}

/// Bounded orbit compression: monotonic, `r` for small radii, never
/// exceeding `cap`. Display-only; the catalog radius is untouched.
pub fn compress_orbit(r: f32, cap: f32) -> f32 {
    r / (1.0 + r / cap)
}

/// The overview layout radius of a moon's orbit around its host.
pub fn overview_moon_orbit(moon: &Moon, layout: &MoonLayoutSettings) -> f32 {
    let r = moon.orbit / MOON_ORBIT_SHRINK;
    if layout.compress {
        compress_orbit(r, layout.cap)
    } else {
        r
    }
}

/// Host-relative position of a moon in the overview. The caller adds the
/// host's current position to obtain world coordinates.
pub fn moon_position(
    host_id: &str,
    moon: &Moon,
    t_days: f64,
    layout: &MoonLayoutSettings,
) -> (Vec2, f32) {
    let ang = sweep(&format!("{host_id}|{}", moon.name), moon.period, t_days);
    let orbit = overview_moon_orbit(moon, layout);
    (
        Vec2::new((ang.cos() as f32) * orbit, (ang.sin() as f32) * orbit),
        ang as f32,
    )
}

/// Ring radius of the i-th moon in the focused frame, world units.
pub fn focus_moon_orbit(moon: &Moon) -> f32 {
    FOCUS_ORBIT_BASE + moon.orbit * FOCUS_ORBIT_SCALE
}

/// Position of a moon around the focused body (which sits at the world
/// origin in the focused frame). Sweep rate is slowed relative to the
/// overview.
pub fn focus_moon_position(host_id: &str, moon: &Moon, t_days: f64) -> Vec2 {
    let key = format!("{host_id}|{}", moon.name);
    let ang = phase(&key) + (t_days / moon.period) / FOCUS_RATE_DIVISOR * TAU;
    let orbit = focus_moon_orbit(moon);
    Vec2::new((ang.cos() as f32) * orbit, (ang.sin() as f32) * orbit)
}
