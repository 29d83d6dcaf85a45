//! Simulated clock advancement.

use bevy::prelude::*;

use crate::types::SimClock;

/// Plugin advancing the simulated clock.
pub struct TimePlugin;

impl Plugin for TimePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SimClock>();
    }
}

/// Advance simulated time based on scale and pause state.
///
/// The scale is simulated days per real-world second; zero freezes the
/// clock even while unpaused. The clock never moves backwards.
pub fn advance_clock(mut clock: ResMut<SimClock>, time: Res<Time>) {
    if clock.paused {
        return;
    }
    clock.t_days += time.delta_secs_f64() * clock.time_scale;
}
