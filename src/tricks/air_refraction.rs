//! Tricks domain: air refraction, a one-shot redirect during a fast
//! straight flight.

use bevy::prelude::*;

use crate::settings::AirRefractionSettings;
use crate::tricks::TrickContext;

/// Absolute difference between two yaws, folded into `0..=180`.
pub fn yaw_difference(from: f32, to: f32) -> f32 {
    let diff = (from - to).abs() % 360.0;
    if diff > 180.0 { 360.0 - diff } else { diff }
}

pub fn evaluate(ctx: &mut TrickContext, settings: &AirRefractionSettings) -> bool {
    if !settings.enabled || !ctx.state.fast_straight_active || ctx.status.on_ground {
        return false;
    }

    ctx.state.air_refraction_pending = true;

    if ctx.state.air_refraction_wait_ticks > 0 {
        return false;
    }
    let turned = yaw_difference(ctx.state.initial_yaw, ctx.look.yaw);
    if turned < settings.angle {
        return false;
    }

    let dir = ctx.look_direction();
    ctx.impulse(Vec3::new(
        dir.x * settings.multiplier,
        0.0,
        dir.z * settings.multiplier,
    ));

    ctx.state.fast_straight_active = false;
    ctx.state.air_refraction_pending = false;

    debug!(
        "Air refraction: player={}, turned={}",
        ctx.player, turned
    );
    true
}
