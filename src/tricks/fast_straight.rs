//! Tricks domain: fast straight, a sneak-jump dash off the block underfoot.
//!
//! The flight task it schedules is the only link to air refraction: it
//! counts down `air_refraction_wait_ticks` while airborne and ends the
//! flight on landing.

use bevy::prelude::*;

use crate::blocks::can_handle;
use crate::settings::FastStraightSettings;
use crate::tricks::{TaskKind, TrickContext, TrickKind};

/// Probe depth below the feet.
pub const PROBE_DEPTH: f32 = 0.2;
const FRONT_FOOT_REACH: f32 = 0.55;
const BACK_FOOT_REACH: f32 = 0.4275;

/// Probe distance ahead of the feet for a given yaw. Diagonal strafing
/// lands the front foot further out than the back foot.
pub fn probe_reach(yaw: f32) -> f32 {
    if yaw < 15.0 || yaw > 200.0 {
        FRONT_FOOT_REACH
    } else {
        BACK_FOOT_REACH
    }
}

pub fn evaluate(ctx: &mut TrickContext, settings: &FastStraightSettings) -> bool {
    if !settings.enabled || !ctx.can_afford(settings.cost_food) {
        return false;
    }
    if ctx.state.wall_bounce_active {
        return false;
    }
    if ctx.state.fast_straight_active || ctx.state.fast_straight_airborne {
        return false;
    }
    if !ctx.status.airborne_sneaking() {
        return false;
    }

    let Some(block) = ctx.block_ahead(probe_reach(ctx.look.yaw), -PROBE_DEPTH) else {
        return false;
    };
    if !can_handle(block) {
        return false;
    }

    let dir = ctx.look_direction();
    ctx.knockback(
        Vec2::new(
            dir.x * settings.horizontal_multiplier,
            dir.z * settings.horizontal_multiplier,
        ),
        settings.vertical_multiplier,
    );

    ctx.state.initial_yaw = ctx.look.yaw;
    ctx.state.air_refraction_wait_ticks = settings.air_refraction_wait_ticks;
    ctx.state.air_refraction_pending = false;
    ctx.state.fast_straight_active = true;
    ctx.state.fast_straight_airborne = true;

    ctx.spend_hunger(settings.cost_food);
    ctx.schedule(TrickKind::FastStraight, TaskKind::FastStraightFlight);
    ctx.schedule_recovery(TrickKind::FastStraight, settings.recovery_food);

    debug!(
        "Fast straight: player={}, anchor={}, yaw={}, hunger={}",
        ctx.player,
        block.type_id,
        ctx.look.yaw,
        ctx.hunger.value()
    );
    true
}
