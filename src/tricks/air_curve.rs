//! Tricks domain: air curve, a gentle launch followed by a steerable glide.
//!
//! The steering task has no landing check. It runs for `response_count`
//! ticks or until the player is gone.

use bevy::prelude::*;

use crate::blocks::matches_trick_block;
use crate::settings::AirCurveSettings;
use crate::tricks::{TaskKind, TrickContext, TrickKind};

/// Forward speed divisor for the launch.
const LAUNCH_DAMPING: f32 = 15.0;

/// Launch vector: a slow push along the view plus a fixed upward component.
pub fn launch_motion(yaw: f32, pitch: f32, vertical_multiplier: f32) -> Vec3 {
    let yaw = yaw.to_radians();
    let pitch = pitch.to_radians();
    Vec3::new(
        -yaw.sin() * pitch.cos() / LAUNCH_DAMPING,
        vertical_multiplier,
        yaw.cos() * pitch.cos() / LAUNCH_DAMPING,
    )
}

pub fn evaluate(ctx: &mut TrickContext, settings: &AirCurveSettings) -> bool {
    if !settings.enabled {
        return false;
    }
    let Some(block) = ctx.block_below() else {
        return false;
    };
    if !matches_trick_block(block, &settings.block) {
        return false;
    }

    let motion = launch_motion(ctx.look.yaw, ctx.look.pitch, settings.vertical_multiplier);
    ctx.clear_velocity();
    ctx.impulse(motion);

    // One glide per player: a relaunch replaces the running steering task.
    ctx.scheduler.cancel_trick(ctx.player, TrickKind::AirCurve);
    if settings.response_count > 0 {
        ctx.schedule(
            TrickKind::AirCurve,
            TaskKind::AirCurveSteer {
                motion,
                horizontal_multiplier: settings.horizontal_multiplier,
                remaining: settings.response_count,
            },
        );
    }

    debug!("Air curve: player={}, motion={}", ctx.player, motion);
    true
}
