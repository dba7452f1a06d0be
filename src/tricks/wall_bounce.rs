//! Tricks domain: wall bounce, a sneak-jump off a wall in front.
//!
//! Idle -> Launched -> CoolingDown -> Idle. The cooldown task clears
//! `wall_bounce_active` after `wait_ticks`; hunger recovery runs as its own
//! task and may finish before or after the cooldown.

use bevy::prelude::*;

use crate::blocks::can_handle;
use crate::settings::WallBounceSettings;
use crate::tricks::{CooldownFlag, TaskKind, TrickContext, TrickKind};

/// Probe distance ahead of the feet, along the yaw.
pub const PROBE_DISTANCE: f32 = 0.45;
/// Probe height above the feet.
pub const PROBE_HEIGHT: f32 = 0.7;

pub fn evaluate(ctx: &mut TrickContext, settings: &WallBounceSettings) -> bool {
    if !settings.enabled || !ctx.can_afford(settings.cost_food) {
        return false;
    }
    if ctx.state.wall_bounce_active || ctx.state.fast_straight_active {
        return false;
    }
    if !ctx.status.airborne_sneaking() {
        return false;
    }

    let Some(block) = ctx.block_ahead(PROBE_DISTANCE, PROBE_HEIGHT) else {
        return false;
    };
    if !can_handle(block) {
        return false;
    }

    let back = -ctx.look_direction();
    ctx.knockback(
        Vec2::new(
            back.x * settings.horizontal_multiplier,
            back.z * settings.horizontal_multiplier,
        ),
        settings.vertical_multiplier,
    );
    ctx.spend_hunger(settings.cost_food);
    ctx.state.wall_bounce_active = true;

    ctx.schedule(
        TrickKind::WallBounce,
        TaskKind::Cooldown {
            flag: CooldownFlag::WallBounce,
            remaining: settings.wait_ticks.max(1),
        },
    );
    ctx.schedule_recovery(TrickKind::WallBounce, settings.recovery_food);

    debug!(
        "Wall bounce: player={}, anchor={}, hunger={}",
        ctx.player,
        block.type_id,
        ctx.hunger.value()
    );
    true
}
