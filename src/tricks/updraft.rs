//! Tricks domain: updraft, a launch from the configured updraft block.

use bevy::prelude::*;

use crate::blocks::matches_trick_block;
use crate::settings::UpdraftSettings;
use crate::tricks::{CooldownFlag, TaskKind, TrickContext, TrickKind};

pub const COOLDOWN_TICKS: u32 = 5;

pub fn evaluate(ctx: &mut TrickContext, settings: &UpdraftSettings) -> bool {
    if !settings.enabled || ctx.state.updraft_cooling {
        return false;
    }
    let Some(block) = ctx.block_below() else {
        return false;
    };
    if !matches_trick_block(block, &settings.block) {
        return false;
    }

    ctx.state.updraft_cooling = true;

    let dir = ctx.look_direction();
    let boost = Vec3::new(
        dir.x * settings.horizontal_multiplier,
        settings.vertical_multiplier,
        dir.z * settings.horizontal_multiplier,
    );
    ctx.clear_velocity();
    ctx.impulse(boost);

    ctx.schedule(
        TrickKind::Updraft,
        TaskKind::Cooldown {
            flag: CooldownFlag::Updraft,
            remaining: COOLDOWN_TICKS,
        },
    );

    debug!("Updraft: player={}, boost={}", ctx.player, boost);
    true
}
