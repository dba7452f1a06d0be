//! Tricks domain: the per-player view every evaluator works against.

use bevy::prelude::*;

use crate::host::velocity::{apply_impulse, apply_knockback, clear_velocity};
use crate::host::{BlockState, Hunger, LookRotation, PlayerStatus, VoxelWorld};
use crate::tricks::{TaskId, TaskKind, TrickKind, TrickScheduler, TrickState};

/// How far below the feet the standing block is sampled.
const STANDING_PROBE_DEPTH: f32 = 0.5;

pub struct TrickContext<'a> {
    pub player: Entity,
    pub status: PlayerStatus,
    pub look: LookRotation,
    /// Feet position.
    pub position: Vec3,
    pub hunger: &'a mut Hunger,
    pub velocity: &'a mut Vec3,
    pub state: &'a mut TrickState,
    pub world: &'a VoxelWorld,
    pub scheduler: &'a mut TrickScheduler,
}

impl<'a> TrickContext<'a> {
    /// Block `distance` ahead along the yaw and `height` above the feet.
    pub fn block_ahead(&self, distance: f32, height: f32) -> Option<&'a BlockState> {
        let world: &'a VoxelWorld = self.world;
        let probe = self.position + self.look.flat_forward() * distance + Vec3::Y * height;
        world.block_at(probe)
    }

    /// Block the player is standing on.
    pub fn block_below(&self) -> Option<&'a BlockState> {
        let world: &'a VoxelWorld = self.world;
        world.block_at(self.position - Vec3::Y * STANDING_PROBE_DEPTH)
    }

    /// Normalized view vector.
    pub fn look_direction(&self) -> Vec3 {
        self.look.direction().normalize_or_zero()
    }

    pub fn can_afford(&self, cost: f32) -> bool {
        self.hunger.value() >= cost
    }

    pub fn spend_hunger(&mut self, cost: f32) {
        self.hunger.add(-cost);
    }

    pub fn knockback(&mut self, horizontal: Vec2, vertical: f32) {
        apply_knockback(self.velocity, horizontal, vertical);
    }

    pub fn impulse(&mut self, impulse: Vec3) {
        apply_impulse(self.velocity, impulse);
    }

    pub fn clear_velocity(&mut self) {
        clear_velocity(self.velocity);
    }

    pub fn schedule(&mut self, trick: TrickKind, kind: TaskKind) -> TaskId {
        self.scheduler.schedule(self.player, trick, kind)
    }

    /// Starts a hunger refill loop unless there is nothing to refill with.
    pub fn schedule_recovery(&mut self, trick: TrickKind, per_tick: f32) {
        if per_tick > 0.0 {
            self.schedule(trick, TaskKind::HungerRecovery { per_tick });
        }
    }
}
