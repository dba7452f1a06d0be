//! Host domain: state the voxel-game host exposes to the trick layer.
//!
//! The host adapter owns these components and resources. It refreshes
//! `PlayerStatus`, `LookRotation`, `Transform` and the block world before
//! each fixed tick, and reads back `Hunger` and `LinearVelocity` after it.

mod components;
#[cfg(test)]
mod tests;
pub mod velocity;
mod world;

pub use components::{Hunger, LookRotation, MAX_HUNGER, PlayerStatus, TrickPlayer};
pub use world::{BlockState, VoxelWorld};

use bevy::prelude::*;

pub struct HostPlugin;

impl Plugin for HostPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<VoxelWorld>();
    }
}
