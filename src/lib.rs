//! Movement tricks for a voxel game, as Bevy plugins.
//!
//! The host adapter owns the player entities and the block world (see
//! [`host`]). [`MovementTricksPlugin`] adds per-trick settings, the fixed-tick
//! trick driver and its task scheduler on top.

pub mod blocks;
pub mod host;
pub mod settings;
pub mod tricks;

use bevy::prelude::*;

use crate::host::HostPlugin;
use crate::settings::SettingsPlugin;
use crate::tricks::TricksPlugin;

/// Fixed tick frequency the tricks run at.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct TickRate {
    pub hz: f64,
}

impl Default for TickRate {
    fn default() -> Self {
        Self { hz: 20.0 }
    }
}

#[derive(Debug, Default)]
pub struct MovementTricksPlugin {
    pub tick_rate: TickRate,
}

impl Plugin for MovementTricksPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.tick_rate)
            .insert_resource(Time::<Fixed>::from_hz(self.tick_rate.hz))
            .add_plugins((HostPlugin, SettingsPlugin, TricksPlugin));
    }
}
