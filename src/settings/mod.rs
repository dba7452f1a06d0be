//! Settings domain: per-trick tunables in a flat, world-scoped key space.

mod error;
mod events;
mod keys;
mod loader;
mod records;
mod store;
mod systems;

pub use error::SettingsError;
pub use events::TrickSettingsCommand;
pub use keys::{INITIALIZED_FLAG, SettingDefault, SettingKey, SettingKind};
pub use loader::{
    SettingsFile, SettingsSource, load_settings_file, parse_settings, save_settings_file,
};
pub use records::{
    AirCurveSettings, AirRefractionSettings, FastStraightSettings, TrickSettings,
    UpdraftSettings, WallBounceSettings,
};
pub use store::TrickSettingsStore;

use bevy::prelude::*;

use crate::settings::systems::{
    PersistedRevision, apply_setting_commands, initialize_settings, persist_settings,
};

pub struct SettingsPlugin;

impl Plugin for SettingsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TrickSettingsStore>()
            .init_resource::<SettingsSource>()
            .init_resource::<PersistedRevision>()
            .add_message::<TrickSettingsCommand>()
            .add_systems(Startup, initialize_settings)
            .add_systems(Update, (apply_setting_commands, persist_settings).chain());
    }
}
