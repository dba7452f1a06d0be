//! Settings domain: startup seeding, configuration commands and write-back.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use super::events::TrickSettingsCommand;
use super::loader::{SettingsSource, load_settings_file, save_settings_file};
use super::store::TrickSettingsStore;

/// Store revision last written to (or seeded from) the settings file.
#[derive(Resource, Debug, Default)]
pub(crate) struct PersistedRevision(u64);

pub(crate) fn initialize_settings(
    source: Res<SettingsSource>,
    mut store: ResMut<TrickSettingsStore>,
    mut persisted: ResMut<PersistedRevision>,
) {
    if let Some(path) = source.path.as_deref() {
        if path.exists() {
            match load_settings_file(path) {
                Ok(entries) => {
                    let total = entries.len();
                    let rejected = store.apply_entries(entries);
                    for error in &rejected {
                        warn!("Rejected setting in {}: {}", path.display(), error);
                    }
                    info!(
                        "Loaded {} of {} trick settings from {}",
                        total - rejected.len(),
                        total,
                        path.display()
                    );
                }
                Err(error) => warn!("{}", error),
            }
        } else {
            debug!("No trick settings file at {}", path.display());
        }
    }

    if store.initialize() {
        info!("Seeded movement trick settings with defaults");
    }
    persisted.0 = store.revision();
}

pub(crate) fn apply_setting_commands(
    mut requests: MessageReader<TrickSettingsCommand>,
    mut store: ResMut<TrickSettingsStore>,
) {
    for request in requests.read() {
        match request {
            TrickSettingsCommand::Reset => {
                store.reset_to_defaults();
                info!("Movement trick settings reset to defaults");
            }
            TrickSettingsCommand::Set { key, raw } => {
                // Rejected edits must not mark the store changed.
                match store.bypass_change_detection().set_from_text(key, raw) {
                    Ok(()) => {
                        store.set_changed();
                        info!("Setting {} = {}", key, raw.trim());
                    }
                    Err(error) => warn!("Rejected setting update: {}", error),
                }
            }
        }
    }
}

/// Writes the store back to its source file after an accepted runtime write.
pub(crate) fn persist_settings(
    source: Res<SettingsSource>,
    store: Res<TrickSettingsStore>,
    mut persisted: ResMut<PersistedRevision>,
) {
    if store.revision() == persisted.0 {
        return;
    }
    persisted.0 = store.revision();
    let Some(path) = source.path.as_deref() else {
        return;
    };
    match save_settings_file(path, &store) {
        Ok(()) => debug!("Saved {} trick settings to {}", store.len(), path.display()),
        Err(error) => warn!("{}", error),
    }
}
