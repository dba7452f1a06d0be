//! Settings domain: seeding the store from a RON file at startup.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use bevy::prelude::*;
use ron::Options;
use ron::ser::PrettyConfig;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::SettingsError;
use super::store::TrickSettingsStore;

/// Where startup reads persisted settings from. `None` keeps the store
/// purely in memory.
#[derive(Resource, Debug, Clone, Default)]
pub struct SettingsSource {
    pub path: Option<PathBuf>,
}

impl SettingsSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }
}

fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// On-disk shape of a settings file: `(settings: { "<TRICK>.<PARAMETER>": value })`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SettingsFile {
    #[serde(default)]
    pub settings: BTreeMap<String, Value>,
}

pub fn parse_settings(path: &Path, contents: &str) -> Result<BTreeMap<String, Value>, SettingsError> {
    let file: SettingsFile = ron_options()
        .from_str(contents)
        .map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(file.settings)
}

pub fn load_settings_file(path: &Path) -> Result<BTreeMap<String, Value>, SettingsError> {
    let contents = fs::read_to_string(path).map_err(|source| SettingsError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_settings(path, &contents)
}

/// Writes every stored entry, including the initialization flag.
pub fn save_settings_file(path: &Path, store: &TrickSettingsStore) -> Result<(), SettingsError> {
    let file = SettingsFile {
        settings: store
            .iter()
            .map(|(key, value)| (key.to_string(), value.clone()))
            .collect(),
    };
    let contents = ron_options()
        .to_string_pretty(&file, PrettyConfig::default())
        .map_err(|source| SettingsError::Encode {
            path: path.to_path_buf(),
            source,
        })?;
    fs::write(path, contents).map_err(|source| SettingsError::Io {
        path: path.to_path_buf(),
        source,
    })
}
