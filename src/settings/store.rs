//! Settings domain: the world-scoped key-value store.
//!
//! Reads never fail: a missing key, or a value of the wrong shape, falls
//! back to the documented default for that key. Writes are validated
//! against the key's [`SettingKind`].

use std::collections::BTreeMap;

use bevy::prelude::*;
use serde_json::Value;

use super::error::SettingsError;
use super::keys::{INITIALIZED_FLAG, SettingDefault, SettingKey, SettingKind};

#[derive(Resource, Debug, Clone, Default)]
pub struct TrickSettingsStore {
    values: BTreeMap<String, Value>,
    /// Bumped on every accepted write.
    revision: u64,
}

impl TrickSettingsStore {
    /// Store with every key set to its default and the initialization flag
    /// raised.
    pub fn with_defaults() -> Self {
        let mut store = Self::default();
        store.reset_to_defaults();
        store
    }

    pub fn get(&self, key: SettingKey) -> Option<&Value> {
        self.values.get(key.as_str())
    }

    pub fn get_bool(&self, key: SettingKey) -> bool {
        self.get(key)
            .and_then(Value::as_bool)
            .unwrap_or_else(|| match key.default_value() {
                SettingDefault::Bool(value) => value,
                _ => false,
            })
    }

    pub fn get_number(&self, key: SettingKey) -> f64 {
        self.get(key)
            .and_then(Value::as_f64)
            .filter(|value| value.is_finite())
            .unwrap_or_else(|| match key.default_value() {
                SettingDefault::Number(value) => value,
                SettingDefault::Integer(value) => value as f64,
                _ => 0.0,
            })
    }

    pub fn get_integer(&self, key: SettingKey) -> i64 {
        self.get(key)
            .and_then(as_whole_number)
            .unwrap_or_else(|| match key.default_value() {
                SettingDefault::Integer(value) => value,
                SettingDefault::Number(value) => value as i64,
                _ => 0,
            })
    }

    pub fn get_block(&self, key: SettingKey) -> String {
        self.get(key)
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| match key.default_value() {
                SettingDefault::Block(value) => value.to_string(),
                _ => String::new(),
            })
    }

    /// Typed write. The value must match the key's kind.
    pub fn set(&mut self, key: SettingKey, value: Value) -> Result<(), SettingsError> {
        let value = validate(key, value)?;
        self.values.insert(key.as_str().to_string(), value);
        self.revision += 1;
        Ok(())
    }

    /// Typed write by key name, as read from a settings file.
    pub fn set_by_name(&mut self, name: &str, value: Value) -> Result<(), SettingsError> {
        if name == INITIALIZED_FLAG {
            let flag = value.as_bool().ok_or_else(|| SettingsError::InvalidBool {
                key: name.to_string(),
                raw: value.to_string(),
            })?;
            self.values.insert(INITIALIZED_FLAG.to_string(), Value::Bool(flag));
            self.revision += 1;
            return Ok(());
        }
        let key = SettingKey::from_key(name).ok_or_else(|| SettingsError::UnknownKey {
            key: name.to_string(),
        })?;
        self.set(key, value)
    }

    /// Write from a form text field. Parses `raw` according to the key's
    /// kind and rejects the write when it does not validate.
    pub fn set_from_text(&mut self, name: &str, raw: &str) -> Result<(), SettingsError> {
        let key = SettingKey::from_key(name).ok_or_else(|| SettingsError::UnknownKey {
            key: name.to_string(),
        })?;
        let value = parse_text(key, raw.trim())?;
        self.set(key, value)
    }

    pub fn remove(&mut self, key: SettingKey) -> Option<Value> {
        let removed = self.values.remove(key.as_str());
        if removed.is_some() {
            self.revision += 1;
        }
        removed
    }

    /// Rewrites every key with its default and raises the initialization
    /// flag.
    pub fn reset_to_defaults(&mut self) {
        for key in SettingKey::ALL {
            self.values
                .insert(key.as_str().to_string(), key.default_value().to_value());
        }
        self.values
            .insert(INITIALIZED_FLAG.to_string(), Value::Bool(true));
        self.revision += 1;
    }

    pub fn is_initialized(&self) -> bool {
        self.values
            .get(INITIALIZED_FLAG)
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }

    /// Seeds defaults for keys that have no value yet, once per world.
    /// Returns `true` when seeding happened.
    pub fn initialize(&mut self) -> bool {
        if self.is_initialized() {
            return false;
        }
        for key in SettingKey::ALL {
            self.values
                .entry(key.as_str().to_string())
                .or_insert_with(|| key.default_value().to_value());
        }
        self.values
            .insert(INITIALIZED_FLAG.to_string(), Value::Bool(true));
        self.revision += 1;
        true
    }

    /// Applies every entry, collecting rejections instead of stopping at the
    /// first one.
    pub fn apply_entries(
        &mut self,
        entries: impl IntoIterator<Item = (String, Value)>,
    ) -> Vec<SettingsError> {
        entries
            .into_iter()
            .filter_map(|(name, value)| self.set_by_name(&name, value).err())
            .collect()
    }

    /// Counter of accepted writes. Rejected writes leave it unchanged.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

fn as_whole_number(value: &Value) -> Option<i64> {
    value.as_i64().or_else(|| {
        value
            .as_f64()
            .filter(|number| number.is_finite() && number.fract() == 0.0)
            .map(|number| number as i64)
    })
}

/// Block ids may not contain digits, matching the settings form.
fn is_valid_block_id(raw: &str) -> bool {
    !raw.is_empty() && !raw.chars().any(|c| c.is_ascii_digit())
}

fn validate(key: SettingKey, value: Value) -> Result<Value, SettingsError> {
    let name = key.as_str().to_string();
    match key.kind() {
        SettingKind::Bool => match value {
            Value::Bool(_) => Ok(value),
            other => Err(SettingsError::InvalidBool {
                key: name,
                raw: other.to_string(),
            }),
        },
        SettingKind::Number => match value.as_f64() {
            Some(number) if number.is_finite() => Ok(value),
            _ => Err(SettingsError::InvalidNumber {
                key: name,
                raw: value.to_string(),
            }),
        },
        SettingKind::Integer => match as_whole_number(&value) {
            Some(number) => Ok(Value::from(number)),
            None => Err(SettingsError::InvalidInteger {
                key: name,
                raw: value.to_string(),
            }),
        },
        SettingKind::Block => match value.as_str() {
            Some(block) if is_valid_block_id(block.trim()) => Ok(Value::from(block.trim())),
            _ => Err(SettingsError::InvalidBlock {
                key: name,
                raw: value.to_string(),
            }),
        },
    }
}

fn parse_text(key: SettingKey, raw: &str) -> Result<Value, SettingsError> {
    let name = key.as_str().to_string();
    match key.kind() {
        SettingKind::Bool => match raw {
            "true" => Ok(Value::Bool(true)),
            "false" => Ok(Value::Bool(false)),
            _ => Err(SettingsError::InvalidBool {
                key: name,
                raw: raw.to_string(),
            }),
        },
        SettingKind::Number => match raw.parse::<f64>() {
            Ok(number) if number.is_finite() => Ok(Value::from(number)),
            _ => Err(SettingsError::InvalidNumber {
                key: name,
                raw: raw.to_string(),
            }),
        },
        SettingKind::Integer => {
            let parsed = raw.parse::<i64>().ok().or_else(|| {
                raw.parse::<f64>()
                    .ok()
                    .filter(|number| number.is_finite() && number.fract() == 0.0)
                    .map(|number| number as i64)
            });
            parsed.map(Value::from).ok_or(SettingsError::InvalidInteger {
                key: name,
                raw: raw.to_string(),
            })
        }
        SettingKind::Block => Ok(Value::from(raw)),
    }
}
