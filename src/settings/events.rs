//! Settings domain: messages sent by the configuration UI.

use bevy::ecs::message::Message;

/// One configuration UI action. Commands are applied in the order sent.
#[derive(Debug, Clone, PartialEq)]
pub enum TrickSettingsCommand {
    /// A text-field edit for one setting key.
    Set { key: String, raw: String },
    /// Rewrites every setting with its default.
    Reset,
}

impl TrickSettingsCommand {
    pub fn set(key: impl Into<String>, raw: impl Into<String>) -> Self {
        Self::Set {
            key: key.into(),
            raw: raw.into(),
        }
    }
}

impl Message for TrickSettingsCommand {}
