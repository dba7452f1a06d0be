//! Settings domain: typed per-trick views over the store.
//!
//! Evaluators fetch these fresh every tick; nothing here is cached across
//! ticks, so edits made between ticks apply on the next one.

use super::keys::SettingKey;
use super::store::TrickSettingsStore;

#[derive(Debug, Clone, PartialEq)]
pub struct WallBounceSettings {
    pub enabled: bool,
    pub cost_food: f32,
    pub recovery_food: f32,
    pub horizontal_multiplier: f32,
    pub vertical_multiplier: f32,
    pub wait_ticks: u32,
}

impl WallBounceSettings {
    pub fn fetch(store: &TrickSettingsStore) -> Self {
        Self {
            enabled: store.get_bool(SettingKey::WallBounceEnabled),
            cost_food: store.get_number(SettingKey::WallBounceCostFood) as f32,
            recovery_food: store.get_number(SettingKey::WallBounceRecoveryFood) as f32,
            horizontal_multiplier: store.get_number(SettingKey::WallBounceHorizontalMultiplier)
                as f32,
            vertical_multiplier: store.get_number(SettingKey::WallBounceVerticalMultiplier) as f32,
            wait_ticks: ticks(store.get_integer(SettingKey::WallBounceWaitTicks)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FastStraightSettings {
    pub enabled: bool,
    pub cost_food: f32,
    pub recovery_food: f32,
    pub horizontal_multiplier: f32,
    pub vertical_multiplier: f32,
    /// Countdown handed to air refraction at launch.
    pub air_refraction_wait_ticks: i32,
}

impl FastStraightSettings {
    pub fn fetch(store: &TrickSettingsStore) -> Self {
        Self {
            enabled: store.get_bool(SettingKey::FastStraightEnabled),
            cost_food: store.get_number(SettingKey::FastStraightCostFood) as f32,
            recovery_food: store.get_number(SettingKey::FastStraightRecoveryFood) as f32,
            horizontal_multiplier: store.get_number(SettingKey::FastStraightHorizontalMultiplier)
                as f32,
            vertical_multiplier: store.get_number(SettingKey::FastStraightVerticalMultiplier)
                as f32,
            air_refraction_wait_ticks: store
                .get_integer(SettingKey::AirRefractionWaitTicks)
                .clamp(i32::MIN as i64, i32::MAX as i64) as i32,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AirRefractionSettings {
    pub enabled: bool,
    pub multiplier: f32,
    /// Minimum yaw change in degrees since launch.
    pub angle: f32,
}

impl AirRefractionSettings {
    pub fn fetch(store: &TrickSettingsStore) -> Self {
        Self {
            enabled: store.get_bool(SettingKey::AirRefractionEnabled),
            multiplier: store.get_number(SettingKey::AirRefractionMultiplier) as f32,
            angle: store.get_number(SettingKey::AirRefractionAngle) as f32,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdraftSettings {
    pub enabled: bool,
    pub block: String,
    pub horizontal_multiplier: f32,
    pub vertical_multiplier: f32,
}

impl UpdraftSettings {
    pub fn fetch(store: &TrickSettingsStore) -> Self {
        Self {
            enabled: store.get_bool(SettingKey::UpdraftEnabled),
            block: store.get_block(SettingKey::UpdraftBlock),
            horizontal_multiplier: store.get_number(SettingKey::UpdraftHorizontalMultiplier)
                as f32,
            vertical_multiplier: store.get_number(SettingKey::UpdraftVerticalMultiplier) as f32,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AirCurveSettings {
    pub enabled: bool,
    pub block: String,
    pub horizontal_multiplier: f32,
    pub vertical_multiplier: f32,
    /// Number of steering ticks after launch.
    pub response_count: u32,
}

impl AirCurveSettings {
    pub fn fetch(store: &TrickSettingsStore) -> Self {
        Self {
            enabled: store.get_bool(SettingKey::AirCurveEnabled),
            block: store.get_block(SettingKey::AirCurveBlock),
            horizontal_multiplier: store.get_number(SettingKey::AirCurveHorizontalMultiplier)
                as f32,
            vertical_multiplier: store.get_number(SettingKey::AirCurveVerticalMultiplier) as f32,
            response_count: ticks(store.get_integer(SettingKey::AirCurveResponseCount)),
        }
    }
}

/// All five trick records, fetched together once per tick.
#[derive(Debug, Clone, PartialEq)]
pub struct TrickSettings {
    pub wall_bounce: WallBounceSettings,
    pub fast_straight: FastStraightSettings,
    pub air_refraction: AirRefractionSettings,
    pub updraft: UpdraftSettings,
    pub air_curve: AirCurveSettings,
}

impl TrickSettings {
    pub fn fetch(store: &TrickSettingsStore) -> Self {
        Self {
            wall_bounce: WallBounceSettings::fetch(store),
            fast_straight: FastStraightSettings::fetch(store),
            air_refraction: AirRefractionSettings::fetch(store),
            updraft: UpdraftSettings::fetch(store),
            air_curve: AirCurveSettings::fetch(store),
        }
    }
}

impl Default for TrickSettings {
    fn default() -> Self {
        Self::fetch(&TrickSettingsStore::default())
    }
}

/// Negative tick counts behave as zero.
fn ticks(value: i64) -> u32 {
    value.clamp(0, u32::MAX as i64) as u32
}
