//! Settings domain: the flat key space and its documented defaults.

use serde_json::Value;

/// Written alongside the defaults so a world is only seeded once.
pub const INITIALIZED_FLAG: &str = "MOVEMENT_TRICKS.INITIALIZED";

/// Value shape each key accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingKind {
    Bool,
    Number,
    Integer,
    Block,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SettingDefault {
    Bool(bool),
    Number(f64),
    Integer(i64),
    Block(&'static str),
}

impl SettingDefault {
    pub fn kind(&self) -> SettingKind {
        match self {
            SettingDefault::Bool(_) => SettingKind::Bool,
            SettingDefault::Number(_) => SettingKind::Number,
            SettingDefault::Integer(_) => SettingKind::Integer,
            SettingDefault::Block(_) => SettingKind::Block,
        }
    }

    pub fn to_value(&self) -> Value {
        match *self {
            SettingDefault::Bool(value) => Value::Bool(value),
            SettingDefault::Number(value) => Value::from(value),
            SettingDefault::Integer(value) => Value::from(value),
            SettingDefault::Block(value) => Value::from(value),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SettingKey {
    WallBounceEnabled,
    WallBounceCostFood,
    WallBounceRecoveryFood,
    WallBounceHorizontalMultiplier,
    WallBounceVerticalMultiplier,
    WallBounceWaitTicks,

    FastStraightEnabled,
    FastStraightCostFood,
    FastStraightRecoveryFood,
    FastStraightHorizontalMultiplier,
    FastStraightVerticalMultiplier,

    AirRefractionEnabled,
    AirRefractionMultiplier,
    AirRefractionAngle,
    AirRefractionWaitTicks,

    UpdraftEnabled,
    UpdraftBlock,
    UpdraftHorizontalMultiplier,
    UpdraftVerticalMultiplier,

    AirCurveEnabled,
    AirCurveBlock,
    AirCurveHorizontalMultiplier,
    AirCurveVerticalMultiplier,
    AirCurveResponseCount,
}

impl SettingKey {
    pub const ALL: [SettingKey; 24] = [
        SettingKey::WallBounceEnabled,
        SettingKey::WallBounceCostFood,
        SettingKey::WallBounceRecoveryFood,
        SettingKey::WallBounceHorizontalMultiplier,
        SettingKey::WallBounceVerticalMultiplier,
        SettingKey::WallBounceWaitTicks,
        SettingKey::FastStraightEnabled,
        SettingKey::FastStraightCostFood,
        SettingKey::FastStraightRecoveryFood,
        SettingKey::FastStraightHorizontalMultiplier,
        SettingKey::FastStraightVerticalMultiplier,
        SettingKey::AirRefractionEnabled,
        SettingKey::AirRefractionMultiplier,
        SettingKey::AirRefractionAngle,
        SettingKey::AirRefractionWaitTicks,
        SettingKey::UpdraftEnabled,
        SettingKey::UpdraftBlock,
        SettingKey::UpdraftHorizontalMultiplier,
        SettingKey::UpdraftVerticalMultiplier,
        SettingKey::AirCurveEnabled,
        SettingKey::AirCurveBlock,
        SettingKey::AirCurveHorizontalMultiplier,
        SettingKey::AirCurveVerticalMultiplier,
        SettingKey::AirCurveResponseCount,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SettingKey::WallBounceEnabled => "WALL_BOUNCE.ENABLED",
            SettingKey::WallBounceCostFood => "WALL_BOUNCE.COST_FOOD",
            SettingKey::WallBounceRecoveryFood => "WALL_BOUNCE.RECOVERY_FOOD",
            SettingKey::WallBounceHorizontalMultiplier => "WALL_BOUNCE.HORIZONTAL_MULTIPLIER",
            SettingKey::WallBounceVerticalMultiplier => "WALL_BOUNCE.VERTICAL_MULTIPLIER",
            SettingKey::WallBounceWaitTicks => "WALL_BOUNCE.WAIT_TICKS",

            SettingKey::FastStraightEnabled => "FAST_STRAIGHT.ENABLED",
            SettingKey::FastStraightCostFood => "FAST_STRAIGHT.COST_FOOD",
            SettingKey::FastStraightRecoveryFood => "FAST_STRAIGHT.RECOVERY_FOOD",
            SettingKey::FastStraightHorizontalMultiplier => "FAST_STRAIGHT.HORIZONTAL_MULTIPLIER",
            SettingKey::FastStraightVerticalMultiplier => "FAST_STRAIGHT.VERTICAL_MULTIPLIER",

            SettingKey::AirRefractionEnabled => "AIR_REFRACTION.ENABLED",
            SettingKey::AirRefractionMultiplier => "AIR_REFRACTION.MULTIPLIER",
            SettingKey::AirRefractionAngle => "AIR_REFRACTION.ANGLE",
            SettingKey::AirRefractionWaitTicks => "AIR_REFRACTION.WAIT_TICKS",

            SettingKey::UpdraftEnabled => "UPDRAFT.ENABLED",
            SettingKey::UpdraftBlock => "UPDRAFT.BLOCK",
            SettingKey::UpdraftHorizontalMultiplier => "UPDRAFT.HORIZONTAL_MULTIPLIER",
            SettingKey::UpdraftVerticalMultiplier => "UPDRAFT.VERTICAL_MULTIPLIER",

            SettingKey::AirCurveEnabled => "AIR_CURVE.ENABLED",
            SettingKey::AirCurveBlock => "AIR_CURVE.BLOCK",
            SettingKey::AirCurveHorizontalMultiplier => "AIR_CURVE.HORIZONTAL_MULTIPLIER",
            SettingKey::AirCurveVerticalMultiplier => "AIR_CURVE.VERTICAL_MULTIPLIER",
            SettingKey::AirCurveResponseCount => "AIR_CURVE.RESPONSE_COUNT",
        }
    }

    pub fn from_key(key: &str) -> Option<SettingKey> {
        SettingKey::ALL.into_iter().find(|k| k.as_str() == key)
    }

    pub fn default_value(self) -> SettingDefault {
        use SettingDefault::*;
        match self {
            SettingKey::WallBounceEnabled => Bool(true),
            SettingKey::WallBounceCostFood => Number(12.0),
            SettingKey::WallBounceRecoveryFood => Number(0.25),
            SettingKey::WallBounceHorizontalMultiplier => Number(1.825),
            SettingKey::WallBounceVerticalMultiplier => Number(0.775),
            SettingKey::WallBounceWaitTicks => Integer(5),

            SettingKey::FastStraightEnabled => Bool(true),
            SettingKey::FastStraightCostFood => Number(12.0),
            SettingKey::FastStraightRecoveryFood => Number(0.25),
            SettingKey::FastStraightHorizontalMultiplier => Number(2.575),
            SettingKey::FastStraightVerticalMultiplier => Number(0.585),

            SettingKey::AirRefractionEnabled => Bool(false),
            SettingKey::AirRefractionMultiplier => Number(1.45),
            SettingKey::AirRefractionAngle => Number(85.0),
            SettingKey::AirRefractionWaitTicks => Integer(7),

            SettingKey::UpdraftEnabled => Bool(true),
            SettingKey::UpdraftBlock => Block("emerald_block"),
            SettingKey::UpdraftHorizontalMultiplier => Number(0.5),
            SettingKey::UpdraftVerticalMultiplier => Number(1.3),

            SettingKey::AirCurveEnabled => Bool(true),
            SettingKey::AirCurveBlock => Block("diamond_block"),
            SettingKey::AirCurveHorizontalMultiplier => Number(1.2),
            SettingKey::AirCurveVerticalMultiplier => Number(0.15),
            SettingKey::AirCurveResponseCount => Integer(10),
        }
    }

    pub fn kind(self) -> SettingKind {
        self.default_value().kind()
    }
}
