//! Tricks domain: per-player trick state.

use bevy::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TrickKind {
    WallBounce,
    FastStraight,
    AirRefraction,
    Updraft,
    AirCurve,
}

impl TrickKind {
    /// Order the tick driver evaluates tricks in, for every player.
    pub const EVALUATION_ORDER: [TrickKind; 5] = [
        TrickKind::WallBounce,
        TrickKind::AirRefraction,
        TrickKind::FastStraight,
        TrickKind::Updraft,
        TrickKind::AirCurve,
    ];

    pub fn name(self) -> &'static str {
        match self {
            TrickKind::WallBounce => "wall bounce",
            TrickKind::FastStraight => "fast straight",
            TrickKind::AirRefraction => "air refraction",
            TrickKind::Updraft => "updraft",
            TrickKind::AirCurve => "air curve",
        }
    }
}

/// Flags cleared by a delayed cooldown task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CooldownFlag {
    WallBounce,
    Updraft,
}

/// Per-session trick flags. Inserted fresh whenever `TrickPlayer` is added.
#[derive(Component, Debug, Clone, Default, PartialEq)]
pub struct TrickState {
    pub wall_bounce_active: bool,
    pub fast_straight_active: bool,
    /// Held from a fast-straight launch until landing, even after an air
    /// refraction ends the flight early.
    pub fast_straight_airborne: bool,
    pub air_refraction_pending: bool,
    /// Only meaningful while `fast_straight_active` is set.
    pub air_refraction_wait_ticks: i32,
    /// Yaw in degrees at the last fast-straight launch.
    pub initial_yaw: f32,
    pub updraft_cooling: bool,
}

impl TrickState {
    pub fn clear_cooldown(&mut self, flag: CooldownFlag) {
        match flag {
            CooldownFlag::WallBounce => self.wall_bounce_active = false,
            CooldownFlag::Updraft => self.updraft_cooling = false,
        }
    }

    /// Ends a fast-straight flight on landing.
    pub fn land(&mut self) {
        self.fast_straight_active = false;
        self.fast_straight_airborne = false;
        self.air_refraction_pending = false;
    }

    pub fn any_active(&self) -> bool {
        self.wall_bounce_active
            || self.fast_straight_active
            || self.fast_straight_airborne
            || self.air_refraction_pending
            || self.updraft_cooling
    }
}
