//! Host domain: per-player components written by the host adapter.

use bevy::prelude::*;

/// Upper bound of the hunger bar.
pub const MAX_HUNGER: f32 = 20.0;

/// Marker for player entities the trick layer evaluates every tick.
#[derive(Component, Debug, Default)]
pub struct TrickPlayer;

/// Input and contact state sampled by the host once per tick.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq)]
pub struct PlayerStatus {
    pub on_ground: bool,
    /// Crouch intent (sneak key held).
    pub sneaking: bool,
}

impl PlayerStatus {
    pub fn airborne_sneaking(&self) -> bool {
        !self.on_ground && self.sneaking
    }
}

/// Head rotation in degrees, in the host's convention: yaw 0 faces +Z and
/// turns toward -X as it grows, positive pitch looks down.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq)]
pub struct LookRotation {
    pub pitch: f32,
    pub yaw: f32,
}

impl LookRotation {
    pub fn new(pitch: f32, yaw: f32) -> Self {
        Self { pitch, yaw }
    }

    /// Unit view vector.
    pub fn direction(&self) -> Vec3 {
        let yaw = self.yaw.to_radians();
        let pitch = self.pitch.to_radians();
        Vec3::new(
            -yaw.sin() * pitch.cos(),
            -pitch.sin(),
            yaw.cos() * pitch.cos(),
        )
    }

    /// Unit vector along the yaw on the horizontal plane, ignoring pitch.
    pub fn flat_forward(&self) -> Vec3 {
        let yaw = self.yaw.to_radians();
        Vec3::new(-yaw.sin(), 0.0, yaw.cos())
    }
}

/// Hunger bar, always kept within `0..=MAX_HUNGER`.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Hunger(f32);

impl Default for Hunger {
    fn default() -> Self {
        Self(MAX_HUNGER)
    }
}

impl Hunger {
    pub fn new(value: f32) -> Self {
        let mut hunger = Self(0.0);
        hunger.set(value);
        hunger
    }

    pub fn value(&self) -> f32 {
        self.0
    }

    pub fn set(&mut self, value: f32) {
        self.0 = if value.is_nan() {
            0.0
        } else {
            value.clamp(0.0, MAX_HUNGER)
        };
    }

    pub fn add(&mut self, amount: f32) {
        self.set(self.0 + amount);
    }

    pub fn is_full(&self) -> bool {
        self.0 >= MAX_HUNGER
    }
}
