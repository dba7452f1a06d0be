//! Host domain: velocity primitives the tricks drive.
//!
//! These mirror the host's entity API and operate on the raw velocity
//! vector, in the host's units (blocks per tick).

use bevy::prelude::*;

pub fn clear_velocity(velocity: &mut Vec3) {
    *velocity = Vec3::ZERO;
}

/// Adds `impulse` on all three axes.
pub fn apply_impulse(velocity: &mut Vec3, impulse: Vec3) {
    *velocity += impulse;
}

/// Replaces horizontal velocity with `horizontal` (x, z) and vertical
/// velocity with `vertical`.
pub fn apply_knockback(velocity: &mut Vec3, horizontal: Vec2, vertical: f32) {
    velocity.x = horizontal.x;
    velocity.y = vertical;
    velocity.z = horizontal.y;
}
