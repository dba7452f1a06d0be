//! Host domain: tests for player components, block lookup and velocity.

use bevy::prelude::*;

use super::velocity::{apply_impulse, apply_knockback, clear_velocity};
use super::{BlockState, Hunger, LookRotation, MAX_HUNGER, PlayerStatus, VoxelWorld};

fn assert_vec3_near(actual: Vec3, expected: Vec3) {
    assert!(
        (actual - expected).length() < 1e-5,
        "expected {expected:?}, got {actual:?}"
    );
}

// -----------------------------------------------------------------------------
// Hunger tests
// -----------------------------------------------------------------------------

#[test]
fn test_hunger_defaults_to_full() {
    let hunger = Hunger::default();
    assert_eq!(hunger.value(), MAX_HUNGER);
    assert!(hunger.is_full());
}

#[test]
fn test_hunger_clamps_writes() {
    let mut hunger = Hunger::new(25.0);
    assert_eq!(hunger.value(), 20.0);

    hunger.set(-3.0);
    assert_eq!(hunger.value(), 0.0);

    hunger.add(7.5);
    assert_eq!(hunger.value(), 7.5);

    hunger.add(100.0);
    assert_eq!(hunger.value(), 20.0);

    hunger.set(f32::NAN);
    assert_eq!(hunger.value(), 0.0);
}

// -----------------------------------------------------------------------------
// LookRotation tests
// -----------------------------------------------------------------------------

#[test]
fn test_look_direction_cardinals() {
    assert_vec3_near(LookRotation::new(0.0, 0.0).direction(), Vec3::Z);
    assert_vec3_near(LookRotation::new(0.0, 90.0).direction(), Vec3::NEG_X);
    assert_vec3_near(LookRotation::new(0.0, 180.0).direction(), Vec3::NEG_Z);
    assert_vec3_near(LookRotation::new(0.0, -90.0).direction(), Vec3::X);
}

#[test]
fn test_look_direction_pitch() {
    assert_vec3_near(LookRotation::new(90.0, 0.0).direction(), Vec3::NEG_Y);
    assert_vec3_near(LookRotation::new(-90.0, 0.0).direction(), Vec3::Y);

    let dir = LookRotation::new(37.0, 123.0).direction();
    assert!((dir.length() - 1.0).abs() < 1e-5);
}

#[test]
fn test_flat_forward_ignores_pitch() {
    let look = LookRotation::new(60.0, 90.0);
    assert_vec3_near(look.flat_forward(), Vec3::NEG_X);
}

#[test]
fn test_airborne_sneaking() {
    let status = PlayerStatus {
        on_ground: false,
        sneaking: true,
    };
    assert!(status.airborne_sneaking());

    let grounded = PlayerStatus {
        on_ground: true,
        sneaking: true,
    };
    assert!(!grounded.airborne_sneaking());

    let standing = PlayerStatus::default();
    assert!(!standing.airborne_sneaking());
}

// -----------------------------------------------------------------------------
// VoxelWorld tests
// -----------------------------------------------------------------------------

#[test]
fn test_block_coord_floors_negative_positions() {
    assert_eq!(
        VoxelWorld::block_coord(Vec3::new(-0.2, 1.7, 3.0)),
        IVec3::new(-1, 1, 3)
    );
}

#[test]
fn test_block_lookup() {
    let mut world = VoxelWorld::default();
    assert!(world.is_empty());

    world.set_block(IVec3::new(0, 0, 1), BlockState::solid("minecraft:stone"));
    let block = world.block_at(Vec3::new(0.5, 0.9, 1.2)).unwrap();
    assert_eq!(block.type_id, "minecraft:stone");
    assert!(world.block_at(Vec3::new(0.5, 1.1, 1.2)).is_none());

    let removed = world.remove_block(IVec3::new(0, 0, 1));
    assert!(removed.is_some());
    assert!(world.is_empty());
}

#[test]
fn test_fill_is_inclusive() {
    let mut world = VoxelWorld::default();
    world.fill(
        IVec3::new(1, 0, 1),
        IVec3::new(-1, 0, -1),
        &BlockState::solid("minecraft:stone"),
    );
    assert_eq!(world.len(), 9);
    assert!(world.block(IVec3::new(-1, 0, 1)).is_some());
}

// -----------------------------------------------------------------------------
// Velocity primitive tests
// -----------------------------------------------------------------------------

#[test]
fn test_impulse_adds_and_clear_resets() {
    let mut velocity = Vec3::new(0.1, -0.5, 0.2);
    apply_impulse(&mut velocity, Vec3::new(1.0, 1.0, 1.0));
    assert_vec3_near(velocity, Vec3::new(1.1, 0.5, 1.2));

    clear_velocity(&mut velocity);
    assert_eq!(velocity, Vec3::ZERO);
}

#[test]
fn test_knockback_replaces_velocity() {
    let mut velocity = Vec3::new(3.0, -2.0, 3.0);
    apply_knockback(&mut velocity, Vec2::new(0.5, -0.25), 0.775);
    assert_vec3_near(velocity, Vec3::new(0.5, 0.775, -0.25));
}
