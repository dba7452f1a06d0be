//! Blocks domain: tests for the anchor classifier and trick block matching.

use super::{
    block_from_type_id, can_handle, can_handle_type_id, is_glass, local_name, matches_trick_block,
    qualified,
};
use crate::host::BlockState;

// -----------------------------------------------------------------------------
// Classifier tests
// -----------------------------------------------------------------------------

#[test]
fn test_classifier_reference_blocks() {
    assert!(!can_handle_type_id("minecraft:ladder"));
    assert!(can_handle_type_id("minecraft:oak_leaves"));
    assert!(!can_handle_type_id("minecraft:air"));
    assert!(can_handle_type_id("minecraft:stone"));
    assert!(can_handle_type_id("minecraft:glass_pane"));
}

#[test]
fn test_glass_variants() {
    assert!(is_glass("minecraft:glass"));
    assert!(is_glass("minecraft:tinted_glass"));
    assert!(is_glass("minecraft:red_stained_glass_pane"));
    assert!(!is_glass("minecraft:glass_bottle_rack"));
}

#[test]
fn test_shapes_win_over_non_solid_flag() {
    for type_id in [
        "minecraft:oak_stairs",
        "minecraft:stone_slab",
        "minecraft:birch_fence",
        "minecraft:cobblestone_wall",
        "minecraft:iron_door",
        "minecraft:azalea_leaves",
        "minecraft:glass",
    ] {
        assert!(
            can_handle(&BlockState::non_solid(type_id)),
            "{type_id} should anchor"
        );
    }
}

#[test]
fn test_climbables_are_rejected_even_when_solid() {
    assert!(!can_handle(&BlockState::solid("minecraft:ladder")));
    assert!(!can_handle(&BlockState::solid("minecraft:vine")));
    assert!(!can_handle(&BlockState::solid("vine")));
}

#[test]
fn test_air_liquid_and_passable_blocks_are_rejected() {
    assert!(!can_handle(&BlockState::air()));
    assert!(!can_handle(&BlockState::liquid("minecraft:water")));
    assert!(!can_handle(&BlockState::non_solid("minecraft:torch")));
    assert!(!can_handle_type_id("minecraft:lava"));
    assert!(!can_handle_type_id("minecraft:cave_air"));
}

#[test]
fn test_block_from_type_id_flags() {
    let air = block_from_type_id("minecraft:void_air");
    assert!(air.is_air);
    assert_eq!(air.type_id, "minecraft:void_air");

    let water = block_from_type_id("water");
    assert!(water.is_liquid);

    let stone = block_from_type_id("minecraft:stone");
    assert!(stone.is_solid);
}

// -----------------------------------------------------------------------------
// Namespace and trick block tests
// -----------------------------------------------------------------------------

#[test]
fn test_namespace_helpers() {
    assert_eq!(local_name("minecraft:oak_leaves"), "oak_leaves");
    assert_eq!(local_name("oak_leaves"), "oak_leaves");
    assert_eq!(qualified("emerald_block"), "minecraft:emerald_block");
    assert_eq!(qualified("mymod:jump_pad"), "mymod:jump_pad");
}

#[test]
fn test_trick_block_matching_normalises_namespace() {
    let emerald = BlockState::solid("minecraft:emerald_block");
    assert!(matches_trick_block(&emerald, "emerald_block"));
    assert!(matches_trick_block(&emerald, "minecraft:emerald_block"));
    assert!(matches_trick_block(&emerald, " emerald_block "));
    assert!(!matches_trick_block(&emerald, "diamond_block"));
    assert!(!matches_trick_block(&emerald, "mymod:emerald_block"));
    assert!(!matches_trick_block(&emerald, ""));
}

#[test]
fn test_trick_block_is_exact_not_classifier() {
    // Stone passes the general classifier but is not the configured block.
    let stone = BlockState::solid("minecraft:stone");
    assert!(can_handle(&stone));
    assert!(!matches_trick_block(&stone, "emerald_block"));
}
