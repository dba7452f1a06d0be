//! Blocks domain: which blocks a trick may anchor off.
//!
//! Surface tricks (wall bounce, fast straight) accept any block that passes
//! [`can_handle`]. Block-anchored tricks (updraft, air curve) only accept the
//! single block id configured for the world, via [`matches_trick_block`].

use std::borrow::Cow;

use crate::host::BlockState;

#[cfg(test)]
mod tests;

pub const DEFAULT_NAMESPACE: &str = "minecraft";

/// Shapes that always count as an anchor, even when the host reports them
/// as non-solid.
const ANCHOR_SUFFIXES: [&str; 6] = ["_stairs", "_slab", "_fence", "_wall", "_door", "_leaves"];

/// Climbable blocks never act as an anchor.
const CLIMBABLE: [&str; 2] = ["ladder", "vine"];

const AIR_IDS: [&str; 3] = ["air", "cave_air", "void_air"];
const LIQUID_IDS: [&str; 4] = ["water", "flowing_water", "lava", "flowing_lava"];

/// Type id without its namespace: `minecraft:oak_leaves` -> `oak_leaves`.
pub fn local_name(type_id: &str) -> &str {
    match type_id.split_once(':') {
        Some((_, name)) => name,
        None => type_id,
    }
}

/// Type id with the default namespace filled in when missing.
pub fn qualified(type_id: &str) -> Cow<'_, str> {
    if type_id.contains(':') {
        Cow::Borrowed(type_id)
    } else {
        Cow::Owned(format!("{DEFAULT_NAMESPACE}:{type_id}"))
    }
}

pub fn is_glass(type_id: &str) -> bool {
    type_id.ends_with("glass") || type_id.ends_with("glass_pane")
}

pub fn is_anchor_shape(type_id: &str) -> bool {
    ANCHOR_SUFFIXES
        .iter()
        .any(|suffix| type_id.ends_with(suffix))
}

pub fn is_climbable(type_id: &str) -> bool {
    CLIMBABLE.contains(&local_name(type_id))
}

/// General anchor rule for surface tricks. First match wins.
pub fn can_handle(block: &BlockState) -> bool {
    let type_id = block.type_id.as_str();
    if is_glass(type_id) || is_anchor_shape(type_id) {
        return true;
    }
    if is_climbable(type_id) {
        return false;
    }
    !(block.is_air || block.is_liquid || !block.is_solid)
}

/// [`can_handle`] for callers that only know the type id. Air and liquid
/// are recognised by id; anything else is assumed solid.
pub fn can_handle_type_id(type_id: &str) -> bool {
    can_handle(&block_from_type_id(type_id))
}

/// Best-effort block state for a bare type id.
pub fn block_from_type_id(type_id: &str) -> BlockState {
    let name = local_name(type_id);
    if AIR_IDS.contains(&name) {
        BlockState {
            type_id: type_id.to_string(),
            ..BlockState::air()
        }
    } else if LIQUID_IDS.contains(&name) {
        BlockState::liquid(type_id)
    } else {
        BlockState::solid(type_id)
    }
}

/// Exact match against a configured trick block. `emerald_block` and
/// `minecraft:emerald_block` name the same block.
pub fn matches_trick_block(block: &BlockState, configured: &str) -> bool {
    let configured = configured.trim();
    if configured.is_empty() {
        return false;
    }
    qualified(&block.type_id) == qualified(configured)
}
