//! Host domain: block lookup over the loaded voxel world.

use std::collections::HashMap;

use bevy::prelude::*;

/// What the host reports about a single block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockState {
    pub type_id: String,
    pub is_air: bool,
    pub is_liquid: bool,
    pub is_solid: bool,
}

impl BlockState {
    pub fn solid(type_id: impl Into<String>) -> Self {
        Self {
            type_id: type_id.into(),
            is_air: false,
            is_liquid: false,
            is_solid: true,
        }
    }

    /// Passable blocks such as flowers, torches or rails.
    pub fn non_solid(type_id: impl Into<String>) -> Self {
        Self {
            type_id: type_id.into(),
            is_air: false,
            is_liquid: false,
            is_solid: false,
        }
    }

    pub fn liquid(type_id: impl Into<String>) -> Self {
        Self {
            type_id: type_id.into(),
            is_air: false,
            is_liquid: true,
            is_solid: false,
        }
    }

    pub fn air() -> Self {
        Self {
            type_id: "minecraft:air".to_string(),
            is_air: true,
            is_liquid: false,
            is_solid: false,
        }
    }
}

/// Sparse block storage keyed by block coordinate. Positions that were never
/// written count as unloaded and yield no block.
#[derive(Resource, Debug, Default)]
pub struct VoxelWorld {
    blocks: HashMap<IVec3, BlockState>,
}

impl VoxelWorld {
    /// Block coordinate containing a world position.
    pub fn block_coord(position: Vec3) -> IVec3 {
        position.floor().as_ivec3()
    }

    pub fn set_block(&mut self, coord: IVec3, block: BlockState) -> Option<BlockState> {
        self.blocks.insert(coord, block)
    }

    pub fn remove_block(&mut self, coord: IVec3) -> Option<BlockState> {
        self.blocks.remove(&coord)
    }

    pub fn block(&self, coord: IVec3) -> Option<&BlockState> {
        self.blocks.get(&coord)
    }

    pub fn block_at(&self, position: Vec3) -> Option<&BlockState> {
        self.block(Self::block_coord(position))
    }

    /// Fills an axis-aligned box of blocks, both corners inclusive.
    pub fn fill(&mut self, from: IVec3, to: IVec3, block: &BlockState) {
        let min = from.min(to);
        let max = from.max(to);
        for x in min.x..=max.x {
            for y in min.y..=max.y {
                for z in min.z..=max.z {
                    self.blocks.insert(IVec3::new(x, y, z), block.clone());
                }
            }
        }
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}
