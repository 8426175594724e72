use crate::tile::TileType;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// 副露（吃/碰/杠后亮出的牌组，所有玩家可见）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Meld {
    /// 吃（顺子），`claimed` 为吃进的那张牌
    Sequence { tiles: [TileType; 3], claimed: TileType },
    /// 碰（刻子）
    Triplet { tile: TileType },
    /// 杠（明杠/暗杠）
    Quad { tile: TileType, concealed: bool },
}

impl Meld {
    /// 牌组中的所有牌
    pub fn tiles(&self) -> SmallVec<[TileType; 4]> {
        match *self {
            Meld::Sequence { tiles, .. } => SmallVec::from_slice(&tiles),
            Meld::Triplet { tile } => SmallVec::from_elem(tile, 3),
            Meld::Quad { tile, .. } => SmallVec::from_elem(tile, 4),
        }
    }

    /// 牌组张数
    pub fn tile_count(&self) -> usize {
        match self {
            Meld::Sequence { .. } | Meld::Triplet { .. } => 3,
            Meld::Quad { .. } => 4,
        }
    }
}
