use super::tile::TileType;
use crate::game::constants::{COPIES_PER_TILE, NUM_TILE_TYPES};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::collections::HashMap;

/// 手牌（Hand）
///
/// 使用 HashMap 存储每种牌的数量，支持 O(1) 的添加、移除和查询操作
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Hand {
    /// 牌的数量映射：TileType -> 数量（1-4）
    tiles: HashMap<TileType, u8>,
    /// 总牌数（用于快速查询）
    total_count: usize,
}

impl Hand {
    /// 创建空手牌
    pub fn new() -> Self {
        Self::default()
    }

    /// 从牌列表创建手牌（超过 4 张的部分被忽略）
    pub fn from_tiles(tiles: &[TileType]) -> Self {
        let mut hand = Self::new();
        for &tile in tiles {
            hand.add_tile(tile);
        }
        hand
    }

    /// 添加一张牌
    ///
    /// # Returns
    ///
    /// - `true`：成功添加
    /// - `false`：该牌已有 4 张
    pub fn add_tile(&mut self, tile: TileType) -> bool {
        let count = self.tiles.entry(tile).or_insert(0);
        if *count >= COPIES_PER_TILE {
            return false;
        }
        *count += 1;
        self.total_count += 1;
        true
    }

    /// 移除一张牌
    ///
    /// # Returns
    ///
    /// - `true`：成功移除
    /// - `false`：手牌中没有该牌
    pub fn remove_tile(&mut self, tile: TileType) -> bool {
        match self.tiles.get_mut(&tile) {
            Some(count) if *count > 0 => {
                *count -= 1;
                self.total_count -= 1;
                if *count == 0 {
                    self.tiles.remove(&tile);
                }
                true
            }
            _ => false,
        }
    }

    /// 检查是否有某张牌
    pub fn has_tile(&self, tile: TileType) -> bool {
        self.tile_count(tile) > 0
    }

    /// 查询某张牌的数量
    pub fn tile_count(&self, tile: TileType) -> u8 {
        self.tiles.get(&tile).copied().unwrap_or(0)
    }

    /// 获取总牌数
    pub fn total_count(&self) -> usize {
        self.total_count
    }

    /// 转换为排序后的牌向量（按编码排序）
    pub fn to_sorted_vec(&self) -> Vec<TileType> {
        let mut result = Vec::with_capacity(self.total_count);
        for tile in TileType::ALL {
            for _ in 0..self.tile_count(tile) {
                result.push(tile);
            }
        }
        result
    }

    /// 按编码下标的计数向量
    pub fn counts(&self) -> [u8; NUM_TILE_TYPES] {
        let mut counts = [0u8; NUM_TILE_TYPES];
        for (tile, &count) in &self.tiles {
            counts[tile.code() as usize] = count;
        }
        counts
    }

    /// 检查手牌是否为空
    pub fn is_empty(&self) -> bool {
        self.total_count == 0
    }

    /// 清空手牌
    pub fn clear(&mut self) {
        self.tiles.clear();
        self.total_count = 0;
    }

    /// 获取所有不同的牌类型（按编码排序）
    pub fn distinct_tiles(&self) -> SmallVec<[TileType; 14]> {
        let mut result: SmallVec<[TileType; 14]> = self.tiles.keys().copied().collect();
        result.sort_unstable();
        result
    }

    /// 获取所有牌的数量映射
    pub fn tiles_map(&self) -> &HashMap<TileType, u8> {
        &self.tiles
    }
}
