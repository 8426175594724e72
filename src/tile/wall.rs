use super::tile::TileType;
use crate::config::MahjongType;
use crate::game::constants::{COPIES_PER_TILE, NUM_DORA_INDICATORS};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// 牌墙（Wall）
///
/// 存储一副完整的牌，支持洗牌、预留宝牌指示牌和从头部抽牌。
/// 抽牌只会让剩余牌数单调减少，牌墙不会回填。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wall {
    /// 牌堆（从头部抽取，宝牌指示牌从尾部预留）
    tiles: Vec<TileType>,
    /// 已抽取的牌数
    drawn_count: usize,
}

impl Wall {
    /// 按规则生成一副完整的牌（未洗牌）
    ///
    /// 数牌和字牌每种 4 张；带花规则再加入 8 张花牌各 1 张
    pub fn build(ruleset: MahjongType) -> Self {
        let mut tiles = Vec::with_capacity(ruleset.tile_set_size());

        for tile in TileType::ALL {
            if tile.is_flower() {
                if ruleset.has_flowers() {
                    tiles.push(tile);
                }
            } else {
                for _ in 0..COPIES_PER_TILE {
                    tiles.push(tile);
                }
            }
        }

        Self {
            tiles,
            drawn_count: 0,
        }
    }

    /// 按给定顺序构造牌墙（从头部抽牌），用于复现指定牌局
    pub fn from_tiles(tiles: Vec<TileType>) -> Self {
        Self {
            tiles,
            drawn_count: 0,
        }
    }

    /// 洗牌
    ///
    /// 使用调用方提供的随机源（Fisher-Yates），相同种子得到相同牌序
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.tiles[self.drawn_count..].shuffle(rng);
    }

    /// 从牌墙尾部预留宝牌指示牌
    ///
    /// 剩余牌不足时能取多少取多少
    pub fn reserve_indicators(&mut self) -> Vec<TileType> {
        let take = NUM_DORA_INDICATORS.min(self.remaining_count());
        let split_at = self.tiles.len() - take;
        self.tiles.split_off(split_at)
    }

    /// 抽取一张牌（从牌墙头部）
    ///
    /// # Returns
    ///
    /// - `Some(TileType)`：成功抽取一张牌
    /// - `None`：牌墙已空
    pub fn draw(&mut self) -> Option<TileType> {
        let tile = self.tiles.get(self.drawn_count).copied()?;
        self.drawn_count += 1;
        Some(tile)
    }

    /// 查询剩余牌数
    pub fn remaining_count(&self) -> usize {
        self.tiles.len().saturating_sub(self.drawn_count)
    }

    /// 检查牌墙是否为空
    pub fn is_empty(&self) -> bool {
        self.remaining_count() == 0
    }

    /// 获取已抽取的牌数
    pub fn drawn_count(&self) -> usize {
        self.drawn_count
    }

    /// 剩余的牌（按抽取顺序）
    pub fn remaining(&self) -> &[TileType] {
        &self.tiles[self.drawn_count..]
    }
}
