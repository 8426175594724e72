use serde::{Deserialize, Serialize};

use crate::error::{GameError, GameResult};
use crate::game::constants::{COPIES_PER_TILE, MAX_PLAYERS, MIN_PLAYERS, NUM_FLOWER_TILES, NUM_PLAIN_TILE_TYPES};
use crate::tile::TileType;

/// 麻将规则类型
///
/// 决定牌墙是否包含花牌，以及胡牌判定接受哪些牌
#[repr(u16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MahjongType {
    /// 国标麻将（带花牌）
    International = 200,
    /// 日本麻将
    Japan = 201,
    /// 四川麻将
    Sichuan = 202,
}

impl MahjongType {
    /// 数值编码
    pub fn code(self) -> u16 {
        self as u16
    }

    /// 从编码还原
    pub fn from_code(code: u16) -> Option<Self> {
        match code {
            200 => Some(MahjongType::International),
            201 => Some(MahjongType::Japan),
            202 => Some(MahjongType::Sichuan),
            _ => None,
        }
    }

    /// 牌墙中是否包含花牌
    pub fn has_flowers(self) -> bool {
        matches!(self, MahjongType::International)
    }

    /// 一副完整牌的张数
    ///
    /// 34 种数牌/字牌各 4 张，加上花牌（若有）各 1 张
    pub fn tile_set_size(self) -> usize {
        let base = NUM_PLAIN_TILE_TYPES * COPIES_PER_TILE as usize;
        if self.has_flowers() {
            base + NUM_FLOWER_TILES
        } else {
            base
        }
    }

    /// 该规则的牌墙中是否存在这种牌
    pub fn includes(self, tile: TileType) -> bool {
        !tile.is_flower() || self.has_flowers()
    }

    /// 一副完整牌中这种牌的张数（花牌 1 张，其他 4 张，规则外的牌 0 张）
    pub fn copies_of(self, tile: TileType) -> u8 {
        if !self.includes(tile) {
            0
        } else if tile.is_flower() {
            1
        } else {
            COPIES_PER_TILE
        }
    }
}

impl Default for MahjongType {
    fn default() -> Self {
        MahjongType::International
    }
}

/// 环境配置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvConfig {
    /// 玩家数量（2-4）
    pub num_players: u8,
    /// 规则类型
    pub mahjong_type: MahjongType,
}

impl EnvConfig {
    pub fn new(num_players: u8, mahjong_type: MahjongType) -> Self {
        Self {
            num_players,
            mahjong_type,
        }
    }

    /// 校验配置
    pub fn validate(&self) -> GameResult<()> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&self.num_players) {
            return Err(GameError::InvalidConfig {
                reason: format!(
                    "num_players must be between {} and {}, got {}",
                    MIN_PLAYERS, MAX_PLAYERS, self.num_players
                ),
            });
        }
        Ok(())
    }
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            num_players: 4,
            mahjong_type: MahjongType::International,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_set_size() {
        assert_eq!(MahjongType::International.tile_set_size(), 144);
        assert_eq!(MahjongType::Japan.tile_set_size(), 136);
        assert_eq!(MahjongType::Sichuan.tile_set_size(), 136);
    }

    #[test]
    fn test_includes_flowers_only_for_international() {
        assert!(MahjongType::International.includes(TileType::Plum));
        assert!(!MahjongType::Japan.includes(TileType::Plum));
        assert!(MahjongType::Japan.includes(TileType::DragonRed));
    }

    #[test]
    fn test_copies_of() {
        assert_eq!(MahjongType::Japan.copies_of(TileType::Man5), 4);
        assert_eq!(MahjongType::Japan.copies_of(TileType::Plum), 0);
        assert_eq!(MahjongType::International.copies_of(TileType::Plum), 1);
        let total: usize = TileType::ALL
            .iter()
            .map(|&t| MahjongType::International.copies_of(t) as usize)
            .sum();
        assert_eq!(total, MahjongType::International.tile_set_size());
    }

    #[test]
    fn test_codes() {
        for ruleset in [MahjongType::International, MahjongType::Japan, MahjongType::Sichuan] {
            assert_eq!(MahjongType::from_code(ruleset.code()), Some(ruleset));
        }
        assert!(MahjongType::from_code(203).is_none());
    }

    #[test]
    fn test_validate() {
        assert!(EnvConfig::default().validate().is_ok());
        assert!(EnvConfig::new(2, MahjongType::Japan).validate().is_ok());
        assert!(matches!(
            EnvConfig::new(5, MahjongType::Japan).validate(),
            Err(GameError::InvalidConfig { .. })
        ));
        assert!(EnvConfig::new(1, MahjongType::Japan).validate().is_err());
    }
}
