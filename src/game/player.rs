use crate::config::MahjongType;
use crate::game::meld::Meld;
use crate::game::rules;
use crate::tile::{is_complete_hand, Hand, TileType};
use serde::{Deserialize, Serialize};

/// 玩家状态
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// 玩家 ID（座位号）
    pub id: u8,
    /// 暗手
    pub hand: Hand,
    /// 已吃/碰/杠的牌组
    pub melds: Vec<Meld>,
}

impl Player {
    /// 创建新玩家
    pub fn new(id: u8) -> Self {
        Self {
            id,
            hand: Hand::new(),
            melds: Vec::new(),
        }
    }

    /// 手中的总张数（暗手 + 副露）
    pub fn tile_total(&self) -> usize {
        self.hand.total_count() + self.melds.iter().map(Meld::tile_count).sum::<usize>()
    }

    /// 当前暗手加副露是否已经胡牌（自摸判定）
    pub fn is_complete(&self, ruleset: MahjongType) -> bool {
        is_complete_hand(&self.hand.to_sorted_vec(), self.melds.len(), ruleset)
    }

    /// 暗手加上一张别人打出的牌是否胡牌（荣和判定）
    pub fn is_complete_with(&self, tile: TileType, ruleset: MahjongType) -> bool {
        if self.melds.is_empty() {
            return rules::is_winning_with(&self.hand, tile, ruleset);
        }
        let mut tiles = self.hand.to_sorted_vec();
        tiles.push(tile);
        is_complete_hand(&tiles, self.melds.len(), ruleset)
    }
}
