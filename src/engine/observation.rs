use crate::game::constants::{NUM_DORA_INDICATORS, NUM_SPECIAL_ACTIONS};
use crate::game::state::GameState;
use serde::{Deserialize, Serialize};

/// 上一个动作为空时的编码
pub const NO_LAST_ACTION: u8 = 0;

/// 观测
///
/// 游戏状态的固定形状投影。只包含当前玩家有权看到的信息：
/// 自己的暗手、公开的弃牌和副露、宝牌指示牌。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Observation {
    /// 当前玩家暗手，长度 42，按牌编码计数
    pub hand: Vec<u8>,
    /// 弃牌堆，长度 42
    pub discards: Vec<u8>,
    /// 所有玩家的副露，长度 42
    pub melds: Vec<u8>,
    /// 宝牌指示牌编码，不足 5 张补 0
    pub dora_indicators: [u8; NUM_DORA_INDICATORS],
    /// 当前玩家 ID
    pub current_player: u8,
    /// 上一个动作的 ActionType 编码（101-106），没有时为 0
    pub last_action: u8,
    /// 等待动作（吃、碰、杠、荣和、自摸）
    pub waiting_actions: [u8; NUM_SPECIAL_ACTIONS],
    /// 牌墙剩余张数
    pub wall_remaining: usize,
}

impl Observation {
    /// 编码游戏状态
    pub fn encode(state: &GameState) -> Self {
        let mut dora_indicators = [0u8; NUM_DORA_INDICATORS];
        for (slot, tile) in dora_indicators.iter_mut().zip(&state.dora_indicators) {
            *slot = tile.code();
        }

        Self {
            hand: state.current_player_ref().hand.counts().to_vec(),
            discards: state.discard_counts().to_vec(),
            melds: state.meld_counts().to_vec(),
            dora_indicators,
            current_player: state.current_player,
            last_action: state.last_action.map_or(NO_LAST_ACTION, |a| a.code()),
            waiting_actions: state.waiting_mask().to_array(),
            wall_remaining: state.wall.remaining_count(),
        }
    }
}
