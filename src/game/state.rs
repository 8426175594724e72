use crate::config::MahjongType;
use crate::engine::action_mask::WaitingMask;
use crate::error::{GameError, GameResult};
use crate::game::action::ActionType;
use crate::game::constants::NUM_TILE_TYPES;
use crate::game::player::Player;
use crate::tile::{TileType, Wall};
use serde::{Deserialize, Serialize};

/// 弃牌记录
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscardRecord {
    /// 弃牌玩家 ID
    pub player_id: u8,
    /// 弃的牌
    pub tile: TileType,
}

/// 终局原因
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TerminalReason {
    /// 有人和牌
    Win { winner: u8, self_drawn: bool },
    /// 牌墙摸完（流局）
    Exhaustion,
}

/// 回合阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// 等待 `player` 出牌
    AwaitingDiscard { player: u8 },
    /// `discarder` 出牌后，等待其他玩家吃/碰/杠/荣和
    AwaitingReaction { discarder: u8 },
    /// 游戏结束
    Terminal { reason: TerminalReason },
}

/// 游戏状态
///
/// 由 reset 创建，只被 step 修改
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// 规则类型
    pub ruleset: MahjongType,
    /// 牌墙
    pub wall: Wall,
    /// 玩家（按座位号排列）
    pub players: Vec<Player>,
    /// 弃牌堆（按顺序记录）
    pub discards: Vec<DiscardRecord>,
    /// 宝牌指示牌（发牌时确定）
    pub dora_indicators: Vec<TileType>,
    /// 当前玩家 ID
    pub current_player: u8,
    /// 最后打出的牌
    pub last_discard: Option<TileType>,
    /// 上一个动作
    pub last_action: Option<ActionType>,
    /// 每个玩家可执行的特殊动作
    pub waiting: Vec<WaitingMask>,
    /// 当前玩家是否刚摸过牌（自摸只在摸牌后判定）
    pub just_drew: bool,
    /// 回合阶段
    pub phase: Phase,
    /// 当前回合数（每次出牌 +1）
    pub turn: u32,
    /// 是否已有人和牌
    pub terminated: bool,
    /// 是否因牌墙摸完而流局
    pub truncated: bool,
}

impl GameState {
    /// 创建尚未发牌的游戏状态
    pub fn new(ruleset: MahjongType, num_players: u8) -> Self {
        Self {
            ruleset,
            wall: Wall::build(ruleset),
            players: (0..num_players).map(Player::new).collect(),
            discards: Vec::new(),
            dora_indicators: Vec::new(),
            current_player: 0,
            last_discard: None,
            last_action: None,
            waiting: vec![WaitingMask::EMPTY; num_players as usize],
            just_drew: false,
            phase: Phase::AwaitingDiscard { player: 0 },
            turn: 0,
            terminated: false,
            truncated: false,
        }
    }

    /// 玩家数量
    pub fn num_players(&self) -> u8 {
        self.players.len() as u8
    }

    /// 下家座位号
    pub fn next_seat(&self, seat: u8) -> u8 {
        (seat + 1) % self.num_players()
    }

    /// 获取当前玩家
    pub fn current_player_ref(&self) -> &Player {
        &self.players[self.current_player as usize]
    }

    /// 所有玩家可执行的特殊动作（按位或）
    pub fn waiting_mask(&self) -> WaitingMask {
        self.waiting
            .iter()
            .fold(WaitingMask::EMPTY, |acc, &mask| acc | mask)
    }

    /// 检查游戏是否结束
    pub fn is_game_over(&self) -> bool {
        matches!(self.phase, Phase::Terminal { .. })
    }

    /// 牌墙、手牌、副露、弃牌堆、宝牌指示牌的总张数
    pub fn tile_total(&self) -> usize {
        self.wall.remaining_count()
            + self.players.iter().map(Player::tile_total).sum::<usize>()
            + self.discards.len()
            + self.dora_indicators.len()
    }

    /// 每种牌在牌墙、手牌、副露、弃牌堆、宝牌指示牌中的总张数
    pub fn tile_census(&self) -> [u8; NUM_TILE_TYPES] {
        let mut counts = [0u8; NUM_TILE_TYPES];
        let concealed = self.players.iter().flat_map(|p| p.hand.to_sorted_vec());
        let melded = self
            .players
            .iter()
            .flat_map(|p| p.melds.iter().flat_map(|m| m.tiles()));
        let public = self
            .discards
            .iter()
            .map(|r| r.tile)
            .chain(self.dora_indicators.iter().copied());

        for tile in self
            .wall
            .remaining()
            .iter()
            .copied()
            .chain(concealed)
            .chain(melded)
            .chain(public)
        {
            let slot = &mut counts[tile.code() as usize];
            *slot = slot.saturating_add(1);
        }
        counts
    }

    /// 校验快照中的座位号
    ///
    /// 玩家 ID 必须等于下标，当前玩家、阶段和终局原因里的座位号、
    /// 弃牌记录的玩家 ID 都必须小于玩家数
    pub fn validate_seats(&self) -> GameResult<()> {
        let n = self.num_players();
        let invalid =
            |reason: String| -> GameResult<()> { Err(GameError::InvalidConfig { reason }) };

        if let Some((index, player)) = self
            .players
            .iter()
            .enumerate()
            .find(|(i, p)| p.id as usize != *i)
        {
            return invalid(format!("player at seat {} has id {}", index, player.id));
        }
        if self.current_player >= n {
            return invalid(format!(
                "current_player {} out of range for {} players",
                self.current_player, n
            ));
        }

        let phase_seat = match self.phase {
            Phase::AwaitingDiscard { player } => player,
            Phase::AwaitingReaction { discarder } => discarder,
            Phase::Terminal { reason: TerminalReason::Win { winner, .. } } => winner,
            Phase::Terminal { reason: TerminalReason::Exhaustion } => 0,
        };
        if phase_seat >= n {
            return invalid(format!(
                "phase {:?} refers to a seat out of range for {} players",
                self.phase, n
            ));
        }

        if let Some(record) = self.discards.iter().find(|r| r.player_id >= n) {
            return invalid(format!("discard record refers to seat {}", record.player_id));
        }
        Ok(())
    }

    /// 弃牌堆计数向量
    pub fn discard_counts(&self) -> [u8; NUM_TILE_TYPES] {
        let mut counts = [0u8; NUM_TILE_TYPES];
        for record in &self.discards {
            counts[record.tile.code() as usize] += 1;
        }
        counts
    }

    /// 所有玩家副露的计数向量
    pub fn meld_counts(&self) -> [u8; NUM_TILE_TYPES] {
        let mut counts = [0u8; NUM_TILE_TYPES];
        for meld in self.players.iter().flat_map(|p| p.melds.iter()) {
            for tile in meld.tiles() {
                counts[tile.code() as usize] += 1;
            }
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_holds_full_wall() {
        let state = GameState::new(MahjongType::International, 4);
        assert_eq!(state.num_players(), 4);
        assert_eq!(state.tile_total(), 144);
        assert!(state.waiting_mask().is_empty());
        assert!(!state.is_game_over());
    }

    #[test]
    fn test_tile_census_matches_full_set() {
        let state = GameState::new(MahjongType::International, 4);
        let census = state.tile_census();
        for tile in TileType::ALL {
            assert_eq!(census[tile.code() as usize], MahjongType::International.copies_of(tile));
        }
    }

    #[test]
    fn test_validate_seats() {
        let mut state = GameState::new(MahjongType::Japan, 3);
        assert!(state.validate_seats().is_ok());

        state.current_player = 3;
        assert!(matches!(state.validate_seats(), Err(GameError::InvalidConfig { .. })));
        state.current_player = 0;

        state.phase = Phase::AwaitingReaction { discarder: 5 };
        assert!(state.validate_seats().is_err());
        state.phase = Phase::AwaitingDiscard { player: 2 };
        assert!(state.validate_seats().is_ok());

        state.players[1].id = 2;
        assert!(state.validate_seats().is_err());
        state.players[1].id = 1;

        state.discards.push(DiscardRecord { player_id: 4, tile: TileType::Man1 });
        assert!(state.validate_seats().is_err());
    }

    #[test]
    fn test_next_seat_wraps() {
        let state = GameState::new(MahjongType::Japan, 3);
        assert_eq!(state.next_seat(0), 1);
        assert_eq!(state.next_seat(2), 0);
    }

    #[test]
    fn test_waiting_mask_is_union() {
        let mut state = GameState::new(MahjongType::Japan, 4);
        state.waiting[1].set(ActionType::Pon);
        state.waiting[3].set(ActionType::Ron);
        let mask = state.waiting_mask();
        assert!(mask.contains(ActionType::Pon));
        assert!(mask.contains(ActionType::Ron));
        assert!(!mask.contains(ActionType::Chi));
    }
}
