use crate::config::MahjongType;
use crate::game::action::{Action, ActionType};
use crate::game::chi::ChiHandler;
use crate::game::constants::{ACTION_SPACE_SIZE, NUM_SPECIAL_ACTIONS};
use crate::game::kong::KongHandler;
use crate::game::player::Player;
use crate::game::pong::PongHandler;
use crate::game::state::{GameState, Phase};
use crate::tile::TileType;
use serde::{Deserialize, Serialize};
use std::ops::BitOr;

/// 等待动作掩码
///
/// 5 位，第 i 位对应 `ActionType::SPECIAL[i]`（吃、碰、杠、荣和、自摸）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct WaitingMask(u8);

impl WaitingMask {
    pub const EMPTY: WaitingMask = WaitingMask(0);

    const ALL_BITS: u8 = (1 << NUM_SPECIAL_ACTIONS) - 1;

    /// 吃、碰、杠、荣和四种响应别人出牌的动作
    const REACTION_BITS: u8 = 0b0_1111;

    pub fn from_bits(bits: u8) -> Self {
        WaitingMask(bits & Self::ALL_BITS)
    }

    pub fn bits(self) -> u8 {
        self.0
    }

    /// 设置某个动作位（打牌没有对应的位，忽略）
    pub fn set(&mut self, action: ActionType) {
        if let Some(bit) = action.mask_bit() {
            self.0 |= 1 << bit;
        }
    }

    pub fn contains(self, action: ActionType) -> bool {
        action.mask_bit().map_or(false, |bit| self.0 & (1 << bit) != 0)
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// 是否包含响应别人出牌的动作
    pub fn has_reaction(self) -> bool {
        self.0 & Self::REACTION_BITS != 0
    }

    /// 按声明顺序展开为 0/1 数组
    pub fn to_array(self) -> [u8; NUM_SPECIAL_ACTIONS] {
        let mut out = [0u8; NUM_SPECIAL_ACTIONS];
        for (i, slot) in out.iter_mut().enumerate() {
            *slot = (self.0 >> i) & 1;
        }
        out
    }

    /// 已设置的动作
    pub fn actions(self) -> impl Iterator<Item = ActionType> {
        ActionType::SPECIAL
            .into_iter()
            .filter(move |&action| self.contains(action))
    }
}

impl BitOr for WaitingMask {
    type Output = WaitingMask;

    fn bitor(self, rhs: Self) -> Self::Output {
        WaitingMask(self.0 | rhs.0)
    }
}

/// 动作掩码
///
/// 根据规则引擎从游戏状态推导每个玩家可执行的特殊动作
pub struct ActionMask;

impl ActionMask {
    /// 别人打出 `tile` 后，`player` 可以执行的响应动作
    pub fn reaction_mask(player: &Player, tile: TileType, ruleset: MahjongType) -> WaitingMask {
        let mut mask = WaitingMask::EMPTY;
        if ChiHandler::can_chi(player, tile) {
            mask.set(ActionType::Chi);
        }
        if PongHandler::can_pong(player, tile) {
            mask.set(ActionType::Pon);
        }
        if KongHandler::can_kong(player, tile, false) {
            mask.set(ActionType::Kan);
        }
        if player.is_complete_with(tile, ruleset) {
            mask.set(ActionType::Ron);
        }
        mask
    }

    /// 摸牌后 `player` 能否自摸
    pub fn tsumo_mask(player: &Player, ruleset: MahjongType) -> WaitingMask {
        let mut mask = WaitingMask::EMPTY;
        if player.is_complete(ruleset) {
            mask.set(ActionType::Tsumo);
        }
        mask
    }

    /// 从当前状态重新推导每个玩家的等待动作
    ///
    /// 游戏状态中保存的掩码必须始终等于这里的结果
    pub fn derive(state: &GameState) -> Vec<WaitingMask> {
        let mut masks = vec![WaitingMask::EMPTY; state.players.len()];

        match state.phase {
            Phase::Terminal { .. } => {}
            Phase::AwaitingReaction { discarder } => {
                if let Some(tile) = state.last_discard {
                    for player in state.players.iter().filter(|p| p.id != discarder) {
                        masks[player.id as usize] =
                            Self::reaction_mask(player, tile, state.ruleset);
                    }
                }
            }
            Phase::AwaitingDiscard { player } => {
                if state.just_drew {
                    masks[player as usize] =
                        Self::tsumo_mask(&state.players[player as usize], state.ruleset);
                }
            }
        }

        masks
    }

    /// 当前可以提交的动作编码
    ///
    /// - 等待出牌：手中有的牌，以及自摸（若可以）
    /// - 等待响应：所有出牌编码（表示全部玩家放弃），以及任一玩家可执行的特殊动作
    /// - 终局：全部为 false
    pub fn legal_actions(state: &GameState) -> [bool; ACTION_SPACE_SIZE] {
        let mut legal = [false; ACTION_SPACE_SIZE];

        match state.phase {
            Phase::Terminal { .. } => return legal,
            Phase::AwaitingDiscard { player } => {
                for tile in state.players[player as usize].hand.distinct_tiles() {
                    legal[Action::Discard(tile).code()] = true;
                }
            }
            Phase::AwaitingReaction { .. } => {
                for tile in TileType::ALL {
                    legal[Action::Discard(tile).code()] = true;
                }
            }
        }

        for action in state.waiting_mask().actions() {
            legal[Action::Special(action).code()] = true;
        }
        legal
    }
}
