use serde::{Deserialize, Serialize};

use crate::error::{GameError, GameResult};
use crate::game::constants::{ACTION_SPACE_SIZE, NUM_TILE_TYPES};
use crate::tile::TileType;

/// 动作类型
///
/// 编码从 101 开始，与牌的编码（0-41）互不重叠
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionType {
    /// 打牌
    Discard = 101,
    /// 吃
    Chi = 102,
    /// 碰
    Pon = 103,
    /// 杠
    Kan = 104,
    /// 荣和（点炮胡）
    Ron = 105,
    /// 自摸
    Tsumo = 106,
}

impl ActionType {
    /// 特殊动作，按动作空间中的声明顺序排列
    pub const SPECIAL: [ActionType; 5] = [
        ActionType::Chi,
        ActionType::Pon,
        ActionType::Kan,
        ActionType::Ron,
        ActionType::Tsumo,
    ];

    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            101 => Some(ActionType::Discard),
            102..=106 => Some(Self::SPECIAL[(code - 102) as usize]),
            _ => None,
        }
    }

    /// 在等待动作掩码中的位序号（打牌没有位）
    pub fn mask_bit(self) -> Option<usize> {
        Self::SPECIAL.iter().position(|&a| a == self)
    }

    /// 是否为和牌动作
    pub fn is_win(self) -> bool {
        matches!(self, ActionType::Ron | ActionType::Tsumo)
    }
}

/// 解码后的动作
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// 打出一张牌
    Discard(TileType),
    /// 特殊动作（吃、碰、杠、荣和、自摸）
    Special(ActionType),
}

impl Action {
    /// 从动作编码解码
    ///
    /// - `[0, 42)`：打出对应的牌
    /// - `[42, 47)`：按声明顺序的特殊动作
    /// - 其他：`ActionOutOfRange`
    pub fn from_code(code: usize) -> GameResult<Self> {
        if code < NUM_TILE_TYPES {
            // 编码 < 42，必然存在
            return TileType::from_code(code as u8)
                .map(Action::Discard)
                .ok_or(GameError::ActionOutOfRange { code, limit: ACTION_SPACE_SIZE });
        }
        ActionType::SPECIAL
            .get(code - NUM_TILE_TYPES)
            .map(|&kind| Action::Special(kind))
            .ok_or(GameError::ActionOutOfRange { code, limit: ACTION_SPACE_SIZE })
    }

    /// 编码为动作空间中的下标
    pub fn code(self) -> usize {
        match self {
            Action::Discard(tile) => tile.code() as usize,
            Action::Special(kind) => match kind.mask_bit() {
                Some(bit) => NUM_TILE_TYPES + bit,
                // 打牌没有特殊编码，不会构造出 Special(Discard)
                None => ACTION_SPACE_SIZE,
            },
        }
    }

    /// 对应的动作类型
    pub fn action_type(self) -> ActionType {
        match self {
            Action::Discard(_) => ActionType::Discard,
            Action::Special(kind) => kind,
        }
    }
}
