/// 游戏常量定义
///
/// 集中管理所有魔法数字

/// 牌的种类数（27 种数牌 + 7 种字牌 + 8 种花牌）
pub const NUM_TILE_TYPES: usize = 42;

/// 数牌和字牌的种类数（每种 4 张）
pub const NUM_PLAIN_TILE_TYPES: usize = 34;

/// 花牌张数（每种 1 张）
pub const NUM_FLOWER_TILES: usize = 8;

/// 每种数牌/字牌的数量
pub const COPIES_PER_TILE: u8 = 4;

/// 每种花色的牌数（1-9）
pub const RANKS_PER_SUIT: usize = 9;

/// 特殊动作数量（吃、碰、杠、荣和、自摸）
pub const NUM_SPECIAL_ACTIONS: usize = 5;

/// 动作空间大小：42 种出牌 + 5 种特殊动作
pub const ACTION_SPACE_SIZE: usize = NUM_TILE_TYPES + NUM_SPECIAL_ACTIONS;

/// 宝牌指示牌槽位数
pub const NUM_DORA_INDICATORS: usize = 5;

/// 初始手牌张数
pub const HAND_SIZE: usize = 13;

/// 胡牌时的总张数（含副露，杠按三张计）
pub const WINNING_HAND_SIZE: usize = 14;

/// 玩家数量范围
pub const MIN_PLAYERS: u8 = 2;
pub const MAX_PLAYERS: u8 = 4;

/// 固定奖励
pub const REWARD_CHI: f32 = 1.0;
pub const REWARD_PON: f32 = 1.0;
pub const REWARD_KAN: f32 = 2.0;
pub const REWARD_RON: f32 = 10.0;
pub const REWARD_TSUMO: f32 = 15.0;
pub const REWARD_DENIED: f32 = -1.0;
pub const REWARD_FAILED_WIN: f32 = -5.0;
pub const REWARD_INVALID_DISCARD: f32 = -1.0;
