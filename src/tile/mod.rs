/// 牌相关模块
///
/// 包含牌（TileType）、牌墙（Wall）、手牌（Hand）和胡牌判定

pub mod tile;
pub mod wall;
pub mod hand;
pub mod win_check;

// 重新导出常用类型
pub use tile::{Suit, TileType};
pub use wall::Wall;
pub use hand::Hand;
pub use win_check::{can_form_sets, find_decomposition, is_complete_hand, is_winning_hand, Group, WinResult};
