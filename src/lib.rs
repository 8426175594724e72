/// 麻将强化学习环境
///
/// 高性能 Rust 实现：发牌、回合推进、鸣牌与和牌校验、观测编码和奖励信号

pub mod config;
pub mod engine;
pub mod error;
pub mod game;
pub mod tile;

// 重新导出常用类型
pub use config::{EnvConfig, MahjongType};
pub use engine::action_mask::{ActionMask, WaitingMask};
pub use engine::observation::Observation;
pub use error::{GameError, GameResult};
pub use game::action::{Action, ActionType};
pub use game::chi::ChiHandler;
pub use game::game_engine::{GameEngine, ResetInfo, StepInfo, StepOutcome, StepResult};
pub use game::kong::KongHandler;
pub use game::meld::Meld;
pub use game::player::Player;
pub use game::pong::PongHandler;
pub use game::state::{DiscardRecord, GameState, Phase, TerminalReason};
pub use tile::{is_winning_hand, Hand, Suit, TileType, Wall};

// Python 绑定模块
#[cfg(feature = "python")]
pub mod python;
