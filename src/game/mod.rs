/// 游戏逻辑模块
///
/// 包含游戏状态、玩家、动作、鸣牌规则和回合推进

pub mod action;
pub mod chi;
pub mod constants;
pub mod game_engine;
pub mod kong;
pub mod meld;
pub mod player;
pub mod pong;
pub mod rules;
pub mod state;
