/// 引擎辅助模块
///
/// 等待动作掩码推导与观测编码

pub mod action_mask;
pub mod observation;

pub use action_mask::{ActionMask, WaitingMask};
pub use observation::Observation;
