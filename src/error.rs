use thiserror::Error;

/// 游戏引擎错误
///
/// 非法出牌、被拒绝的吃碰杠胡都不是错误，而是负奖励；
/// 这里只包含调用方违反接口约定的情况。
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GameError {
    /// 动作编码越界
    #[error("action code {code} is out of range (action space size is {limit})")]
    ActionOutOfRange { code: usize, limit: usize },
    /// 配置无效
    #[error("invalid config: {reason}")]
    InvalidConfig { reason: String },
    /// 尚未调用 reset
    #[error("step called before reset")]
    NotReset,
    /// 游戏已结束，需要重新 reset
    #[error("game is over, call reset to start a new one")]
    GameOver,
}

pub type GameResult<T> = Result<T, GameError>;

#[cfg(feature = "python")]
impl From<GameError> for pyo3::PyErr {
    fn from(err: GameError) -> pyo3::PyErr {
        pyo3::exceptions::PyValueError::new_err(err.to_string())
    }
}
