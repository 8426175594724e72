use crate::config::{EnvConfig, MahjongType};
use crate::engine::observation::Observation;
use crate::game::constants::ACTION_SPACE_SIZE;
use crate::game::game_engine::{GameEngine, StepOutcome};
use numpy::PyArray1;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyDict;

/// Python 绑定的麻将环境
///
/// reset 返回 `(observation, info)`，step 返回
/// `(observation, reward, terminated, truncated, info)`
#[pyclass(name = "MahjongEnv")]
pub struct PyMahjongEnv {
    inner: GameEngine,
    config: EnvConfig,
}

#[pymethods]
impl PyMahjongEnv {
    /// 创建环境
    ///
    /// - `num_players`: 玩家数（2-4）
    /// - `mahjong_type`: 规则编码（200 国标，201 日麻，202 川麻）
    #[new]
    #[pyo3(signature = (num_players = 4, mahjong_type = 200))]
    pub fn new(num_players: u8, mahjong_type: u16) -> PyResult<Self> {
        let ruleset = MahjongType::from_code(mahjong_type).ok_or_else(|| {
            PyValueError::new_err(format!("unknown mahjong type: {}", mahjong_type))
        })?;
        let config = EnvConfig::new(num_players, ruleset);
        config.validate()?;
        Ok(Self {
            inner: GameEngine::new(),
            config,
        })
    }

    /// 动作空间大小
    #[getter]
    pub fn action_space_size(&self) -> usize {
        ACTION_SPACE_SIZE
    }

    /// 开始新的一局
    #[pyo3(signature = (seed = None))]
    pub fn reset(&mut self, py: Python, seed: Option<u64>) -> PyResult<(PyObject, PyObject)> {
        let (observation, info) = self.inner.reset(seed, self.config)?;

        let info_dict = PyDict::new(py);
        info_dict.set_item("seed", info.seed)?;
        info_dict.set_item("mahjong_type", info.ruleset.code())?;
        info_dict.set_item("num_players", info.num_players)?;
        info_dict.set_item("wall_remaining", info.wall_remaining)?;

        Ok((observation_to_dict(py, &observation)?, info_dict.into()))
    }

    /// 执行一个动作编码
    pub fn step(
        &mut self,
        py: Python,
        action: usize,
    ) -> PyResult<(PyObject, f32, bool, bool, PyObject)> {
        let result = self.inner.step(action)?;

        let info_dict = PyDict::new(py);
        info_dict.set_item("actor", result.info.actor)?;
        info_dict.set_item("wall_remaining", result.info.wall_remaining)?;
        match result.info.outcome {
            StepOutcome::Discarded(tile) => {
                info_dict.set_item("outcome", "discarded")?;
                info_dict.set_item("tile", tile.code())?;
            }
            StepOutcome::Passed => info_dict.set_item("outcome", "passed")?,
            StepOutcome::Exhausted => info_dict.set_item("outcome", "exhausted")?,
            StepOutcome::Claimed(kind) => {
                info_dict.set_item("outcome", "claimed")?;
                info_dict.set_item("action_type", kind.code())?;
            }
            StepOutcome::Won { winner, self_drawn } => {
                info_dict.set_item("outcome", "won")?;
                info_dict.set_item("winner", winner)?;
                info_dict.set_item("self_drawn", self_drawn)?;
            }
            StepOutcome::Denied(kind) => {
                info_dict.set_item("outcome", "denied")?;
                info_dict.set_item("action_type", kind.code())?;
            }
            StepOutcome::InvalidDiscard(tile) => {
                info_dict.set_item("outcome", "invalid_discard")?;
                info_dict.set_item("tile", tile.code())?;
            }
        }

        Ok((
            observation_to_dict(py, &result.observation)?,
            result.reward,
            result.terminated,
            result.truncated,
            info_dict.into(),
        ))
    }

    /// 合法动作掩码（长度 47 的 bool 数组）
    pub fn legal_actions(&self, py: Python) -> PyObject {
        let legal = self.inner.legal_actions();
        PyArray1::from_slice(py, &legal).into_py(py)
    }
}

/// 观测转换为 Python 字典，各字段为 NumPy 数组
fn observation_to_dict(py: Python, observation: &Observation) -> PyResult<PyObject> {
    let dict = PyDict::new(py);
    dict.set_item("hand", PyArray1::from_slice(py, &observation.hand))?;
    dict.set_item("discards", PyArray1::from_slice(py, &observation.discards))?;
    dict.set_item("melds", PyArray1::from_slice(py, &observation.melds))?;
    dict.set_item(
        "dora_indicators",
        PyArray1::from_slice(py, &observation.dora_indicators),
    )?;
    dict.set_item("current_player", observation.current_player)?;
    dict.set_item("last_action", observation.last_action)?;
    dict.set_item(
        "waiting_actions",
        PyArray1::from_slice(py, &observation.waiting_actions),
    )?;
    dict.set_item("wall_remaining", observation.wall_remaining)?;
    Ok(dict.into())
}
