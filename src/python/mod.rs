//! Python 绑定模块
//!
//! 提供 PyO3 接口，将 Rust 环境暴露给 Python

// 允许 PyO3 宏生成的 non-local impl 定义（这是 PyO3 的正常行为）
#![allow(non_local_definitions)]

pub mod env;

use pyo3::prelude::*;

/// Python 模块初始化
#[pymodule]
fn mahjong_engine(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_class::<env::PyMahjongEnv>()?;
    m.add("ACTION_SPACE_SIZE", crate::game::constants::ACTION_SPACE_SIZE)?;
    Ok(())
}
