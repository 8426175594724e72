//! 可执行文件入口：随机智能体跑一局
//!
//! 环境变量：
//! - `MAHJONG_SEED`：洗牌种子（默认 42）
//! - `MAHJONG_PLAYERS`：玩家数（默认 4）
//! - `MAHJONG_STEPS`：最多执行的步数（默认 500）
//! - `RUST_LOG`：日志过滤（默认 info）

use mahjong_engine::game::constants::{ACTION_SPACE_SIZE, NUM_TILE_TYPES};
use mahjong_engine::{EnvConfig, GameEngine, GameResult, MahjongType};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::str::FromStr;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn env_or<T: FromStr>(key: &str, default: T) -> T {
    match std::env::var(key) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            warn!(key, raw = %raw, "unparsable environment variable, using default");
            default
        }),
        Err(_) => default,
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn run() -> GameResult<()> {
    let seed: u64 = env_or("MAHJONG_SEED", 42);
    let num_players: u8 = env_or("MAHJONG_PLAYERS", 4);
    let max_steps: usize = env_or("MAHJONG_STEPS", 500);

    let mut engine = GameEngine::new();
    let (observation, reset_info) =
        engine.reset(Some(seed), EnvConfig::new(num_players, MahjongType::International))?;
    info!(
        seed,
        num_players,
        wall_remaining = reset_info.wall_remaining,
        dora = ?observation.dora_indicators,
        "game started"
    );

    // 智能体自己的随机源，和洗牌种子错开
    let mut agent_rng = ChaCha8Rng::seed_from_u64(seed.wrapping_add(1));
    let mut total_reward = 0.0f32;

    for step in 0..max_steps {
        let legal = engine.legal_actions();
        let specials: Vec<usize> = (NUM_TILE_TYPES..ACTION_SPACE_SIZE)
            .filter(|&code| legal[code])
            .collect();
        let discards: Vec<usize> = (0..NUM_TILE_TYPES).filter(|&code| legal[code]).collect();

        // 有特殊动作就执行，否则随机打一张
        let Some(&action) = specials
            .choose(&mut agent_rng)
            .or_else(|| discards.choose(&mut agent_rng))
        else {
            warn!(step, "no legal action available");
            break;
        };

        let result = engine.step(action)?;
        total_reward += result.reward;
        info!(
            step,
            action,
            reward = result.reward,
            outcome = ?result.info.outcome,
            player = result.observation.current_player,
            wall_remaining = result.info.wall_remaining,
            "step"
        );

        if result.terminated || result.truncated {
            info!(
                step,
                terminated = result.terminated,
                truncated = result.truncated,
                total_reward,
                "game over"
            );
            return Ok(());
        }
    }

    info!(max_steps, total_reward, "step limit reached");
    Ok(())
}

fn main() {
    init_logging();
    if let Err(err) = run() {
        eprintln!("error: {}", err);
        std::process::exit(1);
    }
}
