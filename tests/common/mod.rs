#![allow(dead_code)]

use mahjong_engine::game::game_engine::GameEngine;
use mahjong_engine::tile::{Hand, TileType, Wall};
use mahjong_engine::{EnvConfig, GameState, MahjongType};
use TileType::*;

/// 不会对任何数牌中张产生响应的手牌（13 张幺九）
pub const QUIET: [TileType; 13] = [
    Man1, Man9, Pin1, Pin9, Sou1, Sou9, WindEast, WindSouth, WindWest, WindNorth, DragonWhite,
    DragonGreen, DragonRed,
];

/// 庄家 14 张，不成和
pub const DEALER: [TileType; 14] = [
    Man2, Man5, Man8, Pin2, Pin5, Pin8, Sou2, Sou5, Sou8, WindEast, WindSouth, WindWest, WindNorth,
    DragonWhite,
];

/// 在真实发牌结果上替换手牌
///
/// 指定的牌从原手牌和牌墙中取出，剩下的牌组成新牌墙，每种牌的张数不变
pub fn rigged_state(seed: u64, hands: [&[TileType]; 4]) -> GameState {
    let mut engine = GameEngine::new();
    engine
        .reset(Some(seed), EnvConfig::new(4, MahjongType::Japan))
        .expect("reset");
    let mut state = engine.state().cloned().expect("state after reset");

    // 先放原手牌，取牌时优先从手牌里取，牌墙顺序尽量保留
    let mut pool: Vec<TileType> = state
        .players
        .iter()
        .flat_map(|p| p.hand.to_sorted_vec())
        .chain(state.wall.remaining().iter().copied())
        .collect();

    for (player, tiles) in state.players.iter_mut().zip(hands) {
        assert_eq!(player.hand.total_count(), tiles.len(), "rigged hand size");
        for tile in tiles {
            let pos = pool
                .iter()
                .position(|t| t == tile)
                .unwrap_or_else(|| panic!("no {:?} left for rigged hands", tile));
            pool.remove(pos);
        }
        player.hand = Hand::from_tiles(tiles);
    }
    state.wall = Wall::from_tiles(pool);
    state
}

/// 载入替换过手牌的状态
pub fn rigged_engine(hands: [&[TileType]; 4]) -> GameEngine {
    let mut engine = GameEngine::new();
    engine.load_state(rigged_state(7, hands)).expect("load rigged state");
    engine
}

pub fn code(tile: TileType) -> usize {
    tile.code() as usize
}
