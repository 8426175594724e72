mod common;

use common::{code, rigged_engine, rigged_state, DEALER, QUIET};
use mahjong_engine::game::constants::*;
use mahjong_engine::game::game_engine::GameEngine;
use mahjong_engine::game::state::DiscardRecord;
use mahjong_engine::tile::TileType;
use mahjong_engine::{
    ActionType, EnvConfig, GameError, MahjongType, Phase, StepOutcome, TerminalReason,
};
use TileType::*;

/// 测试非法出牌：负奖励，状态不变
#[test]
fn test_discard_tile_not_in_hand() {
    let mut engine = rigged_engine([&DEALER, &QUIET, &QUIET, &QUIET]);
    let before = engine.state().cloned();

    let result = engine.step(code(Sou9)).unwrap();
    assert_eq!(result.reward, REWARD_INVALID_DISCARD);
    assert_eq!(result.info.outcome, StepOutcome::InvalidDiscard(Sou9));
    assert_eq!(engine.state().cloned(), before);
}

/// 测试未开放的特殊动作
#[test]
fn test_denied_specials() {
    let mut engine = rigged_engine([&DEALER, &QUIET, &QUIET, &QUIET]);
    let before = engine.state().cloned();

    let chi = engine.step(NUM_TILE_TYPES).unwrap();
    assert_eq!(chi.reward, REWARD_DENIED);
    assert_eq!(chi.info.outcome, StepOutcome::Denied(ActionType::Chi));

    let ron = engine.step(NUM_TILE_TYPES + 3).unwrap();
    assert_eq!(ron.reward, REWARD_FAILED_WIN);

    let tsumo = engine.step(NUM_TILE_TYPES + 4).unwrap();
    assert_eq!(tsumo.reward, REWARD_FAILED_WIN);
    assert!(!tsumo.terminated);

    assert_eq!(engine.state().cloned(), before);
}

/// 测试动作编码越界
#[test]
fn test_action_out_of_range() {
    let mut engine = rigged_engine([&DEALER, &QUIET, &QUIET, &QUIET]);
    for bad in [ACTION_SPACE_SIZE, 100, usize::MAX] {
        assert_eq!(
            engine.step(bad).unwrap_err(),
            GameError::ActionOutOfRange { code: bad, limit: ACTION_SPACE_SIZE }
        );
    }
}

/// 测试牌墙耗尽：流局，truncated 为真
#[test]
fn test_wall_exhaustion() {
    let mut state = rigged_state(11, [&DEALER, &QUIET, &QUIET, &QUIET]);
    // 把牌墙剩余的牌全部移到弃牌堆，总张数不变
    while let Some(tile) = state.wall.draw() {
        state.discards.push(DiscardRecord { player_id: 3, tile });
    }

    let mut engine = GameEngine::new();
    engine.load_state(state).unwrap();

    let result = engine.step(code(Pin5)).unwrap();
    assert_eq!(result.reward, 0.0);
    assert!(result.truncated);
    assert!(!result.terminated);
    assert_eq!(result.info.outcome, StepOutcome::Exhausted);
    assert_eq!(result.info.wall_remaining, 0);
    assert_eq!(
        engine.state().unwrap().phase,
        Phase::Terminal { reason: TerminalReason::Exhaustion }
    );

    assert_eq!(engine.step(code(Man2)).unwrap_err(), GameError::GameOver);
    assert_eq!(engine.pass().unwrap_err(), GameError::GameOver);
}

/// 测试和牌后继续 step
#[test]
fn test_step_after_win() {
    let winning = [
        Man1, Man2, Man3, Man4, Man5, Man6, Man7, Man8, Man9, Pin1, Pin2, Pin3, Sou5, Sou5,
    ];
    let mut engine = rigged_engine([&winning, &QUIET, &QUIET, &QUIET]);
    engine.step(NUM_TILE_TYPES + 4).unwrap();
    let before = engine.state().cloned();

    assert_eq!(engine.step(0).unwrap_err(), GameError::GameOver);
    assert_eq!(engine.claim(1, ActionType::Ron).unwrap_err(), GameError::GameOver);
    assert_eq!(engine.state().cloned(), before);
}

/// 测试未 reset 时调用
#[test]
fn test_calls_before_reset() {
    let mut engine = GameEngine::new();
    assert_eq!(engine.step(0).unwrap_err(), GameError::NotReset);
    assert_eq!(engine.discard(Man1).unwrap_err(), GameError::NotReset);
    assert_eq!(engine.pass().unwrap_err(), GameError::NotReset);
}

/// 测试玩家数校验
#[test]
fn test_player_count_bounds() {
    let mut engine = GameEngine::new();
    for bad in [0u8, 1, 5] {
        let err = engine.reset(Some(0), EnvConfig::new(bad, Default::default())).unwrap_err();
        assert!(matches!(err, GameError::InvalidConfig { .. }));
    }
    for ok in 2u8..=4 {
        let (obs, info) = engine.reset(Some(0), EnvConfig::new(ok, Default::default())).unwrap();
        assert_eq!(info.num_players, ok);
        assert_eq!(obs.current_player, 0);
    }
}

/// 测试牌数不守恒的快照直接 panic
#[test]
#[should_panic(expected = "tile conservation violated")]
fn test_load_state_rejects_extra_tile() {
    let mut state = rigged_state(5, [&DEALER, &QUIET, &QUIET, &QUIET]);
    state.players[1].hand.add_tile(Sou5);

    let mut engine = GameEngine::new();
    let _ = engine.load_state(state);
}

/// 测试快照中的掩码会被重新推导
#[test]
fn test_load_state_rederives_mask() {
    let mut state = rigged_state(5, [&DEALER, &QUIET, &QUIET, &QUIET]);
    state.waiting[2].set(ActionType::Ron);

    let mut engine = GameEngine::new();
    let obs = engine.load_state(state).unwrap();
    assert_eq!(obs.waiting_actions, [0; NUM_SPECIAL_ACTIONS]);
}

/// 测试 discard() 在响应阶段被拒绝
#[test]
fn test_discard_api_during_reaction() {
    let pon_hand = [
        Pin5, Pin5, Man1, Man9, Pin1, Pin9, Sou1, Sou9, WindEast, WindSouth, WindWest, DragonWhite,
        DragonRed,
    ];
    let mut engine = rigged_engine([&DEALER, &pon_hand, &QUIET, &QUIET]);
    engine.discard(Pin5).unwrap();
    assert!(matches!(
        engine.state().unwrap().phase,
        Phase::AwaitingReaction { discarder: 0 }
    ));

    let result = engine.discard(Man1).unwrap();
    assert_eq!(result.reward, REWARD_DENIED);
    assert!(matches!(
        engine.state().unwrap().phase,
        Phase::AwaitingReaction { discarder: 0 }
    ));
}

/// 测试总数正确但某种牌超过 4 张的快照直接 panic
#[test]
#[should_panic(expected = "tile multiset differs from a full set")]
fn test_load_state_rejects_forged_multiset() {
    let mut state = rigged_state(5, [&DEALER, &QUIET, &QUIET, &QUIET]);
    // 三家闲家各有一张红中，牌墙里还有一张；庄家换进第 5 张红中，换出八万
    assert!(state.players[0].hand.remove_tile(Man8));
    assert!(state.players[0].hand.add_tile(DragonRed));
    assert_eq!(state.tile_total(), MahjongType::Japan.tile_set_size());

    let mut engine = GameEngine::new();
    let _ = engine.load_state(state);
}

/// 测试当前玩家越界
#[test]
fn test_load_state_rejects_current_player_out_of_range() {
    let mut state = rigged_state(5, [&DEALER, &QUIET, &QUIET, &QUIET]);
    state.current_player = 9;

    let mut engine = GameEngine::new();
    let err = engine.load_state(state).unwrap_err();
    assert!(matches!(err, GameError::InvalidConfig { .. }));
    assert_eq!(engine.step(0).unwrap_err(), GameError::NotReset);
}

/// 测试阶段里的座位号越界
#[test]
fn test_load_state_rejects_phase_seat_out_of_range() {
    let mut state = rigged_state(5, [&DEALER, &QUIET, &QUIET, &QUIET]);
    state.phase = Phase::AwaitingDiscard { player: 7 };

    let mut engine = GameEngine::new();
    let err = engine.load_state(state).unwrap_err();
    assert!(matches!(err, GameError::InvalidConfig { .. }));
}

/// 测试玩家 ID 与座位不符
#[test]
fn test_load_state_rejects_mismatched_player_id() {
    let mut state = rigged_state(5, [&DEALER, &QUIET, &QUIET, &QUIET]);
    state.players[1].id = 3;

    let mut engine = GameEngine::new();
    let err = engine.load_state(state).unwrap_err();
    assert!(matches!(err, GameError::InvalidConfig { .. }));
}
