use crate::config::{EnvConfig, MahjongType};
use crate::engine::action_mask::{ActionMask, WaitingMask};
use crate::engine::observation::Observation;
use crate::error::{GameError, GameResult};
use crate::game::action::{Action, ActionType};
use crate::game::chi::ChiHandler;
use crate::game::constants::*;
use crate::game::kong::KongHandler;
use crate::game::pong::PongHandler;
use crate::game::state::{DiscardRecord, GameState, Phase, TerminalReason};
use crate::tile::{TileType, Wall};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// reset 返回的附加信息
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResetInfo {
    /// 洗牌种子（调用方自带随机源时为 None）
    pub seed: Option<u64>,
    pub ruleset: MahjongType,
    pub num_players: u8,
    pub wall_remaining: usize,
}

/// 单步结果的类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepOutcome {
    /// 正常出牌
    Discarded(TileType),
    /// 所有等待的玩家放弃响应
    Passed,
    /// 吃/碰/杠成功
    Claimed(ActionType),
    /// 和牌
    Won { winner: u8, self_drawn: bool },
    /// 特殊动作被拒绝（未开放或校验失败）
    Denied(ActionType),
    /// 打出手中没有的牌
    InvalidDiscard(TileType),
    /// 出牌或放弃后下家无牌可摸（流局）
    Exhausted,
}

/// step 返回的附加信息
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepInfo {
    /// 执行动作的玩家（放弃响应时为 None）
    pub actor: Option<u8>,
    pub outcome: StepOutcome,
    pub wall_remaining: usize,
}

/// 单步结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepResult {
    pub observation: Observation,
    pub reward: f32,
    pub terminated: bool,
    pub truncated: bool,
    pub info: StepInfo,
}

/// 一次状态转移（内部使用）
struct Transition {
    reward: f32,
    actor: Option<u8>,
    outcome: StepOutcome,
}

/// 游戏引擎
///
/// 负责发牌、回合推进和动作校验。每个实例由一个调用方独占，
/// step 同步执行完毕后才能提交下一步。
#[derive(Debug, Clone, Default)]
pub struct GameEngine {
    /// 游戏状态（reset 前为 None）
    state: Option<GameState>,
}

impl GameEngine {
    /// 创建新的游戏引擎（需要先 reset）
    pub fn new() -> Self {
        Self::default()
    }

    /// 当前游戏状态
    pub fn state(&self) -> Option<&GameState> {
        self.state.as_ref()
    }

    /// 用种子开始新的一局；`seed` 为 None 时从系统熵源取种子
    pub fn reset(
        &mut self,
        seed: Option<u64>,
        config: EnvConfig,
    ) -> GameResult<(Observation, ResetInfo)> {
        let mut rng = match seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        let (observation, mut info) = self.reset_with_rng(&mut rng, config)?;
        info.seed = seed;
        trace!(?seed, "reset seeded");
        Ok((observation, info))
    }

    /// 用调用方提供的随机源开始新的一局
    ///
    /// 1. 按规则生成整副牌并洗牌
    /// 2. 从牌墙尾部预留 5 张宝牌指示牌
    /// 3. 按座位顺序每人发 13 张
    /// 4. 庄家（0 号）摸第一张牌
    pub fn reset_with_rng<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        config: EnvConfig,
    ) -> GameResult<(Observation, ResetInfo)> {
        config.validate()?;

        let mut state = GameState::new(config.mahjong_type, config.num_players);
        let mut wall = Wall::build(config.mahjong_type);
        wall.shuffle(rng);
        state.dora_indicators = wall.reserve_indicators();

        for player in state.players.iter_mut() {
            for _ in 0..HAND_SIZE {
                match wall.draw() {
                    Some(tile) => {
                        player.hand.add_tile(tile);
                    }
                    None => {
                        return Err(GameError::InvalidConfig {
                            reason: "wall too small to deal initial hands".to_string(),
                        })
                    }
                }
            }
        }
        state.wall = wall;

        Self::draw_for(&mut state, 0);
        Self::check_invariants(&state);

        debug!(
            ruleset = ?config.mahjong_type,
            num_players = config.num_players,
            wall_remaining = state.wall.remaining_count(),
            "game reset"
        );

        let info = ResetInfo {
            seed: None,
            ruleset: config.mahjong_type,
            num_players: config.num_players,
            wall_remaining: state.wall.remaining_count(),
        };
        let observation = Observation::encode(&state);
        self.state = Some(state);
        Ok((observation, info))
    }

    /// 恢复一个游戏状态快照
    ///
    /// 座位号越界返回 `InvalidConfig`；等待动作掩码会按规则重新推导；
    /// 牌数守恒不成立时直接 panic
    pub fn load_state(&mut self, mut state: GameState) -> GameResult<Observation> {
        EnvConfig::new(state.num_players(), state.ruleset).validate()?;
        state.validate_seats()?;
        state.waiting = ActionMask::derive(&state);
        Self::check_invariants(&state);
        let observation = Observation::encode(&state);
        self.state = Some(state);
        Ok(observation)
    }

    /// 执行一个动作编码
    ///
    /// - `[0, 42)`：打出对应的牌（等待响应阶段表示所有玩家放弃）
    /// - `[42, 47)`：吃、碰、杠、荣和、自摸，由第一个可以执行的玩家执行
    ///
    /// 非法动作只产生负奖励，状态不变；只有编码越界返回错误
    pub fn step(&mut self, code: usize) -> GameResult<StepResult> {
        let action = Action::from_code(code)?;
        let state = self.active_state_mut()?;

        let transition = match action {
            Action::Discard(tile) => match state.phase {
                Phase::AwaitingReaction { .. } => Self::apply_pass(state),
                _ => Self::apply_discard(state, tile),
            },
            Action::Special(kind) => match Self::resolve_actor(state, kind) {
                Some(actor) => Self::apply_claim(state, actor, kind),
                None => Self::deny(state, None, kind),
            },
        };

        Ok(Self::finish(state, transition))
    }

    /// 打出一张牌（等待出牌阶段）
    pub fn discard(&mut self, tile: TileType) -> GameResult<StepResult> {
        let state = self.active_state_mut()?;
        let transition = match state.phase {
            Phase::AwaitingReaction { .. } => Self::deny(state, None, ActionType::Discard),
            _ => Self::apply_discard(state, tile),
        };
        Ok(Self::finish(state, transition))
    }

    /// 指定玩家执行特殊动作
    pub fn claim(&mut self, actor: u8, kind: ActionType) -> GameResult<StepResult> {
        let state = self.active_state_mut()?;
        let transition = if actor < state.num_players() {
            Self::apply_claim(state, actor, kind)
        } else {
            Self::deny(state, None, kind)
        };
        Ok(Self::finish(state, transition))
    }

    /// 所有等待的玩家放弃响应，下家摸牌
    pub fn pass(&mut self) -> GameResult<StepResult> {
        let state = self.active_state_mut()?;
        let transition = match state.phase {
            Phase::AwaitingReaction { .. } => Self::apply_pass(state),
            _ => Self::deny(state, None, ActionType::Discard),
        };
        Ok(Self::finish(state, transition))
    }

    /// 当前可以提交的动作编码
    pub fn legal_actions(&self) -> [bool; ACTION_SPACE_SIZE] {
        match &self.state {
            Some(state) => ActionMask::legal_actions(state),
            None => [false; ACTION_SPACE_SIZE],
        }
    }

    fn active_state_mut(&mut self) -> GameResult<&mut GameState> {
        let state = self.state.as_mut().ok_or(GameError::NotReset)?;
        if state.is_game_over() {
            return Err(GameError::GameOver);
        }
        Ok(state)
    }

    /// 校验不变量并生成单步结果
    fn finish(state: &GameState, transition: Transition) -> StepResult {
        Self::check_invariants(state);

        StepResult {
            observation: Observation::encode(state),
            reward: transition.reward,
            terminated: state.terminated,
            truncated: state.truncated,
            info: StepInfo {
                actor: transition.actor,
                outcome: transition.outcome,
                wall_remaining: state.wall.remaining_count(),
            },
        }
    }

    /// 牌数守恒与掩码推导一致性；违反即为程序缺陷
    fn check_invariants(state: &GameState) {
        assert_eq!(
            state.tile_total(),
            state.ruleset.tile_set_size(),
            "tile conservation violated"
        );
        let expected = TileType::ALL.map(|tile| state.ruleset.copies_of(tile));
        assert_eq!(
            state.tile_census(),
            expected,
            "tile multiset differs from a full set"
        );
        assert_eq!(
            state.waiting,
            ActionMask::derive(state),
            "waiting-action mask drifted from the rules engine"
        );
    }

    /// 处理出牌
    fn apply_discard(state: &mut GameState, tile: TileType) -> Transition {
        let player_id = state.current_player;

        if !state.players[player_id as usize].hand.remove_tile(tile) {
            debug!(player_id, ?tile, "discard of a tile not in hand");
            return Transition {
                reward: REWARD_INVALID_DISCARD,
                actor: Some(player_id),
                outcome: StepOutcome::InvalidDiscard(tile),
            };
        }

        trace!(player_id, ?tile, turn = state.turn, "discard");
        state.discards.push(DiscardRecord { player_id, tile });
        state.last_discard = Some(tile);
        state.last_action = Some(ActionType::Discard);
        state.just_drew = false;
        state.turn += 1;

        let next = state.next_seat(player_id);
        state.current_player = next;

        // 其他玩家的响应
        let mut masks = vec![WaitingMask::EMPTY; state.players.len()];
        for player in state.players.iter().filter(|p| p.id != player_id) {
            masks[player.id as usize] = ActionMask::reaction_mask(player, tile, state.ruleset);
        }

        if masks.iter().any(|m| m.has_reaction()) {
            state.waiting = masks;
            state.phase = Phase::AwaitingReaction { discarder: player_id };
            debug!(player_id, ?tile, mask = state.waiting_mask().bits(), "discard opens claim window");
        } else {
            Self::draw_for(state, next);
        }

        Transition {
            reward: 0.0,
            actor: Some(player_id),
            outcome: if state.truncated {
                StepOutcome::Exhausted
            } else {
                StepOutcome::Discarded(tile)
            },
        }
    }

    /// 所有等待的玩家放弃，出牌者的下家摸牌
    fn apply_pass(state: &mut GameState) -> Transition {
        if let Phase::AwaitingReaction { discarder } = state.phase {
            let next = state.next_seat(discarder);
            trace!(discarder, next, "claim window passed");
            Self::draw_for(state, next);
        }
        Transition {
            reward: 0.0,
            actor: None,
            outcome: if state.truncated {
                StepOutcome::Exhausted
            } else {
                StepOutcome::Passed
            },
        }
    }

    /// 按座位顺序找到第一个可以执行 `kind` 的玩家
    ///
    /// 响应阶段从出牌者的下家开始；自摸只看当前玩家
    fn resolve_actor(state: &GameState, kind: ActionType) -> Option<u8> {
        let n = state.num_players();
        let first = match state.phase {
            Phase::AwaitingReaction { discarder } => state.next_seat(discarder),
            _ => state.current_player,
        };
        (0..n)
            .map(|offset| (first + offset) % n)
            .find(|&seat| state.waiting[seat as usize].contains(kind))
    }

    /// 处理吃/碰/杠/荣和/自摸
    ///
    /// 掩码位必须已开放，且规则引擎用当前手牌重新校验通过
    fn apply_claim(state: &mut GameState, actor: u8, kind: ActionType) -> Transition {
        if !state.waiting[actor as usize].contains(kind) {
            return Self::deny(state, Some(actor), kind);
        }

        match kind {
            ActionType::Chi | ActionType::Pon | ActionType::Kan => {
                Self::apply_meld_claim(state, actor, kind)
            }
            ActionType::Ron => Self::apply_ron(state, actor),
            ActionType::Tsumo => Self::apply_tsumo(state, actor),
            ActionType::Discard => Self::deny(state, Some(actor), kind),
        }
    }

    fn apply_meld_claim(state: &mut GameState, actor: u8, kind: ActionType) -> Transition {
        let Some(tile) = state.last_discard else {
            return Self::deny(state, Some(actor), kind);
        };

        let player = &mut state.players[actor as usize];
        let (claimed, reward) = match kind {
            ActionType::Chi => (ChiHandler::chi(player, tile), REWARD_CHI),
            ActionType::Pon => (PongHandler::pong(player, tile), REWARD_PON),
            _ => (KongHandler::kong(player, tile, false), REWARD_KAN),
        };
        if !claimed {
            return Self::deny(state, Some(actor), kind);
        }

        // 被鸣的牌从弃牌堆移入副露
        Self::take_last_discard(state, tile);
        state.last_action = Some(kind);
        state.current_player = actor;
        state.waiting = vec![WaitingMask::EMPTY; state.players.len()];
        state.just_drew = false;
        state.phase = Phase::AwaitingDiscard { player: actor };
        debug!(actor, ?kind, ?tile, "claim accepted");

        if kind == ActionType::Kan {
            // 杠后补牌
            Self::draw_for(state, actor);
        }

        Transition {
            reward,
            actor: Some(actor),
            outcome: StepOutcome::Claimed(kind),
        }
    }

    fn apply_ron(state: &mut GameState, actor: u8) -> Transition {
        let winning = state
            .last_discard
            .filter(|&tile| state.players[actor as usize].is_complete_with(tile, state.ruleset));
        let Some(tile) = winning else {
            return Self::deny(state, Some(actor), ActionType::Ron);
        };

        Self::take_last_discard(state, tile);
        state.players[actor as usize].hand.add_tile(tile);
        state.current_player = actor;
        Self::finish_with_win(state, actor, false);

        Transition {
            reward: REWARD_RON,
            actor: Some(actor),
            outcome: StepOutcome::Won { winner: actor, self_drawn: false },
        }
    }

    fn apply_tsumo(state: &mut GameState, actor: u8) -> Transition {
        if !state.players[actor as usize].is_complete(state.ruleset) {
            return Self::deny(state, Some(actor), ActionType::Tsumo);
        }

        Self::finish_with_win(state, actor, true);
        Transition {
            reward: REWARD_TSUMO,
            actor: Some(actor),
            outcome: StepOutcome::Won { winner: actor, self_drawn: true },
        }
    }

    fn finish_with_win(state: &mut GameState, winner: u8, self_drawn: bool) {
        state.last_action = Some(if self_drawn { ActionType::Tsumo } else { ActionType::Ron });
        state.waiting = vec![WaitingMask::EMPTY; state.players.len()];
        state.just_drew = false;
        state.terminated = true;
        state.phase = Phase::Terminal {
            reason: TerminalReason::Win { winner, self_drawn },
        };
        debug!(winner, self_drawn, turn = state.turn, "game won");
    }

    /// 拒绝动作：状态不变，返回负奖励
    fn deny(state: &GameState, actor: Option<u8>, kind: ActionType) -> Transition {
        let reward = if kind.is_win() {
            REWARD_FAILED_WIN
        } else {
            REWARD_DENIED
        };
        debug!(?actor, ?kind, reward, turn = state.turn, "action denied");
        Transition {
            reward,
            actor,
            outcome: StepOutcome::Denied(kind),
        }
    }

    /// 把最后一张弃牌从弃牌堆取走
    fn take_last_discard(state: &mut GameState, tile: TileType) {
        let record = state.discards.pop();
        assert_eq!(
            record.map(|r| r.tile),
            Some(tile),
            "claimed tile is not the last discard"
        );
        state.last_discard = None;
    }

    /// 给 `seat` 摸一张牌；牌墙已空则流局
    fn draw_for(state: &mut GameState, seat: u8) {
        state.waiting = vec![WaitingMask::EMPTY; state.players.len()];
        state.current_player = seat;

        match state.wall.draw() {
            Some(tile) => {
                let player = &mut state.players[seat as usize];
                player.hand.add_tile(tile);
                state.just_drew = true;
                state.phase = Phase::AwaitingDiscard { player: seat };
                state.waiting[seat as usize] = ActionMask::tsumo_mask(player, state.ruleset);
                trace!(seat, ?tile, remaining = state.wall.remaining_count(), "draw");
            }
            None => {
                state.just_drew = false;
                // 不覆盖同一步里已经设置的和牌标志
                state.truncated = true;
                if !state.terminated {
                    state.phase = Phase::Terminal { reason: TerminalReason::Exhaustion };
                }
                debug!(turn = state.turn, "wall exhausted");
            }
        }
    }
}
