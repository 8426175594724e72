use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mahjong_engine::engine::action_mask::ActionMask;
use mahjong_engine::game::game_engine::GameEngine;
use mahjong_engine::tile::{Hand, TileType};
use mahjong_engine::{EnvConfig, MahjongType, Observation, Player};

fn bench_reaction_mask(c: &mut Criterion) {
    let mut player = Player::new(1);
    player.hand = Hand::from_tiles(&[
        TileType::Man1,
        TileType::Man2,
        TileType::Man3,
        TileType::Pin4,
        TileType::Pin6,
        TileType::Sou5,
        TileType::Sou5,
        TileType::Sou5,
        TileType::WindEast,
        TileType::WindEast,
        TileType::DragonRed,
        TileType::DragonRed,
        TileType::DragonRed,
    ]);

    c.bench_function("action_mask_reaction", |b| {
        b.iter(|| {
            black_box(ActionMask::reaction_mask(
                black_box(&player),
                black_box(TileType::Pin5),
                MahjongType::Japan,
            ))
        });
    });
}

fn bench_derive_and_encode(c: &mut Criterion) {
    let mut engine = GameEngine::new();
    engine
        .reset(Some(42), EnvConfig::default())
        .expect("reset");
    let state = engine.state().cloned().expect("state");

    c.bench_function("action_mask_derive", |b| {
        b.iter(|| black_box(ActionMask::derive(black_box(&state))));
    });
    c.bench_function("observation_encode", |b| {
        b.iter(|| black_box(Observation::encode(black_box(&state))));
    });
}

fn bench_full_game(c: &mut Criterion) {
    c.bench_function("full_game_first_legal", |b| {
        b.iter(|| {
            let mut engine = GameEngine::new();
            engine
                .reset(Some(7), EnvConfig::new(4, MahjongType::International))
                .expect("reset");
            loop {
                let legal = engine.legal_actions();
                let Some(action) = legal.iter().position(|&l| l) else {
                    break;
                };
                let result = engine.step(action).expect("step");
                if result.terminated || result.truncated {
                    break;
                }
            }
        });
    });
}

criterion_group!(benches, bench_reaction_mask, bench_derive_and_encode, bench_full_game);
criterion_main!(benches);
