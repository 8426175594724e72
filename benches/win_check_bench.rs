use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mahjong_engine::tile::{is_winning_hand, TileType};
use mahjong_engine::MahjongType;
use TileType::*;

fn bench_win_check_normal(c: &mut Criterion) {
    // 基本和牌型
    let tiles = [
        Man1, Man1, Man2, Man3, Man4, Man5, Man6, Man7, Man8, Man9, Man9, Pin1, Pin2, Pin3,
    ];

    c.bench_function("win_check_normal", |b| {
        b.iter(|| black_box(is_winning_hand(black_box(&tiles), MahjongType::Japan)));
    });
}

fn bench_win_check_pure_suit(c: &mut Criterion) {
    // 九莲宝灯形，拆分分支最多
    let tiles = [
        Man1, Man1, Man1, Man2, Man3, Man4, Man5, Man5, Man6, Man7, Man8, Man9, Man9, Man9,
    ];

    c.bench_function("win_check_pure_suit", |b| {
        b.iter(|| black_box(is_winning_hand(black_box(&tiles), MahjongType::Japan)));
    });
}

fn bench_win_check_miss(c: &mut Criterion) {
    let tiles = [
        Man1, Man9, Pin1, Pin9, Sou1, Sou9, WindEast, WindSouth, WindWest, WindNorth, DragonWhite,
        DragonGreen, DragonRed, DragonRed,
    ];

    c.bench_function("win_check_miss", |b| {
        b.iter(|| black_box(is_winning_hand(black_box(&tiles), MahjongType::International)));
    });
}

criterion_group!(
    benches,
    bench_win_check_normal,
    bench_win_check_pure_suit,
    bench_win_check_miss
);
criterion_main!(benches);
