use crate::config::MahjongType;
use crate::tile::{is_winning_hand, Hand, TileType};

/// 检查是否可以吃牌
///
/// 只有数牌能组成顺子。被吃的牌可以是顺子的最小、中间或最大一张，
/// 另外两张需在手牌中，且顺子不能跨花色。
///
/// # 返回
///
/// `true` 表示至少有一种组合可以吃
pub fn is_valid_sequence_claim(hand: &Hand, tile: TileType) -> bool {
    sequence_partners(hand, tile).is_some()
}

/// 查找吃牌所需的另外两张牌
///
/// 按「被吃牌为最小、中间、最大」的顺序返回第一个手牌能满足的组合
pub fn sequence_partners(hand: &Hand, tile: TileType) -> Option<[TileType; 2]> {
    if !tile.is_suited() {
        return None;
    }

    const PLACEMENTS: [[i8; 2]; 3] = [[1, 2], [-1, 1], [-2, -1]];
    PLACEMENTS.iter().find_map(|&[a, b]| {
        let first = tile.offset(a)?;
        let second = tile.offset(b)?;
        (hand.has_tile(first) && hand.has_tile(second)).then_some([first, second])
    })
}

/// 检查是否可以碰牌：手牌中至少有两张相同的牌
pub fn is_valid_triplet_claim(hand: &Hand, tile: TileType) -> bool {
    hand.tile_count(tile) >= 2
}

/// 检查是否可以杠牌：手牌中恰好有三张相同的牌
///
/// `closed` 只影响杠的明暗（副露可见性），不影响合法性
pub fn is_valid_quad_claim(hand: &Hand, tile: TileType, closed: bool) -> bool {
    let _ = closed;
    hand.tile_count(tile) == 3
}

/// 检查手牌加上一张牌是否胡牌（荣和判定）
pub fn is_winning_with(hand: &Hand, tile: TileType, ruleset: MahjongType) -> bool {
    let mut tiles = hand.to_sorted_vec();
    tiles.push(tile);
    is_winning_hand(&tiles, ruleset)
}
