use super::tile::TileType;
use crate::config::MahjongType;
use crate::game::constants::{NUM_TILE_TYPES, WINNING_HAND_SIZE};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// 牌组（顺子或刻子）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Group {
    /// 顺子（同花色连续三张，记录最小的一张）
    Sequence { start: TileType },
    /// 刻子（三张相同牌）
    Triplet { tile: TileType },
}

/// 胡牌拆解结果：1 个对子 + 若干顺子/刻子
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinResult {
    /// 对子（雀头）
    pub pair: TileType,
    /// 手牌中的顺子/刻子（不含副露）
    pub groups: SmallVec<[Group; 4]>,
}

/// 按编码下标统计牌的数量
pub fn tile_counts(tiles: &[TileType]) -> [u8; NUM_TILE_TYPES] {
    let mut counts = [0u8; NUM_TILE_TYPES];
    for tile in tiles {
        counts[tile.code() as usize] += 1;
    }
    counts
}

/// 判定 14 张牌是否胡牌（1 个对子 + 4 个顺子/刻子）
///
/// 与输入顺序无关；包含规则中不存在的牌（如无花规则下的花牌）时不胡
pub fn is_winning_hand(tiles: &[TileType], ruleset: MahjongType) -> bool {
    is_complete_hand(tiles, 0, ruleset)
}

/// 判定已有 `open_sets` 组副露时，暗手是否构成胡牌
///
/// 暗手张数必须为 `14 - 3 * open_sets`，拆成 1 个对子 + `4 - open_sets` 个面子
pub fn is_complete_hand(concealed: &[TileType], open_sets: usize, ruleset: MahjongType) -> bool {
    find_decomposition(concealed, open_sets, ruleset).is_some()
}

/// 查找一种胡牌拆解
///
/// # 算法
///
/// 依次假设每种数量 ≥ 2 的牌为对子，去掉两张后递归检查剩余牌能否全部组成面子
pub fn find_decomposition(
    concealed: &[TileType],
    open_sets: usize,
    ruleset: MahjongType,
) -> Option<WinResult> {
    if open_sets > 4 || concealed.len() + 3 * open_sets != WINNING_HAND_SIZE {
        return None;
    }
    if concealed.iter().any(|&t| !ruleset.includes(t)) {
        return None;
    }

    let mut counts = tile_counts(concealed);
    for pair in TileType::ALL {
        let idx = pair.code() as usize;
        if counts[idx] < 2 {
            continue;
        }
        counts[idx] -= 2;
        let groups = find_groups(&mut counts);
        counts[idx] += 2;

        if let Some(groups) = groups {
            return Some(WinResult { pair, groups });
        }
    }
    None
}

/// 剩余牌能否全部组成面子（空集合视为可以）
pub fn can_form_sets(tiles: &[TileType]) -> bool {
    let mut counts = tile_counts(tiles);
    find_groups(&mut counts).is_some()
}

/// 递归回溯查找面子组合
///
/// 先尝试第一种数量 ≥ 3 的牌组成刻子，再尝试每个合法的顺子起点。
/// 递归深度不超过 4，无需缓存。`counts` 在返回前恢复原状。
fn find_groups(counts: &mut [u8; NUM_TILE_TYPES]) -> Option<SmallVec<[Group; 4]>> {
    if counts.iter().all(|&c| c == 0) {
        return Some(SmallVec::new());
    }

    // 尝试刻子
    if let Some(idx) = counts.iter().position(|&c| c >= 3) {
        counts[idx] -= 3;
        let found = find_groups(counts);
        counts[idx] += 3;

        if let Some(mut groups) = found {
            groups.push(Group::Triplet { tile: TileType::ALL[idx] });
            return Some(groups);
        }
    }

    // 尝试顺子（起点数字 1-7，不跨花色）
    for start in TileType::ALL.iter().copied().filter(|t| t.is_suited()) {
        let (Some(mid), Some(high)) = (start.offset(1), start.offset(2)) else {
            continue;
        };
        let run = [start.code() as usize, mid.code() as usize, high.code() as usize];
        if run.iter().any(|&i| counts[i] == 0) {
            continue;
        }

        for &i in &run {
            counts[i] -= 1;
        }
        let found = find_groups(counts);
        for &i in &run {
            counts[i] += 1;
        }

        if let Some(mut groups) = found {
            groups.push(Group::Sequence { start });
            return Some(groups);
        }
    }

    None
}
