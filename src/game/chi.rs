use crate::game::meld::Meld;
use crate::game::player::Player;
use crate::game::rules;
use crate::tile::TileType;

/// 吃牌操作器
pub struct ChiHandler;

impl ChiHandler {
    /// 检查是否可以吃牌
    pub fn can_chi(player: &Player, tile: TileType) -> bool {
        rules::is_valid_sequence_claim(&player.hand, tile)
    }

    /// 执行吃牌
    ///
    /// 按「最小、中间、最大」的顺序选第一种可行组合，
    /// 从手牌移除另外两张并记录顺子副露。不满足条件时玩家状态不变。
    ///
    /// # 返回
    ///
    /// 是否成功吃牌
    pub fn chi(player: &mut Player, tile: TileType) -> bool {
        let Some([first, second]) = rules::sequence_partners(&player.hand, tile) else {
            return false;
        };

        player.hand.remove_tile(first);
        player.hand.remove_tile(second);

        let mut tiles = [first, second, tile];
        tiles.sort_unstable();
        player.melds.push(Meld::Sequence { tiles, claimed: tile });
        true
    }
}
