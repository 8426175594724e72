use crate::game::meld::Meld;
use crate::game::player::Player;
use crate::game::rules;
use crate::tile::TileType;

/// 碰牌操作器
pub struct PongHandler;

impl PongHandler {
    /// 检查是否可以碰牌
    ///
    /// 碰牌条件：手牌中至少有两张与打出的牌相同的牌
    pub fn can_pong(player: &Player, tile: TileType) -> bool {
        rules::is_valid_triplet_claim(&player.hand, tile)
    }

    /// 执行碰牌
    ///
    /// 从手牌移除两张，记录刻子副露。不满足条件时玩家状态不变。
    ///
    /// # 返回
    ///
    /// 是否成功碰牌
    pub fn pong(player: &mut Player, tile: TileType) -> bool {
        if !PongHandler::can_pong(player, tile) {
            return false;
        }

        for _ in 0..2 {
            player.hand.remove_tile(tile);
        }
        player.melds.push(Meld::Triplet { tile });
        true
    }
}
