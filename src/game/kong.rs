use crate::game::meld::Meld;
use crate::game::player::Player;
use crate::game::rules;
use crate::tile::TileType;

/// 杠操作器
pub struct KongHandler;

impl KongHandler {
    /// 检查是否可以杠别人打出的牌
    ///
    /// 杠牌条件：手牌中恰好有三张相同的牌。
    /// `closed` 只决定副露是否为暗杠，不影响判定。
    pub fn can_kong(player: &Player, tile: TileType, closed: bool) -> bool {
        rules::is_valid_quad_claim(&player.hand, tile, closed)
    }

    /// 执行杠牌
    ///
    /// 从手牌移除三张，记录杠副露；补牌由回合控制器负责。
    ///
    /// # 返回
    ///
    /// 是否成功杠牌
    pub fn kong(player: &mut Player, tile: TileType, closed: bool) -> bool {
        if !KongHandler::can_kong(player, tile, closed) {
            return false;
        }

        for _ in 0..3 {
            player.hand.remove_tile(tile);
        }
        player.melds.push(Meld::Quad { tile, concealed: closed });
        true
    }
}
