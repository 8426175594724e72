use crate::game::constants::RANKS_PER_SUIT;
use serde::{Deserialize, Serialize};

/// 麻将牌类型
///
/// 共 42 种：万、筒、条各 9 种，字牌 7 种（风牌 4 种 + 三元牌 3 种），花牌 8 种。
/// 数值编码是对外协议的一部分，不能改动。
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TileType {
    // 万子
    Man1 = 0,
    Man2 = 1,
    Man3 = 2,
    Man4 = 3,
    Man5 = 4,
    Man6 = 5,
    Man7 = 6,
    Man8 = 7,
    Man9 = 8,
    // 筒子
    Pin1 = 9,
    Pin2 = 10,
    Pin3 = 11,
    Pin4 = 12,
    Pin5 = 13,
    Pin6 = 14,
    Pin7 = 15,
    Pin8 = 16,
    Pin9 = 17,
    // 条子
    Sou1 = 18,
    Sou2 = 19,
    Sou3 = 20,
    Sou4 = 21,
    Sou5 = 22,
    Sou6 = 23,
    Sou7 = 24,
    Sou8 = 25,
    Sou9 = 26,
    // 东南西北
    WindEast = 27,
    WindSouth = 28,
    WindWest = 29,
    WindNorth = 30,
    // 中发白
    DragonRed = 31,
    DragonGreen = 32,
    DragonWhite = 33,
    // 春夏秋冬梅兰竹菊
    Spring = 34,
    Summer = 35,
    Autumn = 36,
    Winter = 37,
    Plum = 38,
    Orchid = 39,
    Bamboo = 40,
    Chrysanthemum = 41,
}

use TileType::*;

impl TileType {
    /// 牌的种类数
    pub const COUNT: usize = 42;

    /// 每种花色的数字范围：1-9
    pub const MIN_RANK: u8 = 1;
    pub const MAX_RANK: u8 = 9;

    /// 第一张字牌的编码（小于它的都是数牌）
    pub const FIRST_HONOR: u8 = 27;

    /// 第一张花牌的编码
    pub const FIRST_FLOWER: u8 = 34;

    /// 按编码顺序排列的所有牌
    pub const ALL: [TileType; 42] = [
        Man1, Man2, Man3, Man4, Man5, Man6, Man7, Man8, Man9,
        Pin1, Pin2, Pin3, Pin4, Pin5, Pin6, Pin7, Pin8, Pin9,
        Sou1, Sou2, Sou3, Sou4, Sou5, Sou6, Sou7, Sou8, Sou9,
        WindEast, WindSouth, WindWest, WindNorth,
        DragonRed, DragonGreen, DragonWhite,
        Spring, Summer, Autumn, Winter, Plum, Orchid, Bamboo, Chrysanthemum,
    ];

    /// 数值编码（0-41）
    #[inline]
    pub fn code(self) -> u8 {
        self as u8
    }

    /// 从编码还原牌，越界返回 None
    #[inline]
    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.get(code as usize).copied()
    }

    /// 用花色和数字创建数牌
    pub fn suited(suit: Suit, rank: u8) -> Option<Self> {
        if !(Self::MIN_RANK..=Self::MAX_RANK).contains(&rank) {
            return None;
        }
        Self::from_code(suit as u8 * RANKS_PER_SUIT as u8 + rank - 1)
    }

    /// 获取花色（字牌、花牌返回 None）
    #[inline]
    pub fn suit(self) -> Option<Suit> {
        match self.code() / (RANKS_PER_SUIT as u8) {
            0 if self.is_suited() => Some(Suit::Man),
            1 if self.is_suited() => Some(Suit::Pin),
            2 if self.is_suited() => Some(Suit::Sou),
            _ => None,
        }
    }

    /// 获取数字（1-9，字牌、花牌返回 None）
    #[inline]
    pub fn rank(self) -> Option<u8> {
        if self.is_suited() {
            Some(self.code() % RANKS_PER_SUIT as u8 + 1)
        } else {
            None
        }
    }

    /// 是否为数牌（万、筒、条）
    #[inline]
    pub fn is_suited(self) -> bool {
        self.code() < Self::FIRST_HONOR
    }

    /// 是否为字牌（风牌、三元牌）
    #[inline]
    pub fn is_honor(self) -> bool {
        (Self::FIRST_HONOR..Self::FIRST_FLOWER).contains(&self.code())
    }

    /// 是否为花牌
    #[inline]
    pub fn is_flower(self) -> bool {
        self.code() >= Self::FIRST_FLOWER
    }

    /// 同花色内偏移 `delta` 个数字，越出 1-9 范围返回 None
    pub fn offset(self, delta: i8) -> Option<Self> {
        let suit = self.suit()?;
        let rank = self.rank()? as i8 + delta;
        if rank < Self::MIN_RANK as i8 || rank > Self::MAX_RANK as i8 {
            return None;
        }
        Self::suited(suit, rank as u8)
    }
}

/// 花色枚举
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Man = 0,
    Pin = 1,
    Sou = 2,
}

impl Suit {
    /// 所有花色
    pub fn all() -> [Suit; 3] {
        [Suit::Man, Suit::Pin, Suit::Sou]
    }
}
