//! 定跡が辿る局面の抽象
//!
//! 定跡は合法手生成・局面の更新・ハッシュキー・静的手順付けだけを必要とする。

use std::num::NonZeroU64;

use crate::movegen::{generate_moves, order_static};
use crate::position::Position;
use crate::types::Move;

/// 局面のハッシュキー（0 は予約済みで存在しない）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Key(NonZeroU64);

impl Key {
    /// 生の値から生成（0 は None）
    #[inline]
    pub const fn new(raw: u64) -> Option<Key> {
        match NonZeroU64::new(raw) {
            Some(k) => Some(Key(k)),
            None => None,
        }
    }

    /// 生の値
    #[inline]
    pub const fn get(self) -> u64 {
        self.0.get()
    }

    /// 表の開始位置
    #[inline]
    pub const fn index(self, mask: usize) -> usize {
        (self.0.get() as usize) & mask
    }
}

/// 定跡の木を構成する局面
pub trait BookNode: Sized {
    /// 指し手
    type Move: Copy;

    /// ハッシュキー（表現できない局面は None）
    fn key(&self) -> Option<Key>;

    /// 合法手（順序は問わない）
    fn legal_moves(&self) -> Vec<Self::Move>;

    /// 定跡ファイルの子の並び順に並べる
    fn order_static(&self, moves: &mut [Self::Move]);

    /// 指した後の局面
    fn succ(&self, mv: Self::Move) -> Self;
}

impl BookNode for Position {
    type Move = Move;

    fn key(&self) -> Option<Key> {
        Key::new(Position::key(self))
    }

    fn legal_moves(&self) -> Vec<Move> {
        generate_moves(self).into_vec()
    }

    fn order_static(&self, moves: &mut [Move]) {
        order_static(moves, self);
    }

    fn succ(&self, mv: Move) -> Position {
        Position::succ(self, mv)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_zero_is_none() {
        assert!(Key::new(0).is_none());
        assert_eq!(Key::new(42).map(Key::get), Some(42));
    }

    #[test]
    fn test_key_index_masks_low_bits() {
        let key = Key::new(0x1234_5678_9ABC_DEF0).unwrap();
        assert_eq!(key.index(0xFFFF), 0xDEF0);
    }

    #[test]
    fn test_empty_board_is_unrepresentable() {
        assert!(BookNode::key(&Position::new()).is_none());
        assert!(BookNode::key(&Position::startpos()).is_some());
    }
}
