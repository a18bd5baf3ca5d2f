//! 指し手（Move）

use crate::bitboard::Bitboard;

use super::Square;

/// 指し手
///
/// 連続取りの途中経路は保持せず、出発升・到着升・取った駒の集合で同一性を判定する。
/// 経路だけが異なる取りは同じ手として扱う。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    from: Square,
    to: Square,
    captured: Bitboard,
}

impl Move {
    /// 取りのない手
    #[inline]
    pub const fn quiet(from: Square, to: Square) -> Move {
        Move {
            from,
            to,
            captured: Bitboard::EMPTY,
        }
    }

    /// 取りの手
    #[inline]
    pub const fn capture(from: Square, to: Square, captured: Bitboard) -> Move {
        Move { from, to, captured }
    }

    /// 出発升
    #[inline]
    pub const fn from(self) -> Square {
        self.from
    }

    /// 到着升
    #[inline]
    pub const fn to(self) -> Square {
        self.to
    }

    /// 取った駒のビットボード
    #[inline]
    pub const fn captured(self) -> Bitboard {
        self.captured
    }

    /// 取りの手かどうか
    #[inline]
    pub const fn is_capture(self) -> bool {
        self.captured.is_not_empty()
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sep = if self.is_capture() { 'x' } else { '-' };
        write!(f, "{}{}{}", self.from, sep, self.to)
    }
}
