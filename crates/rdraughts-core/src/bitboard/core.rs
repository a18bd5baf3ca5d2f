//! Bitboard（64bit盤面表現）

use crate::types::Square;

/// Bitboard
///
/// ビット位置は `Square::index()`。ゴーストビット（5/11/12 mod 13 と 63）は常に 0 に保つ。
#[derive(Clone, Copy, PartialEq, Eq, Default, Hash)]
#[repr(transparent)]
pub struct Bitboard(u64);

impl Bitboard {
    /// 空のBitboard
    pub const EMPTY: Bitboard = Bitboard(0);

    /// 盤上の全マスが立っているBitboard
    pub const ALL: Bitboard = Bitboard(squares_mask());

    /// 生の値から生成（盤外ビットは落とす）
    #[inline]
    pub const fn new(bits: u64) -> Bitboard {
        Bitboard(bits & Self::ALL.0)
    }

    /// 単一マスのBitboard
    #[inline]
    pub const fn from_square(sq: Square) -> Bitboard {
        Bitboard(1u64 << sq.index())
    }

    /// 生の値
    #[inline]
    pub const fn bits(self) -> u64 {
        self.0
    }

    /// 空かどうか
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// 空でないかどうか
    #[inline]
    pub const fn is_not_empty(self) -> bool {
        self.0 != 0
    }

    /// ビットが立っている数
    #[inline]
    pub const fn count(self) -> i32 {
        self.0.count_ones() as i32
    }

    /// マスが含まれるか
    #[inline]
    pub const fn contains(self, sq: Square) -> bool {
        (self.0 >> sq.index()) & 1 != 0
    }

    /// マスを立てる
    #[inline]
    pub fn set(&mut self, sq: Square) {
        self.0 |= 1u64 << sq.index();
    }

    /// マスを消す
    #[inline]
    pub fn clear(&mut self, sq: Square) {
        self.0 &= !(1u64 << sq.index());
    }

    /// 右シフト（ビット位置が小さい方向、盤外ビットはマスクしない）
    #[inline]
    pub const fn shr(self, n: u32) -> Bitboard {
        Bitboard(self.0 >> n)
    }

    /// 左シフト（ビット位置が大きい方向、盤外ビットはマスクしない）
    #[inline]
    pub const fn shl(self, n: u32) -> Bitboard {
        Bitboard(self.0 << n)
    }

    /// 盤外ビットを落とす
    #[inline]
    pub const fn masked(self) -> Bitboard {
        Bitboard(self.0 & Self::ALL.0)
    }

    /// 180度回転（升 `sq` を `sq.opp()` へ）
    #[inline]
    pub const fn rotate(self) -> Bitboard {
        // bit i -> bit 62 - i
        Bitboard((self.0.reverse_bits() >> 1) & Self::ALL.0)
    }

    /// 最下位ビットのSquareを取得して消す
    #[inline]
    pub fn pop_lsb(&mut self) -> Option<Square> {
        if self.0 == 0 {
            return None;
        }
        let idx = self.0.trailing_zeros() as i32;
        self.0 &= self.0 - 1;
        Square::from_index(idx)
    }

    /// イテレータ
    #[inline]
    pub fn iter(self) -> BitboardIter {
        BitboardIter(self)
    }
}

const fn squares_mask() -> u64 {
    let mut mask = 0u64;
    let mut dense = 0;
    while dense < Square::NUM {
        mask |= 1u64 << Square::from_dense(dense).index();
        dense += 1;
    }
    mask
}

impl std::ops::BitAnd for Bitboard {
    type Output = Bitboard;

    #[inline]
    fn bitand(self, rhs: Bitboard) -> Bitboard {
        Bitboard(self.0 & rhs.0)
    }
}

impl std::ops::BitAndAssign for Bitboard {
    #[inline]
    fn bitand_assign(&mut self, rhs: Bitboard) {
        self.0 &= rhs.0;
    }
}

impl std::ops::BitOr for Bitboard {
    type Output = Bitboard;

    #[inline]
    fn bitor(self, rhs: Bitboard) -> Bitboard {
        Bitboard(self.0 | rhs.0)
    }
}

impl std::ops::BitOrAssign for Bitboard {
    #[inline]
    fn bitor_assign(&mut self, rhs: Bitboard) {
        self.0 |= rhs.0;
    }
}

impl std::ops::BitXor for Bitboard {
    type Output = Bitboard;

    #[inline]
    fn bitxor(self, rhs: Bitboard) -> Bitboard {
        Bitboard(self.0 ^ rhs.0)
    }
}

impl std::ops::BitXorAssign for Bitboard {
    #[inline]
    fn bitxor_assign(&mut self, rhs: Bitboard) {
        self.0 ^= rhs.0;
    }
}

impl std::ops::Not for Bitboard {
    type Output = Bitboard;

    /// 盤上のマスに限った補集合
    #[inline]
    fn not(self) -> Bitboard {
        Bitboard(!self.0 & Self::ALL.0)
    }
}

impl std::fmt::Debug for Bitboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Bitboard[")?;
        for (i, sq) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{sq}")?;
        }
        write!(f, "]")
    }
}

/// Bitboardのイテレータ（ビット位置の昇順 = 升番号の昇順）
pub struct BitboardIter(Bitboard);

impl Iterator for BitboardIter {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Square> {
        self.0.pop_lsb()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.count() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for BitboardIter {}

impl IntoIterator for Bitboard {
    type Item = Square;
    type IntoIter = BitboardIter;

    fn into_iter(self) -> BitboardIter {
        self.iter()
    }
}
