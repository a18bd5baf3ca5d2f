//! 升（Square）
//!
//! 盤上の 50 マスを 2 通りの番号で扱う。
//!
//! - dense: 0..50 の連番（棋譜上の升番号は dense + 1）
//! - index: ビットボード上のビット位置
//!
//! ビット位置は 2 段ごとに 13 bit を使う:
//! 偶数段は bit 0-4、奇数段は bit 6-10、bit 5/11/12 は番兵（ゴースト）。
//! このレイアウトでは斜め方向の移動が段によらず +6 / +7 の一定値になる。

/// 升（ビット位置）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Square(u8);

impl Square {
    /// 盤上の升の数
    pub const NUM: usize = 50;
    /// ビット位置の上限（0..63）
    pub const INDEX_NUM: usize = 63;
    /// 段の数
    pub const ROW_NUM: i32 = 10;
    /// 筋の数
    pub const FILE_NUM: i32 = 10;

    /// dense 番号から生成
    #[inline]
    pub const fn from_dense(dense: usize) -> Square {
        debug_assert!(dense < Self::NUM);
        let row = dense / 5;
        let col = dense % 5;
        Square((13 * (row / 2) + 6 * (row % 2) + col) as u8)
    }

    /// ビット位置から生成（ゴーストや範囲外は None）
    #[inline]
    pub const fn from_index(index: i32) -> Option<Square> {
        if Self::is_valid_index(index) {
            Some(Square(index as u8))
        } else {
            None
        }
    }

    /// ビット位置が盤上の升かどうか
    #[inline]
    pub const fn is_valid_index(index: i32) -> bool {
        if index < 0 || index >= Self::INDEX_NUM as i32 {
            return false;
        }
        let rem = index % 13;
        rem < 5 || (rem >= 6 && rem <= 10)
    }

    /// 棋譜上の升番号（1..=50）から生成
    pub fn from_number(number: u32) -> Option<Square> {
        if (1..=Self::NUM as u32).contains(&number) {
            Some(Self::from_dense(number as usize - 1))
        } else {
            None
        }
    }

    /// ビット位置
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// dense 番号（0..50）
    #[inline]
    pub const fn dense(self) -> usize {
        let pair = self.0 as usize / 13;
        let rem = self.0 as usize % 13;
        if rem < 5 {
            pair * 10 + rem
        } else {
            pair * 10 + 5 + (rem - 6)
        }
    }

    /// 棋譜上の升番号（1..=50）
    #[inline]
    pub const fn number(self) -> u32 {
        self.dense() as u32 + 1
    }

    /// 段（0 = 白の成り段）
    #[inline]
    pub const fn row(self) -> i32 {
        (self.dense() / 5) as i32
    }

    /// 筋（0..10、左端が 0）
    #[inline]
    pub const fn file(self) -> i32 {
        let dense = self.dense();
        let row = dense / 5;
        let col = (dense % 5) as i32;
        if row % 2 == 0 { col * 2 + 1 } else { col * 2 }
    }

    /// 盤を 180 度回転した升
    #[inline]
    pub const fn opp(self) -> Square {
        Square(Self::INDEX_NUM as u8 - 1 - self.0)
    }

    /// ビット位置を `inc` だけずらした升（盤外なら None）
    #[inline]
    pub const fn offset(self, inc: i32) -> Option<Square> {
        Self::from_index(self.0 as i32 + inc)
    }

    /// 全升を dense 順に列挙
    pub fn all() -> impl Iterator<Item = Square> {
        (0..Self::NUM).map(Square::from_dense)
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.number())
    }
}
