//! Zobristハッシュ

use crate::types::{Color, Square};

/// 駒種の数（白駒・黒駒・白王・黒王）
const PIECE_KIND_NUM: usize = 4;

/// Zobristハッシュ用乱数テーブル
pub struct Zobrist {
    /// 手番用（黒番のときに XOR する）
    pub side: u64,
    /// 駒種×升 [kind][dense]
    pub psq: [[u64; Square::NUM]; PIECE_KIND_NUM],
}

impl Zobrist {
    /// テーブル初期化
    pub const fn init() -> Self {
        let mut zobrist = Zobrist {
            side: 0,
            psq: [[0; Square::NUM]; PIECE_KIND_NUM],
        };

        // XorShift64で疑似乱数生成
        let mut seed = 0x9E37_79B9_7F4A_7C15u64;

        seed = xorshift64(seed);
        zobrist.side = seed;

        let mut kind = 0;
        while kind < PIECE_KIND_NUM {
            let mut dense = 0;
            while dense < Square::NUM {
                seed = xorshift64(seed);
                zobrist.psq[kind][dense] = seed;
                dense += 1;
            }
            kind += 1;
        }

        zobrist
    }
}

/// XorShift64疑似乱数生成（const fn対応）
const fn xorshift64(mut x: u64) -> u64 {
    x ^= x << 13;
    x ^= x >> 7;
    x ^= x << 17;
    x
}

/// グローバルZobristテーブル
pub static ZOBRIST: Zobrist = Zobrist::init();

/// 駒と升のハッシュを取得
#[inline]
pub fn zobrist_psq(color: Color, king: bool, sq: Square) -> u64 {
    let kind = color.index() + if king { 2 } else { 0 };
    ZOBRIST.psq[kind][sq.dense()]
}

/// 手番のハッシュを取得
#[inline]
pub fn zobrist_side() -> u64 {
    ZOBRIST.side
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zobrist_init() {
        assert_ne!(ZOBRIST.side, 0);

        let sq1 = Square::from_number(1).unwrap();
        let sq2 = Square::from_number(2).unwrap();
        assert_ne!(zobrist_psq(Color::White, false, sq1), zobrist_psq(Color::White, false, sq2));
        assert_ne!(zobrist_psq(Color::White, false, sq1), zobrist_psq(Color::Black, false, sq1));
        assert_ne!(zobrist_psq(Color::White, false, sq1), zobrist_psq(Color::White, true, sq1));
    }

    #[test]
    fn test_zobrist_all_distinct() {
        let mut all: Vec<u64> = ZOBRIST.psq.iter().flatten().copied().collect();
        all.push(ZOBRIST.side);
        let n = all.len();
        all.sort_unstable();
        all.dedup();
        assert_eq!(all.len(), n);
        assert!(all.iter().all(|&k| k != 0));
    }
}
