//! 盤面パターンの圧縮
//!
//! 左 4 筋 x 上下 6 段ずつの 12 マスを 1 パターンとし、白黒の占有を 3 進数 1 桁ずつにまとめる。
//! 黒の占有を +1、白の占有を -1 として `T[black] - T[white]` を取ると、
//! 値域は `-(3^12 - 1) / 2 ..= (3^12 - 1) / 2` になる。
//!
//! 上半分と下半分は桁の並びが 180 度回転で対応するように置換を選んでいる。
//! 駒を 0..4 ビット右へずらして同じ抽出を行うことで、盤全体を 4 列分カバーする。

use crate::bitboard::Bitboard;

/// 1 パターンのマス数
pub const PATTERN_SIZE: usize = 12;

/// 1 パターンの状態数（3^12）
pub const PATTERN_STATES: usize = 531_441;

/// 2 進パターンの数（2^12）
const BINARY_STATES: usize = 1 << PATTERN_SIZE;

/// 列オフセットごとのパターン中心（`k * 3^12 + (3^12 - 1) / 2`）
pub const PATTERN_CENTERS: [usize; 4] = [265_720, 797_161, 1_328_602, 1_860_043];

/// 上半分の桁の並び
const PERM_0: [usize; PATTERN_SIZE] = [11, 10, 7, 6, 3, 2, 9, 8, 5, 4, 1, 0];
/// 下半分の桁の並び
const PERM_1: [usize; PATTERN_SIZE] = [0, 1, 4, 5, 8, 9, 2, 3, 6, 7, 10, 11];

/// 左 4 筋のビット
const LEFT_FILES: u64 = 0x0C30_6183_0C18_60C3;

/// 2 進の `index` を、ビット `i` を 3 進の桁 `perm[i]` に置いて変換
pub const fn conv(index: usize, perm: &[usize; PATTERN_SIZE]) -> i32 {
    let mut from = index;
    let mut to = 0;
    let mut i = 0;
    while i < PATTERN_SIZE {
        let digit = (from % 2) as i32;
        from /= 2;
        to += digit * 3i32.pow(perm[i] as u32);
        i += 1;
    }
    to
}

/// 左 4 筋を 12bit ずつの上下パターンに詰める
#[inline]
const fn split_column(bits: u64) -> (usize, usize) {
    let left = bits & LEFT_FILES;
    let shuffle = left | (left >> 11) | (left >> 22);
    let mask = (BINARY_STATES - 1) as u64;
    ((shuffle & mask) as usize, ((shuffle >> 26) & mask) as usize)
}

/// 2 進 → 3 進の変換表
pub struct PatternTables {
    trits_0: Box<[i32]>,
    trits_1: Box<[i32]>,
}

impl PatternTables {
    pub fn new() -> Self {
        let trits_0 = (0..BINARY_STATES).map(|i| conv(i, &PERM_0)).collect();
        let trits_1 = (0..BINARY_STATES).map(|i| conv(i, &PERM_1)).collect();
        Self { trits_0, trits_1 }
    }

    /// 上半分の変換
    #[inline]
    pub fn top(&self, pattern: usize) -> i32 {
        self.trits_0[pattern]
    }

    /// 下半分の変換
    #[inline]
    pub fn bottom(&self, pattern: usize) -> i32 {
        self.trits_1[pattern]
    }

    /// 1 列オフセット分の (上, 下) インデックス
    #[inline]
    pub fn column_indices(&self, white: Bitboard, black: Bitboard) -> (i32, i32) {
        let (w0, w2) = split_column(white.bits());
        let (b0, b2) = split_column(black.bits());
        (
            self.trits_0[b0] - self.trits_0[w0],
            self.trits_1[b2] - self.trits_1[w2],
        )
    }

    /// 4 列オフセット分のインデックス（上 4 つ、下 4 つの順）
    pub fn indices(&self, white_men: Bitboard, black_men: Bitboard) -> [i32; 8] {
        let mut out = [0; 8];
        for k in 0..4 {
            let (top, bottom) = self.column_indices(white_men.shr(k as u32), black_men.shr(k as u32));
            out[k] = top;
            out[k + 4] = bottom;
        }
        out
    }
}

impl Default for PatternTables {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;
    use crate::types::{Color, Square};
    use rand::{Rng, SeedableRng};
    use rand_xoshiro::Xoshiro256PlusPlus;

    fn reverse12(x: usize) -> usize {
        (x.reverse_bits() >> (usize::BITS as usize - PATTERN_SIZE)) & (BINARY_STATES - 1)
    }

    #[test]
    fn test_conv_range() {
        assert_eq!(conv(0, &PERM_0), 0);
        assert_eq!(conv(BINARY_STATES - 1, &PERM_0), (PATTERN_STATES as i32 - 1) / 2);
        assert_eq!(conv(1, &PERM_0), 3i32.pow(11));
        assert_eq!(conv(1, &PERM_1), 1);
    }

    #[test]
    fn test_top_bottom_mirror() {
        let tables = PatternTables::new();
        for x in 0..BINARY_STATES {
            assert_eq!(tables.bottom(reverse12(x)), tables.top(x));
        }
    }

    #[test]
    fn test_centers() {
        for (k, center) in PATTERN_CENTERS.iter().enumerate() {
            assert_eq!(*center, k * PATTERN_STATES + (PATTERN_STATES - 1) / 2);
        }
    }

    #[test]
    fn test_swapping_men_negates_indices() {
        let tables = PatternTables::new();
        let pos = Position::startpos();
        let (w, b) = (pos.men(Color::White), pos.men(Color::Black));

        let forward = tables.indices(w, b);
        let swapped = tables.indices(b, w);
        for i in 0..8 {
            assert_eq!(forward[i], -swapped[i]);
        }
        assert_eq!(tables.indices(Bitboard::EMPTY, Bitboard::EMPTY), [0; 8]);

        let mut rng = Xoshiro256PlusPlus::seed_from_u64(11);
        for _ in 0..200 {
            let (mut w, mut b) = (Bitboard::EMPTY, Bitboard::EMPTY);
            for sq in Square::all() {
                match rng.random_range(0..3) {
                    0 => w.set(sq),
                    1 => b.set(sq),
                    _ => {}
                }
            }
            let forward = tables.indices(w, b);
            let swapped = tables.indices(b, w);
            for i in 0..8 {
                assert_eq!(forward[i], -swapped[i]);
            }
        }
    }

    #[test]
    fn test_indices_stay_in_range() {
        let tables = PatternTables::new();
        let half = (PATTERN_STATES as i32 - 1) / 2;
        let all = Bitboard::ALL;
        for index in tables.indices(all, Bitboard::EMPTY).iter().chain(tables.indices(Bitboard::EMPTY, all).iter()) {
            assert!((-half..=half).contains(index));
        }
    }
}
