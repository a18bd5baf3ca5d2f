//! 方向・段マスク・利き

use super::Bitboard;
use crate::types::{Color, Square};

/// 斜め（右上↔左下）の増分
pub const I1: i32 = 6;
/// 斜め（左上↔右下）の増分
pub const J1: i32 = 7;
/// 縦 2 段（frisian の縦取り）
pub const K1: i32 = I1 + J1;
/// 横 1 マス（frisian の横取り）
pub const L1: i32 = 1;

/// 斜め 4 方向（左上、右上、左下、右下）
pub const DIAGONALS: [i32; 4] = [-J1, -I1, I1, J1];

/// 段 `row` のマスク
pub const fn row_bb(row: i32) -> Bitboard {
    let mut bits = 0u64;
    let mut col = 0;
    while col < 5 {
        let dense = row as usize * 5 + col;
        bits |= 1u64 << Square::from_dense(dense).index();
        col += 1;
    }
    Bitboard::new(bits)
}

/// `color` の駒が前進する方向（白は段 0 へ、黒は段 9 へ）
#[inline]
pub const fn forward_dirs(color: Color) -> [i32; 2] {
    match color {
        Color::White => [-J1, -I1],
        Color::Black => [I1, J1],
    }
}

/// `color` の成り段
#[inline]
pub const fn promotion_row(color: Color) -> Bitboard {
    match color {
        Color::White => row_bb(0),
        Color::Black => row_bb(9),
    }
}

/// 王が `from` から 1 手で移動できる空きマス
///
/// 4 方向に `empty` が続く限り伸ばす。
pub fn king_moves(from: Square, empty: Bitboard) -> Bitboard {
    let mut moves = Bitboard::EMPTY;
    for dir in DIAGONALS {
        let mut cur = from;
        while let Some(next) = cur.offset(dir) {
            if !empty.contains(next) {
                break;
            }
            moves.set(next);
            cur = next;
        }
    }
    moves
}

/// `men` の駒が取りを掛けられるマス（そのマスの駒を取って向こう側の空きへ跳べる）
///
/// 駒は前後どちらへも取れる。`frisian` のときは縦横の取りも加える。
pub fn man_attacks(men: Bitboard, empty: Bitboard, frisian: bool) -> Bitboard {
    let (m, e) = (men, empty);
    let mut t = Bitboard::EMPTY;

    t |= m.shr(J1 as u32) & e.shl(J1 as u32);
    t |= m.shr(I1 as u32) & e.shl(I1 as u32);
    t |= m.shl(I1 as u32) & e.shr(I1 as u32);
    t |= m.shl(J1 as u32) & e.shr(J1 as u32);

    if frisian {
        t |= m.shr(L1 as u32) & e.shl(L1 as u32);
        t |= m.shr(K1 as u32) & e.shl(K1 as u32);
        t |= m.shl(K1 as u32) & e.shr(K1 as u32);
        t |= m.shl(L1 as u32) & e.shr(L1 as u32);
    }

    t.masked()
}
