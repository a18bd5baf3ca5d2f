//! 静的な手順付け
//!
//! 定跡ファイルには子局面の数を持たないため、書き出し時と読み込み時で
//! 同じ順序で子局面を辿る必要がある。ここの順序を変えると既存の定跡ファイルは読めなくなる。

use std::cmp::Reverse;

use crate::bitboard::promotion_row;
use crate::position::Position;
use crate::types::Move;

/// 筋ごとの中央寄りボーナス
const CENTER: [i32; 10] = [0, 1, 2, 3, 4, 4, 3, 2, 1, 0];

/// 成りのボーナス
const PROMOTION_BONUS: i32 = 100;

/// 手の静的な点数（大きいほど先）
pub fn static_score(pos: &Position, mv: Move) -> i32 {
    let us = pos.turn();
    let from = mv.from();
    let to = mv.to();
    let is_man = pos.men(us).contains(from);

    let mut sc = mv.captured().count() * 10;
    if is_man && promotion_row(us).contains(to) {
        sc += PROMOTION_BONUS;
    }
    sc += CENTER[to.file() as usize] - CENTER[from.file() as usize];
    if is_man {
        sc += 1;
    }
    sc
}

/// 静的な点数の降順に並べる（同点は出発升・到着升・取った駒で決める）
pub fn order_static(moves: &mut [Move], pos: &Position) {
    moves.sort_by_key(|&mv| {
        (
            Reverse(static_score(pos, mv)),
            mv.from().number(),
            mv.to().number(),
            mv.captured().bits(),
        )
    });
}
