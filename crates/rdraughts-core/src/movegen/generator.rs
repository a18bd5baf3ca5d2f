//! 指し手生成器

use smallvec::SmallVec;

use crate::bitboard::{Bitboard, DIAGONALS, forward_dirs, king_moves};
use crate::position::Position;
use crate::types::{Move, Square};

/// 指し手リスト
pub type MoveList = SmallVec<[Move; 32]>;

/// 合法手を生成
pub fn generate_moves(pos: &Position) -> MoveList {
    let captures = generate_captures(pos);
    if !captures.is_empty() {
        return captures;
    }
    generate_quiets(pos)
}

/// 取りの手を生成（最大取りのみ）
fn generate_captures(pos: &Position) -> MoveList {
    let us = pos.turn();
    let mut gen_state = CaptureState {
        opponents: pos.pieces(us.opponent()),
        best: 1,
        moves: MoveList::new(),
    };

    for from in pos.men(us) {
        // 動かす駒の元の升は空きとして扱う（一周して戻ってくる取りがある）
        let empty = pos.empty() | Bitboard::from_square(from);
        gen_state.man_captures(from, from, Bitboard::EMPTY, empty);
    }

    for from in pos.kings(us) {
        let empty = pos.empty() | Bitboard::from_square(from);
        gen_state.king_captures(from, from, Bitboard::EMPTY, empty);
    }

    gen_state.moves
}

/// 取りの探索状態
struct CaptureState {
    /// 相手の駒（駒 + 王）
    opponents: Bitboard,
    /// これまでの最大取り数
    best: i32,
    /// 最大取り数の手
    moves: MoveList,
}

impl CaptureState {
    fn add(&mut self, from: Square, to: Square, captured: Bitboard) {
        let n = captured.count();
        if n > self.best {
            self.best = n;
            self.moves.clear();
        }
        if n == self.best {
            let mv = Move::capture(from, to, captured);
            if !self.moves.contains(&mv) {
                self.moves.push(mv);
            }
        }
    }

    fn man_captures(&mut self, from: Square, cur: Square, captured: Bitboard, empty: Bitboard) {
        let mut extended = false;

        for dir in DIAGONALS {
            let Some(over) = cur.offset(dir) else {
                continue;
            };
            if !self.opponents.contains(over) || captured.contains(over) {
                continue;
            }
            let Some(land) = over.offset(dir) else {
                continue;
            };
            if !empty.contains(land) {
                continue;
            }

            extended = true;
            self.man_captures(from, land, captured | Bitboard::from_square(over), empty);
        }

        if !extended && captured.is_not_empty() {
            self.add(from, cur, captured);
        }
    }

    fn king_captures(&mut self, from: Square, cur: Square, captured: Bitboard, empty: Bitboard) {
        let mut extended = false;

        for dir in DIAGONALS {
            // 空きマスを飛ばして最初の駒を探す
            let mut next = cur.offset(dir);
            while let Some(sq) = next {
                if !empty.contains(sq) {
                    break;
                }
                next = sq.offset(dir);
            }

            let Some(over) = next else {
                continue;
            };
            if !self.opponents.contains(over) || captured.contains(over) {
                continue;
            }

            let captured_next = captured | Bitboard::from_square(over);
            let mut land = over.offset(dir);
            while let Some(sq) = land {
                if !empty.contains(sq) {
                    break;
                }
                extended = true;
                self.king_captures(from, sq, captured_next, empty);
                land = sq.offset(dir);
            }
        }

        if !extended && captured.is_not_empty() {
            self.add(from, cur, captured);
        }
    }
}

/// 取りのない手を生成
fn generate_quiets(pos: &Position) -> MoveList {
    let us = pos.turn();
    let empty = pos.empty();
    let mut moves = MoveList::new();

    for from in pos.men(us) {
        for dir in forward_dirs(us) {
            match from.offset(dir) {
                Some(to) if empty.contains(to) => moves.push(Move::quiet(from, to)),
                _ => {}
            }
        }
    }

    for from in pos.kings(us) {
        for to in king_moves(from, empty) {
            moves.push(Move::quiet(from, to));
        }
    }

    moves
}
