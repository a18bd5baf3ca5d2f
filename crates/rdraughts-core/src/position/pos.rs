//! 局面本体

use crate::bitboard::{Bitboard, promotion_row, row_bb};
use crate::types::{Color, Move, Square};

use super::zobrist::{zobrist_psq, zobrist_side};

/// 局面段階の最大値（駒の総数がこの値以上なら段階 0 = 中盤）
pub const STAGE_SIZE: i32 = 40;

/// 局面
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    /// 駒（成っていない駒）[Color]
    men: [Bitboard; Color::NUM],
    /// 王 [Color]
    kings: [Bitboard; Color::NUM],
    /// 手番
    turn: Color,
}

impl Position {
    /// 空の盤面（白番）
    pub const fn new() -> Self {
        Position {
            men: [Bitboard::EMPTY; Color::NUM],
            kings: [Bitboard::EMPTY; Color::NUM],
            turn: Color::White,
        }
    }

    /// 初期局面（黒: 1-20、白: 31-50、白番）
    pub const fn startpos() -> Self {
        let mut black = Bitboard::EMPTY;
        let mut white = Bitboard::EMPTY;
        let mut row = 0;
        while row < 4 {
            black = Bitboard::new(black.bits() | row_bb(row).bits());
            white = Bitboard::new(white.bits() | row_bb(row + 6).bits());
            row += 1;
        }
        Position {
            men: [white, black],
            kings: [Bitboard::EMPTY; Color::NUM],
            turn: Color::White,
        }
    }

    /// 駒を置く（既存の駒は上書き）
    pub fn put(&mut self, color: Color, king: bool, sq: Square) {
        self.remove(sq);
        if king {
            self.kings[color.index()].set(sq);
        } else {
            self.men[color.index()].set(sq);
        }
    }

    /// 升を空にする
    pub fn remove(&mut self, sq: Square) {
        for c in 0..Color::NUM {
            self.men[c].clear(sq);
            self.kings[c].clear(sq);
        }
    }

    /// 手番を設定
    pub fn set_turn(&mut self, turn: Color) {
        self.turn = turn;
    }

    /// 手番
    #[inline]
    pub const fn turn(&self) -> Color {
        self.turn
    }

    /// `color` の駒
    #[inline]
    pub const fn men(&self, color: Color) -> Bitboard {
        self.men[color.index()]
    }

    /// `color` の王
    #[inline]
    pub const fn kings(&self, color: Color) -> Bitboard {
        self.kings[color.index()]
    }

    /// `color` の全駒（駒 + 王）
    #[inline]
    pub fn pieces(&self, color: Color) -> Bitboard {
        self.men[color.index()] | self.kings[color.index()]
    }

    /// 盤上の全駒
    #[inline]
    pub fn all(&self) -> Bitboard {
        self.pieces(Color::White) | self.pieces(Color::Black)
    }

    /// 空きマス
    #[inline]
    pub fn empty(&self) -> Bitboard {
        !self.all()
    }

    /// 局面のハッシュキー
    ///
    /// 駒のない白番の盤面は 0 になる（定跡表では表現できない局面として扱う）。
    pub fn key(&self) -> u64 {
        let mut key = 0;
        for color in [Color::White, Color::Black] {
            for sq in self.men(color) {
                key ^= zobrist_psq(color, false, sq);
            }
            for sq in self.kings(color) {
                key ^= zobrist_psq(color, true, sq);
            }
        }
        if self.turn == Color::Black {
            key ^= zobrist_side();
        }
        key
    }

    /// `mv` を指した後の局面
    ///
    /// `mv` は合法手であること。成り段で止まった駒は王になる。
    pub fn succ(&self, mv: Move) -> Position {
        let us = self.turn.index();
        let them = self.turn.opponent().index();
        let (from, to) = (mv.from(), mv.to());

        let mut next = *self;

        if next.kings[us].contains(from) {
            next.kings[us].clear(from);
            next.kings[us].set(to);
        } else {
            debug_assert!(next.men[us].contains(from));
            next.men[us].clear(from);
            if promotion_row(self.turn).contains(to) {
                next.kings[us].set(to);
            } else {
                next.men[us].set(to);
            }
        }

        let captured = mv.captured();
        next.men[them] &= !captured;
        next.kings[them] &= !captured;

        next.turn = self.turn.opponent();
        next
    }

    /// 局面段階（0 = 中盤 .. STAGE_SIZE = 終盤）
    pub fn stage(&self) -> i32 {
        STAGE_SIZE - self.all().count().min(STAGE_SIZE)
    }

    /// `color` の駒の左右の偏り（筋 0..9 を -9..+9 に写して合計）
    pub fn skew(&self, color: Color) -> i32 {
        self.men(color).iter().map(|sq| sq.file() * 2 - 9).sum()
    }

    /// 色を入れ替えて盤を 180 度回転した局面（手番はそのまま）
    ///
    /// 手番側から見た評価値は符号だけが反転する。
    pub fn mirrored(&self) -> Position {
        Position {
            men: [self.men[1].rotate(), self.men[0].rotate()],
            kings: [self.kings[1].rotate(), self.kings[0].rotate()],
            turn: self.turn,
        }
    }

    /// 色を入れ替えて盤を回転し、手番も入れ替えた局面
    ///
    /// ゲームとしては元の局面と同一。
    pub fn color_flipped(&self) -> Position {
        let mut pos = self.mirrored();
        pos.turn = self.turn.opponent();
        pos
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::new()
    }
}

impl std::fmt::Debug for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Position({})", self.to_text())
    }
}
