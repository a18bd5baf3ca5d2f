//! 局面文字列の解析・出力
//!
//! 形式: 手番 1 文字（`W` / `B`）に続けて、升 1 から 50 の順に 50 文字。
//! `w` / `b` は駒、`W` / `B` は王、`e`（または `.`）は空き。

use crate::types::{Color, Square};

use super::pos::Position;

/// 初期局面の文字列
pub const START_POSITION: &str = "Wbbbbbbbbbbbbbbbbbbbbeeeeeeeeeewwwwwwwwwwwwwwwwwwww";

/// 局面文字列のパースエラー
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PositionTextError {
    /// 手番の形式が不正
    SideToMove(String),
    /// 升の数が 50 でない
    Length(usize),
    /// 駒の文字が不正
    Piece { number: u32, ch: char },
}

impl std::fmt::Display for PositionTextError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PositionTextError::SideToMove(s) => write!(f, "Invalid side to move: {s}"),
            PositionTextError::Length(n) => write!(f, "Expected 50 squares, found {n}"),
            PositionTextError::Piece { number, ch } => {
                write!(f, "Invalid piece '{ch}' on square {number}")
            }
        }
    }
}

impl std::error::Error for PositionTextError {}

impl Position {
    /// 局面文字列から生成
    pub fn from_text(text: &str) -> Result<Position, PositionTextError> {
        let text = text.trim();
        let mut chars = text.chars();

        let turn = match chars.next() {
            Some('W') | Some('w') => Color::White,
            Some('B') | Some('b') => Color::Black,
            other => {
                return Err(PositionTextError::SideToMove(
                    other.map(String::from).unwrap_or_default(),
                ));
            }
        };

        let board: Vec<char> = chars.collect();
        if board.len() != Square::NUM {
            return Err(PositionTextError::Length(board.len()));
        }

        let mut pos = Position::new();
        pos.set_turn(turn);
        for (dense, &ch) in board.iter().enumerate() {
            let sq = Square::from_dense(dense);
            match ch {
                'w' => pos.put(Color::White, false, sq),
                'b' => pos.put(Color::Black, false, sq),
                'W' => pos.put(Color::White, true, sq),
                'B' => pos.put(Color::Black, true, sq),
                'e' | '.' => {}
                _ => {
                    return Err(PositionTextError::Piece {
                        number: sq.number(),
                        ch,
                    });
                }
            }
        }

        Ok(pos)
    }

    /// 局面文字列を出力
    pub fn to_text(&self) -> String {
        let mut s = String::with_capacity(1 + Square::NUM);
        s.push(match self.turn() {
            Color::White => 'W',
            Color::Black => 'B',
        });
        for sq in Square::all() {
            let ch = if self.men(Color::White).contains(sq) {
                'w'
            } else if self.men(Color::Black).contains(sq) {
                'b'
            } else if self.kings(Color::White).contains(sq) {
                'W'
            } else if self.kings(Color::Black).contains(sq) {
                'B'
            } else {
                'e'
            };
            s.push(ch);
        }
        s
    }
}

impl std::str::FromStr for Position {
    type Err = PositionTextError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::from_text(s)
    }
}
