//! 局面表現モジュール
//!
//! - `Position`: 局面本体（色ごとの駒・王のビットボードと手番）
//! - `Zobrist`: Zobristハッシュ乱数テーブル（駒種×升・手番）
//! - 局面文字列（手番 1 文字 + 50 マス）の解析・出力
//!
//! `Position` は小さな値型で、`succ` は新しい局面を返す（do/undo は持たない）。

mod pos;
mod text;
mod zobrist;

pub use pos::{Position, STAGE_SIZE};
pub use text::{PositionTextError, START_POSITION};
pub use zobrist::{ZOBRIST, Zobrist, zobrist_psq, zobrist_side};
