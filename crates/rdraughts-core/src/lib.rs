//! # rdraughts-core
//!
//! 10x10 ドラフツ（国際ルール系）エンジンの意思決定コア。
//!
//! ## モジュール構成
//!
//! - `types`: 基本型（Color, Square, Value, Move, Variant）
//! - `bitboard`: 64bit ビットボード（2段13bitのレイアウト）
//! - `position`: 局面表現・Zobristキー・局面文字列
//! - `movegen`: 合法手生成（最大取り規則）と静的な手順付け
//! - `book`: 定跡（ハッシュ表・ローダー・後退解析・probe・書き出し）
//! - `eval`: 線形特徴量による静的評価（パターン圧縮を含む）
//! - `assets`: 定跡/評価ファイルの取得
//! - `engine`: 定跡と評価関数をまとめたコンテキスト

pub mod assets;
pub mod bitboard;
pub mod book;
pub mod engine;
pub mod eval;
pub mod movegen;
pub mod position;
pub mod types;

pub use bitboard::Bitboard;
pub use book::{Book, BookEntry, BookError, BookMove, BookNode, Key};
pub use engine::{CoreOptions, DecisionCore};
pub use eval::{EvalError, EvalMode, Evaluator};
pub use position::Position;
pub use types::{Color, Move, Square, Value, Variant};
