//! 指し手生成モジュール
//!
//! 国際ルールの合法手生成と、定跡ファイルの書き出し・読み込みで共有する静的な手順付け。
//!
//! - 取りがあれば取りのみ（強制取り）、最も多く取る手のみ（最大取り）
//! - 駒は前後どちらにも取れる、王は遠方から取れる（flying king）
//! - 取った駒は手の終わりまで盤上に残り、二度は跳べない
//! - 成りは成り段で手を終えたときのみ

mod generator;
mod ordering;

pub use generator::{MoveList, generate_moves};
pub use ordering::{order_static, static_score};
