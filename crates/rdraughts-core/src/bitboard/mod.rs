//! ビットボードモジュール
//!
//! 50マスの盤面を 64bit で表現する。
//!
//! - `Bitboard`: 64bit 盤面表現（2段ごとに 13bit、ゴーストビットで盤端を吸収）
//! - 方向の増分（`I1`, `J1`, `K1`, `L1`）と段マスク
//! - 王の遠方利き（`king_moves`）、駒の取り利き（`man_attacks`）

mod core;
mod tables;

pub use core::Bitboard;
pub use core::BitboardIter;
pub use tables::*;
