//! ドラフツ定跡・評価関数のツール群で共有するコード

pub mod common;
