//! 設定の解決
//!
//! 既定値 < TOML 設定ファイル < コマンドライン引数 の順に上書きする。

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use rdraughts_core::book::check_hash_bits;
use rdraughts_core::{CoreOptions, EvalMode, Variant};

/// 各ツール共通の引数
#[derive(Args, Debug, Clone, Default)]
pub struct CoreArgs {
    /// TOML 設定ファイル
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// ルール（normal, killer, bt, losing, frisian）
    #[arg(long)]
    pub variant: Option<Variant>,

    /// 定跡・重みファイルのディレクトリ
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// 評価方式（learned, pst）
    #[arg(long)]
    pub eval_mode: Option<EvalMode>,

    /// 定跡表の容量（2 の冪の指数、0..=30）
    #[arg(long)]
    pub book_hash_bits: Option<u32>,

    /// 定跡マージン
    #[arg(long)]
    pub book_margin: Option<i32>,

    /// デバッグログを有効化
    #[arg(short, long)]
    pub debug: bool,
}

impl CoreArgs {
    /// 設定を解決する
    pub fn resolve(&self) -> Result<CoreOptions> {
        let mut opts = match &self.config {
            Some(path) => load_config(path)?,
            None => CoreOptions::default(),
        };
        if let Some(variant) = self.variant {
            opts.variant = variant;
        }
        if let Some(dir) = &self.data_dir {
            opts.data_dir = dir.clone();
        }
        if let Some(mode) = self.eval_mode {
            opts.eval_mode = mode;
        }
        if let Some(bits) = self.book_hash_bits {
            opts.book_hash_bits = bits;
        }
        if let Some(margin) = self.book_margin {
            opts.book_margin = margin;
        }
        check_hash_bits(opts.book_hash_bits)?;
        Ok(opts)
    }
}

/// TOML 設定ファイルを読む（書かれていない項目は既定値）
pub fn load_config(path: &Path) -> Result<CoreOptions> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("failed to parse config {}", path.display()))
}
