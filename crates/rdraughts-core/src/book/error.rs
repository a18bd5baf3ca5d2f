//! 定跡のエラー

use std::io;

use crate::assets::MissingAsset;

/// 定跡の読み込み・後退解析・書き出しのエラー
///
/// 定跡ファイルはオフラインで作る信頼済みの資産なので、どのエラーも起動時には致命的として扱う。
#[derive(Debug, thiserror::Error)]
pub enum BookError {
    /// ファイルが開けない
    #[error(transparent)]
    Missing(#[from] MissingAsset),

    /// 読み書きの失敗
    #[error(transparent)]
    Io(#[from] io::Error),

    /// トークンを待っている途中で入力が尽きた
    #[error("book load: unexpected end of input after {tokens} tokens")]
    Truncated { tokens: usize },

    /// フラグ・整数として読めないトークン
    #[error("book load: malformed token {token:?} at token {index}")]
    Malformed { token: String, index: usize },

    /// ハッシュキーで表現できない局面
    #[error("position cannot be represented by a book key")]
    Unrepresentable,

    /// 表の容量の指定が範囲外
    #[error("book hash bits out of range: {bits} (expected 0..={max})")]
    HashBits { bits: u32, max: u32 },

    /// ハッシュ表が満杯
    #[error("book table is full ({capacity} entries)")]
    TableFull { capacity: usize },

    /// 内部ノードの子局面が表にない
    #[error("book entry missing for a successor position")]
    MissingEntry,
}
