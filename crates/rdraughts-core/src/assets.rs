//! 定跡・評価ファイルの取得
//!
//! `<data_dir>/<base><suffix>` を開く。無ければ同名の `.gz` を展開しながら読む。
//! `suffix` は変種ごとに `""`, `"_killer"`, `"_bt"`, `"_losing"`, `"_frisian"`。

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::types::Variant;

/// 定跡ファイルの基本名
pub const BOOK_BASE: &str = "book";

/// 重みファイルの基本名
pub const EVAL_BASE: &str = "eval";

const BUF_CAPACITY: usize = 128 * 1024;

/// 開いた資産
pub struct Asset {
    /// 実際に開いたパス
    pub path: PathBuf,
    pub reader: Box<dyn BufRead>,
}

/// どちらの名前でも開けなかった資産
#[derive(Debug, thiserror::Error)]
#[error("unable to open file \"{}\"", path.display())]
pub struct MissingAsset {
    /// 展開済みの名前のパス
    pub path: PathBuf,
    /// そのパスを開いたときのエラー
    #[source]
    pub source: io::Error,
}

/// 変種に対応する資産のパス（展開済みの名前）
pub fn asset_path(data_dir: &Path, base: &str, variant: Variant) -> PathBuf {
    data_dir.join(format!("{base}{}", variant.file_suffix()))
}

/// 資産を開く
///
/// どちらも無い場合は展開済みの名前のパスとそのエラーを返す。
pub fn open_asset(data_dir: &Path, base: &str, variant: Variant) -> Result<Asset, MissingAsset> {
    let path = asset_path(data_dir, base, variant);
    let err = match File::open(&path) {
        Ok(f) => {
            log::debug!("asset: {}", path.display());
            return Ok(Asset {
                path,
                reader: Box::new(BufReader::with_capacity(BUF_CAPACITY, f)),
            });
        }
        Err(e) => e,
    };

    let mut gz_path = path.clone().into_os_string();
    gz_path.push(".gz");
    let gz_path = PathBuf::from(gz_path);
    match File::open(&gz_path) {
        Ok(f) => {
            log::debug!("asset: {}", gz_path.display());
            let dec = flate2::read::GzDecoder::new(BufReader::new(f));
            Ok(Asset {
                path: gz_path,
                reader: Box::new(BufReader::with_capacity(BUF_CAPACITY, dec)),
            })
        }
        Err(_) => Err(MissingAsset { path, source: err }),
    }
}
