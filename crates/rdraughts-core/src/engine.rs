//! 定跡と評価関数をまとめたコンテキスト
//!
//! 読み込み（`&mut self`）が終わってから参照（`&self`）する順序は借用で保証される。

use std::io::Read;
use std::path::PathBuf;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::assets::{BOOK_BASE, EVAL_BASE, open_asset};
use crate::book::{Book, BookError, BookMove, DEFAULT_HASH_BITS};
use crate::eval::{EvalError, EvalMode, Evaluator};
use crate::position::Position;
use crate::types::{Move, Value, Variant};

/// 既定の定跡マージン
pub const DEFAULT_BOOK_MARGIN: i32 = 4;

/// コアの設定
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoreOptions {
    /// ルール
    pub variant: Variant,
    /// 資産ファイルのディレクトリ
    pub data_dir: PathBuf,
    /// 評価方式
    pub eval_mode: EvalMode,
    /// 定跡表の容量（`1 << book_hash_bits`）
    pub book_hash_bits: u32,
    /// 最善からこの範囲内の定跡手を候補にする
    pub book_margin: i32,
}

impl Default for CoreOptions {
    fn default() -> Self {
        Self {
            variant: Variant::Normal,
            data_dir: PathBuf::from("data"),
            eval_mode: EvalMode::Learned,
            book_hash_bits: DEFAULT_HASH_BITS,
            book_margin: DEFAULT_BOOK_MARGIN,
        }
    }
}

/// 意思決定コア
pub struct DecisionCore {
    options: CoreOptions,
    book: Option<(Book, Value)>,
    evaluator: Option<Evaluator>,
}

impl DecisionCore {
    pub fn new(options: CoreOptions) -> Self {
        Self {
            options,
            book: None,
            evaluator: None,
        }
    }

    #[inline]
    pub fn options(&self) -> &CoreOptions {
        &self.options
    }

    /// 定跡を読み込み、根のスコアを返す（2 回目以降は読み込まない）
    pub fn init_book(&mut self) -> Result<Value, BookError> {
        if let Some((_, score)) = &self.book {
            return Ok(*score);
        }
        let asset = open_asset(&self.options.data_dir, BOOK_BASE, self.options.variant)?;
        log::info!("init book: {}", asset.path.display());
        self.load_book(asset.reader)
    }

    /// 任意のリーダーから定跡を読み込む（既存の定跡は置き換える）
    pub fn load_book<R: Read>(&mut self, reader: R) -> Result<Value, BookError> {
        self.book = None;
        let mut book = Book::try_new(self.options.book_hash_bits)?;
        let score = book.load(&Position::startpos(), reader)?;
        log::info!("book: {} positions, root score {}", book.len(), score);
        self.book = Some((book, score));
        Ok(score)
    }

    /// 評価関数を準備する（2 回目以降は何もしない）
    ///
    /// `EvalMode::Pst` では重みファイルを読まない。
    pub fn init_evaluator(&mut self) -> Result<(), EvalError> {
        if self.evaluator.is_some() {
            return Ok(());
        }
        let variant = self.options.variant;
        let evaluator = match self.options.eval_mode {
            EvalMode::Pst => Evaluator::pst(variant),
            EvalMode::Learned => {
                let asset = open_asset(&self.options.data_dir, EVAL_BASE, variant)?;
                log::info!("init eval: {}", asset.path.display());
                Evaluator::read(variant, asset.reader)?
            }
        };
        self.evaluator = Some(evaluator);
        Ok(())
    }

    /// 評価関数を差し替える
    pub fn set_evaluator(&mut self, evaluator: Evaluator) {
        self.evaluator = Some(evaluator);
    }

    #[inline]
    pub fn book(&self) -> Option<&Book> {
        self.book.as_ref().map(|(book, _)| book)
    }

    #[inline]
    pub fn evaluator(&self) -> Option<&Evaluator> {
        self.evaluator.as_ref()
    }

    /// 定跡手を選ぶ（定跡が無い、または局面が定跡外なら None）
    pub fn probe_book<R: Rng>(&self, pos: &Position, margin: i32, rng: &mut R) -> Option<BookMove<Move>> {
        let book = self.book()?;
        let pick = book.probe(pos, margin, rng);
        if let Some(pick) = &pick {
            log::debug!("book move {} ({})", pick.mv, pick.score);
        }
        pick
    }

    /// 手番側から見た静的評価（評価関数が未準備なら None）
    pub fn evaluate(&self, pos: &Position) -> Option<Value> {
        self.evaluator.as_ref().map(|e| e.evaluate(pos))
    }
}
