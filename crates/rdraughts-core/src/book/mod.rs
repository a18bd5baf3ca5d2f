//! 定跡モジュール
//!
//! 初期局面を根とする探索済みの木を、ミニマックス値付きでハッシュ表に保持する。
//!
//! - `BookTable`: 固定容量・開番地法（線形探査）のハッシュ表
//! - 読み込み: 前順（pre-order）のテキストを、合法手生成 + 静的手順付けで辿りながら復元
//! - 後退解析: 葉のスコアから negamax で内部ノードのスコアを再計算
//! - `probe`: マージン内の手に絞り、スコアに応じた確率で 1 手を選ぶ
//! - 書き出し: 読み込みの逆変換
//!
//! 定跡ファイル形式（空白区切り）:
//!
//! ```text
//! 1            内部ノード。続けて各子局面を静的手順付けの順に同じ形式で並べる
//! 0 <score>    葉。手番側から見たスコア
//! ```
//!
//! 子の数は保存しない。同一局面に複数の経路で到達する場合は、前順で最初に現れた位置にだけ書く。

mod backup;
mod error;
mod loader;
mod node;
mod probe;
mod table;
mod writer;

pub use error::BookError;
pub use node::{BookNode, Key};
pub use probe::{BookMove, pick_weighted, select_candidates, temperature};
pub use table::{BookEntry, BookTable, DEFAULT_HASH_BITS, MAX_HASH_BITS, check_hash_bits};

/// 定跡
///
/// 読み込みと後退解析は `&mut self`、`probe` は `&self` で行う。
pub struct Book {
    table: BookTable,
}

impl Book {
    /// 容量 `1 << hash_bits` の空の定跡を作成
    ///
    /// # Panics
    ///
    /// `hash_bits` が `MAX_HASH_BITS` を超える場合。設定値から作るときは `try_new` を使う。
    pub fn new(hash_bits: u32) -> Self {
        Self {
            table: BookTable::new(hash_bits),
        }
    }

    /// 容量の指数を検査してから作成
    pub fn try_new(hash_bits: u32) -> Result<Self, BookError> {
        Ok(Self {
            table: BookTable::try_new(hash_bits)?,
        })
    }

    /// ハッシュ表
    #[inline]
    pub fn table(&self) -> &BookTable {
        &self.table
    }

    /// 登録局面数
    #[inline]
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// 空かどうか
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// 全エントリを消す
    pub fn clear(&mut self) {
        self.table.clear();
    }

    /// 全エントリの完了フラグを下ろす
    pub fn clear_done(&mut self) {
        self.table.clear_done();
    }

    /// 局面のエントリを引く
    ///
    /// キーが表現できない局面は常に None。
    /// `create` のときは未登録なら `{key, 0, 葉, 未完了}` を作って返す（表が満杯なら None）。
    pub fn find_entry<N: BookNode>(&mut self, pos: &N, create: bool) -> Option<&mut BookEntry> {
        let key = pos.key()?;
        if create {
            self.table.find_or_create(key).ok()
        } else {
            self.table.find_mut(key)
        }
    }

    /// 局面のエントリを参照
    pub fn entry<N: BookNode>(&self, pos: &N) -> Option<&BookEntry> {
        pos.key().and_then(|key| self.table.find(key))
    }
}

impl Default for Book {
    fn default() -> Self {
        Book::new(DEFAULT_HASH_BITS)
    }
}

#[cfg(test)]
mod test_tree;
