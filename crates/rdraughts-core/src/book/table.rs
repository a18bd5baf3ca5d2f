//! 定跡のハッシュ表
//!
//! 容量は 2 の冪で固定。`key & mask` から線形探査し、探査は容量分で打ち切る。

use super::error::BookError;
use super::node::Key;
use crate::types::Value;

/// デフォルトの容量（`1 << 16` エントリ）
pub const DEFAULT_HASH_BITS: u32 = 16;

/// 容量の指数の上限
pub const MAX_HASH_BITS: u32 = 30;

/// 容量の指数が `0..=MAX_HASH_BITS` に収まっているか確認
pub fn check_hash_bits(hash_bits: u32) -> Result<(), BookError> {
    if hash_bits > MAX_HASH_BITS {
        return Err(BookError::HashBits {
            bits: hash_bits,
            max: MAX_HASH_BITS,
        });
    }
    Ok(())
}

/// 定跡エントリ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookEntry {
    /// 局面のハッシュキー
    pub key: Key,
    /// 手番側から見たスコア
    pub score: Value,
    /// 内部ノード（子を持つ）かどうか
    pub node: bool,
    /// 今回の走査で処理済みかどうか
    pub done: bool,
}

impl BookEntry {
    /// 新規エントリ（葉・未完了・スコア 0）
    #[inline]
    pub const fn new(key: Key) -> Self {
        Self {
            key,
            score: Value::ZERO,
            node: false,
            done: false,
        }
    }
}

/// 探査結果
enum Slot {
    Found(usize),
    Vacant(usize),
    Full,
}

/// 開番地法のハッシュ表
pub struct BookTable {
    slots: Vec<Option<BookEntry>>,
    mask: usize,
    len: usize,
}

impl BookTable {
    /// 容量 `1 << hash_bits` の空の表
    ///
    /// # Panics
    ///
    /// `hash_bits` が `MAX_HASH_BITS` を超える場合。
    pub fn new(hash_bits: u32) -> Self {
        assert!(hash_bits <= MAX_HASH_BITS, "book hash bits out of range: {hash_bits}");
        let capacity = 1usize << hash_bits;
        Self {
            slots: vec![None; capacity],
            mask: capacity - 1,
            len: 0,
        }
    }

    /// 容量の指数を検査してから作成
    pub fn try_new(hash_bits: u32) -> Result<Self, BookError> {
        check_hash_bits(hash_bits)?;
        Ok(Self::new(hash_bits))
    }

    /// 容量
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// 登録数
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// 全エントリを消す
    pub fn clear(&mut self) {
        self.slots.fill(None);
        self.len = 0;
    }

    /// 全エントリの `done` を下ろす（`key`/`score`/`node` は保持）
    pub fn clear_done(&mut self) {
        for entry in self.slots.iter_mut().flatten() {
            entry.done = false;
        }
    }

    fn probe(&self, key: Key) -> Slot {
        let mut i = key.index(self.mask);
        for _ in 0..self.slots.len() {
            match &self.slots[i] {
                None => return Slot::Vacant(i),
                Some(entry) if entry.key == key => return Slot::Found(i),
                Some(_) => i = (i + 1) & self.mask,
            }
        }
        Slot::Full
    }

    /// キーで検索
    pub fn find(&self, key: Key) -> Option<&BookEntry> {
        match self.probe(key) {
            Slot::Found(i) => self.slots[i].as_ref(),
            _ => None,
        }
    }

    /// キーで検索（可変）
    pub fn find_mut(&mut self, key: Key) -> Option<&mut BookEntry> {
        match self.probe(key) {
            Slot::Found(i) => self.slots[i].as_mut(),
            _ => None,
        }
    }

    /// キーで検索し、なければ最初の空きスロットに作成
    pub fn find_or_create(&mut self, key: Key) -> Result<&mut BookEntry, BookError> {
        match self.probe(key) {
            Slot::Found(i) => Ok(self.slots[i].get_or_insert(BookEntry::new(key))),
            Slot::Vacant(i) => {
                self.len += 1;
                Ok(self.slots[i].insert(BookEntry::new(key)))
            }
            Slot::Full => Err(BookError::TableFull {
                capacity: self.capacity(),
            }),
        }
    }

    /// 登録済みエントリ（スロット順）
    pub fn iter(&self) -> impl Iterator<Item = &BookEntry> {
        self.slots.iter().flatten()
    }
}
