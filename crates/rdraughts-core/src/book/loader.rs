//! 定跡ファイルの読み込み

use std::io::Read;
use std::str::SplitAsciiWhitespace;

use super::{Book, BookError, BookNode};
use crate::types::Value;

/// 空白区切りのトークン列
struct Tokens<'a> {
    inner: SplitAsciiWhitespace<'a>,
    consumed: usize,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            inner: text.split_ascii_whitespace(),
            consumed: 0,
        }
    }

    fn next_token(&mut self) -> Result<&'a str, BookError> {
        let token = self.inner.next().ok_or(BookError::Truncated {
            tokens: self.consumed,
        })?;
        self.consumed += 1;
        Ok(token)
    }

    fn malformed(&self, token: &str) -> BookError {
        BookError::Malformed {
            token: token.to_string(),
            index: self.consumed - 1,
        }
    }

    /// 内部ノードフラグ（`0` / `1`）
    fn next_flag(&mut self) -> Result<bool, BookError> {
        match self.next_token()? {
            "0" => Ok(false),
            "1" => Ok(true),
            token => Err(self.malformed(token)),
        }
    }

    fn next_score(&mut self) -> Result<Value, BookError> {
        let token = self.next_token()?;
        token
            .parse::<i32>()
            .map(Value::new)
            .map_err(|_| self.malformed(token))
    }
}

impl Book {
    /// 定跡を読み込み、後退解析まで行う
    ///
    /// 表は読み込み前に空にする。戻り値は根のスコア。
    /// 失敗した場合、表の内容は途中までのものになる。
    pub fn load<N: BookNode, R: Read>(&mut self, root: &N, mut reader: R) -> Result<Value, BookError> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;

        self.clear();
        let mut tokens = Tokens::new(&text);
        self.load_node(root, &mut tokens)?;
        log::debug!(
            "book: {} tokens, {} positions",
            tokens.consumed,
            self.len()
        );
        if tokens.inner.next().is_some() {
            log::warn!("book: trailing tokens after the root subtree are ignored");
        }

        self.backup(root)
    }

    fn load_node<N: BookNode>(&mut self, pos: &N, tokens: &mut Tokens<'_>) -> Result<(), BookError> {
        let key = pos.key().ok_or(BookError::Unrepresentable)?;
        let entry = self.table.find_or_create(key)?;
        if entry.done {
            return Ok(());
        }

        if !tokens.next_flag()? {
            entry.score = tokens.next_score()?;
            entry.done = true;
            return Ok(());
        }
        entry.node = true;

        let mut moves = pos.legal_moves();
        pos.order_static(&mut moves);
        for mv in moves {
            self.load_node(&pos.succ(mv), tokens)?;
        }

        let entry = self.table.find_mut(key).ok_or(BookError::MissingEntry)?;
        entry.done = true;
        Ok(())
    }
}
