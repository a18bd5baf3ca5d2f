//! 定跡ファイルの書き出し

use std::collections::HashSet;
use std::io::Write;

use super::{Book, BookError, BookNode, Key};

impl Book {
    /// 根から辿れる部分を読み込みと同じ形式で書き出す
    ///
    /// 内部ノードは `1`、葉は `0 <score>` を 1 行ずつ。合流した局面は最初の 1 回だけ書く。
    pub fn write<N: BookNode, W: Write>(&self, root: &N, mut writer: W) -> Result<(), BookError> {
        let mut written = HashSet::new();
        self.write_node(root, &mut writer, &mut written)?;
        writer.flush()?;
        Ok(())
    }

    fn write_node<N: BookNode, W: Write>(
        &self,
        pos: &N,
        writer: &mut W,
        written: &mut HashSet<Key>,
    ) -> Result<(), BookError> {
        let key = pos.key().ok_or(BookError::Unrepresentable)?;
        let entry = self.table.find(key).ok_or(BookError::MissingEntry)?;
        if !written.insert(key) {
            return Ok(());
        }

        if !entry.node {
            writeln!(writer, "0 {}", entry.score.raw())?;
            return Ok(());
        }

        writeln!(writer, "1")?;
        let mut moves = pos.legal_moves();
        pos.order_static(&mut moves);
        for mv in moves {
            self.write_node(&pos.succ(mv), writer, written)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::book::test_tree::ToyNode;

    #[test]
    fn test_write_matches_input() {
        let root = ToyNode::new(1)
            .with(1, &[3, 2])
            .with(2, &[4])
            .with(3, &[4]);
        let text = "1\n1\n0 7\n1\n";
        let mut book = Book::new(6);
        book.load(&root, text.as_bytes()).unwrap();

        let mut out = Vec::new();
        book.write(&root, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), text);
    }

    #[test]
    fn test_written_book_reloads() {
        let root = ToyNode::new(1)
            .with(1, &[2, 3])
            .with(2, &[4, 5])
            .with(3, &[6]);
        let mut book = Book::new(6);
        let score = book.load(&root, "1 1 0 10 0 -30 1 0 4".as_bytes()).unwrap();

        let mut out = Vec::new();
        book.write(&root, &mut out).unwrap();

        let mut reloaded = Book::new(6);
        assert_eq!(reloaded.load(&root, out.as_slice()).unwrap(), score);
        let mut before: Vec<_> = book.table().iter().copied().map(|e| (e.key.get(), e)).collect();
        let mut after: Vec<_> = reloaded.table().iter().copied().map(|e| (e.key.get(), e)).collect();
        before.sort_by_key(|(k, _)| *k);
        after.sort_by_key(|(k, _)| *k);
        assert_eq!(before, after);
    }

    #[test]
    fn test_write_missing_entry() {
        let root = ToyNode::new(1).with(1, &[2]);
        let book = Book::new(4);
        let mut out = Vec::new();
        assert!(matches!(book.write(&root, &mut out), Err(BookError::MissingEntry)));
    }
}
