//! 後退解析（negamax）

use super::{Book, BookError, BookNode};
use crate::types::Value;

impl Book {
    /// 葉のスコアから内部ノードのスコアを再計算し、根のスコアを返す
    ///
    /// 内部ノードのスコアは子のスコアの符号反転の最大値。子がなければ `-INF`。
    /// 合流した局面は 1 回だけ計算する。
    pub fn backup<N: BookNode>(&mut self, root: &N) -> Result<Value, BookError> {
        self.clear_done();
        self.backup_node(root)
    }

    fn backup_node<N: BookNode>(&mut self, pos: &N) -> Result<Value, BookError> {
        let key = pos.key().ok_or(BookError::Unrepresentable)?;
        let entry = self.table.find(key).ok_or(BookError::MissingEntry)?;
        if entry.done || !entry.node {
            return Ok(entry.score);
        }

        let mut best: Option<Value> = None;
        for mv in pos.legal_moves() {
            let score = -self.backup_node(&pos.succ(mv))?;
            best = Some(best.map_or(score, |b| b.max(score)));
        }
        let score = best.unwrap_or(-Value::INF);

        let entry = self.table.find_mut(key).ok_or(BookError::MissingEntry)?;
        entry.score = score;
        entry.done = true;
        Ok(score)
    }
}
