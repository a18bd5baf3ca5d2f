//! 定跡からの指し手選択

use rand::Rng;

use super::{Book, BookNode};
use crate::types::Value;

/// 定跡手とそのスコア（手番側から見た値）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookMove<M> {
    pub mv: M,
    pub score: Value,
}

/// 最善から `margin` 以内の候補だけを残す
///
/// `candidates` はスコアの降順に並んでいること。負の `margin` は 0 として扱い、
/// 最善手は常に残る。
pub fn select_candidates<M>(candidates: &mut Vec<BookMove<M>>, margin: i32) {
    let Some(best) = candidates.first().map(|c| c.score.raw()) else {
        return;
    };
    let threshold = best.saturating_sub(margin.max(0));
    candidates.retain(|c| c.score.raw() >= threshold);
}

/// マージンに対応する選択の鋭さ
///
/// `margin` が 0 以下なら 1.0。
pub fn temperature(margin: i32) -> f64 {
    if margin > 0 {
        100.0 / f64::from(margin)
    } else {
        1.0
    }
}

/// 重み `exp((score - best) * k / 100)` に比例する確率で候補を 1 つ選ぶ
///
/// `candidates` は空でなく、先頭が最善であること。
pub fn pick_weighted<M, R: Rng>(candidates: &[BookMove<M>], k: f64, rng: &mut R) -> usize {
    debug_assert!(!candidates.is_empty());
    let best = f64::from(candidates[0].score.raw());
    let weights: Vec<f64> = candidates
        .iter()
        .map(|c| ((f64::from(c.score.raw()) - best) * k / 100.0).exp())
        .collect();
    let total: f64 = weights.iter().sum();

    let mut x = rng.random::<f64>() * total;
    for (i, w) in weights.iter().enumerate() {
        if x < *w {
            return i;
        }
        x -= w;
    }
    candidates.len() - 1
}

impl Book {
    /// 全合法手を子局面のスコアで採点し、降順に並べて返す
    ///
    /// 局面が内部ノードでない場合や、子局面のどれかが表にない場合は None。
    /// 同点の手は合法手生成の順を保つ。
    pub fn scored_moves<N: BookNode>(&self, pos: &N) -> Option<Vec<BookMove<N::Move>>> {
        let entry = self.entry(pos)?;
        if !entry.node {
            return None;
        }

        let mut list = Vec::new();
        for mv in pos.legal_moves() {
            let Some(child) = self.entry(&pos.succ(mv)) else {
                log::debug!("book: successor missing from table");
                return None;
            };
            list.push(BookMove {
                mv,
                score: -child.score,
            });
        }
        list.sort_by(|a, b| b.score.cmp(&a.score));
        Some(list)
    }

    /// 定跡手を 1 つ選ぶ
    ///
    /// 最善から `margin` 以内の手の中から、スコアが高いほど選ばれやすく抽選する。
    pub fn probe<N: BookNode, R: Rng>(
        &self,
        pos: &N,
        margin: i32,
        rng: &mut R,
    ) -> Option<BookMove<N::Move>> {
        let mut list = self.scored_moves(pos)?;
        select_candidates(&mut list, margin);
        if list.is_empty() {
            return None;
        }

        let i = pick_weighted(&list, temperature(margin), rng);
        Some(list[i])
    }
}
