//! テスト用の小さな木

use std::collections::HashMap;
use std::rc::Rc;

use super::{BookNode, Key};

/// id で表す局面。指し手は子の id、キーは id そのもの（0 は表現不能）
#[derive(Debug, Clone)]
pub(crate) struct ToyNode {
    id: u64,
    edges: Rc<HashMap<u64, Vec<u64>>>,
}

impl ToyNode {
    pub(crate) fn new(id: u64) -> Self {
        Self {
            id,
            edges: Rc::new(HashMap::new()),
        }
    }

    /// `parent` の合法手を `children` の順で設定
    pub(crate) fn with(mut self, parent: u64, children: &[u64]) -> Self {
        Rc::make_mut(&mut self.edges).insert(parent, children.to_vec());
        self
    }

    pub(crate) fn child(&self, id: u64) -> ToyNode {
        ToyNode {
            id,
            edges: Rc::clone(&self.edges),
        }
    }
}

impl BookNode for ToyNode {
    type Move = u64;

    fn key(&self) -> Option<Key> {
        Key::new(self.id)
    }

    fn legal_moves(&self) -> Vec<u64> {
        self.edges.get(&self.id).cloned().unwrap_or_default()
    }

    fn order_static(&self, moves: &mut [u64]) {
        moves.sort_unstable();
    }

    fn succ(&self, mv: u64) -> ToyNode {
        self.child(mv)
    }
}
