//! Owned, nested copies of arena trees for renderers.
//!
//! A renderer walks these with its own layout engine; nothing here carries
//! coordinates.

use serde::{Deserialize, Serialize};

use crate::types::{Node, Value};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeSnapshot {
    pub value: Value,
    /// Cached AVL height; `None` for unbalanced trees.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<Box<TreeSnapshot>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right: Option<Box<TreeSnapshot>>,
}

impl TreeSnapshot {
    /// Copies the subtree at `idx`; `height_of` supplies the cached height.
    pub(crate) fn from_arena<N, H>(arena: &[N], idx: u32, height_of: &H) -> Self
    where
        N: Node,
        H: Fn(&N) -> Option<u32>,
    {
        let node = &arena[idx as usize];
        Self {
            value: node.value(),
            height: height_of(node),
            left: node
                .l()
                .map(|l| Box::new(Self::from_arena(arena, l, height_of))),
            right: node
                .r()
                .map(|r| Box::new(Self::from_arena(arena, r, height_of))),
        }
    }

    pub fn in_order(&self) -> Vec<Value> {
        let mut out = Vec::new();
        self.collect(&mut out);
        out
    }

    fn collect(&self, out: &mut Vec<Value>) {
        if let Some(l) = &self.left {
            l.collect(out);
        }
        out.push(self.value);
        if let Some(r) = &self.right {
            r.collect(out);
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BTreeSnapshot {
    pub keys: Vec<Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<BTreeSnapshot>,
    pub leaf: bool,
}
