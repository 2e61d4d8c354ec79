use crate::types::Value;

/// Multiway node; `children` index into the owning tree's arena.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BTreeNode {
    pub keys: Vec<Value>,
    pub children: Vec<u32>,
    pub leaf: bool,
}

impl BTreeNode {
    pub fn leaf() -> Self {
        Self {
            keys: Vec::new(),
            children: Vec::new(),
            leaf: true,
        }
    }

    pub fn internal(children: Vec<u32>) -> Self {
        Self {
            keys: Vec::new(),
            children,
            leaf: false,
        }
    }
}
