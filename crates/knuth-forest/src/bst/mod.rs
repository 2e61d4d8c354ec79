//! Unbalanced binary search tree.
//!
//! Values smaller than a node go left; everything else, equal values
//! included, goes right. Duplicates are kept.

pub mod types;

use std::fmt;

use crate::print::print_node;
use crate::snapshot::TreeSnapshot;
use crate::types::{Node, Value};
use crate::util;

pub use types::BstNode;

/// Inserts `v` below `node` and returns the subtree root.
///
/// An absent `node` yields a fresh single-node subtree.
pub fn insert(arena: &mut Vec<BstNode>, node: Option<u32>, v: Value) -> u32 {
    let Some(idx) = node else {
        arena.push(BstNode::new(v));
        return (arena.len() - 1) as u32;
    };
    let BstNode { l, r, v: at } = arena[idx as usize];
    if v < at {
        let l = insert(arena, l, v);
        util::set_l(arena, idx, Some(l));
    } else {
        let r = insert(arena, r, v);
        util::set_r(arena, idx, Some(r));
    }
    idx
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BstTree {
    pub root: Option<u32>,
    arena: Vec<BstNode>,
}

impl BstTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Left-folds [`insert`] over `values`, starting from an empty tree.
    pub fn build(values: &[Value]) -> Self {
        let mut tree = Self::new();
        for &v in values {
            tree.insert(v);
        }
        tree
    }

    pub fn insert(&mut self, v: Value) {
        self.root = Some(insert(&mut self.arena, self.root, v));
    }

    pub fn node(&self, idx: u32) -> &BstNode {
        &self.arena[idx as usize]
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn height(&self) -> u32 {
        util::height(&self.arena, self.root)
    }

    pub fn contains(&self, v: Value) -> bool {
        util::find(&self.arena, self.root, v).is_some()
    }

    pub fn min(&self) -> Option<Value> {
        util::first(&self.arena, self.root).map(|i| self.arena[i as usize].v)
    }

    pub fn max(&self) -> Option<Value> {
        util::last(&self.arena, self.root).map(|i| self.arena[i as usize].v)
    }

    pub fn in_order(&self) -> Vec<Value> {
        util::in_order(&self.arena, self.root)
    }

    pub fn snapshot(&self) -> Option<TreeSnapshot> {
        self.root
            .map(|root| TreeSnapshot::from_arena(&self.arena, root, &|_: &BstNode| None))
    }
}

impl fmt::Display for BstTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.root {
            Some(root) => {
                let dump = print_node(&self.arena, root, "   ", &|n: &BstNode| n.value().to_string());
                write!(f, "BstTree\n└─ {dump}")
            }
            None => write!(f, "BstTree ∅"),
        }
    }
}
