//! Height-balanced binary search tree.
//!
//! Every node caches its subtree height; insertion recomputes heights
//! bottom-up and applies one of the four classic rotation cases wherever the
//! balance factor leaves `-1..=1`. Duplicate values are rejected.

pub mod types;
pub mod util;

use std::fmt;

use crate::print::print_node;
use crate::snapshot::TreeSnapshot;
use crate::types::{Node, Value};

pub use types::AvlNode;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AvlTree {
    pub root: Option<u32>,
    arena: Vec<AvlNode>,
}

impl AvlTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn build(values: &[Value]) -> Self {
        let mut tree = Self::new();
        for &v in values {
            tree.insert(v);
        }
        tree
    }

    /// Returns `false` when `v` was already present.
    pub fn insert(&mut self, v: Value) -> bool {
        let before = self.arena.len();
        self.root = Some(util::insert(&mut self.arena, self.root, v));
        self.arena.len() > before
    }

    pub fn node(&self, idx: u32) -> &AvlNode {
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

    pub fn balance_factor(&self, idx: u32) -> i64 {
        util::balance(&self.arena, idx)
    }

    pub fn contains(&self, v: Value) -> bool {
        crate::util::find(&self.arena, self.root, v).is_some()
    }

    pub fn in_order(&self) -> Vec<Value> {
        crate::util::in_order(&self.arena, self.root)
    }

    pub fn snapshot(&self) -> Option<TreeSnapshot> {
        self.root
            .map(|root| TreeSnapshot::from_arena(&self.arena, root, &|n: &AvlNode| Some(n.h)))
    }

    /// Checks ordering, cached heights and balance of every node.
    pub fn assert_valid(&self) -> Result<(), String> {
        let Some(root) = self.root else {
            return if self.arena.is_empty() {
                Ok(())
            } else {
                Err("empty tree with allocated nodes".to_string())
            };
        };
        let count = self.check(root, None, None)?.1;
        if count != self.arena.len() {
            return Err(format!(
                "reachable nodes {count} != allocated nodes {}",
                self.arena.len()
            ));
        }
        Ok(())
    }

    /// Returns `(height, node count)` of the verified subtree.
    fn check(&self, idx: u32, lo: Option<Value>, hi: Option<Value>) -> Result<(u32, usize), String> {
        let n = &self.arena[idx as usize];
        if lo.is_some_and(|lo| n.v <= lo) || hi.is_some_and(|hi| n.v >= hi) {
            return Err(format!("node {} violates ordering", n.v));
        }
        let (lh, lc) = match n.l {
            Some(l) => self.check(l, lo, Some(n.v))?,
            None => (0, 0),
        };
        let (rh, rc) = match n.r {
            Some(r) => self.check(r, Some(n.v), hi)?,
            None => (0, 0),
        };
        let h = 1 + lh.max(rh);
        if n.h != h {
            return Err(format!("node {} caches height {} but has {h}", n.v, n.h));
        }
        let bf = lh as i64 - rh as i64;
        if bf.abs() > 1 {
            return Err(format!("node {} has balance factor {bf}", n.v));
        }
        Ok((h, lc + rc + 1))
    }
}

impl fmt::Display for AvlTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.root {
            Some(root) => {
                let dump = print_node(&self.arena, root, "   ", &|n: &AvlNode| {
                    format!("{} [h={}]", n.value(), n.h)
                });
                write!(f, "AvlTree\n└─ {dump}")
            }
            None => write!(f, "AvlTree ∅"),
        }
    }
}
