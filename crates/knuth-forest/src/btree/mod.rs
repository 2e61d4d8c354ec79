//! B-tree with proactive splitting.
//!
//! Parameterized by the minimum degree `t`: every node other than the root
//! holds between `t - 1` and `2t - 1` keys. Full nodes are split on the way
//! down, so an insertion never has to walk back up; the tree only grows taller
//! when the root itself is full.

pub mod types;
pub mod util;

use std::fmt;

use tracing::debug;

use crate::error::ForestError;
use crate::print::print_branches;
use crate::snapshot::BTreeSnapshot;
use crate::types::Value;

pub use types::BTreeNode;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BTree {
    t: usize,
    pub root: u32,
    arena: Vec<BTreeNode>,
}

impl BTree {
    /// Rejects `t < 2`, and any `t` whose `2t - 1` key bound overflows.
    pub fn new(t: usize) -> Result<Self, ForestError> {
        if t < 2 || t.checked_mul(2).is_none() {
            return Err(ForestError::InvalidDegree(t));
        }
        Ok(Self {
            t,
            root: 0,
            arena: vec![BTreeNode::leaf()],
        })
    }

    pub fn build(values: &[Value], t: usize) -> Result<Self, ForestError> {
        let mut tree = Self::new(t)?;
        for &v in values {
            tree.insert(v);
        }
        Ok(tree)
    }

    pub fn insert(&mut self, value: Value) {
        if util::is_full(&self.arena, self.root, self.t) {
            self.arena.push(BTreeNode::internal(vec![self.root]));
            let root = (self.arena.len() - 1) as u32;
            util::split_child(&mut self.arena, root, 0, self.t);
            self.root = root;
            debug!(height = self.height(), "root split");
        }
        util::insert_non_full(&mut self.arena, self.root, value, self.t);
    }

    pub fn min_degree(&self) -> usize {
        self.t
    }

    pub fn node(&self, idx: u32) -> &BTreeNode {
        &self.arena[idx as usize]
    }

    /// Total number of keys stored.
    pub fn len(&self) -> usize {
        self.arena.iter().map(|n| n.keys.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.arena[self.root as usize].keys.is_empty()
    }

    /// Number of levels; a lone root is height 1.
    pub fn height(&self) -> u32 {
        let mut h = 1;
        let mut curr = self.root;
        while let Some(&child) = self.arena[curr as usize].children.first() {
            curr = child;
            h += 1;
        }
        h
    }

    pub fn keys_in_order(&self) -> Vec<Value> {
        let mut out = Vec::with_capacity(self.len());
        self.collect(self.root, &mut out);
        out
    }

    fn collect(&self, idx: u32, out: &mut Vec<Value>) {
        let node = &self.arena[idx as usize];
        for (i, &k) in node.keys.iter().enumerate() {
            if let Some(&c) = node.children.get(i) {
                self.collect(c, out);
            }
            out.push(k);
        }
        if let Some(&c) = node.children.get(node.keys.len()) {
            self.collect(c, out);
        }
    }

    pub fn snapshot(&self) -> BTreeSnapshot {
        self.snapshot_node(self.root)
    }

    fn snapshot_node(&self, idx: u32) -> BTreeSnapshot {
        let node = &self.arena[idx as usize];
        BTreeSnapshot {
            keys: node.keys.clone(),
            children: node
                .children
                .iter()
                .map(|&c| self.snapshot_node(c))
                .collect(),
            leaf: node.leaf,
        }
    }

    /// Checks key bounds, child counts, key ordering and leaf depth.
    pub fn assert_valid(&self) -> Result<(), String> {
        let mut leaf_depth = None;
        self.check(self.root, 0, &mut leaf_depth)?;
        let keys = self.keys_in_order();
        if keys.windows(2).any(|w| w[0] > w[1]) {
            return Err(format!("keys out of order: {keys:?}"));
        }
        Ok(())
    }

    fn check(&self, idx: u32, depth: u32, leaf_depth: &mut Option<u32>) -> Result<(), String> {
        let node = &self.arena[idx as usize];
        let n = node.keys.len();
        if n > 2 * self.t - 1 {
            return Err(format!("node {idx} holds {n} keys"));
        }
        if idx != self.root && n < self.t - 1 {
            return Err(format!("non-root node {idx} holds only {n} keys"));
        }
        if node.leaf {
            if !node.children.is_empty() {
                return Err(format!("leaf {idx} has children"));
            }
            match *leaf_depth {
                None => *leaf_depth = Some(depth),
                Some(d) if d != depth => {
                    return Err(format!("leaf {idx} at depth {depth}, expected {d}"));
                }
                Some(_) => {}
            }
            return Ok(());
        }
        if node.children.len() != n + 1 {
            return Err(format!(
                "internal node {idx} has {n} keys and {} children",
                node.children.len()
            ));
        }
        for &c in &node.children {
            self.check(c, depth + 1, leaf_depth)?;
        }
        Ok(())
    }

    fn print_node(&self, idx: u32, tab: &str) -> String {
        let node = &self.arena[idx as usize];
        let children =
            print_branches(tab, node.children.as_slice(), |c, t| self.print_node(c, t));
        format!("{:?}{children}", node.keys)
    }
}

impl fmt::Display for BTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BTree t={}\n└─ {}", self.t, self.print_node(self.root, "   "))
    }
}
