//! Arena traversal helpers shared by the BST and AVL builders.
//!
//! No node stores a parent link, so in-order walks keep an explicit stack of
//! arena indices instead of climbing `p` pointers.

use crate::types::{Node, Value};

#[inline]
pub(crate) fn get_l<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].l()
}

#[inline]
pub(crate) fn get_r<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].r()
}

#[inline]
pub(crate) fn set_l<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_l(v);
}

#[inline]
pub(crate) fn set_r<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_r(v);
}

/// Leftmost node of the subtree rooted at `root`.
pub fn first<N: Node>(arena: &[N], root: Option<u32>) -> Option<u32> {
    let mut curr = root;
    while let Some(idx) = curr {
        match get_l(arena, idx) {
            Some(l) => curr = Some(l),
            None => return Some(idx),
        }
    }
    curr
}

/// Rightmost node of the subtree rooted at `root`.
pub fn last<N: Node>(arena: &[N], root: Option<u32>) -> Option<u32> {
    let mut curr = root;
    while let Some(idx) = curr {
        match get_r(arena, idx) {
            Some(r) => curr = Some(r),
            None => return Some(idx),
        }
    }
    curr
}

/// Arena indices in in-order (left, node, right) sequence.
pub fn in_order_indices<N: Node>(arena: &[N], root: Option<u32>) -> Vec<u32> {
    let mut out = Vec::new();
    let mut stack = Vec::new();
    let mut curr = root;
    loop {
        while let Some(idx) = curr {
            stack.push(idx);
            curr = get_l(arena, idx);
        }
        let Some(idx) = stack.pop() else {
            break;
        };
        out.push(idx);
        curr = get_r(arena, idx);
    }
    out
}

/// Values in in-order sequence.
pub fn in_order<N: Node>(arena: &[N], root: Option<u32>) -> Vec<Value> {
    in_order_indices(arena, root)
        .into_iter()
        .map(|idx| arena[idx as usize].value())
        .collect()
}

/// Number of nodes reachable from `root`.
pub fn size<N: Node>(arena: &[N], root: Option<u32>) -> usize {
    in_order_indices(arena, root).len()
}

/// Height of the subtree, counting nodes (leaf = 1, empty = 0).
pub fn height<N: Node>(arena: &[N], root: Option<u32>) -> u32 {
    match root {
        None => 0,
        Some(idx) => {
            1 + height(arena, get_l(arena, idx)).max(height(arena, get_r(arena, idx)))
        }
    }
}

/// First node holding `value` on the search path from `root`.
pub fn find<N: Node>(arena: &[N], root: Option<u32>, value: Value) -> Option<u32> {
    let mut curr = root;
    while let Some(idx) = curr {
        let v = arena[idx as usize].value();
        if value == v {
            return Some(idx);
        }
        curr = if value < v {
            get_l(arena, idx)
        } else {
            get_r(arena, idx)
        };
    }
    None
}
