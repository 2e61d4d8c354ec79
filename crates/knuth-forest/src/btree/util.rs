use tracing::debug;

use crate::types::Value;

use super::types::BTreeNode;

#[inline]
pub fn is_full(arena: &[BTreeNode], n: u32, t: usize) -> bool {
    arena[n as usize].keys.len() == 2 * t - 1
}

/// Splits the full child `parent.children[i]` around its median key.
///
/// The median (index `t - 1`) moves up into `parent.keys[i]`; everything after
/// it moves into a new right sibling placed at `parent.children[i + 1]`.
pub fn split_child(arena: &mut Vec<BTreeNode>, parent: u32, i: usize, t: usize) {
    let mid = t - 1;
    let full = arena[parent as usize].children[i];
    let node = &mut arena[full as usize];
    let right_keys = node.keys.split_off(mid + 1);
    let median = node
        .keys
        .pop()
        .expect("a full node holds 2t - 1 keys");
    let right_children = if node.leaf {
        Vec::new()
    } else {
        node.children.split_off(mid + 1)
    };
    let leaf = node.leaf;
    debug!(median, at = i, "split child");

    arena.push(BTreeNode {
        keys: right_keys,
        children: right_children,
        leaf,
    });
    let sibling = (arena.len() - 1) as u32;
    let parent = &mut arena[parent as usize];
    parent.keys.insert(i, median);
    parent.children.insert(i + 1, sibling);
}

/// Inserts `value` below `n`, which must not be full.
///
/// Full children met on the way down are split before descending into them.
pub fn insert_non_full(arena: &mut Vec<BTreeNode>, n: u32, value: Value, t: usize) {
    let node = &mut arena[n as usize];
    let mut i = node.keys.partition_point(|&k| k <= value);
    if node.leaf {
        node.keys.insert(i, value);
        return;
    }
    if is_full(arena, arena[n as usize].children[i], t) {
        split_child(arena, n, i, t);
        if value > arena[n as usize].keys[i] {
            i += 1;
        }
    }
    let child = arena[n as usize].children[i];
    insert_non_full(arena, child, value, t);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_promotes_median_and_moves_tail() {
        let mut arena = vec![BTreeNode::internal(vec![1]), BTreeNode {
            keys: vec![10, 20, 30],
            children: Vec::new(),
            leaf: true,
        }];
        split_child(&mut arena, 0, 0, 2);
        assert_eq!(arena[0].keys, vec![20]);
        assert_eq!(arena[0].children, vec![1, 2]);
        assert_eq!(arena[1].keys, vec![10]);
        assert_eq!(arena[2].keys, vec![30]);
        assert!(arena[2].leaf);
    }

    #[test]
    fn leaf_insert_keeps_equal_keys_adjacent() {
        let mut arena = vec![BTreeNode::leaf()];
        for v in [5, 1, 5, 3] {
            insert_non_full(&mut arena, 0, v, 3);
        }
        assert_eq!(arena[0].keys, vec![1, 3, 5, 5]);
    }
}
