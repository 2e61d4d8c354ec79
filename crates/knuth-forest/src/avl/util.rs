use tracing::{debug, trace};

use crate::types::Value;
use crate::util::{get_l, get_r, set_l, set_r};

use super::types::AvlNode;

/// Cached height; an absent child counts as 0.
#[inline]
pub fn height(arena: &[AvlNode], node: Option<u32>) -> u32 {
    node.map_or(0, |i| arena[i as usize].h)
}

#[inline]
fn update_height(arena: &mut [AvlNode], n: u32) {
    let h = 1 + height(arena, get_l(arena, n)).max(height(arena, get_r(arena, n)));
    arena[n as usize].h = h;
}

/// `height(left) - height(right)`.
pub fn balance(arena: &[AvlNode], n: u32) -> i64 {
    height(arena, get_l(arena, n)) as i64 - height(arena, get_r(arena, n)) as i64
}

/// Promotes the left child of `y` and returns it.
///
/// ```text
///     y          x
///    /            \
///   x      →       y
///    \            /
///     t2         t2
/// ```
pub fn rotate_right(arena: &mut [AvlNode], y: u32) -> u32 {
    let x = get_l(arena, y).expect("rotate_right requires a left child");
    let t2 = get_r(arena, x);
    set_r(arena, x, Some(y));
    set_l(arena, y, t2);
    update_height(arena, y);
    update_height(arena, x);
    x
}

/// Promotes the right child of `x` and returns it. Mirror of [`rotate_right`].
pub fn rotate_left(arena: &mut [AvlNode], x: u32) -> u32 {
    let y = get_r(arena, x).expect("rotate_left requires a right child");
    let t2 = get_l(arena, y);
    set_l(arena, y, Some(x));
    set_r(arena, x, t2);
    update_height(arena, x);
    update_height(arena, y);
    y
}

/// Inserts `v` below `node`, rebalancing on the way up, and returns the new
/// subtree root. A value already present leaves the subtree untouched.
pub fn insert(arena: &mut Vec<AvlNode>, node: Option<u32>, v: Value) -> u32 {
    let Some(n) = node else {
        arena.push(AvlNode::new(v));
        return (arena.len() - 1) as u32;
    };

    let AvlNode { l, r, v: at, .. } = arena[n as usize];
    if v < at {
        let l = insert(arena, l, v);
        set_l(arena, n, Some(l));
    } else if v > at {
        let r = insert(arena, r, v);
        set_r(arena, n, Some(r));
    } else {
        trace!(value = v, "duplicate rejected");
        return n;
    }

    update_height(arena, n);
    let bf = balance(arena, n);

    // A balance of ±2 implies the heavy child exists.
    if bf > 1 {
        let l = get_l(arena, n).expect("left-heavy node has a left child");
        let lv = arena[l as usize].v;
        if v < lv {
            debug!(pivot = at, "ll case: rotate right");
            return rotate_right(arena, n);
        }
        if v > lv {
            debug!(pivot = at, "lr case: rotate left, then right");
            let nl = rotate_left(arena, l);
            set_l(arena, n, Some(nl));
            return rotate_right(arena, n);
        }
    } else if bf < -1 {
        let r = get_r(arena, n).expect("right-heavy node has a right child");
        let rv = arena[r as usize].v;
        if v > rv {
            debug!(pivot = at, "rr case: rotate left");
            return rotate_left(arena, n);
        }
        if v < rv {
            debug!(pivot = at, "rl case: rotate right, then left");
            let nr = rotate_right(arena, r);
            set_r(arena, n, Some(nr));
            return rotate_left(arena, n);
        }
    }

    n
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(values: &[Value]) -> (Vec<AvlNode>, Option<u32>) {
        let mut arena = Vec::new();
        let mut root = None;
        for &v in values {
            root = Some(insert(&mut arena, root, v));
        }
        (arena, root)
    }

    #[test]
    fn ll_case_rotates_right() {
        let (arena, root) = build(&[3, 2, 1]);
        let root = root.unwrap();
        assert_eq!(arena[root as usize].v, 2);
        assert_eq!(arena[root as usize].h, 2);
        assert_eq!(arena[get_l(&arena, root).unwrap() as usize].v, 1);
        assert_eq!(arena[get_r(&arena, root).unwrap() as usize].v, 3);
    }

    #[test]
    fn rr_case_rotates_left() {
        let (arena, root) = build(&[1, 2, 3]);
        assert_eq!(arena[root.unwrap() as usize].v, 2);
    }

    #[test]
    fn lr_case_double_rotation() {
        let (arena, root) = build(&[3, 1, 2]);
        let root = root.unwrap();
        assert_eq!(arena[root as usize].v, 2);
        assert_eq!(balance(&arena, root), 0);
    }

    #[test]
    fn rl_case_double_rotation() {
        let (arena, root) = build(&[1, 3, 2]);
        let root = root.unwrap();
        assert_eq!(arena[root as usize].v, 2);
        assert_eq!(arena[get_l(&arena, root).unwrap() as usize].v, 1);
        assert_eq!(arena[get_r(&arena, root).unwrap() as usize].v, 3);
    }

    #[test]
    fn duplicate_keeps_arena_size() {
        let (arena, _) = build(&[5, 5, 5]);
        assert_eq!(arena.len(), 1);
    }
}
