//! Node trait definitions.
//!
//! Nodes live in a [`Vec`]-backed arena owned by the tree that built them.
//! Every child "pointer" is an `Option<u32>` index into that arena, so a
//! rotation is a handful of index rewrites on nodes the tree exclusively owns.

/// The only payload type carried by the kernel.
pub type Value = i64;

/// Binary-tree links (`l`, `r`) plus the stored value.
///
/// Implemented by the BST and AVL node types so traversal and printing helpers
/// in [`crate::util`] work over either arena.
pub trait Node {
    fn value(&self) -> Value;
    fn l(&self) -> Option<u32>;
    fn r(&self) -> Option<u32>;
    fn set_l(&mut self, v: Option<u32>);
    fn set_r(&mut self, v: Option<u32>);
}
