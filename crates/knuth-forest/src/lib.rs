//! Step-by-step builders for the classic teaching data structures.
//!
//! Each builder is a pure function of its input sequence: rebuilding from the
//! same values always yields a deep-equal structure. Nodes live in a
//! caller-invisible `Vec` arena and link through `Option<u32>` indices, so
//! rotations and splits are plain index rewrites.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! [`bst`] | Unbalanced binary search tree, duplicates routed right |
//! [`avl`] | Height-cached AVL tree with the four rotation cases |
//! [`btree`] | Minimum-degree B-tree with split-on-descent |
//! [`list`] | Self-organizing list with move-to-front |
//! [`snapshot`] | Owned nested trees for renderers |
//! [`print`] | Text dumps used by the `Display` impls |

pub mod avl;
pub mod bst;
pub mod btree;
pub mod error;
pub mod list;
pub mod print;
pub mod snapshot;
pub mod types;
pub mod util;

pub use avl::AvlTree;
pub use bst::BstTree;
pub use btree::BTree;
pub use error::ForestError;
pub use list::SelfOrganizingList;
pub use snapshot::{BTreeSnapshot, TreeSnapshot};
pub use types::{Node, Value};
