//! Hash-table placement strategies for teaching collision handling.
//!
//! | Strategy | Home slot | On collision |
//! |----------|-----------|--------------|
//! | chaining | `x mod m` | append to the slot's chain |
//! | linear probing | `x mod m` | step by 1, drop after `m` probes |
//! | double hashing | `x mod m` | step by `7 - (x mod 7)`, drop after `m` probes |
//! | perfect | input position | none |
//! | universal | `((a·x + b) mod p) mod m` | step by 1, drop after `m` probes |

pub mod error;
pub mod hash;
pub mod strategy;
pub mod table;

pub type Value = i64;

pub use error::HashError;
pub use hash::UniversalParams;
pub use strategy::{
    chaining, collisions, double_hashing, linear_probing, perfect, universal, Collisions, Strategy,
    DEFAULT_TABLE_SIZE,
};
pub use table::{ChainedTable, OpenTable, Table};
