//! Dispatch from a [`StructureKind`] to the matching builder.

use futures_core::Stream;
use knuth_forest::{AvlTree, BTree, BTreeSnapshot, BstTree, SelfOrganizingList, TreeSnapshot};
use knuth_hash::{Collisions, Strategy, Table};
use serde::{Deserialize, Serialize};
use tokio_stream::StreamExt;

use crate::config::SimConfig;
use crate::dataset::StructureKind;
use crate::error::SimError;
use crate::feed::Feed;
use crate::Value;

/// What a renderer draws for one frame.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "structure", rename_all = "snake_case")]
pub enum Snapshot {
    Bst(Option<TreeSnapshot>),
    Avl(Option<TreeSnapshot>),
    #[serde(rename = "btree")]
    BTree(BTreeSnapshot),
    /// Head first.
    List(Vec<Value>),
    Table(Table),
    Collisions(Collisions),
}

/// Builds frames of one structure over prefixes of a dataset.
///
/// `total` is the length of the full dataset; perfect hashing sizes its table
/// by it and universal hashing uses it when no `m` is configured.
#[derive(Clone, Debug)]
pub struct Simulator {
    kind: StructureKind,
    config: SimConfig,
    total: usize,
}

impl Simulator {
    pub fn new(kind: StructureKind, config: SimConfig, total: usize) -> Self {
        Self {
            kind,
            config,
            total,
        }
    }

    pub fn kind(&self) -> StructureKind {
        self.kind
    }

    /// Rebuilds the structure from scratch over `prefix`.
    pub fn frame(&self, prefix: &[Value]) -> Result<Snapshot, SimError> {
        let config = &self.config;
        let hashed = |strategy: Strategy| -> Result<Snapshot, SimError> {
            Ok(Snapshot::Table(strategy.build(prefix, config.table_size)?))
        };
        match self.kind {
            StructureKind::Bst => Ok(Snapshot::Bst(BstTree::build(prefix).snapshot())),
            StructureKind::Avl => Ok(Snapshot::Avl(AvlTree::build(prefix).snapshot())),
            StructureKind::BTree => Ok(Snapshot::BTree(
                BTree::build(prefix, config.btree_degree)?.snapshot(),
            )),
            StructureKind::List => Ok(Snapshot::List(
                SelfOrganizingList::from_values(prefix).to_vec(),
            )),
            StructureKind::Collisions => Ok(Snapshot::Collisions(knuth_hash::collisions(
                prefix,
                config.table_size,
            )?)),
            StructureKind::Chaining => hashed(Strategy::Chaining),
            StructureKind::LinearProbing => hashed(Strategy::LinearProbing),
            StructureKind::DoubleHashing => hashed(Strategy::DoubleHashing),
            StructureKind::Perfect => Ok(Snapshot::Table(
                Strategy::Perfect.build(prefix, self.total)?,
            )),
            StructureKind::Universal => Ok(Snapshot::Table(
                Strategy::Universal(config.universal.params(self.total))
                    .build(prefix, config.table_size)?,
            )),
        }
    }

    /// One frame per non-empty prefix of `values`.
    pub fn frames(&self, values: &[Value]) -> Result<Vec<Snapshot>, SimError> {
        (1..=values.len()).map(|k| self.frame(&values[..k])).collect()
    }

    /// Turns a running feed into a stream of frames.
    pub fn play(self, feed: Feed) -> impl Stream<Item = Result<Snapshot, SimError>> {
        feed.map(move |prefix| self.frame(&prefix))
    }
}

/// Builds `kind` over the whole of `values`.
pub fn simulate(
    kind: StructureKind,
    values: &[Value],
    config: &SimConfig,
) -> Result<Snapshot, SimError> {
    Simulator::new(kind, config.clone(), values.len()).frame(values)
}

/// Builds `kind` over every non-empty prefix of `values`.
pub fn frames(
    kind: StructureKind,
    values: &[Value],
    config: &SimConfig,
) -> Result<Vec<Snapshot>, SimError> {
    Simulator::new(kind, config.clone(), values.len()).frames(values)
}
