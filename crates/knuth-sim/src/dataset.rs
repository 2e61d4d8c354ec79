use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SimError;
use crate::Value;

/// What a dataset is fed into.
///
/// Parses the English names below and the tags stored with the site's
/// datasets (`lista`, `hash`, `colisoes`, `perfeito`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum StructureKind {
    Bst,
    Avl,
    BTree,
    List,
    /// Chaining, linear probing and double hashing side by side.
    Collisions,
    Chaining,
    LinearProbing,
    DoubleHashing,
    Perfect,
    Universal,
}

impl StructureKind {
    pub const ALL: [StructureKind; 10] = [
        StructureKind::Bst,
        StructureKind::Avl,
        StructureKind::BTree,
        StructureKind::List,
        StructureKind::Collisions,
        StructureKind::Chaining,
        StructureKind::LinearProbing,
        StructureKind::DoubleHashing,
        StructureKind::Perfect,
        StructureKind::Universal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StructureKind::Bst => "bst",
            StructureKind::Avl => "avl",
            StructureKind::BTree => "btree",
            StructureKind::List => "list",
            StructureKind::Collisions => "collisions",
            StructureKind::Chaining => "chaining",
            StructureKind::LinearProbing => "linear_probing",
            StructureKind::DoubleHashing => "double_hashing",
            StructureKind::Perfect => "perfect",
            StructureKind::Universal => "universal",
        }
    }

    pub fn is_hash(&self) -> bool {
        matches!(
            self,
            StructureKind::Collisions
                | StructureKind::Chaining
                | StructureKind::LinearProbing
                | StructureKind::DoubleHashing
                | StructureKind::Perfect
                | StructureKind::Universal
        )
    }
}

impl FromStr for StructureKind {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, SimError> {
        let kind = match s.to_ascii_lowercase().replace('-', "_").as_str() {
            "bst" => StructureKind::Bst,
            "avl" => StructureKind::Avl,
            "btree" | "b_tree" => StructureKind::BTree,
            "list" | "lista" => StructureKind::List,
            "collisions" | "colisoes" | "hash" => StructureKind::Collisions,
            "chaining" => StructureKind::Chaining,
            "linear_probing" => StructureKind::LinearProbing,
            "double_hashing" => StructureKind::DoubleHashing,
            "perfect" | "perfeito" => StructureKind::Perfect,
            "universal" => StructureKind::Universal,
            _ => return Err(SimError::UnknownKind(s.to_string())),
        };
        Ok(kind)
    }
}

impl TryFrom<String> for StructureKind {
    type Error = SimError;

    fn try_from(s: String) -> Result<Self, SimError> {
        s.parse()
    }
}

impl From<StructureKind> for String {
    fn from(kind: StructureKind) -> String {
        kind.as_str().to_string()
    }
}

impl fmt::Display for StructureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A labelled value sequence, as stored by the site.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub label: String,
    pub data: Vec<Value>,
    #[serde(default, alias = "tipo", skip_serializing_if = "Option::is_none")]
    pub kind: Option<StructureKind>,
}

impl Dataset {
    pub fn new(label: impl Into<String>, data: Vec<Value>, kind: StructureKind) -> Self {
        Self {
            label: label.into(),
            data,
            kind: Some(kind),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, SimError> {
        Ok(serde_json::from_str(json)?)
    }
}
