//! The five placement strategies.
//!
//! Every strategy is a pure function of the ordered input and its
//! parameters: values are placed in arrival order, and a value that cannot be
//! placed is recorded in the table's `dropped` list instead of aborting the
//! build.

use serde::{Deserialize, Serialize};

use crate::error::HashError;
use crate::hash::{self, UniversalParams};
use crate::table::{ChainedTable, OpenTable, Table};
use crate::Value;

/// Table size used by the collision strategies when none is configured.
pub const DEFAULT_TABLE_SIZE: usize = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "strategy", rename_all = "snake_case")]
pub enum Strategy {
    Chaining,
    LinearProbing,
    DoubleHashing,
    Perfect,
    Universal(UniversalParams),
}

impl Strategy {
    /// Builds a table of `table_size` slots. Universal hashing takes its size
    /// from its own `m` instead.
    pub fn build(&self, values: &[Value], table_size: usize) -> Result<Table, HashError> {
        Ok(match self {
            Strategy::Chaining => Table::Chained(chaining(values, table_size)?),
            Strategy::LinearProbing => Table::Open(linear_probing(values, table_size)?),
            Strategy::DoubleHashing => Table::Open(double_hashing(values, table_size)?),
            Strategy::Perfect => Table::Open(perfect(values, table_size)?),
            Strategy::Universal(params) => Table::Open(universal(values, params)?),
        })
    }
}

fn check_size(m: usize) -> Result<(), HashError> {
    if m == 0 {
        return Err(HashError::InvalidParameter { name: "m", value: 0 });
    }
    Ok(())
}

pub fn chaining(values: &[Value], m: usize) -> Result<ChainedTable, HashError> {
    check_size(m)?;
    let mut table = ChainedTable::new(m);
    for &x in values {
        table.push(hash::base(x, m), x);
    }
    Ok(table)
}

pub fn linear_probing(values: &[Value], m: usize) -> Result<OpenTable, HashError> {
    check_size(m)?;
    let mut table = OpenTable::new(m);
    for &x in values {
        table.probe_insert(x, hash::base(x, m), 1);
    }
    Ok(table)
}

pub fn double_hashing(values: &[Value], m: usize) -> Result<OpenTable, HashError> {
    check_size(m)?;
    let mut table = OpenTable::new(m);
    for &x in values {
        table.probe_insert(x, hash::base(x, m), hash::step(x));
    }
    Ok(table)
}

/// Positional placement: `table[i] = values[i]`.
///
/// `size` is the length of the complete dataset, so a prefix of it leaves
/// the tail of the table empty.
pub fn perfect(values: &[Value], size: usize) -> Result<OpenTable, HashError> {
    if values.len() > size {
        return Err(HashError::TableTooSmall {
            len: values.len(),
            size,
        });
    }
    let mut table = OpenTable::new(size);
    for (i, &x) in values.iter().enumerate() {
        table.place(i, x);
    }
    Ok(table)
}

/// Universal hashing with linear probing on collision.
pub fn universal(values: &[Value], params: &UniversalParams) -> Result<OpenTable, HashError> {
    params.validate()?;
    let mut table = OpenTable::new(params.m as usize);
    for &x in values {
        table.probe_insert(x, hash::universal(x, params) as i64, 1);
    }
    Ok(table)
}

/// Chaining, linear probing and double hashing over the same input.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collisions {
    pub chaining: ChainedTable,
    pub linear: OpenTable,
    pub double: OpenTable,
}

pub fn collisions(values: &[Value], m: usize) -> Result<Collisions, HashError> {
    Ok(Collisions {
        chaining: chaining(values, m)?,
        linear: linear_probing(values, m)?,
        double: double_hashing(values, m)?,
    })
}
