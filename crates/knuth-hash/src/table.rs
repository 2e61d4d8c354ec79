//! Fixed-size tables filled by the strategies in [`crate::strategy`].

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::Value;

/// One value per slot; collisions are resolved by probing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenTable {
    slots: Vec<Option<Value>>,
    /// Values that found no free slot, in arrival order.
    dropped: Vec<Value>,
}

impl OpenTable {
    pub fn new(m: usize) -> Self {
        Self {
            slots: vec![None; m],
            dropped: Vec::new(),
        }
    }

    /// Slot index for a probe position, if it names a vacant slot.
    ///
    /// Negative positions come from the uncorrected base hash and never
    /// name a slot.
    #[inline]
    fn vacant(&self, pos: i64) -> Option<usize> {
        let i = usize::try_from(pos).ok()?;
        match self.slots.get(i) {
            Some(None) => Some(i),
            _ => None,
        }
    }

    /// Probes from `home` in strides of `stride`, wrapping mod `m`, and stores
    /// `x` in the first vacant slot. After `m` probes the value is dropped.
    pub fn probe_insert(&mut self, x: Value, home: i64, stride: i64) -> Option<usize> {
        let m = self.slots.len() as i64;
        let mut pos = home;
        for _ in 0..m {
            if let Some(i) = self.vacant(pos) {
                self.slots[i] = Some(x);
                return Some(i);
            }
            pos = (pos + stride) % m;
        }
        warn!(value = x, probes = m, "table exhausted, value dropped");
        self.dropped.push(x);
        None
    }

    /// Stores `x` at `i` without probing; `i` must be in range.
    pub fn place(&mut self, i: usize, x: Value) {
        self.slots[i] = Some(x);
    }

    pub fn get(&self, i: usize) -> Option<Value> {
        self.slots.get(i).copied().flatten()
    }

    pub fn slots(&self) -> &[Option<Value>] {
        &self.slots
    }

    pub fn dropped(&self) -> &[Value] {
        &self.dropped
    }

    /// Number of occupied slots.
    pub fn load(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

/// Each slot holds every value hashed to it, in arrival order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainedTable {
    buckets: Vec<Vec<Value>>,
    dropped: Vec<Value>,
}

impl ChainedTable {
    pub fn new(m: usize) -> Self {
        Self {
            buckets: vec![Vec::new(); m],
            dropped: Vec::new(),
        }
    }

    /// Appends `x` to bucket `pos`. A position outside the table drops `x`.
    pub fn push(&mut self, pos: i64, x: Value) -> Option<usize> {
        let bucket = usize::try_from(pos)
            .ok()
            .and_then(|i| self.buckets.get_mut(i).map(|b| (i, b)));
        match bucket {
            Some((i, b)) => {
                b.push(x);
                Some(i)
            }
            None => {
                warn!(value = x, position = pos, "no bucket for position, value dropped");
                self.dropped.push(x);
                None
            }
        }
    }

    pub fn bucket(&self, i: usize) -> &[Value] {
        self.buckets.get(i).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn buckets(&self) -> &[Vec<Value>] {
        &self.buckets
    }

    pub fn dropped(&self) -> &[Value] {
        &self.dropped
    }

    /// Number of stored values across all buckets.
    pub fn load(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

/// Either table layout, as produced by [`crate::Strategy::build`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "layout", rename_all = "snake_case")]
pub enum Table {
    Chained(ChainedTable),
    Open(OpenTable),
}

impl Table {
    pub fn dropped(&self) -> &[Value] {
        match self {
            Table::Chained(t) => t.dropped(),
            Table::Open(t) => t.dropped(),
        }
    }

    pub fn load(&self) -> usize {
        match self {
            Table::Chained(t) => t.load(),
            Table::Open(t) => t.load(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Table::Chained(t) => t.len(),
            Table::Open(t) => t.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_open(&self) -> Option<&OpenTable> {
        match self {
            Table::Open(t) => Some(t),
            Table::Chained(_) => None,
        }
    }

    pub fn as_chained(&self) -> Option<&ChainedTable> {
        match self {
            Table::Chained(t) => Some(t),
            Table::Open(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_home_walks_up_to_zero() {
        let mut t = OpenTable::new(10);
        // -3, -2, -1 name no slot; 0 is the fourth probe.
        assert_eq!(t.probe_insert(-3, -3, 1), Some(0));
        assert_eq!(t.probe_insert(-13, -3, 1), Some(1));
    }

    #[test]
    fn negative_home_can_exhaust_small_table() {
        let mut t = OpenTable::new(3);
        t.place(0, 1);
        // -5, -1 name no slot, 0 is taken; three probes spent.
        assert_eq!(t.probe_insert(-5, -5, 1), None);
        assert_eq!(t.dropped(), &[-5]);
        assert_eq!(t.load(), 1);
    }

    #[test]
    fn chained_rejects_negative_position() {
        let mut t = ChainedTable::new(10);
        assert_eq!(t.push(-3, -3), None);
        assert_eq!(t.push(3, 13), Some(3));
        assert_eq!(t.dropped(), &[-3]);
        assert_eq!(t.bucket(3), &[13]);
        assert_eq!(t.bucket(99), &[] as &[Value]);
    }
}
