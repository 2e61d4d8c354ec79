use std::time::Duration;

use knuth_hash::{UniversalParams, DEFAULT_TABLE_SIZE};
use serde::{Deserialize, Serialize};

/// Per-structure knobs. Every field has a default, so `{}` is a valid config.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// B-tree minimum degree `t`.
    pub btree_degree: usize,
    /// Table size for chaining, linear probing and double hashing.
    pub table_size: usize,
    pub universal: UniversalConfig,
    /// Pause between revealed values during playback.
    pub frame_delay_ms: u64,
}

impl SimConfig {
    pub const DEFAULT_BTREE_DEGREE: usize = 2;
    pub const DEFAULT_FRAME_DELAY_MS: u64 = 800;

    pub fn frame_delay(&self) -> Duration {
        Duration::from_millis(self.frame_delay_ms)
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            btree_degree: Self::DEFAULT_BTREE_DEGREE,
            table_size: DEFAULT_TABLE_SIZE,
            universal: UniversalConfig::default(),
            frame_delay_ms: Self::DEFAULT_FRAME_DELAY_MS,
        }
    }
}

/// Universal hashing parameters; `m` falls back to the dataset length.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UniversalConfig {
    pub a: i64,
    pub b: i64,
    pub p: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub m: Option<i64>,
}

impl UniversalConfig {
    pub fn params(&self, dataset_len: usize) -> UniversalParams {
        UniversalParams {
            a: self.a,
            b: self.b,
            p: self.p,
            m: self.m.unwrap_or(dataset_len as i64),
        }
    }
}

impl Default for UniversalConfig {
    fn default() -> Self {
        Self {
            a: UniversalParams::DEFAULT_A,
            b: UniversalParams::DEFAULT_B,
            p: UniversalParams::DEFAULT_P,
            m: None,
        }
    }
}
