//! Hash functions.
//!
//! [`base`] and [`step`] use Rust's truncating `%`, so a negative value maps to
//! a negative position. Probing treats such a position as an occupied slot
//! and keeps walking; chaining has no bucket for it and drops the value.
//! [`universal`] folds the `mod p` result into `0..p` first, so it never
//! yields a negative position.

use serde::{Deserialize, Serialize};

use crate::error::HashError;
use crate::Value;

/// `x mod m`; `m` must be non-zero.
#[inline]
pub fn base(x: Value, m: usize) -> i64 {
    x % m as i64
}

/// Double-hashing step, `7 - (x mod 7)`, never zero.
#[inline]
pub fn step(x: Value) -> i64 {
    match 7 - x % 7 {
        0 => 1,
        s => s,
    }
}

/// Parameters of `h(x) = ((a·x + b) mod p) mod m`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UniversalParams {
    pub a: i64,
    pub b: i64,
    pub p: i64,
    pub m: i64,
}

impl UniversalParams {
    pub const DEFAULT_A: i64 = 1;
    pub const DEFAULT_B: i64 = 0;
    pub const DEFAULT_P: i64 = 31;

    /// Default multiplier, offset and prime over a table of `m` slots.
    pub fn with_table_size(m: usize) -> Self {
        Self {
            a: Self::DEFAULT_A,
            b: Self::DEFAULT_B,
            p: Self::DEFAULT_P,
            m: m as i64,
        }
    }

    pub fn validate(&self) -> Result<(), HashError> {
        if self.p < 1 {
            return Err(HashError::InvalidParameter {
                name: "p",
                value: self.p,
            });
        }
        if self.m < 1 {
            return Err(HashError::InvalidParameter {
                name: "m",
                value: self.m,
            });
        }
        Ok(())
    }
}

/// Home slot under universal hashing. Assumes validated parameters.
#[inline]
pub fn universal(x: Value, params: &UniversalParams) -> usize {
    let mod_p = (params.a as i128 * x as i128 + params.b as i128).rem_euclid(params.p as i128);
    (mod_p % params.m as i128) as usize
}
