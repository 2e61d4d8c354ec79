//! Playback and dispatch for the webknuth simulations.
//!
//! A caller picks a [`StructureKind`] and a dataset; [`simulate`] builds the
//! final structure, [`frames`] builds one [`Snapshot`] per revealed prefix,
//! and [`Feed`] reveals prefixes on a timer for animated consumption.
//! Structures are always rebuilt from scratch per prefix.

pub mod config;
pub mod dataset;
pub mod error;
pub mod feed;
pub mod simulate;

pub use knuth_forest::Value;

pub use config::{SimConfig, UniversalConfig};
pub use dataset::{Dataset, StructureKind};
pub use error::SimError;
pub use feed::Feed;
pub use simulate::{frames, simulate, Simulator, Snapshot};
