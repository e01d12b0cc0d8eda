//! Shared data model for Bitsy game content.

pub mod defs;
pub mod stats;

pub use defs::*;
pub use stats::WorldStats;
