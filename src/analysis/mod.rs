//! Post-run analysis: product statistics and export.

pub mod export;
pub mod stats;

pub use export::write_fragments;
pub use stats::{fragment_stats, FragmentStats};
