//! Amplisim: a library for simulating polymerase chain reaction amplification.
//!
//! This library provides data structures and algorithms for modeling thermal
//! cycling over a seed DNA segment: denaturation, primer annealing, and
//! stochastic polymerase fall-off, together with post-run product statistics.

pub mod analysis;
pub mod base;
pub mod errors;
pub mod genbank;
pub mod pcr;
pub mod prelude;

// Re-export commonly used types for convenient external access.
//
// These types form the public, stable surface that most consumers of the
// library will use when setting up or analyzing a run. Re-exporting them
// here makes them available as `amplisim::Sequence`, `amplisim::Fragment`,
// etc.
pub use base::{Nucleotide, Sequence};
pub use pcr::{Amplification, Fragment, PcrConfig, Population, PrimerPair};
