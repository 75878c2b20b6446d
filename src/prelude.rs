//! Commonly used imports for convenience.
//!
//! # Example
//!
//! ```
//! use amplisim::prelude::*;
//!
//! let segment = Sequence::new("ACGTACGTAC");
//! let fragment = Fragment::double_stranded(segment.clone(), segment.complement());
//! ```

pub use crate::base::{CodonInfo, Nucleotide, Sequence};
pub use crate::errors::{ConfigError, EmptySequence, FastaError, StatsError};
pub use crate::genbank::Fasta;
pub use crate::pcr::{
    Amplification, FallOffConfig, FallOffSampling, Fragment, PcrConfig, Population,
    PrimerPair,
};

// Analysis module re-exports
pub use crate::analysis::{fragment_stats, write_fragments, FragmentStats};
