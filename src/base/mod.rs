//! Base types for sequence representation.
//!
//! This module provides the foundational types for representing nucleotides
//! and sequences, plus the static codon lookup table.

pub mod codon;
mod nucleotide;
mod sequence;

pub use codon::CodonInfo;
pub use nucleotide::Nucleotide;
pub use sequence::Sequence;
