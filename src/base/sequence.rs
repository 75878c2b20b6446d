use super::Nucleotide;
use crate::errors::EmptySequence;
use std::collections::HashMap;
use std::fmt;

/// A nucleotide sequence, read 5' to 3'.
///
/// The bases are stored as the raw ASCII bytes supplied by the caller.
/// Construction does not validate: a well-formed sequence contains only
/// `A`, `C`, `G` and `T`, and feeding anything else in is a caller error.
/// Every transformation returns a new `Sequence`; an existing one is never
/// mutated in place.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Sequence {
    bases: Vec<u8>,
}

impl Sequence {
    /// Create a sequence from a raw base string.
    pub fn new(bases: impl Into<String>) -> Self {
        Self {
            bases: bases.into().into_bytes(),
        }
    }

    /// Create an empty sequence.
    pub fn empty() -> Self {
        Self { bases: Vec::new() }
    }

    /// Get the number of bases.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.bases.len()
    }

    /// Check if the sequence has no bases.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.bases.is_empty()
    }

    /// Get the raw bases.
    #[inline]
    pub fn bases(&self) -> &[u8] {
        &self.bases
    }

    /// Get the base at position (0-based), if it is a recognized nucleotide.
    #[inline]
    pub fn get(&self, index: usize) -> Option<Nucleotide> {
        self.bases.get(index).and_then(|&b| Nucleotide::from_ascii(b))
    }

    /// Create a subsequence using GenBank coordinates.
    ///
    /// `begin` is 1-based and inclusive (`begin = 1` is the first base);
    /// `end` is the last byte offset taken, so `slice(1, Some(len))` returns
    /// the whole sequence. Passing `None` for `end` takes the remainder.
    /// Out-of-range coordinates are clamped rather than rejected.
    pub fn slice(&self, begin: usize, end: Option<usize>) -> Sequence {
        let start = begin.saturating_sub(1).min(self.bases.len());
        let stop = end.unwrap_or(self.bases.len()).min(self.bases.len());

        if start >= stop {
            return Sequence::empty();
        }

        Sequence {
            bases: self.bases[start..stop].to_vec(),
        }
    }

    /// Create the reverse complement of this sequence.
    ///
    /// Each base is mapped to its Watson-Crick partner and the order is
    /// reversed, so the result itself reads 5' to 3'. Bases outside
    /// {A, C, G, T} are silently dropped: the complement of a sequence with
    /// unrecognized symbols is shorter than its input. This looseness is
    /// kept deliberately; see DESIGN.md.
    pub fn complement(&self) -> Sequence {
        let mut bases: Vec<u8> = self
            .bases
            .iter()
            .filter_map(|&b| Nucleotide::from_ascii(b))
            .map(|n| n.complement().to_ascii())
            .collect();
        bases.reverse();
        Sequence { bases }
    }

    /// Compute the GC content: the fraction of bases that are G or C.
    ///
    /// Fails on an empty sequence, where the ratio is undefined.
    pub fn gc_content(&self) -> Result<f64, EmptySequence> {
        if self.bases.is_empty() {
            return Err(EmptySequence);
        }

        let gc = self
            .bases
            .iter()
            .filter(|&&b| b == b'G' || b == b'C')
            .count();

        Ok(gc as f64 / self.bases.len() as f64)
    }

    /// Count each recognized nucleotide in the sequence.
    ///
    /// All four bases are present in the result, with zero counts where a
    /// base does not occur. Unrecognized symbols are not counted.
    pub fn composition(&self) -> HashMap<Nucleotide, usize> {
        let mut counts = HashMap::new();
        counts.insert(Nucleotide::A, 0);
        counts.insert(Nucleotide::C, 0);
        counts.insert(Nucleotide::G, 0);
        counts.insert(Nucleotide::T, 0);

        for &byte in &self.bases {
            if let Some(nuc) = Nucleotide::from_ascii(byte) {
                *counts.entry(nuc).or_insert(0) += 1;
            }
        }

        counts
    }

    /// Find the first occurrence of `needle` as a contiguous subsequence.
    ///
    /// Returns the 0-based offset of the match. An empty needle matches at
    /// offset 0.
    pub fn find(&self, needle: &Sequence) -> Option<usize> {
        if needle.is_empty() {
            return Some(0);
        }
        if needle.len() > self.len() {
            return None;
        }

        self.bases
            .windows(needle.len())
            .position(|window| window == needle.bases())
    }

    /// Check whether `needle` occurs anywhere in this sequence.
    #[inline]
    pub fn contains(&self, needle: &Sequence) -> bool {
        self.find(needle).is_some()
    }

    /// A short, human-oriented rendering: the first ten bases with an
    /// ellipsis when the sequence is longer.
    pub fn preview(&self) -> String {
        const PREVIEW_LEN: usize = 10;

        let shown = &self.bases[..self.bases.len().min(PREVIEW_LEN)];
        format!(
            "5'-{}{}-3'",
            String::from_utf8_lossy(shown),
            if self.bases.len() > PREVIEW_LEN { "..." } else { "" }
        )
    }
}

impl From<&str> for Sequence {
    fn from(bases: &str) -> Self {
        Sequence::new(bases)
    }
}

impl From<String> for Sequence {
    fn from(bases: String) -> Self {
        Sequence::new(bases)
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.bases))
    }
}
