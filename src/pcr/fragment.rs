//! Fragment pairs and the reaction population.
//!
//! A reaction vessel holds fragment pairs: a template strand together with
//! the strand synthesized against it, if any. "No synthesis occurred" is an
//! explicit absent strand, never an empty sequence.

use crate::base::Sequence;
use crate::errors::ConfigError;

/// The forward and reverse primers supplied once at the start of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimerPair {
    forward: Sequence,
    reverse: Sequence,
}

impl PrimerPair {
    /// Create a primer pair. Zero-length primers are rejected: an empty
    /// primer would "bind" every strand at offset zero.
    pub fn new(forward: Sequence, reverse: Sequence) -> Result<Self, ConfigError> {
        if forward.is_empty() || reverse.is_empty() {
            return Err(ConfigError::InvalidParameter(
                "primers must be non-empty".into(),
            ));
        }
        Ok(Self { forward, reverse })
    }

    /// Get the forward primer.
    #[inline]
    pub fn forward(&self) -> &Sequence {
        &self.forward
    }

    /// Get the reverse primer.
    #[inline]
    pub fn reverse(&self) -> &Sequence {
        &self.reverse
    }
}

/// A template strand paired with its synthesized complement, or with an
/// explicit marker that no synthesis occurred.
///
/// Construction normalizes: a zero-length strand is replaced by the absent
/// marker, so a fragment never carries an empty, non-absent strand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    template: Option<Sequence>,
    synthesis: Option<Sequence>,
}

impl Fragment {
    /// Create a fragment, normalizing zero-length strands to absent.
    pub fn new(template: Option<Sequence>, synthesis: Option<Sequence>) -> Self {
        Self {
            template: template.filter(|s| !s.is_empty()),
            synthesis: synthesis.filter(|s| !s.is_empty()),
        }
    }

    /// Create a double-stranded fragment.
    pub fn double_stranded(template: Sequence, synthesis: Sequence) -> Self {
        Self::new(Some(template), Some(synthesis))
    }

    /// Create a single-stranded fragment with no synthesis partner.
    pub fn single(template: Sequence) -> Self {
        Self::new(Some(template), None)
    }

    /// Get the template strand.
    #[inline]
    pub fn template(&self) -> Option<&Sequence> {
        self.template.as_ref()
    }

    /// Get the synthesized strand.
    #[inline]
    pub fn synthesis(&self) -> Option<&Sequence> {
        self.synthesis.as_ref()
    }

    /// Check if both strands are absent. Empty fragments contribute nothing
    /// to later cycles and are pruned from the population.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.template.is_none() && self.synthesis.is_none()
    }

    /// Iterate over the present strands, template first.
    pub fn strands(&self) -> impl Iterator<Item = &Sequence> {
        self.template.iter().chain(self.synthesis.iter())
    }

    /// Consume the fragment, yielding its present strands, template first.
    pub fn into_strands(self) -> impl Iterator<Item = Sequence> {
        self.template.into_iter().chain(self.synthesis)
    }
}

/// The reaction vessel's contents at the end of a cycle.
///
/// Owned exclusively by the amplification engine for the duration of a run
/// and handed to statistics only afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Population {
    /// The fragment pairs currently in the vessel
    fragments: Vec<Fragment>,
    /// Cycle counter
    cycle: usize,
}

impl Population {
    /// Create a population from fragments, at cycle zero.
    pub fn new(fragments: Vec<Fragment>) -> Self {
        Self {
            fragments,
            cycle: 0,
        }
    }

    /// Get the current cycle number.
    pub fn cycle(&self) -> usize {
        self.cycle
    }

    /// Increment the cycle counter.
    pub fn increment_cycle(&mut self) {
        self.cycle += 1;
    }

    /// Get the number of fragment pairs.
    pub fn size(&self) -> usize {
        self.fragments.len()
    }

    /// Check if the population holds no fragments.
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Get all fragments as a slice.
    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    /// Get a specific fragment by index.
    pub fn get(&self, index: usize) -> Option<&Fragment> {
        self.fragments.get(index)
    }

    /// Replace the entire population with new fragments.
    pub fn set_fragments(&mut self, fragments: Vec<Fragment>) {
        self.fragments = fragments;
    }

    /// Take the fragments out, leaving the population empty.
    pub fn take_fragments(&mut self) -> Vec<Fragment> {
        std::mem::take(&mut self.fragments)
    }

    /// Lengths of every present strand, in fragment order, template first
    /// within each pair.
    pub fn strand_lengths(&self) -> Vec<usize> {
        self.fragments
            .iter()
            .flat_map(|f| f.strands().map(Sequence::len))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== PrimerPair =====

    #[test]
    fn test_primer_pair_new() {
        let pair = PrimerPair::new(Sequence::new("ACGT"), Sequence::new("TTAA")).unwrap();
        assert_eq!(pair.forward().to_string(), "ACGT");
        assert_eq!(pair.reverse().to_string(), "TTAA");
    }

    #[test]
    fn test_primer_pair_rejects_empty() {
        assert!(PrimerPair::new(Sequence::empty(), Sequence::new("ACGT")).is_err());
        assert!(PrimerPair::new(Sequence::new("ACGT"), Sequence::empty()).is_err());
    }

    // ===== Fragment =====

    #[test]
    fn test_fragment_double_stranded() {
        let frag = Fragment::double_stranded(Sequence::new("ACGT"), Sequence::new("ACGT"));
        assert!(frag.template().is_some());
        assert!(frag.synthesis().is_some());
        assert!(!frag.is_empty());
    }

    #[test]
    fn test_fragment_single() {
        let frag = Fragment::single(Sequence::new("ACGT"));
        assert!(frag.template().is_some());
        assert!(frag.synthesis().is_none());
        assert!(!frag.is_empty());
    }

    #[test]
    fn test_fragment_normalizes_empty_strands() {
        let frag = Fragment::new(Some(Sequence::new("ACGT")), Some(Sequence::empty()));
        assert!(frag.synthesis().is_none());

        let frag = Fragment::new(Some(Sequence::empty()), Some(Sequence::empty()));
        assert!(frag.is_empty());
    }

    #[test]
    fn test_fragment_strands_order() {
        let frag = Fragment::double_stranded(Sequence::new("AAAA"), Sequence::new("TTTT"));
        let strands: Vec<String> = frag.strands().map(|s| s.to_string()).collect();
        assert_eq!(strands, vec!["AAAA", "TTTT"]);
    }

    #[test]
    fn test_fragment_strands_skip_absent() {
        let frag = Fragment::single(Sequence::new("AAAA"));
        assert_eq!(frag.strands().count(), 1);
    }

    #[test]
    fn test_fragment_into_strands() {
        let frag = Fragment::double_stranded(Sequence::new("AA"), Sequence::new("TT"));
        let strands: Vec<Sequence> = frag.into_strands().collect();
        assert_eq!(strands.len(), 2);
        assert_eq!(strands[0].to_string(), "AA");
    }

    // ===== Population =====

    #[test]
    fn test_population_new() {
        let pop = Population::new(vec![Fragment::single(Sequence::new("ACGT"))]);
        assert_eq!(pop.size(), 1);
        assert_eq!(pop.cycle(), 0);
        assert!(!pop.is_empty());
    }

    #[test]
    fn test_population_cycle_counter() {
        let mut pop = Population::new(vec![]);
        pop.increment_cycle();
        pop.increment_cycle();
        assert_eq!(pop.cycle(), 2);
    }

    #[test]
    fn test_population_set_and_take() {
        let mut pop = Population::new(vec![Fragment::single(Sequence::new("AA"))]);
        let taken = pop.take_fragments();
        assert_eq!(taken.len(), 1);
        assert!(pop.is_empty());

        pop.set_fragments(vec![
            Fragment::single(Sequence::new("AA")),
            Fragment::single(Sequence::new("CC")),
        ]);
        assert_eq!(pop.size(), 2);
        assert!(pop.get(1).is_some());
        assert!(pop.get(2).is_none());
    }

    #[test]
    fn test_population_strand_lengths() {
        let pop = Population::new(vec![
            Fragment::double_stranded(Sequence::new("AAAA"), Sequence::new("TT")),
            Fragment::single(Sequence::new("CCC")),
        ]);
        assert_eq!(pop.strand_lengths(), vec![4, 2, 3]);
    }
}
