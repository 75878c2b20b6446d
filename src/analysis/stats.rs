//! Summary statistics over an amplified population.

use crate::base::Sequence;
use crate::errors::StatsError;
use crate::pcr::{distance_between_primers, Fragment, Population, PrimerPair};

/// Length and composition summary of the products of a run.
///
/// Strands whose length equals the initial segment's length are excluded
/// before aggregation: full-length copies are indistinguishable from the
/// seed material by length, and the interesting products are the truncated
/// ones.
#[derive(Debug, Clone, PartialEq)]
pub struct FragmentStats {
    /// Number of product strands after seed exclusion
    pub count: usize,
    /// Shortest product strand
    pub min_len: usize,
    /// Longest product strand
    pub max_len: usize,
    /// Mean product strand length
    pub mean_len: f64,
    /// GC content of the initial segment's template strand
    pub segment_gc: f64,
    /// GC content of the primer-bounded amplicon, when both primers bind
    pub amplicon_gc: Option<f64>,
}

/// Aggregate product statistics for a finished run.
///
/// The population is borrowed, never consumed; a statistics failure leaves
/// it available for export or inspection.
pub fn fragment_stats(
    population: &Population,
    segment: &Fragment,
    primers: &PrimerPair,
) -> Result<FragmentStats, StatsError> {
    let template = segment.template().ok_or(StatsError::EmptySegment)?;
    let segment_gc = template
        .gc_content()
        .map_err(|_| StatsError::EmptySegment)?;

    let seed_len = template.len();
    let lengths: Vec<usize> = population
        .strand_lengths()
        .into_iter()
        .filter(|&len| len != seed_len)
        .collect();

    if lengths.is_empty() {
        return Err(StatsError::EmptyPopulation);
    }

    let count = lengths.len();
    let min_len = lengths.iter().copied().min().unwrap_or(0);
    let max_len = lengths.iter().copied().max().unwrap_or(0);
    let mean_len = lengths.iter().sum::<usize>() as f64 / count as f64;

    Ok(FragmentStats {
        count,
        min_len,
        max_len,
        mean_len,
        segment_gc,
        amplicon_gc: amplicon_gc(template, segment, primers),
    })
}

/// GC content of the region the primer pair brackets on the template.
fn amplicon_gc(template: &Sequence, segment: &Fragment, primers: &PrimerPair) -> Option<f64> {
    let distance = distance_between_primers(segment, primers)?;
    if distance <= 0 {
        return None;
    }

    let start = template.find(primers.forward())?;
    let amplicon = template.slice(start + 1, Some(start + distance as usize));
    amplicon.gc_content().ok()
}
