//! The amplification engine.
//!
//! Each thermal cycle denatures every fragment pair into single strands,
//! anneals a primer to each strand that carries a binding site, and extends
//! the primer by a stochastic fall-off length, producing the next cycle's
//! population. Cycles are strictly sequential: cycle k+1 reads only the
//! fully materialized output of cycle k.

use crate::base::Sequence;
use crate::errors::ConfigError;
use crate::pcr::falloff::{
    distance_between_primers, generate_fall_off_rate, DEFAULT_FALL_OFF_PIVOT,
};
use crate::pcr::{FallOffSampling, Fragment, PcrConfig, Population, PrimerPair};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

/// Flatten fragment pairs into their constituent single strands.
///
/// Absent strands are discarded. The order is stable (fragment order,
/// template before synthesis) so a seeded run is reproducible.
pub fn denature(fragments: Vec<Fragment>) -> Vec<Sequence> {
    fragments
        .into_iter()
        .flat_map(Fragment::into_strands)
        .collect()
}

/// Main amplification engine.
///
/// Owns the population for the duration of a run. Construction resolves the
/// fall-off pivot (configured value, else the distance between the primer
/// binding sites on the initial segment, else the default processivity
/// window) and seeds the RNG; after that, a run cannot fail. A primer pair
/// that never binds collapses the population into single, non-replicating
/// strands after the first cycle, which is a valid terminal state.
#[derive(Debug)]
pub struct Amplification {
    /// Current population
    population: Population,
    /// Primer pair referenced by every cycle
    primers: PrimerPair,
    /// Binding site of the forward primer: its reverse complement. A primer
    /// anneals by complementary base-pairing, so a strand carries the site
    /// in complement form, never the primer's own bases.
    forward_site: Sequence,
    /// Binding site of the reverse primer
    reverse_site: Sequence,
    /// Resolved fall-off pivot
    pivot: i64,
    /// Run configuration
    config: PcrConfig,
    /// Random number generator (Xoshiro256++, seeded for reproducibility)
    rng: Xoshiro256PlusPlus,
}

impl Amplification {
    /// Create a new amplification run from an initial double-stranded
    /// segment and a primer pair.
    pub fn new(
        segment: Fragment,
        primers: PrimerPair,
        config: PcrConfig,
    ) -> Result<Self, ConfigError> {
        if segment.is_empty() {
            return Err(ConfigError::InvalidParameter(
                "initial segment must carry at least one strand".into(),
            ));
        }

        let pivot = config
            .fall_off
            .pivot()
            .or_else(|| distance_between_primers(&segment, &primers))
            .unwrap_or(DEFAULT_FALL_OFF_PIVOT);

        let rng = match config.seed {
            Some(seed) => Xoshiro256PlusPlus::seed_from_u64(seed),
            None => Xoshiro256PlusPlus::from_seed(rand::rng().random()),
        };

        let forward_site = primers.forward().complement();
        let reverse_site = primers.reverse().complement();

        Ok(Self {
            population: Population::new(vec![segment]),
            primers,
            forward_site,
            reverse_site,
            pivot,
            config,
            rng,
        })
    }

    /// Get the current population.
    pub fn population(&self) -> &Population {
        &self.population
    }

    /// Consume the engine, yielding the final population.
    pub fn into_population(self) -> Population {
        self.population
    }

    /// Get the current cycle number.
    pub fn cycle(&self) -> usize {
        self.population.cycle()
    }

    /// Get the resolved fall-off pivot.
    pub fn pivot(&self) -> i64 {
        self.pivot
    }

    /// Get the run configuration.
    pub fn config(&self) -> &PcrConfig {
        &self.config
    }

    fn sample_rate(&mut self) -> i64 {
        generate_fall_off_rate(&mut self.rng, self.pivot, self.config.fall_off.noise())
    }

    /// Advance the reaction by one thermal cycle.
    pub fn step(&mut self) {
        let single_strands = denature(self.population.take_fragments());

        // Per-cycle sampling draws once here and shares the rate across
        // every strand; per-event sampling draws inside the loop.
        let cycle_rate = match self.config.fall_off.sampling() {
            FallOffSampling::PerCycle => Some(self.sample_rate()),
            FallOffSampling::PerEvent => None,
        };

        let mut next = Vec::with_capacity(single_strands.len());
        for strand in single_strands {
            // Forward-primer site is checked first; first match wins.
            let fragment = if let Some(index) = strand.find(&self.forward_site) {
                let rate = cycle_rate.unwrap_or_else(|| self.sample_rate());
                elongate(strand, self.primers.forward(), index, rate)
            } else if let Some(index) = strand.find(&self.reverse_site) {
                let rate = cycle_rate.unwrap_or_else(|| self.sample_rate());
                elongate(strand, self.primers.reverse(), index, rate)
            } else {
                Fragment::single(strand)
            };

            // Fragments with no remaining strands are dead weight
            if !fragment.is_empty() {
                next.push(fragment);
            }
        }

        self.population.set_fragments(next);
        self.population.increment_cycle();
    }

    /// Run the configured number of cycles. There is no convergence
    /// detection; the cycle count is fixed by design.
    pub fn run(&mut self) {
        for _ in 0..self.config.num_cycles {
            self.step();
        }
    }
}

/// Extend a primer annealed at `index` on `template`.
///
/// The polymerase runs from the 3' end of the primer toward the start of
/// the template, so the copy spans `[index - fall_off, index + primer_len)`
/// clamped at zero. The copy is synthesized antiparallel to the template
/// and is complemented back into 5' to 3' orientation.
fn elongate(template: Sequence, primer: &Sequence, index: usize, fall_off: i64) -> Fragment {
    let start = (index as i64 - fall_off).max(0) as usize;
    let stop = index + primer.len();

    let copied = template.slice(start + 1, Some(stop));
    Fragment::new(Some(template), Some(copied.complement()))
}
