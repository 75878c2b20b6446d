//! Polymerase fall-off sampling and primer geometry.
//!
//! Taq polymerase detaches from the template after a stochastic number of
//! bases. The sampler draws that number uniformly around a pivot; the pivot
//! itself can be anchored to the distance between the two primer binding
//! sites so early cycles produce realistically sized copies.

use crate::base::Sequence;
use crate::pcr::{Fragment, PrimerPair};
use rand::Rng;

/// Default fall-off pivot, a typical Taq processivity window.
pub const DEFAULT_FALL_OFF_PIVOT: i64 = 200;

/// Default fall-off noise half-width.
pub const DEFAULT_FALL_OFF_NOISE: i64 = 50;

/// Draw a fall-off rate uniformly from `[pivot - noise, pivot + noise)`.
///
/// `noise` must be positive and non-zero; that is the caller's
/// responsibility and is enforced where configurations are built, not here.
#[inline]
pub fn generate_fall_off_rate<R: Rng + ?Sized>(rng: &mut R, pivot: i64, noise: i64) -> i64 {
    rng.random_range(pivot - noise..pivot + noise)
}

/// Compute the span between the forward primer's start on the template and
/// the reverse primer's start on the complement:
/// `(len(complement) - index_of(reverse, complement)) - index_of(forward, template)`.
///
/// Returns `None` when the segment is not double-stranded or either primer
/// has no binding site, rather than producing arithmetic on a failed search.
pub fn distance_between_primers(segment: &Fragment, primers: &PrimerPair) -> Option<i64> {
    let template = segment.template()?;
    let complement = segment.synthesis()?;

    let start = find_index(template, primers.forward())?;
    let end = complement.len() as i64 - find_index(complement, primers.reverse())?;

    Some(end - start)
}

fn find_index(strand: &Sequence, primer: &Sequence) -> Option<i64> {
    strand.find(primer).map(|i| i as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;

    #[test]
    fn test_fall_off_rate_stays_in_window() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(7);
        for _ in 0..10_000 {
            let rate = generate_fall_off_rate(&mut rng, 200, 50);
            assert!((150..250).contains(&rate), "rate {rate} out of window");
        }
    }

    #[test]
    fn test_fall_off_rate_minimal_noise() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(7);
        for _ in 0..100 {
            let rate = generate_fall_off_rate(&mut rng, 10, 1);
            assert!((9..11).contains(&rate));
        }
    }

    #[test]
    fn test_distance_between_primers_exact() {
        // Template of 120 bases with the forward primer at offset 5; the
        // complement carries the reverse primer at offset 15, so the span is
        // (120 - 15) - 5 = 100.
        let mut template = "T".repeat(5);
        template.push_str("ACGTACGTAC");
        template.push_str(&"T".repeat(105));
        let template = Sequence::new(template);

        let mut complement = "A".repeat(15);
        complement.push_str("GGCCGGCC");
        complement.push_str(&"A".repeat(97));
        let complement = Sequence::new(complement);

        let segment = Fragment::double_stranded(template, complement);
        let primers = PrimerPair::new(
            Sequence::new("ACGTACGTAC"),
            Sequence::new("GGCCGGCC"),
        )
        .unwrap();

        assert_eq!(distance_between_primers(&segment, &primers), Some(100));
    }

    #[test]
    fn test_distance_requires_both_binding_sites() {
        let segment = Fragment::double_stranded(
            Sequence::new("AAAAAAAAAA"),
            Sequence::new("TTTTTTTTTT"),
        );
        let primers =
            PrimerPair::new(Sequence::new("GGGG"), Sequence::new("CCCC")).unwrap();

        assert_eq!(distance_between_primers(&segment, &primers), None);
    }

    #[test]
    fn test_distance_requires_double_stranded_segment() {
        let segment = Fragment::single(Sequence::new("ACGTACGT"));
        let primers =
            PrimerPair::new(Sequence::new("ACGT"), Sequence::new("ACGT")).unwrap();

        assert_eq!(distance_between_primers(&segment, &primers), None);
    }
}
