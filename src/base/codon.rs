//! Codon lookup for the standard genetic code.
//!
//! A process-wide, read-only table keyed by 3-base triplets. This is a
//! convenience facility for inspecting a gene's protein product; the
//! amplification engine itself never consults it.

use super::Sequence;
use std::collections::HashMap;
use std::sync::LazyLock;

/// The amino acid (or stop signal) a codon codes for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodonInfo {
    /// Full amino acid name, e.g. "Methionine"
    pub name: &'static str,
    /// Three-letter abbreviation, e.g. "Met"
    pub abbreviation: &'static str,
    /// One-letter symbol; `None` for stop codons
    pub symbol: Option<char>,
    /// True for the canonical start codon (ATG)
    pub is_start: bool,
    /// True for the three stop codons
    pub is_stop: bool,
}

static CODON_TABLE: LazyLock<HashMap<&'static str, CodonInfo>> = LazyLock::new(|| {
    let mut table = HashMap::with_capacity(64);

    let mut coding = |codons: &[&'static str],
                      name: &'static str,
                      abbreviation: &'static str,
                      symbol: char| {
        for &codon in codons {
            table.insert(
                codon,
                CodonInfo {
                    name,
                    abbreviation,
                    symbol: Some(symbol),
                    is_start: codon == "ATG",
                    is_stop: false,
                },
            );
        }
    };

    coding(&["GCT", "GCC", "GCA", "GCG"], "Alanine", "Ala", 'A');
    coding(&["CGT", "CGC", "CGA", "CGG", "AGA", "AGG"], "Arginine", "Arg", 'R');
    coding(&["AAT", "AAC"], "Asparagine", "Asn", 'N');
    coding(&["GAT", "GAC"], "Aspartate", "Asp", 'D');
    coding(&["TGT", "TGC"], "Cysteine", "Cys", 'C');
    coding(&["CAA", "CAG"], "Glutamine", "Gln", 'Q');
    coding(&["GAA", "GAG"], "Glutamate", "Glu", 'E');
    coding(&["GGT", "GGC", "GGA", "GGG"], "Glycine", "Gly", 'G');
    coding(&["CAT", "CAC"], "Histidine", "His", 'H');
    coding(&["ATT", "ATC", "ATA"], "Isoleucine", "Ile", 'I');
    coding(
        &["TTA", "TTG", "CTT", "CTC", "CTA", "CTG"],
        "Leucine",
        "Leu",
        'L',
    );
    coding(&["AAA", "AAG"], "Lysine", "Lys", 'K');
    coding(&["ATG"], "Methionine", "Met", 'M');
    coding(&["TTT", "TTC"], "Phenylalanine", "Phe", 'F');
    coding(&["CCT", "CCC", "CCA", "CCG"], "Proline", "Pro", 'P');
    coding(
        &["TCT", "TCC", "TCA", "TCG", "AGT", "AGC"],
        "Serine",
        "Ser",
        'S',
    );
    coding(&["ACT", "ACC", "ACA", "ACG"], "Threonine", "Thr", 'T');
    coding(&["TGG"], "Tryptophan", "Trp", 'W');
    coding(&["TAT", "TAC"], "Tyrosine", "Tyr", 'Y');
    coding(&["GTT", "GTC", "GTA", "GTG"], "Valine", "Val", 'V');

    let stop = |name: &'static str| CodonInfo {
        name,
        abbreviation: "Ter",
        symbol: None,
        is_start: false,
        is_stop: true,
    };
    table.insert("TAA", stop("Stop (Ochre)"));
    table.insert("TAG", stop("Stop (Amber)"));
    table.insert("TGA", stop("Stop (Opal)"));

    table
});

/// Look up a 3-base triplet in the standard genetic code.
///
/// Returns `None` for triplets containing unrecognized symbols.
pub fn lookup(triplet: &str) -> Option<&'static CodonInfo> {
    CODON_TABLE.get(triplet)
}

impl Sequence {
    /// Iterate over successive 3-base triplets, reading frame 1.
    ///
    /// A trailing partial triplet is dropped. Triplets are yielded even when
    /// they contain unrecognized symbols; `lookup` rejects those.
    pub fn codons(&self) -> impl Iterator<Item = &str> + '_ {
        self.bases()
            .chunks_exact(3)
            .filter_map(|chunk| std::str::from_utf8(chunk).ok())
    }

    /// Translate the sequence into a protein string of one-letter symbols.
    ///
    /// Stop codons and unrecognized triplets contribute nothing, matching
    /// the permissive behavior of the rest of the data model.
    pub fn translate(&self) -> String {
        self.codons()
            .filter_map(lookup)
            .filter_map(|info| info.symbol)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_covers_all_64_codons() {
        let bases = ['A', 'C', 'G', 'T'];
        let mut count = 0;
        for a in bases {
            for b in bases {
                for c in bases {
                    let triplet = format!("{a}{b}{c}");
                    assert!(lookup(&triplet).is_some(), "missing codon {triplet}");
                    count += 1;
                }
            }
        }
        assert_eq!(count, 64);
    }

    #[test]
    fn test_start_codon() {
        let met = lookup("ATG").unwrap();
        assert!(met.is_start);
        assert!(!met.is_stop);
        assert_eq!(met.symbol, Some('M'));
        assert_eq!(met.abbreviation, "Met");
    }

    #[test]
    fn test_stop_codons_have_no_symbol() {
        for triplet in ["TAA", "TAG", "TGA"] {
            let info = lookup(triplet).unwrap();
            assert!(info.is_stop, "{triplet} should be a stop codon");
            assert!(!info.is_start);
            assert_eq!(info.symbol, None);
        }
    }

    #[test]
    fn test_lookup_rejects_unrecognized_triplet() {
        assert!(lookup("ANT").is_none());
        assert!(lookup("XYZ").is_none());
        assert!(lookup("AT").is_none());
    }

    #[test]
    fn test_codons_drop_trailing_partial_triplet() {
        let seq = Sequence::new("ATGGCCTA");
        let codons: Vec<&str> = seq.codons().collect();
        assert_eq!(codons, vec!["ATG", "GCC"]);
    }

    #[test]
    fn test_translate() {
        // Met-Ala-Trp, then a stop that contributes nothing
        let seq = Sequence::new("ATGGCCTGGTAA");
        assert_eq!(seq.translate(), "MAW");
    }

    #[test]
    fn test_translate_skips_unrecognized_triplets() {
        let seq = Sequence::new("ATGNNNGCC");
        assert_eq!(seq.translate(), "MA");
    }
}
