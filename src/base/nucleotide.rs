use core::fmt;

use serde::{Deserialize, Serialize};

/// A DNA nucleotide base.
///
/// `Nucleotide` is a compact, Copyable representation of the four standard
/// DNA bases. Sequences store raw bytes, so `Nucleotide` mostly shows up at
/// the edges: complementing bases, counting composition, and keying codon
/// lookups. Conversion from bytes is strict uppercase; ambiguity codes and
/// lowercase bases are out of scope for the simulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Nucleotide {
    A,
    C,
    G,
    T,
}

impl Nucleotide {
    /// Convert from an ASCII byte (`b'A'`, `b'C'`, `b'G'`, `b'T'`).
    /// Returns `None` for anything else, including lowercase bases.
    #[inline]
    pub const fn from_ascii(byte: u8) -> Option<Self> {
        match byte {
            b'A' => Some(Self::A),
            b'C' => Some(Self::C),
            b'G' => Some(Self::G),
            b'T' => Some(Self::T),
            _ => None,
        }
    }

    /// Convert to the ASCII byte representing this nucleotide.
    #[inline(always)]
    pub const fn to_ascii(self) -> u8 {
        match self {
            Self::A => b'A',
            Self::C => b'C',
            Self::G => b'G',
            Self::T => b'T',
        }
    }

    /// Convert to a `char` representing this nucleotide.
    #[inline(always)]
    pub const fn to_char(self) -> char {
        self.to_ascii() as char
    }

    /// Return the Watson-Crick complementary base (A <-> T, C <-> G).
    #[inline(always)]
    pub const fn complement(self) -> Self {
        match self {
            Self::A => Self::T,
            Self::T => Self::A,
            Self::C => Self::G,
            Self::G => Self::C,
        }
    }
}

impl From<Nucleotide> for u8 {
    #[inline(always)]
    fn from(nuc: Nucleotide) -> u8 {
        nuc.to_ascii()
    }
}

impl From<Nucleotide> for char {
    #[inline(always)]
    fn from(nuc: Nucleotide) -> char {
        nuc.to_char()
    }
}

impl fmt::Display for Nucleotide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
