use core::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A DNA nucleotide base.
///
/// `Nucleotide` is a compact, Copyable representation of DNA bases backed by
/// a single byte (u8). The mapping of variants to integers is stable and used
/// throughout the crate (A=0, C=1, G=2, T=3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Nucleotide {
    A = 0,
    C = 1,
    G = 2,
    T = 3,
}

/// Error for bytes that do not name a DNA base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid nucleotide byte {0}")]
pub struct InvalidNucleotide(pub u8);

impl Nucleotide {
    /// Convert from u8 index (0-3).
    #[inline(always)]
    pub const fn from_index(idx: u8) -> Option<Self> {
        match idx {
            0 => Some(Self::A),
            1 => Some(Self::C),
            2 => Some(Self::G),
            3 => Some(Self::T),
            _ => None,
        }
    }

    /// Convert to the compact u8 index (0-3).
    #[inline(always)]
    pub const fn to_index(self) -> u8 {
        self as u8
    }

    /// Convert from an ASCII byte (`b'A'`, `b'C'`, `b'G'`, `b'T'`), also
    /// accepting lowercase. Returns `None` for non-standard characters.
    #[inline]
    pub const fn from_ascii(byte: u8) -> Option<Self> {
        match byte {
            b'A' | b'a' => Some(Self::A),
            b'C' | b'c' => Some(Self::C),
            b'G' | b'g' => Some(Self::G),
            b'T' | b't' => Some(Self::T),
            _ => None,
        }
    }

    /// Convert to an uppercase `char` representing this nucleotide.
    #[inline(always)]
    pub const fn to_char(self) -> char {
        match self {
            Self::A => 'A',
            Self::C => 'C',
            Self::G => 'G',
            Self::T => 'T',
        }
    }

    /// Return the complementary base (A <-> T, C <-> G).
    #[inline(always)]
    pub const fn complement(self) -> Self {
        match self {
            Self::A => Self::T,
            Self::T => Self::A,
            Self::C => Self::G,
            Self::G => Self::C,
        }
    }

    /// Return true for the strong bases (C, G), which pair with three
    /// hydrogen bonds. The survival trait counts strong bases.
    #[inline(always)]
    pub const fn is_strong(self) -> bool {
        matches!(self, Self::C | Self::G)
    }

    /// Draw a uniformly random base.
    #[inline]
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::from_index(rng.random_range(0..4)).unwrap_or(Self::A)
    }

    /// Draw a uniformly random base from the three bases other than
    /// `excluded`. The result is never equal to `excluded`.
    #[inline]
    pub fn random_excluding<R: Rng + ?Sized>(rng: &mut R, excluded: Self) -> Self {
        // Generate an index in [0, 3) and skip past the excluded base.
        let mut idx = rng.random_range(0..3u8);
        if idx >= excluded.to_index() {
            idx += 1;
        }
        Self::from_index(idx).unwrap_or_else(|| excluded.complement())
    }
}

impl TryFrom<u8> for Nucleotide {
    type Error = InvalidNucleotide;

    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        Self::from_ascii(byte).ok_or(InvalidNucleotide(byte))
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
