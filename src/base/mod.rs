//! Base types for strand representation.
//!
//! This module provides the foundational types for representing nucleotides
//! and DNA strands in the aequor library.

mod nucleotide;
mod strand;

pub use nucleotide::{InvalidNucleotide, Nucleotide};
pub use strand::{Strand, StrandError, STRAND_LEN};
