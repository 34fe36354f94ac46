//! Organism entity and lifecycle rules.
//!
//! An organism owns a DNA strand and per-individual state (age, alive flag).
//! Survival, mutation, and reproduction eligibility are all evaluated here;
//! the population engine orchestrates them across a generation.

use crate::base::{Strand, StrandError};
use rand::Rng;

/// Maximum age an organism can reach and still be alive.
pub const LIFESPAN: u32 = 8;

/// An organism may reproduce in any cycle where its age is a multiple of this.
pub const REPRODUCTION_INTERVAL: u32 = 1;

/// Fraction of strong (C/G) bases required for the survival trait.
pub const TRAIT_THRESHOLD: f64 = 0.6;

/// A single simulated P. aequor individual.
#[derive(Debug, Clone)]
pub struct Organism {
    /// Process-unique id assigned from the engine's lifetime counter.
    id: u64,
    /// Owned strand; cloned, never aliased, at reproduction.
    strand: Strand,
    /// Number of aliveness checks survived.
    age: u32,
    /// Result of the most recent aliveness check.
    alive: bool,
    /// Chance to survive a cycle when the survival trait is present.
    /// Organisms without the trait survive at half this rate.
    survival_chance: f64,
    /// Chance to mutate during a cycle.
    mutation_chance: f64,
}

impl Organism {
    /// Create a new organism at age 0.
    pub fn new(id: u64, strand: Strand, survival_chance: f64, mutation_chance: f64) -> Self {
        Self {
            id,
            strand,
            age: 0,
            alive: true,
            survival_chance,
            mutation_chance,
        }
    }

    /// Get the organism's id.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Get the organism's strand.
    pub fn strand(&self) -> &Strand {
        &self.strand
    }

    /// Get the organism's age.
    pub fn age(&self) -> u32 {
        self.age
    }

    /// Result of the most recent aliveness check.
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Per-cycle mutation chance.
    pub fn mutation_chance(&self) -> f64 {
        self.mutation_chance
    }

    /// True iff at least 60% of the strand is strong (C/G) bases.
    /// For the standard 15-base strand this means 9 or more.
    pub fn has_survival_trait(&self) -> bool {
        self.strand.strong_count() as f64 >= self.strand.len() as f64 * TRAIT_THRESHOLD
    }

    /// With the given probability, substitute one random position of the
    /// strand with a different random base; otherwise leave it unchanged.
    /// Returns the (possibly unchanged) strand.
    pub fn mutate<R: Rng + ?Sized>(&mut self, rng: &mut R, probability: f64) -> &Strand {
        if rng.random::<f64>() < probability {
            self.strand.point_mutation(rng);
        }
        &self.strand
    }

    /// Determine survival for this cycle.
    ///
    /// The survival factor is `survival_chance` when the trait is present and
    /// half of it otherwise. One uniform draw in [0, 1) decides the check;
    /// surviving the draw increments age. Age advances even when the lifespan
    /// cap then rules the organism out. Final aliveness requires both the
    /// successful draw and `age <= LIFESPAN`, and is stored on the organism.
    pub fn check_aliveness<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        let factor = if self.has_survival_trait() {
            self.survival_chance
        } else {
            self.survival_chance / 2.0
        };

        let survived_draw = rng.random::<f64>() < factor;
        if survived_draw {
            self.age += 1;
        }

        self.alive = survived_draw && self.age <= LIFESPAN;
        self.alive
    }

    /// True iff the organism's age falls on its reproduction interval.
    /// With the fixed interval of 1 this holds every cycle.
    pub fn can_replicate(&self) -> bool {
        self.age % REPRODUCTION_INTERVAL == 0
    }

    /// Compare this organism's strand with another's, position-wise.
    ///
    /// Returns a message naming both specimens and the shared percentage to
    /// two decimal places. Neither organism is modified.
    pub fn compare_to(&self, other: &Organism) -> Result<String, StrandError> {
        let shared = self.strand.similarity(&other.strand)?;
        Ok(format!(
            "Specimen {} and Specimen {} have {:.2}% shared DNA.",
            self.id,
            other.id,
            shared * 100.0
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn organism_with(strand: &str, survival_chance: f64) -> Organism {
        Organism::new(1, Strand::from_str(strand).unwrap(), survival_chance, 0.35)
    }

    #[test]
    fn test_new_organism_state() {
        let org = organism_with("ACGTACGTACGTACG", 0.7);
        assert_eq!(org.id(), 1);
        assert_eq!(org.age(), 0);
        assert!(org.is_alive());
    }

    #[test]
    fn test_survival_trait_all_strong() {
        // 15 of 15 strong bases is well above the 9-of-15 threshold.
        let org = organism_with("GGGGGGGGGGGGGGG", 0.7);
        assert!(org.has_survival_trait());
    }

    #[test]
    fn test_survival_trait_all_weak() {
        let org = organism_with("AAAAAAAAAAAAAAA", 0.7);
        assert!(!org.has_survival_trait());
    }

    #[test]
    fn test_survival_trait_boundary() {
        // Exactly 9 of 15 strong bases: trait present.
        let org = organism_with("CCCCCCCCCAAAAAA", 0.7);
        assert_eq!(org.strand().strong_count(), 9);
        assert!(org.has_survival_trait());

        // 8 of 15: trait absent.
        let org = organism_with("CCCCCCCCAAAAAAA", 0.7);
        assert_eq!(org.strand().strong_count(), 8);
        assert!(!org.has_survival_trait());
    }

    #[test]
    fn test_mutate_certain_changes_one_base() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let mut org = Organism::new(1, Strand::random(&mut rng), 0.7, 0.35);
            let before = org.strand().clone();
            org.mutate(&mut rng, 1.0);
            let shared = before.similarity(org.strand()).unwrap();
            // Exactly one of 15 positions changed.
            assert!((shared - 14.0 / 15.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_mutate_never_triggers_at_zero() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut org = Organism::new(1, Strand::random(&mut rng), 0.7, 0.35);
        let before = org.strand().clone();
        for _ in 0..100 {
            org.mutate(&mut rng, 0.0);
        }
        assert_eq!(org.strand(), &before);
    }

    #[test]
    fn test_mutate_returns_strand() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut org = Organism::new(1, Strand::random(&mut rng), 0.7, 0.35);
        let strand = org.mutate(&mut rng, 0.0).clone();
        assert_eq!(&strand, org.strand());
    }

    #[test]
    fn test_check_aliveness_certain_survival_increments_age() {
        let mut rng = StdRng::seed_from_u64(42);
        // Trait carrier with survival chance 1.0 always survives the draw.
        let mut org = organism_with("GGGGGGGGGGGGGGG", 1.0);
        assert!(org.check_aliveness(&mut rng));
        assert_eq!(org.age(), 1);
        assert!(org.is_alive());
    }

    #[test]
    fn test_check_aliveness_certain_death() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut org = organism_with("GGGGGGGGGGGGGGG", 0.0);
        assert!(!org.check_aliveness(&mut rng));
        assert_eq!(org.age(), 0);
        assert!(!org.is_alive());
    }

    #[test]
    fn test_check_aliveness_lifespan_cap() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut org = organism_with("GGGGGGGGGGGGGGG", 1.0);

        // Survives up to and including age == LIFESPAN.
        for expected_age in 1..=LIFESPAN {
            assert!(org.check_aliveness(&mut rng));
            assert_eq!(org.age(), expected_age);
        }

        // The next successful draw still increments age, but the cap fails.
        assert!(!org.check_aliveness(&mut rng));
        assert_eq!(org.age(), LIFESPAN + 1);
        assert!(!org.is_alive());
    }

    #[test]
    fn test_trait_halves_survival_factor() {
        // With survival chance 1.0 a trait-less organism still has factor
        // 0.5, so over many trials roughly half the checks succeed.
        let mut rng = StdRng::seed_from_u64(42);
        let mut survived = 0;
        for _ in 0..1000 {
            let mut org = organism_with("AAAAAAAAAAAAAAA", 1.0);
            if org.check_aliveness(&mut rng) {
                survived += 1;
            }
        }
        assert!((400..600).contains(&survived), "survived {survived} of 1000");
    }

    #[test]
    fn test_can_replicate_every_cycle() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut org = organism_with("GGGGGGGGGGGGGGG", 1.0);
        assert!(org.can_replicate()); // age 0
        org.check_aliveness(&mut rng);
        assert!(org.can_replicate()); // age 1
    }

    #[test]
    fn test_compare_to_message() {
        let a = Organism::new(3, Strand::from_str("ACTG").unwrap(), 0.7, 0.35);
        let b = Organism::new(7, Strand::from_str("CATT").unwrap(), 0.7, 0.35);
        let msg = a.compare_to(&b).unwrap();
        assert_eq!(msg, "Specimen 3 and Specimen 7 have 25.00% shared DNA.");
    }

    #[test]
    fn test_compare_to_length_mismatch() {
        let a = Organism::new(1, Strand::from_str("ACTG").unwrap(), 0.7, 0.35);
        let b = Organism::new(2, Strand::from_str("ACT").unwrap(), 0.7, 0.35);
        assert!(a.compare_to(&b).is_err());
    }

    #[test]
    fn test_compare_to_is_pure() {
        let mut rng = StdRng::seed_from_u64(42);
        let a = Organism::new(1, Strand::random(&mut rng), 0.7, 0.35);
        let b = Organism::new(2, Strand::random(&mut rng), 0.7, 0.35);
        let before_a = a.strand().clone();
        let before_b = b.strand().clone();
        let _ = a.compare_to(&b).unwrap();
        assert_eq!(a.strand(), &before_a);
        assert_eq!(b.strand(), &before_b);
    }
}
