//! # Phenotype Trait
//!
//! The `Phenotype` trait defines the interface for types that represent
//! individuals in the evolutionary search. Individuals are values: crossover
//! and mutation never edit a parent in place, they return fresh offspring.
//! Every individual carries a fitness slot that the launcher fills in after
//! scoring.
//!
//! Individuals are drawn from a *pool*, the read-only source of genes they
//! are assembled from (for a [`Build`](crate::build::Build) that is the
//! [`Catalog`](crate::catalog::Catalog)).
//!
//! ## Example
//!
//! ```rust
//! use pcgen::phenotype::Phenotype;
//! use pcgen::rng::RandomNumberGenerator;
//!
//! #[derive(Clone, Debug)]
//! struct Pick {
//!     genes: [usize; 2],
//!     fitness: f64,
//! }
//!
//! impl Phenotype for Pick {
//!     type Pool = Vec<usize>;
//!
//!     fn random(pool: &Self::Pool, rng: &mut RandomNumberGenerator) -> Self {
//!         let a = *rng.choose(pool).unwrap();
//!         let b = *rng.choose(pool).unwrap();
//!         Pick { genes: [a, b], fitness: 0.0 }
//!     }
//!
//!     fn crossover(&self, other: &Self) -> (Self, Self) {
//!         (
//!             Pick { genes: [self.genes[0], other.genes[1]], fitness: 0.0 },
//!             Pick { genes: [other.genes[0], self.genes[1]], fitness: 0.0 },
//!         )
//!     }
//!
//!     fn mutate(&self, pool: &Self::Pool, rate: f64, rng: &mut RandomNumberGenerator) -> Self {
//!         let mut genes = self.genes;
//!         for gene in genes.iter_mut() {
//!             if rng.chance(rate) {
//!                 *gene = *rng.choose(pool).unwrap();
//!             }
//!         }
//!         Pick { genes, fitness: 0.0 }
//!     }
//!
//!     fn fitness(&self) -> f64 {
//!         self.fitness
//!     }
//!
//!     fn set_fitness(&mut self, fitness: f64) {
//!         self.fitness = fitness;
//!     }
//! }
//!
//! let pool = vec![1, 2, 3];
//! let mut rng = RandomNumberGenerator::from_seed(5);
//! let a = Pick::random(&pool, &mut rng);
//! let b = Pick::random(&pool, &mut rng);
//! let (c, d) = a.crossover(&b);
//! assert_eq!(c.genes, [a.genes[0], b.genes[1]]);
//! assert_eq!(d.genes, [b.genes[0], a.genes[1]]);
//! ```

use std::fmt::Debug;

use crate::rng::RandomNumberGenerator;

/// Trait for types that represent individuals in an evolutionary algorithm.
///
/// Types implementing this trait must also implement `Clone`, `Debug`, `Send`
/// and `Sync`.
pub trait Phenotype: Clone + Debug + Send + Sync {
    /// The read-only source of genes individuals are assembled from.
    type Pool;

    /// Draws a fresh individual uniformly from the pool.
    fn random(pool: &Self::Pool, rng: &mut RandomNumberGenerator) -> Self;

    /// Recombines `self` with `other`, returning two complementary children.
    fn crossover(&self, other: &Self) -> (Self, Self);

    /// Returns a copy of `self` in which every mutable gene was independently
    /// redrawn from `pool` with probability `mutation_rate`.
    fn mutate(
        &self,
        pool: &Self::Pool,
        mutation_rate: f64,
        rng: &mut RandomNumberGenerator,
    ) -> Self;

    /// The last fitness written to this individual, `0.0` until scored.
    fn fitness(&self) -> f64;

    fn set_fitness(&mut self, fitness: f64);
}
