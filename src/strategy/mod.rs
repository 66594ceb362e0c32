//! # BreedStrategy
//!
//! The `BreedStrategy` trait defines the interface for strategies responsible for breeding
//! new individuals (phenotypes) from the current population.
pub mod pairwise;

use std::fmt::Debug;

use crate::{
    error::Result, evolution::options::EvolutionOptions, phenotype::Phenotype,
    rng::RandomNumberGenerator,
};

/// # BreedStrategy
///
/// Produces the offspring of one generation. Parents are left untouched; the
/// returned children are unscored.
pub trait BreedStrategy<Pheno: Phenotype>
where
    Self: Debug + Clone + Send + Sync,
{
    /// Breeds new individuals from `parents`.
    ///
    /// ## Parameters
    ///
    /// - `parents`: The current population, in its current order.
    /// - `pool`: The gene pool mutation draws replacements from.
    /// - `evol_options`: Supplies the crossover and mutation rates.
    /// - `rng`: The run's random number generator.
    ///
    /// ## Returns
    ///
    /// The children of this generation, possibly none.
    fn breed(
        &self,
        parents: &[Pheno],
        pool: &Pheno::Pool,
        evol_options: &EvolutionOptions,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Pheno>>;
}

pub use pairwise::PairwiseStrategy;
