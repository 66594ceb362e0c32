//! # pcgen
//!
//! Searches a catalog of PC components for the build that best fits a price
//! band and a usage profile, using a generational genetic algorithm with
//! elitist truncation.
//!
//! ```rust
//! use pcgen::catalog::Catalog;
//! use pcgen::evolution::EvolutionOptions;
//! use pcgen::preferences::{Usage, UserPreferences};
//! use pcgen::rng::RandomNumberGenerator;
//!
//! let catalog = Catalog::builtin();
//! let options = EvolutionOptions::builder()
//!     .population_size(20)
//!     .num_generations(30)
//!     .crossover_rate(0.8)
//!     .mutation_rate(0.1)
//!     .build();
//! let preferences = UserPreferences::new(10_000.0, 15_000.0, Usage::Gaming);
//! let mut rng = RandomNumberGenerator::from_seed(42);
//!
//! let result = pcgen::run(&options, preferences, &catalog, &mut rng).unwrap();
//! assert_eq!(result.stats.len(), 30);
//! println!("{}", result.pheno);
//! ```

pub mod build;
pub mod catalog;
pub mod error;
pub mod evolution;
pub mod fitness;
pub mod phenotype;
pub mod population;
pub mod preferences;
pub mod rng;
pub mod strategy;

// Re-export commonly used types for convenience
pub use build::Build;
pub use catalog::Catalog;
pub use error::{GeneticError, OptionExt, Result, ResultExt};
pub use evolution::{EvolutionOptions, EvolutionResult, GenerationStats, LogLevel};
pub use fitness::FitnessEvaluator;
pub use preferences::{Usage, UserPreferences};

use evolution::EvolutionLauncher;
use rng::RandomNumberGenerator;
use strategy::PairwiseStrategy;

/// Evolves a build for `preferences` from `catalog`.
///
/// Returns the best build found, scored at selection time, together with the
/// best, average and worst fitness of every generation.
///
/// # Errors
///
/// Fails with `GeneticError::Configuration` when `options` do not validate.
pub fn run(
    options: &EvolutionOptions,
    preferences: UserPreferences,
    catalog: &Catalog,
    rng: &mut RandomNumberGenerator,
) -> Result<EvolutionResult<Build>> {
    let launcher: EvolutionLauncher<Build, PairwiseStrategy, FitnessEvaluator> =
        EvolutionLauncher::builder()
            .with_breed_strategy(PairwiseStrategy)
            .with_challenge(FitnessEvaluator::new(preferences))
            .build()?;
    launcher.evolve(options, catalog, rng)
}
