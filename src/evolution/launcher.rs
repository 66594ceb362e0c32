use std::marker::PhantomData;

use super::{
    builder::EvolutionLauncherBuilder,
    challenge::Challenge,
    options::{EvolutionOptions, LogLevel},
    stats::GenerationStats,
};
use crate::{
    error::{GeneticError, OptionExt, Result},
    phenotype::Phenotype,
    population::Population,
    rng::RandomNumberGenerator,
    strategy::BreedStrategy,
};

/// The outcome of a run: the best individual, its freshly computed score and
/// the per-generation fitness statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionResult<Pheno: Phenotype> {
    /// The evolved phenotype.
    pub pheno: Pheno,
    /// The fitness score of the phenotype.
    pub score: f64,
    /// One entry per completed generation.
    pub stats: Vec<GenerationStats>,
    /// The final population, highest stored fitness first.
    pub population: Vec<Pheno>,
}

impl<Pheno: Phenotype> EvolutionResult<Pheno> {
    pub fn best_series(&self) -> Vec<f64> {
        self.stats.iter().map(|s| s.best_fitness).collect()
    }

    pub fn avg_series(&self) -> Vec<f64> {
        self.stats.iter().map(|s| s.avg_fitness).collect()
    }

    pub fn worst_series(&self) -> Vec<f64> {
        self.stats.iter().map(|s| s.worst_fitness).collect()
    }
}

/// Manages the evolution process using a specified breeding strategy and challenge.
#[derive(Debug, Clone)]
pub struct EvolutionLauncher<Pheno, Strategy, Chall>
where
    Pheno: Phenotype,
    Chall: Challenge<Pheno>,
    Strategy: BreedStrategy<Pheno>,
{
    strategy: Strategy,
    challenge: Chall,
    _marker: PhantomData<Pheno>,
}

impl<Pheno, Strategy, Chall> EvolutionLauncher<Pheno, Strategy, Chall>
where
    Pheno: Phenotype,
    Chall: Challenge<Pheno>,
    Strategy: BreedStrategy<Pheno>,
{
    /// Creates a new `EvolutionLauncher` instance with the specified breeding strategy and challenge.
    pub fn new(strategy: Strategy, challenge: Chall) -> Self {
        Self {
            strategy,
            challenge,
            _marker: PhantomData,
        }
    }

    pub fn builder() -> EvolutionLauncherBuilder<Pheno, Strategy, Chall> {
        EvolutionLauncherBuilder::new()
    }

    pub fn challenge(&self) -> &Chall {
        &self.challenge
    }

    /// Runs the search from a randomly drawn population.
    ///
    /// `options.get_population_size()` individuals are drawn from `pool` and
    /// scored. Each generation then breeds offspring from the population in
    /// its current order, scores them, merges them with their parents,
    /// records statistics and prunes back to the population size. Finally the
    /// survivors are re-scored and the best one is returned.
    ///
    /// # Errors
    ///
    /// This method will return an error if:
    /// - The options fail validation
    /// - The breeding strategy fails
    pub fn evolve(
        &self,
        options: &EvolutionOptions,
        pool: &Pheno::Pool,
        rng: &mut RandomNumberGenerator,
    ) -> Result<EvolutionResult<Pheno>> {
        options.validate()?;

        let population_size = options.get_population_size();
        let num_generations = options.get_num_generations();
        let span = tracing::debug_span!("evolve", population_size, num_generations);
        let _guard = span.enter();

        let mut population = Population::from_vec(
            (0..population_size)
                .map(|_| self.scored(Pheno::random(pool, rng)))
                .collect(),
        );
        let mut stats = Vec::with_capacity(num_generations);

        for generation in 0..num_generations {
            let children = self
                .strategy
                .breed(population.as_slice(), pool, options, rng)
                .map_err(|e| {
                    GeneticError::Breeding(format!(
                        "Failed to breed candidates in generation {}: {}",
                        generation, e
                    ))
                })?;
            let num_children = children.len();

            population.extend(children.into_iter().map(|child| self.scored(child)));

            let generation_stats = population
                .stats(generation)
                .ok_or_else_genetic(|| GeneticError::EmptyPopulation)?;

            population.prune(population_size);

            self.log_generation(
                options.get_log_level(),
                &generation_stats,
                num_children,
                &population,
            );
            stats.push(generation_stats);
        }

        let (best, score) = population
            .best_by(|member| self.challenge.score(member))
            .ok_or_else_genetic(|| {
                GeneticError::Evolution(
                    "Evolution completed but no viable candidates were produced".to_string(),
                )
            })?;

        let mut pheno = best.clone();
        pheno.set_fitness(score);
        population.sort_by_fitness();

        if *options.get_log_level() != LogLevel::None {
            tracing::info!(score, "Evolution finished");
        }

        Ok(EvolutionResult {
            pheno,
            score,
            stats,
            population: population.into_vec(),
        })
    }

    fn scored(&self, mut pheno: Pheno) -> Pheno {
        let score = self.challenge.score(&pheno);
        pheno.set_fitness(score);
        pheno
    }

    fn log_generation(
        &self,
        log_level: &LogLevel,
        stats: &GenerationStats,
        num_children: usize,
        survivors: &Population<Pheno>,
    ) {
        match log_level {
            LogLevel::None => {}
            LogLevel::Minimal => log_stats(stats, num_children),
            LogLevel::Verbose => {
                log_stats(stats, num_children);
                survivors.iter().for_each(|pheno| {
                    tracing::debug!(
                        generation = stats.generation,
                        fitness = pheno.fitness(),
                        phenotype = ?pheno,
                        "Survivor"
                    );
                });
            }
        }
    }
}

fn log_stats(stats: &GenerationStats, num_children: usize) {
    tracing::info!(
        generation = stats.generation,
        best = stats.best_fitness,
        avg = stats.avg_fitness,
        worst = stats.worst_fitness,
        children = num_children,
        "Generation complete"
    );
}
