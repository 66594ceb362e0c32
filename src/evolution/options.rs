//! # EvolutionOptions
//!
//! The `EvolutionOptions` struct represents the configuration of a build
//! search: how many generations to run, how many builds survive each
//! generation, and the crossover and mutation probabilities.
//!
//! ## Example
//!
//! ```rust
//! use pcgen::evolution::options::{EvolutionOptions, LogLevel};
//!
//! // Create a new EvolutionOptions instance with custom parameters
//! let custom_options = EvolutionOptions::new(200, LogLevel::Minimal, 50, 0.8, 0.05);
//! assert!(custom_options.validate().is_ok());
//!
//! // The defaults: 100 generations of 4 builds, crossover 0.5, mutation 0.01
//! let default_options = EvolutionOptions::default();
//! assert_eq!(default_options.get_population_size(), 4);
//! ```
//!
//! ## Fields
//!
//! - `num_generations`: The number of breed/prune rounds to run.
//! - `log_level`: How much the loop reports through `tracing`.
//! - `population_size`: The number of builds kept after every pruning step.
//! - `crossover_rate`: Probability that an adjacent pair produces children.
//! - `mutation_rate`: Per-slot probability that a child's part is redrawn.

use crate::error::{GeneticError, Result};

/// How much the evolution loop reports.
///
/// - `Verbose`: one event per generation plus one per surviving build.
/// - `Minimal`: one event per generation.
/// - `None`: silent.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Verbose,
    Minimal,
    None,
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionOptions {
    num_generations: usize,
    log_level: LogLevel,
    population_size: usize,
    crossover_rate: f64,
    mutation_rate: f64,
}

impl EvolutionOptions {
    pub fn new(
        num_generations: usize,
        log_level: LogLevel,
        population_size: usize,
        crossover_rate: f64,
        mutation_rate: f64,
    ) -> Self {
        Self {
            num_generations,
            log_level,
            population_size,
            crossover_rate,
            mutation_rate,
        }
    }

    pub fn get_num_generations(&self) -> usize {
        self.num_generations
    }

    pub fn get_log_level(&self) -> &LogLevel {
        &self.log_level
    }

    pub fn get_population_size(&self) -> usize {
        self.population_size
    }

    pub fn get_crossover_rate(&self) -> f64 {
        self.crossover_rate
    }

    pub fn get_mutation_rate(&self) -> f64 {
        self.mutation_rate
    }

    /// Sets the number of generations.
    pub fn set_num_generations(&mut self, num_generations: usize) {
        self.num_generations = num_generations;
    }

    /// Sets the log level.
    pub fn set_log_level(&mut self, log_level: LogLevel) {
        self.log_level = log_level;
    }

    /// Sets the population size.
    pub fn set_population_size(&mut self, population_size: usize) {
        self.population_size = population_size;
    }

    pub fn set_crossover_rate(&mut self, crossover_rate: f64) {
        self.crossover_rate = crossover_rate;
    }

    pub fn set_mutation_rate(&mut self, mutation_rate: f64) {
        self.mutation_rate = mutation_rate;
    }

    /// Checks the options before a run.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` if the population size is zero or
    /// either rate is not a finite number in `[0, 1]`.
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(GeneticError::Configuration(
                "Population size cannot be zero".to_string(),
            ));
        }
        check_rate("Crossover rate", self.crossover_rate)?;
        check_rate("Mutation rate", self.mutation_rate)
    }

    /// Returns a builder for creating an `EvolutionOptions` instance.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pcgen::evolution::options::{EvolutionOptions, LogLevel};
    ///
    /// let options = EvolutionOptions::builder()
    ///     .num_generations(200)
    ///     .log_level(LogLevel::Minimal)
    ///     .population_size(50)
    ///     .crossover_rate(0.9)
    ///     .build();
    ///
    /// assert_eq!(options.get_mutation_rate(), 0.01);
    /// ```
    pub fn builder() -> EvolutionOptionsBuilder {
        EvolutionOptionsBuilder::default()
    }
}

fn check_rate(name: &str, rate: f64) -> Result<()> {
    if rate.is_finite() && (0.0..=1.0).contains(&rate) {
        Ok(())
    } else {
        Err(GeneticError::Configuration(format!(
            "{} must be within [0, 1], got {}",
            name, rate
        )))
    }
}

impl Default for EvolutionOptions {
    fn default() -> Self {
        Self {
            num_generations: 100,
            log_level: LogLevel::None,
            population_size: 4,
            crossover_rate: 0.5,
            mutation_rate: 0.01,
        }
    }
}

/// Builder for `EvolutionOptions`.
///
/// Unset fields fall back to the `Default` values.
#[derive(Debug, Clone, Default)]
pub struct EvolutionOptionsBuilder {
    num_generations: Option<usize>,
    log_level: Option<LogLevel>,
    population_size: Option<usize>,
    crossover_rate: Option<f64>,
    mutation_rate: Option<f64>,
}

impl EvolutionOptionsBuilder {
    /// Sets the number of generations.
    pub fn num_generations(mut self, value: usize) -> Self {
        self.num_generations = Some(value);
        self
    }

    /// Sets the log level.
    pub fn log_level(mut self, value: LogLevel) -> Self {
        self.log_level = Some(value);
        self
    }

    /// Sets the population size.
    pub fn population_size(mut self, value: usize) -> Self {
        self.population_size = Some(value);
        self
    }

    pub fn crossover_rate(mut self, value: f64) -> Self {
        self.crossover_rate = Some(value);
        self
    }

    pub fn mutation_rate(mut self, value: f64) -> Self {
        self.mutation_rate = Some(value);
        self
    }

    /// Builds the `EvolutionOptions` instance.
    pub fn build(self) -> EvolutionOptions {
        let default = EvolutionOptions::default();
        EvolutionOptions {
            num_generations: self.num_generations.unwrap_or(default.num_generations),
            log_level: self.log_level.unwrap_or(default.log_level),
            population_size: self.population_size.unwrap_or(default.population_size),
            crossover_rate: self.crossover_rate.unwrap_or(default.crossover_rate),
            mutation_rate: self.mutation_rate.unwrap_or(default.mutation_rate),
        }
    }
}
