//! # Error Types
//!
//! This module defines the error type shared by the whole crate. Scoring a
//! build never fails; errors only come out of configuration validation,
//! catalog construction and loading, and parsing of usage tags.
//!
//! ## Examples
//!
//! Using the `Result` type:
//!
//! ```rust
//! use pcgen::error::{GeneticError, Result};
//! use pcgen::evolution::EvolutionOptions;
//!
//! fn checked(options: &EvolutionOptions) -> Result<()> {
//!     options.validate()
//! }
//!
//! let mut options = EvolutionOptions::default();
//! options.set_population_size(0);
//! match checked(&options) {
//!     Err(GeneticError::Configuration(msg)) => assert!(msg.contains("Population size")),
//!     _ => panic!("expected a configuration error"),
//! }
//! ```
//!
//! Using the `OptionExt` trait to convert `Option` to `Result`:
//!
//! ```rust
//! use pcgen::error::{GeneticError, OptionExt};
//!
//! fn cheapest(prices: &[u32]) -> pcgen::error::Result<u32> {
//!     prices.iter().min().cloned().ok_or_else_genetic(|| GeneticError::EmptyPopulation)
//! }
//!
//! assert_eq!(cheapest(&[300, 120, 450]).unwrap(), 120);
//! assert!(cheapest(&[]).is_err());
//! ```

use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;

use crate::catalog::PartKind;

/// Represents errors that can occur while configuring or running a build search.
#[derive(Error, Debug)]
pub enum GeneticError {
    /// An invalid engine configuration was provided.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A catalog category has no parts to draw from.
    #[error("Empty catalog error: no {0} parts available")]
    EmptyCatalog(PartKind),

    /// An operation needed at least one build in the population.
    #[error("Empty population error: Cannot operate on an empty population")]
    EmptyPopulation,

    /// Producing offspring failed.
    #[error("Breeding error: {0}")]
    Breeding(String),

    /// The generational loop failed.
    #[error("Evolution error: {0}")]
    Evolution(String),

    /// A usage tag did not name one of the known profiles.
    #[error("Unknown usage profile: {0:?}")]
    UnknownUsage(String),

    /// An I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A catalog document could not be (de)serialized.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// A generic error with a custom message.
    #[error("{0}")]
    Other(String),
}

#[cfg(feature = "serde")]
impl From<serde_json::Error> for GeneticError {
    fn from(error: serde_json::Error) -> Self {
        GeneticError::Serialization(error.to_string())
    }
}

/// A specialized Result type for build search operations.
pub type Result<T> = std::result::Result<T, GeneticError>;

/// Extension trait for Result to add context to errors.
///
/// ## Examples
///
/// ```rust
/// use pcgen::error::ResultExt;
/// use std::fs::File;
///
/// fn open_catalog(path: &str) -> pcgen::error::Result<()> {
///     File::open(path).context("Failed to open catalog")?;
///     Ok(())
/// }
///
/// assert!(open_catalog("/definitely/not/here.json").is_err());
/// ```
pub trait ResultExt<T, E> {
    /// Converts the error into a `GeneticError::Other` prefixed with `context`.
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: StdError + Send + Sync + 'static,
{
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|e| GeneticError::Other(format!("{}: {}", context, e)))
    }
}

/// Extension trait for Option to convert to Result with a custom error.
pub trait OptionExt<T> {
    /// Converts an `Option<T>` to a `Result<T, GeneticError>` using `err_fn`
    /// to build the error.
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError,
    {
        self.ok_or_else(err_fn)
    }
}
