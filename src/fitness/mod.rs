//! # Fitness Evaluator
//!
//! Scores a [`Build`] against [`UserPreferences`]. The score is additive:
//!
//! | term          | points                                                         |
//! |---------------|----------------------------------------------------------------|
//! | price         | 30 when the price lies in the preferred band                   |
//! | compatibility | 30 when the board accepts both CPU and RAM                     |
//! | usage         | 30 when the usage profile's requirements hold                  |
//! | psu           | 10 when the PSU covers the draw with at most 50W to spare      |
//! | bottleneck    | 10 when the CPU does not outclass the GPU by more than 20      |
//! | cpu value     | `performance / price * 100`                                    |
//! | gpu value     | `power / price * 650`, zero without a priced discrete GPU      |
//!
//! Scoring is pure and never fails.
//!
//! ```rust
//! use pcgen::build::Build;
//! use pcgen::catalog::Catalog;
//! use pcgen::evolution::Challenge;
//! use pcgen::fitness::FitnessEvaluator;
//! use pcgen::phenotype::Phenotype;
//! use pcgen::preferences::{Usage, UserPreferences};
//! use pcgen::rng::RandomNumberGenerator;
//!
//! let catalog = Catalog::builtin();
//! let mut rng = RandomNumberGenerator::from_seed(1);
//! let build = Build::random(&catalog, &mut rng);
//!
//! let evaluator = FitnessEvaluator::new(UserPreferences::new(10_000.0, 15_000.0, Usage::Gaming));
//! let breakdown = evaluator.breakdown(&build);
//! assert_eq!(evaluator.score(&build), breakdown.total());
//! ```

mod usage;

use crate::build::Build;
use crate::evolution::Challenge;
use crate::preferences::UserPreferences;

pub use usage::{fits_usage, usage_score};

/// Points awarded by each of the three main criteria.
pub const CRITERION_POINTS: f64 = 30.0;

/// Points awarded by the PSU and bottleneck checks.
pub const BONUS_POINTS: f64 = 10.0;

/// Each scoring term for one build.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FitnessBreakdown {
    pub price: f64,
    pub compatibility: f64,
    pub usage: f64,
    pub psu: f64,
    pub bottleneck: f64,
    pub cpu_value: f64,
    pub gpu_value: f64,
}

impl FitnessBreakdown {
    pub fn total(&self) -> f64 {
        self.price
            + self.compatibility
            + self.usage
            + self.psu
            + self.bottleneck
            + self.cpu_value
            + self.gpu_value
    }
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct FitnessEvaluator {
    preferences: UserPreferences,
}

impl FitnessEvaluator {
    pub fn new(preferences: UserPreferences) -> Self {
        Self { preferences }
    }

    pub fn preferences(&self) -> &UserPreferences {
        &self.preferences
    }

    pub fn breakdown(&self, build: &Build) -> FitnessBreakdown {
        FitnessBreakdown {
            price: award(self.preferences.contains_price(build.price()), CRITERION_POINTS),
            compatibility: award(build.are_components_compatible(), CRITERION_POINTS),
            usage: usage_score(self.preferences.usage, build),
            psu: award(build.is_psu_capacity_enough(), BONUS_POINTS),
            bottleneck: award(build.is_bottleneck(), BONUS_POINTS),
            cpu_value: build.cpu_value_points(),
            gpu_value: build.gpu_value_points(),
        }
    }
}

impl Challenge<Build> for FitnessEvaluator {
    fn score(&self, build: &Build) -> f64 {
        self.breakdown(build).total()
    }
}

fn award(condition: bool, points: f64) -> f64 {
    if condition {
        points
    } else {
        0.0
    }
}
