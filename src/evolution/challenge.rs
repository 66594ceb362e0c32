use crate::phenotype::Phenotype;

/// Scores an individual. Higher is better.
///
/// Implementations must be pure: scoring the same individual twice yields the
/// same value.
pub trait Challenge<Pheno: Phenotype> {
    fn score(&self, phenotype: &Pheno) -> f64;
}
