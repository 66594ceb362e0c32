use super::BreedStrategy;
use crate::{
    error::Result, evolution::options::EvolutionOptions, phenotype::Phenotype,
    rng::RandomNumberGenerator,
};

/// # PairwiseStrategy
///
/// Pairs neighbouring parents (0 with 1, 2 with 3, ...). Each pair crosses
/// over with probability `crossover_rate` and yields two children; a pair
/// that does not cross over yields nothing. A trailing unpaired parent is
/// skipped. Every child is then mutated with `mutation_rate`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PairwiseStrategy;

impl<Pheno> BreedStrategy<Pheno> for PairwiseStrategy
where
    Pheno: Phenotype,
{
    fn breed(
        &self,
        parents: &[Pheno],
        pool: &Pheno::Pool,
        evol_options: &EvolutionOptions,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Pheno>> {
        let mut offspring = Vec::with_capacity(parents.len());

        for pair in parents.chunks_exact(2) {
            if rng.chance(evol_options.get_crossover_rate()) {
                let (first, second) = pair[0].crossover(&pair[1]);
                offspring.push(first);
                offspring.push(second);
            }
        }

        let mutation_rate = evol_options.get_mutation_rate();
        Ok(offspring
            .iter()
            .map(|child| child.mutate(pool, mutation_rate, rng))
            .collect())
    }
}
