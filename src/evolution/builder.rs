use std::marker::PhantomData;

use crate::{
    error::{GeneticError, Result},
    phenotype::Phenotype,
    strategy::BreedStrategy,
};

use super::{Challenge, EvolutionLauncher};

pub struct EvolutionLauncherBuilder<P, B, C>
where
    P: Phenotype,
    B: BreedStrategy<P>,
    C: Challenge<P>,
{
    breed_strategy: Option<B>,
    challenge: Option<C>,
    _marker: PhantomData<P>,
}

impl<P, B, C> EvolutionLauncherBuilder<P, B, C>
where
    P: Phenotype,
    B: BreedStrategy<P>,
    C: Challenge<P>,
{
    pub fn new() -> Self {
        Self {
            breed_strategy: None,
            challenge: None,
            _marker: PhantomData,
        }
    }

    pub fn with_breed_strategy(mut self, breed_strategy: B) -> Self {
        self.breed_strategy = Some(breed_strategy);
        self
    }

    pub fn with_challenge(mut self, challenge: C) -> Self {
        self.challenge = Some(challenge);
        self
    }

    pub fn build(self) -> Result<EvolutionLauncher<P, B, C>> {
        let breed_strategy = self.breed_strategy.ok_or_else(|| {
            GeneticError::Configuration("Breeding strategy not specified".to_string())
        })?;

        let challenge = self
            .challenge
            .ok_or_else(|| GeneticError::Configuration("Challenge not specified".to_string()))?;

        Ok(EvolutionLauncher::new(breed_strategy, challenge))
    }
}

impl<P, B, C> Default for EvolutionLauncherBuilder<P, B, C>
where
    P: Phenotype,
    B: BreedStrategy<P>,
    C: Challenge<P>,
{
    fn default() -> Self {
        Self::new()
    }
}
