//! # Population
//!
//! An ordered collection of scored individuals. After every pruning step it
//! is sorted by descending fitness and holds exactly the configured number
//! of individuals; between breeding and pruning it may temporarily hold
//! parents and offspring together.

use std::cmp::Ordering;

use crate::evolution::stats::GenerationStats;
use crate::phenotype::Phenotype;

#[derive(Debug, Clone)]
pub struct Population<P: Phenotype> {
    members: Vec<P>,
}

impl<P: Phenotype> Population<P> {
    pub fn from_vec(members: Vec<P>) -> Self {
        Self { members }
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, P> {
        self.members.iter()
    }

    pub fn as_slice(&self) -> &[P] {
        &self.members
    }

    pub fn extend<I: IntoIterator<Item = P>>(&mut self, members: I) {
        self.members.extend(members);
    }

    /// Stable sort, highest fitness first; NaN sorts last.
    pub fn sort_by_fitness(&mut self) {
        self.members
            .sort_by(|a, b| descending(a.fitness(), b.fitness()));
    }

    pub fn truncate(&mut self, size: usize) {
        self.members.truncate(size);
    }

    /// Sorts by fitness and keeps the best `size` members.
    pub fn prune(&mut self, size: usize) {
        self.sort_by_fitness();
        self.truncate(size);
    }

    /// Fitness summary of the current members, `None` if empty.
    pub fn stats(&self, generation: usize) -> Option<GenerationStats> {
        let fitness: Vec<f64> = self.members.iter().map(Phenotype::fitness).collect();
        GenerationStats::from_fitness(generation, &fitness)
    }

    /// The member maximizing `score`, together with that score.
    pub fn best_by<F>(&self, mut score: F) -> Option<(&P, f64)>
    where
        F: FnMut(&P) -> f64,
    {
        self.members
            .iter()
            .map(|member| (member, score(member)))
            .min_by(|a, b| descending(a.1, b.1))
    }

    pub fn into_vec(self) -> Vec<P> {
        self.members
    }
}

impl<'a, P: Phenotype> IntoIterator for &'a Population<P> {
    type Item = &'a P;
    type IntoIter = std::slice::Iter<'a, P>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}

// Orders higher scores first, NaN after every number.
fn descending(a: f64, b: f64) -> Ordering {
    b.partial_cmp(&a).unwrap_or_else(|| {
        if a.is_nan() && b.is_nan() {
            Ordering::Equal
        } else if a.is_nan() {
            Ordering::Greater
        } else {
            Ordering::Less
        }
    })
}
