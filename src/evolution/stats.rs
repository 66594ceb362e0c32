/// Fitness summary of one generation, taken after the offspring were merged
/// into the population and before it was pruned.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationStats {
    /// Zero-based generation index
    pub generation: usize,
    pub best_fitness: f64,
    /// Arithmetic mean over the merged population
    pub avg_fitness: f64,
    pub worst_fitness: f64,
    /// Parents plus offspring
    pub population_len: usize,
}

impl GenerationStats {
    /// Summarizes `fitness`, or `None` when it is empty.
    pub fn from_fitness(generation: usize, fitness: &[f64]) -> Option<Self> {
        if fitness.is_empty() {
            return None;
        }

        let best_fitness = fitness.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let worst_fitness = fitness.iter().copied().fold(f64::INFINITY, f64::min);
        let avg_fitness = fitness.iter().sum::<f64>() / fitness.len() as f64;

        Some(Self {
            generation,
            best_fitness,
            avg_fitness,
            worst_fitness,
            population_len: fitness.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_fitness() {
        let stats = GenerationStats::from_fitness(3, &[10.0, 40.0, 25.0, 5.0]).unwrap();
        assert_eq!(stats.generation, 3);
        assert_eq!(stats.best_fitness, 40.0);
        assert_eq!(stats.worst_fitness, 5.0);
        assert_eq!(stats.avg_fitness, 20.0);
        assert_eq!(stats.population_len, 4);
    }

    #[test]
    fn test_from_empty() {
        assert!(GenerationStats::from_fitness(0, &[]).is_none());
    }
}
