//! # Build
//!
//! A `Build` is one complete machine: exactly one part from each catalog
//! category, with the discrete GPU optional. Its price is summed once on
//! construction. A build is never edited in place; crossover and mutation
//! produce new builds, so the stored price always matches the parts.

use std::fmt;
use std::sync::Arc;

use crate::catalog::{Catalog, Cpu, Gpu, Motherboard, Psu, Ram, Storage};
use crate::phenotype::Phenotype;
use crate::rng::RandomNumberGenerator;

/// Watts added on top of the summed component draw when sizing the PSU.
pub const POWER_MARGIN_WATTS: i64 = 50;

/// Largest PSU surplus over the required draw still considered a good fit.
pub const MAX_PSU_HEADROOM_WATTS: i64 = 50;

/// Largest CPU performance lead over the GPU power that counts as balanced.
pub const BOTTLENECK_TOLERANCE: i64 = 20;

#[derive(Debug, Clone, PartialEq)]
pub struct Build {
    cpu: Arc<Cpu>,
    gpu: Option<Arc<Gpu>>,
    ram: Arc<Ram>,
    storage: Arc<Storage>,
    motherboard: Arc<Motherboard>,
    psu: Arc<Psu>,
    price: f64,
    fitness: f64,
}

impl Build {
    pub fn new(
        cpu: Arc<Cpu>,
        gpu: Option<Arc<Gpu>>,
        ram: Arc<Ram>,
        storage: Arc<Storage>,
        motherboard: Arc<Motherboard>,
        psu: Arc<Psu>,
    ) -> Self {
        let price = cpu.price
            + gpu.as_ref().map_or(0.0, |gpu| gpu.price)
            + ram.price
            + storage.price
            + motherboard.price
            + psu.price;

        Self {
            cpu,
            gpu,
            ram,
            storage,
            motherboard,
            psu,
            price,
            fitness: 0.0,
        }
    }

    pub fn cpu(&self) -> &Cpu {
        &self.cpu
    }

    /// The discrete GPU, `None` when the build relies on integrated graphics.
    pub fn gpu(&self) -> Option<&Gpu> {
        self.gpu.as_deref()
    }

    pub fn ram(&self) -> &Ram {
        &self.ram
    }

    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    pub fn motherboard(&self) -> &Motherboard {
        &self.motherboard
    }

    pub fn psu(&self) -> &Psu {
        &self.psu
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    /// Whether both builds are made of equal parts, ignoring fitness.
    pub fn same_parts(&self, other: &Build) -> bool {
        self.cpu == other.cpu
            && self.gpu == other.gpu
            && self.ram == other.ram
            && self.storage == other.storage
            && self.motherboard == other.motherboard
            && self.psu == other.psu
    }

    /// Power the PSU has to deliver: CPU, GPU and motherboard draw plus the
    /// fixed safety margin.
    pub fn power_draw(&self) -> i64 {
        i64::from(self.cpu.power_consumption)
            + self
                .gpu
                .as_ref()
                .map_or(0, |gpu| i64::from(gpu.power_consumption))
            + i64::from(self.motherboard.power_consumption)
            + POWER_MARGIN_WATTS
    }

    /// The PSU covers the draw with a surplus of at most
    /// [`MAX_PSU_HEADROOM_WATTS`].
    pub fn is_psu_capacity_enough(&self) -> bool {
        let needed = self.power_draw();
        let capacity = i64::from(self.psu.capacity);
        needed < capacity && capacity - needed <= MAX_PSU_HEADROOM_WATTS
    }

    /// `cpu.performance - gpu.power <= 20`, with a missing GPU counting as 0.
    ///
    /// Despite the name this holds when the pairing is balanced; the scorer
    /// rewards it.
    pub fn is_bottleneck(&self) -> bool {
        let gpu_power = self.gpu.as_ref().map_or(0, |gpu| i64::from(gpu.power));
        i64::from(self.cpu.performance) - gpu_power <= BOTTLENECK_TOLERANCE
    }

    pub fn are_components_compatible(&self) -> bool {
        self.motherboard.is_cpu_compatible(&self.cpu)
            && self.motherboard.is_ram_compatible(&self.ram)
    }

    /// Performance per unit of CPU price, scaled by 100.
    pub fn cpu_value_points(&self) -> f64 {
        if self.cpu.price > 0.0 {
            f64::from(self.cpu.performance) / self.cpu.price * 100.0
        } else {
            0.0
        }
    }

    /// GPU power per unit of GPU price, scaled by 650; zero without a priced GPU.
    pub fn gpu_value_points(&self) -> f64 {
        match &self.gpu {
            Some(gpu) if gpu.price > 0.0 => f64::from(gpu.power) / gpu.price * 650.0,
            _ => 0.0,
        }
    }
}

impl Phenotype for Build {
    type Pool = Catalog;

    fn random(catalog: &Catalog, rng: &mut RandomNumberGenerator) -> Self {
        Build::new(
            pick(catalog.cpus(), rng),
            Some(pick(catalog.gpus(), rng)),
            pick(catalog.rams(), rng),
            pick(catalog.storages(), rng),
            pick(catalog.motherboards(), rng),
            pick(catalog.psus(), rng),
        )
    }

    /// The first child keeps this build's CPU, RAM and motherboard and takes
    /// GPU, storage and PSU from `other`; the second child is the complement.
    fn crossover(&self, other: &Self) -> (Self, Self) {
        let first = Build::new(
            Arc::clone(&self.cpu),
            other.gpu.clone(),
            Arc::clone(&self.ram),
            Arc::clone(&other.storage),
            Arc::clone(&self.motherboard),
            Arc::clone(&other.psu),
        );
        let second = Build::new(
            Arc::clone(&other.cpu),
            self.gpu.clone(),
            Arc::clone(&other.ram),
            Arc::clone(&self.storage),
            Arc::clone(&other.motherboard),
            Arc::clone(&self.psu),
        );
        (first, second)
    }

    /// The PSU is never mutated. A GPU redraw may land on "no GPU".
    fn mutate(
        &self,
        catalog: &Catalog,
        mutation_rate: f64,
        rng: &mut RandomNumberGenerator,
    ) -> Self {
        let cpu = if rng.chance(mutation_rate) {
            pick(catalog.cpus(), rng)
        } else {
            Arc::clone(&self.cpu)
        };

        let gpu = if rng.chance(mutation_rate) {
            let gpus = catalog.gpus();
            let idx = rng.index(gpus.len() + 1);
            gpus.get(idx).cloned()
        } else {
            self.gpu.clone()
        };

        let ram = if rng.chance(mutation_rate) {
            pick(catalog.rams(), rng)
        } else {
            Arc::clone(&self.ram)
        };

        let storage = if rng.chance(mutation_rate) {
            pick(catalog.storages(), rng)
        } else {
            Arc::clone(&self.storage)
        };

        let motherboard = if rng.chance(mutation_rate) {
            pick(catalog.motherboards(), rng)
        } else {
            Arc::clone(&self.motherboard)
        };

        Build::new(cpu, gpu, ram, storage, motherboard, Arc::clone(&self.psu))
    }

    fn fitness(&self) -> f64 {
        self.fitness
    }

    fn set_fitness(&mut self, fitness: f64) {
        self.fitness = fitness;
    }
}

// Catalog categories are non-empty by construction.
fn pick<T>(parts: &[Arc<T>], rng: &mut RandomNumberGenerator) -> Arc<T> {
    Arc::clone(&parts[rng.index(parts.len())])
}

impl fmt::Display for Build {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Computer Configuration:")?;
        writeln!(f, "{}", self.cpu)?;
        match &self.gpu {
            Some(gpu) => writeln!(f, "{}", gpu)?,
            None => writeln!(f, "GPU: integrated graphics only")?,
        }
        writeln!(f, "{}", self.ram)?;
        writeln!(f, "{}", self.storage)?;
        writeln!(f, "{}", self.motherboard)?;
        writeln!(f, "{}", self.psu)?;
        write!(f, "Total Price: ${:.2}", self.price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{MemoryType, StorageKind};

    fn parts(tag: &str, price: f64) -> Build {
        Build::new(
            Arc::new(Cpu::new("Intel", format!("cpu-{}", tag), 60, price, 65)),
            Some(Arc::new(Gpu::new("NVIDIA", format!("gpu-{}", tag), price, 170, 55))),
            Arc::new(Ram::new("Corsair", format!("ram-{}", tag), 16, 3200, MemoryType::Ddr4, price)),
            Arc::new(Storage::new("Crucial", format!("ssd-{}", tag), StorageKind::Ssd, 1000, price)),
            Arc::new(Motherboard::new(
                "MSI",
                format!("mb-{}", tag),
                price,
                35,
                64,
                3200,
                MemoryType::Ddr4,
                [format!("cpu-{}", tag)],
            )),
            Arc::new(Psu::new("Corsair", format!("psu-{}", tag), 550, price)),
        )
    }

    #[test]
    fn test_price_is_sum_of_parts() {
        let build = parts("a", 100.0);
        assert_eq!(build.price(), 600.0);
        assert_eq!(build.fitness(), 0.0);
    }

    #[test]
    fn test_price_without_gpu() {
        let b = parts("a", 100.0);
        let build = Build::new(
            b.cpu.clone(),
            None,
            b.ram.clone(),
            b.storage.clone(),
            b.motherboard.clone(),
            b.psu.clone(),
        );
        assert_eq!(build.price(), 500.0);
        assert!(build.gpu().is_none());
    }

    #[test]
    fn test_crossover_swaps_gpu_storage_psu() {
        let p1 = parts("A", 100.0);
        let p2 = parts("a", 10.0);
        let (c1, c2) = p1.crossover(&p2);

        assert_eq!(c1.cpu().model, "cpu-A");
        assert_eq!(c1.gpu().unwrap().model, "gpu-a");
        assert_eq!(c1.ram().model, "ram-A");
        assert_eq!(c1.storage().model, "ssd-a");
        assert_eq!(c1.motherboard().model, "mb-A");
        assert_eq!(c1.psu().model, "psu-a");

        assert_eq!(c2.cpu().model, "cpu-a");
        assert_eq!(c2.gpu().unwrap().model, "gpu-A");
        assert_eq!(c2.ram().model, "ram-a");
        assert_eq!(c2.storage().model, "ssd-A");
        assert_eq!(c2.motherboard().model, "mb-a");
        assert_eq!(c2.psu().model, "psu-A");

        assert_eq!(c1.price(), 300.0 + 30.0);
        assert_eq!(c2.price(), 30.0 + 300.0);
    }

    #[test]
    fn test_psu_headroom_window() {
        // draw = 65 + 170 + 35 + 50 = 320
        let b = parts("a", 1.0);
        assert_eq!(b.power_draw(), 320);

        let with_psu = |capacity: u32| {
            Build::new(
                b.cpu.clone(),
                b.gpu.clone(),
                b.ram.clone(),
                b.storage.clone(),
                b.motherboard.clone(),
                Arc::new(Psu::new("X", "Y", capacity, 1.0)),
            )
        };

        assert!(!with_psu(320).is_psu_capacity_enough());
        assert!(with_psu(321).is_psu_capacity_enough());
        assert!(with_psu(370).is_psu_capacity_enough());
        assert!(!with_psu(371).is_psu_capacity_enough());
    }

    #[test]
    fn test_bottleneck_without_gpu_uses_zero() {
        let b = parts("a", 1.0);
        assert!(b.is_bottleneck()); // 60 - 55 = 5

        let no_gpu = Build::new(
            b.cpu.clone(),
            None,
            b.ram.clone(),
            b.storage.clone(),
            b.motherboard.clone(),
            b.psu.clone(),
        );
        assert!(!no_gpu.is_bottleneck()); // 60 - 0 = 60
        assert_eq!(no_gpu.power_draw(), 65 + 35 + 50);
        assert_eq!(no_gpu.gpu_value_points(), 0.0);
    }

    #[test]
    fn test_value_points() {
        let b = parts("a", 100.0);
        assert!((b.cpu_value_points() - 60.0).abs() < 1e-9);
        assert!((b.gpu_value_points() - 55.0 / 100.0 * 650.0).abs() < 1e-9);
    }

    #[test]
    fn test_compatibility() {
        let b = parts("a", 1.0);
        assert!(b.are_components_compatible());

        let foreign = parts("b", 1.0);
        let (mixed, _) = b.crossover(&foreign);
        assert!(mixed.are_components_compatible());

        let swapped_cpu = Build::new(
            foreign.cpu.clone(),
            b.gpu.clone(),
            b.ram.clone(),
            b.storage.clone(),
            b.motherboard.clone(),
            b.psu.clone(),
        );
        assert!(!swapped_cpu.are_components_compatible());
    }

    #[test]
    fn test_full_rate_mutation_redraws_all_but_psu() {
        let catalog = Catalog::builtin();
        let mut rng = RandomNumberGenerator::from_seed(11);
        let build = parts("a", 1.0);
        for _ in 0..200 {
            let mutant = build.mutate(&catalog, 1.0, &mut rng);
            assert_eq!(mutant.psu().model, "psu-a");
            assert_ne!(mutant.cpu().model, "cpu-a");
            assert_ne!(mutant.ram().model, "ram-a");
            assert_ne!(mutant.storage().model, "ssd-a");
            assert_ne!(mutant.motherboard().model, "mb-a");
            assert!(mutant.gpu().map_or(true, |gpu| gpu.model != "gpu-a"));
        }
    }

    #[test]
    fn test_full_rate_mutation_can_drop_gpu() {
        let catalog = Catalog::builtin();
        let mut rng = RandomNumberGenerator::from_seed(14);
        let build = parts("a", 1.0);

        let mut without_gpu = 0;
        for _ in 0..1000 {
            let mutant = build.mutate(&catalog, 1.0, &mut rng);
            match mutant.gpu() {
                None => without_gpu += 1,
                Some(gpu) => assert!(catalog.gpus().iter().any(|g| **g == *gpu)),
            }

            let expected = mutant.cpu().price
                + mutant.gpu().map_or(0.0, |gpu| gpu.price)
                + mutant.ram().price
                + mutant.storage().price
                + mutant.motherboard().price
                + mutant.psu().price;
            assert!((mutant.price() - expected).abs() < 1e-9);
        }
        assert!(without_gpu > 0);
    }

    #[test]
    fn test_zero_rate_mutation_is_identity() {
        let catalog = Catalog::builtin();
        let mut rng = RandomNumberGenerator::from_seed(12);
        let build = parts("a", 1.0);
        let mutant = build.mutate(&catalog, 0.0, &mut rng);
        assert!(mutant.same_parts(&build));
        assert_eq!(mutant.price(), build.price());
    }

    #[test]
    fn test_random_draws_from_catalog() {
        let catalog = Catalog::builtin();
        let mut rng = RandomNumberGenerator::from_seed(13);
        for _ in 0..50 {
            let build = Build::random(&catalog, &mut rng);
            assert!(build.gpu().is_some());
            assert!(catalog.cpus().iter().any(|c| **c == *build.cpu()));
            assert!(catalog.psus().iter().any(|p| **p == *build.psu()));
        }
    }

    #[test]
    fn test_display_mentions_missing_gpu() {
        let b = parts("a", 1.0);
        let no_gpu = Build::new(
            b.cpu.clone(),
            None,
            b.ram.clone(),
            b.storage.clone(),
            b.motherboard.clone(),
            b.psu.clone(),
        );
        let text = no_gpu.to_string();
        assert!(text.contains("integrated graphics only"));
        assert!(text.ends_with("Total Price: $5.00"));
    }
}
