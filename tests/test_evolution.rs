use pcgen::{
    build::Build,
    catalog::{Catalog, Cpu, Gpu, MemoryType, Motherboard, Psu, Ram, Storage, StorageKind},
    error::GeneticError,
    evolution::{Challenge, EvolutionLauncher, EvolutionOptions, LogLevel},
    fitness::FitnessEvaluator,
    phenotype::Phenotype,
    preferences::{Usage, UserPreferences},
    rng::RandomNumberGenerator,
    strategy::PairwiseStrategy,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

/// One option per category; the only build has price 15 750.
fn single_option_catalog() -> Catalog {
    Catalog::new(
        vec![Cpu::new("Intel", "i5-12600K", 70, 3_300.0, 65).with_integrated_graphics(18)],
        vec![Gpu::new("NVIDIA", "RTX 3060", 6_500.0, 170, 55)],
        vec![Ram::new("Corsair", "Vengeance LPX", 16, 3200, MemoryType::Ddr4, 850.0)],
        vec![Storage::new("Crucial", "P3", StorageKind::Ssd, 1000, 1_300.0)],
        vec![Motherboard::new(
            "MSI",
            "PRO B660M-A",
            2_900.0,
            35,
            128,
            3600,
            MemoryType::Ddr4,
            ["i5-12600K"],
        )],
        // draw = 65 + 170 + 35 + 50 = 320
        vec![Psu::new("EVGA", "350 N1", 350, 900.0)],
    )
    .unwrap()
}

#[test]
fn test_single_option_catalog_end_to_end() {
    init_tracing();
    let catalog = single_option_catalog();
    let options = EvolutionOptions::new(1, LogLevel::Verbose, 4, 1.0, 0.0);
    let preferences = UserPreferences::new(15_750.0, 15_750.0, Usage::Gaming);
    let mut rng = RandomNumberGenerator::from_seed(7);

    let result = pcgen::run(&options, preferences, &catalog, &mut rng).unwrap();

    let expected_build = Build::random(&catalog, &mut RandomNumberGenerator::from_seed(0));
    assert!(result.pheno.same_parts(&expected_build));
    assert_eq!(result.pheno.price(), 15_750.0);

    // price, compatibility, usage, psu, bottleneck, then the two value ratios
    let expected =
        30.0 + 30.0 + 30.0 + 10.0 + 10.0 + 70.0 / 3_300.0 * 100.0 + 55.0 / 6_500.0 * 650.0;
    assert!((result.score - expected).abs() < 1e-9);
    assert!((result.pheno.fitness() - expected).abs() < 1e-9);

    assert_eq!(result.stats.len(), 1);
    let stats = result.stats[0];
    assert_eq!(stats.population_len, 8);
    assert!((stats.best_fitness - expected).abs() < 1e-9);
    assert!((stats.worst_fitness - expected).abs() < 1e-9);
    assert!((stats.avg_fitness - expected).abs() < 1e-9);
}

#[test]
fn test_population_size_is_restored_every_generation() {
    let catalog = Catalog::builtin();
    let options = EvolutionOptions::new(25, LogLevel::None, 10, 1.0, 0.2);
    let preferences = UserPreferences::new(10_000.0, 20_000.0, Usage::Office);
    let mut rng = RandomNumberGenerator::from_seed(1);

    let result = pcgen::run(&options, preferences, &catalog, &mut rng).unwrap();

    assert_eq!(result.population.len(), 10);
    assert_eq!(result.stats.len(), 25);
    // Every pair crosses over, so each merge holds 10 parents and 10 children.
    assert!(result.stats.iter().all(|s| s.population_len == 20));
}

#[test]
fn test_odd_population_size() {
    let catalog = Catalog::builtin();
    let options = EvolutionOptions::new(5, LogLevel::None, 7, 1.0, 0.1);
    let preferences = UserPreferences::new(0.0, 50_000.0, Usage::Education);
    let mut rng = RandomNumberGenerator::from_seed(2);

    let result = pcgen::run(&options, preferences, &catalog, &mut rng).unwrap();

    assert_eq!(result.population.len(), 7);
    assert!(result.stats.iter().all(|s| s.population_len == 13));
}

#[test]
fn test_best_fitness_never_decreases() {
    let catalog = Catalog::builtin();
    let options = EvolutionOptions::new(40, LogLevel::None, 12, 0.7, 0.15);
    let preferences = UserPreferences::new(20_000.0, 40_000.0, Usage::Architecture);
    let mut rng = RandomNumberGenerator::from_seed(3);

    let result = pcgen::run(&options, preferences, &catalog, &mut rng).unwrap();

    let best = result.best_series();
    assert!(best.windows(2).all(|w| w[1] >= w[0]));
    for stats in &result.stats {
        assert!(stats.worst_fitness <= stats.avg_fitness + 1e-9);
        assert!(stats.avg_fitness <= stats.best_fitness + 1e-9);
    }
    assert!(result.score >= *best.last().unwrap());
}

#[test]
fn test_final_population_is_sorted_and_prices_hold() {
    let catalog = Catalog::builtin();
    let options = EvolutionOptions::new(15, LogLevel::None, 16, 0.9, 0.3);
    let preferences = UserPreferences::new(8_000.0, 16_000.0, Usage::Gaming);
    let mut rng = RandomNumberGenerator::from_seed(4);

    let result = pcgen::run(&options, preferences, &catalog, &mut rng).unwrap();

    assert!(result
        .population
        .windows(2)
        .all(|w| w[0].fitness() >= w[1].fitness()));

    for build in &result.population {
        let expected = build.cpu().price
            + build.gpu().map_or(0.0, |gpu| gpu.price)
            + build.ram().price
            + build.storage().price
            + build.motherboard().price
            + build.psu().price;
        assert_eq!(build.price(), expected);
    }
}

#[test]
fn test_zero_crossover_rate_keeps_initial_population() {
    let catalog = Catalog::builtin();
    let options = EvolutionOptions::new(10, LogLevel::None, 6, 0.0, 0.5);
    let preferences = UserPreferences::new(10_000.0, 15_000.0, Usage::VideoEditing);
    let mut rng = RandomNumberGenerator::from_seed(5);

    let result = pcgen::run(&options, preferences, &catalog, &mut rng).unwrap();

    assert_eq!(result.population.len(), 6);
    assert!(result.stats.iter().all(|s| s.population_len == 6));
    // Nothing is bred, so every generation sees the same builds.
    let first = result.stats[0];
    for stats in &result.stats {
        assert_eq!(stats.best_fitness, first.best_fitness);
        assert_eq!(stats.worst_fitness, first.worst_fitness);
        assert!((stats.avg_fitness - first.avg_fitness).abs() < 1e-9);
    }
}

#[test]
fn test_zero_generations_returns_best_initial_build() {
    let catalog = Catalog::builtin();
    let options = EvolutionOptions::new(0, LogLevel::None, 8, 0.5, 0.1);
    let preferences = UserPreferences::new(10_000.0, 15_000.0, Usage::WebBrowsing);
    let evaluator = FitnessEvaluator::new(preferences.clone());
    let mut rng = RandomNumberGenerator::from_seed(6);

    let result = pcgen::run(&options, preferences, &catalog, &mut rng).unwrap();

    assert!(result.stats.is_empty());
    assert_eq!(result.population.len(), 8);
    let top = result
        .population
        .iter()
        .map(|b| evaluator.score(b))
        .fold(f64::NEG_INFINITY, f64::max);
    assert_eq!(result.score, top);
}

#[test]
fn test_seeded_runs_are_reproducible() {
    let catalog = Catalog::builtin();
    let options = EvolutionOptions::new(20, LogLevel::None, 10, 0.6, 0.1);
    let preferences = UserPreferences::new(15_000.0, 30_000.0, Usage::GraphicDesign);

    let a = pcgen::run(
        &options,
        preferences.clone(),
        &catalog,
        &mut RandomNumberGenerator::from_seed(99),
    )
    .unwrap();
    let b = pcgen::run(
        &options,
        preferences,
        &catalog,
        &mut RandomNumberGenerator::from_seed(99),
    )
    .unwrap();

    assert!(a.pheno.same_parts(&b.pheno));
    assert_eq!(a.stats, b.stats);
}

#[test]
fn test_invalid_options_are_rejected() {
    let catalog = Catalog::builtin();
    let preferences = UserPreferences::new(0.0, 1.0, Usage::Office);
    let mut rng = RandomNumberGenerator::new();

    let options = EvolutionOptions::new(10, LogLevel::None, 0, 0.5, 0.1);
    match pcgen::run(&options, preferences.clone(), &catalog, &mut rng) {
        Err(GeneticError::Configuration(msg)) => {
            assert!(msg.contains("Population size cannot be zero"));
        }
        _ => panic!("Expected Configuration error"),
    }

    let options = EvolutionOptions::new(10, LogLevel::None, 4, 0.5, 2.0);
    assert!(matches!(
        pcgen::run(&options, preferences, &catalog, &mut rng),
        Err(GeneticError::Configuration(_))
    ));
}

#[test]
fn test_launcher_with_explicit_parts() {
    init_tracing();
    let catalog = Catalog::builtin();
    let options = EvolutionOptions::builder()
        .num_generations(10)
        .population_size(6)
        .crossover_rate(1.0)
        .mutation_rate(0.2)
        .log_level(LogLevel::Minimal)
        .build();
    let challenge = FitnessEvaluator::new(UserPreferences::new(10_000.0, 15_000.0, Usage::Office));
    let launcher: EvolutionLauncher<Build, PairwiseStrategy, FitnessEvaluator> =
        EvolutionLauncher::new(PairwiseStrategy, challenge);

    let result = launcher
        .evolve(&options, &catalog, &mut RandomNumberGenerator::from_seed(8))
        .unwrap();

    assert_eq!(result.avg_series().len(), 10);
    assert_eq!(result.worst_series().len(), 10);
    assert_eq!(result.score, launcher.challenge().score(&result.pheno));
}
