use evostr::{
    run, EvolutionConfig, EvolutionEngine, ProgressCallback, SilentProgressCallback,
};

/// Progress callback that records what the engine reported
struct RecordingCallback {
    generations_seen: u64,
    last_best_score: usize,
}

impl ProgressCallback for RecordingCallback {
    fn on_generation_complete(&mut self, generation: u64, best_score: usize, _best: &str) {
        self.generations_seen = generation;
        self.last_best_score = best_score;
    }
}

fn lowercase_genes() -> Vec<char> {
    " abcdefghijklmnopqrstuvwxyz".chars().collect()
}

#[test]
fn test_end_to_end_small_alphabet() {
    let outcome = run("abc", &['a', 'b', 'c'], false).expect("valid inputs");

    assert!(outcome.converged);
    assert_eq!("abc", outcome.best);
    assert_eq!(3, outcome.best_score);

    // Every generation scores exactly population_size individuals
    assert_eq!(outcome.total_evaluated, outcome.generations * 200);
    assert!(outcome.generations >= 1);
}

#[test]
fn test_convergence_on_short_word() {
    let config = EvolutionConfig {
        seed: Some(1234),
        ..EvolutionConfig::default()
    };

    let mut engine =
        EvolutionEngine::new(config, "gene", &lowercase_genes()).expect("valid inputs");
    let outcome = engine.run(SilentProgressCallback);

    assert!(outcome.converged);
    assert_eq!("gene", outcome.best);
    assert_eq!(outcome.best_score, 4);
}

#[test]
fn test_determinism_with_fixed_seed() {
    let genes = lowercase_genes();
    let target = "hello world";

    let run_once = || {
        let config = EvolutionConfig {
            seed: Some(42),
            ..EvolutionConfig::default()
        };
        let mut engine = EvolutionEngine::new(config, target, &genes).expect("valid inputs");
        engine.run(SilentProgressCallback)
    };

    let first = run_once();
    let second = run_once();

    assert!(first.converged);
    assert_eq!(first.generations, second.generations);
    assert_eq!(first.total_evaluated, second.total_evaluated);
    assert_eq!(first.best, second.best);
}

#[test]
fn test_generation_cap_reports_not_converged() {
    // With mutation disabled and a long target, a 3-generation run cannot
    // assemble a perfect match from 200 random candidates.
    let config = EvolutionConfig {
        max_generations: Some(3),
        mutation_probability: 0.0,
        seed: Some(7),
        ..EvolutionConfig::default()
    };

    let target = "the quick brown fox jumps over the lazy dog";
    let mut engine =
        EvolutionEngine::new(config, target, &lowercase_genes()).expect("valid inputs");
    let outcome = engine.run(SilentProgressCallback);

    assert!(!outcome.converged);
    assert_eq!(3, outcome.generations);
    assert_eq!(600, outcome.total_evaluated);
    assert!(outcome.best_score < target.chars().count());
}

#[test]
fn test_callback_sees_every_generation() {
    let config = EvolutionConfig {
        max_generations: Some(5),
        mutation_probability: 0.0,
        seed: Some(99),
        ..EvolutionConfig::default()
    };

    let target = "a longer target that will not match in five generations";
    let mut engine =
        EvolutionEngine::new(config, target, &lowercase_genes()).expect("valid inputs");

    let mut recorder = RecordingCallback {
        generations_seen: 0,
        last_best_score: 0,
    };
    let outcome = engine.run(&mut recorder);

    assert_eq!(outcome.generations, recorder.generations_seen);
    assert_eq!(outcome.best_score, recorder.last_best_score);
}

#[test]
fn test_debug_flag_does_not_change_outcome() {
    let genes = lowercase_genes();
    let config = EvolutionConfig {
        seed: Some(5),
        ..EvolutionConfig::default()
    };

    let mut silent_engine =
        EvolutionEngine::new(config.clone(), "seed", &genes).expect("valid inputs");
    let silent = silent_engine.run(SilentProgressCallback);

    let mut recording_engine = EvolutionEngine::new(config, "seed", &genes).expect("valid inputs");
    let mut recorder = RecordingCallback {
        generations_seen: 0,
        last_best_score: 0,
    };
    let recorded = recording_engine.run(&mut recorder);

    assert_eq!(silent.generations, recorded.generations);
    assert_eq!(silent.best, recorded.best);
}
