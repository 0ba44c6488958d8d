//! Benchmark command
//!
//! Runs the simulation over a random sample of dictionary words.

use super::solve::{SolveConfig, solve_word};
use crate::core::Word;
use rand::seq::IndexedRandom;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    pub distribution: HashMap<usize, usize>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Run the solver simulation on `count` randomly sampled target words
#[must_use]
pub fn run_benchmark(
    words: &[Word],
    length: usize,
    count: usize,
    probe_threshold: Option<usize>,
) -> BenchmarkResult {
    let mut rng = rand::rng();
    let targets: Vec<&Word> = words.choose_multiple(&mut rng, count).collect();

    let start = Instant::now();
    let mut solved = 0;
    let mut total_guesses = 0;
    let mut min_guesses = usize::MAX;
    let mut max_guesses = 0;
    let mut distribution: HashMap<usize, usize> = HashMap::new();

    for target in &targets {
        let mut config = SolveConfig::new(target.text().to_string());
        config.probe_threshold = probe_threshold;

        // Targets are sampled from the dictionary, so the config is valid
        let Ok(result) = solve_word(&config, words, length) else {
            continue;
        };

        let guesses = result.guesses.len();
        total_guesses += guesses;
        min_guesses = min_guesses.min(guesses);
        max_guesses = max_guesses.max(guesses);
        *distribution.entry(guesses).or_insert(0) += 1;

        if result.success {
            solved += 1;
        }
    }

    let duration = start.elapsed();
    let total_words = targets.len();

    BenchmarkResult {
        total_words,
        solved,
        total_guesses,
        average_guesses: if total_words > 0 {
            total_guesses as f64 / total_words as f64
        } else {
            0.0
        },
        min_guesses: if total_words > 0 { min_guesses } else { 0 },
        max_guesses,
        distribution,
        duration,
        words_per_second: if duration.as_secs_f64() > 0.0 {
            total_words as f64 / duration.as_secs_f64()
        } else {
            0.0
        },
    }
}
