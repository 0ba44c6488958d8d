//! Exhaustive evaluation
//!
//! Runs the solver simulation against every dictionary word and aggregates
//! statistics. Each target gets an independent solver, so the games fan out
//! across threads.

use super::solve::{SolveConfig, solve_word};
use crate::core::Word;
use colored::Colorize;
use indicatif::{ParallelProgressIterator, ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Statistics from running every dictionary word
#[derive(Debug)]
pub struct ExhaustiveStatistics {
    pub total_words: usize,
    pub solved: usize,
    pub failed: usize,
    pub guess_distribution: HashMap<usize, usize>,
    pub total_time: Duration,
    pub average_guesses: f64,
    pub max_guesses: usize,
    pub min_guesses: usize,
    pub worst_words: Vec<(String, usize)>,
}

/// Run the simulation on all dictionary words (or a limited prefix)
#[must_use]
pub fn run_exhaustive(
    words: &[Word],
    length: usize,
    limit: Option<usize>,
    probe_threshold: Option<usize>,
) -> ExhaustiveStatistics {
    let targets: Vec<&Word> = words
        .iter()
        .take(limit.unwrap_or(words.len()))
        .collect();

    println!("🎯 Testing {} words...", targets.len());

    let pb = ProgressBar::new(targets.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let total_start = Instant::now();

    let outcomes: Vec<(String, usize, bool)> = targets
        .par_iter()
        .progress_with(pb)
        .map(|target| {
            let mut config = SolveConfig::new(target.text().to_string());
            config.probe_threshold = probe_threshold;

            match solve_word(&config, words, length) {
                Ok(result) => (
                    result.target,
                    result.guesses.len(),
                    result.success,
                ),
                Err(_) => (target.text().to_string(), 0, false),
            }
        })
        .collect();

    let total_time = total_start.elapsed();

    let mut guess_distribution: HashMap<usize, usize> = HashMap::new();
    for (_, guesses, success) in &outcomes {
        if *success {
            *guess_distribution.entry(*guesses).or_insert(0) += 1;
        }
    }

    let solved_count = outcomes.iter().filter(|(_, _, s)| *s).count();
    let solved_guesses = || {
        outcomes
            .iter()
            .filter(|(_, _, s)| *s)
            .map(|(_, g, _)| *g)
    };

    let total_guesses: usize = solved_guesses().sum();
    let average_guesses = if solved_count > 0 {
        total_guesses as f64 / solved_count as f64
    } else {
        0.0
    };

    let mut worst_words: Vec<(String, usize)> = outcomes
        .iter()
        .filter(|(_, _, s)| *s)
        .map(|(word, guesses, _)| (word.clone(), *guesses))
        .collect();
    worst_words.sort_by_key(|(_, n)| std::cmp::Reverse(*n));
    worst_words.truncate(10);

    ExhaustiveStatistics {
        total_words: outcomes.len(),
        solved: solved_count,
        failed: outcomes.len() - solved_count,
        guess_distribution,
        total_time,
        average_guesses,
        max_guesses: solved_guesses().max().unwrap_or(0),
        min_guesses: solved_guesses().min().unwrap_or(0),
        worst_words,
    }
}

/// Print exhaustive-run statistics
pub fn print_exhaustive_statistics(stats: &ExhaustiveStatistics) {
    println!("\n{}", "═".repeat(70));
    println!(" Exhaustive Results ");
    println!("{}", "═".repeat(70));

    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Total words tested:  {}", stats.total_words);
    println!(
        "  Successfully solved: {} {}",
        stats.solved,
        format!(
            "({:.1}%)",
            stats.solved as f64 / stats.total_words.max(1) as f64 * 100.0
        )
        .green()
    );
    if stats.failed > 0 {
        println!(
            "  Failed to solve:     {} {}",
            stats.failed,
            format!(
                "({:.1}%)",
                stats.failed as f64 / stats.total_words.max(1) as f64 * 100.0
            )
            .red()
        );
    }
    println!(
        "  Average guesses:     {}",
        format!("{:.3}", stats.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "  Guess range:         {}-{}",
        stats.min_guesses, stats.max_guesses
    );
    println!(
        "  Total time:          {:.2}s",
        stats.total_time.as_secs_f64()
    );
    if stats.total_words > 0 {
        println!(
            "  Time per word:       {:.1}ms",
            stats.total_time.as_millis() as f64 / stats.total_words as f64
        );
    }

    println!("\n📈 {}", "Guess Distribution".bright_cyan().bold());
    let max_count = *stats.guess_distribution.values().max().unwrap_or(&1);
    for guesses in stats.min_guesses..=stats.max_guesses {
        let count = stats.guess_distribution.get(&guesses).unwrap_or(&0);
        if stats.solved > 0 {
            let percentage = *count as f64 / stats.solved as f64 * 100.0;
            let bar_len = if max_count > 0 {
                (*count * 40 / max_count).max(usize::from(*count > 0))
            } else {
                0
            };
            let bar = format!(
                "{}{}",
                "█".repeat(bar_len).green(),
                "░".repeat(40_usize.saturating_sub(bar_len)).bright_black()
            );

            println!("  {guesses} guesses: {bar} {count:4} ({percentage:5.1}%)");
        }
    }

    if !stats.worst_words.is_empty() {
        println!("\n😰 {}", "Hardest Words".yellow().bold());
        for (word, guesses) in stats.worst_words.iter().take(5) {
            println!("  {} ({} guesses)", word.to_uppercase().yellow(), guesses);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary() -> Vec<Word> {
        ["crane", "slate", "trace", "grape", "bacon", "mucky"]
            .iter()
            .copied()
            .map(Word::new)
            .collect()
    }

    #[test]
    fn exhaustive_solves_small_dictionary() {
        let words = dictionary();
        let stats = run_exhaustive(&words, 5, None, None);

        assert_eq!(stats.total_words, words.len());
        assert_eq!(stats.solved, words.len());
        assert_eq!(stats.failed, 0);
        assert!(stats.average_guesses >= 1.0);
    }

    #[test]
    fn exhaustive_respects_limit() {
        let words = dictionary();
        let stats = run_exhaustive(&words, 5, Some(2), None);

        assert_eq!(stats.total_words, 2);
    }

    #[test]
    fn exhaustive_distribution_counts_solved_games() {
        let words = dictionary();
        let stats = run_exhaustive(&words, 5, None, None);

        let distribution_sum: usize = stats.guess_distribution.values().sum();
        assert_eq!(distribution_sum, stats.solved);
    }
}
