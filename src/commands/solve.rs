//! Word solving command
//!
//! Simulates a full game against a known target word and returns the solution
//! path. The benchmark and exhaustive commands reuse the same simulation.

use crate::core::{Feedback, Word};
use crate::solver::Solver;

/// Turn cap for simulated games
///
/// Elimination is monotonic, so a simulation always terminates on its own;
/// the cap just bounds pathological dictionaries.
pub const DEFAULT_MAX_TURNS: usize = 32;

/// Configuration for solving a word
pub struct SolveConfig {
    pub target: String,
    pub max_turns: usize,
    pub probe_threshold: Option<usize>,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String) -> Self {
        Self {
            target,
            max_turns: DEFAULT_MAX_TURNS,
            probe_threshold: None,
        }
    }
}

/// Result of solving a word
pub struct SolveResult {
    pub success: bool,
    pub guesses: Vec<GuessStep>,
    pub target: String,
}

/// A single guess step in the solution
pub struct GuessStep {
    pub word: String,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Solve a specific target word against the given dictionary
///
/// # Errors
///
/// Returns an error if the target's length does not match `length`, or if the
/// target is not in the dictionary (the simulation could never reach it).
pub fn solve_word(
    config: &SolveConfig,
    words: &[Word],
    length: usize,
) -> Result<SolveResult, String> {
    let target = Word::new(config.target.as_str());

    if target.len() != length {
        return Err(format!(
            "Target '{}' has {} letters, expected {length}",
            target,
            target.len()
        ));
    }
    if !words.contains(&target) {
        return Err(format!("Target '{target}' is not in the dictionary"));
    }

    let mut solver = Solver::new(words, length);
    if let Some(threshold) = config.probe_threshold {
        solver = solver.with_probe_threshold(threshold);
    }

    let mut guesses: Vec<GuessStep> = Vec::new();

    for _ in 0..config.max_turns {
        let candidates_before = solver.candidate_count();

        let Some(guess) = solver.recommend().cloned() else {
            break;
        };

        let feedback = Feedback::score(&guess, &target);
        solver.absorb(&guess, &feedback);

        let solved = feedback.is_win();
        guesses.push(GuessStep {
            word: guess.text().to_string(),
            feedback,
            candidates_before,
            candidates_after: solver.candidate_count(),
        });

        if solved {
            return Ok(SolveResult {
                success: true,
                guesses,
                target: config.target.clone(),
            });
        }
    }

    Ok(SolveResult {
        success: false,
        guesses,
        target: config.target.clone(),
    })
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
    fn solve_word_succeeds() {
        let words = dictionary();
        let config = SolveConfig::new("mucky".to_string());

        let result = solve_word(&config, &words, 5).unwrap();

        assert!(result.success);
        assert!(!result.guesses.is_empty());
        assert_eq!(result.guesses.last().unwrap().word, "mucky");
        assert!(result.guesses.last().unwrap().feedback.is_win());
    }

    #[test]
    fn solve_every_dictionary_word() {
        let words = dictionary();

        for target in &words {
            let config = SolveConfig::new(target.text().to_string());
            let result = solve_word(&config, &words, 5).unwrap();
            assert!(result.success, "failed to solve {target}");
        }
    }

    #[test]
    fn solve_candidate_counts_never_grow() {
        let words = dictionary();
        let config = SolveConfig::new("bacon".to_string());

        let result = solve_word(&config, &words, 5).unwrap();

        for step in &result.guesses {
            assert!(step.candidates_after <= step.candidates_before);
        }
    }

    #[test]
    fn solve_respects_turn_cap() {
        let words = dictionary();
        let mut config = SolveConfig::new("mucky".to_string());
        config.max_turns = 1;

        let result = solve_word(&config, &words, 5).unwrap();
        assert!(result.guesses.len() <= 1);
    }

    #[test]
    fn solve_rejects_wrong_length_target() {
        let words = dictionary();
        let config = SolveConfig::new("ab".to_string());

        assert!(solve_word(&config, &words, 5).is_err());
    }

    #[test]
    fn solve_rejects_unknown_target() {
        let words = dictionary();
        let config = SolveConfig::new("zzzzz".to_string());

        assert!(solve_word(&config, &words, 5).is_err());
    }

    #[test]
    fn solve_with_custom_threshold() {
        let words = dictionary();
        let mut config = SolveConfig::new("slate".to_string());
        config.probe_threshold = Some(0);

        // Threshold 0 skips exploration entirely; the game still resolves
        let result = solve_word(&config, &words, 5).unwrap();
        assert!(result.success);
    }
}
