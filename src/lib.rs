//! Wordle Probe
//!
//! A Wordle assistant built around a per-position letter index. Feedback
//! rounds prune the index through three elimination rules, and guesses come
//! from a two-phase heuristic: unique-letter probe words while little is
//! known, surviving candidates once enough letters are confirmed.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_probe::core::{Feedback, Word};
//! use wordle_probe::solver::Solver;
//!
//! let words = vec![Word::new("apple"), Word::new("zzzzz"), Word::new("grape")];
//! let mut solver = Solver::new(&words, 5);
//!
//! // Phase 1 recommends a word with five distinct letters
//! let guess = solver.recommend().unwrap().clone();
//!
//! // Absorb the feedback the game gave for it
//! let feedback = Feedback::score(&guess, &Word::new("apple"));
//! solver.absorb(&guess, &feedback);
//! assert!(solver.candidate_count() <= words.len());
//! ```

// Core domain types
pub mod core;

// Solving engine
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
