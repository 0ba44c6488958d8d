//! Constraint-tracking solver
//!
//! Owns the position index plus the accumulated letter knowledge, absorbs one
//! round of feedback at a time, and recommends the next guess under a
//! two-phase heuristic: unique-letter probe words while little is known, then
//! direct candidates from the index.

use super::index::PositionIndex;
use crate::core::{Feedback, LetterScore, Word};
use rustc_hash::FxHashSet;

/// Recommendation phase
///
/// The transition is one-way and driven solely by the number of distinct
/// letters confirmed present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Still gathering letters: recommend probe words
    Exploring,
    /// Enough letters confirmed: recommend surviving candidates
    Exploiting,
}

/// Wordle assistant engine
///
/// Single-threaded and not reentrant: one caller owns the instance and drives
/// it through `recommend`/`absorb` rounds. The only failure mode is an empty
/// candidate set, reported as a normal `None` from [`Solver::recommend`].
pub struct Solver {
    length: usize,
    index: PositionIndex,
    tried: FxHashSet<char>,
    found: FxHashSet<char>,
    probes: FxHashSet<Word>,
    probe_threshold: usize,
}

impl Solver {
    /// Build a solver over the full candidate dictionary
    ///
    /// Every word is indexed per its own character layout; entries of a length
    /// other than `length` are the caller's responsibility to filter (the
    /// loader does). Words with pairwise-distinct letters seed the probe pool.
    #[must_use]
    pub fn new(words: &[Word], length: usize) -> Self {
        let mut index = PositionIndex::new(length);
        let mut probes = FxHashSet::default();

        for word in words {
            index.register(word);
            if word.has_unique_letters() {
                probes.insert(word.clone());
            }
        }

        Self {
            length,
            index,
            tried: FxHashSet::default(),
            found: FxHashSet::default(),
            probes,
            probe_threshold: length / 2 + 1,
        }
    }

    /// Override the found-letter count at which exploration stops
    ///
    /// The default of ⌊L/2⌋+1 is a heuristic with no optimality claim behind
    /// it, hence tunable.
    #[must_use]
    pub fn with_probe_threshold(mut self, threshold: usize) -> Self {
        self.probe_threshold = threshold;
        self
    }

    /// Target word length
    #[inline]
    #[must_use]
    pub fn length(&self) -> usize {
        self.length
    }

    /// Current recommendation phase
    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.found.len() < self.probe_threshold {
            Phase::Exploring
        } else {
            Phase::Exploiting
        }
    }

    /// Absorb one round of feedback for a submitted guess
    ///
    /// For each position: the letter becomes tried, probe words containing it
    /// leave the pool, and the matching elimination rule prunes the index.
    /// Feedback must align with the guess; the core does not validate it
    /// (parse rejects malformed lines upstream), and positions beyond the
    /// shorter of the two sequences are ignored.
    pub fn absorb(&mut self, guess: &Word, feedback: &Feedback) {
        for (i, (&c, &score)) in guess.chars().iter().zip(feedback.scores()).enumerate() {
            self.tried.insert(c);
            self.probes.retain(|word| !word.has_letter(c));

            match score {
                LetterScore::Hit => {
                    self.found.insert(c);
                    self.index.eliminate_except_at(c, i);
                }
                LetterScore::Misplaced => {
                    self.found.insert(c);
                    self.index.eliminate_misplaced_at(c, i);
                }
                LetterScore::Absent => {
                    self.index.eliminate_absent(c);
                }
            }
        }
    }

    /// Recommend the next guess, or `None` when nothing is left to suggest
    ///
    /// While fewer than the threshold count of letters are confirmed and the
    /// probe pool is non-empty, an arbitrary probe word is returned to cover
    /// as many untried letters as possible. Otherwise an arbitrary surviving
    /// candidate is returned. Which word wins among ties is unspecified — the
    /// backing sets iterate in arbitrary order.
    #[must_use]
    pub fn recommend(&self) -> Option<&Word> {
        if self.phase() == Phase::Exploring
            && let Some(probe) = self.probes.iter().next()
        {
            return Some(probe);
        }
        self.index.any_remaining()
    }

    /// Number of words still consistent with all absorbed feedback
    #[must_use]
    pub fn candidate_count(&self) -> usize {
        self.index.count_remaining()
    }

    /// Iterate over the surviving candidates, in unspecified order
    pub fn candidates(&self) -> impl Iterator<Item = &Word> {
        self.index.remaining()
    }

    /// Number of probe words still worth guessing
    #[must_use]
    pub fn probe_count(&self) -> usize {
        self.probes.len()
    }

    /// Letters that have appeared in any submitted guess
    #[must_use]
    pub fn tried_letters(&self) -> &FxHashSet<char> {
        &self.tried
    }

    /// Letters confirmed present in the answer
    #[must_use]
    pub fn found_letters(&self) -> &FxHashSet<char> {
        &self.found
    }
}
