//! Per-position letter index over the candidate dictionary
//!
//! One slot per position maps each character to the set of live candidates
//! carrying that character there. Elimination rules prune the index in place;
//! a word is always removed from every slot in one call, so no partially
//! removed word is ever observable between calls.

use crate::core::Word;
use rustc_hash::{FxHashMap, FxHashSet};

/// Position-indexed candidate store
///
/// Invariant: a word appears in slot `i` under character `c` iff it is still a
/// live candidate and its character at position `i` is `c`. Buckets that drain
/// to empty are removed so slots stay sparse.
#[derive(Debug)]
pub struct PositionIndex {
    slots: Vec<FxHashMap<char, FxHashSet<Word>>>,
}

impl PositionIndex {
    /// Create an empty index with one slot per position
    #[must_use]
    pub fn new(length: usize) -> Self {
        let mut slots = Vec::with_capacity(length);
        slots.resize_with(length, FxHashMap::default);
        Self { slots }
    }

    /// Number of position slots
    #[inline]
    #[must_use]
    pub fn length(&self) -> usize {
        self.slots.len()
    }

    /// Insert a word into the bucket of each of its positions
    ///
    /// A word shorter than the index only occupies its own positions; a longer
    /// word only its first `length` positions. The index does not judge either
    /// case — callers feed it whatever the dictionary contains.
    pub fn register(&mut self, word: &Word) {
        for (slot, &c) in self.slots.iter_mut().zip(word.chars()) {
            slot.entry(c).or_default().insert(word.clone());
        }
    }

    /// Remove a word from the bucket of each of its positions
    ///
    /// Idempotent: removing an already-absent word is a no-op. Empty buckets
    /// are dropped from their slot.
    pub fn unregister(&mut self, word: &Word) {
        for (slot, &c) in self.slots.iter_mut().zip(word.chars()) {
            if let Some(bucket) = slot.get_mut(&c) {
                bucket.remove(word);
                if bucket.is_empty() {
                    slot.remove(&c);
                }
            }
        }
    }

    /// Keep only candidates with `letter` at `index`
    ///
    /// Every word bucketed at `index` under any other character is removed. If
    /// `letter` has no bucket at `index` at all, the claimed hit contradicts
    /// the dictionary and every candidate is eliminated; the resulting empty
    /// index is a valid terminal state, not an error.
    pub fn eliminate_except_at(&mut self, letter: char, index: usize) {
        let Some(slot) = self.slots.get(index) else {
            return;
        };

        // Snapshot before unregistering: removal mutates the buckets this
        // iteration reads.
        let doomed: Vec<Word> = slot
            .iter()
            .filter(|&(&c, _)| c != letter)
            .flat_map(|(_, bucket)| bucket.iter().cloned())
            .collect();

        for word in &doomed {
            self.unregister(word);
        }
    }

    /// Apply a present-but-wrong-position result for `letter` at `index`
    ///
    /// Removes every candidate with `letter` exactly at `index`, and every
    /// candidate that does not contain `letter` anywhere — the answer has the
    /// letter, just somewhere else.
    pub fn eliminate_misplaced_at(&mut self, letter: char, index: usize) {
        let Some(slot) = self.slots.get(index) else {
            return;
        };

        let doomed: Vec<Word> = slot
            .iter()
            .flat_map(|(&c, bucket)| {
                bucket
                    .iter()
                    .filter(move |word| c == letter || !word.has_letter(letter))
                    .cloned()
            })
            .collect();

        for word in &doomed {
            self.unregister(word);
        }
    }

    /// Remove every candidate containing `letter` anywhere
    pub fn eliminate_absent(&mut self, letter: char) {
        // Every non-empty candidate is bucketed at position 0, so one slot's
        // aggregation enumerates the whole live set.
        let doomed: Vec<Word> = self
            .remaining()
            .filter(|word| word.has_letter(letter))
            .cloned()
            .collect();

        for word in &doomed {
            self.unregister(word);
        }
    }

    /// Return one arbitrary remaining candidate, or `None` if the set is empty
    ///
    /// Which word is returned among several is unspecified: buckets hash in
    /// arbitrary order. Callers must not rely on the pick for reproducibility.
    #[must_use]
    pub fn any_remaining(&self) -> Option<&Word> {
        self.remaining().next()
    }

    /// Iterate over all remaining candidates, in unspecified order
    pub fn remaining(&self) -> impl Iterator<Item = &Word> {
        self.slots
            .first()
            .into_iter()
            .flat_map(|slot| slot.values().flatten())
    }

    /// Number of remaining candidates
    ///
    /// A word occupies exactly one bucket of the first slot, so the bucket
    /// sizes there sum to the live-candidate count.
    #[must_use]
    pub fn count_remaining(&self) -> usize {
        self.slots
            .first()
            .map_or(0, |slot| slot.values().map(FxHashSet::len).sum())
    }
}
