//! Per-letter guess feedback
//!
//! One round of feedback is a sequence of outcomes aligned positionally with
//! the guessed word: hit (right letter, right spot), misplaced (letter exists
//! elsewhere), or absent (letter not in the answer).

use super::Word;

/// Outcome for a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterScore {
    /// Correct letter in the correct position
    Hit,
    /// Letter exists in the answer but not at this position
    Misplaced,
    /// Letter does not occur in the answer
    Absent,
}

/// Feedback for one full guess, one outcome per position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    scores: Vec<LetterScore>,
}

impl Feedback {
    /// Build feedback directly from a list of outcomes
    #[must_use]
    pub fn from_scores(scores: Vec<LetterScore>) -> Self {
        Self { scores }
    }

    /// Parse a feedback line typed by the user
    ///
    /// Accepts three symbol families, freely mixed:
    /// - `G`/`g`/🟩 hit, `Y`/`y`/🟨 misplaced, `-`/`_`/⬜ absent
    /// - `o` hit, `x` misplaced, `.` absent
    ///
    /// Returns `None` if the input is not exactly `length` symbols or contains
    /// an unknown symbol. The solver core assumes well-formed feedback, so
    /// rejection happens here, before anything reaches it.
    ///
    /// # Examples
    /// ```
    /// use wordle_probe::core::Feedback;
    ///
    /// let a = Feedback::parse("GY-GY", 5).unwrap();
    /// let b = Feedback::parse("🟩🟨⬜🟩🟨", 5).unwrap();
    /// let c = Feedback::parse("ox.ox", 5).unwrap();
    /// assert_eq!(a, b);
    /// assert_eq!(a, c);
    ///
    /// assert!(Feedback::parse("GY-", 5).is_none());
    /// assert!(Feedback::parse("GY?GY", 5).is_none());
    /// ```
    #[must_use]
    pub fn parse(s: &str, length: usize) -> Option<Self> {
        let chars: Vec<char> = s.chars().collect();

        if chars.len() != length {
            return None;
        }

        let mut scores = Vec::with_capacity(length);
        for ch in chars {
            let score = match ch {
                'G' | 'g' | '🟩' | 'o' => LetterScore::Hit,
                'Y' | 'y' | '🟨' | 'x' => LetterScore::Misplaced,
                '-' | '_' | '⬜' | '.' => LetterScore::Absent,
                _ => return None,
            };
            scores.push(score);
        }

        Some(Self { scores })
    }

    /// Score `guess` against a known `answer`
    ///
    /// Each position is scored independently: hit if the answer has the same
    /// letter there, misplaced if the answer contains the letter anywhere,
    /// absent otherwise. A repeated guess letter scores misplaced at every
    /// non-hit position as long as the answer contains it at all — the same
    /// per-letter semantics the elimination rules apply, so simulated games
    /// stay consistent with the candidate filter.
    ///
    /// # Examples
    /// ```
    /// use wordle_probe::core::{Feedback, LetterScore, Word};
    ///
    /// let feedback = Feedback::score(&Word::new("crane"), &Word::new("slate"));
    /// assert_eq!(
    ///     feedback.scores(),
    ///     &[
    ///         LetterScore::Absent,    // c
    ///         LetterScore::Absent,    // r
    ///         LetterScore::Hit,       // a
    ///         LetterScore::Absent,    // n
    ///         LetterScore::Hit,       // e
    ///     ]
    /// );
    /// ```
    #[must_use]
    pub fn score(guess: &Word, answer: &Word) -> Self {
        let scores = guess
            .chars()
            .iter()
            .enumerate()
            .map(|(i, &c)| {
                if answer.chars().get(i) == Some(&c) {
                    LetterScore::Hit
                } else if answer.has_letter(c) {
                    LetterScore::Misplaced
                } else {
                    LetterScore::Absent
                }
            })
            .collect();

        Self { scores }
    }

    /// Build the all-hit feedback for a solved guess of the given length
    #[must_use]
    pub fn win(length: usize) -> Self {
        Self {
            scores: vec![LetterScore::Hit; length],
        }
    }

    /// The per-position outcomes
    #[inline]
    #[must_use]
    pub fn scores(&self) -> &[LetterScore] {
        &self.scores
    }

    /// Number of positions
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// True for zero-length feedback
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// True iff every position is a hit
    #[must_use]
    pub fn is_win(&self) -> bool {
        !self.scores.is_empty() && self.scores.iter().all(|&s| s == LetterScore::Hit)
    }

    /// Render as emoji tiles
    ///
    /// # Examples
    /// ```
    /// use wordle_probe::core::Feedback;
    ///
    /// let feedback = Feedback::parse("GY-GY", 5).unwrap();
    /// assert_eq!(feedback.to_emoji(), "🟩🟨⬜🟩🟨");
    /// ```
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.scores
            .iter()
            .map(|score| match score {
                LetterScore::Hit => '🟩',
                LetterScore::Misplaced => '🟨',
                LetterScore::Absent => '⬜',
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_letter_symbols() {
        let feedback = Feedback::parse("GY-gy", 5).unwrap();
        assert_eq!(
            feedback.scores(),
            &[
                LetterScore::Hit,
                LetterScore::Misplaced,
                LetterScore::Absent,
                LetterScore::Hit,
                LetterScore::Misplaced,
            ]
        );
    }

    #[test]
    fn parse_emoji_and_plain_symbols_agree() {
        let plain = Feedback::parse("G-Y_G", 5).unwrap();
        let emoji = Feedback::parse("🟩⬜🟨⬜🟩", 5).unwrap();
        let compact = Feedback::parse("o.x.o", 5).unwrap();

        assert_eq!(plain, emoji);
        assert_eq!(plain, compact);
    }

    #[test]
    fn parse_rejects_wrong_length() {
        assert!(Feedback::parse("GYG", 5).is_none());
        assert!(Feedback::parse("GYGGYG", 5).is_none());
        assert!(Feedback::parse("", 5).is_none());
    }

    #[test]
    fn parse_rejects_unknown_symbols() {
        assert!(Feedback::parse("GY?GY", 5).is_none());
        assert!(Feedback::parse("12345", 5).is_none());
    }

    #[test]
    fn parse_respects_target_length() {
        assert!(Feedback::parse("GY", 2).is_some());
        assert!(Feedback::parse("GY", 3).is_none());
    }

    #[test]
    fn score_all_absent() {
        let feedback = Feedback::score(&Word::new("abcde"), &Word::new("fghij"));
        assert!(feedback.scores().iter().all(|&s| s == LetterScore::Absent));
        assert!(!feedback.is_win());
    }

    #[test]
    fn score_perfect_match_is_win() {
        let word = Word::new("crane");
        let feedback = Feedback::score(&word, &word);
        assert!(feedback.is_win());
        assert_eq!(feedback, Feedback::win(5));
    }

    #[test]
    fn score_mixed() {
        let feedback = Feedback::score(&Word::new("trace"), &Word::new("tears"));
        assert_eq!(
            feedback.scores(),
            &[
                LetterScore::Hit,       // t in place
                LetterScore::Misplaced, // r exists elsewhere
                LetterScore::Hit,       // a in place
                LetterScore::Absent,    // no c
                LetterScore::Misplaced, // e exists elsewhere
            ]
        );
    }

    #[test]
    fn score_duplicates_are_count_naive() {
        // Both a's score against the single a in "ab": the first is a hit,
        // the second still counts as misplaced.
        let feedback = Feedback::score(&Word::new("aa"), &Word::new("ab"));
        assert_eq!(
            feedback.scores(),
            &[LetterScore::Hit, LetterScore::Misplaced]
        );
    }

    #[test]
    fn score_guess_longer_than_answer() {
        // Extra positions score against nothing
        let feedback = Feedback::score(&Word::new("abc"), &Word::new("ab"));
        assert_eq!(
            feedback.scores(),
            &[LetterScore::Hit, LetterScore::Hit, LetterScore::Absent]
        );
    }

    #[test]
    fn win_requires_nonempty() {
        assert!(!Feedback::from_scores(vec![]).is_win());
        assert!(Feedback::win(5).is_win());
    }

    #[test]
    fn emoji_round_trip() {
        let feedback = Feedback::parse("GY-GY", 5).unwrap();
        let rendered = feedback.to_emoji();
        assert_eq!(rendered, "🟩🟨⬜🟩🟨");
        assert_eq!(Feedback::parse(&rendered, 5).unwrap(), feedback);
    }
}
