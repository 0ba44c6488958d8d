//! Word list loading utilities
//!
//! The solver core indexes whatever it is handed without validating lengths,
//! so filtering mismatched dictionary entries (including the blank line most
//! word files end with) happens here instead.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Load words of the target length from a file, one word per line
///
/// Blank lines and entries whose code-point length differs from `length` are
/// dropped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use wordle_probe::wordlists::loader::load_from_file;
///
/// let words = load_from_file("words.txt", 5).unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P, length: usize) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_lines(&content, length))
}

/// Split in-memory text into words of the target length
///
/// # Examples
/// ```
/// use wordle_probe::wordlists::loader::words_from_lines;
///
/// let words = words_from_lines("crane\nslate\nab\n\n", 5);
/// assert_eq!(words.len(), 2);
/// ```
#[must_use]
pub fn words_from_lines(content: &str, length: usize) -> Vec<Word> {
    content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                return None;
            }
            let word = Word::new(trimmed);
            (word.len() == length).then_some(word)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_lines_keeps_matching_lengths() {
        let words = words_from_lines("crane\nslate\nirate\n", 5);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[2].text(), "irate");
    }

    #[test]
    fn words_from_lines_drops_mismatched_lengths() {
        let words = words_from_lines("crane\ntoolong\nabc\nslate\n", 5);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[1].text(), "slate");
    }

    #[test]
    fn words_from_lines_drops_blank_trailing_line() {
        let words = words_from_lines("crane\nslate\n\n", 5);
        assert_eq!(words.len(), 2);
    }

    #[test]
    fn words_from_lines_trims_whitespace() {
        let words = words_from_lines("  crane  \n\tslate\n", 5);
        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "crane");
    }

    #[test]
    fn words_from_lines_normalizes_case() {
        let words = words_from_lines("CRANE\n", 5);
        assert_eq!(words[0].text(), "crane");
    }

    #[test]
    fn words_from_lines_counts_code_points() {
        // "crêpe" is 6 bytes but 5 code points
        let words = words_from_lines("crêpe\n", 5);
        assert_eq!(words.len(), 1);
    }

    #[test]
    fn words_from_lines_empty_input() {
        assert!(words_from_lines("", 5).is_empty());
    }
}
