//! Formatting utilities for terminal output

use rustc_hash::FxHashSet;

/// Render a letter set as a sorted, space-separated line
///
/// Sorting keeps the display stable across runs even though the backing set
/// iterates in arbitrary order.
#[must_use]
pub fn sorted_letters(letters: &FxHashSet<char>) -> String {
    if letters.is_empty() {
        return "(none)".to_string();
    }

    let mut sorted: Vec<char> = letters.iter().copied().collect();
    sorted.sort_unstable();

    let mut result = String::with_capacity(sorted.len() * 2);
    for (i, letter) in sorted.into_iter().enumerate() {
        if i > 0 {
            result.push(' ');
        }
        result.push(letter);
    }
    result
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorted_letters_orders_output() {
        let letters: FxHashSet<char> = "cab".chars().collect();
        assert_eq!(sorted_letters(&letters), "a b c");
    }

    #[test]
    fn sorted_letters_empty_set() {
        let letters = FxHashSet::default();
        assert_eq!(sorted_letters(&letters), "(none)");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }
}
