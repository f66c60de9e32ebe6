//! Formatting utilities for terminal output

use crate::core::{Pattern, Placing, WORD_LEN, Word};
use colored::Colorize;

/// Guess letters coloured by their placing
#[must_use]
pub fn colored_guess(guess: &Word, pattern: Pattern) -> String {
    (0..WORD_LEN)
        .map(|i| {
            let letter = (guess.char_at(i) as char).to_ascii_uppercase().to_string();
            match pattern.placing(i) {
                Placing::Correct => letter.black().on_green().to_string(),
                Placing::Misplaced => letter.black().on_yellow().to_string(),
                Placing::Incorrect => letter.white().on_bright_black().to_string(),
            }
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max).max(0.0) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Percentage with one decimal, right-aligned
#[must_use]
pub fn percent(value: f64) -> String {
    format!("{value:5.1}%")
}

#[cfg(test)]
mod tests {
    use super::*;

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

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn colored_guess_keeps_letters() {
        colored::control::set_override(false);
        let guess = Word::new("crane").unwrap();
        let pattern = Pattern::parse("GY--G").unwrap();
        assert_eq!(colored_guess(&guess, pattern), "CRANE");
    }

    #[test]
    fn percent_formatting() {
        assert_eq!(percent(12.345), " 12.3%");
    }
}
