//! Progress bars for long-running loops

use indicatif::{ProgressBar, ProgressStyle};

const TEMPLATE: &str = "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}";

/// Styled bar over `len` steps; hidden when `visible` is false
#[must_use]
pub fn progress_bar(len: u64, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }
    let style = ProgressStyle::default_bar()
        .template(TEMPLATE)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▓▒░");
    let pb = ProgressBar::new(len);
    pb.set_style(style);
    pb
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_bar_still_counts() {
        let pb = progress_bar(10, false);
        pb.inc(3);
        assert_eq!(pb.position(), 3);
        assert!(pb.is_hidden());
    }
}
