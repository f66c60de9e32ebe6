//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;
mod progress;

pub use display::{print_game_transcript, print_simulation_report, print_training_report};
pub use progress::progress_bar;
