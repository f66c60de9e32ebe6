//! Display functions for command results

use super::formatters::{colored_guess, create_progress_bar, percent};
use crate::commands::SimulationReport;
use crate::core::Placing;
use crate::game::Game;
use crate::solver::learning::TrainingReport;
use colored::Colorize;

/// Print the result of a simulation run
pub fn print_simulation_report(report: &SimulationReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} on {} ",
        "SIMULATION:".bright_cyan().bold(),
        report.algorithm.bright_yellow().bold(),
        report.variant.to_string().bright_yellow()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Results:".bright_cyan().bold());
    println!("   Games played:     {}", report.games);
    println!(
        "   Wins:             {} ({})",
        format!("{}", report.wins).green().bold(),
        percent(report.win_rate() * 100.0).trim_start()
    );
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", report.average_guesses()).bright_yellow().bold()
    );
    println!("   Time taken:       {:.2}s", report.duration.as_secs_f64());

    println!("\n🔤 {}", "Letters:".bright_cyan().bold());
    for (placing, label) in [
        (Placing::Correct, "Correct".green()),
        (Placing::Misplaced, "Misplaced".yellow()),
        (Placing::Incorrect, "Incorrect".bright_black()),
    ] {
        let pct = report.placing_percent(placing);
        println!(
            "   {label:<10} {} {}",
            create_progress_bar(pct, 100.0, 30),
            percent(pct)
        );
    }

    if report.games == 0 {
        return;
    }
    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (&guesses, &count) in &report.distribution {
        let pct = count as f64 * 100.0 / report.games as f64;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {guesses}: {} {count:4} ({})", bar.green(), percent(pct).trim_start());
    }
}

/// Print a self-play training summary
pub fn print_training_report(name: &str, report: &TrainingReport) {
    println!(
        "🧠 Trained {} for {} episodes: {} won, mean reward {:.2}, epsilon {:.3}",
        name.bright_yellow(),
        report.episodes,
        percent(report.win_rate() * 100.0).trim_start(),
        report.mean_reward,
        report.final_epsilon
    );
}

/// Print every guess of a game with coloured feedback
pub fn print_game_transcript(game: &Game) {
    for (turn, (guess, pattern)) in game.history().iter().enumerate() {
        println!("   {}: {}", turn + 1, colored_guess(guess, *pattern));
    }
    let verdict = if game.is_won() {
        format!("✅ Solved in {} guesses", game.turn_number()).green().bold()
    } else {
        format!("❌ Not solved in {} guesses", game.turn_number()).red().bold()
    };
    match game.secret() {
        Some(secret) => println!("   {verdict} (secret {})", secret.text().to_uppercase()),
        None => println!("   {verdict}"),
    }
}
