//! Wordle Arena - CLI
//!
//! Plays one algorithm through many games of a Wordle-family variant and
//! reports how it did.

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use wordle_arena::{
    commands::run_simulation,
    game::{Game, GameConfig, NoiseWeights, VariantKind, Vocabulary, VocabularySource},
    output::{print_game_transcript, print_simulation_report, print_training_report},
    seed::derive_seed,
    solver::{OpeningBook, Strategy, StrategyConfig, StrategyType},
    wordlists::loader::load_from_file,
};

#[derive(Parser)]
#[command(
    name = "wordle_arena",
    about = "Simulate Wordle-family games and evaluate the algorithms that play them",
    version,
    author
)]
struct Cli {
    /// Newline-delimited list of legal guesses
    #[arg(long)]
    legal: PathBuf,

    /// Newline-delimited list of possible secrets
    #[arg(long)]
    secret: PathBuf,

    /// Variant: basic, absurdle, yellow, noisy, vocabulary
    #[arg(long, default_value = "basic")]
    variant: String,

    /// Algorithm: random, total-random, minimax, alphabeta, expectimax, entropy,
    /// weighted-entropy, q-learning, approx-q-learning
    #[arg(short, long, default_value = "entropy")]
    algorithm: String,

    /// Number of games to play
    #[arg(short = 'n', long, default_value_t = 100)]
    games: usize,

    /// Guesser turns searched ahead by minimax, alphabeta and expectimax
    #[arg(long, default_value_t = 2)]
    depth: usize,

    #[arg(long, default_value_t = 6)]
    max_turns: usize,

    /// Seed for every random choice; omit for a different run each time
    #[arg(long)]
    seed: Option<u64>,

    /// Legal-list size for the vocabulary variant
    #[arg(long, default_value_t = 1000)]
    vocab_size: usize,

    /// Use random letter strings instead of real words for the vocabulary variant
    #[arg(long)]
    synthetic: bool,

    /// Noisy variant: flip one letter uniformly instead of mostly keeping it
    #[arg(long)]
    uniform_noise: bool,

    /// Self-play episodes for the learning algorithms
    #[arg(long)]
    episodes: Option<usize>,

    /// Wall-clock budget per search move, in milliseconds
    #[arg(long)]
    time_budget_ms: Option<u64>,

    /// Print the guesses of the last game
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let legal = load_from_file(&cli.legal)
        .with_context(|| format!("reading legal words from {}", cli.legal.display()))?;
    let secret = load_from_file(&cli.secret)
        .with_context(|| format!("reading secret words from {}", cli.secret.display()))?;
    let vocabulary = Arc::new(Vocabulary::new(legal, secret).context("building the vocabulary")?);

    let kind = VariantKind::from_name(&cli.variant).ok_or_else(|| {
        anyhow!(
            "unknown variant '{}' (expected one of: {})",
            cli.variant,
            VariantKind::ALL.map(VariantKind::name).join(", ")
        )
    })?;

    let source = if cli.synthetic {
        VocabularySource::Synthetic
    } else {
        VocabularySource::Real
    };
    let noise = if cli.uniform_noise {
        NoiseWeights::uniform_flip()
    } else {
        NoiseWeights::default()
    };
    let game_config = GameConfig::default()
        .with_max_turns(cli.max_turns)
        .with_noise(noise)
        .with_vocabulary(cli.vocab_size, source)
        .with_seed(cli.seed);
    let mut game = Game::new(kind, vocabulary, &game_config).context("creating the game")?;

    let openings = OpeningBook::standard()
        .precompute(&game)
        .context("precomputing opening guesses")?;
    let strategy_config = StrategyConfig::default()
        .with_depth(cli.depth)
        .with_time_budget(cli.time_budget_ms.map(Duration::from_millis))
        .with_seed(derive_seed(cli.seed, 1))
        .with_openings(Arc::new(openings));
    let mut strategy = StrategyType::from_name(&cli.algorithm, &strategy_config)?;

    if strategy.needs_training() {
        println!("🧠 Training {} by self-play...", strategy.name());
    }
    if let Some(report) = strategy
        .train(&game, cli.episodes, true)
        .context("training")?
    {
        print_training_report(strategy.name(), &report);
    }

    println!(
        "🎯 Playing {} games of {} with {}...",
        cli.games,
        kind,
        strategy.name()
    );
    let report = run_simulation(&mut game, &mut strategy, cli.games, true)
        .context("simulation failed")?;

    if cli.verbose && cli.games > 0 {
        println!("\nLast game:");
        print_game_transcript(&game);
    }
    print_simulation_report(&report);
    Ok(())
}
