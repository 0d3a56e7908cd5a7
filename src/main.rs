//! Mau Mau CLI - plays one game in the terminal.

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use mau_mau::{ConsoleDisplay, GameFactory, GameResult, MauMauFactory, Settings};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "mau-mau")]
#[command(about = "Play a game of Mau Mau between computer players")]
struct Args {
    /// JSON settings file (rules and game loop)
    #[arg(short, long)]
    config: Option<String>,

    /// Game seed - the same seed replays the same game
    #[arg(long)]
    seed: Option<u64>,

    /// Comma-separated player names, in seating order
    #[arg(long, value_delimiter = ',', default_value = "Alice,Bob,Carol,Eve")]
    players: Vec<String>,

    /// Pause between turns in milliseconds (overrides the settings file)
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Silent by default; RUST_LOG takes precedence over --verbose.
    let filter = if args.verbose { "debug" } else { "warn" };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    match play(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "game aborted");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn play(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let mut settings = match &args.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    if let Some(ms) = args.delay_ms {
        settings.game.turn_delay_ms = ms;
    }

    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed, players = args.players.len(), "starting game");

    let factory = MauMauFactory::new(settings, Arc::new(ConsoleDisplay))?;
    let mut game = factory.create_game(seed)?;

    for name in &args.players {
        let joined = factory
            .create_player(name)
            .map_err(Box::<dyn std::error::Error>::from)
            .and_then(|player| game.join(player).map_err(Into::into));
        if let Err(e) = joined {
            warn!(player = %name, error = %e, "could not join");
            eprintln!("{name} could not join: {e}");
        }
    }

    let summary = game.run()?;
    match summary.result {
        GameResult::Winner(seat) => info!(%seat, rounds = summary.rounds, "finished"),
        GameResult::Stalemate => info!(rounds = summary.rounds, "finished without a winner"),
    }
    println!("Seed: {seed}");
    Ok(())
}
