//! Arena CLI
//!
//! Play batches of sliding-tile games with automated players and report the
//! scores they reach.

use std::path::PathBuf;

use anyhow::{Context, Result};
use arena::{run_arena, ArenaConfig, PlayerKind, PlayerSpec, Report, SessionConfig};
use clap::{Parser, Subcommand};
use search_core::SearchConfig;
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "arena", about = "Plays sliding-tile games with automated players")]
struct Cli {
    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Play a batch of games with a single player
    Play {
        #[arg(long, value_enum, default_value = "expectimax")]
        player: PlayerKind,
        #[arg(long, default_value_t = 25)]
        games: u32,
        /// Search depth in full moves
        #[arg(long, default_value_t = 2)]
        depth: u32,
        #[arg(long, default_value_t = 4)]
        width: usize,
        #[arg(long, default_value_t = 4)]
        height: usize,
        #[arg(long)]
        seed: Option<u64>,
        /// Heuristic preset (snake, smooth, empty, balanced)
        #[arg(long)]
        preset: Option<String>,
        /// Choose the depth from the number of empty cells
        #[arg(long)]
        adaptive: bool,
        #[arg(long, default_value_t = 10_000)]
        max_moves: u32,
        /// Stop a game once this tile appears
        #[arg(long)]
        target: Option<u32>,
        /// Write the JSON report here
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Compare every player listed in a TOML config
    Compare {
        #[arg(long)]
        config: PathBuf,
        /// Override the number of games per player
        #[arg(long)]
        games: Option<u32>,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Print a saved JSON report
    Show { path: PathBuf },
}

fn init_tracing(level: &str) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let report = match cli.command {
        Command::Play {
            player,
            games,
            depth,
            width,
            height,
            seed,
            preset,
            adaptive,
            max_moves,
            target,
            output,
        } => {
            let mut spec = PlayerSpec::new(player);
            spec.preset = preset;
            spec.adaptive = adaptive;
            spec.seed = seed;
            spec.search = SearchConfig::depth(depth);
            if let Some(seed) = seed {
                spec.search = spec.search.with_seed(seed);
            }

            let config = ArenaConfig {
                name: format!("{player:?} x{games}").to_lowercase(),
                output,
                session: SessionConfig {
                    games,
                    width,
                    height,
                    seed,
                    max_moves,
                    target,
                },
                players: vec![spec],
            };
            run_arena(&config)?
        }
        Command::Compare {
            config,
            games,
            seed,
            output,
        } => {
            let mut config = ArenaConfig::load(&config)?;
            if let Some(games) = games {
                config.session.games = games;
            }
            if seed.is_some() {
                config.session.seed = seed;
            }
            if output.is_some() {
                config.output = output;
            }
            info!(name = %config.name, players = config.players.len(), "running arena");
            run_arena(&config)?
        }
        Command::Show { path } => {
            Report::load(&path).with_context(|| format!("cannot show {}", path.display()))?
        }
    };

    report.print_report();
    Ok(())
}
