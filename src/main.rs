use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use snake_core::Position;
use snake_engine::{play_game, EngineConfig, Searcher};
use snake_uci::UciEngine;

#[derive(Parser)]
#[command(name = "snake")]
#[command(about = "Fixed-depth alpha-beta chess engine", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Speak UCI on stdin/stdout (the default)
    Uci {
        #[command(flatten)]
        engine: EngineArgs,
    },

    /// Play a game against itself and print every move
    Selfplay {
        #[command(flatten)]
        engine: EngineArgs,

        /// Start from this FEN instead of the initial position
        #[arg(long)]
        fen: Option<String>,

        /// Stop after this many plies
        #[arg(long)]
        max_plies: Option<u32>,
    },
}

#[derive(clap::Args)]
struct EngineArgs {
    /// Plies searched per move
    #[arg(long, default_value_t = snake_engine::config::DEFAULT_DEPTH,
          value_parser = clap::value_parser!(u8).range(1..))]
    depth: u8,

    /// Seed for the evaluation jitter
    #[arg(long)]
    seed: Option<u64>,

    /// Disable the evaluation jitter
    #[arg(long)]
    no_jitter: bool,
}

impl EngineArgs {
    fn config(&self) -> EngineConfig {
        EngineConfig {
            depth: self.depth,
            seed: self.seed,
            jitter: !self.no_jitter,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        None => run_uci(EngineConfig::default()),
        Some(Commands::Uci { engine }) => run_uci(engine.config()),
        Some(Commands::Selfplay {
            engine,
            fen,
            max_plies,
        }) => selfplay(engine.config(), fen.as_deref(), max_plies),
    }
}

fn run_uci(config: EngineConfig) -> Result<()> {
    info!(?config, "snake starting");
    UciEngine::new(config).run()?;
    Ok(())
}

fn selfplay(config: EngineConfig, fen: Option<&str>, max_plies: Option<u32>) -> Result<()> {
    let mut position = match fen {
        Some(fen) => fen.parse::<Position>().context("invalid --fen")?,
        None => Position::new(),
    };
    info!(?config, fen = %position, "self-play starting");

    let mut searcher = Searcher::new(&config);
    let start_ply = position.ply();
    let record = play_game(&mut position, &mut searcher, start_ply, max_plies, |ply| {
        println!("Move #{} - {} | {}", ply.move_number(), ply.mv, ply.score);
    })?;

    println!("######################################");
    println!("{}", record.final_eval);
    match record.outcome {
        Some(outcome) => println!("{} {}", outcome.result(), outcome.termination),
        None => println!("* stopped after {} plies", record.moves.len()),
    }
    println!("Time taken: {:?}", record.elapsed);
    Ok(())
}
