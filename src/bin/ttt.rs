//! ttt - inspect and exercise the tic-tac-toe minimax agent
//!
//! This CLI provides:
//! - The agent's decision for any position, with all equally good moves
//! - Agent-versus-agent matches from the empty board

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ttt")]
#[command(version, about = "Minimax tic-tac-toe agent", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the move the agent would play in a position
    Analyze(tictactoe_agent::cli::commands::analyze::AnalyzeArgs),

    /// Play the agent against itself
    Selfplay(tictactoe_agent::cli::commands::selfplay::SelfplayArgs),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze(args) => tictactoe_agent::cli::commands::analyze::execute(args),
        Commands::Selfplay(args) => tictactoe_agent::cli::commands::selfplay::execute(args),
    }
}
