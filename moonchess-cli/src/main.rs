//! Moon Chess CLI - terminal front end
//!
//! Commands:
//! - play: interactive game against another human or a bot
//! - match: pit the two bot tiers against each other

use clap::{Parser, Subcommand};

mod match_cmd;
mod play;

#[derive(Parser)]
#[command(name = "moonchess")]
#[command(about = "Tic-tac-toe with piece aging")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive game in the terminal
    Play(play::PlayArgs),
    /// Play bot-vs-bot games and report the results
    Match(match_cmd::MatchArgs),
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => play::run(args),
        Commands::Match(args) => match_cmd::run(args),
    }
}
