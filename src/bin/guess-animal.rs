//! guess-animal - The animal guessing game that learns as you play
//!
//! Think of an animal; the program asks yes/no questions and guesses. When it
//! gets it wrong, it asks you how to tell your animal apart and remembers.

use anyhow::Result;
use clap::{Parser, Subcommand};
use guess_animal::cli::{
    commands::{export, play, show},
    init_logging,
};

#[derive(Parser)]
#[command(name = "guess-animal")]
#[command(version, about = "Animal guessing game that learns from its mistakes", long_about = None)]
struct Cli {
    /// Log traversal, learning and persistence details to stderr
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the game (default)
    Play(play::PlayArgs),

    /// Print the saved knowledge tree
    Show(show::ShowArgs),

    /// Convert the save file to another format
    Export(export::ExportArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        None => play::execute(play::PlayArgs::default()),
        Some(Commands::Play(args)) => play::execute(args),
        Some(Commands::Show(args)) => show::execute(args),
        Some(Commands::Export(args)) => export::execute(args),
    }
}
