//! CLI frontend for the Wallbound adventure game.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "wallbound",
    about = "Wallbound — a walled-city text adventure",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive session
    Play {
        /// World template JSON file
        #[arg(short, long, default_value = "custom.json")]
        world: PathBuf,

        /// Save store JSON file
        #[arg(short, long, default_value = "save.json")]
        save: PathBuf,

        /// Username (prompted for when omitted)
        #[arg(short, long)]
        username: Option<String>,

        /// RNG seed for a reproducible fresh-start location
        #[arg(long)]
        seed: Option<u64>,

        /// Also persist a snapshot when quitting
        #[arg(long)]
        save_on_quit: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play {
            world,
            save,
            username,
            seed,
            save_on_quit,
        } => commands::play::run(&world, &save, username.as_deref(), seed, save_on_quit),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
