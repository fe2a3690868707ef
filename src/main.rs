//! Guess My Word - CLI
//!
//! Prompt-driven play by default, a full-screen board with `tui`, and a
//! one-off scorer with `score`.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use guess_my_word::{
    commands::{run_play, score_words},
    game::{GameConfig, MAX_ATTEMPTS},
    logging,
    wordlists::WordLists,
};
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "guess_my_word",
    about = "Guess the 5-letter word of the day in six attempts",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// File of words accepted as guesses (default: built-in list)
    #[arg(short, long, global = true)]
    dictionary: Option<PathBuf>,

    /// File of candidate words of the day (default: built-in list)
    #[arg(short, long, global = true)]
    targets: Option<PathBuf>,

    /// Seed for choosing the word of the day
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Mirror the letters not in the word of the day to this file
    #[arg(short, long, global = true)]
    miss_log: Option<PathBuf>,

    /// Attempts per game
    #[arg(
        long,
        global = true,
        default_value_t = MAX_ATTEMPTS as u8,
        value_parser = clap::value_parser!(u8).range(1..)
    )]
    max_attempts: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Play in the terminal with text prompts (default)
    Play {
        /// Player name (skips the name prompt)
        #[arg(short, long)]
        name: Option<String>,
    },

    /// Play on a full-screen board
    Tui,

    /// Score a guess against a target without playing
    Score {
        /// The guessed word
        guess: String,

        /// The word to score against
        target: String,
    },
}

fn main() -> Result<()> {
    logging::init();
    let cli = Cli::parse();

    let command = cli.command.unwrap_or(Commands::Play { name: None });

    if let Commands::Score { guess, target } = &command {
        let report = score_words(guess, target)?;
        println!("{}", report.render());
        return Ok(());
    }

    let lists = WordLists::load(cli.dictionary.as_deref(), cli.targets.as_deref())
        .context("cannot start without a dictionary and a target list")?;

    let mut config = GameConfig {
        max_attempts: usize::from(cli.max_attempts),
        seed: cli.seed,
        miss_log: cli.miss_log,
        ..GameConfig::new()
    };

    match command {
        Commands::Play { name } => {
            config.player_name = name;
            run_play(&lists, &config, io::stdin().lock(), io::stdout())?;
            Ok(())
        }
        Commands::Tui => run_tui_command(&lists, &config),
        Commands::Score { .. } => Ok(()),
    }
}

fn run_tui_command(lists: &WordLists, config: &GameConfig) -> Result<()> {
    use guess_my_word::interactive::{App, run_tui};

    let app = App::new(lists, config)?;
    run_tui(app)
}
