//! Boggle Solver - CLI
//!
//! Play scored rounds against the computer, check whether words are
//! traceable on a board, or list every dictionary word a board holds.

use anyhow::Result;
use boggle_solver::{
    board::{Board, DEFAULT_SIDE},
    commands::{check_words, run_discover, run_play},
    dictionary::{STARTER, WordStore, load_store, save_store},
    output::{print_board, print_check_outcomes, print_discover_result},
};
use clap::{Parser, Subcommand};
use std::path::Path;

#[derive(Parser)]
#[command(
    name = "boggle_solver",
    about = "Boggle word finder with a learning dictionary and scored rounds",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary file (missing files start a session from the built-in list)
    #[arg(short, long, global = true, default_value = "dictionary.txt")]
    dictionary: String,

    /// Difficulty 1-10: chance in ten that an entered word is learned
    #[arg(short = 'f', long, global = true, default_value_t = 5)]
    difficulty: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Play rounds against the computer (default)
    Play,

    /// Check whether words are traceable on a board
    Check {
        /// Words to check, space or punctuation separated
        words: String,

        /// Preset board rows, comma separated (e.g. "cat,ogr,din")
        #[arg(short, long)]
        board: Option<String>,

        /// Side length for a random board
        #[arg(short, long, default_value_t = DEFAULT_SIDE)]
        size: usize,
    },

    /// Find every dictionary word on a board
    Discover {
        /// Preset board rows, comma separated (e.g. "cat,ogr,din")
        #[arg(short, long)]
        board: Option<String>,

        /// Side length for a random board
        #[arg(short, long, default_value_t = DEFAULT_SIDE)]
        size: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut rng = rand::rng();

    let store = load_dictionary(&cli.dictionary, cli.difficulty);
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let store = run_play(store, &mut rng).map_err(|e| anyhow::anyhow!(e))?;
            match save_store(&cli.dictionary, &store, &mut rng) {
                Ok(count) => println!("Saved {count} words to {}", cli.dictionary),
                Err(e) => eprintln!("warning: could not save dictionary {}: {e}", cli.dictionary),
            }
            Ok(())
        }
        Commands::Check { words, board, size } => {
            let board = resolve_board(board.as_deref(), size, &mut rng)?;
            print_board(&board);
            println!();
            let outcomes = check_words(&words, &board, &store);
            print_check_outcomes(&outcomes);
            Ok(())
        }
        Commands::Discover { board, size } => {
            let board = resolve_board(board.as_deref(), size, &mut rng)?;
            print_board(&board);
            println!();
            let result = run_discover(&board, &store);
            print_discover_result(&result);
            Ok(())
        }
    }
}

/// Load the dictionary, downgrading read failures to a warning
///
/// A missing file seeds the session from the embedded starter list so
/// discovery has candidates on first run; any other read failure starts
/// empty and keeps going.
fn load_dictionary(path: &str, difficulty: u8) -> WordStore {
    let mut store = if Path::new(path).exists() {
        match load_store(path) {
            Ok(store) => store,
            Err(e) => {
                eprintln!("warning: could not read dictionary {path}: {e}; starting empty");
                WordStore::new()
            }
        }
    } else {
        WordStore::from_words(STARTER.iter().copied())
    };

    store.set_difficulty(difficulty);
    store
}

/// Build a preset board from comma-separated rows, or generate one
fn resolve_board(
    rows: Option<&str>,
    size: usize,
    rng: &mut impl rand::Rng,
) -> Result<Board> {
    match rows {
        Some(rows) => {
            let rows: Vec<&str> = rows
                .split([',', ' '])
                .filter(|row| !row.is_empty())
                .collect();
            Board::from_rows(&rows).map_err(Into::into)
        }
        None => Ok(Board::random_with_side(size, rng)),
    }
}
