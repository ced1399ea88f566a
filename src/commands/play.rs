//! Interactive play mode
//!
//! Human-versus-computer rounds on stdin/stdout: enter words while looking
//! at the board, let the computer take its discovery turn, reject words you
//! dispute, and watch only unique finds score.

use crate::dictionary::WordStore;
use crate::game::Game;
use crate::game::Player;
use crate::output::{print_board, print_round_summary, print_word_set};
use colored::Colorize;
use rand::Rng;
use std::io::{self, Write};

/// Run interactive rounds until the player stops
///
/// Returns the dictionary (with everything learned this session) so the
/// caller can save it.
///
/// # Errors
///
/// Returns an error if reading user input fails.
pub fn run_play<R: Rng>(store: WordStore, rng: &mut R) -> Result<WordStore, String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                  Boggle - Interactive Mode                   ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Find words along paths of adjacent letters; each cell counts once.");
    println!("Enter words line by line, a blank line ends your turn.");
    println!("Words only you found score; ties with the computer cancel out.\n");

    let mut game = Game::new(store, rng);

    loop {
        println!("{}", format!("Round {}", game.round()).bold());
        println!();
        print_board(game.board());
        println!();

        // Human turn: lines of words until a blank line
        loop {
            let line = get_user_input("Words (blank to end turn)")?;
            if line.is_empty() {
                break;
            }
            game.human_turn(&line, rng);
        }

        if !game.human().invalid_words().is_empty() {
            println!();
            print_word_set("Not on the board", game.human().invalid_words());
        }

        game.computer_turn(rng);
        println!();
        print_word_set("Your words", game.human().words());
        print_word_set("Computer words", game.computer().words());
        println!();

        let to_reject = get_user_input("Words to reject (blank for none)")?;
        if !to_reject.is_empty() {
            game.reject_words(&to_reject);
        }

        let summary = game.finish_round();
        println!();
        print_round_summary(&summary);
        println!();

        match get_user_input("Play another round? (yes/no)")?
            .to_lowercase()
            .as_str()
        {
            "yes" | "y" => {
                game.new_round(rng);
                println!();
            }
            _ => {
                println!("\n{}", "Thanks for playing!".bright_green());
                return Ok(game.into_store());
            }
        }
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
