//! Display functions for command results

use super::formatters::{count_label, format_word_columns};
use crate::board::Board;
use crate::commands::{CheckOutcome, DiscoverResult};
use crate::core::WordSet;
use crate::game::RoundSummary;
use colored::Colorize;

/// Words shown per row when listing a set
const WORDS_PER_ROW: usize = 6;

/// Print the board as an uppercase letter grid
pub fn print_board(board: &Board) {
    for line in board.to_string().lines() {
        println!("  {}", line.trim_end().bright_white().bold());
    }
}

/// Print a labeled word set, or a dash when it is empty
pub fn print_word_set(label: &str, words: &WordSet) {
    if words.is_empty() {
        println!("{}: {}", label.bold(), "-".bright_black());
    } else {
        println!("{} ({}):", label.bold(), count_label(words.len() as u32, "word"));
        for line in format_word_columns(words, WORDS_PER_ROW).lines() {
            println!("  {line}");
        }
    }
}

/// Print per-word check verdicts
pub fn print_check_outcomes(outcomes: &[CheckOutcome]) {
    if outcomes.is_empty() {
        println!("{}", "No words to check".yellow());
        return;
    }

    for outcome in outcomes {
        let placement = if outcome.on_board {
            "on the board".green()
        } else {
            "not on the board".red()
        };
        let membership = if outcome.in_dictionary {
            "in the dictionary".green()
        } else {
            "not in the dictionary".bright_black()
        };
        println!(
            "  {}: {placement}, {membership}",
            outcome.word.to_uppercase().bold()
        );
    }
}

/// Print the discovery result with its score
pub fn print_discover_result(result: &DiscoverResult) {
    if result.words.is_empty() {
        println!("{}", "No dictionary words on this board".yellow());
        return;
    }

    print_word_set("Words on the board", &result.words);
    println!(
        "Total: {}",
        count_label(result.score, "point").bright_yellow().bold()
    );
}

/// Print the end-of-round classification and score table
pub fn print_round_summary(summary: &RoundSummary) {
    println!("{}", format!("Round {} results", summary.round).bold());
    println!("{}", "─".repeat(40).cyan());

    print_word_set("Only you found", &summary.human_unique);
    print_word_set("Only the computer found", &summary.computer_unique);
    print_word_set("Both found (no score)", &summary.common);

    println!("{}", "─".repeat(40).cyan());
    println!(
        "You: {} this round, {} total",
        count_label(summary.human_round_score, "point").bright_yellow(),
        count_label(summary.human_total, "point").bright_yellow()
    );
    println!(
        "Computer: {} this round, {} total",
        count_label(summary.computer_round_score, "point").bright_yellow(),
        count_label(summary.computer_total, "point").bright_yellow()
    );
}
