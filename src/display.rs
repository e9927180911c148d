use std::io::{self, BufRead, Write};
use std::time::Duration;

use crate::models::{Difficulty, ALL_DIFFICULTIES};
use crate::scores::{self, HighScores};
use crate::session::SessionState;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn clear_screen() {
    // ANSI: clear and move the cursor home
    print!("\x1B[2J\x1B[1;1H");
    let _ = io::stdout().flush();
}

/// Reads one trimmed line from stdin. None means stdin is closed.
pub fn read_line() -> Option<String> {
    let mut line = String::new();
    match io::stdin().lock().read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim().to_string()),
    }
}

pub fn show_title() {
    clear_screen();
    println!("{}", "=".repeat(60));
    println!("  MATH QUIZ");
    println!("{}", "=".repeat(60));
    println!("Version: {}", VERSION);
}

pub fn show_main_menu() {
    println!("\nMain menu:");
    println!("1. Start game");
    println!("2. High scores");
    println!("3. About");
    println!("4. Quit");
}

pub fn show_game_modes() {
    println!("\nGame modes:");
    println!("1. Standard mode - solve problems against the clock");
    println!("2. Practice mode - no time limit");
}

pub fn show_difficulty_menu() {
    println!("\nChoose a difficulty level:");
    for diff in ALL_DIFFICULTIES {
        let (low, high) = diff.range();
        println!("\n{}. {}:", diff.key(), diff.display_name());
        println!("  - Number range: {}-{}", low, high);
        println!("  - Time: {} seconds", diff.time_limit_secs());
        println!("  - Question types:");
        for kind in diff.question_kinds() {
            println!("      {}", kind.description());
        }
    }
}

pub fn show_instructions() {
    println!("\nDuring the game:");
    println!("  - Type a number to answer the question");
    println!("  - Type q to return to the main menu");
    println!("\nPress Enter to start...");
    read_line();
}

/// Status block shown above each question. `remaining` is None in practice
/// mode.
pub fn show_round_status(remaining: Option<Duration>, state: &SessionState) {
    println!("\n{}", "=".repeat(50));
    match remaining {
        Some(left) => println!("Time: {}s", left.as_secs_f64().round() as u64),
        None => println!("Time: ∞"),
    }
    println!("Score: {} (Streak: {})", state.score, state.streak);
    println!("{}", "=".repeat(50));
}

pub fn show_answer_prompt() {
    print!("\n[answer/q to quit] > ");
    let _ = io::stdout().flush();
}

pub fn show_session_summary(state: &SessionState) {
    println!("\nGame over!");
    println!("Final score: {}", state.score);
    println!("Correct answers: {}/{}", state.correct, state.answered);
    println!("\nPress Enter to continue...");
    read_line();
}

/// High-score table, one tier or all of them. Shows the top 5 per tier.
pub fn show_high_scores(high_scores: &HighScores, difficulty: Option<Difficulty>) {
    println!("\nHigh scores");

    let tiers: Vec<Difficulty> = match difficulty {
        Some(d) => vec![d],
        None => ALL_DIFFICULTIES.to_vec(),
    };

    for diff in tiers {
        println!("\n{} level:", diff.display_name());
        let entries = scores::top(high_scores, diff, 5);
        if entries.is_empty() {
            println!("No scores yet!");
        } else {
            for (i, entry) in entries.iter().enumerate() {
                println!(
                    "{}. Score: {}, Accuracy: {}%, Date: {}",
                    i + 1,
                    entry.score,
                    entry.accuracy,
                    entry.date
                );
            }
        }
    }
}

pub fn show_info() {
    clear_screen();
    println!("\nAbout:");
    println!("Math Quiz is an interactive quiz that helps you");
    println!("sharpen your mental arithmetic.");

    println!("\nQuestion types:");
    for kind in Difficulty::Hard.question_kinds() {
        println!("  - {}", kind.description());
    }

    println!("\nDifficulty levels:");
    for diff in ALL_DIFFICULTIES {
        let (low, high) = diff.range();
        println!("\n{}:", diff.display_name());
        println!("  - Number range: {}-{}", low, high);
        println!("  - Time: {} seconds", diff.time_limit_secs());
    }
}
