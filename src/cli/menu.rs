use std::io::{self, Write};

use crate::display;
use crate::models::Difficulty;
use crate::scores;
use crate::session;

/// Prints a prompt and reads one line. None means stdin is closed.
fn prompt(text: &str) -> Option<String> {
    print!("{}", text);
    let _ = io::stdout().flush();
    display::read_line()
}

fn prompt_main_menu() -> Option<String> {
    loop {
        let choice = prompt("\nChoose an option (1-4): ")?;
        match choice.as_str() {
            "1" | "2" | "3" | "4" => return Some(choice),
            _ => println!("Please choose 1, 2, 3 or 4"),
        }
    }
}

/// Returns true for practice mode.
fn prompt_game_mode() -> Option<bool> {
    display::show_game_modes();
    loop {
        let mode = prompt("\nChoose a mode (1/2): ")?;
        match mode.as_str() {
            "1" => return Some(false),
            "2" => return Some(true),
            _ => println!("Please choose 1 or 2"),
        }
    }
}

fn prompt_difficulty() -> Option<Difficulty> {
    display::show_difficulty_menu();
    loop {
        let choice = prompt("\nYour choice (1-3): ")?;
        match Difficulty::from_key(&choice) {
            Some(diff) => return Some(diff),
            None => println!("Please choose 1, 2 or 3"),
        }
    }
}

/// Top-level interactive loop. High scores stay loaded for the whole run
/// and are flushed by the session after each completed timed game.
pub fn run_menu() {
    let mut high_scores = scores::load(&scores::scores_path());

    loop {
        display::show_title();
        display::show_main_menu();

        let choice = match prompt_main_menu() {
            Some(c) => c,
            None => return,
        };

        match choice.as_str() {
            "1" => {
                let practice_mode = match prompt_game_mode() {
                    Some(p) => p,
                    None => return,
                };
                let difficulty = match prompt_difficulty() {
                    Some(d) => d,
                    None => return,
                };
                session::play(difficulty, practice_mode, &mut high_scores);
            }
            "2" => {
                display::clear_screen();
                display::show_high_scores(&high_scores, None);
                prompt("\nPress Enter to continue...");
            }
            "3" => {
                display::show_info();
                prompt("\nPress Enter to return to the main menu...");
            }
            _ => {
                display::clear_screen();
                println!("\nThanks for playing! Goodbye!");
                return;
            }
        }
    }
}
