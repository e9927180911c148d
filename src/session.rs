use std::thread;
use std::time::{Duration, Instant};

use crate::display;
use crate::generators;
use crate::models::{Difficulty, ScoreEntry};
use crate::scores::{self, HighScores};

/// Mutable per-session counters, threaded through the loop explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionState {
    pub score: u32,
    pub streak: u32,
    pub answered: u32,
    pub correct: u32,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Percentage of correct answers, rounded to one decimal. Zero if no
    /// question was answered.
    pub fn accuracy(&self) -> f64 {
        if self.answered == 0 {
            return 0.0;
        }
        let pct = self.correct as f64 / self.answered as f64 * 100.0;
        (pct * 10.0).round() / 10.0
    }
}

/// Outcome of grading one line of input against the pending question.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RoundOutcome {
    /// Exit sentinel; the pending question is not scored.
    Quit,
    /// Not a number and not the sentinel; state is untouched.
    Invalid,
    Correct { points: u32 },
    Incorrect { expected: f64 },
}

/// Grades one answer and updates the session counters. Correct within a
/// strict 0.01 tolerance; the streak bonus uses the incremented streak.
pub fn grade(state: &mut SessionState, input: &str, expected: f64) -> RoundOutcome {
    let input = input.trim();
    if input.eq_ignore_ascii_case("q") {
        return RoundOutcome::Quit;
    }

    let value: f64 = match input.parse() {
        Ok(v) => v,
        Err(_) => return RoundOutcome::Invalid,
    };

    state.answered += 1;
    if (value - expected).abs() < 0.01 {
        state.correct += 1;
        state.streak += 1;
        let bonus = (state.streak / 3).max(1);
        let points = 10 * bonus;
        state.score += points;
        RoundOutcome::Correct { points }
    } else {
        state.streak = 0;
        RoundOutcome::Incorrect { expected }
    }
}

/// Runs one game session: question loop, soft deadline, and score recording
/// for timed games. Quitting with the sentinel abandons the session without
/// recording an entry.
pub fn play(difficulty: Difficulty, practice_mode: bool, scores: &mut HighScores) {
    display::clear_screen();
    display::show_instructions();
    display::clear_screen();

    let time_limit = if practice_mode {
        None
    } else {
        Some(Duration::from_secs(difficulty.time_limit_secs()))
    };
    let start = Instant::now();
    let mut state = SessionState::new();

    loop {
        // Soft deadline: only checked between rounds, so a slow answer can
        // run past it by one question.
        if let Some(limit) = time_limit {
            if start.elapsed() >= limit {
                break;
            }
        }

        let question = generators::generate_for_tier(difficulty);
        let remaining = time_limit.map(|limit| limit.saturating_sub(start.elapsed()));
        display::show_round_status(remaining, &state);
        println!("\n{}", question.prompt);
        display::show_answer_prompt();

        let input = match display::read_line() {
            Some(line) => line,
            None => return,
        };

        match grade(&mut state, &input, question.answer) {
            RoundOutcome::Quit => {
                println!("\nSession ended by player");
                thread::sleep(Duration::from_secs(1));
                return;
            }
            RoundOutcome::Correct { points } => {
                println!("\nCorrect! +{} points", points);
            }
            RoundOutcome::Incorrect { expected } => {
                println!("\nIncorrect. The correct answer was {}", expected);
            }
            RoundOutcome::Invalid => {
                println!("\nPlease enter a number");
            }
        }

        thread::sleep(Duration::from_secs(1));
        display::clear_screen();
    }

    if !practice_mode {
        let entry = ScoreEntry::new(state.score, state.accuracy());
        scores::record(scores, difficulty, entry);
        if let Err(e) = scores::save(&scores::scores_path(), scores) {
            eprintln!("Failed to save high scores: {}", e);
        }
        display::show_session_summary(&state);
    }
}
