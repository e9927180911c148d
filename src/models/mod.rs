pub mod difficulty;
pub mod score;

pub use difficulty::{Difficulty, Operation, ALL_DIFFICULTIES};
pub use score::ScoreEntry;
