use rand::Rng;

use super::Question;
use crate::models::Difficulty;

/// Shows the first five terms of an arithmetic or geometric progression and
/// asks for the sixth. Parameters are fixed small ranges regardless of tier.
pub fn generate(_difficulty: Difficulty) -> Question {
    let mut rng = rand::rng();

    let (terms, next, kind) = if rng.random_bool(0.5) {
        let step: i64 = rng.random_range(1..=5);
        let start: i64 = rng.random_range(0..=10);
        let terms: Vec<i64> = (0..5).map(|i| start + step * i).collect();
        (terms, start + step * 5, "arithmetic")
    } else {
        let ratio: i64 = rng.random_range(2..=3);
        let start: i64 = rng.random_range(1..=5);
        let terms: Vec<i64> = (0..5).map(|i| start * ratio.pow(i)).collect();
        (terms, start * ratio.pow(5), "geometric")
    };

    let rendered: Vec<String> = terms.iter().map(|t| t.to_string()).collect();
    Question {
        prompt: format!(
            "Continue the {} sequence:\n{}, ...",
            kind,
            rendered.join(", ")
        ),
        answer: next as f64,
    }
}
