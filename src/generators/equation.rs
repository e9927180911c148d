use rand::Rng;

use super::Question;
use crate::models::Difficulty;

/// Linear equation a·x + b = c. The solution x is drawn first and c derived
/// from it, so the equation always has an exact integer answer in the tier
/// range.
pub fn generate(difficulty: Difficulty) -> Question {
    let mut rng = rand::rng();
    let (low, high) = difficulty.range();

    let a: i64 = rng.random_range(2..=5);
    let x: i64 = rng.random_range(low..=high);
    let b: i64 = rng.random_range(-10..=10);
    let c = a * x + b;

    let sign = if b >= 0 { '+' } else { '-' };
    Question {
        prompt: format!("{}x {} {} = {}\nFind x:", a, sign, b.abs(), c),
        answer: x as f64,
    }
}
