use rand::Rng;

use super::{round2, Question};
use crate::models::Difficulty;

/// Word problems built from a few fixed templates. Only the apples template
/// scales with the tier range; the others use fixed sub-ranges that keep the
/// numbers plausible for their story.
pub fn generate(difficulty: Difficulty) -> Question {
    let mut rng = rand::rng();
    let (low, high) = difficulty.range();

    match rng.random_range(0..3) {
        0 => {
            let total = rng.random_range(low..=high);
            let sold = rng.random_range(1..=(high / 2).max(1));
            Question {
                prompt: format!(
                    "A shop had {} apples. {} of them were sold. How many apples are left?",
                    total, sold
                ),
                answer: (total - sold) as f64,
            }
        }
        1 => {
            let initial: i64 = rng.random_range(50..=200);
            let items: i64 = rng.random_range(2..=5);
            let price: i64 = rng.random_range(5..=20);
            Question {
                prompt: format!(
                    "You have {} coins and buy {} sweets at {} coins each. How many coins are left?",
                    initial, items, price
                ),
                answer: (initial - items * price) as f64,
            }
        }
        _ => {
            let distance: i64 = rng.random_range(20..=100);
            let speed: i64 = rng.random_range(5..=20);
            Question {
                prompt: format!(
                    "Two towns are {} km apart. A cyclist rides {} km per hour. How many hours does the trip take?",
                    distance, speed
                ),
                answer: round2(distance as f64 / speed as f64),
            }
        }
    }
}
