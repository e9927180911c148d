use rand::seq::IndexedRandom;
use rand::Rng;

use super::{round2, Question};
use crate::models::{Difficulty, Operation};

/// Plain arithmetic over the tier's operation set. Exponents and roots use
/// fixed small ranges so the results stay in mental-math territory.
pub fn generate(difficulty: Difficulty) -> Question {
    let mut rng = rand::rng();
    let (low, high) = difficulty.range();
    let op = difficulty
        .operations()
        .choose(&mut rng)
        .copied()
        .unwrap_or(Operation::Add);

    match op {
        Operation::Root => {
            let radicand = rng.random_range(1..=100);
            let degree = rng.random_range(2..=3);
            let prompt = if degree == 3 {
                format!("∛{} = ?", radicand)
            } else {
                format!("√{} = ?", radicand)
            };
            let answer = round2((radicand as f64).powf(1.0 / degree as f64));
            Question { prompt, answer }
        }
        Operation::Pow => {
            let base: i64 = rng.random_range(2..=5);
            let exp: u32 = rng.random_range(2..=3);
            Question {
                prompt: format!("{} ^ {} = ?", base, exp),
                answer: base.pow(exp) as f64,
            }
        }
        _ => {
            let a = rng.random_range(low..=high);
            let b = rng.random_range(low..=high);
            let answer = match op {
                Operation::Add => a + b,
                Operation::Sub => a - b,
                _ => a * b,
            };
            Question {
                prompt: format!("{} {} {} = ?", a, op.symbol(), b),
                answer: answer as f64,
            }
        }
    }
}
