use rand::Rng;

use super::{round2, Question};
use crate::models::Difficulty;

/// Closed-form shape problems with dimensions drawn from fixed small ranges.
pub fn generate(_difficulty: Difficulty) -> Question {
    let mut rng = rand::rng();

    match rng.random_range(0..3) {
        0 => {
            let a: i64 = rng.random_range(2..=10);
            let b: i64 = rng.random_range(2..=10);
            Question {
                prompt: format!("Find the area of a rectangle with sides {} and {}:", a, b),
                answer: (a * b) as f64,
            }
        }
        1 => {
            let a: i64 = rng.random_range(2..=15);
            Question {
                prompt: format!("Find the perimeter of a square with side {}:", a),
                answer: (4 * a) as f64,
            }
        }
        _ => {
            let base: i64 = rng.random_range(2..=10);
            let height: i64 = rng.random_range(2..=10);
            Question {
                prompt: format!(
                    "Find the area of a triangle with base {} and height {}:",
                    base, height
                ),
                answer: round2(base as f64 * height as f64 / 2.0),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(prompt: &str) -> Vec<i64> {
        prompt
            .split(|c: char| !c.is_ascii_digit())
            .filter(|s| !s.is_empty())
            .map(|s| s.parse().unwrap())
            .collect()
    }

    #[test]
    fn test_answers_recompute_from_prompt() {
        for _ in 0..300 {
            let q = generate(Difficulty::Medium);
            let nums = numbers(&q.prompt);
            let expected = if q.prompt.contains("rectangle") {
                (nums[0] * nums[1]) as f64
            } else if q.prompt.contains("square") {
                (4 * nums[0]) as f64
            } else {
                nums[0] as f64 * nums[1] as f64 / 2.0
            };
            assert!((q.answer - expected).abs() < 1e-9, "{}", q.prompt);
        }
    }

    #[test]
    fn test_dimension_ranges() {
        for _ in 0..300 {
            let q = generate(Difficulty::Hard);
            let nums = numbers(&q.prompt);
            if q.prompt.contains("square") {
                assert!((2..=15).contains(&nums[0]));
            } else {
                assert!((2..=10).contains(&nums[0]));
                assert!((2..=10).contains(&nums[1]));
            }
        }
    }
}
