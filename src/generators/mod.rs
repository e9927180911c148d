mod arithmetic;
mod equation;
mod geometry;
mod sequence;
mod word_problem;

use rand::seq::IndexedRandom;

use crate::models::Difficulty;

/// A freshly generated question: rendered prompt plus the expected answer.
/// Discarded once the round is graded.
#[derive(Debug, Clone)]
pub struct Question {
    pub prompt: String,
    pub answer: f64,
}

/// The closed set of question generators. Which kinds are eligible for a
/// session is decided by the difficulty tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionKind {
    Arithmetic,
    Equation,
    WordProblem,
    Sequence,
    Geometry,
}

impl QuestionKind {
    pub fn description(&self) -> &'static str {
        match self {
            QuestionKind::Arithmetic => "Arithmetic problems",
            QuestionKind::Equation => "Equations",
            QuestionKind::WordProblem => "Word problems",
            QuestionKind::Sequence => "Sequences",
            QuestionKind::Geometry => "Geometry problems",
        }
    }
}

/// Generates a question of the given kind for the given tier.
pub fn generate(kind: QuestionKind, difficulty: Difficulty) -> Question {
    match kind {
        QuestionKind::Arithmetic => arithmetic::generate(difficulty),
        QuestionKind::Equation => equation::generate(difficulty),
        QuestionKind::WordProblem => word_problem::generate(difficulty),
        QuestionKind::Sequence => sequence::generate(difficulty),
        QuestionKind::Geometry => geometry::generate(difficulty),
    }
}

/// Picks a random eligible kind for the tier and generates a question.
pub fn generate_for_tier(difficulty: Difficulty) -> Question {
    let mut rng = rand::rng();
    let kind = difficulty
        .question_kinds()
        .choose(&mut rng)
        .copied()
        .unwrap_or(QuestionKind::Arithmetic);
    generate(kind, difficulty)
}

/// Rounds to two decimal places, the precision used for non-integer answers.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ALL_DIFFICULTIES;

    #[test]
    fn test_all_kinds_produce_finite_answers() {
        let kinds = [
            QuestionKind::Arithmetic,
            QuestionKind::Equation,
            QuestionKind::WordProblem,
            QuestionKind::Sequence,
            QuestionKind::Geometry,
        ];
        for diff in ALL_DIFFICULTIES {
            for kind in kinds {
                for _ in 0..50 {
                    let q = generate(kind, diff);
                    assert!(q.answer.is_finite(), "{:?}/{:?}: {}", kind, diff, q.prompt);
                    assert!(!q.prompt.is_empty());
                }
            }
        }
    }

    #[test]
    fn test_generate_for_tier_respects_eligible_kinds() {
        // Easy never emits equation/word-problem/geometry prompts.
        for _ in 0..100 {
            let q = generate_for_tier(crate::models::Difficulty::Easy);
            assert!(!q.prompt.contains("Find x"));
            assert!(!q.prompt.contains("area"));
        }
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(3.14159), 3.14);
        assert_eq!(round2(10.0 / 3.0), 3.33);
        assert_eq!(round2(5.0), 5.0);
    }
}
