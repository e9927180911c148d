use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::generators::QuestionKind;

/// Arithmetic operations a tier may draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Sub,
    Mul,
    Pow,
    Root,
}

impl Operation {
    pub fn symbol(&self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Sub => "-",
            Operation::Mul => "*",
            Operation::Pow => "^",
            Operation::Root => "√",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

pub const ALL_DIFFICULTIES: [Difficulty; 3] =
    [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

impl Difficulty {
    /// Key used in the high-scores file and numeric menus.
    pub fn key(&self) -> &'static str {
        match self {
            Difficulty::Easy => "1",
            Difficulty::Medium => "2",
            Difficulty::Hard => "3",
        }
    }

    pub fn from_key(key: &str) -> Option<Difficulty> {
        match key {
            "1" => Some(Difficulty::Easy),
            "2" => Some(Difficulty::Medium),
            "3" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    /// Inclusive operand range for generators that honor the tier.
    pub fn range(&self) -> (i64, i64) {
        match self {
            Difficulty::Easy => (1, 10),
            Difficulty::Medium => (1, 50),
            Difficulty::Hard => (1, 100),
        }
    }

    pub fn time_limit_secs(&self) -> u64 {
        match self {
            Difficulty::Easy => 60,
            Difficulty::Medium => 90,
            Difficulty::Hard => 120,
        }
    }

    pub fn operations(&self) -> &'static [Operation] {
        match self {
            Difficulty::Easy => &[Operation::Add, Operation::Sub, Operation::Mul],
            Difficulty::Medium => &[
                Operation::Add,
                Operation::Sub,
                Operation::Mul,
                Operation::Pow,
            ],
            Difficulty::Hard => &[
                Operation::Add,
                Operation::Sub,
                Operation::Mul,
                Operation::Pow,
                Operation::Root,
            ],
        }
    }

    pub fn question_kinds(&self) -> &'static [QuestionKind] {
        match self {
            Difficulty::Easy => &[QuestionKind::Arithmetic, QuestionKind::Sequence],
            Difficulty::Medium => &[
                QuestionKind::Arithmetic,
                QuestionKind::Equation,
                QuestionKind::Sequence,
                QuestionKind::Geometry,
            ],
            Difficulty::Hard => &[
                QuestionKind::Arithmetic,
                QuestionKind::Equation,
                QuestionKind::WordProblem,
                QuestionKind::Sequence,
                QuestionKind::Geometry,
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_round_trip() {
        for diff in ALL_DIFFICULTIES {
            assert_eq!(Difficulty::from_key(diff.key()), Some(diff));
        }
        assert_eq!(Difficulty::from_key("4"), None);
    }

    #[test]
    fn test_tier_tables() {
        assert_eq!(Difficulty::Easy.range(), (1, 10));
        assert_eq!(Difficulty::Medium.range(), (1, 50));
        assert_eq!(Difficulty::Hard.range(), (1, 100));
        assert_eq!(Difficulty::Easy.time_limit_secs(), 60);
        assert_eq!(Difficulty::Hard.time_limit_secs(), 120);
        assert!(!Difficulty::Easy.operations().contains(&Operation::Pow));
        assert!(Difficulty::Hard.operations().contains(&Operation::Root));
        assert_eq!(Difficulty::Easy.question_kinds().len(), 2);
        assert_eq!(Difficulty::Hard.question_kinds().len(), 5);
    }
}
