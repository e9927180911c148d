use chrono::Local;
use serde::{Deserialize, Serialize};

/// One finished timed session, as stored in the high-scores file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub score: u32,
    pub accuracy: f64,
    pub date: String,
}

impl ScoreEntry {
    /// Builds an entry stamped with the current local time.
    pub fn new(score: u32, accuracy: f64) -> Self {
        Self {
            score,
            accuracy,
            date: Local::now().format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_format() {
        let entry = ScoreEntry::new(120, 83.3);
        // "YYYY-MM-DD HH:MM"
        assert_eq!(entry.date.len(), 16);
        assert_eq!(&entry.date[4..5], "-");
        assert_eq!(&entry.date[10..11], " ");
        assert_eq!(&entry.date[13..14], ":");
    }
}
