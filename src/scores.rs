use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::models::{Difficulty, ScoreEntry, ALL_DIFFICULTIES};

/// Tier key ("1"/"2"/"3") to its ordered score list, at most
/// [`MAX_ENTRIES`] per tier.
pub type HighScores = BTreeMap<String, Vec<ScoreEntry>>;

pub const MAX_ENTRIES: usize = 10;

pub fn scores_path() -> PathBuf {
    let home = dirs::home_dir().expect("Could not determine home directory");
    home.join(".config").join("mathquiz").join("high_scores.json")
}

/// Empty score lists for every known tier.
pub fn default_scores() -> HighScores {
    ALL_DIFFICULTIES
        .iter()
        .map(|d| (d.key().to_string(), Vec::new()))
        .collect()
}

/// Loads the high-scores file. A missing file is normal; anything else
/// unreadable is reported and replaced with empty defaults.
pub fn load(path: &Path) -> HighScores {
    if !path.exists() {
        return default_scores();
    }

    match fs::read_to_string(path) {
        Ok(contents) => match serde_json::from_str::<HighScores>(&contents) {
            Ok(mut scores) => {
                // Older files may be missing a tier key.
                for diff in ALL_DIFFICULTIES {
                    scores.entry(diff.key().to_string()).or_default();
                }
                scores
            }
            Err(e) => {
                eprintln!("Warning: could not parse {}: {}", path.display(), e);
                default_scores()
            }
        },
        Err(e) => {
            eprintln!("Warning: could not read {}: {}", path.display(), e);
            default_scores()
        }
    }
}

pub fn save(path: &Path, scores: &HighScores) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| format!("Failed to create {}: {}", parent.display(), e))?;
    }

    let contents = serde_json::to_string_pretty(scores)
        .map_err(|e| format!("Failed to serialize high scores: {}", e))?;
    fs::write(path, contents).map_err(|e| format!("Failed to write {}: {}", path.display(), e))
}

/// Appends an entry to the tier's list, re-sorts and truncates to the top
/// [`MAX_ENTRIES`]. Does not persist; callers flush with [`save`].
pub fn record(scores: &mut HighScores, difficulty: Difficulty, entry: ScoreEntry) {
    let list = scores.entry(difficulty.key().to_string()).or_default();
    list.push(entry);
    // Descending score; ties broken by *lower* accuracy. The tie-break is a
    // known quirk kept for compatibility with existing score files.
    list.sort_by(|a, b| {
        b.score.cmp(&a.score).then(
            a.accuracy
                .partial_cmp(&b.accuracy)
                .unwrap_or(Ordering::Equal),
        )
    });
    list.truncate(MAX_ENTRIES);
}

/// First `n` entries for a tier, for display only.
pub fn top(scores: &HighScores, difficulty: Difficulty, n: usize) -> &[ScoreEntry] {
    match scores.get(difficulty.key()) {
        Some(list) => &list[..list.len().min(n)],
        None => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(score: u32, accuracy: f64) -> ScoreEntry {
        ScoreEntry {
            score,
            accuracy,
            date: "2026-08-29 12:00".to_string(),
        }
    }

    #[test]
    fn test_record_sorts_and_truncates() {
        let mut scores = default_scores();
        for i in 0..15 {
            record(&mut scores, Difficulty::Easy, entry(i * 10, 50.0));
        }
        let list = &scores["1"];
        assert_eq!(list.len(), MAX_ENTRIES);
        assert_eq!(list[0].score, 140);
        assert!(list.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn test_tie_break_favors_lower_accuracy() {
        let mut scores = default_scores();
        record(&mut scores, Difficulty::Medium, entry(100, 90.0));
        record(&mut scores, Difficulty::Medium, entry(100, 70.0));
        record(&mut scores, Difficulty::Medium, entry(120, 50.0));
        let list = &scores["2"];
        assert_eq!(list[0].score, 120);
        assert_eq!(list[1].accuracy, 70.0);
        assert_eq!(list[2].accuracy, 90.0);
    }

    #[test]
    fn test_retention_is_min_of_n_and_cap() {
        let mut scores = default_scores();
        for i in 0..4 {
            record(&mut scores, Difficulty::Hard, entry(i, 100.0));
        }
        assert_eq!(scores["3"].len(), 4);
    }

    #[test]
    fn test_top_does_not_mutate() {
        let mut scores = default_scores();
        for i in 0..8 {
            record(&mut scores, Difficulty::Easy, entry(i * 5, 80.0));
        }
        assert_eq!(top(&scores, Difficulty::Easy, 5).len(), 5);
        assert_eq!(top(&scores, Difficulty::Easy, 20).len(), 8);
        assert_eq!(top(&scores, Difficulty::Medium, 5).len(), 0);
        assert_eq!(scores["1"].len(), 8);
    }

    #[test]
    fn test_save_load_round_trip() {
        let path = std::env::temp_dir().join(format!(
            "mathquiz_test_{}_{}.json",
            std::process::id(),
            line!()
        ));
        let mut scores = default_scores();
        record(&mut scores, Difficulty::Easy, entry(50, 66.7));
        record(&mut scores, Difficulty::Easy, entry(90, 100.0));
        record(&mut scores, Difficulty::Hard, entry(200, 83.3));

        save(&path, &scores).unwrap();
        let reloaded = load(&path);
        fs::remove_file(&path).unwrap();

        assert_eq!(reloaded, scores);
        assert_eq!(reloaded["1"][0].score, 90);
    }

    #[test]
    fn test_load_missing_file_defaults_empty() {
        let path = std::env::temp_dir().join("mathquiz_test_does_not_exist.json");
        let scores = load(&path);
        assert_eq!(scores, default_scores());
        assert!(scores.values().all(|list| list.is_empty()));
        assert_eq!(scores.len(), 3);
    }
}
