//! Question bank loading and saving
//!
//! The dataset is a single JSON array of question objects. Everything
//! except `answer` and `hints` rides along untouched in `extra`, so
//! fields this tool does not know about survive a rewrite.

use std::fs;
use std::path::Path;

use eyre::{Context, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single trivia question record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    /// Lookup key into the hint table
    pub answer: String,

    /// Ordered hints, broadest first; 4 or 5 entries in practice
    #[serde(default)]
    pub hints: Vec<String>,

    /// All remaining fields (id, category, difficulty, ...), preserved as-is
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Load the full question array from disk
pub fn load(path: impl AsRef<Path>) -> Result<Vec<Question>> {
    let path = path.as_ref();
    let content =
        fs::read_to_string(path).context(format!("Failed to read dataset: {}", path.display()))?;
    let questions: Vec<Question> =
        serde_json::from_str(&content).context(format!("Failed to parse dataset: {}", path.display()))?;
    debug!("Loaded {} questions from {}", questions.len(), path.display());
    Ok(questions)
}

/// Write the full question array back, replacing the file in one write
///
/// Two-space indentation; non-ASCII characters are written literally.
pub fn save(path: impl AsRef<Path>, questions: &[Question]) -> Result<()> {
    let path = path.as_ref();
    let content = serde_json::to_string_pretty(questions).context("Failed to serialize dataset")?;
    fs::write(path, content).context(format!("Failed to write dataset: {}", path.display()))?;
    debug!("Wrote {} questions to {}", questions.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_round_trip_preserves_unknown_fields() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("questions.json");
        fs::write(
            &path,
            json!([{
                "id": "q7",
                "answer": "Entropy",
                "category": "Physics",
                "difficulty": "hard",
                "hints": ["a", "b", "c", "d"],
                "timeLimit": 120000
            }])
            .to_string(),
        )
        .unwrap();

        let questions = load(&path).unwrap();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].answer, "Entropy");
        assert_eq!(questions[0].hints.len(), 4);
        assert_eq!(questions[0].extra["id"], json!("q7"));
        assert_eq!(questions[0].extra["timeLimit"], json!(120000));

        save(&path, &questions).unwrap();
        let reloaded = load(&path).unwrap();
        assert_eq!(reloaded, questions);
    }

    #[test]
    fn test_save_keeps_non_ascii_literal() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("questions.json");

        let questions = vec![Question {
            answer: "X-Rays".to_string(),
            hints: vec!["Discovered by Wilhelm Röntgen in 1895".to_string()],
            extra: Map::new(),
        }];
        save(&path, &questions).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("Röntgen"));
        assert!(!content.contains("\\u"));
    }

    #[test]
    fn test_missing_hints_defaults_to_empty() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("questions.json");
        fs::write(&path, r#"[{"id": "q1", "answer": "Plasma"}]"#).unwrap();

        let questions = load(&path).unwrap();
        assert!(questions[0].hints.is_empty());
    }

    #[test]
    fn test_load_missing_file_fails() {
        let temp = TempDir::new().unwrap();
        let result = load(temp.path().join("nope.json"));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_malformed_json_fails() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("questions.json");
        fs::write(&path, "{not json").unwrap();
        assert!(load(&path).is_err());
    }
}
