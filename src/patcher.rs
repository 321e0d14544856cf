//! The patch pass
//!
//! Walks every record exactly once. A record is touched only when its
//! first hint is still the generic lead marker and its answer has a
//! builtin row; everything else passes through untouched.

use log::info;

use crate::dataset::Question;
use crate::hints::{self, HintTable};

/// What a patch pass did
#[derive(Debug, Clone, Default)]
pub struct PatchOutcome {
    /// Answers whose hints were replaced, in dataset order
    pub replaced: Vec<String>,
}

impl PatchOutcome {
    pub fn count(&self) -> usize {
        self.replaced.len()
    }
}

/// Read-only dataset survey backing `check` and `stats`
#[derive(Debug, Clone, Default)]
pub struct ScanReport {
    /// Total records in the dataset
    pub total: usize,
    /// Records still carrying the generic lead marker
    pub pending: usize,
    /// Pending answers the builtin table covers
    pub covered: Vec<String>,
    /// Pending answers with no builtin row
    pub uncovered: Vec<String>,
}

/// Replace placeholder hints across the whole dataset
///
/// Records failing either gate are left untouched. Runs are idempotent:
/// a replaced record no longer carries the lead marker, so a second pass
/// finds nothing to do.
pub fn patch_all(questions: &mut [Question], table: &HintTable) -> PatchOutcome {
    let mut outcome = PatchOutcome::default();
    for question in questions.iter_mut() {
        if patch_one(question, table) {
            info!("Replaced hints for: {}", question.answer);
            outcome.replaced.push(question.answer.clone());
        }
    }
    outcome
}

/// Patch a single record; true when its hints were replaced
fn patch_one(question: &mut Question, table: &HintTable) -> bool {
    let Some(first) = question.hints.first() else {
        return false;
    };
    if first.as_str() != hints::GENERIC_LEAD_HINT {
        return false;
    }
    let Some(replacement) = table.get(&question.answer) else {
        return false;
    };

    let mut new_hints: Vec<String> = replacement.iter().map(|h| h.to_string()).collect();

    // A hand-written fifth hint survives the rewrite; leftover boilerplate does not
    if let Some(fifth) = question.hints.get(4)
        && !hints::is_generic_filler(fifth)
    {
        new_hints.push(fifth.clone());
    }

    question.hints = new_hints;
    true
}

/// Survey the dataset without mutating it
pub fn scan(questions: &[Question], table: &HintTable) -> ScanReport {
    let mut report = ScanReport {
        total: questions.len(),
        ..Default::default()
    };
    for question in questions {
        if question.hints.first().map(String::as_str) != Some(hints::GENERIC_LEAD_HINT) {
            continue;
        }
        report.pending += 1;
        if table.contains(&question.answer) {
            report.covered.push(question.answer.clone());
        } else {
            report.uncovered.push(question.answer.clone());
        }
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hints::GENERIC_LEAD_HINT;
    use serde_json::Map;

    fn question(answer: &str, hints: &[&str]) -> Question {
        Question {
            answer: answer.to_string(),
            hints: hints.iter().map(|h| h.to_string()).collect(),
            extra: Map::new(),
        }
    }

    #[test]
    fn test_replaces_marked_record_with_table_row() {
        let table = HintTable::builtin();
        let mut questions = vec![question("Ohm's Law", &[GENERIC_LEAD_HINT, "x", "y", "z"])];

        let outcome = patch_all(&mut questions, &table);

        assert_eq!(outcome.count(), 1);
        assert_eq!(outcome.replaced, vec!["Ohm's Law"]);
        let expected = table.get("Ohm's Law").unwrap();
        assert_eq!(questions[0].hints.len(), 4);
        assert_eq!(questions[0].hints, expected.to_vec());
    }

    #[test]
    fn test_generic_fifth_hint_is_dropped() {
        let table = HintTable::builtin();
        let mut questions = vec![question(
            "Entropy",
            &[
                GENERIC_LEAD_HINT,
                "x",
                "y",
                "z",
                "Used in engineering and scientific applications",
            ],
        )];

        patch_all(&mut questions, &table);

        assert_eq!(questions[0].hints.len(), 4);
    }

    #[test]
    fn test_specific_fifth_hint_is_kept() {
        let table = HintTable::builtin();
        let mut questions = vec![question(
            "Ohm's Law",
            &[GENERIC_LEAD_HINT, "x", "y", "z", "Great for circuit design homework"],
        )];

        patch_all(&mut questions, &table);

        assert_eq!(questions[0].hints.len(), 5);
        assert_eq!(questions[0].hints[4], "Great for circuit design homework");
        assert_eq!(questions[0].hints[..4], *table.get("Ohm's Law").unwrap());
    }

    #[test]
    fn test_answer_without_table_row_is_untouched() {
        let table = HintTable::builtin();
        let original = question("Flux Capacitor", &[GENERIC_LEAD_HINT, "x", "y", "z"]);
        let mut questions = vec![original.clone()];

        let outcome = patch_all(&mut questions, &table);

        assert_eq!(outcome.count(), 0);
        assert_eq!(questions[0], original);
    }

    #[test]
    fn test_record_without_marker_is_untouched() {
        let table = HintTable::builtin();
        let original = question("Ohm's Law", &["Already authored", "x", "y", "z"]);
        let mut questions = vec![original.clone()];

        let outcome = patch_all(&mut questions, &table);

        assert_eq!(outcome.count(), 0);
        assert_eq!(questions[0], original);
    }

    #[test]
    fn test_record_without_hints_is_untouched() {
        let table = HintTable::builtin();
        let mut questions = vec![question("Ohm's Law", &[])];

        let outcome = patch_all(&mut questions, &table);

        assert_eq!(outcome.count(), 0);
        assert!(questions[0].hints.is_empty());
    }

    #[test]
    fn test_second_pass_is_a_no_op() {
        let table = HintTable::builtin();
        let mut questions = vec![
            question("Ohm's Law", &[GENERIC_LEAD_HINT, "x", "y", "z"]),
            question("Antarctica", &[GENERIC_LEAD_HINT, "x", "y", "z", "Coldest place"]),
        ];

        let first = patch_all(&mut questions, &table);
        assert_eq!(first.count(), 2);

        let after_first = questions.clone();
        let second = patch_all(&mut questions, &table);
        assert_eq!(second.count(), 0);
        assert_eq!(questions, after_first);
    }

    #[test]
    fn test_non_hint_fields_survive_patching() {
        let table = HintTable::builtin();
        let mut q = question("Ohm's Law", &[GENERIC_LEAD_HINT, "x", "y", "z"]);
        q.extra.insert("id".to_string(), serde_json::json!("q42"));
        q.extra.insert("difficulty".to_string(), serde_json::json!("medium"));
        let mut questions = vec![q];

        patch_all(&mut questions, &table);

        assert_eq!(questions[0].extra["id"], serde_json::json!("q42"));
        assert_eq!(questions[0].extra["difficulty"], serde_json::json!("medium"));
    }

    #[test]
    fn test_scan_counts_pending_and_coverage() {
        let table = HintTable::builtin();
        let questions = vec![
            question("Ohm's Law", &[GENERIC_LEAD_HINT, "x", "y", "z"]),
            question("Flux Capacitor", &[GENERIC_LEAD_HINT, "x", "y", "z"]),
            question("Entropy", &["Already authored", "x", "y", "z"]),
        ];

        let report = scan(&questions, &table);

        assert_eq!(report.total, 3);
        assert_eq!(report.pending, 2);
        assert_eq!(report.covered, vec!["Ohm's Law"]);
        assert_eq!(report.uncovered, vec!["Flux Capacitor"]);
    }
}
