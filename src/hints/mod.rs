//! Generic placeholder detection and the builtin hint table
//!
//! Records that still carry authoring boilerplate are recognized by their
//! first hint. The builtin table maps each known answer to the four hints
//! that replace that boilerplate.

mod builtin;

use std::collections::HashMap;

/// First-hint marker left by the authoring pass; gates patching
pub const GENERIC_LEAD_HINT: &str = "Fundamental principle governing motion and forces";

/// Boilerplate strings that disqualify a trailing fifth hint from being kept
pub const GENERIC_FILLER_HINTS: [&str; 4] = [
    "Fundamental principle governing motion and forces",
    "Key concept in understanding natural phenomena",
    "Used in engineering and scientific applications",
    "Essential for modern physics and technology",
];

/// True when a hint is one of the known boilerplate strings
pub fn is_generic_filler(hint: &str) -> bool {
    GENERIC_FILLER_HINTS.contains(&hint)
}

/// Lookup from answer to its four replacement hints
///
/// Built once from the rows compiled into the binary; immutable afterwards.
pub struct HintTable {
    entries: HashMap<&'static str, &'static [&'static str; 4]>,
}

impl HintTable {
    /// Build the table from the embedded rows
    pub fn builtin() -> Self {
        let mut entries = HashMap::with_capacity(builtin::BUILTIN.len());
        for (answer, hints) in builtin::BUILTIN {
            entries.insert(*answer, hints);
        }
        Self { entries }
    }

    /// Replacement hints for an answer, if the table covers it
    pub fn get(&self, answer: &str) -> Option<&'static [&'static str; 4]> {
        self.entries.get(answer).copied()
    }

    /// Whether the table has a row for this answer
    pub fn contains(&self, answer: &str) -> bool {
        self.entries.contains_key(answer)
    }

    /// Number of answers covered
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_rows_are_unique() {
        let table = HintTable::builtin();
        // A duplicate answer would collapse into one HashMap entry
        assert_eq!(table.len(), builtin::BUILTIN.len());
        assert!(!table.is_empty());
    }

    #[test]
    fn test_lookup_known_answer() {
        let table = HintTable::builtin();
        let hints = table.get("Ohm's Law").expect("Ohm's Law should have a row");
        assert_eq!(hints.len(), 4);
        assert!(hints[0].contains("voltage, current, and resistance"));
        assert!(table.contains("Antarctica"));
    }

    #[test]
    fn test_lookup_unknown_answer() {
        let table = HintTable::builtin();
        assert!(table.get("Flux Capacitor").is_none());
    }

    #[test]
    fn test_filler_detection() {
        assert!(is_generic_filler(GENERIC_LEAD_HINT));
        assert!(is_generic_filler("Used in engineering and scientific applications"));
        assert!(!is_generic_filler("Great for circuit design homework"));
    }

    #[test]
    fn test_no_row_is_boilerplate() {
        // The table exists to remove boilerplate; it must not contain any
        for (answer, hints) in builtin::BUILTIN {
            for hint in hints {
                assert!(!is_generic_filler(hint), "boilerplate row for {answer}");
            }
        }
    }
}
