//! HintPatch - question bank hint maintenance
//!
//! The Hintman question bank is a single JSON array of question records.
//! Early authoring passes left many records with boilerplate placeholder
//! hints; this crate finds those records and swaps in answer-specific
//! hints from a table compiled into the binary.
//!
//! # Data flow
//!
//! ```text
//! questions.json ──load──▶ Vec<Question> ──patch──▶ questions.json
//!                               │
//!                               └─ hints[0..3] replaced when
//!                                  hints[0] is the generic lead marker
//!                                  and the answer has a builtin row;
//!                                  a hand-written 5th hint is kept
//! ```
//!
//! # Example
//!
//! ```ignore
//! use hintpatch::{HintTable, dataset, patcher};
//!
//! let table = HintTable::builtin();
//! let mut questions = dataset::load("backend/src/data/questions.json")?;
//! let outcome = patcher::patch_all(&mut questions, &table);
//! dataset::save("backend/src/data/questions.json", &questions)?;
//! println!("replaced {}", outcome.count());
//! ```

pub mod cli;
pub mod config;
pub mod dataset;
pub mod hints;
pub mod patcher;

pub use dataset::Question;
pub use hints::{GENERIC_FILLER_HINTS, GENERIC_LEAD_HINT, HintTable};
pub use patcher::{PatchOutcome, ScanReport};

/// Dataset location inside the game repository this tool was built for
pub const DEFAULT_DATASET_PATH: &str = "backend/src/data/questions.json";
