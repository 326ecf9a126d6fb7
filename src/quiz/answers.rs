//! Answer recording
//!
//! The composite key computed here from the visible booklet number must be
//! byte-identical to the one the report generator derives from the item
//! bank's local numbers; a divergence makes a recorded answer read as
//! blank in the report.

use std::collections::HashMap;

use tracing::debug;

use crate::model::Day;

/// Derive the composite storage key for a visible booklet number.
///
/// The number arrives as the string printed on the form because the
/// leading zero is meaningful: in the 1-5 range, "01" is Spanish and "1"
/// is English. Returns `None` when the number does not belong to the
/// day's booklet ranges.
pub fn composite_key(day: Day, visible: &str) -> Option<String> {
    let visible = visible.trim();
    let num: u32 = visible.parse().ok()?;

    match day {
        Day::One => {
            if num >= 46 {
                Some(format!("CH_{}", num))
            } else if num >= 6 {
                Some(format!("LC_{}", num))
            } else if num >= 1 {
                // LC 1-5: the string form decides the language
                if visible.len() == 2 && visible.starts_with('0') {
                    Some(format!("LC_ESP_{}", num))
                } else {
                    Some(format!("LC_ING_{}", num))
                }
            } else {
                None
            }
        }
        Day::Two => {
            if num >= 136 {
                Some(format!("MT_{}", num))
            } else if num >= 91 {
                Some(format!("CN_{}", num))
            } else {
                None
            }
        }
    }
}

/// Outcome of a recording attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordOutcome {
    /// Answer stored (overwriting any previous one for the same key)
    Saved { key: String, choice: char },
    /// No alternative was selected
    NoSelection,
    /// Selected alternative is not one of A-E
    InvalidChoice,
    /// Number outside the day's booklet ranges
    OutOfRange,
}

/// In-memory answer store: composite key -> selected letter.
///
/// Transient by design; lives for the session and is discarded with it.
/// Last write wins.
#[derive(Debug, Default)]
pub struct AnswerSheet {
    answers: HashMap<String, String>,
}

impl AnswerSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the selected alternative for a visible booklet number.
    pub fn record(&mut self, day: Day, visible: &str, choice: Option<char>) -> RecordOutcome {
        // fire-and-forget analytics event, emitted on every attempt
        debug!("verificou_resposta: questao_id={}", visible.trim());

        let choice = match choice {
            Some(c) => c.to_ascii_uppercase(),
            None => return RecordOutcome::NoSelection,
        };
        if !('A'..='E').contains(&choice) {
            return RecordOutcome::InvalidChoice;
        }

        let key = match composite_key(day, visible) {
            Some(key) => key,
            None => return RecordOutcome::OutOfRange,
        };

        self.answers.insert(key.clone(), choice.to_string());

        RecordOutcome::Saved { key, choice }
    }

    /// Stored answer for a composite key, if any
    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.answers.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}
