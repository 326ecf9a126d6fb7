//! Quiz session logic
//!
//! The review core: active-variant filtering, answer recording with the
//! composite-key derivation, scored-report assembly and the session
//! stopwatch.

pub mod answers;
pub mod filter;
pub mod report;
pub mod timer;

pub use answers::{composite_key, AnswerSheet, RecordOutcome};
pub use filter::{filter_active_exams, normalize_color, ActiveExam};
pub use report::{generate, Report};
pub use timer::Stopwatch;
