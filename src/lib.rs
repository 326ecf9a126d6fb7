//! # ENEM Interativo
//!
//! Terminal review engine for ENEM exams: loads the exam map and the
//! year's item bank, records the user's answers per booklet question and
//! renders a scored standalone HTML report.
//!
//! ## Module map
//!
//! - `config` - env-backed configuration
//! - `model` - page identity resolver and the typed data documents
//! - `api` - sequential fetch of the two JSON documents
//! - `quiz` - filtering, answer recording, report assembly, stopwatch
//! - `app` - session state and the interactive command loop

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod model;
pub mod quiz;
pub mod utils;

// re-export the common types
pub use app::App;
pub use config::Config;
pub use error::{AppError, AppResult, DataError, ReportError};
pub use model::{Area, Day, ExamEntry, ExamMap, ItemBank, PageContext, QuestionData};
pub use quiz::{composite_key, filter_active_exams, AnswerSheet, RecordOutcome, Stopwatch};
