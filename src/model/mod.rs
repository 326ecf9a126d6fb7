pub mod area;
pub mod exam;
pub mod page;

pub use area::Area;
pub use exam::{ExamEntry, ExamMap, ItemBank, QuestionData};
pub use page::{Day, PageContext};
