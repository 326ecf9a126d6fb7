//! Active-variant filtering
//!
//! The exam map is the sole source of truth for which item-bank IDs are
//! real assigned variants; the item bank alone never includes an exam.

use phf::phf_map;
use tracing::debug;

use crate::model::{Area, ExamEntry, ExamMap, ItemBank, PageContext};

/// Color spellings that identify the same booklet
static COLOR_SYNONYMS: phf::Map<&'static str, &'static str> = phf_map! {
    "BRANCA" => "BRANCO",
    "AMARELA" => "AMARELO",
};

/// Canonical color form: uppercased, synonyms collapsed
pub fn normalize_color(raw: &str) -> String {
    let upper = raw.trim().to_uppercase();
    match COLOR_SYNONYMS.get(upper.as_str()) {
        Some(canonical) => (*canonical).to_string(),
        None => upper,
    }
}

/// An exam variant confirmed active for the current page
#[derive(Debug, Clone)]
pub struct ActiveExam {
    pub id: String,
    pub area: Area,
    pub entry: ExamEntry,
}

/// Select the variants that apply to this page.
///
/// Iterates the exam-map IDs only; a bank entry absent from the map is
/// never included, even when its day and color would match. Colors are
/// compared in canonical form, days as the raw data strings (so entries
/// with `DIA: "ND"` never match).
pub fn filter_active_exams(mapa: &ExamMap, bank: &ItemBank, ctx: &PageContext) -> Vec<ActiveExam> {
    let page_color = normalize_color(&ctx.color);
    let mut active = Vec::new();

    for id in mapa.keys() {
        if let Some(entry) = bank.get(id) {
            let entry_color = normalize_color(&entry.cor);
            if entry_color == page_color && entry.dia == ctx.day.as_str() {
                active.push(ActiveExam {
                    id: id.clone(),
                    area: entry.area,
                    entry: entry.clone(),
                });
            } else {
                debug!(
                    "variante {} descartada (cor {} / dia {})",
                    id, entry.cor, entry.dia
                );
            }
        }
    }

    active
}
