//! Report generation
//!
//! Walks the active variants, re-derives each question's composite key,
//! scores it against the answer sheet and assembles the standalone HTML
//! report document.

use chrono::Local;
use tracing::warn;

use crate::model::{Area, Day, PageContext, QuestionData};
use crate::quiz::answers::AnswerSheet;
use crate::quiz::filter::ActiveExam;

/// One question prepared for the report, before scoring
#[derive(Debug, Clone)]
struct ReportItem {
    composite_key: String,
    display_label: String,
    area: Area,
    data: QuestionData,
    sort_idx: u32,
}

/// One scored row of the report table
#[derive(Debug, Clone)]
pub struct ScoredRow {
    pub label: String,
    pub area_tag: &'static str,
    pub correct: String,
    pub marked: String,
    /// "correct", "wrong" or "" (no answer recorded)
    pub row_class: &'static str,
    pub ability: String,
    /// Rendered link cells: TRI, boxplot, question slice, help
    pub links: [String; 4],
}

/// Finished report
#[derive(Debug)]
pub struct Report {
    pub html: String,
    pub total_correct: usize,
    pub row_count: usize,
}

/// Derive composite key, display label and sort index for an item-bank
/// local question number.
///
/// Must agree with [`crate::quiz::answers::composite_key`] for the same
/// logical question. For LC the bank numbering is already booklet-aligned
/// (1-45, with "01".."05" marking Spanish); for CH/CN/MT the bank keys
/// are booklet-absolute positions (the generator stores CO_POSICAO), so
/// they are read directly, with no offset.
pub fn item_key(area: Area, local: &str) -> Option<(String, String, u32)> {
    let local = local.trim();
    let num: u32 = local.parse().ok()?;

    match area {
        Area::LC => {
            if num >= 1 && num <= 5 {
                if local.len() == 2 && local.starts_with('0') {
                    Some((format!("LC_ESP_{}", num), format!("0{} (Esp)", num), num))
                } else {
                    Some((format!("LC_ING_{}", num), format!("{} (Ing)", num), num))
                }
            } else if num >= 6 {
                Some((format!("LC_{}", num), format!("{:02}", num), num))
            } else {
                None
            }
        }
        other => Some((format!("{}_{}", other.tag(), num), num.to_string(), num)),
    }
}

/// Items regrouped into the six subject lists
#[derive(Debug, Default)]
struct GroupedItems {
    ingles: Vec<ReportItem>,
    espanhol: Vec<ReportItem>,
    lc: Vec<ReportItem>,
    ch: Vec<ReportItem>,
    cn: Vec<ReportItem>,
    mt: Vec<ReportItem>,
}

fn group_items(active: &[ActiveExam]) -> GroupedItems {
    let mut groups = GroupedItems::default();

    for exam in active {
        for (local, data) in &exam.entry.questions {
            let (composite_key, display_label, sort_idx) = match item_key(exam.area, local) {
                Some(parts) => parts,
                None => {
                    warn!("⚠️ questão {} da variante {} ignorada (número inválido)", local, exam.id);
                    continue;
                }
            };

            let item = ReportItem {
                composite_key,
                display_label,
                area: exam.area,
                data: data.clone(),
                sort_idx,
            };

            match exam.area {
                Area::LC => {
                    if item.composite_key.starts_with("LC_ESP_") {
                        groups.espanhol.push(item);
                    } else if item.composite_key.starts_with("LC_ING_") {
                        groups.ingles.push(item);
                    } else {
                        groups.lc.push(item);
                    }
                }
                Area::CH => groups.ch.push(item),
                Area::CN => groups.cn.push(item),
                Area::MT => groups.mt.push(item),
            }
        }
    }

    let by_index = |a: &ReportItem, b: &ReportItem| a.sort_idx.cmp(&b.sort_idx);
    groups.ingles.sort_by(by_index);
    groups.espanhol.sort_by(by_index);
    groups.lc.sort_by(by_index);
    groups.ch.sort_by(by_index);
    groups.cn.sort_by(by_index);
    groups.mt.sort_by(by_index);

    groups
}

/// Final display order: day 1 is English, Spanish, general LC, CH;
/// day 2 is CN then MT.
fn final_order(groups: GroupedItems, day: Day) -> Vec<ReportItem> {
    let mut ordered = Vec::new();
    match day {
        Day::One => {
            ordered.extend(groups.ingles);
            ordered.extend(groups.espanhol);
            ordered.extend(groups.lc);
            ordered.extend(groups.ch);
        }
        Day::Two => {
            ordered.extend(groups.cn);
            ordered.extend(groups.mt);
        }
    }
    ordered
}

fn ver_link(figs_base: &str, file: &str) -> String {
    format!("<a href=\"{}/{}\" target=\"_blank\">Ver</a>", figs_base, file)
}

/// Render the four auxiliary link cells for an item.
///
/// Requires the full four-file set (TRI, boxplot, question slice, help).
/// Spanish items suppress TRI and boxplot (policy, not a data gap); the
/// question slice and the help file appear for every language.
fn aux_links(composite_key: &str, data: &QuestionData, figs_base: &str) -> [String; 4] {
    let mut links = [
        "-".to_string(),
        "-".to_string(),
        "-".to_string(),
        "-".to_string(),
    ];

    if data.images.len() < 4 {
        return links;
    }

    let is_espanhol = composite_key.starts_with("LC_ESP_");

    if !is_espanhol {
        if !data.images[0].is_empty() {
            links[0] = ver_link(figs_base, &data.images[0]);
        }
        if !data.images[1].is_empty() {
            links[1] = ver_link(figs_base, &data.images[1]);
        }
    }
    if !data.images[2].is_empty() {
        links[2] = ver_link(figs_base, &data.images[2]);
    }
    if !data.images[3].is_empty() {
        links[3] = ver_link(figs_base, &data.images[3]);
    }

    links
}

/// Score every item of the active variants against the answer sheet.
///
/// Returns the display-ordered rows plus the total of correct answers.
/// An unanswered item is neutral: it gets no row class and is not counted
/// either way.
pub fn build_rows(
    day: Day,
    active: &[ActiveExam],
    answers: &AnswerSheet,
    figs_base: &str,
) -> (Vec<ScoredRow>, usize) {
    let ordered = final_order(group_items(active), day);

    let mut rows = Vec::with_capacity(ordered.len());
    let mut total_correct = 0;

    for item in ordered {
        let marked = answers.lookup(&item.composite_key).unwrap_or("").to_string();
        let row_class = if marked.is_empty() {
            ""
        } else if marked == item.data.answer {
            total_correct += 1;
            "correct"
        } else {
            "wrong"
        };

        let links = aux_links(&item.composite_key, &item.data, figs_base);

        rows.push(ScoredRow {
            label: item.display_label,
            area_tag: item.area.tag(),
            correct: item.data.answer.clone(),
            marked,
            row_class,
            ability: item.data.ability.clone().unwrap_or_else(|| "-".to_string()),
            links,
        });
    }

    (rows, total_correct)
}

const REPORT_CSS: &str = "body{font-family:Arial,sans-serif; padding:20px;}\
.tg{border-collapse:collapse;width:100%;margin-top:20px;}\
.tg td, .tg th{border:1px solid #ccc;padding:8px;text-align:center;font-size:13px;}\
.tg th{background-color:#f0f0f0;font-weight:bold;}\
.correct{background-color:#d4edda} .wrong{background-color:#f8d7da}\
a {text-decoration:none; color:blue;} a:visited {color:purple;}\
.spoiler { background-color: #333; color: #333; cursor: pointer; user-select: none; }\
.spoiler:hover { background-color: #555; }\
.spoiler.revealed { background-color: transparent; color: black; font-weight: bold; }";

const SPOILER_JS: &str =
    "function toggleSpoiler(cell) { cell.classList.toggle(\"revealed\"); }";

/// Assemble the standalone report document.
pub fn generate(
    ctx: &PageContext,
    active: &[ActiveExam],
    answers: &AnswerSheet,
    figs_base: &str,
) -> Report {
    let (rows, total_correct) = build_rows(ctx.day, active, answers, figs_base);
    let row_count = rows.len();

    let mut html = String::new();
    html.push_str("<html><head>");
    html.push_str(&format!("<style type=\"text/css\">{}</style>", REPORT_CSS));
    html.push_str(&format!("<script>{}</script>", SPOILER_JS));
    html.push_str("</head><body>");
    html.push_str("<div style=\"max-width:800px; margin:0 auto;\">");
    html.push_str(
        "<button onclick=\"window.print()\" style=\"float:right;margin:10px;\">Imprimir</button>",
    );
    html.push_str("<h1>ENEM Interativo</h1>");
    html.push_str(&format!(
        "<p><strong>Prova:</strong> {} | <strong>Cor:</strong> {}</p><hr>",
        ctx.year, ctx.color
    ));

    html.push_str(
        "<table class=\"tg\"><thead><tr>\
         <th>N.</th><th>Disciplina</th><th>Correta <small>(Clique)</small></th>\
         <th>Marcada</th><th>Hab.</th><th>TRI</th><th>Est.</th>\
         <th>Questão</th><th>Ajuda</th></tr></thead><tbody>",
    );

    for row in &rows {
        html.push_str(&format!("<tr class=\"{}\">", row.row_class));
        html.push_str(&format!("<td><b>{}</b></td>", row.label));
        html.push_str(&format!("<td>{}</td>", row.area_tag));
        html.push_str(&format!(
            "<td class=\"spoiler\" onclick=\"toggleSpoiler(this)\" title=\"Revelar\">{}</td>",
            row.correct
        ));
        html.push_str(&format!("<td>{}</td>", row.marked));
        html.push_str(&format!("<td>{}</td>", row.ability));
        for link in &row.links {
            html.push_str(&format!("<td>{}</td>", link));
        }
        html.push_str("</tr>");
    }

    html.push_str("</tbody></table>");
    html.push_str(&format!("<h3>Acertos Totais: {}</h3>", total_correct));
    html.push_str(&format!(
        "<p><small>Gerado em {}</small></p>",
        Local::now().format("%Y-%m-%d %H:%M:%S")
    ));
    html.push_str("</div></body></html>");

    Report {
        html,
        total_correct,
        row_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::answers::composite_key;
    use crate::quiz::filter::ActiveExam;
    use serde_json::json;

    fn active_exam(id: &str, area: Area, dia: &str, questions: serde_json::Value) -> ActiveExam {
        let entry = serde_json::from_value(json!({
            "COR": "AZUL",
            "AREA": area.tag(),
            "DIA": dia,
            "QUESTIONS": questions,
        }))
        .unwrap();
        ActiveExam {
            id: id.to_string(),
            area,
            entry,
        }
    }

    fn question(answer: &str) -> serde_json::Value {
        json!({"answer": answer, "ability": 7})
    }

    #[test]
    fn test_item_key_agrees_with_recorder_at_boundaries() {
        // day 1 bands
        for visible in ["5", "6", "45", "46", "90"] {
            let area = if visible.parse::<u32>().unwrap() >= 46 {
                Area::CH
            } else {
                Area::LC
            };
            let (key, _, _) = item_key(area, visible).unwrap();
            assert_eq!(composite_key(Day::One, visible).unwrap(), key);
        }
        // bank stores general LC zero-padded; the form shows the bare number
        let (key, _, _) = item_key(Area::LC, "06").unwrap();
        assert_eq!(composite_key(Day::One, "6").unwrap(), key);

        // day 2 bands
        for (visible, area) in [("91", Area::CN), ("135", Area::CN), ("136", Area::MT)] {
            let (key, _, _) = item_key(area, visible).unwrap();
            assert_eq!(composite_key(Day::Two, visible).unwrap(), key);
        }
    }

    #[test]
    fn test_item_key_language_split_and_labels() {
        let (key, label, _) = item_key(Area::LC, "01").unwrap();
        assert_eq!(key, "LC_ESP_1");
        assert_eq!(label, "01 (Esp)");

        let (key, label, _) = item_key(Area::LC, "1").unwrap();
        assert_eq!(key, "LC_ING_1");
        assert_eq!(label, "1 (Ing)");

        let (key, label, _) = item_key(Area::LC, "06").unwrap();
        assert_eq!(key, "LC_6");
        assert_eq!(label, "06");

        let (key, label, _) = item_key(Area::CH, "46").unwrap();
        assert_eq!(key, "CH_46");
        assert_eq!(label, "46");
    }

    #[test]
    fn test_scoring_correct_wrong_neutral() {
        let exam = active_exam(
            "507",
            Area::CH,
            "1",
            json!({
                "46": question("A"),
                "47": question("B"),
                "48": question("C"),
            }),
        );

        let mut answers = AnswerSheet::new();
        answers.record(Day::One, "46", Some('A')); // correct
        answers.record(Day::One, "47", Some('E')); // wrong
        // 48 left blank

        let (rows, total) = build_rows(Day::One, &[exam], &answers, "../FIGS");
        assert_eq!(total, 1);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].row_class, "correct");
        assert_eq!(rows[1].row_class, "wrong");
        assert_eq!(rows[2].row_class, "");
        assert_eq!(rows[2].marked, "");
    }

    #[test]
    fn test_display_order_day_one() {
        let lc = active_exam(
            "511",
            Area::LC,
            "1",
            json!({
                "45": question("A"),
                "06": question("B"),
                "01": question("C"),
                "1": question("D"),
            }),
        );
        let ch = active_exam("507", Area::CH, "1", json!({"46": question("E")}));

        // CH variant listed first; order must still be Ing, Esp, LC, CH
        let (rows, _) = build_rows(Day::One, &[ch, lc], &AnswerSheet::new(), "../FIGS");
        let labels: Vec<&str> = rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["1 (Ing)", "01 (Esp)", "06", "45", "46"]);
    }

    #[test]
    fn test_display_order_day_two() {
        let cn = active_exam(
            "601",
            Area::CN,
            "2",
            json!({"135": question("A"), "91": question("B")}),
        );
        let mt = active_exam("602", Area::MT, "2", json!({"136": question("C")}));

        let (rows, _) = build_rows(Day::Two, &[mt, cn], &AnswerSheet::new(), "../FIGS");
        let labels: Vec<&str> = rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["91", "135", "136"]);
    }

    #[test]
    fn test_spanish_suppresses_tri_and_boxplot_links() {
        let imgs = json!(["q_tri.png", "q_box.png", "q_data.png", "q_help.html"]);
        let exam = active_exam(
            "511",
            Area::LC,
            "1",
            json!({
                "01": {"answer": "A", "images": imgs},
                "1": {"answer": "A", "images": imgs},
            }),
        );

        let (rows, _) = build_rows(Day::One, &[exam], &AnswerSheet::new(), "../FIGS");

        let ing = &rows[0];
        assert!(ing.links[0].contains("q_tri.png"));
        assert!(ing.links[1].contains("q_box.png"));
        assert!(ing.links[2].contains("q_data.png"));
        assert!(ing.links[3].contains("q_help.html"));

        let esp = &rows[1];
        assert_eq!(esp.links[0], "-");
        assert_eq!(esp.links[1], "-");
        assert!(esp.links[2].contains("q_data.png"));
        assert!(esp.links[3].contains("q_help.html"));
    }

    #[test]
    fn test_short_image_list_renders_no_links() {
        let exam = active_exam(
            "507",
            Area::CH,
            "1",
            json!({"46": {"answer": "A", "images": ["only_one.png"]}}),
        );

        let (rows, _) = build_rows(Day::One, &[exam], &AnswerSheet::new(), "../FIGS");
        assert_eq!(rows[0].links, ["-", "-", "-", "-"]);
    }

    #[test]
    fn test_generate_full_document() {
        let ctx = PageContext::parse("ENEM_2023_PROVA_DIA_1_CADERNO_AZUL").unwrap();
        let exam = active_exam("507", Area::CH, "1", json!({"46": question("B")}));

        let mut answers = AnswerSheet::new();
        answers.record(Day::One, "46", Some('B'));

        let report = generate(&ctx, &[exam], &answers, "../FIGS");
        assert_eq!(report.total_correct, 1);
        assert_eq!(report.row_count, 1);
        assert!(report.html.contains("<h1>ENEM Interativo</h1>"));
        assert!(report.html.contains("<strong>Prova:</strong> 2023"));
        assert!(report.html.contains("<strong>Cor:</strong> AZUL"));
        assert!(report.html.contains("class=\"correct\""));
        assert!(report.html.contains("toggleSpoiler"));
        assert!(report.html.contains("Acertos Totais: 1"));
    }
}
