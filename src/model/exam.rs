use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::area::Area;

/// Exam map document (`mapa_provas.json`): item-bank ID -> variant-group id.
///
/// Presence of an ID is the inclusion signal; the group value records which
/// physical booklet the variant belongs to (e.g. "507_511") and is carried
/// through without influencing filtering.
pub type ExamMap = BTreeMap<String, String>;

/// Item bank document (`ITENS_PROVA_<year>.json`): item-bank ID -> exam entry.
pub type ItemBank = BTreeMap<String, ExamEntry>;

/// One exam variant as stored in the item bank
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExamEntry {
    #[serde(rename = "COR")]
    pub cor: String,
    #[serde(rename = "AREA")]
    pub area: Area,
    #[serde(rename = "DIA", default = "day_nd")]
    pub dia: String,
    #[serde(rename = "PROOF_TYPE", default)]
    pub proof_type: String,
    #[serde(rename = "CO_POSICAO", default, deserialize_with = "deserialize_code")]
    pub co_posicao: Option<String>,
    #[serde(rename = "TOTAL_ALUNOS", default)]
    pub total_alunos: u64,
    #[serde(rename = "APLICACAO", default)]
    pub aplicacao: String,
    #[serde(rename = "ARQUIVO_PDF", default)]
    pub arquivo_pdf: String,
    #[serde(rename = "QUESTIONS", default)]
    pub questions: BTreeMap<String, QuestionData>,
}

/// One question as stored in an exam variant
///
/// The map key is the local question number; its *string form* matters
/// ("01" is Spanish question 1, "1" is English question 1).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionData {
    /// Correct alternative letter
    pub answer: String,
    /// Ability code; arrives as number or null in the data files
    #[serde(default, deserialize_with = "deserialize_code")]
    pub ability: Option<String>,
    /// Item identifier in the national bank
    #[serde(default, deserialize_with = "deserialize_code")]
    pub id: Option<String>,
    #[serde(default)]
    pub percentage: f64,
    #[serde(default)]
    pub irt: Vec<serde_json::Value>,
    /// Auxiliary files, in order: TRI curve, boxplot, question slice, help
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub videos: Vec<String>,
    #[serde(default)]
    pub subareas: Vec<serde_json::Value>,
    #[serde(default)]
    pub idioma: Option<String>,
}

fn day_nd() -> String {
    "ND".to_string()
}

/// Deserialize a code field that may arrive as number, string or null
fn deserialize_code<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Visitor;
    use std::fmt;

    struct CodeVisitor;

    impl<'de> Visitor<'de> for CodeVisitor {
        type Value = Option<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a numeric code, a string or null")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(Some(value.to_string()))
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(Some(value.to_string()))
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(Some(value.to_string()))
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(None)
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(None)
        }

        fn visit_some<D2>(self, deserializer: D2) -> Result<Self::Value, D2::Error>
        where
            D2: serde::Deserializer<'de>,
        {
            deserializer.deserialize_any(CodeVisitor)
        }
    }

    deserializer.deserialize_any(CodeVisitor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_exam_entry() {
        let raw = r#"{
            "COR": "AZUL",
            "AREA": "LC",
            "PROOF_TYPE": "507_511",
            "DIA": "1",
            "CO_POSICAO": 1,
            "TOTAL_ALUNOS": 123456,
            "APLICACAO": "Regular",
            "ARQUIVO_PDF": "caderno_azul_dia1.pdf",
            "QUESTIONS": {
                "1": {
                    "answer": "B",
                    "ability": 5,
                    "id": 98765,
                    "percentage": 0,
                    "irt": [],
                    "images": [],
                    "videos": [],
                    "subareas": [],
                    "idioma": "inglês"
                },
                "01": {
                    "answer": "C",
                    "ability": null,
                    "id": 98766,
                    "idioma": "espanhol"
                }
            }
        }"#;

        let entry: ExamEntry = serde_json::from_str(raw).unwrap();
        assert_eq!(entry.cor, "AZUL");
        assert_eq!(entry.area, Area::LC);
        assert_eq!(entry.dia, "1");
        assert_eq!(entry.co_posicao.as_deref(), Some("1"));
        assert_eq!(entry.questions.len(), 2);

        let ing = &entry.questions["1"];
        assert_eq!(ing.answer, "B");
        assert_eq!(ing.ability.as_deref(), Some("5"));
        assert_eq!(ing.id.as_deref(), Some("98765"));

        // null ability and omitted lists fall back cleanly
        let esp = &entry.questions["01"];
        assert_eq!(esp.ability, None);
        assert!(esp.images.is_empty());
    }

    #[test]
    fn test_deserialize_rejects_unknown_area() {
        let raw = r#"{"COR": "AZUL", "AREA": "XYZ", "DIA": "1", "QUESTIONS": {}}"#;
        assert!(serde_json::from_str::<ExamEntry>(raw).is_err());
    }

    #[test]
    fn test_exam_map_shape() {
        let raw = r#"{"507": "507_511", "511": "507_511"}"#;
        let mapa: ExamMap = serde_json::from_str(raw).unwrap();
        assert_eq!(mapa.len(), 2);
        assert_eq!(mapa["507"], "507_511");
    }
}
