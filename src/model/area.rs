use serde::{Deserialize, Serialize};

/// Knowledge-area enum (the four ENEM subject bands)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Area {
    /// Linguagens e Códigos (dia 1, questões 1-45)
    LC,
    /// Ciências Humanas (dia 1, questões 46-90)
    CH,
    /// Ciências da Natureza (dia 2, questões 91-135)
    CN,
    /// Matemática (dia 2, questões 136-180)
    MT,
}

impl Area {
    /// Short tag used in the data files and in composite keys
    pub fn tag(self) -> &'static str {
        match self {
            Area::LC => "LC",
            Area::CH => "CH",
            Area::CN => "CN",
            Area::MT => "MT",
        }
    }

    /// Full area name
    pub fn name(self) -> &'static str {
        match self {
            Area::LC => "Linguagens e Códigos",
            Area::CH => "Ciências Humanas",
            Area::CN => "Ciências da Natureza",
            Area::MT => "Matemática",
        }
    }

    /// Parse an area from its short tag (exact match)
    pub fn from_tag(s: &str) -> Option<Self> {
        match s {
            "LC" => Some(Area::LC),
            "CH" => Some(Area::CH),
            "CN" => Some(Area::CN),
            "MT" => Some(Area::MT),
            _ => None,
        }
    }
}

impl std::fmt::Display for Area {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}
