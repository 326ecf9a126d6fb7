/// Exam day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Day {
    One,
    Two,
}

impl Day {
    /// Day as stored in the data files ("1" / "2")
    pub fn as_str(self) -> &'static str {
        match self {
            Day::One => "1",
            Day::Two => "2",
        }
    }

    pub fn from_segment(s: &str) -> Option<Self> {
        match s {
            "1" => Some(Day::One),
            "2" => Some(Day::Two),
            _ => None,
        }
    }
}

impl std::fmt::Display for Day {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Resolved page identity: which exam the session reviews
///
/// Derived from the page identifier string, e.g.
/// `ENEM_2023_PROVA_DIA_1_CADERNO_AZUL` -> year 2023, day 1, color AZUL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageContext {
    pub year: String,
    pub day: Day,
    pub color: String,
}

impl PageContext {
    /// Parse the segmented page identifier.
    ///
    /// Requires at least 6 segments, the year at index 1, a literal `DIA`
    /// marker followed by the day, and the color as the last segment.
    /// Returns `None` on any shortfall: a malformed identifier is a silent
    /// no-op, never a hard error.
    pub fn parse(page_id: &str) -> Option<Self> {
        let parts: Vec<&str> = page_id.split('_').collect();
        if parts.len() < 6 {
            return None;
        }

        let year = parts[1].to_string();
        let dia_index = parts.iter().position(|p| *p == "DIA")?;
        let day = Day::from_segment(parts.get(dia_index + 1)?)?;
        let color = (*parts.last()?).to_string();

        Some(Self { year, day, color })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_day_one_identifier() {
        let ctx = PageContext::parse("ENEM_2023_PROVA_DIA_1_CADERNO_AZUL").unwrap();
        assert_eq!(ctx.year, "2023");
        assert_eq!(ctx.day, Day::One);
        assert_eq!(ctx.color, "AZUL");
    }

    #[test]
    fn test_parse_day_two_identifier() {
        let ctx = PageContext::parse("ENEM_2019_PROVA_DIA_2_CADERNO_AMARELO").unwrap();
        assert_eq!(ctx.year, "2019");
        assert_eq!(ctx.day, Day::Two);
        assert_eq!(ctx.color, "AMARELO");
    }

    #[test]
    fn test_parse_rejects_short_identifier() {
        // fewer than 6 segments: the app must not initialize
        assert_eq!(PageContext::parse("ENEM_2023_DIA_1"), None);
        assert_eq!(PageContext::parse(""), None);
    }

    #[test]
    fn test_parse_rejects_missing_day_marker() {
        assert_eq!(PageContext::parse("ENEM_2023_PROVA_CADERNO_ROSA_AZUL"), None);
        // DIA marker present but followed by garbage
        assert_eq!(PageContext::parse("ENEM_2023_PROVA_DIA_X_CADERNO_AZUL"), None);
    }
}
