/// Program configuration
#[derive(Clone, Debug)]
pub struct Config {
    /// Page identifier (year, day and color are derived from it)
    pub page_id: String,
    /// Base URL of the published ENEM data tree
    pub site_base_url: String,
    /// Base path used by the report's auxiliary-file links
    pub figs_base_url: String,
    /// Output path for the generated report document
    pub report_output: String,
    /// Verbose logging toggle
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page_id: "ENEM_2023_PROVA_DIA_1_CADERNO_AZUL".to_string(),
            site_base_url: "https://fzampirolli.github.io/ENEM".to_string(),
            figs_base_url: "../FIGS".to_string(),
            report_output: "relatorio.html".to_string(),
            verbose_logging: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            page_id: std::env::var("PAGE_ID").unwrap_or(default.page_id),
            site_base_url: std::env::var("SITE_BASE_URL").unwrap_or(default.site_base_url),
            figs_base_url: std::env::var("FIGS_BASE_URL").unwrap_or(default.figs_base_url),
            report_output: std::env::var("REPORT_OUTPUT").unwrap_or(default.report_output),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
        }
    }
}
