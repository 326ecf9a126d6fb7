//! ENEM data documents
//!
//! Fetches the two JSON documents the session depends on: the exam map
//! (`mapa_provas.json`) and the year's item bank (`ITENS_PROVA_<year>.json`).
//! The map must load first; filtering depends on it. Failures are
//! propagated as-is: no retry, no partial state.

use tracing::{debug, info};

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::model::{ExamMap, ItemBank};

/// Client for the published ENEM data tree
pub struct DataLoader {
    client: reqwest::Client,
    base_url: String,
}

impl DataLoader {
    pub fn new(config: &Config) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.site_base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Load both documents sequentially: exam map first, then item bank.
    pub async fn load(&self, year: &str) -> AppResult<(ExamMap, ItemBank)> {
        let mapa = self.fetch_mapa(year).await?;
        info!("✓ mapa de provas carregado ({} IDs)", mapa.len());

        let bank = self.fetch_itens(year).await?;
        info!("✓ banco de itens {} carregado ({} variantes)", year, bank.len());

        Ok((mapa, bank))
    }

    async fn fetch_mapa(&self, year: &str) -> AppResult<ExamMap> {
        let url = format!("{}/{}/DADOS/mapa_provas.json", self.base_url, year);
        self.fetch_json(&url).await
    }

    async fn fetch_itens(&self, year: &str) -> AppResult<ItemBank> {
        let url = format!("{}/{}/DADOS/ITENS_PROVA_{}.json", self.base_url, year, year);
        self.fetch_json(&url).await
    }

    async fn fetch_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> AppResult<T> {
        debug!("buscando {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| AppError::request_failed(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::bad_status(url, status.as_u16()));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| AppError::json_parse_failed(url, e))
    }
}
