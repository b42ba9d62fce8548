use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::{ArtworkCatalog, ArtworkRecord, ArtworksPage, ClientError, CountResponse, ARTWORK_FIELDS};

/// HTTP client for the remote artworks API
pub struct HttpCatalogClient {
    base_url: String,
    client: reqwest::Client,
    timeout: Option<Duration>,
}

impl HttpCatalogClient {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
            timeout: None,
        }
    }

    /// Apply a per-request timeout. Requests have none by default.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<T, ClientError> {
        let mut request = self.client.get(url).query(query);
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::error!(url = url, status = status.as_u16(), "catalog request failed");
            return Err(ClientError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl ArtworkCatalog for HttpCatalogClient {
    async fn total_artworks(&self) -> Result<u64, ClientError> {
        let url = format!("{}/artworks", self.base_url);
        let count: CountResponse = self.get_json(&url, &[("limit", "1".to_string())]).await?;

        tracing::debug!(total = count.pagination.total, "catalog size");
        Ok(count.pagination.total)
    }

    async fn artworks_page(
        &self,
        page: u64,
        limit: u32,
    ) -> Result<Vec<ArtworkRecord>, ClientError> {
        let url = format!("{}/artworks", self.base_url);
        let query = [
            ("page", page.to_string()),
            ("limit", limit.to_string()),
            ("fields", ARTWORK_FIELDS.to_string()),
        ];
        let page_data: ArtworksPage = self.get_json(&url, &query).await?;

        tracing::debug!(page = page, records = page_data.data.len(), "catalog page");
        Ok(page_data.data)
    }
}
