use std::time::Duration;

use anyhow::bail;
use anyhow::Result;
use gallery_client::http_client::HttpCatalogClient;
use gallery_client::ArtworkCatalogBox;

use crate::configuration::Config;
use crate::configuration::ConfigKey;

pub struct CatalogClientManager {}

impl CatalogClientManager {
    pub fn get() -> Result<ArtworkCatalogBox> {
        let api_url = Config::get(ConfigKey::ApiUrl);
        if api_url.is_empty() {
            bail!("api-url is not defined");
        }

        let mut client = HttpCatalogClient::new(api_url);
        let timeout = Config::get_parsed::<u64>(ConfigKey::RequestTimeout)?;
        if timeout > 0 {
            client = client.with_timeout(Duration::from_millis(timeout));
        }

        tracing::debug!(api_url = client.base_url(), timeout_ms = timeout, "catalog client");
        return Ok(Box::new(client));
    }
}
