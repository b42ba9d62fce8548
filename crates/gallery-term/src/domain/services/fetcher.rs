#[cfg(test)]
#[path = "fetcher_test.rs"]
mod tests;

use std::time::Duration;

use anyhow::Result;
use gallery_client::ArtworkCatalogBox;
use gallery_client::ArtworkRecord;
use gallery_client::ClientError;
use rand::Rng;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Artwork;
use crate::domain::models::BanList;
use crate::domain::models::FetchError;

pub const PAGE_SIZE: u32 = 12;

#[derive(Debug, Clone)]
pub struct FetcherOptions {
    pub page_size: u32,
    pub max_retries: u32,
    pub retry_delay: Duration,
    pub website_url: String,
}

impl Default for FetcherOptions {
    fn default() -> FetcherOptions {
        return FetcherOptions {
            page_size: PAGE_SIZE,
            max_retries: 5,
            retry_delay: Duration::ZERO,
            website_url: gallery_client::DEFAULT_WEBSITE_URL.to_string(),
        };
    }
}

impl FetcherOptions {
    pub fn from_config() -> Result<FetcherOptions> {
        return Ok(FetcherOptions {
            page_size: PAGE_SIZE,
            max_retries: Config::get_parsed::<u32>(ConfigKey::MaxRetries)?,
            retry_delay: Duration::from_millis(Config::get_parsed::<u64>(ConfigKey::RetryDelay)?),
            website_url: Config::get(ConfigKey::WebsiteUrl),
        });
    }
}

/// Picks a 1-based page uniformly over `total / page_size`, skipping pages
/// already in `attempted`. Once every reachable page was tried, any page may
/// repeat.
pub fn pick_page<R: Rng>(rng: &mut R, total: u64, page_size: u32, attempted: &[u64]) -> u64 {
    let span = total as f64 / page_size.max(1) as f64;
    let reachable = span.ceil().max(1.0) as u64;
    let exhausted = attempted.len() as u64 >= reachable;

    loop {
        let page = (rng.gen::<f64>() * span).floor() as u64 + 1;
        if exhausted || !attempted.contains(&page) {
            return page;
        }
    }
}

/// Records that have an image and match no ban rule.
pub fn eligible(records: Vec<ArtworkRecord>, ban_list: &BanList, website_url: &str) -> Vec<Artwork> {
    return records
        .into_iter()
        .filter_map(|record| Artwork::from_record(record, website_url))
        .filter(|artwork| !ban_list.matches(artwork))
        .collect();
}

fn failed(err: ClientError) -> FetchError {
    tracing::error!(error = %err, "Error fetching artwork");
    return FetchError::Failed(err.to_string());
}

pub struct ArtworkFetcher {
    catalog: ArtworkCatalogBox,
    options: FetcherOptions,
}

impl ArtworkFetcher {
    pub fn new(catalog: ArtworkCatalogBox, options: FetcherOptions) -> ArtworkFetcher {
        return ArtworkFetcher { catalog, options };
    }

    /// Finds one artwork that passes `ban_list`.
    ///
    /// Each attempt reads the catalog size and then a fresh random page. An
    /// attempt whose page has no eligible record counts as a retry; once
    /// retries exceed `max_retries` the fetch ends with `TooManyRestrictions`.
    /// Transport and decode failures end it immediately with `Failed`.
    pub async fn fetch<R: Rng + Send>(
        &self,
        ban_list: &BanList,
        rng: &mut R,
    ) -> Result<Artwork, FetchError> {
        let mut attempted: Vec<u64> = vec![];
        let mut retry: u32 = 0;

        loop {
            if retry > self.options.max_retries {
                tracing::warn!(attempts = retry, pages = ?attempted, "ban list excluded every attempted page");
                return Err(FetchError::TooManyRestrictions {
                    attempts: retry,
                    pages: attempted,
                });
            }

            let total = self.catalog.total_artworks().await.map_err(failed)?;
            let page = pick_page(rng, total, self.options.page_size, &attempted);
            attempted.push(page);

            let records = self
                .catalog
                .artworks_page(page, self.options.page_size)
                .await
                .map_err(failed)?;
            let fetched = records.len();
            let mut candidates = eligible(records, ban_list, &self.options.website_url);

            tracing::debug!(
                retry = retry,
                page = page,
                fetched = fetched,
                eligible = candidates.len(),
                "artwork page filtered"
            );

            if candidates.is_empty() {
                retry += 1;
                if !self.options.retry_delay.is_zero() {
                    tokio::time::sleep(self.options.retry_delay).await;
                }
                continue;
            }

            let index = rng.gen_range(0..candidates.len());
            return Ok(candidates.swap_remove(index));
        }
    }
}
