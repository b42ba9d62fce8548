//! Client for the Art Institute of Chicago public artworks API.
//!
//! The terminal gallery only needs two reads from the remote catalog: the
//! total number of artworks, and a single page of artwork records projected
//! to the handful of fields the gallery displays. Both are exposed through
//! the [`ArtworkCatalog`] trait so the fetch loop can run against a scripted
//! catalog in tests and against [`http_client::HttpCatalogClient`] in
//! production.

use async_trait::async_trait;

pub mod errors;
pub mod http_client;
pub mod types;
pub mod urls;

pub use errors::ClientError;
pub use types::*;
pub use urls::*;

/// Read access to a paginated artwork catalog.
#[async_trait]
pub trait ArtworkCatalog: Send + Sync {
    /// Total number of artworks the catalog reports.
    async fn total_artworks(&self) -> Result<u64, ClientError>;

    /// One page of records. Pages are 1-based.
    async fn artworks_page(&self, page: u64, limit: u32)
        -> Result<Vec<ArtworkRecord>, ClientError>;
}

pub type ArtworkCatalogBox = Box<dyn ArtworkCatalog>;
