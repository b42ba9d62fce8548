use serde::{Deserialize, Serialize};

/// Fields requested for every artwork page.
pub const ARTWORK_FIELDS: &str =
    "id,title,artist_title,date_display,image_id,place_of_origin,medium_display,artist_id";

/// One artwork as returned by the `artworks` listing endpoint.
///
/// Every descriptive field is optional on the wire. Records without an
/// `image_id` exist in the catalog and are skipped by the gallery.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtworkRecord {
    pub id: u64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub artist_title: Option<String>,
    #[serde(default)]
    pub date_display: Option<String>,
    #[serde(default)]
    pub image_id: Option<String>,
    #[serde(default)]
    pub place_of_origin: Option<String>,
    #[serde(default)]
    pub medium_display: Option<String>,
    #[serde(default)]
    pub artist_id: Option<u64>,
}

impl ArtworkRecord {
    pub fn has_image(&self) -> bool {
        self.image_id
            .as_deref()
            .map(|id| !id.trim().is_empty())
            .unwrap_or(false)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub total: u64,
}

/// Body of `GET /artworks?limit=1`, reduced to what the gallery reads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountResponse {
    pub pagination: Pagination,
}

/// Body of `GET /artworks?page=P&limit=N&fields=...`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtworksPage {
    #[serde(default)]
    pub data: Vec<ArtworkRecord>,
}
