#[cfg(test)]
#[path = "artwork_test.rs"]
mod tests;

use gallery_client::ArtworkRecord;
use serde::Deserialize;
use serde::Serialize;

use super::BanKind;

pub const UNTITLED: &str = "Untitled";
pub const UNKNOWN: &str = "Unknown";

/// An artwork that can be shown: it always carries an image.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Default, Debug)]
pub struct Artwork {
    pub id: u64,
    pub title: Option<String>,
    pub artist_title: Option<String>,
    pub artist_id: Option<u64>,
    pub date_display: Option<String>,
    pub place_of_origin: Option<String>,
    pub medium_display: Option<String>,
    pub image_id: String,
    pub image_url: String,
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|e| !e.trim().is_empty())
}

impl Artwork {
    /// Returns `None` for records without an image.
    pub fn from_record(record: ArtworkRecord, website_url: &str) -> Option<Artwork> {
        if !record.has_image() {
            return None;
        }

        let image_id = record.image_id.unwrap_or_default();
        return Some(Artwork {
            id: record.id,
            title: record.title,
            artist_title: record.artist_title,
            artist_id: record.artist_id,
            date_display: record.date_display,
            place_of_origin: record.place_of_origin,
            medium_display: record.medium_display,
            image_url: gallery_client::image_url(website_url, &image_id),
            image_id,
        });
    }

    /// The value a ban of `kind` would be compared against.
    pub fn attribute(&self, kind: BanKind) -> Option<&str> {
        match kind {
            BanKind::Artist => present(&self.artist_title),
            BanKind::Origin => present(&self.place_of_origin),
            BanKind::Medium => present(&self.medium_display),
        }
    }

    pub fn display_attribute(&self, kind: BanKind) -> &str {
        return self.attribute(kind).unwrap_or(UNKNOWN);
    }

    pub fn display_title(&self) -> &str {
        return present(&self.title).unwrap_or(UNTITLED);
    }

    pub fn display_date(&self) -> &str {
        return present(&self.date_display).unwrap_or(UNKNOWN);
    }

    pub fn permalink(&self, website_url: &str) -> String {
        return gallery_client::permalink(website_url, self.id);
    }
}
