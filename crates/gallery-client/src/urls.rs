pub const DEFAULT_API_URL: &str = "https://api.artic.edu/api/v1";
pub const DEFAULT_WEBSITE_URL: &str = "https://www.artic.edu";

/// IIIF image URL for a record's `image_id`, at the 843px display width.
pub fn image_url(website_url: &str, image_id: &str) -> String {
    format!(
        "{}/iiif/2/{image_id}/full/843,/0/default.jpg",
        website_url.trim_end_matches('/')
    )
}

/// Public page for an artwork on the museum website.
pub fn permalink(website_url: &str, id: u64) -> String {
    format!("{}/artworks/{id}", website_url.trim_end_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_url_template() {
        assert_eq!(
            image_url(DEFAULT_WEBSITE_URL, "abc-123"),
            "https://www.artic.edu/iiif/2/abc-123/full/843,/0/default.jpg"
        );
    }

    #[test]
    fn test_trailing_slash_is_ignored() {
        assert_eq!(
            permalink("https://www.artic.edu/", 27992),
            "https://www.artic.edu/artworks/27992"
        );
    }
}
