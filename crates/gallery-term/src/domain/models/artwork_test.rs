use gallery_client::ArtworkRecord;
use gallery_client::DEFAULT_WEBSITE_URL;

use super::*;

fn record() -> ArtworkRecord {
    return ArtworkRecord {
        id: 16568,
        title: Some("Water Lilies".to_string()),
        artist_title: Some("Claude Monet".to_string()),
        date_display: Some("1906".to_string()),
        image_id: Some("3c27b499".to_string()),
        place_of_origin: Some("France".to_string()),
        medium_display: Some("Oil on canvas".to_string()),
        artist_id: Some(35809),
    };
}

#[test]
fn it_builds_image_url_and_permalink() {
    let artwork = Artwork::from_record(record(), DEFAULT_WEBSITE_URL).unwrap();

    assert_eq!(
        artwork.image_url,
        "https://www.artic.edu/iiif/2/3c27b499/full/843,/0/default.jpg"
    );
    assert_eq!(
        artwork.permalink(DEFAULT_WEBSITE_URL),
        "https://www.artic.edu/artworks/16568"
    );
}

#[test]
fn it_rejects_records_without_image() {
    let mut without_image = record();
    without_image.image_id = None;
    assert!(Artwork::from_record(without_image, DEFAULT_WEBSITE_URL).is_none());

    let mut blank_image = record();
    blank_image.image_id = Some("".to_string());
    assert!(Artwork::from_record(blank_image, DEFAULT_WEBSITE_URL).is_none());
}

#[test]
fn it_uses_placeholders_for_missing_attributes() {
    let mut sparse = record();
    sparse.title = Some("".to_string());
    sparse.artist_title = None;
    sparse.date_display = None;
    let artwork = Artwork::from_record(sparse, DEFAULT_WEBSITE_URL).unwrap();

    assert_eq!(artwork.display_title(), "Untitled");
    assert_eq!(artwork.display_attribute(BanKind::Artist), "Unknown");
    assert_eq!(artwork.attribute(BanKind::Artist), None);
    assert_eq!(artwork.display_date(), "Unknown");
    assert_eq!(artwork.display_attribute(BanKind::Origin), "France");
}
