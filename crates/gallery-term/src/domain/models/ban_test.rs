use std::str::FromStr;

use super::*;

fn monet() -> Artwork {
    return Artwork {
        id: 1,
        title: Some("Water Lilies".to_string()),
        artist_title: Some("Claude Monet".to_string()),
        place_of_origin: Some("France".to_string()),
        medium_display: Some("Oil on canvas".to_string()),
        image_id: "img".to_string(),
        ..Default::default()
    };
}

#[test]
fn it_adds_each_pair_once() {
    let mut ban_list = BanList::default();

    assert!(ban_list.add(BanKind::Artist, "Claude Monet"));
    assert!(!ban_list.add(BanKind::Artist, "Claude Monet"));
    assert!(ban_list.add(BanKind::Origin, "Claude Monet"));

    assert_eq!(ban_list.len(), 2);
}

#[test]
fn it_ignores_blank_values() {
    let mut ban_list = BanList::default();

    assert!(!ban_list.add(BanKind::Medium, ""));
    assert!(!ban_list.add(BanKind::Medium, "   "));
    assert!(ban_list.is_empty());
}

#[test]
fn it_removes_matching_pair_only() {
    let mut ban_list = BanList::default();
    ban_list.add(BanKind::Artist, "Claude Monet");
    ban_list.add(BanKind::Origin, "France");

    assert!(!ban_list.remove(BanKind::Artist, "France"));
    assert_eq!(ban_list.len(), 2);

    assert!(ban_list.remove(BanKind::Artist, "Claude Monet"));
    assert_eq!(ban_list.len(), 1);
    assert_eq!(ban_list.get(0), Some(&BanRule::new(BanKind::Origin, "France")));
}

#[test]
fn it_matches_on_exact_attribute() {
    let mut ban_list = BanList::default();
    ban_list.add(BanKind::Artist, "claude monet");
    ban_list.add(BanKind::Medium, "France");
    assert!(!ban_list.matches(&monet()));

    ban_list.add(BanKind::Origin, "France");
    assert!(ban_list.matches(&monet()));

    ban_list.clear();
    assert!(!ban_list.matches(&monet()));
}

#[test]
fn it_parses_kind_names() {
    assert_eq!(BanKind::from_str("medium"), Ok(BanKind::Medium));
    assert_eq!(BanKind::Origin.to_string(), "origin");
    assert!(BanKind::from_str("Artist").is_err());
}
