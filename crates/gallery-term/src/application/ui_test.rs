use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;

use super::*;
use crate::domain::models::FetchError;

fn props() -> GalleryProps {
    return GalleryProps {
        website_url: gallery_client::DEFAULT_WEBSITE_URL.to_string(),
    };
}

fn artwork(id: u64, artist: Option<&str>) -> Artwork {
    return Artwork {
        id,
        title: Some(format!("Work {id}")),
        artist_title: artist.map(|e| e.to_string()),
        date_display: Some("1906".to_string()),
        place_of_origin: Some("France".to_string()),
        medium_display: Some("Oil on canvas".to_string()),
        image_id: format!("img-{id}"),
        image_url: format!("https://www.artic.edu/iiif/2/img-{id}/full/843,/0/default.jpg"),
        ..Default::default()
    };
}

fn buffer_text(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut lines = vec![];
    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            line.push_str(buffer[(x, y)].symbol());
        }
        lines.push(line);
    }

    return lines.join("\n");
}

fn draw(state: &GalleryState) -> String {
    let mut terminal = Terminal::new(TestBackend::new(140, 40)).unwrap();
    terminal
        .draw(|frame| render(frame, state, &props()))
        .unwrap();

    return buffer_text(terminal.backend().buffer());
}

fn load(state: GalleryState, artwork: Artwork) -> GalleryState {
    let (tx, _rx) = mpsc::unbounded_channel();
    let state = request_fetch(state, &tx).unwrap();
    let generation = state.generation;
    let (state, _) = handle_event(
        state,
        Event::ArtworkLoaded {
            generation,
            artwork,
        },
        &tx,
    )
    .unwrap();
    return state;
}

#[test]
fn it_requests_one_fetch_until_the_result_arrives() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let (state, quit) = handle_event(GalleryState::new(), Event::KeyboardEnter, &tx).unwrap();
    assert!(!quit);
    assert!(matches!(
        rx.try_recv(),
        Ok(Action::FetchArtwork { generation: 1, .. })
    ));

    let (state, _) = handle_event(state, Event::KeyboardChar('n'), &tx).unwrap();
    assert!(rx.try_recv().is_err());
    assert!(state.loading);
}

#[test]
fn it_cancels_loading_before_quitting() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let (state, _) = handle_event(GalleryState::new(), Event::KeyboardEnter, &tx).unwrap();
    let _ = rx.try_recv();

    let (state, quit) = handle_event(state, Event::KeyboardCTRLC, &tx).unwrap();
    assert!(!quit);
    assert!(!state.loading);
    assert!(matches!(rx.try_recv(), Ok(Action::FetchAbort)));

    let (_, quit) = handle_event(state, Event::KeyboardCTRLC, &tx).unwrap();
    assert!(quit);
}

#[test]
fn it_sends_current_bans_with_the_next_fetch() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let state = load(GalleryState::new(), artwork(1, Some("Claude Monet")));
    let (state, _) = handle_event(state, Event::KeyboardChar('1'), &tx).unwrap();
    let (_, _) = handle_event(state, Event::KeyboardEnter, &tx).unwrap();

    match rx.try_recv() {
        Ok(Action::FetchArtwork { ban_list, .. }) => {
            assert!(ban_list.contains(BanKind::Artist, "Claude Monet"));
        }
        other => panic!("unexpected action: {other:?}"),
    }
}

#[test]
fn it_renders_loading_indicator() {
    let (tx, _rx) = mpsc::unbounded_channel();
    let state = request_fetch(GalleryState::new(), &tx).unwrap();
    let text = draw(&state);

    assert!(text.contains("Finding interesting art for you..."));
    assert!(text.contains("Loading..."));
    assert!(!text.contains("Banned Items"));
    assert!(!text.contains("Previously Viewed Artworks"));
}

#[test]
fn it_renders_artwork_with_placeholders_and_panels() {
    let (tx, _rx) = mpsc::unbounded_channel();
    let state = load(GalleryState::new(), artwork(1, Some("Claude Monet")));
    let (state, _) = handle_event(state, Event::KeyboardChar('2'), &tx).unwrap();
    let state = load(state, artwork(2, None));
    let text = draw(&state);

    assert!(text.contains("Art Gallery"));
    assert!(text.contains("Show Me Another!"));
    assert!(text.contains("Work 2"));
    assert!(text.contains("Artist: Unknown"));
    assert!(text.contains("View at Art Institute of Chicago"));
    assert!(text.contains("https://www.artic.edu/artworks/2"));
    assert!(text.contains("Banned Items"));
    assert!(text.contains("origin: France"));
    assert!(text.contains("Previously Viewed Artworks"));
    assert!(text.contains("1. Work 1 by Claude Monet"));
    assert!(text.contains("2. Work 2 by Unknown"));
}

#[test]
fn it_renders_error_banner() {
    let (tx, _rx) = mpsc::unbounded_channel();
    let state = request_fetch(GalleryState::new(), &tx).unwrap();
    let generation = state.generation;
    let (state, _) = handle_event(
        state,
        Event::FetchFailed {
            generation,
            error: FetchError::Failed("connection refused".to_string()),
        },
        &tx,
    )
    .unwrap();
    let text = draw(&state);

    assert!(text.contains("Failed to fetch artwork. Please try again."));
    assert!(!text.contains("Finding interesting art for you..."));
}

#[test]
fn it_renders_blank_attributes_as_unknown_and_ignores_their_ban_key() {
    let (tx, _rx) = mpsc::unbounded_channel();
    let mut blank = artwork(3, Some("Claude Monet"));
    blank.place_of_origin = Some("   ".to_string());
    let state = load(GalleryState::new(), blank);
    let (state, _) = handle_event(state, Event::KeyboardChar('2'), &tx).unwrap();
    let text = draw(&state);

    assert!(text.contains("Origin: Unknown"));
    assert!(state.ban_list.is_empty());
    assert!(!text.contains("Banned Items"));
}
