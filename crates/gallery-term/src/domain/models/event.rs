use super::Artwork;
use super::FetchError;

#[derive(Debug)]
pub enum Event {
    ArtworkLoaded { generation: u64, artwork: Artwork },
    FetchFailed { generation: u64, error: FetchError },
    KeyboardChar(char),
    KeyboardCTRLC,
    KeyboardDelete,
    KeyboardEnter,
    KeyboardTab,
    UITick,
    UIScrollDown,
    UIScrollUp,
}
