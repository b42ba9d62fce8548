use super::BanList;

#[derive(Debug, Clone)]
pub enum Action {
    /// Fetch one artwork that passes `ban_list`. The result is tagged with
    /// `generation` so the UI can drop answers to superseded requests.
    FetchArtwork { generation: u64, ban_list: BanList },
    FetchAbort,
}
