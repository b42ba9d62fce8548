#[cfg(test)]
#[path = "app_state_test.rs"]
mod tests;

use crate::domain::models::Action;
use crate::domain::models::Artwork;
use crate::domain::models::BanKind;
use crate::domain::models::BanList;
use crate::domain::models::FetchError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Focus {
    #[default]
    BanList,
    History,
}

/// Every change the UI can make to the gallery session.
#[derive(Clone, Debug)]
pub enum Transition {
    FetchRequested,
    FetchCancelled,
    ArtworkLoaded { generation: u64, artwork: Artwork },
    FetchFailed { generation: u64, error: FetchError },
    /// Ban the current artwork's value for `kind`. A missing value bans nothing.
    BanAttribute(BanKind),
    Ban { kind: BanKind, value: String },
    Unban { kind: BanKind, value: String },
    UnbanSelected,
    ClearBans,
    FocusNext,
    CursorUp,
    CursorDown,
    ToggleHelp,
    Tick,
}

#[derive(Clone, Debug, Default)]
pub struct GalleryState {
    pub artwork: Option<Artwork>,
    pub history: Vec<Artwork>,
    pub ban_list: BanList,
    pub loading: bool,
    pub error: Option<FetchError>,
    pub generation: u64,
    pub focus: Focus,
    pub ban_cursor: usize,
    pub history_scroll: usize,
    pub show_help: bool,
    pub tick: usize,
}

impl GalleryState {
    pub fn new() -> GalleryState {
        return GalleryState::default();
    }

    pub fn reduce(mut self, transition: Transition) -> GalleryState {
        match transition {
            Transition::FetchRequested => {
                if self.loading {
                    return self;
                }
                self.loading = true;
                self.error = None;
                self.generation += 1;
            }
            Transition::FetchCancelled => {
                if self.loading {
                    self.loading = false;
                    self.generation += 1;
                }
            }
            Transition::ArtworkLoaded {
                generation,
                artwork,
            } => {
                if !self.is_current(generation) {
                    tracing::debug!(generation = generation, current = self.generation, "dropping stale artwork");
                    return self;
                }
                self.history.push(artwork.clone());
                self.artwork = Some(artwork);
                self.loading = false;
                self.error = None;
            }
            Transition::FetchFailed { generation, error } => {
                if !self.is_current(generation) {
                    tracing::debug!(generation = generation, current = self.generation, "dropping stale failure");
                    return self;
                }
                self.error = Some(error);
                self.loading = false;
            }
            Transition::BanAttribute(kind) => {
                let value = self
                    .artwork
                    .as_ref()
                    .and_then(|artwork| artwork.attribute(kind))
                    .map(|value| value.to_string());
                if let Some(value) = value {
                    self.ban_list.add(kind, &value);
                }
            }
            Transition::Ban { kind, value } => {
                self.ban_list.add(kind, &value);
            }
            Transition::Unban { kind, value } => {
                self.ban_list.remove(kind, &value);
                self.clamp_cursor();
            }
            Transition::UnbanSelected => {
                if let Some(rule) = self.ban_list.get(self.ban_cursor).cloned() {
                    self.ban_list.remove(rule.kind, &rule.value);
                }
                self.clamp_cursor();
            }
            Transition::ClearBans => {
                self.ban_list.clear();
                self.ban_cursor = 0;
            }
            Transition::FocusNext => {
                self.focus = match self.focus {
                    Focus::BanList => Focus::History,
                    Focus::History => Focus::BanList,
                };
            }
            Transition::CursorUp => match self.focus {
                Focus::BanList => self.ban_cursor = self.ban_cursor.saturating_sub(1),
                Focus::History => self.history_scroll = self.history_scroll.saturating_sub(1),
            },
            Transition::CursorDown => match self.focus {
                Focus::BanList => {
                    if self.ban_cursor + 1 < self.ban_list.len() {
                        self.ban_cursor += 1;
                    }
                }
                Focus::History => {
                    if self.history_scroll + 1 < self.history.len() {
                        self.history_scroll += 1;
                    }
                }
            },
            Transition::ToggleHelp => {
                self.show_help = !self.show_help;
            }
            Transition::Tick => {
                self.tick = self.tick.wrapping_add(1);
            }
        }

        return self;
    }

    fn is_current(&self, generation: u64) -> bool {
        return self.loading && generation == self.generation;
    }

    fn clamp_cursor(&mut self) {
        if self.ban_cursor >= self.ban_list.len() {
            self.ban_cursor = self.ban_list.len().saturating_sub(1);
        }
    }

    /// The request matching the current generation and ban list.
    pub fn fetch_action(&self) -> Action {
        return Action::FetchArtwork {
            generation: self.generation,
            ban_list: self.ban_list.clone(),
        };
    }
}
