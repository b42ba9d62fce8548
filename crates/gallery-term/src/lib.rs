//! Terminal gallery of random artworks from the Art Institute of Chicago.
//!
//! This crate shows one random artwork at a time, lets the user ban artists,
//! origins, or mediums from future picks, and keeps a history of everything
//! shown during the session.

pub mod application;
pub mod configuration;
pub mod domain;
pub mod infrastructure;
pub use application::ui::{destruct_terminal_for_panic, start, start_loop};
pub use configuration::{Config, ConfigKey};
pub use domain::models::{Action, Artwork, BanKind, BanList, BanRule, Event, FetchError};
pub use domain::services::{ArtworkFetcher, FetcherOptions, GalleryState, Transition};
