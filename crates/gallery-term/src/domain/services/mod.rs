pub mod actions;
mod app_state;
pub mod events;
mod fetcher;

pub use app_state::*;
pub use fetcher::*;
