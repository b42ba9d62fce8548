mod action;
mod artwork;
mod ban;
mod event;
mod fetch_error;

pub use action::*;
pub use artwork::*;
pub use ban::*;
pub use event::*;
pub use fetch_error::*;
