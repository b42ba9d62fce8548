use thiserror::Error;

/// Terminal outcomes of a fetch. Neither is retried automatically.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("Too many restrictions in ban list. Please remove some items and try again.")]
    TooManyRestrictions { attempts: u32, pages: Vec<u64> },
    #[error("Failed to fetch artwork. Please try again.")]
    Failed(String),
}
