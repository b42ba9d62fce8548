use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{url} responded with status {status}")]
    Status { url: String, status: u16 },
    #[error("Unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}
