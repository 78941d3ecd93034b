//! Error type for the listing pipeline.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ListingError {
    #[error("HTTP error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Request failed with status code {0}")]
    Status(u16),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid request: {0}")]
    Request(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

pub type Result<T> = std::result::Result<T, ListingError>;
