//! Error types for the NBA prop card engine

use thiserror::Error;

pub type Result<T> = std::result::Result<T, PropsError>;

#[derive(Error, Debug)]
pub enum PropsError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV parsing failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("Storage error: {0}")]
    Storage(#[from] anyhow::Error),

    #[error("Invalid season: {0}")]
    InvalidSeason(#[from] std::num::ParseIntError),

    #[error("Game log feed is empty; refusing to build cards without history")]
    EmptyGameLogs,

    #[error("Prop line feed is empty")]
    EmptyPropFeed,

    #[error("Unrecognized {feed} feed shape")]
    UnrecognizedFeed { feed: String },

    #[error("No card runs stored yet")]
    NoStoredCards,
}
