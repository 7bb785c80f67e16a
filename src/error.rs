use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BoardError {
    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("invalid server URL {0}")]
    InvalidUrl(String),

    #[error("{url} answered with status {status}")]
    Status { url: String, status: u16 },

    #[error("malformed tile list: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("audio playback failed: {0}")]
    Audio(String),

    #[error("page {index} out of range (board has {len} pages)")]
    PageOutOfRange { index: usize, len: usize },

    #[error("control {index} out of range (page {page} has {len} controls)")]
    TileOutOfRange { page: usize, index: usize, len: usize },

    #[error("a board needs at least one page")]
    EmptyBoard,
}

pub type Result<T> = std::result::Result<T, BoardError>;

impl From<rodio::decoder::DecoderError> for BoardError {
    fn from(e: rodio::decoder::DecoderError) -> Self {
        BoardError::Audio(format!("decode: {e}"))
    }
}

impl From<rodio::StreamError> for BoardError {
    fn from(e: rodio::StreamError) -> Self {
        BoardError::Audio(format!("output stream: {e}"))
    }
}

impl From<rodio::PlayError> for BoardError {
    fn from(e: rodio::PlayError) -> Self {
        BoardError::Audio(format!("sink: {e}"))
    }
}
