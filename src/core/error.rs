// src/core/error.rs
//! Errors for the fetch → decode → parse pipeline.
//!
//! Flat on purpose: every variant is fatal to the run, callers only report it.

use std::path::PathBuf;
use std::string::FromUtf8Error;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ScrapeError>;

#[derive(Debug, Error)]
pub enum ScrapeError {
    /// DNS, connect, TLS or body-read failure.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("HTTP error: {status} {url}")]
    Status { url: String, status: u16 },

    #[error("could not read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("response body is not valid UTF-8 (first invalid byte at offset {valid_up_to})")]
    Decode {
        valid_up_to: usize,
        #[source]
        source: FromUtf8Error,
    },

    #[error("invalid selector {0}")]
    Selector(String),

    #[error("{0}")]
    Usage(String),
}

impl From<FromUtf8Error> for ScrapeError {
    fn from(source: FromUtf8Error) -> Self {
        ScrapeError::Decode {
            valid_up_to: source.utf8_error().valid_up_to(),
            source,
        }
    }
}
