// src/core/net.rs
// One blocking GET, whole body in memory.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use reqwest::blocking::Client;

use super::error::{Result, ScrapeError};

/// Turns a location into the raw response body.
pub trait Transport {
    fn get(&self, url: &str) -> Result<Vec<u8>>;
}

/// Plain HTTP(S) over a blocking reqwest client.
///
/// Default headers, redirects followed, and no timeout: the call blocks until
/// the response completes or the transport fails.
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .timeout(None::<Duration>)
            .build()?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &str) -> Result<Vec<u8>> {
        let resp = self.client.get(url).send()?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ScrapeError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(resp.bytes()?.to_vec())
    }
}

/// Reads a saved page from disk. The `url` passed to `get` is ignored.
pub struct FileTransport {
    path: PathBuf,
}

impl FileTransport {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Transport for FileTransport {
    fn get(&self, _url: &str) -> Result<Vec<u8>> {
        fs::read(&self.path).map_err(|source| ScrapeError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

/// Fetch `url` once through `transport`.
pub fn fetch(transport: &dyn Transport, url: &str) -> Result<Vec<u8>> {
    logd!("GET {url}");
    match transport.get(url) {
        Ok(body) => {
            logf!("Fetched {} bytes from {url}", body.len());
            Ok(body)
        }
        Err(e) => {
            loge!("Fetch {url}: {e}");
            Err(e)
        }
    }
}
