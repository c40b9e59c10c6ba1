// src/page.rs
//! The whole job: fetch the page once, decode it, parse it.
//!
//! ```text
//! cli → page::scrape_page → core::net::fetch → core::decode::decode_utf8 → Document::parse
//! ```
//!
//! Each stage runs exactly once, in order. The first error is returned as-is;
//! nothing is retried.

use crate::config::consts::DEFAULT_URL;
use crate::core::decode::decode_utf8;
use crate::core::net::{self, HttpTransport, Transport};
use crate::core::{Document, Result};
use crate::progress::{Progress, Stage};

pub fn scrape_page(
    transport: &dyn Transport,
    url: &str,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Document> {
    logf!("Scrape start: {url}");

    if let Some(p) = progress.as_deref_mut() {
        p.begin(Stage::Fetch);
    }
    let bytes = net::fetch(transport, url)?;
    if let Some(p) = progress.as_deref_mut() {
        p.done(Stage::Fetch, &format!("{} bytes", bytes.len()));
        p.begin(Stage::Decode);
    }

    let text = decode_utf8(bytes).inspect_err(|e| loge!("Decode {url}: {e}"))?;
    let chars = text.chars().count();
    logd!("Decoded {chars} chars");
    if let Some(p) = progress.as_deref_mut() {
        p.done(Stage::Decode, &format!("{chars} chars"));
        p.begin(Stage::Parse);
    }

    let doc = Document::parse(&text);
    logf!(
        "Parsed {} elements ({} recovered parse errors)",
        doc.element_count(),
        doc.recoveries()
    );
    if let Some(p) = progress.as_deref_mut() {
        p.done(Stage::Parse, &format!("{} elements", doc.element_count()));
    }

    Ok(doc)
}

/// Fetch and parse the Premier League 2021-2022 stats page over HTTP.
pub fn scrape_default(progress: Option<&mut dyn Progress>) -> Result<Document> {
    let transport = HttpTransport::new()?;
    scrape_page(&transport, DEFAULT_URL, progress)
}
