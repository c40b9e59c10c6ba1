// src/core/mod.rs

pub mod decode;
pub mod error;
pub mod html;
pub mod net;
pub mod sanitize;

pub use error::{Result, ScrapeError};
pub use html::{Document, DocumentSummary};
