// src/lib.rs

#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod core;
pub mod page;
pub mod progress;

pub use crate::core::{Document, ScrapeError};
pub use page::{scrape_default, scrape_page};
