// src/config/options.rs
use std::path::PathBuf;
use super::consts::DEFAULT_URL;

/// Where the page bytes come from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Source {
    Url(String),
    /// A previously saved copy of the page.
    File(PathBuf),
}

impl Default for Source {
    fn default() -> Self {
        Source::Url(DEFAULT_URL.to_string())
    }
}

impl Source {
    /// Human-readable location, used in logs and progress lines.
    pub fn location(&self) -> String {
        match self {
            Source::Url(url) => url.clone(),
            Source::File(path) => path.display().to_string(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunOptions {
    pub source: Source,
    pub summary: bool,  // print a document summary after parsing
    pub verbose: bool,  // stage progress on stderr
}
