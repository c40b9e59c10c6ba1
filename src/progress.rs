// src/progress.rs
use std::fmt;

/// Pipeline stages, in the order they run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Fetch,
    Decode,
    Parse,
}

impl Stage {
    pub fn name(self) -> &'static str {
        match self {
            Stage::Fetch => "fetch",
            Stage::Decode => "decode",
            Stage::Parse => "parse",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Lightweight progress reporting for the scrape pipeline.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called when a stage starts.
    fn begin(&mut self, _stage: Stage) {}

    /// Called when a stage completed, with a short result detail.
    fn done(&mut self, _stage: Stage, _detail: &str) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}
}
