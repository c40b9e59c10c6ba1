// src/log.rs
use std::fmt;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock};
use std::time::Instant;

use crate::config::consts::{LOG_FILE, STORE_DIR};

static LOG_LOCK: Mutex<()> = Mutex::new(());
static START: OnceLock<Instant> = OnceLock::new();
static LOG_DIR: OnceLock<PathBuf> = OnceLock::new();

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Info,
    Debug,
    Error,
}

impl Level {
    pub fn tag(self) -> &'static str {
        match self {
            Level::Info => "INFO",
            Level::Debug => "DEBUG",
            Level::Error => "ERROR",
        }
    }
}

fn start() -> Instant {
    *START.get_or_init(Instant::now)
}

fn default_dir() -> PathBuf {
    if cfg!(test) {
        std::env::temp_dir().join("fbref_scrape_unit")
    } else {
        PathBuf::from(STORE_DIR)
    }
}

/// Redirect the debug log. Only the first call wins, and only if nothing
/// has been logged yet.
pub fn set_log_dir(dir: impl Into<PathBuf>) -> bool {
    LOG_DIR.set(dir.into()).is_ok()
}

pub fn log_dir() -> &'static Path {
    LOG_DIR.get_or_init(default_dir)
}

pub fn log_path() -> PathBuf {
    log_dir().join(LOG_FILE)
}

pub(crate) fn fmt_elapsed(ms: u128) -> String {
    let ms = ms as u64;
    format!(
        "{:02}:{:02}:{:02}.{:03}",
        ms / 3_600_000,
        ms / 60_000 % 60,
        ms / 1_000 % 60,
        ms % 1_000
    )
}

pub(crate) fn format_line(elapsed_ms: u128, level: Level, msg: fmt::Arguments<'_>) -> String {
    format!("[{}][{}] {msg}\n", fmt_elapsed(elapsed_ms), level.tag())
}

/// Append one line to the debug log. Best-effort: IO errors are swallowed.
pub fn write_log(level: Level, msg: fmt::Arguments<'_>) {
    let line = format_line(start().elapsed().as_millis(), level, msg);

    let Ok(_guard) = LOG_LOCK.lock() else { return };
    let _ = fs::create_dir_all(log_dir());
    if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(log_path()) {
        let _ = file.write_all(line.as_bytes());
    }
}

#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        $crate::log::write_log($crate::log::Level::Info, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        $crate::log::write_log($crate::log::Level::Debug, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        $crate::log::write_log($crate::log::Level::Error, format_args!($($arg)*))
    };
}
