// src/cli.rs
use std::io::{self, Write};
use std::path::PathBuf;

use crate::config::options::{RunOptions, Source};
use crate::core::net::{FileTransport, HttpTransport, Transport};
use crate::core::{DocumentSummary, Result, ScrapeError};
use crate::page;
use crate::progress::{Progress, Stage};

pub const HELP: &str = include_str!("cli_help.txt");

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Run(RunOptions),
    Help,
}

/// Parse arguments (program name already skipped).
pub fn parse_args<I>(args: I) -> Result<Command>
where
    I: IntoIterator<Item = String>,
{
    let mut opts = RunOptions::default();
    let mut url: Option<String> = None;
    let mut file: Option<PathBuf> = None;

    let mut args = args.into_iter();
    while let Some(a) = args.next() {
        match a.as_str() {
            "-f" | "--file" => {
                let v = args.next().ok_or_else(|| usage("Missing value for --file"))?;
                file = Some(PathBuf::from(v));
            }
            "-s" | "--summary" => opts.summary = true,
            "-v" | "--verbose" => opts.verbose = true,
            "-h" | "--help" => return Ok(Command::Help),
            flag if flag.starts_with('-') => {
                return Err(usage(&format!("Unknown arg: {flag}")));
            }
            _ => {
                if url.is_some() {
                    return Err(usage(&format!("Unexpected extra argument: {a}")));
                }
                url = Some(a);
            }
        }
    }

    opts.source = match (url, file) {
        (Some(_), Some(_)) => return Err(usage("Give either a URL or --file, not both")),
        (Some(u), None) => Source::Url(u),
        (None, Some(p)) => Source::File(p),
        (None, None) => Source::default(),
    };
    Ok(Command::Run(opts))
}

fn usage(msg: &str) -> ScrapeError {
    ScrapeError::Usage(format!("{msg}\n\n{HELP}"))
}

/// Stage lines on stderr for `--verbose`.
pub struct StderrProgress;

impl Progress for StderrProgress {
    fn begin(&mut self, stage: Stage) {
        eprintln!("{stage}…");
    }
    fn done(&mut self, stage: Stage, detail: &str) {
        eprintln!("{stage}: {detail}");
    }
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
}

pub fn run(opts: &RunOptions) -> Result<()> {
    let location = opts.source.location();
    let transport: Box<dyn Transport> = match &opts.source {
        Source::Url(_) => Box::new(HttpTransport::new()?),
        Source::File(path) => Box::new(FileTransport::new(path)),
    };

    let mut stderr_progress = StderrProgress;
    let progress: Option<&mut dyn Progress> = if opts.verbose {
        stderr_progress.log(&format!("Source: {location}"));
        Some(&mut stderr_progress)
    } else {
        None
    };

    let doc = page::scrape_page(transport.as_ref(), &location, progress)?;

    if opts.summary {
        let mut out = io::stdout().lock();
        write_summary(&mut out, &doc.summary()).map_err(|source| ScrapeError::Io {
            path: PathBuf::from("<stdout>"),
            source,
        })?;
    }
    Ok(())
}

pub fn write_summary<W: Write>(w: &mut W, s: &DocumentSummary) -> io::Result<()> {
    writeln!(w, "title: {}", s.title.as_deref().unwrap_or("-"))?;
    let root = if s.root_elements.is_empty() {
        "-".to_string()
    } else {
        s.root_elements.join(",")
    };
    writeln!(w, "root: {root}")?;
    writeln!(w, "elements: {}", s.elements)?;
    writeln!(w, "tables: {}", s.tables)?;
    writeln!(w, "recovered: {}", s.recoveries)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_lines() {
        let s = DocumentSummary {
            title: Some("Stats".into()),
            root_elements: vec!["html".into()],
            elements: 12,
            tables: 3,
            recoveries: 1,
        };
        let mut buf = Vec::new();
        write_summary(&mut buf, &s).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "title: Stats\nroot: html\nelements: 12\ntables: 3\nrecovered: 1\n"
        );
    }

    #[test]
    fn summary_of_empty_document() {
        let s = DocumentSummary {
            title: None,
            root_elements: Vec::new(),
            elements: 0,
            tables: 0,
            recoveries: 0,
        };
        let mut buf = Vec::new();
        write_summary(&mut buf, &s).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("title: -\nroot: -\n"));
    }
}
