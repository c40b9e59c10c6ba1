// tests/cli_args.rs
//
// Argument parsing and offline runs through --file.
//
use std::fs;
use std::path::PathBuf;

use fbref_scrape::cli::{self, Command};
use fbref_scrape::config::consts::DEFAULT_URL;
use fbref_scrape::config::options::{RunOptions, Source};
use fbref_scrape::ScrapeError;

fn args(v: &[&str]) -> Vec<String> {
    v.iter().map(|s| s.to_string()).collect()
}

fn tmp(path: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(path);
    p
}

fn quiet_logs() {
    let _ = fbref_scrape::log::set_log_dir(std::env::temp_dir().join("fbref_scrape_tests"));
}

#[test]
fn no_args_targets_default_page() {
    quiet_logs();
    let cmd = cli::parse_args(args(&[])).unwrap();
    assert_eq!(cmd, Command::Run(RunOptions::default()));
    match cmd {
        Command::Run(o) => assert_eq!(o.source, Source::Url(DEFAULT_URL.into())),
        Command::Help => unreachable!(),
    }
}

#[test]
fn url_and_flags() {
    quiet_logs();
    let cmd = cli::parse_args(args(&["-s", "https://fbref.com/en/comps/9/stats", "--verbose"])).unwrap();
    assert_eq!(
        cmd,
        Command::Run(RunOptions {
            source: Source::Url("https://fbref.com/en/comps/9/stats".into()),
            summary: true,
            verbose: true,
        })
    );
}

#[test]
fn file_source() {
    quiet_logs();
    let cmd = cli::parse_args(args(&["--file", "saved/stats.html"])).unwrap();
    match cmd {
        Command::Run(o) => assert_eq!(o.source, Source::File(PathBuf::from("saved/stats.html"))),
        Command::Help => panic!("expected run"),
    }
}

#[test]
fn help_wins() {
    quiet_logs();
    assert_eq!(cli::parse_args(args(&["-s", "-h"])).unwrap(), Command::Help);
}

#[test]
fn usage_errors() {
    quiet_logs();
    for bad in [
        &["--file"][..],
        &["--bogus"][..],
        &["https://a.example", "https://b.example"][..],
        &["https://a.example", "-f", "page.html"][..],
    ] {
        let err = cli::parse_args(args(bad)).unwrap_err();
        assert!(matches!(err, ScrapeError::Usage(_)), "{bad:?} gave {err:?}");
    }
}

#[test]
fn run_from_saved_page() {
    quiet_logs();
    let path = tmp("fbref_cli_saved.html");
    fs::write(&path, r#"<html><body><table id="stats"></table></body></html>"#).unwrap();

    let opts = RunOptions { source: Source::File(path), summary: false, verbose: false };
    cli::run(&opts).unwrap();
}

#[test]
fn run_from_saved_page_rejects_bad_utf8() {
    quiet_logs();
    let path = tmp("fbref_cli_latin1.html");
    fs::write(&path, b"<td>K\xE9vin</td>").unwrap();

    let opts = RunOptions { source: Source::File(path), summary: false, verbose: false };
    assert!(matches!(cli::run(&opts), Err(ScrapeError::Decode { .. })));
}
