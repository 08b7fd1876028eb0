// tests/cli.rs
mod common;

use std::time::Duration;

use common::*;
use who_said_it::cli::{parse_from, run_with};
use who_said_it::game::SessionEnd;
use who_said_it::progress::NullProgress;
use who_said_it::prompt::Scripted;
use who_said_it::Error;

fn options(dir: &std::path::Path) -> who_said_it::config::options::Options {
    let mut o = parse_from(
        ["--url", BASE, "--delay-ms", "0", "--seed", "9", "--no-log"].map(String::from),
    )
    .unwrap();
    o.data_dir = dir.to_path_buf();
    o
}

#[test]
fn scrape_then_play_from_the_new_file() {
    let dir = tempfile::tempdir().unwrap();
    let opts = options(dir.path());
    assert_eq!(opts.delay, Duration::ZERO);
    let mut fetcher = site(2, &["Albert Einstein", "Albert Einstein"]);
    let mut prompt = Scripted::new([
        "",
        "yes",
        "quotes",
        "quotes.csv",
        "quotes.csv",
        "n",
        "Albert Einstein",
        "n",
    ]);

    let end = run_with(&opts, &mut prompt, &mut fetcher, &mut NullProgress).unwrap();
    assert_eq!(end, SessionEnd::Declined);

    let out = prompt.transcript();
    assert!(out.contains("Again, enter y or n if you do or do not want a CSV file updated with new quotes (y/n): "));
    assert!(out.contains("Created quotes.csv in the current directory."));
    assert!(out.contains("You guessed correctly! Congratulations!"));
    assert_eq!(read(dir.path(), "quotes.csv").lines().count(), 5);
}

#[test]
fn skipping_the_scrape_never_touches_the_network() {
    let dir = tempfile::tempdir().unwrap();
    let opts = options(dir.path());
    std::fs::write(
        path(dir.path(), "pool.csv"),
        format!("Name,Quote,Link to Bio\nAlbert Einstein,\"“Q, one.”\",{EINSTEIN_BIO}\n"),
    )
    .unwrap();
    let mut fetcher = FixtureFetcher::default();
    let mut prompt = Scripted::new(["n", "pool.csv", "n", "Albert Einstein", "n"]);

    run_with(&opts, &mut prompt, &mut fetcher, &mut NullProgress).unwrap();
    assert!(fetcher.hits.is_empty());
    assert!(prompt.transcript().contains("“Q, one.”"));
}

#[test]
fn missing_store_is_a_fatal_file_error() {
    let dir = tempfile::tempdir().unwrap();
    let opts = options(dir.path());
    let mut fetcher = FixtureFetcher::default();
    let mut prompt = Scripted::new(["n", "nope.csv"]);

    let err = run_with(&opts, &mut prompt, &mut fetcher, &mut NullProgress).unwrap_err();
    assert!(matches!(err, Error::FileNotFound { .. }));
    assert!(err.is_fatal_file_error());
}
