// tests/report_file.rs
//
// Report rendering + file output without network.
//
use std::fs;
use std::path::PathBuf;

use vocab_scrape::config::consts::{DEFAULT_FILE, REPORT_FOOTER};
use vocab_scrape::config::options::ReportOptions;
use vocab_scrape::core::WordEntry;
use vocab_scrape::file::write_report;

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("vocab_report_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

fn entries() -> Vec<WordEntry> {
    vec![
        WordEntry { query_term: "chat".into(), category: "nom masculin".into(), definition: "cat".into() },
        WordEntry::unresolved("zzz"),
    ]
}

#[test]
fn writes_numbered_lines_and_footer() {
    let dir = tmp_dir("lines");
    let mut opts = ReportOptions::default();
    opts.set_path(dir.join("words.txt").to_str().unwrap());

    let written = write_report(&opts, &entries()).unwrap();
    assert!(written.ends_with("words.txt"));

    let s = fs::read_to_string(&written).unwrap();
    let expected = format!("1. chat (nom masculin): cat\n\n2. zzz ():  \n\n\n{REPORT_FOOTER}\n");
    assert_eq!(s, expected);
}

#[test]
fn creates_missing_parent_dirs() {
    let dir = tmp_dir("nested");
    let mut opts = ReportOptions::default();
    opts.set_path(dir.join("a").join("b").join("out.txt").to_str().unwrap());

    let written = write_report(&opts, &entries()).unwrap();
    assert!(written.exists());
    assert!(dir.join("a").join("b").is_dir());
}

#[test]
fn existing_directory_gets_default_file_name() {
    let dir = tmp_dir("dir_target");
    let mut opts = ReportOptions::default();
    opts.set_path(dir.to_str().unwrap());

    let written = write_report(&opts, &entries()).unwrap();
    assert_eq!(written.file_name().unwrap(), DEFAULT_FILE);
    assert!(written.starts_with(&dir));
}

#[test]
fn file_in_place_of_directory_is_an_error() {
    let dir = tmp_dir("blocked");
    let blocker = dir.join("blocker");
    fs::write(&blocker, "x").unwrap();

    let mut opts = ReportOptions::default();
    opts.set_path(blocker.join("out.txt").to_str().unwrap());
    assert!(write_report(&opts, &entries()).is_err());
}
