// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::config::options::ReportOptions;
use crate::core::WordEntry;
use crate::report::render_report;

/// Render `entries` and write them to the path from `ReportOptions`.
/// Returns the final path written to.
pub fn write_report(
    report: &ReportOptions,
    entries: &[WordEntry],
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let path = report.out_path();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    std::fs::write(&path, render_report(entries))?;
    logf!("report: wrote {} entr(ies) to {}", entries.len(), path.display());
    Ok(path)
}

pub fn normalize_separators(p: &str) -> String {
    let sep = std::path::MAIN_SEPARATOR;
    p.chars().map(|c| if c=='/'||c=='\\' { sep } else { c }).collect()
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

pub fn looks_like_dir_hint(p: &Path) -> bool {
    let s = p.to_string_lossy();
    s.ends_with('/') || s.ends_with('\\')
}
