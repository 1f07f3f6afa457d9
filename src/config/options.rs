// src/config/options.rs
use std::ffi::OsString;
use std::path::{ Path, PathBuf };
use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub lookup: LookupOptions,
    pub report: ReportOptions,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WordSource {
    Args(Vec<String>),
    Stdin,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LookupOptions {
    pub base_url: String,
    pub workers: usize,
    /// Pause after each request, per worker. Zero disables pausing and jitter.
    pub pause_ms: u64,
    /// Use the std-only HTTP/1.0 client instead of the TLS-capable one.
    pub plain_http: bool,
    pub words: WordSource,
}

impl Default for LookupOptions {
    fn default() -> Self {
        Self {
            base_url: s!(DIC_LINK),
            workers: WORKERS,
            pause_ms: REQUEST_PAUSE_MS,
            plain_http: false,
            words: WordSource::Stdin,
        }
    }
}

impl LookupOptions {
    /// Dictionary URL for one query term. The term is percent-encoded.
    pub fn url_for(&self, term: &str) -> String {
        join!(&self.base_url, &crate::core::sanitize::encode_term(term))
    }

    /// Number of worker threads for `n` words, never zero.
    pub fn worker_count(&self, n: usize) -> usize {
        self.workers.min(MAX_WORKERS).min(n).max(1)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportOptions {
    out_path: OutputPath,
    /// Also echo the rendered report to stdout.
    pub print: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self { out_path: OutputPath::default(), print: false }
    }
}

impl ReportOptions {
    pub fn out_path(&self) -> PathBuf {
        self.out_path.dir.join(&self.out_path.file_name)
    }

    /// Parse user text into dir + file name.
    /// A trailing separator or an existing directory keeps the default file name.
    pub fn set_path(&mut self, text: &str) {
        let s = crate::file::normalize_separators(text.trim());
        let p = PathBuf::from(&s);

        if crate::file::looks_like_dir_hint(&p) || p.is_dir() {
            self.out_path.dir = p;
            self.out_path.file_name = OsString::from(DEFAULT_FILE);
            return;
        }
        self.out_path.dir = p.parent().map(Path::to_path_buf).unwrap_or_default();
        if let Some(name) = p.file_name() {
            self.out_path.file_name = name.to_os_string();
        }
    }

    /// Write into `$HOME/Documents`, keeping the current file name.
    pub fn use_documents_dir(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        let home = std::env::var_os("HOME")
            .or_else(|| std::env::var_os("USERPROFILE"))
            .ok_or("Could not determine home directory")?;
        self.out_path.dir = PathBuf::from(home).join(DOCUMENTS_DIR);
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputPath {
    dir: PathBuf,
    file_name: OsString,
}

impl Default for OutputPath {
    fn default() -> Self {
        Self {
            dir: PathBuf::new(),
            file_name: OsString::from(DEFAULT_FILE),
        }
    }
}
