// src/progress.rs
/// Lightweight progress reporting for a lookup run.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of words.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One word was fetched and extracted. `index` is 1-based input order.
    fn item_done(&mut self, _index: usize, _word: &str) {}

    /// One word could not be fetched; it still gets a report line.
    fn item_failed(&mut self, _index: usize, _word: &str, _err: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// Prints to stderr; failures become per-word warnings.
#[derive(Default)]
pub struct StderrProgress {
    total: usize,
    done: usize,
    failed: usize,
}

impl Progress for StderrProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        eprintln!("Looking up {total} word(s)…");
    }

    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }

    fn item_done(&mut self, _index: usize, word: &str) {
        self.done += 1;
        eprintln!("[{}/{}] {word}", self.done + self.failed, self.total);
    }

    fn item_failed(&mut self, _index: usize, word: &str, err: &str) {
        self.failed += 1;
        eprintln!("Warning: could not retrieve '{word}': {err}");
    }

    fn finish(&mut self) {
        if self.failed > 0 {
            eprintln!("{} of {} word(s) could not be retrieved", self.failed, self.total);
        }
    }
}
