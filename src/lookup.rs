// src/lookup.rs
use std::{
    thread, time::Duration,
    sync::{ mpsc, Arc, atomic::{ AtomicUsize, Ordering }}
};

use crate::{
    config::{ options::LookupOptions, consts::JITTER_MS, DelimiterSpec },
    core::{ extract_entry, WordEntry },
    fetch::PageFetcher,
    progress::Progress,
};

/// Fetch and extract every word. The result is in input order, one entry per
/// word; a word whose page could not be fetched gets an unresolved entry and
/// a `Progress::item_failed` call.
pub fn lookup_all(
    words: &[String],
    fetcher: Arc<dyn PageFetcher>,
    opts: &LookupOptions,
    delims: &DelimiterSpec,
    mut progress: Option<&mut dyn Progress>,
) -> Vec<WordEntry> {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(words.len());
    }
    if words.is_empty() {
        if let Some(p) = progress.as_deref_mut() {
            p.log("No words to look up.");
            p.finish();
        }
        return Vec::new();
    }

    // Concurrency
    type Fetched = (usize, Result<String, String>);

    let words_arc: Arc<Vec<String>> = Arc::new(words.to_vec());
    let counter = Arc::new(AtomicUsize::new(0));
    let (res_tx, res_rx) = mpsc::channel::<Fetched>();

    let workers = opts.worker_count(words.len());
    let pause_ms = opts.pause_ms;
    logf!("lookup: {} word(s), {workers} worker(s)", words.len());

    // Spawn workers

    for _ in 0..workers {
        let words = Arc::clone(&words_arc);
        let idx = Arc::clone(&counter);
        let tx = res_tx.clone();
        let fetcher = Arc::clone(&fetcher);
        let urls = opts.clone();

        thread::spawn(
            move || {
                loop {
                    let i = idx.fetch_add(1, Ordering::Relaxed);
                    if i >= words.len() {
                        break;
                    }
                    let url = urls.url_for(&words[i]);
                    let result = fetcher.fetch(&url).map_err(|e| e.to_string());
                    if tx.send((i, result)).is_err() {
                        break;
                    }
                    if pause_ms > 0 {
                        let jitter = (i as u64) % JITTER_MS;
                        thread::sleep(Duration::from_millis(pause_ms + jitter)); // be polite
                    }
                }
            }
        );
    }
    drop(res_tx); // main thread is sole receiver now

    // Aggregate results; extraction runs here, pages are dropped right after.
    let mut slots: Vec<Option<WordEntry>> = vec![None; words.len()];

    for _ in 0..words.len() {
        let Ok((i, result)) = res_rx.recv() else {
            break; // workers ended early; fill the gaps below
        };
        let word = &words[i];
        let entry = match result {
            Ok(page) => {
                if let Some(p) = progress.as_deref_mut() {
                    p.item_done(i + 1, word);
                }
                extract_entry(word, &page, delims)
            }
            Err(msg) => {
                loge!("Word '{word}': {msg}");
                if let Some(p) = progress.as_deref_mut() {
                    p.item_failed(i + 1, word, &msg);
                }
                WordEntry::unresolved(word)
            }
        };
        slots[i] = Some(entry);
    }

    let entries: Vec<WordEntry> = slots
        .into_iter()
        .zip(words)
        .map(|(slot, word)| slot.unwrap_or_else(|| {
            logw!("Word '{word}': no result from workers");
            WordEntry::unresolved(word)
        }))
        .collect();

    let missing = entries.iter().filter(|e| !e.has_definition()).count();
    logf!("lookup: {} of {} word(s) have a definition", entries.len() - missing, entries.len());
    if let Some(p) = progress.as_deref_mut() {
        if missing > 0 {
            p.log(&format!("{missing} of {} word(s) have no definition", entries.len()));
        }
        p.finish();
    }
    entries
}
