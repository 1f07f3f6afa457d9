// src/config/consts.rs

// Net config
pub const DIC_LINK: &str = "http://www.larousse.com/en/dictionaries/french/";
pub const USER_AGENT: &str = "vocab_scrape/0.2";
pub const NET_TIMEOUT_SECS: u64 = 15;
pub const MAX_REDIRECTS: usize = 5;

// Page markers (Larousse English-French pages)
pub const DEF_TAG: &str = "<li class=\"DivisionDefinition\">";
pub const END_DEF_TAG: &str = "</li>";
pub const EXAMPLE_TAG: &str = "&nbsp;:";
pub const WORD_TYPE_TAG: &str = "<p class=\"CatgramDefinition\">";
pub const END_WORD_TYPE_TAG_1: &str = " <a class=\"lienconj\" href=\"/en/conjugation/french/";
pub const END_WORD_TYPE_TAG_2: &str = "</p>";
pub const SENTENCE_TERMINATOR: char = '.';

// Word input
pub const END_OF_WORDS: &str = "end";

// Logging
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";
pub const LOG_ENV: &str = "VOCAB_LOG";

// Report
pub const DEFAULT_FILE: &str = "definitions.txt";
pub const DOCUMENTS_DIR: &str = "Documents";
pub const REPORT_FOOTER: &str = "definition file generated by VocabQuiz Helper";

// Concurrency
pub const WORKERS: usize = 4;
pub const MAX_WORKERS: usize = 16;
pub const REQUEST_PAUSE_MS: u64 = 75; // be polite
pub const JITTER_MS: u64 = 50; // extra 0..50 ms
