// src/config/delimiters.rs
use super::consts::*;

/// Literal markers that bound the fields of a dictionary page.
///
/// Built once at startup and handed to the extractor by reference.
/// The category has two closing markers; they are tried in the order of
/// `category_ends`, so the first entry wins whenever it occurs anywhere
/// downstream, even if a later entry would match earlier in the page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DelimiterSpec {
    pub category_start: String,
    pub category_ends: Vec<String>,
    pub definition_start: String,
    pub definition_end: String,
    pub inline_example_marker: String,
    pub sentence_terminator: char,
}

impl Default for DelimiterSpec {
    fn default() -> Self {
        Self {
            category_start: s!(WORD_TYPE_TAG),
            // Variant A: the category is followed by a conjugation link.
            // Variant B: plain paragraph close.
            category_ends: vec![s!(END_WORD_TYPE_TAG_1), s!(END_WORD_TYPE_TAG_2)],
            definition_start: s!(DEF_TAG),
            definition_end: s!(END_DEF_TAG),
            inline_example_marker: s!(EXAMPLE_TAG),
            sentence_terminator: SENTENCE_TERMINATOR,
        }
    }
}

impl DelimiterSpec {
    /// Closing markers as `&str`, in priority order.
    pub fn category_end_markers(&self) -> Vec<&str> {
        self.category_ends.iter().map(String::as_str).collect()
    }
}
