// src/core/extract.rs
// Page text -> WordEntry.
//
// Field boundaries are located with literal markers only (see DelimiterSpec).
// The steps run as one pipeline: the definition block gates the category
// search, and a missing category short-circuits the definition.

use crate::config::DelimiterSpec;
use super::{markup::strip_markup, scan};

/// Definition value meaning "no definition block located".
pub const NO_DEFINITION: &str = " ";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WordEntry {
    pub query_term: String,
    /// Grammatical category, e.g. "noun". Empty when not found.
    pub category: String,
    /// Cleaned definition. `" "` when the page had no usable definition block,
    /// empty when the block was found but yielded nothing.
    pub definition: String,
}

impl WordEntry {
    /// Entry for a term whose page could not be used at all.
    pub fn unresolved(query_term: &str) -> Self {
        Self {
            query_term: s!(query_term),
            category: s!(),
            definition: s!(NO_DEFINITION),
        }
    }

    pub fn has_definition(&self) -> bool {
        self.definition != NO_DEFINITION && !self.definition.is_empty()
    }
}

/// Where the pipeline stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Stage {
    /// No definition block; category never searched.
    NoDefinitionBlock,
    /// Definition block present but no category marker; definition skipped.
    NoCategory,
    /// Definition block starts at this offset.
    Definition(usize),
}

/// Extract category and definition for `query_term` from one page.
///
/// Never fails: absent markers leave fields empty (or at the sentinel).
pub fn extract_entry(query_term: &str, raw_page: &str, delims: &DelimiterSpec) -> WordEntry {
    let mut entry = WordEntry::unresolved(query_term);

    let stage = match scan::find(raw_page, &delims.definition_start, 0) {
        None => Stage::NoDefinitionBlock,
        Some(def_pos) => match extract_category(raw_page, delims) {
            None => Stage::NoCategory,
            Some(category) => {
                entry.category = category;
                Stage::Definition(def_pos)
            }
        },
    };

    match stage {
        Stage::NoDefinitionBlock => {
            logd!("extract: '{query_term}' has no definition block");
        }
        Stage::NoCategory => {
            logd!("extract: '{query_term}' has no category marker, definition skipped");
        }
        Stage::Definition(def_pos) => {
            let raw = raw_definition(raw_page, def_pos, delims);
            entry.definition = clean_definition(raw, delims);
        }
    }
    entry
}

/// `Some(category)` once the category marker is seen, even if neither closing
/// marker follows (then the category is empty). `None` if the marker is absent.
fn extract_category(raw_page: &str, delims: &DelimiterSpec) -> Option<String> {
    let start = scan::find(raw_page, &delims.category_start, 0)?;
    let body = start + delims.category_start.len();

    let ends = delims.category_end_markers();
    let category = match scan::find_first_of(raw_page, &ends, start) {
        // A closing marker overlapping the opening one would give an inverted range.
        Some((_, end)) if end >= body => s!(&raw_page[body..end]),
        _ => s!(),
    };
    Some(category)
}

/// Text between the definition markers; empty without a closing marker.
fn raw_definition<'a>(raw_page: &'a str, def_pos: usize, delims: &DelimiterSpec) -> &'a str {
    let body = def_pos + delims.definition_start.len();
    match scan::find(raw_page, &delims.definition_end, def_pos) {
        Some(end) if end >= body => &raw_page[body..end],
        _ => "",
    }
}

/// Strip markup, cut at the inline example, drop one trailing terminator.
pub fn clean_definition(raw: &str, delims: &DelimiterSpec) -> String {
    let mut text = strip_markup(raw);

    if let Some(k) = scan::find(&text, &delims.inline_example_marker, 0) {
        text.truncate(k);
    }

    match text.chars().last() {
        Some(c) if c == delims.sentence_terminator => {
            text.pop();
        }
        Some(_) | None => {}
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::consts::*;

    fn delims() -> DelimiterSpec {
        DelimiterSpec::default()
    }

    #[test]
    fn empty_page_is_sentinel() {
        let e = extract_entry("rien", "", &delims());
        assert_eq!(e.query_term, "rien");
        assert_eq!(e.category, "");
        assert_eq!(e.definition, NO_DEFINITION);
        assert!(!e.has_definition());
    }

    #[test]
    fn category_without_closing_marker_is_empty_but_definition_runs() {
        let page = join!(WORD_TYPE_TAG, "noun", DEF_TAG, "cat.", END_DEF_TAG);
        // END_DEF_TAG "</li>" is not END_WORD_TYPE_TAG_2 "</p>"
        let e = extract_entry("chat", &page, &delims());
        assert_eq!(e.category, "");
        assert_eq!(e.definition, "cat");
    }

    #[test]
    fn clean_definition_steps_in_order() {
        let d = delims();
        assert_eq!(clean_definition("<b>x</b> runs&nbsp;: il court.", &d), " runs");
        assert_eq!(clean_definition("he <b>runs</b>.", &d), "he runs");
        assert_eq!(clean_definition("..", &d), ".");
        assert_eq!(clean_definition("", &d), "");
        assert_eq!(clean_definition(".", &d), "");
    }

    #[test]
    fn definition_end_searched_from_definition_start() {
        // A closing marker before the opening one must not be used.
        let page = join!(
            "</li>", WORD_TYPE_TAG, "verb", END_WORD_TYPE_TAG_2,
            DEF_TAG, "to go", END_DEF_TAG
        );
        let e = extract_entry("aller", &page, &delims());
        assert_eq!(e.category, "verb");
        assert_eq!(e.definition, "to go");
    }

    #[test]
    fn multibyte_text_survives() {
        let page = join!(
            WORD_TYPE_TAG, "adjectif", END_WORD_TYPE_TAG_2,
            DEF_TAG, "élevé, très haut.", END_DEF_TAG
        );
        let e = extract_entry("haut", &page, &delims());
        assert_eq!(e.definition, "élevé, très haut");
    }
}
