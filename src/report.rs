// src/report.rs
// Numbered definitions report:
//   1. chat (nom masculin): cat
//
//   2. ...
//
//   definition file generated by VocabQuiz Helper

use crate::config::consts::REPORT_FOOTER;
use crate::core::{ sanitize::single_line, WordEntry };

/// One report line for entry number `index` (1-based).
pub fn format_line(index: usize, entry: &WordEntry) -> String {
    format!(
        "{}. {} ({}): {}",
        index,
        entry.query_term,
        single_line(&entry.category),
        single_line(&entry.definition),
    )
}

pub fn render_report(entries: &[WordEntry]) -> String {
    let mut out = s!();
    for (i, entry) in entries.iter().enumerate() {
        out.push_str(&format_line(i + 1, entry));
        out.push_str("\n\n");
    }
    out.push('\n');
    out.push_str(REPORT_FOOTER);
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(w: &str, c: &str, d: &str) -> WordEntry {
        WordEntry { query_term: s!(w), category: s!(c), definition: s!(d) }
    }

    #[test]
    fn line_shape() {
        assert_eq!(format_line(3, &entry("chat", "noun", "cat")), "3. chat (noun): cat");
        assert_eq!(format_line(1, &WordEntry::unresolved("x")), "1. x ():  ");
    }

    #[test]
    fn multi_line_fields_are_folded() {
        assert_eq!(format_line(1, &entry("a", "nom\n", "un\r\ndeux")), "1. a (nom ): un deux");
    }

    #[test]
    fn report_numbers_from_one_and_ends_with_footer() {
        let r = render_report(&[entry("un", "adj", "one"), entry("deux", "adj", "two")]);
        assert!(r.starts_with("1. un (adj): one\n\n2. deux (adj): two\n\n"));
        assert!(r.ends_with(&join!("\n", REPORT_FOOTER, "\n")));
    }

    #[test]
    fn empty_report_has_footer_only() {
        assert_eq!(render_report(&[]), join!("\n", REPORT_FOOTER, "\n"));
    }
}
