// src/core/sanitize.rs

/// Percent-encode a query term for the dictionary URL path.
/// RFC 3986 unreserved ASCII passes through; everything else is
/// encoded byte by byte from its UTF-8 form.
pub fn encode_term(term: &str) -> String {
    let mut out = String::with_capacity(term.len());
    for b in term.trim().bytes() {
        if b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b'.' | b'~') {
            out.push(b as char);
        } else {
            out.push_str(&format!("%{b:02X}"));
        }
    }
    out
}

/// Fold line breaks and tabs into spaces so a field fits on one report line.
/// Unlike a full whitespace collapse this keeps leading/trailing spaces, so the
/// " " definition sentinel survives.
pub fn single_line(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_break = false;
    for ch in s.chars() {
        match ch {
            '\r' | '\n' | '\t' => {
                if !prev_break { out.push(' '); prev_break = true; }
            }
            _ => { out.push(ch); prev_break = false; }
        }
    }
    out
}
