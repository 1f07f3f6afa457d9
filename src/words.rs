// src/words.rs
// Query terms come from the command line or from a stream of
// whitespace-separated tokens closed by "end".

use std::io::BufRead;

use crate::config::consts::END_OF_WORDS;

/// Non-blank arguments, in order. Duplicates are kept.
pub fn from_args<I, S>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    args.into_iter()
        .map(|a| s!(a.as_ref().trim()))
        .filter(|a| !a.is_empty())
        .collect()
}

/// Read tokens until the `end` token or EOF.
pub fn from_reader<R: BufRead>(reader: R) -> std::io::Result<Vec<String>> {
    let mut out = Vec::new();
    for line in reader.lines() {
        let line = line?;
        for tok in line.split_whitespace() {
            if tok == END_OF_WORDS {
                return Ok(out);
            }
            out.push(s!(tok));
        }
    }
    Ok(out)
}
