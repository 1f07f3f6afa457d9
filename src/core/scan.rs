// src/core/scan.rs
// Literal delimiter search over a page buffer.
// "Not found" is a normal outcome and comes back as `None`.

/// Index of the first `needle` in `haystack` at or after `from`.
///
/// `from` past the end, or inside a multi-byte char, finds nothing.
pub fn find(haystack: &str, needle: &str, from: usize) -> Option<usize> {
    Some(haystack.get(from..)?.find(needle)? + from)
}

/// Try `needles` in list order; the first one present at or after `from` wins,
/// regardless of where the others would match.
///
/// Returns `(needle_index, position)`.
pub fn find_first_of(haystack: &str, needles: &[&str], from: usize) -> Option<(usize, usize)> {
    needles
        .iter()
        .enumerate()
        .find_map(|(i, n)| find(haystack, n, from).map(|pos| (i, pos)))
}
