//! Log sanitization utilities.
//!
//! API response bodies echo record values, and for challenge records those
//! values are live authorization tokens. Debug logs get a bounded prefix of
//! any body instead of the full text.

/// Maximum number of bytes of a body included in log output.
const TRUNCATE_LIMIT: usize = 200;

/// Largest index `<= index` that falls on a char boundary of `s`.
/// (`str::floor_char_boundary` needs a newer toolchain than our MSRV.)
fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        return s.len();
    }
    (0..=index)
        .rev()
        .find(|&i| s.is_char_boundary(i))
        .unwrap_or(0)
}

/// Truncate a response body for logging.
///
/// Bodies within the limit pass through unchanged; longer ones keep a prefix
/// and note the original size.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        return s.to_string();
    }
    let cut = floor_char_boundary(s, TRUNCATE_LIMIT);
    format!("{}... ({} bytes total)", &s[..cut], s.len())
}
