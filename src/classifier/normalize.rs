//! Cleanup of caller-supplied free text before it reaches the prompt.

use regex::Regex;
use std::sync::LazyLock;
use tracing::warn;

/// Maximum lengths, in characters, for the classified message fields.
pub const MAX_TEXT_LEN: usize = 2048;
pub const MAX_TOPIC_LEN: usize = 512;
pub const MAX_NAME_LEN: usize = 64;

// The space class includes U+00A0: pasted support tickets are full of
// no-break spaces.
static SPACES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[ \u{A0}\t]{2,}").unwrap());
static DASHES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-{2,}").unwrap());

/// Collapses whitespace and dash runs, truncates to `max_len` characters,
/// and trims the result. `None` becomes the empty string.
///
/// `field` names the value in the truncation warning.
pub fn normalize_user_text(raw: Option<&str>, max_len: usize, field: &str) -> String {
    let Some(raw) = raw else {
        return String::new();
    };

    let collapsed = SPACES.replace_all(raw, " ");
    let collapsed = DASHES.replace_all(&collapsed, "-");

    let value = match collapsed.char_indices().nth(max_len) {
        Some((cut, _)) => {
            warn!(field, max_len, "input is longer than the maximum, truncating");
            &collapsed[..cut]
        }
        None => &collapsed[..],
    };

    value.trim().to_string()
}
