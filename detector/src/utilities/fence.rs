//! Markdown fence stripping for backend replies.
//!
//! Backends are asked for bare code but frequently wrap it in a fenced block, sometimes with
//! narration around it. [`strip_code_fence`] recovers the code:
//!
//! 1. a block fenced with the requested language tag (case-insensitive),
//! 2. otherwise a block fenced without any tag,
//! 3. otherwise the whole text, trimmed.

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};
use tracing::debug;

static UNTAGGED_FENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)```\n(.*?)\n```").expect("untagged fence pattern is valid"));

/// Strips markdown code fences for `language` from `raw`.
///
/// # Arguments
///
/// * `raw` - Text as returned by a backend or submitted by a caller.
/// * `language` - Declared language; matched literally against the fence tag.
///
/// # Returns
///
/// The trimmed interior of the first matching fenced block, or `raw` trimmed when no fenced
/// block is present.
pub fn strip_code_fence(raw: &str, language: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }

    match tagged_fence(language) {
        Ok(re) => {
            if let Some(captures) = re.captures(raw) {
                return captures[1].trim().to_string();
            }
        }
        Err(e) => debug!(
            language_len = language.len(),
            error = %e,
            "Skipping tagged fence for unusable language tag"
        ),
    }

    if let Some(captures) = UNTAGGED_FENCE.captures(raw) {
        return captures[1].trim().to_string();
    }

    raw.trim().to_string()
}

const TAGGED_FENCE_SIZE_LIMIT: usize = 1 << 20;

/// Fence opened with the lowercased, escaped `language` tag.
fn tagged_fence(language: &str) -> Result<Regex, regex::Error> {
    let pattern = format!(r"```{}\n(.*?)\n```", regex::escape(&language.to_lowercase()));
    RegexBuilder::new(&pattern)
        .case_insensitive(true)
        .dot_matches_new_line(true)
        .size_limit(TAGGED_FENCE_SIZE_LIMIT)
        .build()
}
