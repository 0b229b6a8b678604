//! Response sanitization for model output.
//!
//! The summarization model sometimes ignores the "no introductory phrase"
//! instruction or echoes the prompt back. This module isolates the cleanup
//! patterns so they can be unit-tested and swapped without touching the
//! pipeline logic.
//!
//! Patterns:
//! - `^Here is a summary …:` (case-insensitive, up to the first colon) is
//!   stripped from the start of a response.
//! - A response still containing `"summary of the text in about"` is the
//!   model echoing its instructions and is treated as noise.

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

/// Sentinel marking a summarized page as excluded from ranking.
pub const IRRELEVANT: &str = "IRRELEVANT";

/// Cleaned summaries shorter than this are treated as noise.
pub const MIN_SUMMARY_CHARS: usize = 20;

static SUMMARY_PREAMBLE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)^here is a summary .*?:").ok());

/// Strip a leading "Here is a summary …:" preamble and trim.
///
/// Idempotent: cleaning an already-cleaned string yields the same string.
pub fn clean_summary(raw: &str) -> String {
    let trimmed = raw.trim();
    let cleaned = match SUMMARY_PREAMBLE.as_ref() {
        Some(re) => re.replace(trimmed, ""),
        None => Cow::Borrowed(trimmed),
    };
    cleaned.trim().to_owned()
}

/// True when the cleaned response is the model echoing its own instructions.
pub fn is_prompt_echo(cleaned: &str) -> bool {
    cleaned
        .to_lowercase()
        .contains("summary of the text in about")
}
