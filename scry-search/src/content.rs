//! Page fetching and HTML text extraction.
//!
//! Fetches a result page over plain HTTP, removes `<script>` and `<style>`
//! subtrees (they pollute extracted text with code and CSS), and collapses
//! the remaining text-node soup into clean lines. This is a heuristic
//! whitespace collapse, not a structural document parse — tables, lists,
//! and semantic structure are flattened to linear text.

use crate::config::SearchConfig;
use crate::error::{Result, SearchError};
use crate::http;
use scraper::Html;
use url::Url;

/// Fetch `url` and return its extracted text, or `""` on any failure.
///
/// Network errors, non-2xx statuses, timeouts, and unparseable bodies all
/// degrade to an empty string; the caller must treat `""` as "no content",
/// never as an error. Failures are logged at debug level.
pub async fn scrape(url: &str, config: &SearchConfig) -> String {
    match try_scrape(url, config).await {
        Ok(text) => text,
        Err(err) => {
            tracing::debug!(url, error = %err, "scrape failed");
            String::new()
        }
    }
}

/// Fallible inner scrape: fetch, extract, truncate.
pub(crate) async fn try_scrape(url: &str, config: &SearchConfig) -> Result<String> {
    let parsed = Url::parse(url).map_err(|e| SearchError::Parse(format!("invalid URL: {e}")))?;

    let client = http::build_page_client(config)?;
    let response = client
        .get(parsed)
        .send()
        .await
        .map_err(|e| SearchError::Http(format!("page request failed: {e}")))?
        .error_for_status()
        .map_err(|e| SearchError::Http(format!("page HTTP error: {e}")))?;

    let html = response
        .text()
        .await
        .map_err(|e| SearchError::Http(format!("page read failed: {e}")))?;

    Ok(truncate_to_limit(
        &extract_text(&html),
        config.max_text_chars,
    ))
}

/// Extract visible text from raw HTML.
///
/// `<script>` and `<style>` subtrees are removed before parsing, then every
/// remaining text node is concatenated and passed through
/// [`normalise_text`].
pub fn extract_text(html: &str) -> String {
    let cleaned_html = strip_tag(&strip_tag(html, "script"), "style");
    let document = Html::parse_document(&cleaned_html);
    let raw: String = document.root_element().text().collect();
    normalise_text(&raw)
}

/// Remove all instances of a specific HTML tag and its content.
fn strip_tag(html: &str, tag: &str) -> String {
    let mut result = String::with_capacity(html.len());
    let lower = html.to_lowercase();
    let open_tag = format!("<{tag}");
    let close_tag = format!("</{tag}>");

    let mut pos = 0;
    loop {
        // Find the next opening tag (case-insensitive).
        let start = match lower[pos..].find(&open_tag) {
            Some(offset) => pos + offset,
            None => {
                result.push_str(&html[pos..]);
                break;
            }
        };

        // Verify this is actually the target tag (not e.g. <styled> for <style>).
        let after_tag = start + open_tag.len();
        if after_tag < lower.len() {
            let next_byte = lower.as_bytes()[after_tag];
            if next_byte != b' '
                && next_byte != b'>'
                && next_byte != b'/'
                && next_byte != b'\n'
                && next_byte != b'\r'
                && next_byte != b'\t'
            {
                result.push_str(&html[pos..after_tag]);
                pos = after_tag;
                continue;
            }
        }

        // Add everything before this tag.
        result.push_str(&html[pos..start]);

        // Find the matching closing tag.
        let end = match lower[start..].find(&close_tag) {
            Some(offset) => start + offset + close_tag.len(),
            None => {
                // No closing tag — skip to end of the opening tag.
                match lower[start..].find('>') {
                    Some(offset) => start + offset + 1,
                    None => html.len(),
                }
            }
        };

        pos = end;
    }

    result
}

/// Collapse extracted text-node soup into clean lines.
///
/// Each line is trimmed, split on double-space runs into phrases, and empty
/// phrases are dropped; the surviving phrases are rejoined with newlines.
pub(crate) fn normalise_text(raw: &str) -> String {
    raw.lines()
        .map(str::trim)
        .flat_map(|line| line.split("  "))
        .map(str::trim)
        .filter(|phrase| !phrase.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Truncate text to the given character limit, breaking at a char boundary.
fn truncate_to_limit(text: &str, max_chars: usize) -> String {
    if text.len() <= max_chars {
        return text.to_owned();
    }

    let mut end = max_chars;
    while !text.is_char_boundary(end) && end > 0 {
        end -= 1;
    }

    text[..end].to_owned()
}
