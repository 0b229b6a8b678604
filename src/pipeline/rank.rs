//! Relevance ranking and filtering of summarized pages.
//!
//! Pages whose summary is the [`IRRELEVANT`] sentinel are dropped; the rest
//! are scored, stable-sorted descending, and truncated to the top N. The
//! default score is the summary's character count — a deliberately crude
//! proxy, kept for behavioural parity and replaceable via [`rank_with`].

use crate::pipeline::sanitize::IRRELEVANT;
use scry_search::CandidatePage;
use serde::{Deserialize, Serialize};

/// A retained page with its summary and relevance score, ready for display
/// and for the synthesizer's context block.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedSource {
    /// The URL of the page.
    pub url: String,
    /// The title of the page.
    pub title: String,
    /// The cleaned summary.
    pub summary: String,
    /// Relevance score (higher ranks earlier).
    pub relevance_score: usize,
}

/// Default scoring function: the character count of the summary.
pub fn summary_length(summary: &str) -> usize {
    summary.chars().count()
}

/// Rank with the default summary-length score.
///
/// Returns at most `top_n` sources; fewer (including zero) when fewer
/// summaries survive the sentinel filter.
pub fn rank(pairs: Vec<(CandidatePage, String)>, top_n: usize) -> Vec<RankedSource> {
    rank_with(pairs, top_n, summary_length)
}

/// Rank with a caller-supplied scoring function.
///
/// The sort is stable: ties keep their original retrieval order.
pub fn rank_with<F>(pairs: Vec<(CandidatePage, String)>, top_n: usize, score: F) -> Vec<RankedSource>
where
    F: Fn(&str) -> usize,
{
    let mut sources: Vec<RankedSource> = pairs
        .into_iter()
        .filter(|(_, summary)| summary != IRRELEVANT)
        .map(|(page, summary)| RankedSource {
            url: page.url,
            title: page.title,
            relevance_score: score(&summary),
            summary,
        })
        .collect();

    sources.sort_by(|a, b| b.relevance_score.cmp(&a.relevance_score));
    sources.truncate(top_n);
    sources
}
