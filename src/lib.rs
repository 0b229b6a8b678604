//! # scry
//!
//! Web-search-and-answer assistant: given a query, retrieve a handful of
//! relevant pages, summarize each with a language model, rank the summaries,
//! and synthesize a single answer from the survivors.
//!
//! ## Architecture
//!
//! Four steps composed strictly forward, each a request/response call to an
//! external service:
//!
//! 1. **Retrieve** ([`scry_search::retrieve`]) — neural content search plus
//!    a live scrape of each hit
//! 2. **Summarize** ([`pipeline::summarize`]) — one chat call per page,
//!    degrading to a sentinel on anything suspicious
//! 3. **Rank** ([`pipeline::rank`]) — drop sentinels, sort by relevance,
//!    keep the top few
//! 4. **Synthesize** ([`pipeline::synthesize`]) — answer the query from the
//!    retained summaries, rotating API keys on rate limits
//!
//! Failures never escape: every stage absorbs its own errors, and the
//! presentation layer only ever sees ranked sources and answer text.

pub mod config;
pub mod credentials;
pub mod error;
pub mod llm;
pub mod pipeline;

pub use config::Config;
pub use credentials::KeyPool;
pub use error::{LlmError, Result};
pub use pipeline::{Answer, Pipeline, RankedSource};
