// Retrieval adapters: one ActivitySource per upstream provider

mod fallback;
mod gfg;
mod github;
mod leetcode;
mod source_factory;

pub use fallback::FallbackSource;
pub use gfg::GfgStatsSource;
pub use github::GitHubStreakSource;
pub use leetcode::{LeetCodeCalendarSource, LeetCodeGraphQlSource};
pub use source_factory::{create_source, create_sources};

use anyhow::{bail, Context, Result};
use url::Url;

/// Parse and validate a configured base URL
pub(crate) fn parse_base_url(raw: &str, provider: &str) -> Result<Url> {
    let url = Url::parse(raw).with_context(|| format!("Invalid {} URL: {}", provider, raw))?;
    if url.cannot_be_a_base() {
        bail!("{} URL cannot carry path segments: {}", provider, raw);
    }
    Ok(url)
}
