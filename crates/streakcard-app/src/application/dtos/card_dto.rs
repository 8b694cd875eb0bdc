use serde::{Deserialize, Serialize};

/// Query string of `/api/streak-card`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CardQuery {
    /// JSON array of `CardPlatformInput`, possibly percent-encoded twice
    pub platforms: Option<String>,
    pub name: Option<String>,
    pub greeting: Option<String>,
    pub color: Option<String>,
}

/// One tile requested on the card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardPlatformInput {
    pub platform: String,
    #[serde(default)]
    pub username: String,
    /// Pre-computed streak; fetched live when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub streak: Option<u32>,
}
