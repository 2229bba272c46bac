use crate::DEFAULT_ALLOW_PARTIAL_DISCORD;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Return an identity without Discord fields when the Discord lookup
    /// fails, instead of failing the whole resolution
    pub allow_partial_discord: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            allow_partial_discord: DEFAULT_ALLOW_PARTIAL_DISCORD,
        }
    }
}
