use crate::DEFAULT_LEGACY_MISMATCH_STATUS;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Answer an identity mismatch with 202 Accepted (as older callers
    /// expect) rather than 409 Conflict
    pub legacy_mismatch_status: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            legacy_mismatch_status: DEFAULT_LEGACY_MISMATCH_STATUS,
        }
    }
}
