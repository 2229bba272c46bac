//! Discord snowflake identifiers.

use crate::{CoreError, CoreResult};

use std::fmt;
use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Serialize, Serializer};

/// Discord epoch (2015-01-01T00:00:00Z) in Unix milliseconds.
pub const DISCORD_EPOCH_MS: u64 = 1_420_070_400_000;

/// Bits below the timestamp in a snowflake (worker, process, increment).
const TIMESTAMP_SHIFT: u32 = 22;

/// A Discord user ID. Serialized as a decimal string, never as a JSON number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiscordId(u64);

impl DiscordId {
    #[track_caller]
    pub fn parse(value: &str) -> CoreResult<Self> {
        let trimmed = value.trim();

        if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CoreError::InvalidDiscordId {
                value: value.to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        trimmed
            .parse::<u64>()
            .map(Self)
            .map_err(|_| CoreError::InvalidDiscordId {
                value: value.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
    }

    /// Account creation time in Unix milliseconds, decoded from the snowflake.
    pub fn created_at_millis(&self) -> u64 {
        (self.0 >> TIMESTAMP_SHIFT) + DISCORD_EPOCH_MS
    }

    /// Account creation time in Unix seconds.
    pub fn created_at_unix(&self) -> i64 {
        (self.created_at_millis() / 1000) as i64
    }
}

impl fmt::Display for DiscordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for DiscordId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
