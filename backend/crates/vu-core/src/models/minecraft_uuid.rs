//! Minecraft account UUIDs in their canonical storage form.

use crate::{CoreError, CoreResult};

use std::fmt;
use std::panic::Location;

use error_location::ErrorLocation;
use serde::Serialize;
use uuid::Uuid;

/// A Minecraft account UUID, always held as 32 lowercase hex characters.
///
/// Callers may submit either the hyphenated 36-character form or the bare
/// 32-character form; both normalize to the same value, which is the only
/// form ever used for store lookups and writes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct MinecraftUuid(String);

impl MinecraftUuid {
    #[track_caller]
    pub fn parse(value: &str) -> CoreResult<Self> {
        let trimmed = value.trim();

        let parsed = match trimmed.len() {
            32 | 36 => Uuid::try_parse(trimmed).ok(),
            _ => None,
        };

        parsed
            .map(|uuid| Self(uuid.simple().to_string()))
            .ok_or_else(|| CoreError::InvalidUuid {
                value: value.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MinecraftUuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for MinecraftUuid {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
