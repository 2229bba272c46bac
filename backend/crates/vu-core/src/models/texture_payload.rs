//! Decoding of the `textures` profile property.
//!
//! The property value is base64-encoded JSON of the form
//! `{"timestamp":..,"profileId":..,"profileName":..,"textures":{"SKIN":{"url":..},"CAPE":{"url":..}}}`.

use crate::{CoreError, CoreResult};

use std::panic::Location;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use error_location::ErrorLocation;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TexturePayload {
    #[serde(default)]
    pub timestamp: Option<i64>,
    #[serde(default)]
    pub profile_id: Option<String>,
    #[serde(default)]
    pub profile_name: Option<String>,
    #[serde(default)]
    pub textures: Textures,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Textures {
    #[serde(rename = "SKIN", default)]
    pub skin: Option<Texture>,
    #[serde(rename = "CAPE", default)]
    pub cape: Option<Texture>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Texture {
    pub url: String,
}

impl TexturePayload {
    #[track_caller]
    pub fn decode(value: &str) -> CoreResult<Self> {
        let bytes = STANDARD
            .decode(value.trim())
            .map_err(|e| CoreError::TextureDecode {
                message: format!("invalid base64: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        serde_json::from_slice(&bytes).map_err(|e| CoreError::TextureDecode {
            message: format!("invalid texture JSON: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    /// Texture hash of the equipped cape: the final path segment of
    /// `textures.CAPE.url`. No attempt is made to name the cape.
    pub fn cape_id(&self) -> Option<String> {
        let url = &self.textures.cape.as_ref()?.url;
        url.rsplit('/')
            .next()
            .filter(|segment| !segment.is_empty())
            .map(str::to_string)
    }
}
