use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid Minecraft UUID: {value} {location}")]
    InvalidUuid {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid Discord ID: {value} {location}")]
    InvalidDiscordId {
        value: String,
        location: ErrorLocation,
    },

    #[error("Texture decode failed: {message} {location}")]
    TextureDecode {
        message: String,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, CoreError>;
