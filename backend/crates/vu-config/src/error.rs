use std::panic::Location;
use std::path::PathBuf;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum ConfigError {
    #[error("{category} config error: {message} {location}")]
    Invalid {
        category: &'static str,
        message: String,
        location: ErrorLocation,
    },

    #[error("Missing required setting {setting} (set {env_var}) {location}")]
    Missing {
        setting: &'static str,
        env_var: &'static str,
        location: ErrorLocation,
    },

    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error in {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    #[track_caller]
    fn invalid<S: Into<String>>(category: &'static str, message: S) -> Self {
        ConfigError::Invalid {
            category,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::invalid("Config", message)
    }

    #[track_caller]
    pub fn server<S: Into<String>>(message: S) -> Self {
        Self::invalid("Server", message)
    }

    #[track_caller]
    pub fn database<S: Into<String>>(message: S) -> Self {
        Self::invalid("Database", message)
    }

    #[track_caller]
    pub fn providers<S: Into<String>>(message: S) -> Self {
        Self::invalid("Providers", message)
    }

    #[track_caller]
    pub fn bot_challenge<S: Into<String>>(message: S) -> Self {
        Self::invalid("Bot challenge", message)
    }

    /// A required secret or setting was not provided
    #[track_caller]
    pub fn missing(setting: &'static str, env_var: &'static str) -> Self {
        ConfigError::Missing {
            setting,
            env_var,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type ConfigErrorResult<T> = StdResult<T, ConfigError>;
