use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_DATABASE_FILENAME, DEFAULT_DATABASE_MAX_CONNECTIONS,
    MAX_DATABASE_MAX_CONNECTIONS, MIN_DATABASE_MAX_CONNECTIONS,
};

use std::path::Path;

use serde::Deserialize;

/// Mapping store location, relative to the config directory.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub path: String,
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: String::from(DEFAULT_DATABASE_FILENAME),
            max_connections: DEFAULT_DATABASE_MAX_CONNECTIONS,
        }
    }
}

impl DatabaseConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.path.trim().is_empty() {
            return Err(ConfigError::database("database.path must not be empty"));
        }

        if Path::new(&self.path).is_absolute() || self.path.contains("..") {
            return Err(ConfigError::database(
                "database.path must be relative and cannot contain '..'",
            ));
        }

        if self.max_connections < MIN_DATABASE_MAX_CONNECTIONS
            || self.max_connections > MAX_DATABASE_MAX_CONNECTIONS
        {
            return Err(ConfigError::database(format!(
                "database.max_connections must be {}-{}, got {}",
                MIN_DATABASE_MAX_CONNECTIONS, MAX_DATABASE_MAX_CONNECTIONS, self.max_connections
            )));
        }

        Ok(())
    }
}
