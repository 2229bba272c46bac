use thiserror::Error;

/// Startup and shutdown failures of the server binary
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] vu_config::ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] vu_db::DbError),

    #[error("Provider setup error: {0}")]
    Providers(#[from] vu_providers::ProviderError),

    #[error("Logger error: {message}")]
    Logger { message: String },

    #[error("IO error: {message}: {source}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl ServerError {
    pub fn io<S: Into<String>>(message: S, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ServerError>;
