mod api_config;
mod bot_challenge_config;
mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod providers_config;
mod resolver_config;
mod server_config;

#[cfg(test)]
mod tests;

pub use api_config::ApiConfig;
pub use bot_challenge_config::BotChallengeConfig;
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use providers_config::ProvidersConfig;
pub use resolver_config::ResolverConfig;
pub use server_config::ServerConfig;

/// Environment variable naming the config directory
pub const CONFIG_DIR_ENV: &str = "VU_CONFIG_DIR";
const DEFAULT_CONFIG_DIRECTORY: &str = ".vu";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const MIN_PORT: u16 = 1024;

const DEFAULT_DATABASE_FILENAME: &str = "links.db";
const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 5;
const MIN_DATABASE_MAX_CONNECTIONS: u32 = 1;
const MAX_DATABASE_MAX_CONNECTIONS: u32 = 100;

const DEFAULT_MOJANG_API_URL: &str = "https://api.mojang.com";
const DEFAULT_MOJANG_SESSION_URL: &str = "https://sessionserver.mojang.com";
const DEFAULT_DISCORD_API_URL: &str = "https://discord.com/api/v10";
const DEFAULT_HYPIXEL_API_URL: &str = "https://api.hypixel.net";
/// 0 leaves the HTTP client's own default in place
const DEFAULT_PROVIDER_TIMEOUT_SECS: u64 = 0;
const MAX_PROVIDER_TIMEOUT_SECS: u64 = 300;

const DEFAULT_BOT_CHALLENGE_ENABLED: bool = false;
const DEFAULT_BOT_CHALLENGE_VERIFY_URL: &str =
    "https://challenges.cloudflare.com/turnstile/v0/siteverify";

const DEFAULT_ALLOW_PARTIAL_DISCORD: bool = false;
const DEFAULT_LEGACY_MISMATCH_STATUS: bool = false;

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;
