use crate::{
    ApiConfig, BotChallengeConfig, CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError,
    ConfigErrorResult, DEFAULT_CONFIG_DIRECTORY, DatabaseConfig, LoggingConfig, ProvidersConfig,
    ResolverConfig, ServerConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub providers: ProvidersConfig,
    pub bot_challenge: BotChallengeConfig,
    pub resolver: ResolverConfig,
    pub api: ApiConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. `VU_CONFIG_DIR` env var, else `./.vu/`
    /// 2. Auto-create the config directory
    /// 3. `config.toml` if it exists, else defaults
    /// 4. `VU_*` environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Priority: VU_CONFIG_DIR env var > ./.vu/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIRECTORY))
    }

    /// Validate all sections; call once at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.database.validate()?;
        self.providers.validate()?;
        self.bot_challenge.validate()?;
        Ok(())
    }

    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.database.path))
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary. Secrets are reported as set/unset only.
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!(
            "  database: {} (max {} connections)",
            self.database.path, self.database.max_connections
        );
        info!(
            "  providers: mojang={} session={} discord={} hypixel={}",
            self.providers.mojang_api_url,
            self.providers.mojang_session_url,
            self.providers.discord_api_url,
            self.providers.hypixel_api_url
        );
        info!(
            "  providers: discord token {}, hypixel key {}, timeout {}",
            set_or_unset(&self.providers.discord_bot_token),
            set_or_unset(&self.providers.hypixel_api_key),
            match self.providers.timeout_secs {
                0 => String::from("client default"),
                secs => format!("{}s", secs),
            }
        );
        info!(
            "  bot_challenge: {} (secret {})",
            if self.bot_challenge.enabled {
                "enabled"
            } else {
                "disabled"
            },
            set_or_unset(&self.bot_challenge.secret)
        );
        info!(
            "  resolver: allow_partial_discord={}",
            self.resolver.allow_partial_discord
        );
        info!(
            "  api: mismatch status {}",
            if self.api.legacy_mismatch_status {
                "202 (legacy)"
            } else {
                "409"
            }
        );
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("VU_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("VU_SERVER_PORT", &mut self.server.port);

        // Database
        Self::apply_env_string("VU_DATABASE_PATH", &mut self.database.path);
        Self::apply_env_parse(
            "VU_DATABASE_MAX_CONNECTIONS",
            &mut self.database.max_connections,
        );

        // Providers
        Self::apply_env_string("VU_MOJANG_API_URL", &mut self.providers.mojang_api_url);
        Self::apply_env_string(
            "VU_MOJANG_SESSION_URL",
            &mut self.providers.mojang_session_url,
        );
        Self::apply_env_string("VU_DISCORD_API_URL", &mut self.providers.discord_api_url);
        Self::apply_env_string("VU_HYPIXEL_API_URL", &mut self.providers.hypixel_api_url);
        Self::apply_env_option_string(
            "VU_DISCORD_BOT_TOKEN",
            &mut self.providers.discord_bot_token,
        );
        Self::apply_env_option_string("VU_HYPIXEL_API_KEY", &mut self.providers.hypixel_api_key);
        Self::apply_env_parse(
            "VU_PROVIDER_TIMEOUT_SECS",
            &mut self.providers.timeout_secs,
        );

        // Bot challenge
        Self::apply_env_bool("VU_BOT_CHALLENGE_ENABLED", &mut self.bot_challenge.enabled);
        Self::apply_env_option_string("VU_BOT_CHALLENGE_SECRET", &mut self.bot_challenge.secret);
        Self::apply_env_string(
            "VU_BOT_CHALLENGE_VERIFY_URL",
            &mut self.bot_challenge.verify_url,
        );

        // Resolver / API policy
        Self::apply_env_bool(
            "VU_RESOLVER_ALLOW_PARTIAL_DISCORD",
            &mut self.resolver.allow_partial_discord,
        );
        Self::apply_env_bool(
            "VU_API_LEGACY_MISMATCH_STATUS",
            &mut self.api.legacy_mismatch_status,
        );

        // Logging
        Self::apply_env_parse("VU_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("VU_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("VU_LOG_FILE", &mut self.logging.file);
    }

    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Accepts "true"/"1"; anything else is false
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Unparseable values leave the target untouched
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}

fn set_or_unset(value: &Option<String>) -> &'static str {
    match value.as_deref() {
        Some(v) if !v.is_empty() => "set",
        _ => "unset",
    }
}
