#![allow(dead_code)]

pub mod base64_texture;

use vu_config::{BotChallengeConfig, ProvidersConfig};
use vu_providers::Providers;

use wiremock::MockServer;

pub use base64_texture::textures_value;

pub const BOT_TOKEN: &str = "test-bot-token";
pub const HYPIXEL_KEY: &str = "test-hypixel-key";
pub const CHALLENGE_SECRET: &str = "test-challenge-secret";

pub const NOTCH_UUID: &str = "069a79f444e94726a5befca90e38aaf5";

/// Providers config with every base URL pointed at `server`
pub fn providers_config(server: &MockServer) -> ProvidersConfig {
    ProvidersConfig {
        mojang_api_url: server.uri(),
        mojang_session_url: server.uri(),
        discord_api_url: server.uri(),
        hypixel_api_url: server.uri(),
        discord_bot_token: Some(BOT_TOKEN.to_string()),
        hypixel_api_key: Some(HYPIXEL_KEY.to_string()),
        timeout_secs: 5,
    }
}

pub fn providers(server: &MockServer) -> Providers {
    Providers::from_config(&providers_config(server)).expect("providers build")
}

pub fn bot_challenge_config(server: &MockServer) -> BotChallengeConfig {
    BotChallengeConfig {
        enabled: true,
        secret: Some(CHALLENGE_SECRET.to_string()),
        verify_url: format!("{}/turnstile/v0/siteverify", server.uri()),
    }
}

pub fn profile_body(id: &str, name: &str, cape_url: Option<&str>) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "name": name,
        "properties": [
            { "name": "textures", "value": textures_value(id, name, cape_url) }
        ]
    })
}
