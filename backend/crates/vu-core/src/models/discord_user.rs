use serde::{Deserialize, Serialize};

/// Discord user profile as returned by `GET /users/{id}`, plus the
/// creation timestamp decoded from the snowflake.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscordUser {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub discriminator: String,
    #[serde(default)]
    pub global_name: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub bot: bool,
    #[serde(default)]
    pub system: bool,
    #[serde(default)]
    pub public_flags: u64,
    #[serde(default)]
    pub banner: Option<String>,
    #[serde(default)]
    pub banner_color: Option<String>,
    #[serde(default)]
    pub accent_color: Option<u32>,
    /// Unix seconds; filled in by the client, not sent by Discord.
    #[serde(default)]
    pub created_at: i64,
}

impl DiscordUser {
    /// `username#discriminator`, or the bare username for accounts on the
    /// new username system (discriminator `"0"` or absent).
    pub fn tag(&self) -> String {
        match self.discriminator.as_str() {
            "" | "0" => self.username.clone(),
            discriminator => format!("{}#{}", self.username, discriminator),
        }
    }
}
