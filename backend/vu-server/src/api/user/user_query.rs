use serde::Deserialize;

/// Query for GET and DELETE /user; exactly one field must be set
#[derive(Debug, Default, Deserialize)]
pub struct UserQuery {
    pub uuid: Option<String>,
    #[serde(rename = "discordId")]
    pub discord_id: Option<String>,
}
