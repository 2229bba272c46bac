use serde::Deserialize;

/// Body for POST /user
///
/// Missing fields deserialize as empty and are rejected by the engine.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserRequest {
    pub uuid: String,
    pub discord_id: String,
}
