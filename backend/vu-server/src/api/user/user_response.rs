use vu_core::MappingRecord;

use serde::Serialize;

/// Stored link, returned bare by GET /user
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub uuid: String,
    pub discord_id: String,
}

impl From<MappingRecord> for UserResponse {
    fn from(record: MappingRecord) -> Self {
        Self {
            uuid: record.uuid.to_string(),
            discord_id: record.discord_id.to_string(),
        }
    }
}
