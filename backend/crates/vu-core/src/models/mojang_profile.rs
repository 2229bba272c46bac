use serde::{Deserialize, Serialize};

/// Property name carrying the base64 skin/cape descriptor.
const TEXTURES_PROPERTY: &str = "textures";

/// Result of a Mojang name lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MojangPlayer {
    pub id: String,
    pub name: String,
}

/// Result of a Mojang session-server profile lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MojangProfile {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub properties: Vec<ProfileProperty>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileProperty {
    pub name: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,
}

impl MojangProfile {
    pub fn textures_value(&self) -> Option<&str> {
        self.properties
            .iter()
            .find(|property| property.name == TEXTURES_PROPERTY)
            .map(|property| property.value.as_str())
    }
}
