use crate::Permission;

/// An API key and the capabilities granted to it.
///
/// Permissions are kept exactly as stored; membership is an exact string
/// match against [`Permission::as_str`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialRecord {
    pub id: String,
    pub key: String,
    pub permissions: Vec<String>,
}

impl CredentialRecord {
    pub fn has_permission(&self, required: Permission) -> bool {
        self.permissions
            .iter()
            .any(|granted| granted == required.as_str())
    }
}
