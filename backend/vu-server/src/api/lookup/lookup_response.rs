use vu_core::CanonicalIdentity;

use serde::Serialize;

/// `{"data": identity}` envelope for the lookup routes
#[derive(Debug, Serialize)]
pub struct LookupResponse {
    pub data: CanonicalIdentity,
}
