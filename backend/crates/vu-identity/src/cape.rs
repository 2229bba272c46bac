use vu_core::TexturePayload;

use log::warn;

/// Cape identifier for a `textures` property value: the texture hash at the
/// end of `textures.CAPE.url`, or `None` when no cape is equipped.
///
/// An undecodable value is logged and treated as "no cape".
pub fn cape_variant(texture_value: &str) -> Option<String> {
    match TexturePayload::decode(texture_value) {
        Ok(payload) => payload.cape_id(),
        Err(e) => {
            warn!("Ignoring undecodable texture property: {}", e);
            None
        }
    }
}
