use crate::{Provider, ProviderError, ProviderResult};

use std::panic::Location;

use error_location::ErrorLocation;
use reqwest::Url;

/// Join `segments` onto `base`, percent-encoding each one.
#[track_caller]
pub(crate) fn endpoint(provider: Provider, base: &str, segments: &[&str]) -> ProviderResult<Url> {
    let invalid = || ProviderError::InvalidUrl {
        provider,
        url: base.to_string(),
        location: ErrorLocation::from(Location::caller()),
    };

    let mut url = Url::parse(base).map_err(|_| invalid())?;
    url.path_segments_mut()
        .map_err(|_| invalid())?
        .pop_if_empty()
        .extend(segments);

    Ok(url)
}
