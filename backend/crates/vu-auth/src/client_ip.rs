use std::net::IpAddr;

/// Caller address as reported to the challenge service: the first
/// `X-Forwarded-For` entry when present, else the socket peer.
pub fn client_ip(forwarded_for: Option<&str>, peer: Option<IpAddr>) -> Option<String> {
    forwarded_for
        .and_then(|value| value.split(',').next())
        .map(str::trim)
        .filter(|first| !first.is_empty())
        .map(str::to_string)
        .or_else(|| peer.map(|ip| ip.to_string()))
}
