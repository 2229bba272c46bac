pub mod bot_challenge;
pub mod credential;
pub mod request_metrics;
