//! Request gates: the capability-scoped credential check in front of the
//! `/user` routes and the bot-challenge check in front of the lookups.

pub mod bot_challenge_gate;
pub mod client_ip;
pub mod credential_gate;
pub mod credential_source;
pub mod error;
pub mod required_permission;

pub use bot_challenge_gate::{BotChallengeGate, CHALLENGE_TOKEN_FIELD};
pub use client_ip::client_ip;
pub use credential_gate::CredentialGate;
pub use credential_source::{extract_token, redact};
pub use error::{AuthError, Result as AuthErrorResult};
pub use required_permission::required_permission;
