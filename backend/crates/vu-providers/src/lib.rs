//! Adapters for the external identity providers (Mojang, Discord, Hypixel)
//! and the bot-challenge verification service.
//!
//! Every adapter is a single request/response mapping: no retry, no
//! backoff, no caching. A failed call surfaces immediately as a
//! [`ProviderError`] naming the provider it came from.

mod discord_client;
mod endpoint;
mod error;
mod hypixel_client;
mod mojang_client;
mod provider;
mod providers;
mod turnstile_client;


pub use discord_client::DiscordClient;
pub use error::{ProviderError, Result as ProviderResult};
pub use hypixel_client::HypixelClient;
pub use mojang_client::MojangClient;
pub use provider::Provider;
pub use providers::{Providers, http_client};
pub use turnstile_client::{TurnstileClient, TurnstileVerdict};

const USER_AGENT: &str = concat!("vu-server/", env!("CARGO_PKG_VERSION"));
